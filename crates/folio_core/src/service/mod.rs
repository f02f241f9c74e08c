//! Use-case facade over store, router, and renderer.
//!
//! # Responsibility
//! - Provide the single dispatch point UI surfaces talk to.
//!
//! # Invariants
//! - Every mutation enters through `SiteSession::handle`.

pub mod session;
