use folio_core::{Category, Tab, View, ViewState};

#[test]
fn default_state_shows_the_about_shell() {
    let state = ViewState::new();
    assert_eq!(state.current_view(), View::Shell(Tab::About));
    assert_eq!(state.selected_project(), None);
    assert_eq!(state.selected_experience(), None);
    assert!(state.selected_categories().is_empty());
}

#[test]
fn detail_selections_are_mutually_exclusive() {
    let mut state = ViewState::new();

    state.select_project(1);
    state.select_experience(2);
    assert_eq!(state.selected_project(), None);
    assert_eq!(state.current_view(), View::ExperienceDetail(2));

    state.select_project(9);
    assert_eq!(state.selected_experience(), None);
    assert_eq!(state.current_view(), View::ProjectDetail(9));
}

#[test]
fn back_from_project_always_lands_on_the_projects_tab() {
    for entry_tab in Tab::ALL {
        let mut state = ViewState::new();
        state.select_tab(entry_tab);
        state.select_project(7);
        state.back_from_project();
        assert_eq!(state.current_view(), View::Shell(Tab::Projects));
    }
}

#[test]
fn back_from_experience_preserves_the_prior_tab() {
    let mut state = ViewState::new();
    state.select_tab(Tab::Experience);

    state.select_project(1);
    state.select_experience(2);
    state.back_from_experience();

    // Unlike project back-navigation, the tab from before the detour wins.
    assert_eq!(state.current_view(), View::Shell(Tab::Experience));
}

#[test]
fn tab_switches_are_ignored_while_a_detail_view_is_active() {
    let mut state = ViewState::new();
    state.select_tab(Tab::Projects);
    state.select_project(3);

    state.select_tab(Tab::Blog);
    assert_eq!(state.current_view(), View::ProjectDetail(3));

    state.back_from_project();
    state.select_tab(Tab::Blog);
    assert_eq!(state.current_view(), View::Shell(Tab::Blog));
}

#[test]
fn back_transitions_are_noops_outside_their_detail_state() {
    let mut state = ViewState::new();
    state.select_tab(Tab::Resume);

    state.back_from_project();
    assert_eq!(state.current_view(), View::Shell(Tab::Resume));

    state.back_from_experience();
    assert_eq!(state.current_view(), View::Shell(Tab::Resume));
}

#[test]
fn toggle_category_adds_then_removes() {
    let mut state = ViewState::new();

    state.toggle_category(Category::MachineLearning);
    state.toggle_category(Category::Medical);
    assert_eq!(state.selected_categories().len(), 2);

    state.toggle_category(Category::MachineLearning);
    assert!(!state
        .selected_categories()
        .contains(&Category::MachineLearning));
    assert!(state.selected_categories().contains(&Category::Medical));
}

#[test]
fn filter_selection_survives_detail_round_trips() {
    let mut state = ViewState::new();
    state.toggle_category(Category::Research);

    state.select_project(8);
    state.back_from_project();

    assert!(state.selected_categories().contains(&Category::Research));
}
