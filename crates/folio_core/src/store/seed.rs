//! Built-in site content.
//!
//! # Responsibility
//! - Define the authored profile, project, and experience payload.
//! - Construct and validate it exactly once per process.
//!
//! # Invariants
//! - Ids are hand-assigned and stable; never renumber an existing entry.
//! - The payload must pass `ContentStore::new` validation.

use crate::model::category::Category;
use crate::model::content::{CaptionedImage, ContentBlock, ImageSize};
use crate::model::experience::{Experience, ProjectLink};
use crate::model::profile::{ContactLink, Profile, ResumeDoc};
use crate::model::project::Project;
use crate::store::content_store::ContentStore;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<ContentStore> = Lazy::new(|| {
    ContentStore::new(profile(), projects(), experiences()).expect("valid built-in site content")
});

/// The built-in store, constructed on first access.
pub fn builtin() -> &'static ContentStore {
    &BUILTIN
}

fn profile() -> Profile {
    Profile {
        name: "Nishan Shehadeh".to_string(),
        tagline: "Software Engineer | M.S. Computer Science".to_string(),
        photo: Some("/profile/hs.png".to_string()),
        contacts: vec![
            ContactLink::new("GitHub", "https://github.com/nshehadeh"),
            ContactLink::new("Email", "mailto:nishan.g.shehadeh@gmail.com"),
            ContactLink::new("LinkedIn", "https://www.linkedin.com/in/nishan-shehadeh/"),
        ],
        resume: ResumeDoc {
            path: "/resume/nishan-shehadeh-resume.pdf".to_string(),
            note: Some("Not up to date".to_string()),
        },
        about: vec![
            ContentBlock::paragraph(
                "I'm a full-stack software engineer at AviaryAI, a YC-backed startup \
                 developing AI voice agents for the financial industry. I hold a BS and MS \
                 in Computer Science from Vanderbilt University, where I specialized in \
                 machine learning and mixed reality.",
            ),
            ContentBlock::paragraph(
                "At Vanderbilt, my research included work in a biomedical engineering lab, \
                 where I developed a CUDA kernel for real-time ultrasound guidance and \
                 applied deep learning to enhance ultrasound image quality. I also have \
                 published research on variational autoencoders (VAEs) and perception in \
                 augmented reality, the latter being the focus of my Master's thesis. \
                 Additionally, I have industry experience applying generative AI to \
                 real-world challenges at Accenture Federal Services.",
            ),
            ContentBlock::paragraph(
                "After completing my accelerated Master's program at Vanderbilt, I \
                 backpacked across Africa and Asia.",
            ),
            ContentBlock::image_row([
                CaptionedImage::new("/about/img3.jpeg", Some("Tanzania")),
                CaptionedImage::new("/about/img2.jpeg", Some("Nepal")),
                CaptionedImage::new("/about/img1.jpeg", Some("Laos")),
            ]),
        ],
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "PolicyAI".to_string(),
            preview: "Full stack chatbot and document search powered by LLM agents to \
                      answer questions on federal policies"
                .to_string(),
            preview_image: Some("/projects/policy-bot/policybot.gif".to_string()),
            ongoing: true,
            repo_link: Some("https://github.com/nshehadeh/policy-bot".to_string()),
            content: vec![
                ContentBlock::paragraph(
                    "PolicyAI is a full-stack chatbot powered by large language models \
                     (LLMs) and retrieval-augmented generation (RAG), designed to make \
                     U.S. government policies more accessible to the public. Currently, \
                     PolicyAI draws from White House \"Briefing Room\" documents \
                     (speeches, interviews, press briefings, and more) using an agentic \
                     workflow built on LangGraph to process user queries. The system adds \
                     context to queries based on chat history, rewrites questions to \
                     improve search accuracy, and grades retrieved documents for \
                     relevency before generating a final answer. Originally, I created \
                     PolicyAI to provide users with easy access to legislative and policy \
                     information through Q&A and document search, inspired by how LLMs \
                     can rapidly organize large amounts of unstructured data and present \
                     information in digestible formats.",
                ),
                ContentBlock::image(
                    "/projects/policy-bot/policybot.gif",
                    Some("PolicyAI Chat Example"),
                ),
                ContentBlock::paragraph(
                    "The web application is built on a Django backend and a React \
                     frontend. The Django backend defines a REST API that connects to a \
                     RAG system powered by LangGraph, which retrieves and processes data \
                     to provide responses. LangChain works with a Pinecone vector \
                     database to search document chunks for relevance, enhancing \
                     responses with custom system prompts and chat history. User data, \
                     including chat histories, is stored in PostgreSQL through Django's \
                     ORM, while MongoDB stores full documents for the LLM to reference as \
                     needed. I compiled the initial dataset by scraping White House \
                     documents using Python scripts with BeautifulSoup. I also used \
                     Django channels to implement a WebSocket connection, which streams \
                     responses to the frontend in real time, creating a more natural chat \
                     experience.",
                ),
                ContentBlock::paragraph(
                    "I have large plans for the future of PolicyAI, including developing \
                     a knowledge graph that holds information for relationships between \
                     legislation, executive orders, and other policy documents. This \
                     would give the system a more comprehensive understanding of the U.S. \
                     government's policies and how they relate to each other, improving \
                     RAG and the system's ability to hand broad questions, and deliver my \
                     analysis connecting different policy ideas. Please check out the \
                     GitHub repository for more information and to see the codebase as I \
                     continue adding new features and preparing to launch the MVP.",
                ),
            ],
            categories: vec![Category::FullStack, Category::Llms],
        },
        Project {
            id: 9,
            title: "BEAM Lab, Acoustic Window Detection & Image Quality Deep Learning"
                .to_string(),
            preview: "Research done in Vanderbilt's Institute for Surgery and Engineering"
                .to_string(),
            preview_image: Some("/projects/ultrasound/demo.gif".to_string()),
            ongoing: false,
            repo_link: None,
            content: vec![
                ContentBlock::image(
                    "/projects/ultrasound/demo.gif",
                    Some(
                        "Real-time GUI assisting with probe placement during live \
                         transcranial ultrasound",
                    ),
                ),
                ContentBlock::paragraph(
                    "My work in Vanderbilt's Institute for Surgery and Engineering (VISE) \
                     in Dr. Brett Byram's BEAM Lab began as a 10-week summer internship \
                     as a researcher under PhD student Emelina Vienneau. Emelina's \
                     research focuses on enabling transcranial ultrasound imaging of the \
                     brain. I independently developed an acoustic window detection system \
                     that calculates the lag-one coherence of ultrasound images in \
                     real-time. Lag-one coherence serves as a metric for evaluating image \
                     quality at a specific point. My software processed real-time \
                     ultrasound images, computed the lag-one coherence, and displayed \
                     results via a GUI to guide the probe operator. The system was \
                     implemented on a Verasonics ultrasound machine, using MATLAB, MEX \
                     (MATLAB's C interface), and CUDA for GPU processing.",
                ),
                ContentBlock::sized_image(
                    "/projects/ultrasound/present.png",
                    Some("Presenting my work at the VISE summer conference"),
                    ImageSize::Medium,
                ),
                ContentBlock::paragraph(
                    "After presenting my work, I continued as a lab researcher for an \
                     additional year, optimizing the acoustic window detection algorithm \
                     through different thread and block configurations. I also worked on \
                     a deep learning project to artificially improve ultrasound image \
                     quality post-collection. Using data from Emelina's work on coded \
                     excitation, a technique used to increase the signal-to-noise ratio \
                     (SNR) of an ultrasound image during collection, I tested different \
                     CNN-based, deep learning architectures to artificially apply the \
                     same effect on previously collected data. My work resulted in some \
                     promising initial results, increasing SNR in phantom data by 15% \
                     using a UNET.",
                ),
            ],
            categories: vec![
                Category::Research,
                Category::MachineLearning,
                Category::Medical,
                Category::ComputerVision,
            ],
        },
        Project {
            id: 2,
            title: "XROG: Extended Reality Object Generation".to_string(),
            preview: "Interactive AR environment that allows users to generate virtual \
                      objects with 3D sketches"
                .to_string(),
            preview_image: Some("/projects/xrog/gif_clip.gif".to_string()),
            ongoing: false,
            repo_link: Some("https://github.com/nshehadeh/xrog".to_string()),
            content: vec![
                ContentBlock::paragraph(
                    "XROG is an interactive object generation system for augmented \
                     reality (AR) developed on Microsoft's HoloLens2. The system allows \
                     for real-time hand tracking and custom gesture recognition to \
                     classify 3D sketches drawn by users, which are then used to generate \
                     virtual 3D objects within an AR environment. I built a end-to-end \
                     machine learning system including data collection, model training, \
                     and real-time deployment. Using Unity and Microsoft's Mixed Reality \
                     Toolkit, I created a dataset by tracking hand sketches that capture \
                     various shapes, saved as sparse 3D point clouds. To make the data \
                     model-ready, I resampled, normalized, and applied augmentations like \
                     translations, rotations, and noise, increasing the dataset size and \
                     robustness.",
                ),
                ContentBlock::image("/projects/xrog/gif_clip.gif", Some("XROG in Action")),
                ContentBlock::paragraph(
                    "After data processing, I trained a SVM to classify these 3D sketches \
                     into object categories: swords, shields, and stars. I deployed the \
                     model via a RESTful API using Flask and hosted on Heroku's cloud to \
                     handle real-time inference requests through the Unity application. \
                     This setup enabled users to draw gestures in real-time, have their \
                     input classified, and see the corresponding 3D object generated in \
                     the AR scene. The Unity application integrates seamlessly with the \
                     cloud service, creating an intuitive and interactive AR experience \
                     that showcases real-time object generation. The full report and code \
                     for this project are available on my GitHub.",
                ),
            ],
            categories: vec![
                Category::MixedReality,
                Category::FullStack,
                Category::ComputerVision,
                Category::MachineLearning,
            ],
        },
        Project {
            id: 8,
            title: "SUDS: Image Steganography Sanitizer".to_string(),
            preview: "VAE-based framework for removing hidden data from images".to_string(),
            preview_image: Some("/projects/suds/prev.jpg".to_string()),
            ongoing: false,
            repo_link: Some("https://github.com/pkrobinette/suds-ecai-2023".to_string()),
            content: vec![
                ContentBlock::paragraph(
                    "This work, which I helped build with a team of PhDs as part of an \
                     extended class project studying Representation Learning, was \
                     published in ECAI and addresses the limitations of traditional \
                     steganography detection methods by proposing a novel sanitization \
                     framework called SUDS (Sanitizing Universal and Dependent \
                     Steganography). Steganography, the practice of hiding information \
                     within digital media, poses challenges for detection, particularly \
                     with advanced hiding techniques like deep-learning-based dependent \
                     and universal methods. Most existing detection methods rely on \
                     recognizing specific hiding patterns, making them ineffective \
                     against novel or unseen methods.",
                ),
                ContentBlock::image(
                    "/projects/suds/sudsmodel.png",
                    Some(
                        "SUDs Architecture. C is the original image which hides secret \
                         S. The secret is sanitized using a VAE.",
                    ),
                ),
                ContentBlock::paragraph(
                    "To address this, we designed SUDS as a variational autoencoder (VAE) \
                     model capable of sanitizing digital images embedded with hidden \
                     information without relying on prior knowledge of the hiding method. \
                     Through experimentation, we demonstrated that SUDS effectively \
                     removes embedded messages from images across multiple steganography \
                     techniques, preserving image quality better than noise-based \
                     sanitization methods. Additionally, applying SUDS to a data \
                     poisoning scenario increased classifier resistance to adversarial \
                     attacks from 88.31% to 0.72%, proving its robustness and \
                     versatility. Full details are available in the published paper, and \
                     the code can be accessed on the first author's GitHub.",
                ),
                ContentBlock::sized_image(
                    "/projects/suds/results.png",
                    Some(
                        "Example results using SUDs. Using 3 hiding techniques (a,b,c). \
                         An image C is combined with a secret S to create C'. After being \
                         sanitized, S-hat is no longer discernible",
                    ),
                    ImageSize::Small,
                ),
            ],
            categories: vec![Category::Research, Category::MachineLearning],
        },
        Project {
            id: 3,
            title: "Surgical Gesture and Skill Recognition".to_string(),
            preview: "Contrastive learning for surgical skill assessment using surgical \
                      videos and robot kinematics"
                .to_string(),
            preview_image: Some("/projects/contrastive/images.jpg".to_string()),
            ongoing: false,
            repo_link: Some(
                "https://github.com/nshehadeh/contrastive-gesture-skill".to_string(),
            ),
            content: vec![
                ContentBlock::paragraph(
                    "This work implements a contrastive learning framework for gesture \
                     and skill recognition, focusing on modeling latent space \
                     representations from endoscope images captured during robot-assisted \
                     surgery. Building on Wu et al.'s encoder-decoder structure, I \
                     introduced contrastive learning techniques to improve the \
                     separability of the embedding space, allowing for more effective \
                     classification of surgical gestures and skills. I explored different \
                     contrastive learning models, starting with data augmentation-based \
                     contrastive learning using optical flow data, followed by \
                     incorporating kinematic data for sample pairing, and finally a \
                     time-invariant model using Fourier transforms. Each model was \
                     designed to push similar gestures closer in the embedding space \
                     while increasing the separation of distinct gestures.",
                ),
                ContentBlock::image(
                    "/projects/contrastive/model.png",
                    Some(
                        "Model Architecture for Contrastive Model Using Kinematics for \
                         Positive and Negative Samples",
                    ),
                ),
                ContentBlock::paragraph(
                    "Throughout the project, I created positive and negative sample \
                     pairs, applied contrastive loss functions, and incorporated triplet \
                     loss to enhance the discriminative power of the embeddings. Once \
                     trained, the models were evaluated for classification accuracy and \
                     visualized through UMAP projections, highlighting gesture, skill, \
                     and user clusters. While contrastive learning did not produce the \
                     expected accuracy improvements—likely due to the small dataset size, \
                     the embeddings reveal insights into skill variations across users. \
                     Future iterations could refine the model structure and use larger \
                     datasets for better generalization. The full report and code are \
                     available on my GitHub.",
                ),
                ContentBlock::image_row([
                    CaptionedImage::new(
                        "/projects/contrastive/gesture.png",
                        Some("Surgical Gesture UMAP for Kinematic Contrastive Model"),
                    ),
                    CaptionedImage::new(
                        "/projects/contrastive/skill.png",
                        Some("Surgical Skill UMAP for Kinematic Contrastive Model"),
                    ),
                ]),
            ],
            categories: vec![
                Category::MachineLearning,
                Category::ComputerVision,
                Category::Medical,
            ],
        },
        Project {
            id: 7,
            title: "Investigation of Presence in AR".to_string(),
            preview: "Master's Thesis building a HoloLens2 research platform for a user \
                      study on plausibility in AR"
                .to_string(),
            preview_image: Some("/projects/thesis/full_scene.png".to_string()),
            ongoing: false,
            repo_link: Some("https://github.com/nshehadeh/ar_presence".to_string()),
            content: vec![
                ContentBlock::paragraph(
                    "My thesis investigates the factors contributing to a sense of \
                     presence in augmented reality (AR) by adapting principles from \
                     virtual reality (VR) and applying psychophysical methods. I \
                     conducted a user study in a controlled AR environment on the \
                     Hololens 2 headset, where participants interacted with virtual \
                     objects under different configurations. The study systematically \
                     varied three essential factors to user perception in AR: interaction \
                     level, physics (e.g., gravity and collisions), and shadow realism. \
                     Using a Markov chain to analyze transition choices and a budgeting \
                     task to prioritize enhancements, I assessed which configurations led \
                     to the highest sense of realism. My results highlighted that \
                     realistic, interactive components were essential, with gravity \
                     emerging as a strong anchor for plausibility, followed by \
                     user-applied physics.",
                ),
                ContentBlock::image(
                    "/projects/thesis/full_scene.png",
                    Some("Virtual Environment"),
                ),
                ContentBlock::paragraph(
                    "In addition to capturing user preferences through configuration \
                     transitions and budgets, I included questionnaires to quantify \
                     plausibility levels, capturing how participants felt about object \
                     behavior in relation to real-world expectations. Findings showed \
                     that even basic interaction significantly enhanced plausibility, \
                     while more advanced features, like realistic shadows, were valued \
                     for enhancing spatial perception but deemed secondary to physics and \
                     interaction. These results inform AR design by emphasizing the \
                     importance of functional fidelity, where realistic physics and \
                     baseline interaction heighten user presence and immersion. The full \
                     thesis and code are available on my GitHub.",
                ),
                ContentBlock::image_row([
                    CaptionedImage::new(
                        "/projects/thesis/steven.png",
                        Some("A user interacting with the AR basketballs"),
                    ),
                    CaptionedImage::new(
                        "/projects/thesis/transitiongraph.png",
                        Some(
                            "Most common path chosen for transitions. {x, y, z} | x = \
                             interaction level, y = physics level, z = shadow level",
                        ),
                    ),
                ]),
            ],
            categories: vec![Category::Research, Category::MixedReality],
        },
    ]
}

fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: 0,
            title: "Software Engineer".to_string(),
            organization: "AviaryAI".to_string(),
            period: "February 2025 - Present".to_string(),
            preview: "Software engineer building AI voice agent tools for financial \
                      institutions"
                .to_string(),
            achievements: vec![
                "AI/ML/Backend engineer for voice agent and knowledge base platforms"
                    .to_string(),
                "YC-backed startup based in NYC".to_string(),
            ],
            logo: Some("/experiences/aviary.png".to_string()),
            project_links: vec![],
        },
        Experience {
            id: 1,
            title: "Machine Learning Engineer Intern".to_string(),
            organization: "Accenture Federal Services (AFS)".to_string(),
            period: "May 2022 - August 2022".to_string(),
            preview: "Member of AFS's Machine Learning Research Division".to_string(),
            achievements: vec![
                "Conducted research on the application and adaptation of emerging AI \
                 technologies for federal services"
                    .to_string(),
                "Implemented CLIP-GEN to synthesize images to improve hotel \
                 classification in human trafficking photographs"
                    .to_string(),
                "Used AWS EC2 for scalable data preprocessing and distributed multi-GPU \
                 training to reduce model training time"
                    .to_string(),
                "Fine-tuned CLIP to learn latent state representations of hotel picture \
                 and location pairs using HuggingFace, resulting in 98% accuracy \
                 classifying hotel chains and the generation of basic synthetic images"
                    .to_string(),
            ],
            logo: Some("/experiences/afs-logo.jpg".to_string()),
            project_links: vec![],
        },
        Experience {
            id: 2,
            title: "VISE Researcher".to_string(),
            organization: "BEAM Lab, Vanderbilt University".to_string(),
            period: "May 2021 - May 2022".to_string(),
            preview: "Researcher in Biomedical Elasticity and Acoustic Measurement Lab"
                .to_string(),
            achievements: vec![
                "Implemented a backend system and GUI to facilitate live ultrasound \
                 placement on patients"
                    .to_string(),
                "Engineered an acoustic window detection algorithm using MATLAB, MEX, \
                 and CUDA (C) for efficient real-time ultrasound analysis on beamformed \
                 data"
                    .to_string(),
                "Improved ultrasound image quality with UNET, achieving 15% average SNR \
                 gains on phantom RF data"
                    .to_string(),
            ],
            logo: Some("/experiences/vise-logo.png".to_string()),
            project_links: vec![ProjectLink::new(9, "More Details on BEAM Lab Research")],
        },
    ]
}
