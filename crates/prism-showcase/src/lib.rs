//! The project showcase and the page's 2D motion.
//!
//! Content loading, the navigator state machine and the controller that
//! runs its effects against the 3D [`prism_scene::ShowcaseScene`], plus the
//! overlay components around it: lightbox, gradient backdrop, skill bars
//! and staggered entrances.

pub mod backdrop;
pub mod content;
pub mod controller;
pub mod entrance;
pub mod lightbox;
pub mod navigator;
pub mod skills;
pub mod source;
pub mod stage;

pub use backdrop::{choose_palette, GradientBackdrop};
pub use content::{load_content, Content, Project, ShowcaseStatus, Skill, SkillGroup};
pub use controller::ShowcaseController;
pub use lightbox::Lightbox;
pub use navigator::{NavEffect, NavInput, NavState, Navigator, SelectMode, Step};
pub use skills::SkillBoard;
pub use source::{FileSource, GradientSource, TextureSource};
pub use stage::{Element, ElementId, ElementProp, Overlay, Stage, StageEvent};
