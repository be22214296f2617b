//! Notebook templates: the built-in Quarto body, user template files, and
//! `{{placeholder}}` rendering.

pub mod engine;
pub mod repository;

pub use engine::{REQUIRED_KEYS, RenderContext, TemplateRenderError, placeholders, render};
pub use repository::{LoadedTemplate, TemplateRepoError};
