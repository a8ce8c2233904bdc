//! PresentationML document model, serialization and parsing.

pub mod package;
pub mod presentation;
pub(crate) mod reader;
pub mod shapes;
pub mod slide;
pub mod template;
pub mod writer;

pub use presentation::Presentation;
pub use slide::Slide;
