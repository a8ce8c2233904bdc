//! XML emission for PresentationML parts.

pub mod pres;
pub mod slide;

pub use pres::presentation_xml;
pub use slide::{SlideRelIds, slide_xml};
