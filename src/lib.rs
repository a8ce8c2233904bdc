//! Rambutan - A Rust library for creating and editing PowerPoint presentations
//!
//! This library builds .pptx files from scratch or edits existing ones
//! through a small document model plus a convenience facade. Slides are
//! addressed by 1-based index, shapes by name or 0-based position, spatial
//! parameters are taken in centimeters and font sizes in points.
//!
//! # Features
//!
//! - **SlideEditor facade**: add slides, text boxes, pictures and tables
//!   with one call each
//! - **Styled text**: bold, italic, underline, size, font family, color,
//!   hyperlinks, indentation level and alignment
//! - **Tables**: grid construction, per-cell text and fills, cell merging
//! - **Named colors**: the symbolic palette (blue, orange, green, red,
//!   black, white, yellow) or explicit RGB tuples
//! - **Round-tripping**: presentations written by this library can be
//!   reopened and edited further
//!
//! # Example - Building a presentation
//!
//! ```no_run
//! use rambutan::{Color, SlideEditor, TextOptions};
//!
//! # fn main() -> rambutan::Result<()> {
//! let mut editor = SlideEditor::new();
//! editor.add_slide(6)?; // blank layout
//! editor.add_textbox(1, 1.0, 1.0, 5.0, 2.0, Some("box1"))?;
//! editor.edit_text(1, "box1", "Hello", &TextOptions {
//!     color: Color::from("blue"),
//!     size: 24.0,
//!     ..TextOptions::default()
//! })?;
//! editor.save("hello.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Editing an existing file
//!
//! ```no_run
//! use rambutan::SlideEditor;
//!
//! # fn main() -> rambutan::Result<()> {
//! let mut editor = SlideEditor::open("deck.pptx")?;
//! for slide in 1..=editor.num_slides() {
//!     println!("slide {}: {} shapes", slide, editor.num_shapes(slide)?);
//! }
//! editor.save("deck-out.pptx")?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod editor;
pub mod opc;
pub mod pptx;

pub use common::color::{Color, RGBColor};
pub use common::error::{Error, Result};
pub use editor::{ShapeRef, SlideEditor, TextOptions};
pub use pptx::shapes::Alignment;
pub use pptx::{Presentation, Slide};
