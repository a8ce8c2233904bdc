//! Shape types for the presentation document model.

pub mod picture;
pub mod table;
pub mod textframe;

pub use picture::{ImageFormat, natural_size_px};
pub use table::{Cell, Table};
pub use textframe::{Alignment, Paragraph, Run, RunProperties, TextFrame};

use crate::common::color::RGBColor;

/// The concrete kind of a shape.
#[derive(Debug, Clone)]
pub enum ShapeKind {
    /// A text box (`p:sp` with a `txBody`)
    TextBox(TextFrame),
    /// An embedded picture (`p:pic`)
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        description: String,
    },
    /// A graphic frame holding a table (`p:graphicFrame` with `a:tbl`)
    Table(Table),
}

/// A drawable element on a slide, addressable by name or position.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Shape ID, unique within the slide
    pub(crate) id: u32,
    /// Shape name; not guaranteed unique within a slide
    pub(crate) name: String,
    /// X position in EMUs
    pub x: i64,
    /// Y position in EMUs
    pub y: i64,
    /// Width in EMUs
    pub cx: i64,
    /// Height in EMUs
    pub cy: i64,
    /// Solid background fill, if set
    pub fill: Option<RGBColor>,
    pub kind: ShapeKind,
}

impl Shape {
    pub(crate) fn new(id: u32, name: String, x: i64, y: i64, cx: i64, cy: i64, kind: ShapeKind) -> Self {
        Self {
            id,
            name,
            x,
            y,
            cx,
            cy,
            fill: None,
            kind,
        }
    }

    /// Shape ID, unique within its slide.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Shape name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the shape owns a table.
    pub fn has_table(&self) -> bool {
        matches!(self.kind, ShapeKind::Table(_))
    }

    /// The shape's table, if it owns one.
    pub fn table(&self) -> Option<&Table> {
        match &self.kind {
            ShapeKind::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Mutable access to the shape's table, if it owns one.
    pub fn table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.kind {
            ShapeKind::Table(table) => Some(table),
            _ => None,
        }
    }

    /// The shape's text frame, if it has one. Pictures and tables have no
    /// shape-level text frame.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.kind {
            ShapeKind::TextBox(tf) => Some(tf),
            _ => None,
        }
    }

    /// Mutable access to the shape's text frame, if it has one.
    pub fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        match &mut self.kind {
            ShapeKind::TextBox(tf) => Some(tf),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_accessors() {
        let text_box = Shape::new(2, "Box".into(), 0, 0, 10, 10, ShapeKind::TextBox(TextFrame::new()));
        assert!(text_box.text_frame().is_some());
        assert!(!text_box.has_table());
        assert!(text_box.table().is_none());

        let table = Shape::new(
            3,
            "Grid".into(),
            0,
            0,
            10,
            10,
            ShapeKind::Table(Table::new(2, 2, 10, 10).unwrap()),
        );
        assert!(table.has_table());
        assert!(table.text_frame().is_none());
    }
}
