//! Slide model.
use crate::common::error::{Error, Result};
use crate::pptx::shapes::{ImageFormat, Shape, ShapeKind, Table, TextFrame};
use std::collections::HashMap;

/// A slide in a presentation, owning an ordered sequence of shapes.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID, unique within the presentation
    pub(crate) slide_id: u32,
    /// Index into the fixed slide layout set
    pub(crate) layout: usize,
    /// Shapes in storage order
    pub(crate) shapes: Vec<Shape>,
    /// Next shape ID; 1 is reserved for the group root
    next_shape_id: u32,
}

impl Slide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32, layout: usize) -> Self {
        Self {
            slide_id,
            layout,
            shapes: Vec::new(),
            // IDs: 1 = spTree group root, 2+ = shapes
            next_shape_id: 2,
        }
    }

    /// Build a slide from parsed shapes. Used by the package reader.
    pub(crate) fn from_parts(slide_id: u32, layout: usize, shapes: Vec<Shape>) -> Self {
        let next_shape_id = shapes.iter().map(|s| s.id() + 1).max().unwrap_or(2);
        Self {
            slide_id,
            layout,
            shapes,
            next_shape_id,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Index of the slide's layout in the fixed layout set.
    pub fn layout(&self) -> usize {
        self.layout
    }

    /// Shapes in storage order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Build the name-to-position mapping for the slide's shapes.
    ///
    /// Enumeration order is shape storage order; when two shapes share a
    /// name, the later shape's position wins.
    pub fn shape_names(&self) -> HashMap<String, usize> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name().to_string(), i))
            .collect()
    }

    /// Resolve a shape name to its 0-based position.
    pub fn position_of(&self, name: &str) -> Result<usize> {
        self.shape_names()
            .get(name)
            .copied()
            .ok_or_else(|| Error::ShapeName(name.to_string()))
    }

    /// Access a shape by its 0-based position.
    pub fn shape(&self, position: usize) -> Result<&Shape> {
        self.shapes.get(position).ok_or(Error::ShapeIndex {
            index: position,
            count: self.shapes.len(),
        })
    }

    /// Mutable access to a shape by its 0-based position.
    pub fn shape_mut(&mut self, position: usize) -> Result<&mut Shape> {
        let count = self.shapes.len();
        self.shapes.get_mut(position).ok_or(Error::ShapeIndex {
            index: position,
            count,
        })
    }

    fn take_shape_id(&mut self) -> u32 {
        let id = self.next_shape_id;
        self.next_shape_id += 1;
        id
    }

    /// Add an empty text box to the slide. Position and size in EMUs.
    pub fn add_textbox(
        &mut self,
        x: i64,
        y: i64,
        cx: i64,
        cy: i64,
        name: Option<&str>,
    ) -> &mut Shape {
        let id = self.take_shape_id();
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| format!("TextBox {id}"));
        self.shapes.push(Shape::new(
            id,
            name,
            x,
            y,
            cx,
            cy,
            ShapeKind::TextBox(TextFrame::new()),
        ));
        self.shapes.last_mut().unwrap()
    }

    /// Add a picture to the slide from image bytes. Position and size in EMUs.
    pub fn add_picture(
        &mut self,
        data: Vec<u8>,
        format: ImageFormat,
        x: i64,
        y: i64,
        cx: i64,
        cy: i64,
        description: String,
    ) -> &mut Shape {
        let id = self.take_shape_id();
        let name = format!("Picture {id}");
        self.shapes.push(Shape::new(
            id,
            name,
            x,
            y,
            cx,
            cy,
            ShapeKind::Picture {
                data,
                format,
                description,
            },
        ));
        self.shapes.last_mut().unwrap()
    }

    /// Add an empty table to the slide. Position and size in EMUs; the
    /// width and height are distributed evenly across the grid. A zero
    /// row or column count is rejected.
    pub fn add_table(
        &mut self,
        rows: usize,
        cols: usize,
        x: i64,
        y: i64,
        cx: i64,
        cy: i64,
        name: Option<&str>,
    ) -> Result<&mut Shape> {
        let table = Table::new(rows, cols, cx, cy)?;
        let id = self.take_shape_id();
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| format!("Table {id}"));
        self.shapes.push(Shape::new(
            id,
            name,
            x,
            y,
            cx,
            cy,
            ShapeKind::Table(table),
        ));
        Ok(self.shapes.last_mut().unwrap())
    }
}
