//! High-level editing facade.
//!
//! [`SlideEditor`] wraps a [`Presentation`] behind a small set of
//! convenience methods: slides are addressed by 1-based index, shapes by
//! name or 0-based position, spatial parameters are taken in centimeters
//! and font sizes in points. Every method resolves its target, applies the
//! mutation and returns; failures surface immediately as [`Error`] values.

use crate::common::color::Color;
use crate::common::error::{Error, Result};
use crate::common::unit::{cm_to_emu, px_to_emu_96};
use crate::pptx::Presentation;
use crate::pptx::package;
use crate::pptx::shapes::{Alignment, ImageFormat, Run, TextFrame, natural_size_px};
use crate::pptx::slide::Slide;
use std::collections::HashMap;
use std::path::Path;

/// A reference to a shape on a slide, by name or by 0-based position.
///
/// Name lookup enumerates the slide's shapes in storage order; when two
/// shapes share a name, the later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeRef {
    ByName(String),
    ByPosition(usize),
}

impl From<&str> for ShapeRef {
    fn from(name: &str) -> Self {
        Self::ByName(name.to_string())
    }
}

impl From<String> for ShapeRef {
    fn from(name: String) -> Self {
        Self::ByName(name)
    }
}

impl From<usize> for ShapeRef {
    fn from(position: usize) -> Self {
        Self::ByPosition(position)
    }
}

/// Styling applied by [`SlideEditor::edit_text`].
///
/// The defaults mirror plain body text: cleared frame, 32pt black,
/// left-aligned, no emphasis.
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Table cell to write into; requires the target shape to own a table
    pub cell: Option<(usize, usize)>,
    /// Replace existing content instead of appending
    pub clear: bool,
    pub hyperlink: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Font size in points
    pub size: f64,
    /// Font family name; `None` keeps the inherited font
    pub font: Option<String>,
    pub color: Color,
    /// Indentation level, 0 for top-level text
    pub level: u8,
    pub alignment: Alignment,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            cell: None,
            clear: true,
            hyperlink: None,
            bold: false,
            italic: false,
            underline: false,
            size: 32.0,
            font: None,
            color: Color::Rgb(0, 0, 0),
            level: 0,
            alignment: Alignment::Left,
        }
    }
}

/// Convenience facade over a [`Presentation`].
#[derive(Debug, Clone, Default)]
pub struct SlideEditor {
    prs: Presentation,
}

impl SlideEditor {
    /// Create an editor over a new blank presentation.
    pub fn new() -> Self {
        Self {
            prs: Presentation::new(),
        }
    }

    /// Open an existing .pptx file as the starting document.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            prs: package::load(path)?,
        })
    }

    /// The underlying document.
    pub fn presentation(&self) -> &Presentation {
        &self.prs
    }

    /// Mutable access to the underlying document, for edits the facade
    /// does not cover.
    pub fn presentation_mut(&mut self) -> &mut Presentation {
        &mut self.prs
    }

    /// Set the page size in centimeters.
    pub fn set_slide_size(&mut self, width_cm: f64, height_cm: f64) {
        self.prs
            .set_slide_size(cm_to_emu(width_cm), cm_to_emu(height_cm));
    }

    /// Number of slides in the presentation.
    pub fn num_slides(&self) -> usize {
        self.prs.slide_count()
    }

    /// Number of shapes on the given slide (1-based).
    pub fn num_shapes(&self, slide: usize) -> Result<usize> {
        Ok(self.slide(slide)?.shape_count())
    }

    /// Name-to-position mapping for the given slide's shapes (1-based
    /// slide index). Duplicate names map to the later position.
    pub fn shape_names(&self, slide: usize) -> Result<HashMap<String, usize>> {
        Ok(self.slide(slide)?.shape_names())
    }

    /// Append a slide with the given layout (0 through 11; 6 is blank).
    pub fn add_slide(&mut self, layout: usize) -> Result<()> {
        self.prs.add_slide(layout)?;
        Ok(())
    }

    /// Add an image from a file to a slide. Position in centimeters.
    ///
    /// When `width_cm` and `height_cm` are both omitted, the image's
    /// natural pixel size at 96 DPI is used; when only one is given, the
    /// other is scaled to preserve the aspect ratio.
    pub fn add_picture<P: AsRef<Path>>(
        &mut self,
        slide: usize,
        img_path: P,
        left_cm: f64,
        top_cm: f64,
        width_cm: Option<f64>,
        height_cm: Option<f64>,
    ) -> Result<()> {
        let path = img_path.as_ref();
        let data = std::fs::read(path)?;
        let format = ImageFormat::detect_from_bytes(&data)
            .or_else(|| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(ImageFormat::from_extension)
            })
            .ok_or_else(|| {
                Error::InvalidFormat(format!("unsupported image format: {}", path.display()))
            })?;

        let (cx, cy) = picture_extent(&data, path, width_cm, height_cm)?;
        let description = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        self.slide_mut(slide)?.add_picture(
            data,
            format,
            cm_to_emu(left_cm),
            cm_to_emu(top_cm),
            cx,
            cy,
            description,
        );
        Ok(())
    }

    /// Add an empty text box to a slide. Position and size in centimeters.
    pub fn add_textbox(
        &mut self,
        slide: usize,
        left_cm: f64,
        top_cm: f64,
        width_cm: f64,
        height_cm: f64,
        name: Option<&str>,
    ) -> Result<()> {
        self.slide_mut(slide)?.add_textbox(
            cm_to_emu(left_cm),
            cm_to_emu(top_cm),
            cm_to_emu(width_cm),
            cm_to_emu(height_cm),
            name,
        );
        Ok(())
    }

    /// Add a table to a slide. Position and size in centimeters; the
    /// overall size is distributed evenly across the grid.
    #[allow(clippy::too_many_arguments)]
    pub fn add_table(
        &mut self,
        slide: usize,
        rows: usize,
        cols: usize,
        left_cm: f64,
        top_cm: f64,
        width_cm: f64,
        height_cm: f64,
        name: Option<&str>,
    ) -> Result<()> {
        self.slide_mut(slide)?.add_table(
            rows,
            cols,
            cm_to_emu(left_cm),
            cm_to_emu(top_cm),
            cm_to_emu(width_cm),
            cm_to_emu(height_cm),
            name,
        )?;
        Ok(())
    }

    /// Merge the rectangular cell region spanned by two corner coordinates
    /// in a table shape.
    pub fn merge_table_cells(
        &mut self,
        slide: usize,
        shape: impl Into<ShapeRef>,
        origin: (usize, usize),
        spanned: (usize, usize),
    ) -> Result<()> {
        let shape_ref = shape.into();
        let position = self.resolve_position(slide, &shape_ref)?;
        let shape = self.slide_mut(slide)?.shape_mut(position)?;
        let name = shape.name().to_string();
        shape
            .table_mut()
            .ok_or(Error::NotATable(name))?
            .merge(origin, spanned)
    }

    /// Return the text of a shape, or of one table cell when `cell` is
    /// given. Paragraphs are joined with newlines.
    pub fn show_text(
        &self,
        slide: usize,
        shape: impl Into<ShapeRef>,
        cell: Option<(usize, usize)>,
    ) -> Result<String> {
        let shape_ref = shape.into();
        let position = self.resolve_position(slide, &shape_ref)?;
        let shape = self.slide(slide)?.shape(position)?;
        let frame = match cell {
            Some((row, col)) => {
                let name = shape.name().to_string();
                &shape
                    .table()
                    .ok_or(Error::NotATable(name))?
                    .cell(row, col)?
                    .text_frame
            }
            None => {
                let name = shape.name().to_string();
                shape.text_frame().ok_or(Error::NoTextFrame(name))?
            }
        };
        Ok(frame.text())
    }

    /// Write styled text into a shape or table cell.
    ///
    /// The run is appended to the frame's first paragraph; with
    /// `options.clear` set (the default) prior content is removed first.
    pub fn edit_text(
        &mut self,
        slide: usize,
        shape: impl Into<ShapeRef>,
        text: &str,
        options: &TextOptions,
    ) -> Result<()> {
        let color = options.color.normalize()?;
        let shape_ref = shape.into();
        let position = self.resolve_position(slide, &shape_ref)?;
        let frame = self.target_text_frame_mut(slide, position, options.cell)?;

        if options.clear {
            frame.clear();
        }
        let paragraph = frame.first_paragraph_mut();
        paragraph.level = options.level;
        paragraph.alignment = options.alignment;

        let run = paragraph.add_run(Run::new(text));
        run.properties.bold = options.bold;
        run.properties.italic = options.italic;
        run.properties.underline = options.underline;
        run.properties.size_pt = Some(options.size);
        run.properties.font = options.font.clone();
        run.properties.color = Some(color);
        run.properties.hyperlink = options.hyperlink.clone();
        Ok(())
    }

    /// Set the solid background color of a shape, or of one table cell
    /// when `cell` is given. Tables take fills per cell only, so a table
    /// without a cell coordinate is rejected.
    pub fn change_bgcolor(
        &mut self,
        slide: usize,
        shape: impl Into<ShapeRef>,
        color: impl Into<Color>,
        cell: Option<(usize, usize)>,
    ) -> Result<()> {
        let rgb = color.into().normalize()?;
        let shape_ref = shape.into();
        let position = self.resolve_position(slide, &shape_ref)?;
        let shape = self.slide_mut(slide)?.shape_mut(position)?;
        match cell {
            Some((row, col)) => {
                let name = shape.name().to_string();
                shape
                    .table_mut()
                    .ok_or(Error::NotATable(name))?
                    .cell_mut(row, col)?
                    .fill = Some(rgb);
            }
            // Tables carry fills on cells only; nothing in the table frame
            // stores a shape-level color, so accepting one would drop it.
            None if shape.has_table() => {
                return Err(Error::TableBackground(shape.name().to_string()));
            }
            None => shape.fill = Some(rgb),
        }
        Ok(())
    }

    /// Write the presentation to a .pptx file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        package::save(&self.prs, path)
    }

    fn slide(&self, slide: usize) -> Result<&Slide> {
        let count = self.prs.slide_count();
        if slide < 1 {
            return Err(Error::SlideIndex {
                index: slide,
                count,
            });
        }
        self.prs.slide(slide - 1).ok_or(Error::SlideIndex {
            index: slide,
            count,
        })
    }

    fn slide_mut(&mut self, slide: usize) -> Result<&mut Slide> {
        let count = self.prs.slide_count();
        if slide < 1 {
            return Err(Error::SlideIndex {
                index: slide,
                count,
            });
        }
        self.prs.slide_mut(slide - 1).ok_or(Error::SlideIndex {
            index: slide,
            count,
        })
    }

    /// Resolve a shape reference to its 0-based position on the slide.
    /// Recomputed on every call; the name mapping is not cached.
    fn resolve_position(&self, slide: usize, shape: &ShapeRef) -> Result<usize> {
        let slide = self.slide(slide)?;
        match shape {
            ShapeRef::ByName(name) => slide.position_of(name),
            ShapeRef::ByPosition(position) => {
                slide.shape(*position)?;
                Ok(*position)
            }
        }
    }

    fn target_text_frame_mut(
        &mut self,
        slide: usize,
        position: usize,
        cell: Option<(usize, usize)>,
    ) -> Result<&mut TextFrame> {
        let shape = self.slide_mut(slide)?.shape_mut(position)?;
        let name = shape.name().to_string();
        match cell {
            Some((row, col)) => Ok(&mut shape
                .table_mut()
                .ok_or(Error::NotATable(name))?
                .cell_mut(row, col)?
                .text_frame),
            None => shape.text_frame_mut().ok_or(Error::NoTextFrame(name)),
        }
    }
}

/// Work out a picture's extent in EMUs from explicit centimeter sizes
/// and/or the image's natural pixel size at 96 DPI.
fn picture_extent(
    data: &[u8],
    path: &Path,
    width_cm: Option<f64>,
    height_cm: Option<f64>,
) -> Result<(i64, i64)> {
    if let (Some(w), Some(h)) = (width_cm, height_cm) {
        return Ok((cm_to_emu(w), cm_to_emu(h)));
    }
    let (px_w, px_h) = natural_size_px(data).ok_or_else(|| {
        Error::InvalidFormat(format!(
            "cannot determine image dimensions: {}",
            path.display()
        ))
    })?;
    let natural_w = px_to_emu_96(px_w);
    let natural_h = px_to_emu_96(px_h);
    Ok(match (width_cm, height_cm) {
        (Some(w), None) => {
            let cx = cm_to_emu(w);
            (cx, (cx as f64 * natural_h as f64 / natural_w as f64) as i64)
        }
        (None, Some(h)) => {
            let cy = cm_to_emu(h);
            ((cy as f64 * natural_w as f64 / natural_h as f64) as i64, cy)
        }
        _ => (natural_w, natural_h),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::color::RGBColor;

    fn editor_with_blank_slide() -> SlideEditor {
        let mut editor = SlideEditor::new();
        editor.add_slide(6).unwrap();
        editor
    }

    #[test]
    fn test_hello_box1() {
        let mut editor = editor_with_blank_slide();
        editor.add_textbox(1, 1.0, 1.0, 5.0, 2.0, Some("box1")).unwrap();
        editor
            .edit_text(
                1,
                "box1",
                "Hello",
                &TextOptions {
                    color: Color::from("blue"),
                    size: 24.0,
                    ..TextOptions::default()
                },
            )
            .unwrap();
        assert_eq!(editor.show_text(1, "box1", None).unwrap(), "Hello");
    }

    #[test]
    fn test_num_shapes_counts_all_kinds() {
        let mut editor = editor_with_blank_slide();
        editor.add_textbox(1, 0.0, 0.0, 1.0, 1.0, None).unwrap();
        editor
            .add_table(1, 2, 2, 0.0, 2.0, 4.0, 2.0, Some("grid"))
            .unwrap();
        assert_eq!(editor.num_shapes(1).unwrap(), 2);
        assert_eq!(editor.num_slides(), 1);
    }

    #[test]
    fn test_slide_index_is_one_based() {
        let editor = editor_with_blank_slide();
        assert!(editor.num_shapes(1).is_ok());
        assert!(matches!(
            editor.num_shapes(0).unwrap_err(),
            Error::SlideIndex { index: 0, count: 1 }
        ));
        assert!(matches!(
            editor.num_shapes(2).unwrap_err(),
            Error::SlideIndex { index: 2, count: 1 }
        ));
    }

    #[test]
    fn test_duplicate_names_resolve_to_later_shape() {
        let mut editor = editor_with_blank_slide();
        editor.add_textbox(1, 0.0, 0.0, 1.0, 1.0, Some("box")).unwrap();
        editor.add_textbox(1, 2.0, 0.0, 1.0, 1.0, Some("box")).unwrap();
        editor.edit_text(1, "box", "second", &TextOptions::default()).unwrap();

        assert_eq!(editor.show_text(1, 1usize, None).unwrap(), "second");
        assert_eq!(editor.show_text(1, 0usize, None).unwrap(), "");
    }

    #[test]
    fn test_edit_text_clear_and_append() {
        let mut editor = editor_with_blank_slide();
        editor.add_textbox(1, 0.0, 0.0, 5.0, 2.0, Some("box")).unwrap();

        editor.edit_text(1, "box", "one", &TextOptions::default()).unwrap();
        editor
            .edit_text(
                1,
                "box",
                "two",
                &TextOptions {
                    clear: false,
                    ..TextOptions::default()
                },
            )
            .unwrap();
        assert_eq!(editor.show_text(1, "box", None).unwrap(), "onetwo");

        editor.edit_text(1, "box", "fresh", &TextOptions::default()).unwrap();
        assert_eq!(editor.show_text(1, "box", None).unwrap(), "fresh");
    }

    #[test]
    fn test_cell_access_on_textbox_fails() {
        let mut editor = editor_with_blank_slide();
        editor.add_textbox(1, 0.0, 0.0, 1.0, 1.0, Some("box")).unwrap();
        let err = editor
            .edit_text(
                1,
                "box",
                "x",
                &TextOptions {
                    cell: Some((0, 0)),
                    ..TextOptions::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::NotATable(name) if name == "box"));
    }

    #[test]
    fn test_table_cell_text_and_merge() {
        let mut editor = editor_with_blank_slide();
        editor
            .add_table(1, 2, 3, 1.0, 1.0, 10.0, 4.0, Some("grid"))
            .unwrap();
        editor
            .edit_text(
                1,
                "grid",
                "header",
                &TextOptions {
                    cell: Some((0, 0)),
                    bold: true,
                    ..TextOptions::default()
                },
            )
            .unwrap();
        editor.merge_table_cells(1, "grid", (0, 0), (0, 2)).unwrap();

        assert_eq!(editor.show_text(1, "grid", Some((0, 0))).unwrap(), "header");
        assert!(matches!(
            editor.show_text(1, "grid", Some((5, 0))).unwrap_err(),
            Error::CellIndex { .. }
        ));
    }

    #[test]
    fn test_table_bgcolor_requires_cell() {
        let mut editor = editor_with_blank_slide();
        editor
            .add_table(1, 1, 1, 0.0, 0.0, 2.0, 2.0, Some("grid"))
            .unwrap();
        let err = editor.change_bgcolor(1, "grid", "red", None).unwrap_err();
        assert!(matches!(err, Error::TableBackground(name) if name == "grid"));

        editor.change_bgcolor(1, "grid", "red", Some((0, 0))).unwrap();
        let table = editor.presentation().slide(0).unwrap().shape(0).unwrap().table().unwrap();
        assert_eq!(table.cell(0, 0).unwrap().fill, Some(RGBColor::new(255, 0, 0)));
    }

    #[test]
    fn test_add_table_rejects_empty_grid() {
        let mut editor = editor_with_blank_slide();
        let err = editor
            .add_table(1, 0, 0, 0.0, 0.0, 2.0, 2.0, None)
            .unwrap_err();
        assert!(matches!(err, Error::TableSize { rows: 0, cols: 0 }));
        assert_eq!(editor.num_shapes(1).unwrap(), 0);
    }

    #[test]
    fn test_unknown_color_name_fails() {
        let mut editor = editor_with_blank_slide();
        editor.add_textbox(1, 0.0, 0.0, 1.0, 1.0, Some("box")).unwrap();
        let err = editor
            .change_bgcolor(1, "box", "cerulean", None)
            .unwrap_err();
        assert!(matches!(err, Error::ColorName(name) if name == "cerulean"));
    }

    #[test]
    fn test_change_bgcolor_tuple_matches_name() {
        let mut editor = editor_with_blank_slide();
        editor.add_textbox(1, 0.0, 0.0, 1.0, 1.0, Some("a")).unwrap();
        editor.add_textbox(1, 2.0, 0.0, 1.0, 1.0, Some("b")).unwrap();
        editor.change_bgcolor(1, "a", "red", None).unwrap();
        editor.change_bgcolor(1, "b", (255, 0, 0), None).unwrap();

        let prs = editor.presentation();
        let slide = prs.slide(0).unwrap();
        assert_eq!(slide.shape(0).unwrap().fill, Some(RGBColor::new(255, 0, 0)));
        assert_eq!(slide.shape(0).unwrap().fill, slide.shape(1).unwrap().fill);
    }

    #[test]
    fn test_set_slide_size_cm() {
        let mut editor = SlideEditor::new();
        editor.set_slide_size(33.867, 19.05);
        // 16:9 widescreen
        assert_eq!(editor.presentation().slide_width(), 12_192_120);
        assert_eq!(editor.presentation().slide_height(), 6_858_000);
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let mut editor = editor_with_blank_slide();
        editor.add_textbox(1, 1.0, 1.0, 5.0, 2.0, Some("box1")).unwrap();
        editor
            .edit_text(
                1,
                "box1",
                "Hello",
                &TextOptions {
                    color: Color::from("blue"),
                    size: 24.0,
                    ..TextOptions::default()
                },
            )
            .unwrap();
        editor.save(&path).unwrap();

        let reopened = SlideEditor::open(&path).unwrap();
        assert_eq!(reopened.num_slides(), 1);
        assert_eq!(reopened.show_text(1, "box1", None).unwrap(), "Hello");
        assert_eq!(
            reopened.shape_names(1).unwrap().get("box1"),
            Some(&0usize)
        );
    }

    #[test]
    fn test_open_missing_file_fails() {
        assert!(matches!(
            SlideEditor::open("/nonexistent/deck.pptx").unwrap_err(),
            Error::Io(_)
        ));
    }
}
