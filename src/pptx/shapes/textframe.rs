//! Text frame model: paragraphs and styled runs.
use crate::common::color::RGBColor;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The `algn` attribute value for this alignment.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }

    /// Parse an `algn` attribute value. Unrecognized values map to left,
    /// matching how the rendering layer treats them.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "ctr" => Self::Center,
            "r" => Self::Right,
            _ => Self::Left,
        }
    }
}

/// Character-level formatting applied to a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunProperties {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Font size in points
    pub size_pt: Option<f64>,
    /// Font family name
    pub font: Option<String>,
    /// Solid text color
    pub color: Option<RGBColor>,
    /// External hyperlink target URL
    pub hyperlink: Option<String>,
}

/// A contiguous span of identically styled text within a paragraph.
#[derive(Debug, Clone, Default)]
pub struct Run {
    pub text: String,
    pub properties: RunProperties,
}

impl Run {
    /// Create an unstyled run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            properties: RunProperties::default(),
        }
    }
}

/// A paragraph in a text frame.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    /// Indentation level (0-based; each level indents one step further)
    pub level: u8,
    pub alignment: Alignment,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Concatenated text of all runs in this paragraph.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Append a run and return a mutable reference to it.
    pub fn add_run(&mut self, run: Run) -> &mut Run {
        self.runs.push(run);
        self.runs.last_mut().unwrap()
    }
}

/// The text-holding region of a shape or table cell.
///
/// A text frame always contains at least one paragraph, mirroring the
/// `<a:txBody>` element which requires at least one `<a:p>`.
#[derive(Debug, Clone)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Create a text frame holding a single empty paragraph.
    pub fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::default()],
        }
    }

    /// Build a text frame from already-parsed paragraphs. An empty vector
    /// is normalized to a single empty paragraph.
    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        if paragraphs.is_empty() {
            Self::new()
        } else {
            Self { paragraphs }
        }
    }

    /// All paragraphs.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// The first paragraph. Always present.
    pub fn first_paragraph_mut(&mut self) -> &mut Paragraph {
        &mut self.paragraphs[0]
    }

    /// Append an empty paragraph and return a mutable reference to it.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::default());
        self.paragraphs.last_mut().unwrap()
    }

    /// Remove all content, leaving a single empty paragraph.
    ///
    /// Paragraph-level formatting of the first paragraph is kept, matching
    /// the behavior of the underlying text body element.
    pub fn clear(&mut self) {
        self.paragraphs.truncate(1);
        self.paragraphs[0].runs.clear();
    }

    /// All text in the frame, paragraphs joined with `\n`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, para) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&para.text());
        }
        out
    }

    /// Whether no run in the frame holds any text.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.runs.iter().all(|r| r.text.is_empty()))
    }
}

impl Default for TextFrame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_has_one_paragraph() {
        let tf = TextFrame::new();
        assert_eq!(tf.paragraphs().len(), 1);
        assert!(tf.is_empty());
        assert_eq!(tf.text(), "");
    }

    #[test]
    fn test_text_joins_paragraphs() {
        let mut tf = TextFrame::new();
        tf.first_paragraph_mut().add_run(Run::new("first"));
        tf.add_paragraph().add_run(Run::new("second"));
        assert_eq!(tf.text(), "first\nsecond");
    }

    #[test]
    fn test_clear_keeps_single_empty_paragraph() {
        let mut tf = TextFrame::new();
        tf.first_paragraph_mut().add_run(Run::new("gone"));
        tf.add_paragraph().add_run(Run::new("also gone"));

        tf.clear();
        assert_eq!(tf.paragraphs().len(), 1);
        assert!(tf.is_empty());
    }

    #[test]
    fn test_alignment_attrs() {
        assert_eq!(Alignment::Center.as_attr(), "ctr");
        assert_eq!(Alignment::from_attr("r"), Alignment::Right);
        assert_eq!(Alignment::from_attr("just"), Alignment::Left);
    }
}
