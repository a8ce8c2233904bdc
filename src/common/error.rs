/// Error types for presentation operations.
use thiserror::Error;

/// Result type for presentation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for presentation operations.
///
/// All failures surface directly to the caller; there are no retries and no
/// silent fallbacks.
#[derive(Error, Debug)]
pub enum Error {
    /// Slide index out of range (slides are addressed 1-based)
    #[error("slide index {index} out of range: presentation has {count} slide(s)")]
    SlideIndex { index: usize, count: usize },

    /// Shape position out of range (shapes are addressed 0-based within a slide)
    #[error("shape position {index} out of range: slide has {count} shape(s)")]
    ShapeIndex { index: usize, count: usize },

    /// No shape with the given name on the slide
    #[error("no shape named {0:?} on slide")]
    ShapeName(String),

    /// Cell coordinate outside the table grid
    #[error("cell ({row}, {col}) out of range: table is {rows}x{cols}")]
    CellIndex {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Layout selector outside the fixed layout set
    #[error("layout index {index} out of range: valid layouts are 0..={max}")]
    LayoutIndex { index: usize, max: usize },

    /// Unknown symbolic color name
    #[error("unknown color name {0:?}")]
    ColorName(String),

    /// Cell coordinate given for a shape that has no table
    #[error("shape {0:?} has no table")]
    NotATable(String),

    /// Table created with an empty grid
    #[error("table needs at least 1 row and 1 column, got {rows}x{cols}")]
    TableSize { rows: usize, cols: usize },

    /// Table-wide background requested; table fills are per cell
    #[error("table {0:?} has no shape-level background: pass a cell coordinate")]
    TableBackground(String),

    /// Text operation on a shape that has no text frame
    #[error("shape {0:?} has no text frame")]
    NoTextFrame(String),

    /// Part not found in the package
    #[error("part not found: {0}")]
    PartNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid format
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
