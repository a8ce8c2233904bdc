//! In-memory presentation document.
use crate::common::error::{Error, Result};
use crate::pptx::slide::Slide;
use crate::pptx::template::LAYOUT_NAMES;

/// Default slide width, 10 inches in EMUs (4:3).
pub const DEFAULT_SLIDE_WIDTH: i64 = 9_144_000;
/// Default slide height, 7.5 inches in EMUs (4:3).
pub const DEFAULT_SLIDE_HEIGHT: i64 = 6_858_000;

/// First slide ID in the sldIdLst; PowerPoint starts at 256.
const FIRST_SLIDE_ID: u32 = 256;

/// A presentation document holding slides and page geometry.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub(crate) slides: Vec<Slide>,
    pub(crate) slide_width: i64,
    pub(crate) slide_height: i64,
    next_slide_id: u32,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation {
    /// Create an empty presentation with default 4:3 page geometry.
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            next_slide_id: FIRST_SLIDE_ID,
        }
    }

    /// Build a presentation from parsed parts. Used by the package reader.
    pub(crate) fn from_parts(slides: Vec<Slide>, slide_width: i64, slide_height: i64) -> Self {
        let next_slide_id = slides
            .iter()
            .map(|s| s.slide_id() + 1)
            .max()
            .unwrap_or(FIRST_SLIDE_ID);
        Self {
            slides,
            slide_width,
            slide_height,
            next_slide_id,
        }
    }

    /// Slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the page geometry in EMUs.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Access a slide by its 0-based index.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Mutable access to a slide by its 0-based index.
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    /// Append a slide using the given layout index and return it.
    ///
    /// Layout indices follow the standard master layout order; see
    /// [`LAYOUT_NAMES`] for the mapping.
    pub fn add_slide(&mut self, layout: usize) -> Result<&mut Slide> {
        if layout >= LAYOUT_NAMES.len() {
            return Err(Error::LayoutIndex {
                index: layout,
                max: LAYOUT_NAMES.len() - 1,
            });
        }
        let id = self.next_slide_id;
        self.next_slide_id += 1;
        self.slides.push(Slide::new(id, layout));
        Ok(self.slides.last_mut().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let prs = Presentation::new();
        assert_eq!(prs.slide_width(), 9_144_000);
        assert_eq!(prs.slide_height(), 6_858_000);
    }

    #[test]
    fn test_slide_ids_start_at_256() {
        let mut prs = Presentation::new();
        assert_eq!(prs.add_slide(6).unwrap().slide_id(), 256);
        assert_eq!(prs.add_slide(0).unwrap().slide_id(), 257);
    }

    #[test]
    fn test_layout_index_bounds() {
        let mut prs = Presentation::new();
        assert!(prs.add_slide(11).is_ok());
        assert!(matches!(
            prs.add_slide(12).unwrap_err(),
            Error::LayoutIndex { index: 12, max: 11 }
        ));
        // the rejected slide must not have been added
        assert_eq!(prs.slide_count(), 1);
    }
}
