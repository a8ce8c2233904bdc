//! Serialization of the presentation.xml part.
use crate::common::error::{Error, Result};
use crate::pptx::presentation::Presentation;
use std::fmt::Write as FmtWrite;

/// ID of the single slide master in sldMasterIdLst.
const MASTER_ID: u32 = 2_147_483_648;

fn fmt_err(e: std::fmt::Error) -> Error {
    Error::Xml(e.to_string())
}

/// Serialize presentation.xml.
///
/// `slide_rel_ids` must hold one relationship ID per slide, in slide order,
/// matching the IDs assigned in ppt/_rels/presentation.xml.rels.
pub fn presentation_xml(prs: &Presentation, slide_rel_ids: &[String]) -> Result<String> {
    debug_assert_eq!(prs.slide_count(), slide_rel_ids.len());

    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<p:presentation "#);
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#);
    xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

    xml.push_str("<p:sldMasterIdLst>");
    write!(xml, r#"<p:sldMasterId id="{MASTER_ID}" r:id="rId1"/>"#).map_err(fmt_err)?;
    xml.push_str("</p:sldMasterIdLst>");

    if !prs.slides().is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (slide, r_id) in prs.slides().iter().zip(slide_rel_ids) {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="{}"/>"#,
                slide.slide_id(),
                r_id
            )
            .map_err(fmt_err)?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        prs.slide_width(),
        prs.slide_height()
    )
    .map_err(fmt_err)?;
    // Notes pages are portrait-oriented relative to the default slide
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_presentation() {
        let prs = Presentation::new();
        let xml = presentation_xml(&prs, &[]).unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(!xml.contains("<p:sldIdLst>"));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }

    #[test]
    fn test_slide_ids_in_order() {
        let mut prs = Presentation::new();
        prs.add_slide(6).unwrap();
        prs.add_slide(0).unwrap();
        let rels = vec!["rId2".to_string(), "rId3".to_string()];
        let xml = presentation_xml(&prs, &rels).unwrap();
        let first = xml.find(r#"<p:sldId id="256" r:id="rId2"/>"#).unwrap();
        let second = xml.find(r#"<p:sldId id="257" r:id="rId3"/>"#).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_custom_slide_size() {
        let mut prs = Presentation::new();
        prs.set_slide_size(12_192_000, 6_858_000);
        let xml = presentation_xml(&prs, &[]).unwrap();
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
    }
}
