//! Boilerplate parts for a freshly created package.
//!
//! A PresentationML package needs a slide master, a set of slide layouts and
//! a theme before any slide can reference them. These are generated inline
//! rather than carried as resource files so a new document never depends on
//! external state.

use crate::common::xml::escape_xml;
use chrono::Utc;
use std::fmt::Write as FmtWrite;

/// Layout names in slide master order. The index into this array is the
/// layout index accepted by `add_slide`.
pub const LAYOUT_NAMES: [&str; 12] = [
    "Title Slide",
    "Title and Content",
    "Section Header",
    "Two Content",
    "Comparison",
    "Title Only",
    "Blank",
    "Content with Caption",
    "Picture with Caption",
    "Title and Vertical Text",
    "Vertical Title and Text",
    "Title and Caption",
];

/// Layout kind attribute for `p:sldLayout@type`, parallel to [`LAYOUT_NAMES`].
const LAYOUT_TYPES: [&str; 12] = [
    "title",
    "obj",
    "secHead",
    "twoObj",
    "twoTxTwoObj",
    "titleOnly",
    "blank",
    "objTx",
    "picTx",
    "vertTx",
    "vertTitleAndTx",
    "tx",
];

const DRAWINGML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const PML_NS: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Generate the slideLayoutN.xml part for the given layout index.
pub fn layout_xml(index: usize) -> String {
    let name = LAYOUT_NAMES[index];
    let kind = LAYOUT_TYPES[index];
    format!(
        "{XML_DECL}\
         <p:sldLayout xmlns:a=\"{DRAWINGML_NS}\" xmlns:r=\"{REL_NS}\" xmlns:p=\"{PML_NS}\" type=\"{kind}\" preserve=\"1\">\
         <p:cSld name=\"{name}\"><p:spTree>\
         <p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
         <p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>\
         <a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>\
         </p:spTree></p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
         </p:sldLayout>"
    )
}

/// Generate slideMaster1.xml referencing the twelve layouts (rId1..rId12).
pub fn master_xml() -> String {
    let mut layouts = String::new();
    for (i, _) in LAYOUT_NAMES.iter().enumerate() {
        // sldLayoutId values continue the ID space used by sldMasterId
        let _ = write!(
            layouts,
            "<p:sldLayoutId id=\"{}\" r:id=\"rId{}\"/>",
            2147483649u32 + i as u32,
            i + 1
        );
    }
    format!(
        "{XML_DECL}\
         <p:sldMaster xmlns:a=\"{DRAWINGML_NS}\" xmlns:r=\"{REL_NS}\" xmlns:p=\"{PML_NS}\">\
         <p:cSld><p:spTree>\
         <p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
         <p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>\
         <a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>\
         </p:spTree></p:cSld>\
         <p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" \
         accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" \
         accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\
         <p:sldLayoutIdLst>{layouts}</p:sldLayoutIdLst>\
         <p:txStyles><p:titleStyle/><p:bodyStyle/><p:otherStyle/></p:txStyles>\
         </p:sldMaster>"
    )
}

/// Generate a minimal but complete theme1.xml (Office color and font scheme).
pub fn theme_xml() -> String {
    let colors = concat!(
        "<a:dk1><a:sysClr val=\"windowText\" lastClr=\"000000\"/></a:dk1>",
        "<a:lt1><a:sysClr val=\"window\" lastClr=\"FFFFFF\"/></a:lt1>",
        "<a:dk2><a:srgbClr val=\"44546A\"/></a:dk2>",
        "<a:lt2><a:srgbClr val=\"E7E6E6\"/></a:lt2>",
        "<a:accent1><a:srgbClr val=\"4472C4\"/></a:accent1>",
        "<a:accent2><a:srgbClr val=\"ED7D31\"/></a:accent2>",
        "<a:accent3><a:srgbClr val=\"A5A5A5\"/></a:accent3>",
        "<a:accent4><a:srgbClr val=\"FFC000\"/></a:accent4>",
        "<a:accent5><a:srgbClr val=\"5B9BD5\"/></a:accent5>",
        "<a:accent6><a:srgbClr val=\"70AD47\"/></a:accent6>",
        "<a:hlink><a:srgbClr val=\"0563C1\"/></a:hlink>",
        "<a:folHlink><a:srgbClr val=\"954F72\"/></a:folHlink>",
    );
    let fonts = concat!(
        "<a:majorFont><a:latin typeface=\"Calibri Light\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:majorFont>",
        "<a:minorFont><a:latin typeface=\"Calibri\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:minorFont>",
    );
    let fills = concat!(
        "<a:fillStyleLst><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>",
        "<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>",
        "<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:fillStyleLst>",
        "<a:lnStyleLst>",
        "<a:ln w=\"6350\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>",
        "<a:ln w=\"12700\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>",
        "<a:ln w=\"19050\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>",
        "</a:lnStyleLst>",
        "<a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle>",
        "<a:effectStyle><a:effectLst/></a:effectStyle>",
        "<a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst>",
        "<a:bgFillStyleLst><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>",
        "<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>",
        "<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:bgFillStyleLst>",
    );
    format!(
        "{XML_DECL}\
         <a:theme xmlns:a=\"{DRAWINGML_NS}\" name=\"Office Theme\">\
         <a:themeElements>\
         <a:clrScheme name=\"Office\">{colors}</a:clrScheme>\
         <a:fontScheme name=\"Office\">{fonts}</a:fontScheme>\
         <a:fmtScheme name=\"Office\">{fills}</a:fmtScheme>\
         </a:themeElements>\
         <a:objectDefaults/><a:extraClrSchemeLst/>\
         </a:theme>"
    )
}

pub fn pres_props_xml() -> String {
    format!(
        "{XML_DECL}<p:presentationPr xmlns:a=\"{DRAWINGML_NS}\" xmlns:r=\"{REL_NS}\" xmlns:p=\"{PML_NS}\"/>"
    )
}

pub fn view_props_xml() -> String {
    format!(
        "{XML_DECL}<p:viewPr xmlns:a=\"{DRAWINGML_NS}\" xmlns:r=\"{REL_NS}\" xmlns:p=\"{PML_NS}\"/>"
    )
}

pub fn table_styles_xml() -> String {
    format!(
        "{XML_DECL}<a:tblStyleLst xmlns:a=\"{DRAWINGML_NS}\" \
         def=\"{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}\"/>"
    )
}

/// Generate docProps/core.xml with current timestamps.
pub fn core_props_xml(title: &str) -> String {
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let title = escape_xml(title);
    format!(
        "{XML_DECL}\
         <cp:coreProperties \
         xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
         xmlns:dcterms=\"http://purl.org/dc/terms/\" \
         xmlns:dcmitype=\"http://purl.org/dc/dcmitype/\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
         <dc:title>{title}</dc:title>\
         <dcterms:created xsi:type=\"dcterms:W3CDTF\">{now}</dcterms:created>\
         <dcterms:modified xsi:type=\"dcterms:W3CDTF\">{now}</dcterms:modified>\
         </cp:coreProperties>"
    )
}

/// Generate docProps/app.xml.
pub fn app_props_xml(slide_count: usize) -> String {
    format!(
        "{XML_DECL}\
         <Properties \
         xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" \
         xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">\
         <Application>Rambutan</Application>\
         <Slides>{slide_count}</Slides>\
         <PresentationFormat>On-screen Show (4:3)</PresentationFormat>\
         </Properties>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_layouts() {
        assert_eq!(LAYOUT_NAMES.len(), 12);
        assert_eq!(LAYOUT_TYPES.len(), 12);
        assert_eq!(LAYOUT_NAMES[6], "Blank");
    }

    #[test]
    fn test_master_references_all_layouts() {
        let xml = master_xml();
        assert!(xml.contains("r:id=\"rId1\""));
        assert!(xml.contains("r:id=\"rId12\""));
        assert!(!xml.contains("r:id=\"rId13\""));
    }

    #[test]
    fn test_layout_xml_carries_name() {
        let xml = layout_xml(0);
        assert!(xml.contains("name=\"Title Slide\""));
        assert!(xml.contains("type=\"title\""));
    }

    #[test]
    fn test_core_props_escapes_title() {
        let xml = core_props_xml("a<b>&c");
        assert!(xml.contains("<dc:title>a&lt;b&gt;&amp;c</dc:title>"));
    }
}
