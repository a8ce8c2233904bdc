//! Parsing of PresentationML parts back into the document model.
use crate::common::color::RGBColor;
use crate::common::error::{Error, Result};
use crate::common::unit::centipoints_to_pt;
use crate::opc::rels::Relationships;
use crate::pptx::shapes::{
    Alignment, Cell, ImageFormat, Paragraph, Run, Shape, ShapeKind, Table, TextFrame,
};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Geometry and slide ordering read from presentation.xml.
#[derive(Debug)]
pub(crate) struct ParsedPresentation {
    pub slide_width: i64,
    pub slide_height: i64,
    /// (slide ID, r:id) pairs from sldIdLst in document order
    pub slide_refs: Vec<(u32, String)>,
}

/// Shapes read from a slideN.xml part.
///
/// Picture shapes come back with empty image data; `picture_refs` maps the
/// shape position to the r:embed relationship ID so the package loader can
/// attach the media blob.
#[derive(Debug)]
pub(crate) struct ParsedSlide {
    pub shapes: Vec<Shape>,
    pub picture_refs: Vec<(usize, String)>,
}

fn attr_string(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes().flatten().find_map(|attr| {
        (attr.key.as_ref() == key).then(|| {
            crate::common::xml::unescape_xml(std::str::from_utf8(&attr.value).unwrap_or(""))
        })
    })
}

fn attr_i64(e: &BytesStart<'_>, key: &[u8]) -> Option<i64> {
    attr_string(e, key).and_then(|v| v.parse().ok())
}

/// Look up a namespace-prefixed attribute by its local name, so the
/// relationship attributes resolve whatever prefix the package binds.
fn prefixed_attr_string(e: &BytesStart<'_>, local: &[u8]) -> Option<String> {
    e.attributes().flatten().find_map(|attr| {
        (attr.key.prefix().is_some() && attr.key.local_name().as_ref() == local).then(|| {
            crate::common::xml::unescape_xml(std::str::from_utf8(&attr.value).unwrap_or(""))
        })
    })
}

fn xml_err(e: quick_xml::Error) -> Error {
    Error::Xml(e.to_string())
}

/// Parse presentation.xml for the page geometry and slide ordering.
pub(crate) fn parse_presentation(xml: &[u8]) -> Result<ParsedPresentation> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut slide_width = crate::pptx::presentation::DEFAULT_SLIDE_WIDTH;
    let mut slide_height = crate::pptx::presentation::DEFAULT_SLIDE_HEIGHT;
    let mut slide_refs = Vec::new();
    let mut in_slide_list = false;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"sldIdLst" => in_slide_list = true,
                b"sldId" if in_slide_list => {
                    let id = attr_string(e, b"id").and_then(|v| v.parse().ok());
                    if let (Some(id), Some(r_id)) = (id, prefixed_attr_string(e, b"id")) {
                        slide_refs.push((id, r_id));
                    }
                }
                b"sldSz" => {
                    if let Some(cx) = attr_i64(e, b"cx") {
                        slide_width = cx;
                    }
                    if let Some(cy) = attr_i64(e, b"cy") {
                        slide_height = cy;
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) if e.local_name().as_ref() == b"sldIdLst" => {
                in_slide_list = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
    }

    Ok(ParsedPresentation {
        slide_width,
        slide_height,
        slide_refs,
    })
}

/// Parse a slideN.xml part into shapes.
///
/// `rels` is the slide's own relationship set, used to resolve hyperlink
/// relationship IDs back into URLs.
pub(crate) fn parse_slide(xml: &[u8], rels: &Relationships) -> Result<ParsedSlide> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut shapes = Vec::new();
    let mut picture_refs = Vec::new();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"sp" => shapes.push(parse_sp(&mut reader, rels)?),
                b"pic" => {
                    let (shape, embed) = parse_pic(&mut reader)?;
                    picture_refs.push((shapes.len(), embed));
                    shapes.push(shape);
                }
                b"graphicFrame" => shapes.push(parse_graphic_frame(&mut reader, rels)?),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
    }

    Ok(ParsedSlide {
        shapes,
        picture_refs,
    })
}

/// Geometry fields shared by all shape kinds.
#[derive(Debug, Default)]
struct Frame {
    id: u32,
    name: String,
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
}

impl Frame {
    fn read_cnvpr(&mut self, e: &BytesStart<'_>) {
        if let Some(id) = attr_string(e, b"id").and_then(|v| v.parse().ok()) {
            self.id = id;
        }
        if let Some(name) = attr_string(e, b"name") {
            self.name = name;
        }
    }

    fn read_off(&mut self, e: &BytesStart<'_>) {
        self.x = attr_i64(e, b"x").unwrap_or(0);
        self.y = attr_i64(e, b"y").unwrap_or(0);
    }

    fn read_ext(&mut self, e: &BytesStart<'_>) {
        self.cx = attr_i64(e, b"cx").unwrap_or(0);
        self.cy = attr_i64(e, b"cy").unwrap_or(0);
    }
}

/// Parse a p:sp element into a text box shape. The reader is positioned
/// just past the opening tag and is left past the closing tag.
fn parse_sp(reader: &mut Reader<&[u8]>, rels: &Relationships) -> Result<Shape> {
    let mut buf = Vec::new();
    let mut frame = Frame::default();
    let mut fill: Option<RGBColor> = None;
    let mut paragraphs = Vec::new();
    let mut in_sp_pr = false;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf) {
            // Sub-parsers consume whole subtrees, so they only run on
            // Start events; Empty elements carry attributes only.
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"p" => {
                paragraphs.push(parse_paragraph(reader, rels)?);
            }
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"cNvPr" => frame.read_cnvpr(e),
                b"spPr" => in_sp_pr = true,
                b"off" => frame.read_off(e),
                b"ext" => frame.read_ext(e),
                b"srgbClr" if in_sp_pr => {
                    if let Some(hex) = attr_string(e, b"val") {
                        fill = RGBColor::from_hex(&hex);
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"spPr" => in_sp_pr = false,
                b"sp" => break,
                _ => {}
            },
            Ok(Event::Eof) => return Err(Error::Xml("unterminated sp element".into())),
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
    }

    let text_frame = if paragraphs.is_empty() {
        TextFrame::new()
    } else {
        TextFrame::from_paragraphs(paragraphs)
    };
    let mut shape = Shape::new(
        frame.id,
        frame.name,
        frame.x,
        frame.y,
        frame.cx,
        frame.cy,
        ShapeKind::TextBox(text_frame),
    );
    shape.fill = fill;
    Ok(shape)
}

/// Parse an a:p element. The reader is positioned just past the opening tag.
fn parse_paragraph(reader: &mut Reader<&[u8]>, rels: &Relationships) -> Result<Paragraph> {
    let mut buf = Vec::new();
    let mut paragraph = Paragraph::default();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"r" => {
                paragraph.runs.push(parse_run(reader, rels)?);
            }
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"pPr" {
                    if let Some(lvl) = attr_string(e, b"lvl").and_then(|v| v.parse().ok()) {
                        paragraph.level = lvl;
                    }
                    if let Some(algn) = attr_string(e, b"algn") {
                        paragraph.alignment = Alignment::from_attr(&algn);
                    }
                }
            }
            Ok(Event::End(ref e)) if e.local_name().as_ref() == b"p" => break,
            Ok(Event::Eof) => return Err(Error::Xml("unterminated paragraph".into())),
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
    }

    Ok(paragraph)
}

/// Parse an a:r element into a run with its character properties.
fn parse_run(reader: &mut Reader<&[u8]>, rels: &Relationships) -> Result<Run> {
    let mut buf = Vec::new();
    let mut run = Run::new("");
    let mut in_rpr = false;
    let mut in_text = false;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"rPr" => {
                    in_rpr = true;
                    let props = &mut run.properties;
                    props.bold = attr_string(e, b"b").as_deref() == Some("1");
                    props.italic = attr_string(e, b"i").as_deref() == Some("1");
                    props.underline = matches!(attr_string(e, b"u").as_deref(), Some(u) if u != "none");
                    if let Some(sz) = attr_string(e, b"sz").and_then(|v| v.parse::<u32>().ok()) {
                        props.size_pt = Some(centipoints_to_pt(sz));
                    }
                }
                b"srgbClr" if in_rpr => {
                    if let Some(hex) = attr_string(e, b"val") {
                        run.properties.color = RGBColor::from_hex(&hex);
                    }
                }
                b"latin" if in_rpr => {
                    run.properties.font = attr_string(e, b"typeface");
                }
                b"hlinkClick" if in_rpr => {
                    if let Some(r_id) = prefixed_attr_string(e, b"id") {
                        if let Some(rel) = rels.get(&r_id) {
                            run.properties.hyperlink = Some(rel.target_ref().to_string());
                        }
                    }
                }
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                let raw = std::str::from_utf8(e.as_ref())
                    .map_err(|e| Error::Xml(e.to_string()))?;
                run.text.push_str(raw);
            }
            // Entity references inside a:t arrive as their own events, not
            // as part of the surrounding Text.
            Ok(Event::GeneralRef(ref e)) if in_text => {
                if let Some(ch) = e.resolve_char_ref().map_err(xml_err)? {
                    run.text.push(ch);
                } else {
                    let name: &[u8] = e.as_ref();
                    match name {
                        b"amp" => run.text.push('&'),
                        b"lt" => run.text.push('<'),
                        b"gt" => run.text.push('>'),
                        b"quot" => run.text.push('"'),
                        b"apos" => run.text.push('\''),
                        name => {
                            return Err(Error::Xml(format!(
                                "unresolved entity reference &{};",
                                String::from_utf8_lossy(name)
                            )));
                        }
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"rPr" => in_rpr = false,
                b"t" => in_text = false,
                b"r" => break,
                _ => {}
            },
            Ok(Event::Eof) => return Err(Error::Xml("unterminated run".into())),
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
    }

    Ok(run)
}

/// Parse a p:pic element into a picture shape plus its r:embed ID.
fn parse_pic(reader: &mut Reader<&[u8]>) -> Result<(Shape, String)> {
    let mut buf = Vec::new();
    let mut frame = Frame::default();
    let mut description = String::new();
    let mut embed = String::new();
    let mut fill: Option<RGBColor> = None;
    let mut in_sp_pr = false;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"cNvPr" => {
                    frame.read_cnvpr(e);
                    if let Some(descr) = attr_string(e, b"descr") {
                        description = descr;
                    }
                }
                b"spPr" => in_sp_pr = true,
                b"off" => frame.read_off(e),
                b"ext" => frame.read_ext(e),
                b"blip" => {
                    if let Some(r_id) = prefixed_attr_string(e, b"embed") {
                        embed = r_id;
                    }
                }
                b"srgbClr" if in_sp_pr => {
                    if let Some(hex) = attr_string(e, b"val") {
                        fill = RGBColor::from_hex(&hex);
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"spPr" => in_sp_pr = false,
                b"pic" => break,
                _ => {}
            },
            Ok(Event::Eof) => return Err(Error::Xml("unterminated pic element".into())),
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
    }

    if embed.is_empty() {
        return Err(Error::InvalidFormat("picture without image reference".into()));
    }

    let mut shape = Shape::new(
        frame.id,
        frame.name,
        frame.x,
        frame.y,
        frame.cx,
        frame.cy,
        ShapeKind::Picture {
            data: Vec::new(),
            format: ImageFormat::Png,
            description,
        },
    );
    shape.fill = fill;
    Ok((shape, embed))
}

/// Parse a p:graphicFrame holding an a:tbl into a table shape.
fn parse_graphic_frame(reader: &mut Reader<&[u8]>, rels: &Relationships) -> Result<Shape> {
    let mut buf = Vec::new();
    let mut frame = Frame::default();
    let mut col_widths = Vec::new();
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut row_heights = Vec::new();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"tr" => {
                row_heights.push(attr_i64(e, b"h").unwrap_or(0));
                rows.push(parse_table_row(reader, rels)?);
            }
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"cNvPr" => frame.read_cnvpr(e),
                b"off" => frame.read_off(e),
                b"ext" => frame.read_ext(e),
                b"gridCol" => {
                    if let Some(w) = attr_i64(e, b"w") {
                        col_widths.push(w);
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) if e.local_name().as_ref() == b"graphicFrame" => break,
            Ok(Event::Eof) => return Err(Error::Xml("unterminated graphicFrame".into())),
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
    }

    let table = Table::from_parts(col_widths, row_heights, rows);
    Ok(Shape::new(
        frame.id,
        frame.name,
        frame.x,
        frame.y,
        frame.cx,
        frame.cy,
        ShapeKind::Table(table),
    ))
}

/// Parse an a:tr element into a row of cells.
fn parse_table_row(reader: &mut Reader<&[u8]>, rels: &Relationships) -> Result<Vec<Cell>> {
    let mut buf = Vec::new();
    let mut cells = Vec::new();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"tc" => {
                cells.push(parse_table_cell(e, reader, rels)?);
            }
            Ok(Event::End(ref e)) if e.local_name().as_ref() == b"tr" => break,
            Ok(Event::Eof) => return Err(Error::Xml("unterminated table row".into())),
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
    }

    Ok(cells)
}

/// Parse an a:tc element. Merge attributes live on the opening tag.
fn parse_table_cell(
    start: &BytesStart<'_>,
    reader: &mut Reader<&[u8]>,
    rels: &Relationships,
) -> Result<Cell> {
    let mut cell = Cell::default();
    cell.grid_span = attr_string(start, b"gridSpan")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);
    cell.row_span = attr_string(start, b"rowSpan")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);
    cell.h_merge = attr_string(start, b"hMerge").as_deref() == Some("1");
    cell.v_merge = attr_string(start, b"vMerge").as_deref() == Some("1");

    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut in_tc_pr = false;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"p" => {
                paragraphs.push(parse_paragraph(reader, rels)?);
            }
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"tcPr" => in_tc_pr = true,
                b"srgbClr" if in_tc_pr => {
                    if let Some(hex) = attr_string(e, b"val") {
                        cell.fill = RGBColor::from_hex(&hex);
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"tcPr" => in_tc_pr = false,
                b"tc" => break,
                _ => {}
            },
            Ok(Event::Eof) => return Err(Error::Xml("unterminated table cell".into())),
            Err(e) => return Err(xml_err(e)),
            _ => {}
        }
    }

    if !paragraphs.is_empty() {
        cell.text_frame = TextFrame::from_paragraphs(paragraphs);
    }
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::slide::Slide;
    use crate::pptx::writer::slide::{SlideRelIds, slide_xml};

    #[test]
    fn test_parse_presentation_geometry_and_order() {
        let xml = br#"<?xml version="1.0"?>
            <p:presentation xmlns:p="x" xmlns:r="y">
              <p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
              <p:sldIdLst>
                <p:sldId id="256" r:id="rId2"/>
                <p:sldId id="257" r:id="rId3"/>
              </p:sldIdLst>
              <p:sldSz cx="12192000" cy="6858000"/>
            </p:presentation>"#;
        let parsed = parse_presentation(xml).unwrap();
        assert_eq!(parsed.slide_width, 12_192_000);
        assert_eq!(parsed.slide_height, 6_858_000);
        assert_eq!(
            parsed.slide_refs,
            vec![(256, "rId2".to_string()), (257, "rId3".to_string())]
        );
    }

    #[test]
    fn test_slide_round_trip_textbox() {
        let mut slide = Slide::new(256, 6);
        let shape = slide.add_textbox(914_400, 457_200, 1_828_800, 914_400, Some("box1"));
        let para = shape.text_frame_mut().unwrap().first_paragraph_mut();
        let run = para.add_run(Run::new("Hello"));
        run.properties.bold = true;
        run.properties.size_pt = Some(24.0);
        run.properties.color = Some(RGBColor::new(0, 112, 192));

        let xml = slide_xml(&slide, &SlideRelIds::default()).unwrap();
        let parsed = parse_slide(xml.as_bytes(), &Relationships::new()).unwrap();

        assert_eq!(parsed.shapes.len(), 1);
        let shape = &parsed.shapes[0];
        assert_eq!(shape.name(), "box1");
        assert_eq!(shape.x, 914_400);
        assert_eq!(shape.cy, 914_400);
        let frame = shape.text_frame().unwrap();
        assert_eq!(frame.text(), "Hello");
        let run = &frame.paragraphs()[0].runs[0];
        assert!(run.properties.bold);
        assert_eq!(run.properties.size_pt, Some(24.0));
        assert_eq!(run.properties.color, Some(RGBColor::new(0, 112, 192)));
    }

    #[test]
    fn test_slide_round_trip_markup_characters() {
        let mut slide = Slide::new(256, 6);
        let shape = slide.add_textbox(0, 0, 1000, 1000, Some("box"));
        shape
            .text_frame_mut()
            .unwrap()
            .first_paragraph_mut()
            .add_run(Run::new("A & B <C> \"D\" 'E'"));

        let xml = slide_xml(&slide, &SlideRelIds::default()).unwrap();
        let parsed = parse_slide(xml.as_bytes(), &Relationships::new()).unwrap();
        assert_eq!(
            parsed.shapes[0].text_frame().unwrap().text(),
            "A & B <C> \"D\" 'E'"
        );
    }

    #[test]
    fn test_parse_run_character_references() {
        let xml = br#"<p:sld xmlns:p="x" xmlns:a="y"><p:cSld><p:spTree>
            <p:sp>
              <p:nvSpPr><p:cNvPr id="2" name="box"/></p:nvSpPr>
              <p:txBody><a:p><a:r><a:t>caf&#233; &#xA9;</a:t></a:r></a:p></p:txBody>
            </p:sp>
            </p:spTree></p:cSld></p:sld>"#;
        let parsed = parse_slide(xml, &Relationships::new()).unwrap();
        assert_eq!(parsed.shapes[0].text_frame().unwrap().text(), "caf\u{e9} \u{a9}");
    }

    #[test]
    fn test_slide_round_trip_table_merge() {
        let mut slide = Slide::new(256, 6);
        let shape = slide.add_table(2, 3, 0, 0, 3000, 1000, Some("grid")).unwrap();
        let table = shape.table_mut().unwrap();
        table.merge((0, 0), (0, 1)).unwrap();
        table
            .cell_mut(1, 2)
            .unwrap()
            .text_frame
            .first_paragraph_mut()
            .add_run(Run::new("corner"));

        let xml = slide_xml(&slide, &SlideRelIds::default()).unwrap();
        let parsed = parse_slide(xml.as_bytes(), &Relationships::new()).unwrap();

        let table = parsed.shapes[0].table().unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.col_count(), 3);
        assert_eq!(table.cell(0, 0).unwrap().grid_span, 2);
        assert!(table.cell(0, 1).unwrap().h_merge);
        assert_eq!(table.cell(1, 2).unwrap().text_frame.text(), "corner");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            /// Any text written into a text box must come back unchanged
            /// after serializing and re-parsing the slide part.
            #[test]
            fn prop_text_survives_slide_round_trip(text in "[a-zA-Z0-9 &<>\"'아-힣]{0,40}") {
                let mut slide = Slide::new(256, 6);
                let shape = slide.add_textbox(0, 0, 1000, 1000, Some("box"));
                shape
                    .text_frame_mut()
                    .unwrap()
                    .first_paragraph_mut()
                    .add_run(Run::new(text.clone()));

                let xml = slide_xml(&slide, &SlideRelIds::default()).unwrap();
                let parsed = parse_slide(xml.as_bytes(), &Relationships::new()).unwrap();
                prop_assert_eq!(parsed.shapes[0].text_frame().unwrap().text(), text);
            }
        }
    }

    #[test]
    fn test_parse_pic_reports_embed_id() {
        let mut rels = Relationships::new();
        rels.add(
            crate::opc::constants::relationship_type::IMAGE,
            "../media/image1.png",
        );
        let xml = br#"<p:sld xmlns:p="x" xmlns:a="y" xmlns:r="z"><p:cSld><p:spTree>
            <p:pic>
              <p:nvPicPr><p:cNvPr id="2" name="Picture 2" descr="logo"/></p:nvPicPr>
              <p:blipFill><a:blip r:embed="rId1"/></p:blipFill>
              <p:spPr><a:xfrm><a:off x="1" y="2"/><a:ext cx="3" cy="4"/></a:xfrm></p:spPr>
            </p:pic>
            </p:spTree></p:cSld></p:sld>"#;
        let parsed = parse_slide(xml, &rels).unwrap();
        assert_eq!(parsed.picture_refs, vec![(0, "rId1".to_string())]);
        assert_eq!(parsed.shapes[0].name(), "Picture 2");
    }

    #[test]
    fn test_relationship_attrs_accept_any_prefix() {
        let xml = br#"<?xml version="1.0"?>
            <p:presentation xmlns:p="x" xmlns:rel="y">
              <p:sldIdLst><p:sldId id="256" rel:id="rId2"/></p:sldIdLst>
            </p:presentation>"#;
        let parsed = parse_presentation(xml).unwrap();
        assert_eq!(parsed.slide_refs, vec![(256, "rId2".to_string())]);

        let xml = br#"<p:sld xmlns:p="x" xmlns:a="y" xmlns:rel="z"><p:cSld><p:spTree>
            <p:pic>
              <p:nvPicPr><p:cNvPr id="2" name="pic"/></p:nvPicPr>
              <p:blipFill><a:blip rel:embed="rId1"/></p:blipFill>
            </p:pic>
            </p:spTree></p:cSld></p:sld>"#;
        let parsed = parse_slide(xml, &Relationships::new()).unwrap();
        assert_eq!(parsed.picture_refs, vec![(0, "rId1".to_string())]);
    }
}
