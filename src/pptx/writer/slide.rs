//! Serialization of a slide into its slideN.xml part.
use crate::common::error::{Error, Result};
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::pptx::shapes::{
    Alignment, Cell, Paragraph, Run, Shape, ShapeKind, Table, TextFrame,
};
use crate::pptx::slide::Slide;
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

const TABLE_STYLE_ID: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

/// Relationship IDs assigned to a slide's externally referenced content.
///
/// The package writer assigns these when building the slide's .rels part;
/// the XML emitter only embeds the IDs.
#[derive(Debug, Default, Clone)]
pub struct SlideRelIds {
    /// Shape position -> r:embed ID of the image part
    pub pictures: HashMap<usize, String>,
    /// Hyperlink URL -> r:id of the external relationship
    pub hyperlinks: HashMap<String, String>,
}

fn fmt_err(e: std::fmt::Error) -> Error {
    Error::Xml(e.to_string())
}

/// Serialize a slide to its full slideN.xml content.
pub fn slide_xml(slide: &Slide, rels: &SlideRelIds) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<p:sld "#);
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#);
    xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);
    xml.push_str("<p:cSld>");
    xml.push_str("<p:spTree>");
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    for (position, shape) in slide.shapes().iter().enumerate() {
        match &shape.kind {
            ShapeKind::TextBox(frame) => write_textbox(&mut xml, shape, frame, rels)?,
            ShapeKind::Picture { description, .. } => {
                let r_id = rels.pictures.get(&position).ok_or_else(|| {
                    Error::Xml(format!("no image relationship for shape {position}"))
                })?;
                write_picture(&mut xml, shape, description, r_id)?;
            }
            ShapeKind::Table(table) => write_table_frame(&mut xml, shape, table, rels)?,
        }
    }

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sld>");
    Ok(xml)
}

fn write_xfrm(xml: &mut String, shape: &Shape) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, shape.x, shape.y).map_err(fmt_err)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, shape.cx, shape.cy).map_err(fmt_err)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn write_textbox(xml: &mut String, shape: &Shape, frame: &TextFrame, rels: &SlideRelIds) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}"/>"#,
        shape.id(),
        escape_xml(shape.name())
    )
    .map_err(fmt_err)?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, shape)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    if let Some(fill) = &shape.fill {
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            fill.to_hex()
        )
        .map_err(fmt_err)?;
    }
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    xml.push_str(r#"<a:bodyPr wrap="square"/>"#);
    xml.push_str("<a:lstStyle/>");
    for paragraph in frame.paragraphs() {
        write_paragraph(xml, paragraph, rels)?;
    }
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph, rels: &SlideRelIds) -> Result<()> {
    xml.push_str("<a:p>");
    if paragraph.level > 0 || paragraph.alignment != Alignment::Left {
        xml.push_str("<a:pPr");
        if paragraph.level > 0 {
            write!(xml, r#" lvl="{}""#, paragraph.level).map_err(fmt_err)?;
        }
        if paragraph.alignment != Alignment::Left {
            write!(xml, r#" algn="{}""#, paragraph.alignment.as_attr()).map_err(fmt_err)?;
        }
        xml.push_str("/>");
    }
    for run in &paragraph.runs {
        write_run(xml, run, rels)?;
    }
    xml.push_str("</a:p>");
    Ok(())
}

fn write_run(xml: &mut String, run: &Run, rels: &SlideRelIds) -> Result<()> {
    let props = &run.properties;
    xml.push_str("<a:r>");
    xml.push_str(r#"<a:rPr lang="en-US""#);
    if let Some(size) = props.size_pt {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size)).map_err(fmt_err)?;
    }
    if props.bold {
        xml.push_str(r#" b="1""#);
    }
    if props.italic {
        xml.push_str(r#" i="1""#);
    }
    if props.underline {
        xml.push_str(r#" u="sng""#);
    }
    let has_children = props.color.is_some() || props.font.is_some() || props.hyperlink.is_some();
    if !has_children {
        xml.push_str("/>");
    } else {
        xml.push('>');
        // CT_TextCharacterProperties child order: fill, latin, hlinkClick
        if let Some(color) = &props.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )
            .map_err(fmt_err)?;
        }
        if let Some(font) = &props.font {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font)).map_err(fmt_err)?;
        }
        if let Some(url) = &props.hyperlink {
            let r_id = rels.hyperlinks.get(url).ok_or_else(|| {
                Error::Xml(format!("no hyperlink relationship for {url}"))
            })?;
            write!(xml, r#"<a:hlinkClick r:id="{r_id}"/>"#).map_err(fmt_err)?;
        }
        xml.push_str("</a:rPr>");
    }
    write!(xml, "<a:t>{}</a:t>", escape_xml(&run.text)).map_err(fmt_err)?;
    xml.push_str("</a:r>");
    Ok(())
}

fn write_picture(xml: &mut String, shape: &Shape, description: &str, r_id: &str) -> Result<()> {
    xml.push_str("<p:pic>");
    xml.push_str("<p:nvPicPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}" descr="{}"/>"#,
        shape.id(),
        escape_xml(shape.name()),
        escape_xml(description)
    )
    .map_err(fmt_err)?;
    xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvPicPr>");
    xml.push_str("<p:blipFill>");
    write!(xml, r#"<a:blip r:embed="{r_id}"/>"#).map_err(fmt_err)?;
    xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
    xml.push_str("</p:blipFill>");
    xml.push_str("<p:spPr>");
    write_xfrm(xml, shape)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    if let Some(fill) = &shape.fill {
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            fill.to_hex()
        )
        .map_err(fmt_err)?;
    }
    xml.push_str("</p:spPr>");
    xml.push_str("</p:pic>");
    Ok(())
}

fn write_table_frame(xml: &mut String, shape: &Shape, table: &Table, rels: &SlideRelIds) -> Result<()> {
    xml.push_str("<p:graphicFrame>");
    xml.push_str("<p:nvGraphicFramePr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}"/>"#,
        shape.id(),
        escape_xml(shape.name())
    )
    .map_err(fmt_err)?;
    xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGraphicFramePr>");
    xml.push_str("<p:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, shape.x, shape.y).map_err(fmt_err)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, shape.cx, shape.cy).map_err(fmt_err)?;
    xml.push_str("</p:xfrm>");
    xml.push_str("<a:graphic>");
    xml.push_str(r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#);
    write_table(xml, table, rels)?;
    xml.push_str("</a:graphicData>");
    xml.push_str("</a:graphic>");
    xml.push_str("</p:graphicFrame>");
    Ok(())
}

fn write_table(xml: &mut String, table: &Table, rels: &SlideRelIds) -> Result<()> {
    xml.push_str("<a:tbl>");
    write!(
        xml,
        r#"<a:tblPr firstRow="1" bandRow="1"><a:tableStyleId>{TABLE_STYLE_ID}</a:tableStyleId></a:tblPr>"#
    )
    .map_err(fmt_err)?;
    xml.push_str("<a:tblGrid>");
    for width in &table.col_widths {
        write!(xml, r#"<a:gridCol w="{width}"/>"#).map_err(fmt_err)?;
    }
    xml.push_str("</a:tblGrid>");
    for (row, height) in table.rows().zip(&table.row_heights) {
        write!(xml, r#"<a:tr h="{height}">"#).map_err(fmt_err)?;
        for cell in row {
            write_cell(xml, cell, rels)?;
        }
        xml.push_str("</a:tr>");
    }
    xml.push_str("</a:tbl>");
    Ok(())
}

fn write_cell(xml: &mut String, cell: &Cell, rels: &SlideRelIds) -> Result<()> {
    xml.push_str("<a:tc");
    if cell.grid_span > 1 {
        write!(xml, r#" gridSpan="{}""#, cell.grid_span).map_err(fmt_err)?;
    }
    if cell.row_span > 1 {
        write!(xml, r#" rowSpan="{}""#, cell.row_span).map_err(fmt_err)?;
    }
    if cell.h_merge {
        xml.push_str(r#" hMerge="1""#);
    }
    if cell.v_merge {
        xml.push_str(r#" vMerge="1""#);
    }
    xml.push('>');
    xml.push_str("<a:txBody>");
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    for paragraph in cell.text_frame.paragraphs() {
        write_paragraph(xml, paragraph, rels)?;
    }
    xml.push_str("</a:txBody>");
    if let Some(fill) = &cell.fill {
        write!(
            xml,
            r#"<a:tcPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:tcPr>"#,
            fill.to_hex()
        )
        .map_err(fmt_err)?;
    } else {
        xml.push_str("<a:tcPr/>");
    }
    xml.push_str("</a:tc>");
    Ok(())
}
