//! Reading and writing .pptx packages.
//!
//! A .pptx file is a ZIP archive of XML parts wired together by
//! relationship files. Saving serializes the in-memory document plus the
//! boilerplate parts (master, layouts, theme, doc properties); loading
//! walks the relationship graph back into the document model.

use crate::common::error::{Error, Result};
use crate::opc::constants::{content_type, relationship_type};
use crate::opc::rels::{Relationships, resolve_target};
use crate::opc::{ContentTypes, PhysPkgReader, PhysPkgWriter};
use crate::pptx::presentation::Presentation;
use crate::pptx::reader::{parse_presentation, parse_slide};
use crate::pptx::shapes::{ImageFormat, ShapeKind};
use crate::pptx::slide::Slide;
use crate::pptx::template;
use crate::pptx::writer::{SlideRelIds, presentation_xml, slide_xml};
use std::path::Path;

/// Membername of the .rels part for the given package member.
/// An empty membername addresses the package root.
fn rels_membername(membername: &str) -> String {
    match membername.rsplit_once('/') {
        Some((dir, name)) => format!("{dir}/_rels/{name}.rels"),
        None => format!("_rels/{membername}.rels"),
    }
}

/// Write a presentation to a .pptx file at the given path.
pub fn save<P: AsRef<Path>>(prs: &Presentation, path: P) -> Result<()> {
    let bytes = save_to_bytes(prs)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Serialize a presentation into .pptx bytes.
pub fn save_to_bytes(prs: &Presentation) -> Result<Vec<u8>> {
    let mut writer = PhysPkgWriter::new();
    let mut content_types = ContentTypes::new();

    // Package-level relationships
    let mut pkg_rels = Relationships::new();
    pkg_rels.add(relationship_type::OFFICE_DOCUMENT, "ppt/presentation.xml");
    pkg_rels.add(relationship_type::CORE_PROPERTIES, "docProps/core.xml");
    pkg_rels.add(relationship_type::EXTENDED_PROPERTIES, "docProps/app.xml");
    writer.write("_rels/.rels", pkg_rels.to_xml().as_bytes())?;

    // Presentation part and its relationships: master first, then slides,
    // then the supporting property parts.
    let mut pres_rels = Relationships::new();
    pres_rels.add(
        relationship_type::SLIDE_MASTER,
        "slideMasters/slideMaster1.xml",
    );
    let mut slide_rel_ids = Vec::with_capacity(prs.slide_count());
    for i in 0..prs.slide_count() {
        let r_id = pres_rels.add(
            relationship_type::SLIDE,
            &format!("slides/slide{}.xml", i + 1),
        );
        slide_rel_ids.push(r_id);
    }
    pres_rels.add(relationship_type::PRES_PROPS, "presProps.xml");
    pres_rels.add(relationship_type::VIEW_PROPS, "viewProps.xml");
    pres_rels.add(relationship_type::TABLE_STYLES, "tableStyles.xml");
    writer.write(
        "ppt/_rels/presentation.xml.rels",
        pres_rels.to_xml().as_bytes(),
    )?;
    writer.write(
        "ppt/presentation.xml",
        presentation_xml(prs, &slide_rel_ids)?.as_bytes(),
    )?;
    content_types.add_override("ppt/presentation.xml", content_type::PML_PRESENTATION_MAIN);

    // Slide master, layouts and theme
    let mut master_rels = Relationships::new();
    for i in 1..=template::LAYOUT_NAMES.len() {
        master_rels.add(
            relationship_type::SLIDE_LAYOUT,
            &format!("../slideLayouts/slideLayout{i}.xml"),
        );
    }
    master_rels.add(relationship_type::THEME, "../theme/theme1.xml");
    writer.write(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        master_rels.to_xml().as_bytes(),
    )?;
    writer.write(
        "ppt/slideMasters/slideMaster1.xml",
        template::master_xml().as_bytes(),
    )?;
    content_types.add_override(
        "ppt/slideMasters/slideMaster1.xml",
        content_type::PML_SLIDE_MASTER,
    );

    for i in 0..template::LAYOUT_NAMES.len() {
        let membername = format!("ppt/slideLayouts/slideLayout{}.xml", i + 1);
        let mut layout_rels = Relationships::new();
        layout_rels.add(
            relationship_type::SLIDE_MASTER,
            "../slideMasters/slideMaster1.xml",
        );
        writer.write(
            &rels_membername(&membername),
            layout_rels.to_xml().as_bytes(),
        )?;
        writer.write(&membername, template::layout_xml(i).as_bytes())?;
        content_types.add_override(&membername, content_type::PML_SLIDE_LAYOUT);
    }

    writer.write("ppt/theme/theme1.xml", template::theme_xml().as_bytes())?;
    content_types.add_override("ppt/theme/theme1.xml", content_type::OFC_THEME);

    // Slides with their media and hyperlink relationships
    let mut media = MediaStore::new();
    for (i, slide) in prs.slides().iter().enumerate() {
        let membername = format!("ppt/slides/slide{}.xml", i + 1);
        let mut rels = Relationships::new();
        rels.add(
            relationship_type::SLIDE_LAYOUT,
            &format!("../slideLayouts/slideLayout{}.xml", slide.layout() + 1),
        );

        let mut rel_ids = SlideRelIds::default();
        for (position, shape) in slide.shapes().iter().enumerate() {
            match &shape.kind {
                ShapeKind::Picture { data, format, .. } => {
                    let image_name = media.intern(data, *format);
                    let r_id =
                        rels.add(relationship_type::IMAGE, &format!("../media/{image_name}"));
                    rel_ids.pictures.insert(position, r_id);
                }
                ShapeKind::TextBox(frame) => {
                    collect_hyperlinks(frame, &mut rels, &mut rel_ids);
                }
                ShapeKind::Table(table) => {
                    for row in table.rows() {
                        for cell in row {
                            collect_hyperlinks(&cell.text_frame, &mut rels, &mut rel_ids);
                        }
                    }
                }
            }
        }

        writer.write(&rels_membername(&membername), rels.to_xml().as_bytes())?;
        writer.write(&membername, slide_xml(slide, &rel_ids)?.as_bytes())?;
        content_types.add_override(&membername, content_type::PML_SLIDE);
    }
    for (name, format, data) in media.entries() {
        writer.write(&format!("ppt/media/{name}"), data)?;
        content_types.add_default(format.extension(), format.mime_type());
    }

    // Supporting property parts
    writer.write("ppt/presProps.xml", template::pres_props_xml().as_bytes())?;
    content_types.add_override("ppt/presProps.xml", content_type::PML_PRES_PROPS);
    writer.write("ppt/viewProps.xml", template::view_props_xml().as_bytes())?;
    content_types.add_override("ppt/viewProps.xml", content_type::PML_VIEW_PROPS);
    writer.write(
        "ppt/tableStyles.xml",
        template::table_styles_xml().as_bytes(),
    )?;
    content_types.add_override("ppt/tableStyles.xml", content_type::PML_TABLE_STYLES);

    writer.write(
        "docProps/core.xml",
        template::core_props_xml("").as_bytes(),
    )?;
    content_types.add_override("docProps/core.xml", content_type::OPC_CORE_PROPERTIES);
    writer.write(
        "docProps/app.xml",
        template::app_props_xml(prs.slide_count()).as_bytes(),
    )?;
    content_types.add_override("docProps/app.xml", content_type::OFC_EXTENDED_PROPERTIES);

    writer.write("[Content_Types].xml", content_types.to_xml().as_bytes())?;
    writer.finish()
}

/// Register external hyperlink relationships for every linked run in a
/// text frame, deduplicating by URL.
fn collect_hyperlinks(
    frame: &crate::pptx::shapes::TextFrame,
    rels: &mut Relationships,
    rel_ids: &mut SlideRelIds,
) {
    for paragraph in frame.paragraphs() {
        for run in &paragraph.runs {
            if let Some(url) = &run.properties.hyperlink {
                if !rel_ids.hyperlinks.contains_key(url) {
                    let r_id = rels.add_external(relationship_type::HYPERLINK, url);
                    rel_ids.hyperlinks.insert(url.clone(), r_id);
                }
            }
        }
    }
}

/// Collects image blobs, deduplicating identical content.
struct MediaStore {
    entries: Vec<(String, ImageFormat, Vec<u8>)>,
}

impl MediaStore {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register an image and return its media part filename. Identical
    /// blobs share one part.
    fn intern(&mut self, data: &[u8], format: ImageFormat) -> String {
        if let Some((name, _, _)) = self.entries.iter().find(|(_, _, d)| d == data) {
            return name.clone();
        }
        let name = format!("image{}.{}", self.entries.len() + 1, format.extension());
        self.entries.push((name.clone(), format, data.to_vec()));
        name
    }

    fn entries(&self) -> impl Iterator<Item = (&str, ImageFormat, &[u8])> {
        self.entries
            .iter()
            .map(|(name, format, data)| (name.as_str(), *format, data.as_slice()))
    }
}

/// Load a presentation from a .pptx file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Presentation> {
    let mut reader = PhysPkgReader::open(path)?;
    load_from_reader(&mut reader)
}

/// Load a presentation from in-memory .pptx bytes.
pub fn load_from_bytes(data: Vec<u8>) -> Result<Presentation> {
    let mut reader = PhysPkgReader::from_bytes(data)?;
    load_from_reader(&mut reader)
}

fn load_from_reader(reader: &mut PhysPkgReader) -> Result<Presentation> {
    // Package root rels point at the main document part
    let pkg_rels = Relationships::from_xml(&reader.blob_for("_rels/.rels")?)?;
    let pres_rel = pkg_rels
        .find_by_type(relationship_type::OFFICE_DOCUMENT)
        .ok_or_else(|| Error::InvalidFormat("package has no main document part".into()))?;
    let pres_membername = resolve_target("", pres_rel.target_ref());

    let parsed = parse_presentation(&reader.blob_for(&pres_membername)?)?;
    let pres_rels = load_rels(reader, &pres_membername)?;

    let mut slides = Vec::with_capacity(parsed.slide_refs.len());
    for (slide_id, r_id) in &parsed.slide_refs {
        let rel = pres_rels.get(r_id).ok_or_else(|| {
            Error::InvalidFormat(format!("presentation references unknown slide {r_id}"))
        })?;
        let membername = resolve_target(&pres_membername, rel.target_ref());
        slides.push(load_slide(reader, &membername, *slide_id)?);
    }

    Ok(Presentation::from_parts(
        slides,
        parsed.slide_width,
        parsed.slide_height,
    ))
}

/// Read a part's relationships; a missing .rels part means no relationships.
fn load_rels(reader: &mut PhysPkgReader, membername: &str) -> Result<Relationships> {
    let rels_name = rels_membername(membername);
    if !reader.contains(&rels_name) {
        return Ok(Relationships::new());
    }
    Relationships::from_xml(&reader.blob_for(&rels_name)?)
}

fn load_slide(reader: &mut PhysPkgReader, membername: &str, slide_id: u32) -> Result<Slide> {
    let rels = load_rels(reader, membername)?;
    let mut parsed = parse_slide(&reader.blob_for(membername)?, &rels)?;

    // Attach media blobs to picture shapes
    for (position, embed) in &parsed.picture_refs {
        let rel = rels.get(embed).ok_or_else(|| {
            Error::InvalidFormat(format!("slide references unknown image {embed}"))
        })?;
        let image_membername = resolve_target(membername, rel.target_ref());
        let blob = reader.blob_for(&image_membername)?;
        let format = ImageFormat::detect_from_bytes(&blob)
            .or_else(|| {
                image_membername
                    .rsplit_once('.')
                    .and_then(|(_, ext)| ImageFormat::from_extension(ext))
            })
            .ok_or_else(|| {
                Error::InvalidFormat(format!("unsupported image format in {image_membername}"))
            })?;
        if let ShapeKind::Picture { data, format: f, .. } = &mut parsed.shapes[*position].kind {
            *data = blob;
            *f = format;
        }
    }

    let layout = rels
        .find_by_type(relationship_type::SLIDE_LAYOUT)
        .and_then(|rel| layout_index_from_target(rel.target_ref()))
        .unwrap_or(6);

    Ok(Slide::from_parts(slide_id, layout, parsed.shapes))
}

/// Extract the 0-based layout index from a ../slideLayouts/slideLayoutN.xml
/// target reference.
fn layout_index_from_target(target_ref: &str) -> Option<usize> {
    let stem = target_ref
        .rsplit_once('/')
        .map_or(target_ref, |(_, name)| name)
        .strip_prefix("slideLayout")?
        .strip_suffix(".xml")?;
    let n: usize = stem.parse().ok()?;
    (n >= 1 && n <= template::LAYOUT_NAMES.len()).then(|| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::color::RGBColor;
    use crate::pptx::shapes::Run;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
        bytes
    }

    #[test]
    fn test_rels_membername() {
        assert_eq!(
            rels_membername("ppt/presentation.xml"),
            "ppt/_rels/presentation.xml.rels"
        );
        assert_eq!(
            rels_membername("ppt/slides/slide1.xml"),
            "ppt/slides/_rels/slide1.xml.rels"
        );
    }

    #[test]
    fn test_layout_index_from_target() {
        assert_eq!(
            layout_index_from_target("../slideLayouts/slideLayout7.xml"),
            Some(6)
        );
        assert_eq!(layout_index_from_target("slideLayout1.xml"), Some(0));
        assert_eq!(layout_index_from_target("../slideLayouts/slideLayout13.xml"), None);
        assert_eq!(layout_index_from_target("../theme/theme1.xml"), None);
    }

    #[test]
    fn test_save_produces_required_parts() {
        let mut prs = Presentation::new();
        prs.add_slide(6).unwrap();
        let bytes = save_to_bytes(&prs).unwrap();
        let reader = PhysPkgReader::from_bytes(bytes).unwrap();

        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout12.xml",
            "ppt/theme/theme1.xml",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(reader.contains(part), "missing {part}");
        }
    }

    #[test]
    fn test_round_trip_text_and_geometry() {
        let mut prs = Presentation::new();
        prs.set_slide_size(12_192_000, 6_858_000);
        let slide = prs.add_slide(0).unwrap();
        let shape = slide.add_textbox(914_400, 457_200, 1_828_800, 914_400, Some("box1"));
        let para = shape.text_frame_mut().unwrap().first_paragraph_mut();
        let run = para.add_run(Run::new("Hello"));
        run.properties.color = Some(RGBColor::new(0, 112, 192));
        run.properties.hyperlink = Some("https://example.com/".to_string());

        let bytes = save_to_bytes(&prs).unwrap();
        let loaded = load_from_bytes(bytes).unwrap();

        assert_eq!(loaded.slide_width(), 12_192_000);
        assert_eq!(loaded.slide_count(), 1);
        let slide = loaded.slide(0).unwrap();
        assert_eq!(slide.layout(), 0);
        let shape = slide.shape(slide.position_of("box1").unwrap()).unwrap();
        assert_eq!(shape.x, 914_400);
        let frame = shape.text_frame().unwrap();
        assert_eq!(frame.text(), "Hello");
        assert_eq!(
            frame.paragraphs()[0].runs[0].properties.hyperlink.as_deref(),
            Some("https://example.com/")
        );
    }

    #[test]
    fn test_table_cell_hyperlink_round_trip() {
        let mut prs = Presentation::new();
        let slide = prs.add_slide(6).unwrap();
        let shape = slide.add_table(1, 2, 0, 0, 2000, 500, Some("grid")).unwrap();
        let run = shape
            .table_mut()
            .unwrap()
            .cell_mut(0, 1)
            .unwrap()
            .text_frame
            .first_paragraph_mut()
            .add_run(Run::new("docs"));
        run.properties.hyperlink = Some("https://example.org/docs".to_string());

        let loaded = load_from_bytes(save_to_bytes(&prs).unwrap()).unwrap();
        let table = loaded.slide(0).unwrap().shape(0).unwrap().table().unwrap();
        let run = &table.cell(0, 1).unwrap().text_frame.paragraphs()[0].runs[0];
        assert_eq!(run.text, "docs");
        assert_eq!(
            run.properties.hyperlink.as_deref(),
            Some("https://example.org/docs")
        );
    }

    #[test]
    fn test_round_trip_picture_media() {
        let mut prs = Presentation::new();
        let slide = prs.add_slide(6).unwrap();
        let image = png_bytes(640, 480);
        slide.add_picture(
            image.clone(),
            ImageFormat::Png,
            0,
            0,
            914_400,
            914_400,
            "logo".to_string(),
        );
        // same blob twice shares one media part
        slide.add_picture(
            image.clone(),
            ImageFormat::Png,
            914_400,
            0,
            914_400,
            914_400,
            String::new(),
        );

        let bytes = save_to_bytes(&prs).unwrap();
        let reader = PhysPkgReader::from_bytes(bytes.clone()).unwrap();
        assert!(reader.contains("ppt/media/image1.png"));
        assert!(!reader.contains("ppt/media/image2.png"));

        let loaded = load_from_bytes(bytes).unwrap();
        let slide = loaded.slide(0).unwrap();
        match &slide.shape(0).unwrap().kind {
            ShapeKind::Picture { data, format, .. } => {
                assert_eq!(data, &image);
                assert_eq!(*format, ImageFormat::Png);
            }
            other => panic!("expected picture, got {other:?}"),
        }
    }
}
