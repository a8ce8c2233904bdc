//! Relationship-related objects for OPC packages.
//!
//! Every part that points at other parts (or at external resources such as
//! hyperlink targets) carries a companion `.rels` file enumerating those
//! connections. This module builds and parses such collections.

use crate::common::error::{Error, Result};
use crate::common::xml::escape_xml;
use crate::opc::constants::namespace;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference: a part reference relative to the source's base
    /// directory, or an external URL
    target_ref: String,

    /// Whether this is an external relationship
    is_external: bool,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    ///
    /// For internal relationships this is a relative part reference; for
    /// external relationships it is an absolute URL.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Check if this is an external relationship.
    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }
}

/// Collection of relationships from a single source part.
///
/// Relationship IDs are assigned sequentially (`rId1`, `rId2`, ...) in
/// insertion order.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an internal relationship and return its assigned rId.
    pub fn add(&mut self, reltype: &str, target_ref: &str) -> String {
        self.push(reltype, target_ref, false)
    }

    /// Add an external relationship (e.g., a hyperlink) and return its rId.
    pub fn add_external(&mut self, reltype: &str, target_ref: &str) -> String {
        self.push(reltype, target_ref, true)
    }

    fn push(&mut self, reltype: &str, target_ref: &str, is_external: bool) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target_ref: target_ref.to_string(),
            is_external,
        });
        r_id
    }

    /// Find a relationship by its rId.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Find the first relationship of the given type.
    pub fn find_by_type(&self, reltype: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.reltype == reltype)
    }

    /// Iterate over all relationships.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Check if the collection holds no relationships.
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Number of relationships in the collection.
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Generate the `.rels` XML for this collection.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 128);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        let _ = write!(
            xml,
            r#"<Relationships xmlns="{}">"#,
            namespace::OPC_RELATIONSHIPS
        );

        for rel in &self.rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}""#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref)
            );
            if rel.is_external {
                xml.push_str(r#" TargetMode="External""#);
            }
            xml.push_str("/>");
        }

        xml.push_str("</Relationships>");
        xml
    }

    /// Parse a relationships collection from `.rels` XML.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut rels = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target_ref = None;
                    let mut is_external = false;

                    for attr in e.attributes().flatten() {
                        let raw = std::str::from_utf8(&attr.value)
                            .map_err(|e| Error::Xml(e.to_string()))?;
                        let value = crate::common::xml::unescape_xml(raw);
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(value),
                            b"Type" => reltype = Some(value),
                            b"Target" => target_ref = Some(value),
                            b"TargetMode" => is_external = value == "External",
                            _ => {},
                        }
                    }

                    match (r_id, reltype, target_ref) {
                        (Some(r_id), Some(reltype), Some(target_ref)) => {
                            rels.push(Relationship {
                                r_id,
                                reltype,
                                target_ref,
                                is_external,
                            });
                        },
                        _ => {
                            return Err(Error::InvalidFormat(
                                "Relationship element missing Id, Type, or Target".to_string(),
                            ));
                        },
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::Xml(e.to_string())),
                _ => {},
            }
        }

        Ok(Self { rels })
    }
}

/// Resolve a relationship target reference against the base directory of
/// the source part, producing a package member name.
///
/// For example, a slide at `ppt/slides/slide1.xml` referencing
/// `../media/image1.png` resolves to `ppt/media/image1.png`.
pub fn resolve_target(source_membername: &str, target_ref: &str) -> String {
    let base = match source_membername.rfind('/') {
        Some(pos) => &source_membername[..pos],
        None => "",
    };

    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target_ref.split('/') {
        match segment {
            ".." => {
                segments.pop();
            },
            "." | "" => {},
            other => segments.push(other),
        }
    }

    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(rt::SLIDE, "slides/slide1.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_xml_round_trip() {
        let mut rels = Relationships::new();
        rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout7.xml");
        rels.add_external(rt::HYPERLINK, "https://example.com/?a=1&b=2");

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"TargetMode="External""#));

        let parsed = Relationships::from_xml(xml.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 2);
        let link = parsed.get("rId2").unwrap();
        assert!(link.is_external());
        assert_eq!(link.target_ref(), "https://example.com/?a=1&b=2");
        assert_eq!(
            parsed.find_by_type(rt::SLIDE_LAYOUT).unwrap().target_ref(),
            "../slideLayouts/slideLayout7.xml"
        );
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(
            resolve_target("ppt/slides/slide1.xml", "../media/image1.png"),
            "ppt/media/image1.png"
        );
        assert_eq!(
            resolve_target("ppt/presentation.xml", "slides/slide2.xml"),
            "ppt/slides/slide2.xml"
        );
        // Package-level relationships resolve against the package root.
        assert_eq!(resolve_target("", "ppt/presentation.xml"), "ppt/presentation.xml");
    }
}
