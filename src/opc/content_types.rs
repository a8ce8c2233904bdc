//! Builder for the `[Content_Types].xml` manifest.
//!
//! Maps file extensions (Default elements) and individual part names
//! (Override elements) to content types.

use crate::common::xml::escape_xml;
use crate::opc::constants::{content_type as ct, namespace};
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

/// Content type manifest for an OPC package.
#[derive(Debug)]
pub struct ContentTypes {
    /// Default content types by extension
    defaults: HashMap<String, String>,

    /// Override content types by partname (with leading slash)
    overrides: HashMap<String, String>,
}

impl ContentTypes {
    /// Create a manifest seeded with the standard defaults.
    pub fn new() -> Self {
        let mut defaults = HashMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: HashMap::new(),
        }
    }

    /// Register a default content type for a file extension.
    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_string(), content_type.to_string());
    }

    /// Register an override content type for a specific part.
    ///
    /// `partname` is the package member name without a leading slash;
    /// the slash is added in the manifest.
    pub fn add_override(&mut self, partname: &str, content_type: &str) {
        self.overrides
            .insert(format!("/{partname}"), content_type.to_string());
    }

    /// Generate the XML for `[Content_Types].xml`.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        let _ = write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES);

        // Default elements, sorted by extension for deterministic output
        let mut exts: Vec<_> = self.defaults.keys().collect();
        exts.sort();
        for ext in exts {
            let _ = write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(&self.defaults[ext])
            );
        }

        // Override elements, sorted by partname
        let mut partnames: Vec<_> = self.overrides.keys().collect();
        partnames.sort();
        for partname in partnames {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(&self.overrides[partname])
            );
        }

        xml.push_str("</Types>");
        xml
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypes::new();
        cti.add_default("png", "image/png");
        cti.add_override("ppt/presentation.xml", ct::PML_PRESENTATION_MAIN);

        let xml = cti.to_xml();
        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Override PartName="/ppt/presentation.xml""#));
    }
}
