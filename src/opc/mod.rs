//! OPC (Open Packaging Conventions) container layer.
//!
//! A .pptx file is a ZIP archive of XML parts tied together by relationship
//! files and a `[Content_Types].xml` manifest. This module provides the
//! physical ZIP access, relationship collections, and content-type manifest
//! assembly used by the `pptx` module.

pub mod constants;
pub mod content_types;
pub mod phys;
pub mod rels;

pub use content_types::ContentTypes;
pub use phys::{PhysPkgReader, PhysPkgWriter};
pub use rels::{Relationship, Relationships};
