//! Version catalog detection and parsing
//!
//! This module provides functionality to:
//! - Locate a `libs.versions.toml` file and reject non-TOML inputs
//! - Parse `[versions]` aliases and `[libraries]` coordinates
//! - Relocate alias declarations for annotating results

mod catalog;
mod detector;

pub use catalog::{declaration_line, parse_catalog, CatalogParser, ParsedCatalog};
pub use detector::{ensure_toml, locate_catalog, read_catalog, CATALOG_FILENAME};
