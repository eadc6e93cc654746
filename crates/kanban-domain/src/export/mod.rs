//! Board import/export functionality.
//!
//! The text format is JSON shaped as
//! `{"columns": [{"id", "title", "color"?, "cardIds"}], "cards": {id: card}}`,
//! which is the layout saved files use.

pub mod exporter;
pub mod importer;

pub use exporter::BoardExporter;
pub use importer::BoardImporter;
