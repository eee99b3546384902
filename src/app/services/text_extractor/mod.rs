//! Text extraction of point tables from wiki pages and inventory books
//!
//! Each extractor is a line-oriented state machine: it scans the text once,
//! emits one row per recognized point and one diagnostic per rejected line
//! or entry. The rows share a fixed column set per source, so the result can
//! be written as CSV or fed straight to the conversion pipeline.
//!
//! ## Architecture
//!
//! - [`wiki_map`] - `{{G|...}}` lines of a map section
//! - [`wiki_list`] - Rows of an article's list tables
//! - [`inventory`] - Entries of a cave inventory with Lambert III positions
//! - [`patterns`] - Line recognizers shared by the extractors
//! - [`markup`] - Wiki markup cleanup
//! - [`stats`] - Extraction result structure
//!
//! ## Usage
//!
//! ```rust
//! use table2kml::app::services::text_extractor::{Extractor, WikiMapExtractor};
//!
//! let text = "{{Début de carte}}\n\
//!             {{G|Lot|44.6|1.7|Dolmen du Pech|dolmen sans toponyme}}\n\
//!             {{Fin de carte}}\n";
//!
//! let extractor = WikiMapExtractor::new("Lot")?;
//! let result = extractor.extract(text);
//!
//! assert_eq!(result.rows.len(), 1);
//! assert_eq!(result.rows[0][0], "Dolmen du Pech");
//! # Ok::<(), table2kml::Error>(())
//! ```

pub mod inventory;
pub mod markup;
pub mod patterns;
pub mod stats;
pub mod wiki_list;
pub mod wiki_map;

#[cfg(test)]
mod tests;

pub use inventory::InventoryExtractor;
pub use stats::ExtractionResult;
pub use wiki_list::WikiListExtractor;
pub use wiki_map::WikiMapExtractor;

/// A text source that yields a point table
pub trait Extractor {
    /// Short label of the source, used in file names and logs
    fn kind(&self) -> &'static str;

    /// Scan the whole text; never fails, rejected lines become diagnostics
    fn extract(&self, text: &str) -> ExtractionResult;
}
