//! Row validation, description building and batch accumulation
//!
//! This module turns a [`RawTable`](crate::app::models::RawTable) into
//! accepted [`PointRecord`](crate::app::models::PointRecord)s and row-level
//! [`Diagnostic`](crate::app::models::Diagnostic)s. A bad row never aborts
//! the batch.
//!
//! ## Architecture
//!
//! - [`pipeline`] - Batch orchestration over a table
//! - [`validator`] - Mandatory field checks and coordinate parsing per row
//! - [`description`] - HTML description rendering, status code decoding and
//!   URL shortening
//! - [`stats`] - Conversion statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use table2kml::app::models::{ColumnSchema, RawRow, RawTable};
//! use table2kml::app::services::row_validator::PointPipeline;
//! use table2kml::Config;
//!
//! let mut table = RawTable::new(vec!["Nom".into(), "Lat".into(), "Lon".into()]);
//! table.push_row(RawRow::new(vec!["Site A".into(), "44.5".into(), "1.5".into()]));
//!
//! let pipeline = PointPipeline::new(ColumnSchema::generic(), Config::default());
//! let result = pipeline.run(&table)?;
//!
//! println!("{} records, {} skipped", result.records.len(), result.diagnostics.len());
//! # Ok::<(), table2kml::Error>(())
//! ```

pub mod description;
pub mod pipeline;
pub mod stats;
pub mod validator;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use description::{DescriptionBuilder, StatusFlag, decode_status, format_url};
pub use pipeline::PointPipeline;
pub use stats::{ConversionResult, ConversionStats};
pub use validator::RowValidator;
