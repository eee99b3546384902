//! Column resolution for loosely named input tables
//!
//! Spreadsheet authors rename, reorder and annotate headers freely
//! ("Lat (WGS84)", "Nom du site"). Logical columns are therefore matched by
//! prefix against the physical headers, in declaration order, each physical
//! column being claimed at most once.
//!
//! ## Architecture
//!
//! - [`resolver`] - Header normalization, prefix matching and description
//!   column ordering
//!
//! ## Usage
//!
//! ```rust
//! use table2kml::app::models::ColumnSchema;
//! use table2kml::app::services::column_resolver::resolve;
//!
//! let headers: Vec<String> = ["Nom du site", "Lat (WGS84)", "Lon", "Commune"]
//!     .iter()
//!     .map(|h| h.to_string())
//!     .collect();
//!
//! let resolved = resolve(&headers, &ColumnSchema::generic()).unwrap();
//! assert_eq!(resolved.name.physical_header, "Nom du site");
//! assert_eq!(resolved.latitude.column_index, 1);
//! ```

pub mod resolver;

#[cfg(test)]
mod tests;

pub use resolver::{ResolvedColumns, SchemaError, normalize_header, resolve};
