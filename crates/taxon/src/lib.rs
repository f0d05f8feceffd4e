//! Enriched, read-only enumeration tables.
//!
//! Centralizes domain constants (statuses, categories, log levels) as tables
//! where every entry carries a symbolic name, a stable definition-order
//! index, and an arbitrary caller-defined payload. Shared defaults are
//! layered beneath each entry's own fields via [`Merge`], so entry fields
//! always win.
//!
//! ```
//! use taxon::{EnumBuilder, Merge};
//!
//! #[derive(Debug, Merge)]
//! struct Status {
//! 	label: Option<&'static str>,
//! 	terminal: Option<bool>,
//! }
//!
//! # fn main() -> Result<(), taxon::BuildError> {
//! let statuses = EnumBuilder::new("statuses")
//! 	.entry("OPEN", Status { label: Some("Open"), terminal: None })
//! 	.entry("CLOSED", Status { label: Some("Closed"), terminal: Some(true) })
//! 	.defaults(Status { label: None, terminal: Some(false) })
//! 	.build()?;
//!
//! assert_eq!(statuses["OPEN"].index(), 0);
//! assert_eq!(statuses["OPEN"].terminal, Some(false));
//! assert_eq!(statuses["CLOSED"].terminal, Some(true));
//! # Ok(())
//! # }
//! ```
//!
//! Tables are built once and never mutated; a changed taxonomy means
//! rebuilding the whole table.

/// One-shot construction of enum tables.
pub mod builder;
/// Errors reported during table construction.
pub mod error;
/// Defaults layering for entry payloads.
pub mod merge;
/// The read-only table and entry types.
pub mod table;

pub use builder::EnumBuilder;
pub use error::BuildError;
pub use merge::Merge;
pub use table::{EnumEntry, EnumTable};

#[cfg(feature = "derive")]
pub use taxon_macros::Merge;
