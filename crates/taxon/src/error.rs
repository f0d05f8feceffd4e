//! Errors reported during table construction.

use thiserror::Error;

/// Errors from [`EnumBuilder::build`](crate::EnumBuilder::build).
///
/// Construction is all-or-nothing: any error means no table was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
	/// The same entry name was supplied more than once.
	#[error("duplicate entry name in enum table `{table}`: {name:?}")]
	DuplicateName {
		/// Label of the table being built.
		table: &'static str,
		/// The repeated entry name.
		name: String,
	},
}
