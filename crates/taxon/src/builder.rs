//! One-shot construction of [`EnumTable`]s.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::BuildError;
use crate::merge::Merge;
use crate::table::{EnumEntry, EnumTable};

/// Accumulates `(name, spec)` pairs in definition order and builds the
/// enriched table.
///
/// ```rust,ignore
/// let colors = EnumBuilder::new("colors")
/// 	.entry("RED", ColorSpec { hex: "#F00" })
/// 	.entry("GREEN", ColorSpec { hex: "#0F0" })
/// 	.build()?;
/// ```
///
/// The order of `entry` calls is load-bearing: it fixes each entry's
/// [`index`](EnumEntry::index) and the table's iteration order.
pub struct EnumBuilder<T> {
	label: &'static str,
	entries: Vec<(Box<str>, T)>,
	defaults: Option<T>,
}

impl<T> EnumBuilder<T> {
	/// Creates an empty builder. The label names the table in errors and
	/// trace output.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			entries: Vec::new(),
			defaults: None,
		}
	}

	/// Appends one entry. Duplicate names are detected at [`build`](Self::build).
	pub fn entry(mut self, name: impl Into<Box<str>>, spec: T) -> Self {
		self.entries.push((name.into(), spec));
		self
	}

	/// Appends multiple entries in iteration order.
	pub fn extend<N, I>(mut self, entries: I) -> Self
	where
		N: Into<Box<str>>,
		I: IntoIterator<Item = (N, T)>,
	{
		self.entries
			.extend(entries.into_iter().map(|(name, spec)| (name.into(), spec)));
		self
	}

	/// Sets the shared defaults layered beneath every entry's own fields.
	/// A later call replaces the previous defaults.
	pub fn defaults(mut self, defaults: T) -> Self {
		self.defaults = Some(defaults);
		self
	}
}

impl<T: Merge> EnumBuilder<T> {
	/// Builds the table: layers defaults beneath each entry's fields,
	/// attaches the computed `name` and `index`, and indexes entries by
	/// name.
	///
	/// Entry fields win over defaults. Indices are 0-based, contiguous,
	/// and assigned strictly in the order entries were appended. An empty
	/// builder yields an empty table.
	pub fn build(self) -> Result<EnumTable<T>, BuildError> {
		let mut entries = Vec::with_capacity(self.entries.len());
		let mut by_name =
			FxHashMap::with_capacity_and_hasher(self.entries.len(), Default::default());

		for (name, mut spec) in self.entries {
			if let Some(defaults) = &self.defaults {
				spec.merge_defaults(defaults);
			}

			let index = entries.len();
			if by_name.insert(name.clone(), index).is_some() {
				return Err(BuildError::DuplicateName {
					table: self.label,
					name: name.into_string(),
				});
			}
			entries.push(EnumEntry::new(name, index, spec));
		}

		debug!(table = self.label, entries = entries.len(), "enum table built");
		Ok(EnumTable::from_parts(self.label, entries, by_name))
	}
}
