//! Read-only enriched enumeration tables.

use std::ops::{Deref, Index};

use rustc_hash::FxHashMap;

/// One enriched entry of an [`EnumTable`].
///
/// Carries the computed identity (the symbolic `name` and the 0-based
/// definition-order `index`) alongside the merged payload. The payload is
/// reachable through [`fields`](Self::fields) or transparently via `Deref`,
/// so `entry.label` reads a payload field directly.
///
/// `name` and `index` are reserved computed fields: the payload cannot
/// displace them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnumEntry<T> {
	name: Box<str>,
	index: usize,
	#[cfg_attr(feature = "serde", serde(flatten))]
	fields: T,
}

impl<T> EnumEntry<T> {
	pub(crate) fn new(name: Box<str>, index: usize, fields: T) -> Self {
		Self { name, index, fields }
	}

	/// The entry's symbolic name (its key in the table).
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The entry's 0-based position in the table's definition order.
	#[inline]
	pub fn index(&self) -> usize {
		self.index
	}

	/// The merged payload.
	#[inline]
	pub fn fields(&self) -> &T {
		&self.fields
	}
}

impl<T> Deref for EnumEntry<T> {
	type Target = T;

	#[inline]
	fn deref(&self) -> &T {
		&self.fields
	}
}

/// Ordered, read-only mapping of symbolic names to enriched entries.
///
/// Built once via [`EnumBuilder`](crate::EnumBuilder). Exposes name lookup,
/// positional access, and ordered iteration; there is no mutating
/// operation. Entry order is the order names were given to the builder, and
/// each entry's [`index`](EnumEntry::index) is its position in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTable<T> {
	label: &'static str,
	entries: Vec<EnumEntry<T>>,
	by_name: FxHashMap<Box<str>, usize>,
}

impl<T> EnumTable<T> {
	pub(crate) fn from_parts(
		label: &'static str,
		entries: Vec<EnumEntry<T>>,
		by_name: FxHashMap<Box<str>, usize>,
	) -> Self {
		Self { label, entries, by_name }
	}

	/// The diagnostic label this table was built under.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Looks up an entry by name.
	#[inline]
	pub fn get(&self, name: &str) -> Option<&EnumEntry<T>> {
		self.by_name.get(name).map(|&position| &self.entries[position])
	}

	/// Looks up an entry by its definition-order position.
	#[inline]
	pub fn get_index(&self, index: usize) -> Option<&EnumEntry<T>> {
		self.entries.get(index)
	}

	/// Returns true if an entry with the given name exists.
	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	/// All entries in definition order.
	#[inline]
	pub fn entries(&self) -> &[EnumEntry<T>] {
		&self.entries
	}

	/// Iterates entries in definition order.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &EnumEntry<T>> {
		self.entries.iter()
	}

	/// Iterates entry names in definition order.
	#[inline]
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|entry| entry.name())
	}

	/// Finds the first entry matching the predicate, in definition order.
	///
	/// This is the reverse-lookup path: locating an entry by a payload
	/// field rather than by name.
	pub fn find<P>(&self, mut predicate: P) -> Option<&EnumEntry<T>>
	where
		P: FnMut(&EnumEntry<T>) -> bool,
	{
		self.entries.iter().find(|&entry| predicate(entry))
	}

	/// Number of entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the table has no entries.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<T> Index<&str> for EnumTable<T> {
	type Output = EnumEntry<T>;

	/// Direct key lookup, `&table["KEY"]`.
	///
	/// # Panics
	///
	/// Panics if no entry has the given name. Use [`EnumTable::get`] for
	/// fallible lookup.
	fn index(&self, name: &str) -> &EnumEntry<T> {
		self.get(name)
			.unwrap_or_else(|| panic!("no entry named {name:?} in enum table `{}`", self.label))
	}
}

impl<'a, T> IntoIterator for &'a EnumTable<T> {
	type Item = &'a EnumEntry<T>;
	type IntoIter = std::slice::Iter<'a, EnumEntry<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for EnumTable<T> {
	/// Serializes as a name-keyed map of entries, preserving entry order.
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		use serde::ser::SerializeMap;

		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for entry in &self.entries {
			map.serialize_entry(entry.name(), entry)?;
		}
		map.end()
	}
}
