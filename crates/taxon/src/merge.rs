//! Defaults layering for entry payloads.
//!
//! [`Merge`] expresses "default fields applied beneath entry-specific
//! fields" over typed payloads: a field the entry left unset takes the
//! default's value, a field the entry set is untouched. `Option` is the
//! canonical unset-able field; plain scalars are always present, so the
//! entry value wins unconditionally.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

/// Layers shared defaults beneath a payload's own fields.
///
/// Implementations must keep set fields untouched; only fields the payload
/// left unset may take the default's value. Structs usually derive this
/// (`#[derive(Merge)]`, feature `derive`) to recurse field-wise.
pub trait Merge {
	/// Fills fields this payload left unset from `defaults`.
	fn merge_defaults(&mut self, defaults: &Self);
}

/// `None` takes a clone of the default; `Some` wins.
impl<T: Clone> Merge for Option<T> {
	fn merge_defaults(&mut self, defaults: &Self) {
		if self.is_none()
			&& let Some(value) = defaults
		{
			*self = Some(value.clone());
		}
	}
}

impl<T: Merge + ?Sized> Merge for Box<T> {
	fn merge_defaults(&mut self, defaults: &Self) {
		(**self).merge_defaults(defaults);
	}
}

/// Key-wise union; keys the payload already has win. Values are shallow
/// clones of the default, never deep-merged.
impl<K: Eq + Hash + Clone, V: Clone, S: BuildHasher> Merge for HashMap<K, V, S> {
	fn merge_defaults(&mut self, defaults: &Self) {
		for (key, value) in defaults {
			if !self.contains_key(key) {
				self.insert(key.clone(), value.clone());
			}
		}
	}
}

/// Key-wise union; keys the payload already has win.
impl<K: Ord + Clone, V: Clone> Merge for BTreeMap<K, V> {
	fn merge_defaults(&mut self, defaults: &Self) {
		for (key, value) in defaults {
			if !self.contains_key(key) {
				self.insert(key.clone(), value.clone());
			}
		}
	}
}

macro_rules! merge_leaf {
	($($ty:ty),* $(,)?) => {
		$(
			/// Always-present leaf; the entry value wins.
			impl Merge for $ty {
				#[inline]
				fn merge_defaults(&mut self, _defaults: &Self) {}
			}
		)*
	};
}

merge_leaf!(
	(),
	bool,
	char,
	u8,
	u16,
	u32,
	u64,
	u128,
	usize,
	i8,
	i16,
	i32,
	i64,
	i128,
	isize,
	f32,
	f64,
	String,
	&'static str,
);

/// Shared references are leaves; the entry value wins.
impl<T: ?Sized> Merge for Arc<T> {
	#[inline]
	fn merge_defaults(&mut self, _defaults: &Self) {}
}

/// Shared references are leaves; the entry value wins.
impl<T: ?Sized> Merge for Rc<T> {
	#[inline]
	fn merge_defaults(&mut self, _defaults: &Self) {}
}

/// Sequences are always present; the entry value wins.
impl<T> Merge for Vec<T> {
	#[inline]
	fn merge_defaults(&mut self, _defaults: &Self) {}
}

/// Key-wise union at the top level; keys the bag already has win. Nested
/// objects are not recursed into.
#[cfg(feature = "json")]
impl Merge for serde_json::Map<String, serde_json::Value> {
	fn merge_defaults(&mut self, defaults: &Self) {
		for (key, value) in defaults {
			self.entry(key.clone()).or_insert_with(|| value.clone());
		}
	}
}

/// Object-to-object bags union key-wise; any other shape is a leaf and the
/// entry value wins.
#[cfg(feature = "json")]
impl Merge for serde_json::Value {
	fn merge_defaults(&mut self, defaults: &Self) {
		if let (serde_json::Value::Object(bag), serde_json::Value::Object(defaults)) =
			(self, defaults)
		{
			bag.merge_defaults(defaults);
		}
	}
}
