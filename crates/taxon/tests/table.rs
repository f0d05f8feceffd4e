//! End-to-end coverage of table construction and consumption.
#![cfg(feature = "derive")]

use taxon::{BuildError, EnumBuilder, EnumTable, Merge};

#[derive(Debug, Clone, PartialEq, Eq, Merge)]
struct ColorSpec {
	hex: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Merge)]
struct RoleSpec {
	label: Option<&'static str>,
	can_edit: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Merge)]
struct Bare;

fn colors() -> EnumTable<ColorSpec> {
	EnumBuilder::new("colors")
		.entry("RED", ColorSpec { hex: "#F00" })
		.entry("GREEN", ColorSpec { hex: "#0F0" })
		.build()
		.unwrap()
}

#[test]
fn entries_are_enriched_with_name_and_index() {
	let colors = colors();

	let red = &colors["RED"];
	assert_eq!(red.name(), "RED");
	assert_eq!(red.index(), 0);
	assert_eq!(red.hex, "#F00");

	let green = &colors["GREEN"];
	assert_eq!(green.name(), "GREEN");
	assert_eq!(green.index(), 1);
	assert_eq!(green.hex, "#0F0");
}

#[test]
fn table_keys_and_order_match_input() {
	let colors = colors();

	let names: Vec<_> = colors.names().collect();
	assert_eq!(names, ["RED", "GREEN"]);

	for (position, entry) in colors.entries().iter().enumerate() {
		assert_eq!(entry.index(), position);
		assert_eq!(colors.get_index(position).unwrap(), entry);
	}

	// `for` iteration sees the same order.
	let mut seen = Vec::new();
	for entry in &colors {
		seen.push(entry.name().to_owned());
	}
	assert_eq!(seen, ["RED", "GREEN"]);
}

#[test]
fn defaults_sit_beneath_entry_fields() {
	let roles = EnumBuilder::new("roles")
		.entry("VIEWER", RoleSpec { label: Some("Viewer"), can_edit: None })
		.entry("EDITOR", RoleSpec { label: Some("Editor"), can_edit: Some(true) })
		.defaults(RoleSpec { label: None, can_edit: Some(false) })
		.build()
		.unwrap();

	assert_eq!(roles["VIEWER"].can_edit, Some(false));
	assert_eq!(roles["EDITOR"].can_edit, Some(true));
	assert_eq!(roles["VIEWER"].label, Some("Viewer"));
}

#[test]
fn empty_specs_reduce_to_name_and_index() {
	let table = EnumBuilder::new("bare")
		.entry("A", Bare)
		.entry("B", Bare)
		.build()
		.unwrap();

	assert_eq!(table["A"].name(), "A");
	assert_eq!(table["A"].index(), 0);
	assert_eq!(table["B"].name(), "B");
	assert_eq!(table["B"].index(), 1);
}

#[test]
fn reverse_lookup_finds_entry_by_field() {
	let colors = colors();
	let green = colors.find(|entry| entry.hex == "#0F0").unwrap();
	assert_eq!(green.name(), "GREEN");
	assert!(colors.find(|entry| entry.hex == "#FFF").is_none());
}

#[test]
fn building_twice_from_equal_input_is_idempotent() {
	assert_eq!(colors(), colors());
}

#[test]
fn empty_input_builds_empty_table() {
	let table = EnumBuilder::<Bare>::new("empty").build().unwrap();
	assert!(table.is_empty());
	assert_eq!(table.names().count(), 0);
}

#[test]
fn duplicate_names_are_an_input_error() {
	let err = EnumBuilder::new("colors")
		.entry("RED", ColorSpec { hex: "#F00" })
		.entry("RED", ColorSpec { hex: "#F55" })
		.build()
		.unwrap_err();

	assert_eq!(
		err,
		BuildError::DuplicateName {
			table: "colors",
			name: "RED".into(),
		}
	);
}

#[test]
#[should_panic(expected = "no entry named")]
fn index_operator_panics_on_missing_name() {
	let colors = colors();
	let _ = &colors["BLUE"];
}

#[test]
fn label_names_the_table() {
	assert_eq!(colors().label(), "colors");
}
