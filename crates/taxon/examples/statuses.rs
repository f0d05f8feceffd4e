//! Builds a small issue-status table and prints it.

use taxon::{EnumBuilder, Merge};

#[derive(Debug, Merge)]
struct Status {
	label: Option<&'static str>,
	terminal: Option<bool>,
}

fn main() -> Result<(), taxon::BuildError> {
	let statuses = EnumBuilder::new("statuses")
		.entry("OPEN", Status { label: Some("Open"), terminal: None })
		.entry("IN_REVIEW", Status { label: Some("In review"), terminal: None })
		.entry("CLOSED", Status { label: Some("Closed"), terminal: Some(true) })
		.defaults(Status { label: None, terminal: Some(false) })
		.build()?;

	for status in &statuses {
		println!(
			"{:>2}  {:<10}  label={:?}  terminal={:?}",
			status.index(),
			status.name(),
			status.label,
			status.terminal,
		);
	}

	let first_terminal = statuses.find(|status| status.terminal == Some(true));
	println!("first terminal status: {:?}", first_terminal.map(|status| status.name()));

	Ok(())
}
