use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
	pub question: String,
	// markdown
	pub answer: String
}

pub const OPEN_GLYPH: &str = "−";
pub const CLOSED_GLYPH: &str = "+";

/// A list of `len` panels of which at most one is open
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
	len: usize,
	open: Option<usize>
}

impl Accordion {
	#[must_use]
	pub fn new(len: usize) -> Self {
		Self { len, open: None }
	}

	/// Closes everything, then opens `idx` if it wasn't the one that was open
	pub fn toggle(&mut self, idx: usize) {
		let was_open = self.open == Some(idx);
		self.open = None;

		if !was_open && idx < self.len {
			self.open = Some(idx);
		}
	}

	#[must_use]
	pub fn open(&self) -> Option<usize> {
		self.open
	}

	#[must_use]
	pub fn is_open(&self, idx: usize) -> bool {
		self.open == Some(idx)
	}

	#[must_use]
	pub fn glyph(&self, idx: usize) -> &'static str {
		if self.is_open(idx) { OPEN_GLYPH } else { CLOSED_GLYPH }
	}

	/// Inline style for a panel's answer. An open panel grows to `measured`, the answer's
	/// `scrollHeight`, so nothing is cut off however long it is. Without a measurement it just
	/// isn't capped.
	#[must_use]
	pub fn panel_style(&self, idx: usize, measured: Option<i32>) -> String {
		match (self.is_open(idx), measured) {
			(false, _) => String::from("max-height: 0px;"),
			(true, Some(height)) => format!("max-height: {height}px;"),
			(true, None) => String::from("max-height: none;")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_closed() {
		let acc = Accordion::new(4);
		assert_eq!(acc.open(), None);
		assert!((0..4).all(|i| acc.glyph(i) == CLOSED_GLYPH));
	}

	#[test]
	fn opening_another_closes_the_first() {
		let mut acc = Accordion::new(3);
		acc.toggle(0);
		assert!(acc.is_open(0));

		acc.toggle(2);
		assert!(!acc.is_open(0));
		assert!(acc.is_open(2));
		assert_eq!(acc.glyph(2), OPEN_GLYPH);
		assert_eq!(acc.glyph(0), CLOSED_GLYPH);
	}

	#[test]
	fn toggling_open_item_closes_it() {
		let mut acc = Accordion::new(3);
		acc.toggle(1);
		acc.toggle(1);
		assert_eq!(acc.open(), None);
	}

	#[test]
	fn open_panel_grows_to_its_content() {
		let mut acc = Accordion::new(3);
		acc.toggle(1);
		assert_eq!(acc.panel_style(1, Some(1240)), "max-height: 1240px;");
		assert_eq!(acc.panel_style(1, None), "max-height: none;");
		assert_eq!(acc.panel_style(0, Some(1240)), "max-height: 0px;");
		assert_eq!(acc.panel_style(2, None), "max-height: 0px;");
	}

	#[test]
	fn out_of_range_just_closes() {
		let mut acc = Accordion::new(2);
		acc.toggle(0);
		acc.toggle(7);
		assert_eq!(acc.open(), None);
	}
}
