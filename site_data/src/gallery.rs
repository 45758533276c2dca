use serde::Deserialize;

use crate::timing::REVEAL_STAGGER_MS;

pub const ALL_TAG: &str = "all";

/// How much of an item has to be on screen before it's revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Items count as on screen only once they're 50px clear of the bottom edge
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
	pub title: String,
	pub category: String,
	pub image: String
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
	#[default]
	All,
	Category(String)
}

impl Filter {
	#[must_use]
	pub fn from_tag(tag: &str) -> Self {
		if tag == ALL_TAG {
			Self::All
		} else {
			Self::Category(tag.to_string())
		}
	}

	#[must_use]
	pub fn tag(&self) -> &str {
		match self {
			Self::All => ALL_TAG,
			Self::Category(c) => c
		}
	}

	#[must_use]
	pub fn admits(&self, category: &str) -> bool {
		match self {
			Self::All => true,
			Self::Category(c) => c == category
		}
	}
}

/// An item that's coming in gets displayed right away but starts shrunk and transparent; one
/// that's going out stays in the layout until its fade has had time to finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemPhase {
	Shown,
	Entering,
	Leaving,
	Hidden
}

impl ItemPhase {
	#[must_use]
	pub const fn style(self) -> &'static str {
		match self {
			Self::Shown => "display: block; opacity: 1; transform: scale(1);",
			Self::Entering | Self::Leaving => "display: block; opacity: 0; transform: scale(0.8);",
			Self::Hidden => "display: none; opacity: 0; transform: scale(0.8);"
		}
	}

	#[must_use]
	pub const fn in_layout(self) -> bool {
		!matches!(self, Self::Hidden)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gallery {
	items: Vec<GalleryItem>,
	phases: Vec<ItemPhase>,
	revealed: Vec<bool>,
	active: Filter,
	generation: u64
}

impl Gallery {
	#[must_use]
	pub fn new(items: Vec<GalleryItem>) -> Self {
		let phases = vec![ItemPhase::Shown; items.len()];
		let revealed = vec![false; items.len()];
		Self { items, phases, revealed, active: Filter::All, generation: 0 }
	}

	#[must_use]
	pub fn items(&self) -> &[GalleryItem] {
		&self.items
	}

	#[must_use]
	pub fn phase(&self, idx: usize) -> Option<ItemPhase> {
		self.phases.get(idx).copied()
	}

	/// Whether the item has scrolled into view yet. Once revealed it stays that way.
	#[must_use]
	pub fn is_revealed(&self, idx: usize) -> bool {
		self.revealed.get(idx).copied().unwrap_or(false)
	}

	pub fn reveal(&mut self, idx: usize) {
		if let Some(revealed) = self.revealed.get_mut(idx) {
			*revealed = true;
		}
	}

	/// Items reveal one after another, in page order
	#[must_use]
	pub fn reveal_delay_ms(idx: usize) -> u32 {
		u32::try_from(idx).map_or(u32::MAX, |idx| idx.saturating_mul(REVEAL_STAGGER_MS))
	}

	#[must_use]
	pub fn active(&self) -> &Filter {
		&self.active
	}

	/// Bumped every time a filter is applied. The timers that settle a transition carry the
	/// generation they were started under and are ignored once it's stale.
	#[must_use]
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// The filter buttons: `all` and then each category in the order it first shows up
	#[must_use]
	pub fn tags(&self) -> Vec<&str> {
		let mut tags = vec![ALL_TAG];
		for item in &self.items {
			if !tags.contains(&item.category.as_str()) {
				tags.push(&item.category);
			}
		}
		tags
	}

	pub fn apply_filter(&mut self, tag: &str) -> u64 {
		self.active = Filter::from_tag(tag);
		self.generation += 1;

		for (item, phase) in self.items.iter().zip(self.phases.iter_mut()) {
			*phase = if self.active.admits(&item.category) {
				ItemPhase::Entering
			} else if *phase == ItemPhase::Hidden {
				ItemPhase::Hidden
			} else {
				ItemPhase::Leaving
			};
		}

		self.generation
	}

	/// Runs once the entrance delay has passed
	pub fn settle_entering(&mut self, generation: u64) {
		self.settle(generation, ItemPhase::Entering, ItemPhase::Shown);
	}

	/// Runs once the exit fade has passed
	pub fn settle_leaving(&mut self, generation: u64) {
		self.settle(generation, ItemPhase::Leaving, ItemPhase::Hidden);
	}

	fn settle(&mut self, generation: u64, from: ItemPhase, to: ItemPhase) {
		if generation != self.generation {
			return;
		}

		for phase in self.phases.iter_mut().filter(|p| **p == from) {
			*phase = to;
		}
	}

	/// Indices of the items that will be visible once everything settles
	#[must_use]
	pub fn visible(&self) -> Vec<usize> {
		self.items.iter()
			.enumerate()
			.filter(|(_, item)| self.active.admits(&item.category))
			.map(|(idx, _)| idx)
			.collect()
	}
}
