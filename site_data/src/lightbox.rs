#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewerState {
	#[default]
	Closed,
	Open(usize)
}

/// Full-screen viewer over the images that were on the page when it was set up. With no images
/// at all, every transition is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
	images: Vec<String>,
	state: ViewerState
}

impl Lightbox {
	#[must_use]
	pub fn new(images: Vec<String>) -> Self {
		Self { images, state: ViewerState::Closed }
	}

	#[must_use]
	pub fn state(&self) -> ViewerState {
		self.state
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		matches!(self.state, ViewerState::Open(_))
	}

	pub fn activate(&mut self, idx: usize) {
		if idx < self.images.len() {
			self.state = ViewerState::Open(idx);
		}
	}

	pub fn next(&mut self) {
		if let ViewerState::Open(idx) = self.state {
			self.state = ViewerState::Open((idx + 1) % self.images.len());
		}
	}

	pub fn previous(&mut self) {
		if let ViewerState::Open(idx) = self.state {
			let len = self.images.len();
			self.state = ViewerState::Open((idx + len - 1) % len);
		}
	}

	pub fn close(&mut self) {
		self.state = ViewerState::Closed;
	}

	/// Keyboard routing. Only does anything while open; returns whether the key was used.
	pub fn handle_key(&mut self, key: &str) -> bool {
		if !self.is_open() {
			return false;
		}

		match key {
			"ArrowRight" => self.next(),
			"ArrowLeft" => self.previous(),
			"Escape" => self.close(),
			_ => return false
		}

		true
	}

	#[must_use]
	pub fn current_image(&self) -> Option<&str> {
		match self.state {
			ViewerState::Open(idx) => self.images.get(idx).map(String::as_str),
			ViewerState::Closed => None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn three() -> Lightbox {
		Lightbox::new(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()])
	}

	#[test]
	fn next_wraps_to_start() {
		let mut lb = three();
		lb.activate(2);
		lb.next();
		assert_eq!(lb.state(), ViewerState::Open(0));
		assert_eq!(lb.current_image(), Some("a.jpg"));
	}

	#[test]
	fn previous_wraps_to_end() {
		let mut lb = three();
		lb.activate(0);
		lb.previous();
		assert_eq!(lb.state(), ViewerState::Open(2));
		assert_eq!(lb.current_image(), Some("c.jpg"));
	}

	#[test]
	fn activate_from_open_jumps() {
		let mut lb = three();
		lb.activate(1);
		lb.activate(2);
		assert_eq!(lb.state(), ViewerState::Open(2));
	}

	#[test]
	fn navigation_while_closed_does_nothing() {
		let mut lb = three();
		lb.next();
		lb.previous();
		assert_eq!(lb.state(), ViewerState::Closed);
		assert_eq!(lb.current_image(), None);
	}

	#[test]
	fn keys_only_route_while_open() {
		let mut lb = three();
		assert!(!lb.handle_key("ArrowRight"));
		assert_eq!(lb.state(), ViewerState::Closed);

		lb.activate(0);
		assert!(lb.handle_key("ArrowRight"));
		assert_eq!(lb.state(), ViewerState::Open(1));
		assert!(lb.handle_key("ArrowLeft"));
		assert!(lb.handle_key("ArrowLeft"));
		assert_eq!(lb.state(), ViewerState::Open(2));
		assert!(!lb.handle_key("Enter"));
		assert!(lb.handle_key("Escape"));
		assert!(!lb.is_open());
	}

	#[test]
	fn empty_viewer_is_inert() {
		let mut lb = Lightbox::new(Vec::new());
		lb.activate(0);
		assert!(!lb.is_open());
		assert!(!lb.handle_key("ArrowLeft"));
	}
}
