#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
	Success,
	Error,
	#[default]
	Info
}

impl NoticeKind {
	#[must_use]
	pub const fn icon(self) -> &'static str {
		match self {
			Self::Success => "✓",
			Self::Error => "✗",
			Self::Info => "ℹ"
		}
	}

	#[must_use]
	pub const fn class(self) -> &'static str {
		match self {
			Self::Success => "notification notification-success",
			Self::Error => "notification notification-error",
			Self::Info => "notification notification-info"
		}
	}
}

/// Where a notice is in its short life. It's created off-screen, slides in, slides back out, and
/// then gets dropped from the board entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticePhase {
	Entering,
	Shown,
	Leaving
}

impl NoticePhase {
	#[must_use]
	pub const fn transform(self) -> &'static str {
		match self {
			Self::Shown => "transform: translateX(0);",
			Self::Entering | Self::Leaving => "transform: translateX(100%);"
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
	pub id: u64,
	pub message: String,
	pub kind: NoticeKind,
	pub phase: NoticePhase
}

/// Holds at most one notice. Every phase change is addressed by id, so the timers belonging to a
/// notice that has since been replaced can't touch the new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifier {
	next_id: u64,
	current: Option<Notice>
}

impl Notifier {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces whatever is showing and returns the new notice's id
	pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind) -> u64 {
		let id = self.next_id;
		self.next_id += 1;

		self.current = Some(Notice {
			id,
			message: message.into(),
			kind,
			phase: NoticePhase::Entering
		});

		id
	}

	fn advance(&mut self, id: u64, from: NoticePhase, to: NoticePhase) {
		if let Some(notice) = self.current.as_mut().filter(|n| n.id == id && n.phase == from) {
			notice.phase = to;
		}
	}

	pub fn reveal(&mut self, id: u64) {
		self.advance(id, NoticePhase::Entering, NoticePhase::Shown);
	}

	pub fn retire(&mut self, id: u64) {
		// if the entrance timer somehow never fired we still want it to leave
		self.advance(id, NoticePhase::Entering, NoticePhase::Leaving);
		self.advance(id, NoticePhase::Shown, NoticePhase::Leaving);
	}

	pub fn remove(&mut self, id: u64) {
		if self.current.as_ref().is_some_and(|n| n.id == id) {
			self.current = None;
		}
	}

	#[must_use]
	pub fn current(&self) -> Option<&Notice> {
		self.current.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn icons_follow_kind() {
		assert_eq!(NoticeKind::Success.icon(), "✓");
		assert_eq!(NoticeKind::Error.icon(), "✗");
		assert_eq!(NoticeKind::Info.icon(), "ℹ");
		assert_eq!(NoticeKind::Error.class(), "notification notification-error");
	}

	#[test]
	fn full_lifecycle() {
		let mut board = Notifier::new();
		let id = board.show("hello", NoticeKind::Info);
		assert_eq!(board.current().map(|n| n.phase), Some(NoticePhase::Entering));

		board.reveal(id);
		assert_eq!(board.current().map(|n| n.phase), Some(NoticePhase::Shown));

		board.retire(id);
		assert_eq!(board.current().map(|n| n.phase), Some(NoticePhase::Leaving));

		board.remove(id);
		assert!(board.current().is_none());
	}

	#[test]
	fn second_notice_replaces_first() {
		let mut board = Notifier::new();
		let first = board.show("first", NoticeKind::Error);
		let second = board.show("second", NoticeKind::Success);
		assert_ne!(first, second);

		let current = board.current().unwrap();
		assert_eq!(current.message, "second");
		assert_eq!(current.kind, NoticeKind::Success);

		// the first one's timers still fire, but they shouldn't do anything
		board.reveal(first);
		board.retire(first);
		board.remove(first);

		let current = board.current().unwrap();
		assert_eq!(current.id, second);
		assert_eq!(current.phase, NoticePhase::Entering);
	}

	#[test]
	fn reveal_after_retire_does_not_bring_it_back() {
		let mut board = Notifier::new();
		let id = board.show("late", NoticeKind::Info);
		board.retire(id);
		board.reveal(id);
		assert_eq!(board.current().map(|n| n.phase), Some(NoticePhase::Leaving));
	}
}
