//! Every delay the pages wait on, in milliseconds. The CSS transitions in [`crate::style`] are
//! written to line up with these.

/// How long the fake "send" of the contact form takes
pub const SUBMIT_LATENCY_MS: u32 = 2000;

/// From creation until a notification starts sliding in
pub const NOTICE_ENTER_DELAY_MS: u32 = 100;
/// From creation until a notification starts sliding back out
pub const NOTICE_DISPLAY_MS: u32 = 5000;
/// Length of the slide-out; the notification is removed once it's done
pub const NOTICE_EXIT_MS: u32 = 300;

pub const FILTER_ENTER_DELAY_MS: u32 = 50;
pub const FILTER_EXIT_MS: u32 = 300;

pub const LIGHTBOX_FADE_DELAY_MS: u32 = 100;

/// Gap between one gallery item's scroll reveal and the next
pub const REVEAL_STAGGER_MS: u32 = 100;
