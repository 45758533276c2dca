use std::{collections::HashMap, sync::OnceLock};

use chrono::NaiveDate;
use regex::Regex;

pub const MIN_GUESTS: i64 = 50;
pub const MAX_GUESTS: i64 = 2000;

pub const SUBMIT_LABEL: &str = "Send Inquiry";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you for your inquiry! We'll contact you within 24 hours to discuss your wedding plans.";

/// Every field on the contact form. The order of [`Field::ALL`] is the order the required checks
/// run in, so it decides which missing field gets reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
	FirstName,
	LastName,
	Email,
	Phone,
	WeddingDate,
	EventType,
	GuestCount,
	Message
}

impl Field {
	pub const ALL: [Self; 8] = [
		Self::FirstName,
		Self::LastName,
		Self::Email,
		Self::Phone,
		Self::WeddingDate,
		Self::EventType,
		Self::GuestCount,
		Self::Message
	];

	/// The `name` attribute this field has in the form
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::FirstName => "firstName",
			Self::LastName => "lastName",
			Self::Email => "email",
			Self::Phone => "phone",
			Self::WeddingDate => "weddingDate",
			Self::EventType => "eventType",
			Self::GuestCount => "guestCount",
			Self::Message => "message"
		}
	}

	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|f| f.name() == name)
	}

	#[must_use]
	pub fn label(self) -> String {
		expand_camel_case(self.name())
	}
}

/// `weddingDate` -> `wedding date`
#[must_use]
pub fn expand_camel_case(name: &str) -> String {
	let mut out = String::with_capacity(name.len() + 4);
	for c in name.chars() {
		if c.is_ascii_uppercase() {
			out.push(' ');
		}
		out.extend(c.to_lowercase());
	}
	out
}

/// One submission attempt's worth of values. Fields that were never set read as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormRecord(HashMap<Field, String>);

impl FormRecord {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(&mut self, field: Field, value: impl Into<String>) {
		self.0.insert(field, value.into());
	}

	#[must_use]
	pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
		self.set(field, value);
		self
	}

	#[must_use]
	pub fn get(&self, field: Field) -> &str {
		self.0.get(&field).map_or("", String::as_str)
	}
}

impl FromIterator<(Field, String)> for FormRecord {
	fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("{} is required", .0.label())]
	Missing(Field),
	#[error("Please enter a valid email address")]
	Email,
	#[error("Please enter a valid phone number")]
	Phone,
	#[error("Guest count should be between {} and {}", MIN_GUESTS, MAX_GUESTS)]
	GuestCount,
	#[error("Wedding date should be in the future")]
	WeddingDate
}

fn email_pattern() -> &'static Regex {
	static EMAIL: OnceLock<Regex> = OnceLock::new();
	// This is a literal, so it can only fail if we typo it, which the tests would catch
	EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn phone_pattern() -> &'static Regex {
	static PHONE: OnceLock<Regex> = OnceLock::new();
	PHONE.get_or_init(|| Regex::new(r"^[0-9\s\-+()]+$").unwrap())
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
	email_pattern().is_match(value)
}

#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
	phone_pattern().is_match(value)
}

/// Reads the whole number a count starts with, the way a browser's `parseInt` would: leading
/// whitespace, an optional sign, then digits up to the first thing that isn't one. So `100.5`
/// is 100, `1e3` is 1, and `lots` has no count at all.
#[must_use]
pub fn leading_integer(value: &str) -> Option<i64> {
	let value = value.trim_start();
	let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
	let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
	let sign = value.len() - unsigned.len();

	if digits == 0 {
		return None;
	}

	value[..sign + digits].parse().ok()
}

#[must_use]
pub fn is_valid_guest_count(value: &str) -> bool {
	leading_integer(value).is_some_and(|count| (MIN_GUESTS..=MAX_GUESTS).contains(&count))
}

/// Dates come out of `<input type="date">` as `YYYY-MM-DD`. Anything else is treated as not being
/// a date at all, which fails the same way a past date does.
#[must_use]
pub fn is_valid_wedding_date(value: &str, today: NaiveDate) -> bool {
	NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
		.is_ok_and(|date| date >= today)
}

/// Every rule the record breaks, in the order they're checked. Only the first is ever shown.
#[must_use]
pub fn validation_errors(record: &FormRecord, today: NaiveDate) -> Vec<ValidationError> {
	let mut errors = Field::ALL.into_iter()
		.filter(|f| record.get(*f).trim().is_empty())
		.map(ValidationError::Missing)
		.collect::<Vec<_>>();

	let email = record.get(Field::Email);
	if !email.is_empty() && !is_valid_email(email) {
		errors.push(ValidationError::Email);
	}

	let phone = record.get(Field::Phone);
	if !phone.is_empty() && !is_valid_phone(phone) {
		errors.push(ValidationError::Phone);
	}

	let guests = record.get(Field::GuestCount);
	if !guests.is_empty() && !is_valid_guest_count(guests) {
		errors.push(ValidationError::GuestCount);
	}

	let date = record.get(Field::WeddingDate);
	if !date.is_empty() && !is_valid_wedding_date(date, today) {
		errors.push(ValidationError::WeddingDate);
	}

	errors
}

/// # Errors
///
/// Returns the first rule (see [`validation_errors`]) that `record` breaks
pub fn validate_submission(record: &FormRecord, today: NaiveDate) -> Result<(), ValidationError> {
	validation_errors(record, today)
		.into_iter()
		.next()
		.map_or(Ok(()), Err)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldFeedback {
	#[default]
	Neutral,
	Success,
	Error
}

impl FieldFeedback {
	fn from_ok(ok: bool) -> Self {
		if ok { Self::Success } else { Self::Error }
	}
}

/// The live check that runs as the user types. Blank fields get no feedback either way.
#[must_use]
pub fn check_field(field: Field, value: &str, today: NaiveDate) -> FieldFeedback {
	let value = value.trim();
	if value.is_empty() {
		return FieldFeedback::Neutral;
	}

	FieldFeedback::from_ok(match field {
		Field::Email => is_valid_email(value),
		Field::Phone => is_valid_phone(value),
		Field::GuestCount => is_valid_guest_count(value),
		Field::WeddingDate => is_valid_wedding_date(value, today),
		_ => true
	})
}

/// Presentation state of one `.form-group`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupState {
	pub focused: bool,
	pub feedback: FieldFeedback
}

impl GroupState {
	pub fn on_focus(&mut self) {
		self.focused = true;
	}

	pub fn on_blur(&mut self, value: &str) {
		if value.trim().is_empty() {
			self.focused = false;
		}
	}

	pub fn on_input(&mut self, field: Field, value: &str, today: NaiveDate) {
		self.focused = !value.trim().is_empty();
		self.feedback = check_field(field, value, today);
	}

	#[must_use]
	pub fn class(&self) -> String {
		let mut class = String::from("form-group");
		if self.focused {
			class.push_str(" focused");
		}
		match self.feedback {
			FieldFeedback::Neutral => (),
			FieldFeedback::Success => class.push_str(" success"),
			FieldFeedback::Error => class.push_str(" error"),
		}
		class
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Submission {
	#[default]
	Ready,
	Sending
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
	Accepted,
	Rejected(ValidationError),
	// A send is already in flight, so this one is dropped on the floor
	Busy
}

impl Submission {
	/// Gates a submit press. Only [`SubmitOutcome::Accepted`] moves us into `Sending`.
	pub fn try_begin(&mut self, record: &FormRecord, today: NaiveDate) -> SubmitOutcome {
		if *self == Self::Sending {
			return SubmitOutcome::Busy;
		}

		match validate_submission(record, today) {
			Ok(()) => {
				*self = Self::Sending;
				SubmitOutcome::Accepted
			},
			Err(e) => SubmitOutcome::Rejected(e)
		}
	}

	pub fn finish(&mut self) {
		*self = Self::Ready;
	}

	#[must_use]
	pub fn button_label(self) -> &'static str {
		match self {
			Self::Ready => SUBMIT_LABEL,
			Self::Sending => SENDING_LABEL
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
	}

	fn valid_record() -> FormRecord {
		FormRecord::new()
			.with(Field::FirstName, "Priya")
			.with(Field::LastName, "Sharma")
			.with(Field::Email, "priya@example.com")
			.with(Field::Phone, "+91 (98) 765-43210")
			.with(Field::WeddingDate, "2027-02-14")
			.with(Field::EventType, "wedding")
			.with(Field::GuestCount, "300")
			.with(Field::Message, "We'd love a floral mandap.")
	}

	#[test]
	fn valid_record_passes() {
		assert_eq!(validate_submission(&valid_record(), today()), Ok(()));
	}

	#[test]
	fn camel_case_expands_to_label() {
		assert_eq!(expand_camel_case("weddingDate"), "wedding date");
		assert_eq!(expand_camel_case("firstName"), "first name");
		assert_eq!(expand_camel_case("email"), "email");
		assert_eq!(Field::GuestCount.label(), "guest count");
	}

	#[test]
	fn field_names_round_trip() {
		for field in Field::ALL {
			assert_eq!(Field::from_name(field.name()), Some(field));
		}
		assert_eq!(Field::from_name("nickname"), None);
	}

	#[test]
	fn missing_fields_report_first_in_declaration_order() {
		for (idx, field) in Field::ALL.into_iter().enumerate() {
			// blank out this field and every one after it, so this one should be reported
			let mut record = valid_record();
			for later in &Field::ALL[idx..] {
				record.set(*later, "");
			}

			let err = validate_submission(&record, today()).unwrap_err();
			assert_eq!(err, ValidationError::Missing(field));
			assert_eq!(err.to_string(), format!("{} is required", field.label()));
		}
	}

	#[test]
	fn whitespace_only_counts_as_missing() {
		let record = valid_record().with(Field::WeddingDate, "   ");
		let err = validate_submission(&record, today()).unwrap_err();
		assert_eq!(err.to_string(), "wedding date is required");
	}

	#[test]
	fn missing_field_wins_over_other_failures() {
		let record = valid_record()
			.with(Field::Email, "nope")
			.with(Field::Message, "");
		assert_eq!(
			validation_errors(&record, today()),
			vec![ValidationError::Missing(Field::Message), ValidationError::Email]
		);
	}

	#[test]
	fn bad_email_fails_regardless_of_other_fields() {
		let record = valid_record().with(Field::Email, "not-an-email");
		let err = validate_submission(&record, today()).unwrap_err();
		assert_eq!(err, ValidationError::Email);
		assert_eq!(err.to_string(), "Please enter a valid email address");
	}

	#[test]
	fn email_shapes() {
		assert!(is_valid_email("a@b.c"));
		assert!(is_valid_email("first.last@mail.example.co.in"));
		assert!(!is_valid_email("a@b"));
		assert!(!is_valid_email("a b@c.d"));
		assert!(!is_valid_email("a@@b.c"));
		assert!(!is_valid_email("@b.c"));
	}

	#[test]
	fn phone_shapes() {
		assert!(is_valid_phone("+1 (555) 123-4567"));
		assert!(is_valid_phone("9876543210"));
		assert!(!is_valid_phone("555-CALL-NOW"));
		assert!(!is_valid_phone("123.456.7890"));

		let record = valid_record().with(Field::Phone, "call me");
		assert_eq!(validate_submission(&record, today()), Err(ValidationError::Phone));
	}

	#[test]
	fn guest_count_bounds_are_inclusive() {
		for ok in ["50", "2000", "51", "1999"] {
			let record = valid_record().with(Field::GuestCount, ok);
			assert_eq!(validate_submission(&record, today()), Ok(()), "{ok} should pass");
		}

		for bad in ["49", "2001", "0", "-60", "lots"] {
			let record = valid_record().with(Field::GuestCount, bad);
			let err = validate_submission(&record, today()).unwrap_err();
			assert_eq!(err, ValidationError::GuestCount, "{bad} should fail");
			assert_eq!(err.to_string(), "Guest count should be between 50 and 2000");
		}
	}

	#[test]
	fn guest_count_reads_leading_integer() {
		assert_eq!(leading_integer("100.5"), Some(100));
		assert_eq!(leading_integer("  120 guests"), Some(120));
		assert_eq!(leading_integer("1e3"), Some(1));
		assert_eq!(leading_integer("+75"), Some(75));
		assert_eq!(leading_integer("-60"), Some(-60));
		assert_eq!(leading_integer("lots"), None);
		assert_eq!(leading_integer("-"), None);
		assert_eq!(leading_integer(""), None);

		assert_eq!(check_field(Field::GuestCount, "100.5", today()), FieldFeedback::Success);
		assert_eq!(check_field(Field::GuestCount, "120 guests", today()), FieldFeedback::Success);
		assert_eq!(check_field(Field::GuestCount, "1e3", today()), FieldFeedback::Error);

		let record = valid_record().with(Field::GuestCount, "100.5");
		assert_eq!(validate_submission(&record, today()), Ok(()));
		let record = valid_record().with(Field::GuestCount, "1e3");
		assert_eq!(validate_submission(&record, today()), Err(ValidationError::GuestCount));
	}

	#[test]
	fn guest_count_message_follows_bounds() {
		assert_eq!(
			ValidationError::GuestCount.to_string(),
			format!("Guest count should be between {MIN_GUESTS} and {MAX_GUESTS}")
		);
	}

	#[test]
	fn wedding_date_today_passes_yesterday_fails() {
		let record = valid_record().with(Field::WeddingDate, "2026-10-19");
		assert_eq!(validate_submission(&record, today()), Ok(()));

		let record = valid_record().with(Field::WeddingDate, "2026-10-18");
		let err = validate_submission(&record, today()).unwrap_err();
		assert_eq!(err.to_string(), "Wedding date should be in the future");

		let record = valid_record().with(Field::WeddingDate, "sometime soon");
		assert_eq!(validate_submission(&record, today()), Err(ValidationError::WeddingDate));
	}

	#[test]
	fn live_check_feedback() {
		assert_eq!(check_field(Field::Email, "  ", today()), FieldFeedback::Neutral);
		assert_eq!(check_field(Field::Email, "x@y.z ", today()), FieldFeedback::Success);
		assert_eq!(check_field(Field::Email, "x@y", today()), FieldFeedback::Error);
		assert_eq!(check_field(Field::Phone, "12-34", today()), FieldFeedback::Success);
		assert_eq!(check_field(Field::GuestCount, "49", today()), FieldFeedback::Error);
		assert_eq!(check_field(Field::WeddingDate, "2026-10-19", today()), FieldFeedback::Success);
		assert_eq!(check_field(Field::WeddingDate, "2025-01-01", today()), FieldFeedback::Error);
		assert_eq!(check_field(Field::Message, "hi", today()), FieldFeedback::Success);
		assert_eq!(check_field(Field::Message, "", today()), FieldFeedback::Neutral);
	}

	#[test]
	fn group_state_classes() {
		let mut group = GroupState::default();
		assert_eq!(group.class(), "form-group");

		group.on_focus();
		assert_eq!(group.class(), "form-group focused");

		group.on_input(Field::Email, "bad", today());
		assert_eq!(group.class(), "form-group focused error");

		group.on_input(Field::Email, "good@mail.com", today());
		assert_eq!(group.class(), "form-group focused success");

		// blurring with a value keeps the label floated
		group.on_blur("good@mail.com");
		assert!(group.focused);

		group.on_input(Field::Email, "", today());
		group.on_blur("");
		assert_eq!(group.class(), "form-group");
	}

	#[test]
	fn submission_refuses_while_sending() {
		let mut sub = Submission::default();
		let bad = valid_record().with(Field::Email, "nah");

		assert_eq!(sub.try_begin(&bad, today()), SubmitOutcome::Rejected(ValidationError::Email));
		assert_eq!(sub, Submission::Ready);

		assert_eq!(sub.try_begin(&valid_record(), today()), SubmitOutcome::Accepted);
		assert_eq!(sub.button_label(), SENDING_LABEL);
		assert_eq!(sub.try_begin(&valid_record(), today()), SubmitOutcome::Busy);

		sub.finish();
		assert_eq!(sub.button_label(), SUBMIT_LABEL);
		assert_eq!(sub.try_begin(&valid_record(), today()), SubmitOutcome::Accepted);
	}
}
