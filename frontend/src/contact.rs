use std::{collections::HashMap, rc::Rc};
use chrono::NaiveDate;
use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{
	FormData,
	HtmlFormElement,
	HtmlInputElement,
	HtmlSelectElement,
	HtmlTextAreaElement
};
use yew::prelude::*;
use site_data::{
	NoticeKind,
	form::{Field, FormRecord, GroupState, SUCCESS_MESSAGE, SubmitOutcome, Submission},
	timing::SUBMIT_LATENCY_MS
};
use crate::{
	dom,
	faq::Faq,
	nav::SiteNav,
	notification::use_notify,
	style::SharedStyle
};

const EVENT_TYPES: [(&str, &str); 6] = [
	("wedding", "Wedding Ceremony"),
	("reception", "Reception"),
	("engagement", "Engagement"),
	("mehendi", "Mehendi"),
	("sangeet", "Sangeet"),
	("other", "Other Celebration")
];

#[derive(Debug)]
enum GroupMsg {
	Focus(Field),
	Blur(Field, String),
	Input(Field, String, NaiveDate),
	Reset
}

#[derive(Clone, Default, PartialEq)]
struct FormGroups(HashMap<Field, GroupState>);

impl FormGroups {
	fn class(&self, field: Field) -> String {
		self.0.get(&field).copied().unwrap_or_default().class()
	}
}

impl Reducible for FormGroups {
	type Action = GroupMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut groups = (*self).clone();

		match action {
			GroupMsg::Focus(field) => groups.0.entry(field).or_default().on_focus(),
			GroupMsg::Blur(field, value) => groups.0.entry(field).or_default().on_blur(&value),
			GroupMsg::Input(field, value, today) => groups.0.entry(field).or_default().on_input(field, &value, today),
			GroupMsg::Reset => groups.0.clear()
		}

		groups.into()
	}
}

// Whatever control the event came from, if it's one we have on the form
fn target_value(e: &Event) -> Option<String> {
	let target = e.target()?;

	if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
		return Some(input.value());
	}
	if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
		return Some(select.value());
	}
	target.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}

fn form_group(
	field: Field,
	label: &'static str,
	wide: bool,
	control: Html,
	groups: &UseReducerHandle<FormGroups>
) -> Html {
	let dispatcher = groups.dispatcher();

	// input, focusin and focusout all bubble, so the group can listen for its control
	let oninput = {
		let dispatcher = dispatcher.clone();
		Callback::from(move |e: InputEvent| if let Some(value) = target_value(&e) {
			dispatcher.dispatch(GroupMsg::Input(field, value, dom::today()));
		})
	};
	let onfocusin = {
		let dispatcher = dispatcher.clone();
		Callback::from(move |_: FocusEvent| dispatcher.dispatch(GroupMsg::Focus(field)))
	};
	let onfocusout = Callback::from(move |e: FocusEvent| if let Some(value) = target_value(&e) {
		dispatcher.dispatch(GroupMsg::Blur(field, value));
	});

	let mut class = groups.class(field);
	if wide {
		class.push_str(" wide");
	}

	html! {
		<div {class} {oninput} {onfocusin} {onfocusout}>
			<label for={ field.name() }>{ label }</label>
			{ control }
		</div>
	}
}

fn text_input(field: Field, kind: &'static str) -> Html {
	html! { <input type={ kind } id={ field.name() } name={ field.name() } /> }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
	let form_ref = use_node_ref();
	let groups = use_reducer_eq(FormGroups::default);
	let submission = use_state_eq(Submission::default);
	let notify = use_notify();

	let onsubmit = {
		let form_ref = form_ref.clone();
		let groups = groups.dispatcher();
		let submission = submission.clone();

		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			let Some(form) = form_ref.cast::<HtmlFormElement>() else {
				log!("The contact form isn't mounted, so there's nothing to submit");
				return;
			};

			let data = match FormData::new_with_form(&form) {
				Ok(data) => data,
				Err(err) => {
					log!(format!("Couldn't read the contact form: {err:?}"));
					return;
				}
			};

			let record = Field::ALL.into_iter()
				.map(|field| (field, data.get(field.name()).as_string().unwrap_or_default()))
				.collect::<FormRecord>();

			let mut state = *submission;
			match state.try_begin(&record, dom::today()) {
				SubmitOutcome::Busy => (),
				SubmitOutcome::Rejected(err) => notify.show(err.to_string(), NoticeKind::Error),
				SubmitOutcome::Accepted => {
					submission.set(state);

					let submission = submission.clone();
					let groups = groups.clone();
					let notify = notify.clone();

					// There's nowhere to actually send this yet, so we just pretend it took a moment
					wasm_bindgen_futures::spawn_local(async move {
						TimeoutFuture::new(SUBMIT_LATENCY_MS).await;

						notify.show(SUCCESS_MESSAGE, NoticeKind::Success);
						form.reset();
						groups.dispatch(GroupMsg::Reset);

						state.finish();
						submission.set(state);
					});
				}
			}
		})
	};

	let sending = *submission == Submission::Sending;

	let event_select = html! {
		<select id={ Field::EventType.name() } name={ Field::EventType.name() }>
			<option value="" selected=true>{ "Select an event" }</option>
			{
				EVENT_TYPES.iter().map(|(value, label)| html! {
					<option value={ *value }>{ *label }</option>
				}).collect::<Html>()
			}
		</select>
	};

	let guests_input = html! {
		<input type="number" min="50" max="2000" id={ Field::GuestCount.name() } name={ Field::GuestCount.name() } />
	};

	let message_input = html! {
		<textarea rows="5" id={ Field::Message.name() } name={ Field::Message.name() } />
	};

	html! {
		<form id="contact-form" ref={ form_ref } {onsubmit} novalidate=true>
			{ form_group(Field::FirstName, "First Name", false, text_input(Field::FirstName, "text"), &groups) }
			{ form_group(Field::LastName, "Last Name", false, text_input(Field::LastName, "text"), &groups) }
			{ form_group(Field::Email, "Email Address", false, text_input(Field::Email, "email"), &groups) }
			{ form_group(Field::Phone, "Phone Number", false, text_input(Field::Phone, "tel"), &groups) }
			{ form_group(Field::WeddingDate, "Wedding Date", false, text_input(Field::WeddingDate, "date"), &groups) }
			{ form_group(Field::EventType, "Event Type", false, event_select, &groups) }
			{ form_group(Field::GuestCount, "Expected Guests", true, guests_input, &groups) }
			{ form_group(Field::Message, "Tell Us About Your Dream Wedding", true, message_input, &groups) }
			<button type="submit" class="submit-btn" disabled={ sending }>
				<span>{ submission.button_label() }</span>
				<span class="btn-glow"></span>
			</button>
		</form>
	}
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
	html! {
		<>
			<SharedStyle />
			<style>{ site_data::CONTACT_STYLE }</style>
			<SiteNav />
			<div class="page">
				<h1 class="page-title">{ "Let's Plan Your Celebration" }</h1>
				<ContactForm />
				<Faq />
			</div>
		</>
	}
}
