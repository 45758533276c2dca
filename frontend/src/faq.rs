use gloo_console::log;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use site_data::Accordion;

// The answer panel sits right after the question that was clicked. Yew delegates events, so the
// question is found from the target rather than `current_target`.
fn answer_height(e: &MouseEvent) -> Option<i32> {
	let height = e.target()
		.and_then(|target| target.dyn_into::<Element>().ok())
		.and_then(|target| target.closest(".faq-question").ok().flatten())
		.and_then(|question| question.next_element_sibling())
		.map(|answer| answer.scroll_height());

	if height.is_none() {
		log!("Couldn't find the answer panel to measure");
	}

	height
}

#[function_component(Faq)]
pub fn faq() -> Html {
	let entries = use_state(|| crate::loaded(site_data::load_faq()));
	let accordion = use_state(|| Accordion::new(entries.len()));
	let measured = use_state_eq(|| None::<i32>);

	if entries.is_empty() {
		return html! {};
	}

	let items = entries.iter().enumerate().map(|(idx, entry)| {
		let onclick = {
			let accordion = accordion.clone();
			let measured = measured.clone();
			Callback::from(move |e: MouseEvent| {
				let mut next = *accordion;
				next.toggle(idx);
				if next.is_open(idx) {
					measured.set(answer_height(&e));
				}
				accordion.set(next);
			})
		};

		let class = if accordion.is_open(idx) { "faq-item active" } else { "faq-item" };

		html! {
			<div {class} key={ idx }>
				<div class="faq-question" {onclick}>
					<h3>{ &entry.question }</h3>
					<span class="faq-toggle">{ accordion.glyph(idx) }</span>
				</div>
				<div class="faq-answer" style={ accordion.panel_style(idx, *measured) }>
					{ Html::from_html_unchecked(site_data::md_to_html(&entry.answer).into()) }
				</div>
			</div>
		}
	}).collect::<Html>();

	html! {
		<section id="faq">
			<h2 class="page-title">{ "Frequently Asked Questions" }</h2>
			{ items }
		</section>
	}
}
