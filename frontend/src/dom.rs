use std::rc::Rc;
use chrono::NaiveDate;
use gloo_console::log;
use site_data::gallery::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
	Element,
	IntersectionObserver,
	IntersectionObserverEntry,
	IntersectionObserverInit,
	KeyboardEvent,
	Node
};
use yew::prelude::*;

/// Today, in the browser's time zone
pub fn today() -> NaiveDate {
	let now = js_sys::Date::new_0();
	NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
		.unwrap_or_else(|| {
			log!("The browser handed us a date that doesn't exist; no wedding date will count as past");
			NaiveDate::MIN
		})
}

/// Whether the event started on `node` itself rather than on something inside it. Yew hands every
/// listener the app root as `current_target`, so that can't be used for this.
pub fn is_own_target(e: &Event, node: &NodeRef) -> bool {
	let target = e.target();
	match (target.as_ref().and_then(|t| t.dyn_ref::<Node>()), node.get()) {
		(Some(target), Some(node)) => *target == node,
		_ => false
	}
}

fn lock_scroll(locked: bool) {
	let Some(body) = web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.body()) else {
		log!("There's no body to lock scrolling on");
		return;
	};

	let overflow = if locked { "hidden" } else { "auto" };
	if let Err(e) = body.style().set_property("overflow", overflow) {
		log!(format!("Couldn't set overflow on body: {e:?}"));
	}
}

/// Keeps the page behind an overlay from scrolling for as long as `locked` is true
#[hook]
pub fn use_scroll_lock(locked: bool) {
	use_effect_with(locked, |locked| {
		let locked = *locked;
		if locked {
			lock_scroll(true);
		}

		move || if locked {
			lock_scroll(false);
		}
	});
}

/// Listens for keydown on the whole document from mount until unmount. `on_key` is only taken on
/// the first render, so it should only hold onto things that stay valid (dispatchers, setters).
#[hook]
pub fn use_document_keydown<F>(on_key: F)
where
	F: Fn(KeyboardEvent) + 'static
{
	use_effect_with((), move |()| {
		let listener = Closure::<dyn Fn(KeyboardEvent)>::new(on_key);
		let document = web_sys::window().and_then(|win| win.document());

		match &document {
			Some(doc) => if let Err(e) = doc.add_event_listener_with_callback(
				"keydown",
				listener.as_ref().unchecked_ref()
			) {
				log!(format!("Couldn't listen for keys: {e:?}"));
			},
			None => log!("No document to listen for keys on")
		}

		move || {
			if let Some(doc) = document {
				_ = doc.remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
			}
		}
	});
}

fn data_index(el: &Element) -> Option<usize> {
	el.get_attribute("data-index").and_then(|idx| idx.parse().ok())
}

/// Watches every child of `container` and calls `on_visible` with a child's `data-index` the first
/// time it scrolls into view. Children are looked up once, after the first render, so the set of
/// them mustn't change afterwards (hiding them is fine). If the browser won't give us an observer,
/// everything is treated as visible straight away.
#[hook]
pub fn use_scroll_reveal<F>(container: NodeRef, on_visible: F)
where
	F: Fn(usize) + 'static
{
	use_effect_with((), move |()| {
		let on_visible = Rc::new(on_visible);

		let callback = {
			let on_visible = Rc::clone(&on_visible);
			Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
				move |entries: js_sys::Array, observer: IntersectionObserver| {
					for entry in entries.iter().map(|e| e.unchecked_into::<IntersectionObserverEntry>()) {
						if !entry.is_intersecting() {
							continue;
						}

						let target = entry.target();
						observer.unobserve(&target);

						match data_index(&target) {
							Some(idx) => on_visible(idx),
							None => log!("Something without a data-index is being watched for scrolling")
						}
					}
				}
			)
		};

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
		options.set_root_margin(REVEAL_ROOT_MARGIN);

		let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
			.inspect_err(|e| log!(format!("Couldn't watch for scrolling, showing everything: {e:?}")))
			.ok();

		let Some(container) = container.cast::<Element>() else {
			log!("The container to watch for scrolling was never rendered");
			return Box::new(move || drop(callback)) as Box<dyn FnOnce()>;
		};

		let children = container.children();
		for child in (0..children.length()).filter_map(|idx| children.item(idx)) {
			match &observer {
				Some(observer) => observer.observe(&child),
				None => if let Some(idx) = data_index(&child) {
					on_visible(idx);
				}
			}
		}

		Box::new(move || {
			if let Some(observer) = observer {
				observer.disconnect();
			}
			drop(callback);
		}) as Box<dyn FnOnce()>
	});
}
