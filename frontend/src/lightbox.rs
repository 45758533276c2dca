use std::rc::Rc;
use gloo_timers::future::TimeoutFuture;
use site_data::{Lightbox, timing::LIGHTBOX_FADE_DELAY_MS};
use web_sys::KeyboardEvent;
use yew::prelude::*;
use crate::dom;

#[derive(Debug)]
pub enum LightboxMsg {
	Activate(usize),
	Next,
	Previous,
	Close,
	Key(String)
}

#[derive(Clone, Default, PartialEq)]
pub struct LightboxState(pub Lightbox);

impl Reducible for LightboxState {
	type Action = LightboxMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut viewer = (*self).clone();

		match action {
			LightboxMsg::Activate(idx) => viewer.0.activate(idx),
			LightboxMsg::Next => viewer.0.next(),
			LightboxMsg::Previous => viewer.0.previous(),
			LightboxMsg::Close => viewer.0.close(),
			LightboxMsg::Key(key) => if !viewer.0.handle_key(&key) {
				// nothing changed, so don't bother re-rendering
				return self;
			}
		}

		viewer.into()
	}
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
	pub viewer: UseReducerHandle<LightboxState>
}

#[function_component(LightboxView)]
pub fn lightbox_view(props: &LightboxProps) -> Html {
	let viewer = &props.viewer;

	// Every time the image changes it starts out transparent and fades in. The token makes sure a
	// fade scheduled for the previous image doesn't make the new one visible early
	let opaque = use_state_eq(|| false);
	let fade_token = use_mut_ref(|| 0_u32);
	{
		let opaque = opaque.clone();
		let fade_token = fade_token.clone();
		use_effect_with(viewer.0.state(), move |_| {
			let token = {
				let mut current = fade_token.borrow_mut();
				*current = current.wrapping_add(1);
				*current
			};
			opaque.set(false);

			wasm_bindgen_futures::spawn_local(async move {
				TimeoutFuture::new(LIGHTBOX_FADE_DELAY_MS).await;
				if *fade_token.borrow() == token {
					opaque.set(true);
				}
			});

			|| ()
		});
	}

	dom::use_scroll_lock(viewer.0.is_open());
	let backdrop_ref = use_node_ref();

	{
		let dispatcher = viewer.dispatcher();
		dom::use_document_keydown(move |e: KeyboardEvent| dispatcher.dispatch(LightboxMsg::Key(e.key())));
	}

	let Some(image) = viewer.0.current_image() else {
		return html! {};
	};

	let send = |msg: fn() -> LightboxMsg| {
		let dispatcher = viewer.dispatcher();
		Callback::from(move |_: MouseEvent| dispatcher.dispatch(msg()))
	};

	let backdrop_click = {
		let dispatcher = viewer.dispatcher();
		let backdrop_ref = backdrop_ref.clone();
		Callback::from(move |e: MouseEvent| {
			// Clicks on the image or the buttons bubble up here too, and those shouldn't close it
			if dom::is_own_target(&e, &backdrop_ref) {
				dispatcher.dispatch(LightboxMsg::Close);
			}
		})
	};

	let image_style = if *opaque { "opacity: 1;" } else { "opacity: 0;" };

	html! {
		<div id="lightbox" ref={ backdrop_ref } onclick={ backdrop_click }>
			<button class="lightbox-close" onclick={ send(|| LightboxMsg::Close) }>{ "×" }</button>
			<button class="lightbox-nav" id="prevBtn" onclick={ send(|| LightboxMsg::Previous) }>{ "‹" }</button>
			<img id="lightboxImage" src={ image.to_string() } style={ image_style } alt="Project photo" />
			<button class="lightbox-nav" id="nextBtn" onclick={ send(|| LightboxMsg::Next) }>{ "›" }</button>
		</div>
	}
}
