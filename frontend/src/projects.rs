use std::rc::Rc;
use gloo_timers::future::TimeoutFuture;
use site_data::{
	Gallery,
	Lightbox,
	timing::{FILTER_ENTER_DELAY_MS, FILTER_EXIT_MS}
};
use yew::prelude::*;
use crate::{
	dom,
	lightbox::{LightboxMsg, LightboxState, LightboxView},
	nav::SiteNav,
	style::SharedStyle
};

#[derive(Debug)]
enum GalleryMsg {
	Filter(String),
	SettleEntering(u64),
	SettleLeaving(u64),
	Reveal(usize)
}

#[derive(Clone, PartialEq)]
struct GalleryState(Gallery);

impl Reducible for GalleryState {
	type Action = GalleryMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut gallery = (*self).clone();

		match action {
			GalleryMsg::Filter(tag) => {
				gallery.0.apply_filter(&tag);
			},
			GalleryMsg::SettleEntering(generation) => gallery.0.settle_entering(generation),
			GalleryMsg::SettleLeaving(generation) => gallery.0.settle_leaving(generation),
			GalleryMsg::Reveal(idx) => gallery.0.reveal(idx)
		}

		gallery.into()
	}
}

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
	let gallery = use_reducer_eq(|| GalleryState(Gallery::new(crate::loaded(site_data::load_gallery()))));
	// The viewer gets every image that's in the gallery, no matter what's currently filtered out
	let viewer = use_reducer_eq(|| LightboxState(Lightbox::new(
		gallery.0.items().iter().map(|item| item.image.clone()).collect()
	)));

	let grid_ref = use_node_ref();
	{
		let dispatcher = gallery.dispatcher();
		dom::use_scroll_reveal(grid_ref.clone(), move |idx| dispatcher.dispatch(GalleryMsg::Reveal(idx)));
	}

	// Each filter change gets one pass of settling; if another filter was applied in the meantime
	// the gallery ignores it
	{
		let dispatcher = gallery.dispatcher();
		use_effect_with(gallery.0.generation(), move |generation| {
			let generation = *generation;
			if generation > 0 {
				wasm_bindgen_futures::spawn_local(async move {
					TimeoutFuture::new(FILTER_ENTER_DELAY_MS).await;
					dispatcher.dispatch(GalleryMsg::SettleEntering(generation));

					TimeoutFuture::new(FILTER_EXIT_MS - FILTER_ENTER_DELAY_MS).await;
					dispatcher.dispatch(GalleryMsg::SettleLeaving(generation));
				});
			}

			|| ()
		});
	}

	let active = gallery.0.active().tag();
	let filter_buttons = gallery.0.tags().into_iter().map(|tag| {
		let onclick = {
			let dispatcher = gallery.dispatcher();
			let tag = tag.to_string();
			Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryMsg::Filter(tag.clone())))
		};
		let class = if tag == active { "filter-btn active" } else { "filter-btn" };

		html! {
			<button {class} data-filter={ tag.to_string() } {onclick}>{ tag }</button>
		}
	}).collect::<Html>();

	let items = gallery.0.items().iter().enumerate().map(|(idx, item)| {
		let style = gallery.0.phase(idx).map_or("", |phase| phase.style());
		let onclick = {
			let dispatcher = viewer.dispatcher();
			Callback::from(move |_: MouseEvent| dispatcher.dispatch(LightboxMsg::Activate(idx)))
		};

		let inner_class = if gallery.0.is_revealed(idx) { "gallery-inner revealed" } else { "gallery-inner" };
		let inner_style = format!("animation-delay: {}ms;", Gallery::reveal_delay_ms(idx));

		html! {
			<div class="gallery-item" key={ idx } data-index={ idx.to_string() } data-category={ item.category.clone() } {style}>
				<div class={ inner_class } style={ inner_style }>
					<img src={ item.image.clone() } alt={ item.title.clone() } loading="lazy" />
					<div class="gallery-overlay">
						<h3>{ &item.title }</h3>
						<span>{ &item.category }</span>
						<button class="gallery-view-btn" data-image={ item.image.clone() } {onclick}>{ "View" }</button>
					</div>
				</div>
			</div>
		}
	}).collect::<Html>();

	html! {
		<>
			<SharedStyle />
			<style>{ site_data::GALLERY_STYLE }</style>
			<SiteNav />
			<div class="page">
				<h1 class="page-title">{ "Our Work" }</h1>
				<div class="filter-buttons">{ filter_buttons }</div>
				<div class="gallery-grid" ref={ grid_ref }>{ items }</div>
			</div>
			<LightboxView viewer={ viewer.clone() } />
		</>
	}
}
