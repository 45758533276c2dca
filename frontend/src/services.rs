use gloo_console::log;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_router::prelude::*;
use site_data::{ServiceId, ServiceRecord};
use crate::{
	Route,
	dom,
	nav::SiteNav,
	style::SharedStyle
};

#[derive(Properties, PartialEq)]
struct ServiceModalProps {
	service: ServiceRecord,
	on_close: Callback<()>,
	on_quote: Callback<()>
}

#[function_component(ServiceModal)]
fn service_modal(props: &ServiceModalProps) -> Html {
	let service = &props.service;
	let backdrop_ref = use_node_ref();

	let backdrop_click = {
		let on_close = props.on_close.clone();
		let backdrop_ref = backdrop_ref.clone();
		Callback::from(move |e: MouseEvent| if dom::is_own_target(&e, &backdrop_ref) {
			on_close.emit(());
		})
	};
	let close_click = props.on_close.reform(|_: MouseEvent| ());
	let quote_click = props.on_quote.reform(|_: MouseEvent| ());

	html! {
		<div id="serviceModal" ref={ backdrop_ref } onclick={ backdrop_click }>
			<div class="modal-content">
				<button class="modal-close" onclick={ close_click }>{ "×" }</button>
				<img id="modalImage" src={ service.image.clone() } alt={ service.title.clone() } />
				<div class="modal-body">
					<h2 id="modalTitle">{ &service.title }</h2>
					<p id="modalDescription">{ &service.description }</p>
					<h3>{ "What's Included" }</h3>
					<ol id="modalFeaturesList">
					{
						service.features.iter().map(|feature| html! {
							<li>{ feature }</li>
						}).collect::<Html>()
					}
					</ol>
					<p id="modalPrice">{ &service.price }</p>
					<button class="modal-cta-btn" onclick={ quote_click }>{ "Get a Quote" }</button>
				</div>
			</div>
		</div>
	}
}

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
	let catalog = use_state(|| crate::loaded(site_data::load_catalog()));
	let selected = use_state_eq(|| Option::<ServiceId>::None);
	let navigator = use_navigator();

	dom::use_scroll_lock(selected.is_some());

	{
		let selected = selected.setter();
		dom::use_document_keydown(move |e: KeyboardEvent| if e.key() == "Escape" {
			selected.set(None);
		});
	}

	// Cards are keyed the same way the catalog is, and anything the catalog doesn't know about
	// just doesn't open
	let open_detail = |key: &'static str| {
		let catalog = catalog.clone();
		let selected = selected.clone();
		Callback::from(move |_: MouseEvent| if let Some(service) = catalog.lookup(key) {
			selected.set(Some(service.id));
		})
	};

	let close_detail = {
		let selected = selected.clone();
		Callback::from(move |()| selected.set(None))
	};

	let get_quote = {
		let selected = selected.clone();
		Callback::from(move |()| {
			selected.set(None);
			match &navigator {
				Some(nav) => nav.push(&Route::Contact),
				None => log!("There's no router to take us to the contact page")
			}
		})
	};

	let cards = catalog.iter().map(|service| html! {
		<div class="service-card-detailed" key={ service.id.as_str() } data-service={ service.id.as_str() }>
			<img src={ service.image.clone() } alt={ service.title.clone() } loading="lazy" />
			<div class="service-card-body">
				<h3>{ &service.title }</h3>
				<p>{ &service.price }</p>
				<button class="view-details-btn" onclick={ open_detail(service.id.as_str()) }>{ "View Details" }</button>
			</div>
		</div>
	}).collect::<Html>();

	let modal = (*selected).and_then(|id| catalog.get(id)).map(|service| html! {
		<ServiceModal service={ service.clone() } on_close={ close_detail.clone() } on_quote={ get_quote.clone() } />
	}).unwrap_or_default();

	html! {
		<>
			<SharedStyle />
			<style>{ site_data::SERVICES_STYLE }</style>
			<SiteNav />
			<div class="page">
				<h1 class="page-title">{ "Our Services" }</h1>
				<div class="services-grid">{ cards }</div>
			</div>
			{ modal }
		</>
	}
}
