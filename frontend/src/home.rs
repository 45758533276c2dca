use yew::prelude::*;
use yew_router::prelude::*;
use crate::{
	Route,
	nav::{SiteNav, SITE_NAME},
	style::SharedStyle
};

#[function_component(Home)]
pub fn home() -> Html {
	let catalog = use_state(|| crate::loaded(site_data::load_catalog()));

	html! {
		<>
			<SharedStyle />
			<style>{ site_data::HOME_STYLE }</style>
			<SiteNav />
			<header id="hero">
				<h1>{ SITE_NAME }</h1>
				<p>{ "Stages, flowers and light for the day you'll remember forever." }</p>
				<div id="hero-links">
					<Link<Route> to={ Route::Services }>{ "Our Services" }</Link<Route>>
					<Link<Route> to={ Route::Projects }>{ "See Our Work" }</Link<Route>>
					<Link<Route> to={ Route::Contact }>{ "Plan Your Wedding" }</Link<Route>>
				</div>
			</header>
			<div class="page">
				<h2 class="page-title">{ "What We Do" }</h2>
				<ul>
				{
					catalog.iter().map(|service| html! {
						<li key={ service.id.as_str() }>{ &service.title }</li>
					}).collect::<Html>()
				}
				</ul>
			</div>
		</>
	}
}
