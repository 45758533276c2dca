use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

pub const SITE_NAME: &str = "Shubh Decor";

#[function_component(SiteNav)]
pub fn site_nav() -> Html {
	html! {
		<nav id="site-nav">
			<Link<Route> to={ Route::Home }><strong>{ SITE_NAME }</strong></Link<Route>>
			<span>
				<Link<Route> to={ Route::Services }>{ "Services" }</Link<Route>>
				<Link<Route> to={ Route::Projects }>{ "Projects" }</Link<Route>>
				<Link<Route> to={ Route::Contact }>{ "Contact" }</Link<Route>>
			</span>
		</nav>
	}
}
