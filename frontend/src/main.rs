use yew_router::prelude::*;
use yew::prelude::*;
use gloo_console::log;
use home::Home;
use contact::ContactPage;
use projects::ProjectsPage;
use services::ServicesPage;
use notification::NotificationProvider;
use site_data::DataError;

mod contact;
mod dom;
mod faq;
mod home;
mod lightbox;
mod nav;
mod notification;
mod projects;
mod services;
mod style;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
	#[not_found]
	#[at("/")]
	Home,
	#[at("/contact")]
	Contact,
	#[at("/projects")]
	Projects,
	#[at("/services")]
	Services
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> },
		Route::Contact => html! { <ContactPage /> },
		Route::Projects => html! { <ProjectsPage /> },
		Route::Services => html! { <ServicesPage /> }
	}
}

// The fixtures are compiled in, so this only fails if one of them is broken. If it is, we'd rather
// show the rest of the page with that region empty than show nothing at all
pub fn loaded<T: Default>(res: Result<T, DataError>) -> T {
	res.unwrap_or_else(|e| {
		log!(format!("{e}"));
		T::default()
	})
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<NotificationProvider>
				<Switch<Route> render={switch} />
			</NotificationProvider>
		</BrowserRouter>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
