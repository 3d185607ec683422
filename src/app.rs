use dioxus::prelude::*;
use tracing::debug;

use crate::{
	routes::Route,
	ui::{
		header::Header,
		notification::{NotificationLayer, Notifier},
		sidebar::Sidebar,
	},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
	use_context_provider(Notifier::new);

	rsx! {
		document::Stylesheet { href: MAIN_CSS }
		Router::<Route> {}
	}
}

/// Layout around every route: header, slide-in sidebar, the page, toasts.
#[component]
pub fn Shell() -> Element {
	let route = use_route::<Route>();
	let mut sidebar_open = use_signal(|| false);

	use_effect(use_reactive((&route,), |(route,)| {
		debug!(%route, view = route.view().label(), "navigated");
	}));

	rsx! {
		div { class: "app",
			Header { on_toggle_sidebar: move |_| sidebar_open.toggle() }
			Sidebar {
				open: sidebar_open(),
				on_close: move |_| sidebar_open.set(false),
			}
			main { class: "content",
				Outlet::<Route> {}
			}
			NotificationLayer {}
		}
	}
}
