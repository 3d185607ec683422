use dioxus::prelude::*;

use crate::routes::{Route, View};

#[component]
pub fn Header(on_toggle_sidebar: EventHandler) -> Element {
    let current = use_route::<Route>().view();

    rsx! {
        header { class: "app-header",
            Link { to: Route::Landing {}, class: "brand",
                span { class: "brand-icon", "\u{1F9EC}" }
                span { class: "brand-name", "GenomeLab" }
            }

            nav { class: "header-nav",
                for view in View::HEADER_ORDER {
                    {
                        let class = if view == current { "nav-link active" } else { "nav-link" };
                        rsx! {
                            Link { key: "{view.label()}", to: view.route(), class: "{class}",
                                "{view.label()}"
                            }
                        }
                    }
                }
            }

            button {
                class: "sidebar-toggle",
                title: "Menu",
                onclick: move |_| on_toggle_sidebar.call(()),
                "\u{2630}"
            }
        }
    }
}
