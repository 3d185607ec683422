use dioxus::prelude::*;

use crate::routes::View;

#[component]
pub fn Sidebar(open: bool, on_close: EventHandler) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "sidebar-backdrop", onclick: move |_| on_close.call(()) }

        aside { class: "sidebar",
            div { class: "sidebar-top",
                button {
                    class: "sidebar-close",
                    onclick: move |_| on_close.call(()),
                    "\u{2715}"
                }
            }

            nav { class: "sidebar-nav",
                for view in View::SIDEBAR_ORDER {
                    Link {
                        key: "{view.label()}",
                        to: view.route(),
                        class: "sidebar-link",
                        onclick: move |_| on_close.call(()),
                        span { class: "sidebar-icon", "{view.icon()}" }
                        span { class: "sidebar-label", "{view.label()}" }
                    }
                }
            }

            div { class: "sidebar-footer",
                div { class: "pulse-dot" }
                span { "Powered by GenomeLab" }
            }
        }
    }
}
