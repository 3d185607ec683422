mod dashboard;
mod explore;
mod statistics;
mod upload;

use dioxus::prelude::*;

pub use dashboard::Dashboard;
pub use explore::Explore;
pub use statistics::Statistics;
pub use upload::Upload;

/// `/` shows the Explore view.
#[component]
pub fn Landing() -> Element {
    rsx! { Explore {} }
}

/// Any path the router does not know shows the Explore view.
#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown path, showing explore");
    rsx! { Explore {} }
}
