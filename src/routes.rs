use std::str::FromStr;

use dioxus::prelude::*;

use crate::app::Shell;
use crate::ui::pages::{Dashboard, Explore, Fallback, Landing, Statistics, Upload};

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/explore")]
        Explore {},
        #[route("/upload")]
        Upload {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/statistics")]
        Statistics {},
        #[route("/:..segments")]
        Fallback { segments: Vec<String> },
}

/// The four page views. Several routes can land on the same view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Explore,
    Upload,
    Dashboard,
    Statistics,
}

impl View {
    pub const HEADER_ORDER: [View; 4] = [View::Explore, View::Upload, View::Dashboard, View::Statistics];
    pub const SIDEBAR_ORDER: [View; 4] = [View::Dashboard, View::Explore, View::Upload, View::Statistics];

    pub fn label(self) -> &'static str {
        match self {
            View::Explore => "Explore",
            View::Upload => "Upload",
            View::Dashboard => "Dashboard",
            View::Statistics => "Statistics",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            View::Explore => "\u{1F9ED}",    // compass
            View::Upload => "\u{2601}",      // cloud
            View::Dashboard => "\u{25A6}",   // grid
            View::Statistics => "\u{1F4CA}", // bar chart
        }
    }

    /// Canonical route for links.
    pub fn route(self) -> Route {
        match self {
            View::Explore => Route::Explore {},
            View::Upload => Route::Upload {},
            View::Dashboard => Route::Dashboard {},
            View::Statistics => Route::Statistics {},
        }
    }
}

impl Route {
    pub fn view(&self) -> View {
        match self {
            Route::Landing {} | Route::Explore {} | Route::Fallback { .. } => View::Explore,
            Route::Upload {} => View::Upload,
            Route::Dashboard {} => View::Dashboard,
            Route::Statistics {} => View::Statistics,
        }
    }
}

/// Path → view lookup. Anything the table does not know lands on Explore.
pub fn view_for_path(path: &str) -> View {
    Route::from_str(path)
        .ok()
        .map(|r| r.view())
        .unwrap_or(View::Explore)
}
