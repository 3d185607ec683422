use dioxus::prelude::*;

use crate::charts::ChartKind;
use crate::ui::chart_modal::ChartModal;
use crate::ui::placard::{IconAnimation, Placard};

struct StatPlacard {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    kind: ChartKind,
    accent: &'static str,
    animation: IconAnimation,
}

static STAT_PLACARDS: [StatPlacard; 6] = [
    StatPlacard {
        icon: "\u{1F4CA}",
        title: "Monthly eDNA Sample Processing",
        description: "Environmental DNA samples processed each month. Tracks laboratory throughput and seasonal sampling patterns across aquatic ecosystems.",
        kind: ChartKind::Bar,
        accent: "#14B8A6",
        animation: IconAnimation::Pulse,
    },
    StatPlacard {
        icon: "\u{1F578}",
        title: "Sequence Clusters",
        description: "Relationships between genomic sequences and their classifications, with co-occurrence and predator-prey links drawn as a network.",
        kind: ChartKind::Network,
        accent: "#3B82F6",
        animation: IconAnimation::Bounce,
    },
    StatPlacard {
        icon: "\u{1F9EC}",
        title: "Weekly Shannon Diversity Index Trends",
        description: "Temporal changes in ecosystem biodiversity. Higher values indicate more diverse and stable aquatic communities.",
        kind: ChartKind::Line,
        accent: "#9333EA",
        animation: IconAnimation::Rotate,
    },
    StatPlacard {
        icon: "\u{1FAB1}",
        title: "Sequence Length Variation",
        description: "Distribution of DNA sequence lengths in eDNA samples. Length ranges hint at organism types and sequencing quality.",
        kind: ChartKind::Area,
        accent: "#F59E0B",
        animation: IconAnimation::Wiggle,
    },
    StatPlacard {
        icon: "\u{1F343}",
        title: "Top Detected Species Distribution",
        description: "Most abundant species identified through eDNA analysis, as shares of fish, invertebrates and other organisms.",
        kind: ChartKind::Pie,
        accent: "#22C55E",
        animation: IconAnimation::Scale,
    },
    StatPlacard {
        icon: "\u{1F916}",
        title: "Ecosystem Health Indicators",
        description: "Richness, evenness, phylogenetic diversity and novel species discovery rates in one view.",
        kind: ChartKind::Radar,
        accent: "#EF4444",
        animation: IconAnimation::Pulse,
    },
];

static SUMMARY_TILES: [(&str, &str, &str); 3] = [
    ("99.7%", "Analysis Accuracy", "#14B8A6"),
    ("2.3s", "Average Processing", "#3B82F6"),
    ("24/7", "System Uptime", "#9333EA"),
];

#[component]
pub fn Statistics() -> Element {
    let mut selected = use_signal(|| None::<usize>);

    rsx! {
        div { class: "page page-statistics",
            div { class: "page-heading",
                h1 { "Statistics & Analytics" }
                p { "Explore comprehensive genomic data insights and visualizations" }
            }

            div { class: "placard-grid",
                for (i, stat) in STAT_PLACARDS.iter().enumerate() {
                    Placard {
                        key: "{stat.title}",
                        icon: stat.icon,
                        title: stat.title.to_string(),
                        description: stat.description.to_string(),
                        accent: stat.accent,
                        animation: stat.animation,
                        onclick: move |_| selected.set(Some(i)),
                        div { class: "placard-cta",
                            span { "Click to view" }
                            span { class: "cta-arrow", "\u{2192}" }
                        }
                    }
                }
            }

            div { class: "summary-tiles",
                for (value, caption, color) in SUMMARY_TILES.iter() {
                    div { key: "{caption}", class: "summary-tile", style: "--accent: {color};",
                        div { class: "tile-value", "{value}" }
                        p { class: "tile-caption", "{caption}" }
                    }
                }
            }

            if let Some(stat) = selected().and_then(|i| STAT_PLACARDS.get(i)) {
                ChartModal {
                    title: stat.title.to_string(),
                    kind: stat.kind,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chart_kind_has_one_placard() {
        for kind in ChartKind::ALL {
            let count = STAT_PLACARDS.iter().filter(|p| p.kind == kind).count();
            assert_eq!(count, 1, "{kind:?}");
        }
        assert_eq!(STAT_PLACARDS.len(), ChartKind::ALL.len());
    }
}
