use dioxus::prelude::*;

use crate::routes::Route;
use crate::ui::particles::ParticleField;
use crate::ui::placard::{IconAnimation, Placard};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    bullets: &'static [&'static str],
    accent: &'static str,
    animation: IconAnimation,
}

static FEATURES: [Feature; 6] = [
    Feature {
        icon: "\u{1F9EC}",
        title: "Biodiversity Metrics",
        description: "Diversity indices and community structure.",
        bullets: &[
            "Calculate Shannon diversity, Simpson index, and species richness",
            "Analyze species evenness and dominance patterns",
            "Generate comprehensive biodiversity reports",
        ],
        accent: "#14B8A6",
        animation: IconAnimation::Rotate,
    },
    Feature {
        icon: "\u{1F916}",
        title: "AI Species Classification",
        description: "Model-driven identification of sequences.",
        bullets: &[
            "DNABERT-2 powered species identification",
            "HDBSCAN clustering for OTU detection",
            "Confidence scoring and taxonomic annotation",
        ],
        accent: "#22C55E",
        animation: IconAnimation::Wiggle,
    },
    Feature {
        icon: "\u{1F343}",
        title: "Ecosystem Health Analysis",
        description: "Scores and categories for sampled ecosystems.",
        bullets: &[
            "AI-powered ecosystem health scoring (0-100)",
            "Health categorization: Excellent, Good, Fair, Poor, Critical",
            "Component analysis: biodiversity, stability, rarity, functional diversity",
        ],
        accent: "#3B82F6",
        animation: IconAnimation::Pulse,
    },
    Feature {
        icon: "\u{1F578}",
        title: "Species Interaction Networks",
        description: "Relationships between detected organisms.",
        bullets: &[
            "Co-occurrence pattern analysis",
            "Predator-prey and competitive relationship mapping",
            "Interactive network visualizations",
        ],
        accent: "#9333EA",
        animation: IconAnimation::Bounce,
    },
    Feature {
        icon: "\u{1FAB1}",
        title: "Conservation Insights",
        description: "Priorities and plans for protection work.",
        bullets: &[
            "Priority assessment: Protection, Monitoring, Restoration, Critical",
            "Management recommendations and monitoring plans",
            "Rare species detection and tracking",
        ],
        accent: "#F59E0B",
        animation: IconAnimation::Scale,
    },
    Feature {
        icon: "\u{1F4CA}",
        title: "Sample Analysis & Visualization",
        description: "From raw FASTA to charts.",
        bullets: &[
            "FASTA file upload and processing",
            "Interactive charts and graphs",
            "Temporal and geographic pattern analysis",
        ],
        accent: "#EF4444",
        animation: IconAnimation::Pulse,
    },
];

#[component]
pub fn Explore() -> Element {
    rsx! {
        div { class: "page page-explore",
            ParticleField {}

            section { class: "hero",
                h1 { class: "hero-title", "Empowering Genomic Data Analysis" }
                p { class: "hero-subtitle",
                    "Upload, Explore & Analyze FASTA sequences with ease using cutting-edge AI and machine learning tools"
                }
                Link { to: Route::Upload {}, class: "btn-primary hero-cta",
                    "Start Analyzing"
                    span { class: "cta-arrow", "\u{2192}" }
                }
            }

            section { class: "features",
                div { class: "section-heading",
                    h2 { "OUR FEATURES" }
                    p { "Discover our comprehensive suite of analysis capabilities" }
                }
                div { class: "placard-grid",
                    for feature in FEATURES.iter() {
                        Placard {
                            key: "{feature.title}",
                            icon: feature.icon,
                            title: feature.title.to_string(),
                            description: feature.description.to_string(),
                            accent: feature.accent,
                            animation: feature.animation,
                            ul { class: "feature-bullets",
                                for bullet in feature.bullets.iter() {
                                    li { "{bullet}" }
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "footer-strip",
                div { class: "footer-brand",
                    div { class: "pulse-dot" }
                    span { "Powered by GenomeLab Technology" }
                }
                p { class: "footer-note", "Advanced algorithms for next-generation genomic analysis" }
            }
        }
    }
}
