use dioxus::prelude::*;

use crate::intake::UploadStatus;
use crate::ui::placard::{IconAnimation, Placard};

struct Metric {
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    description: &'static str,
    accent: &'static str,
    animation: IconAnimation,
}

static METRICS: [Metric; 4] = [
    Metric {
        icon: "\u{1F9EC}",
        title: "Total FASTA Uploads",
        value: "1,247",
        description: "Genomic sequences processed",
        accent: "#14B8A6",
        animation: IconAnimation::Rotate,
    },
    Metric {
        icon: "\u{1F916}",
        title: "Active Researchers",
        value: "156",
        description: "Currently analyzing data",
        accent: "#3B82F6",
        animation: IconAnimation::Pulse,
    },
    Metric {
        icon: "\u{1F578}",
        title: "Analyses Completed",
        value: "3,891",
        description: "Successful processing runs",
        accent: "#9333EA",
        animation: IconAnimation::Bounce,
    },
    Metric {
        icon: "\u{1F4CA}",
        title: "Detected Mutations",
        value: "12,456",
        description: "Variants identified",
        accent: "#EF4444",
        animation: IconAnimation::Wiggle,
    },
];

/// A row of the recent-uploads table. Fixed sample data.
struct RecentFile {
    name: &'static str,
    size: &'static str,
    uploaded: &'static str,
    status: UploadStatus,
}

static RECENT_FILES: [RecentFile; 6] = [
    RecentFile {
        name: "human_genome_chr1.fasta",
        size: "245.7 MB",
        uploaded: "2024-01-15 14:30:22",
        status: UploadStatus::Succeeded,
    },
    RecentFile {
        name: "covid_variants_analysis.fa",
        size: "12.3 KB",
        uploaded: "2024-01-15 13:45:18",
        status: UploadStatus::Succeeded,
    },
    RecentFile {
        name: "plant_chloroplast_seq.fasta",
        size: "156.2 KB",
        uploaded: "2024-01-15 12:22:45",
        status: UploadStatus::Pending,
    },
    RecentFile {
        name: "bacterial_16s_rrna.fas",
        size: "8.9 KB",
        uploaded: "2024-01-15 11:18:33",
        status: UploadStatus::Failed,
    },
    RecentFile {
        name: "mouse_transcriptome.fasta",
        size: "89.4 MB",
        uploaded: "2024-01-15 10:55:12",
        status: UploadStatus::Succeeded,
    },
    RecentFile {
        name: "drosophila_genome.fa",
        size: "143.2 MB",
        uploaded: "2024-01-15 09:30:44",
        status: UploadStatus::Succeeded,
    },
];

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "page page-dashboard",
            div { class: "page-heading",
                h1 { "Research Dashboard" }
                p { "Overview of genomic analysis activity" }
            }

            div { class: "placard-grid metrics",
                for metric in METRICS.iter() {
                    Placard {
                        key: "{metric.title}",
                        icon: metric.icon,
                        title: metric.title.to_string(),
                        description: metric.description.to_string(),
                        accent: metric.accent,
                        animation: metric.animation,
                        div { class: "metric-value", "{metric.value}" }
                    }
                }
            }

            div { class: "table-card",
                h3 { "Recent FASTA Files" }
                table { class: "file-table",
                    thead {
                        tr {
                            th { "Filename" }
                            th { "Size" }
                            th { "Date Uploaded" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for file in RECENT_FILES.iter() {
                            tr { key: "{file.name}",
                                td { class: "file-name", "{file.name}" }
                                td { "{file.size}" }
                                td { "{file.uploaded}" }
                                td {
                                    span { class: "{file.status.badge_class()}", "{file.status.label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
