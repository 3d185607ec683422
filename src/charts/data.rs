//! Fixed sample data. Nothing here is computed from uploads.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub label: &'static str,
    pub value: f64,
}

const fn pt(label: &'static str, value: f64) -> Point {
    Point { label, value }
}

/// eDNA samples processed per month.
pub static MONTHLY_UPLOADS: [Point; 12] = [
    pt("Jan", 32.0),
    pt("Feb", 45.0),
    pt("Mar", 38.0),
    pt("Apr", 50.0),
    pt("May", 62.0),
    pt("Jun", 58.0),
    pt("Jul", 70.0),
    pt("Aug", 65.0),
    pt("Sep", 80.0),
    pt("Oct", 75.0),
    pt("Nov", 68.0),
    pt("Dec", 82.0),
];

/// Weekly Shannon diversity index.
pub static SHANNON_WEEKLY: [Point; 12] = [
    pt("W1", 2.15),
    pt("W2", 2.34),
    pt("W3", 2.28),
    pt("W4", 2.47),
    pt("W5", 2.39),
    pt("W6", 2.53),
    pt("W7", 2.61),
    pt("W8", 2.55),
    pt("W9", 2.68),
    pt("W10", 2.72),
    pt("W11", 2.79),
    pt("W12", 2.84),
];

/// Sequence count per length bucket.
pub static SEQUENCE_LENGTHS: [Point; 10] = [
    pt("100-300bp", 300.0),
    pt("300-500bp", 450.0),
    pt("500-700bp", 600.0),
    pt("700-1000bp", 760.0),
    pt("1000-2000bp", 920.0),
    pt("2000-5000bp", 1120.0),
    pt("5000-8000bp", 680.0),
    pt("8000-10000bp", 480.0),
    pt("10000-15000bp", 320.0),
    pt("15000+bp", 150.0),
];

/// Ecosystem health indicators, 0..100.
pub static HEALTH_FEATURES: [Point; 8] = [
    pt("Richness", 78.0),
    pt("Evenness", 65.0),
    pt("Shannon Index", 82.0),
    pt("Simpson Index", 74.0),
    pt("Phylogenetic Diversity", 69.0),
    pt("Novel OTUs", 52.0),
    pt("Functional Diversity", 57.0),
    pt("Taxonomic Diversity", 63.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

pub static SPECIES_SHARE: [Slice; 10] = [
    Slice { label: "Salmo trutta", value: 28.0, color: "#FF6B6B" },
    Slice { label: "Oncorhynchus mykiss", value: 24.0, color: "#4ECDC4" },
    Slice { label: "Esox lucius", value: 18.0, color: "#45B7D1" },
    Slice { label: "Daphnia pulex", value: 12.0, color: "#96CEB4" },
    Slice { label: "Chironomidae", value: 10.0, color: "#FFEAA7" },
    Slice { label: "Gammarus pulex", value: 8.0, color: "#DDA0DD" },
    Slice { label: "Planaria sp.", value: 6.0, color: "#98D8C8" },
    Slice { label: "Tubifex tubifex", value: 5.0, color: "#F7DC6F" },
    Slice { label: "Other Invertebrates", value: 4.0, color: "#BB8FCE" },
    Slice { label: "Other Fish", value: 3.0, color: "#85C1E9" },
];

// ─── Sequence cluster network ─────────────────────────────────

/// Canvas the node coordinates are placed on.
pub const NETWORK_WIDTH: f64 = 600.0;
pub const NETWORK_HEIGHT: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkNode {
    pub id: &'static str,
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: &'static str,
    pub connections: &'static [&'static str],
}

pub static NETWORK_NODES: [NetworkNode; 10] = [
    NetworkNode { id: "human", label: "Human Genome", x: 300.0, y: 200.0, size: 30.0, color: "#14B8A6", connections: &["mouse", "chimp", "covid"] },
    NetworkNode { id: "mouse", label: "Mouse Genome", x: 180.0, y: 150.0, size: 24.0, color: "#3B82F6", connections: &["human", "rat"] },
    NetworkNode { id: "chimp", label: "Chimpanzee", x: 420.0, y: 150.0, size: 22.0, color: "#9333EA", connections: &["human"] },
    NetworkNode { id: "covid", label: "SARS-CoV-2", x: 300.0, y: 300.0, size: 18.0, color: "#EF4444", connections: &["human", "bat"] },
    NetworkNode { id: "rat", label: "Rat Genome", x: 120.0, y: 220.0, size: 20.0, color: "#F59E0B", connections: &["mouse"] },
    NetworkNode { id: "bat", label: "Bat Genome", x: 380.0, y: 260.0, size: 18.0, color: "#22C55E", connections: &["covid"] },
    NetworkNode { id: "plant", label: "Plant Chloroplast", x: 220.0, y: 100.0, size: 22.0, color: "#84CC16", connections: &["algae"] },
    NetworkNode { id: "algae", label: "Green Algae", x: 320.0, y: 80.0, size: 16.0, color: "#06B6D4", connections: &["plant"] },
    NetworkNode { id: "bacteria", label: "E. coli", x: 460.0, y: 220.0, size: 14.0, color: "#F97316", connections: &[] },
    NetworkNode { id: "yeast", label: "S. cerevisiae", x: 80.0, y: 280.0, size: 16.0, color: "#EC4899", connections: &[] },
];

pub static NETWORK_LEGEND: [(&str, &str); 4] = [
    ("Mammal", "#14B8A6"),
    ("Viral", "#EF4444"),
    ("Plant", "#22C55E"),
    ("Microbe", "#F59E0B"),
];

pub fn network_node(id: &str) -> Option<&'static NetworkNode> {
    NETWORK_NODES.iter().find(|n| n.id == id)
}

/// Undirected edges from the connection lists, each pair once, in the order
/// first seen. Connections to unknown ids are dropped.
pub fn network_edges() -> Vec<(&'static str, &'static str)> {
    let mut edges: Vec<(&'static str, &'static str)> = Vec::new();
    for node in NETWORK_NODES.iter() {
        for &other in node.connections {
            if network_node(other).is_none() {
                continue;
            }
            let seen = edges
                .iter()
                .any(|&(a, b)| (a == node.id && b == other) || (a == other && b == node.id));
            if !seen {
                edges.push((node.id, other));
            }
        }
    }
    edges
}
