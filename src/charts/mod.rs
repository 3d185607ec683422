//! Chart kinds, the literal datasets behind them, and the arithmetic that
//! places those values on an SVG canvas.

pub mod data;
pub mod geometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Pie,
    Radar,
    Network,
}

impl ChartKind {
    #[cfg(test)]
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Area,
        ChartKind::Pie,
        ChartKind::Radar,
        ChartKind::Network,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Pie => "pie",
            ChartKind::Radar => "radar",
            ChartKind::Network => "network",
        }
    }
}
