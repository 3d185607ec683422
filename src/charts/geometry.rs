use std::f64::consts::{FRAC_PI_2, TAU};

/// Plot area inside an SVG canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub const CHART: Frame = Frame {
        width: 600.0,
        height: 400.0,
        left: 56.0,
        right: 16.0,
        top: 16.0,
        bottom: 56.0,
    };

    pub fn plot_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    /// y coordinate of the value axis origin.
    pub fn baseline(&self) -> f64 {
        self.height - self.bottom
    }

    /// Map a value in `0..=max` to a y coordinate.
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        self.baseline() - (value / max).clamp(0.0, 1.0) * self.plot_height()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Round a data maximum up to a readable axis maximum (steps of 1, 2, 5
/// times a power of ten, about four ticks).
pub fn nice_axis_max(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let step = nice_step(max / 4.0);
    (max / step).ceil() * step
}

fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powi(raw.log10().floor() as i32);
    let norm = raw / mag;
    let unit = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    unit * mag
}

/// Evenly spaced tick values from 0 to `max` inclusive.
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![];
    }
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

/// One bar per value, each in its own band with a gap on both sides.
pub fn bars(values: &[f64], max: f64, frame: &Frame) -> Vec<Rect> {
    if values.is_empty() {
        return vec![];
    }
    let band = frame.plot_width() / values.len() as f64;
    let width = band * 0.7;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let y = frame.y_for(v, max);
            Rect {
                x: frame.left + band * i as f64 + (band - width) / 2.0,
                y,
                width,
                height: frame.baseline() - y,
            }
        })
        .collect()
}

/// Points spread across the plot width, first and last on the edges.
pub fn line_points(values: &[f64], max: f64, frame: &Frame) -> Vec<(f64, f64)> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if n > 1 {
                frame.left + frame.plot_width() * i as f64 / (n - 1) as f64
            } else {
                frame.left + frame.plot_width() / 2.0
            };
            (x, frame.y_for(v, max))
        })
        .collect()
}

/// "x,y x,y ..." for `polyline` / `polygon`.
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path under a line, down to `baseline`.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut d = format!("M {:.1} {baseline:.1}", first.0);
    for (x, y) in points {
        d.push_str(&format!(" L {x:.1} {y:.1}"));
    }
    d.push_str(&format!(" L {:.1} {baseline:.1} Z", last.0));
    d
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub fraction: f64,
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
}

impl PieSlice {
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.fraction * 100.0)
    }
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Slices clockwise from twelve o'clock. Labels sit just outside the rim.
pub fn pie_slices(values: &[f64], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return vec![];
    }

    let mut angle = -FRAC_PI_2;
    values
        .iter()
        .map(|&v| {
            let fraction = v.max(0.0) / total;
            let sweep = fraction * TAU;
            let start = angle;
            let end = angle + sweep;
            angle = end;

            let path = if fraction >= 0.9999 {
                // a single arc cannot close on itself
                let (x0, y0) = polar(cx, cy, r, start);
                let (x1, y1) = polar(cx, cy, r, start + TAU / 2.0);
                format!(
                    "M {x0:.2} {y0:.2} A {r} {r} 0 1 1 {x1:.2} {y1:.2} A {r} {r} 0 1 1 {x0:.2} {y0:.2} Z"
                )
            } else {
                let (x0, y0) = polar(cx, cy, r, start);
                let (x1, y1) = polar(cx, cy, r, end);
                let large = if sweep > TAU / 2.0 { 1 } else { 0 };
                format!("M {cx} {cy} L {x0:.2} {y0:.2} A {r} {r} 0 {large} 1 {x1:.2} {y1:.2} Z")
            };

            let (label_x, label_y) = polar(cx, cy, r * 1.18, start + sweep / 2.0);
            PieSlice {
                fraction,
                path,
                label_x,
                label_y,
            }
        })
        .collect()
}

/// Vertex `i` of `n` on a radar chart, spoke 0 pointing up.
pub fn radar_vertex(i: usize, n: usize, value: f64, max: f64, cx: f64, cy: f64, r: f64) -> (f64, f64) {
    let angle = -FRAC_PI_2 + TAU * i as f64 / n.max(1) as f64;
    let scale = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    polar(cx, cy, r * scale, angle)
}

pub fn radar_polygon(values: &[f64], max: f64, cx: f64, cy: f64, r: f64) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| radar_vertex(i, values.len(), v, max, cx, cy, r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_nice_axis_max() {
        assert_eq!(nice_axis_max(82.0), 100.0);
        assert_eq!(nice_axis_max(1120.0), 1500.0);
        assert!(close(nice_axis_max(2.84), 3.0));
        assert_eq!(nice_axis_max(0.0), 1.0);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert!(ticks(100.0, 0).is_empty());
    }

    #[test]
    fn test_bar_heights_scale_with_values() {
        let frame = Frame::CHART;
        let rects = bars(&[25.0, 50.0, 100.0], 100.0, &frame);
        assert_eq!(rects.len(), 3);
        assert!(close(rects[2].height, frame.plot_height()));
        assert!(close(rects[1].height, frame.plot_height() / 2.0));
        assert!(close(rects[0].height * 4.0, rects[2].height));
        // all bars stand on the baseline
        for r in &rects {
            assert!(close(r.y + r.height, frame.baseline()));
        }
        // left to right, inside the plot
        assert!(rects[0].x >= frame.left);
        assert!(rects[0].center_x() < rects[1].center_x());
        assert!(rects[2].x + rects[2].width <= frame.width - frame.right + 1e-9);
    }

    #[test]
    fn test_line_points_span_plot() {
        let frame = Frame::CHART;
        let pts = line_points(&[0.0, 1.0, 2.0], 2.0, &frame);
        assert!(close(pts[0].0, frame.left));
        assert!(close(pts[2].0, frame.width - frame.right));
        assert!(close(pts[0].1, frame.baseline()));
        assert!(close(pts[2].1, frame.top));
    }

    #[test]
    fn test_area_path_closes_on_baseline() {
        let d = area_path(&[(10.0, 5.0), (20.0, 7.0)], 100.0);
        assert!(d.starts_with("M 10.0 100.0"));
        assert!(d.ends_with("L 20.0 100.0 Z"));
        assert!(area_path(&[], 100.0).is_empty());
    }

    #[test]
    fn test_pie_fractions_sum_to_one() {
        let slices = pie_slices(&[28.0, 24.0, 18.0, 30.0], 300.0, 200.0, 120.0);
        let sum: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!(close(sum, 1.0));
        assert_eq!(slices[0].percent_label(), "28%");
        assert!(slices.iter().all(|s| s.path.ends_with('Z')));
    }

    #[test]
    fn test_pie_ignores_empty_input() {
        assert!(pie_slices(&[], 0.0, 0.0, 10.0).is_empty());
        assert!(pie_slices(&[0.0, 0.0], 0.0, 0.0, 10.0).is_empty());
    }

    #[test]
    fn test_radar_vertex_at_max_is_on_rim() {
        let (cx, cy, r) = (300.0, 200.0, 150.0);
        for i in 0..8 {
            let (x, y) = radar_vertex(i, 8, 100.0, 100.0, cx, cy, r);
            let dist = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
            assert!(close(dist, r));
        }
        // spoke 0 points straight up
        let (x, y) = radar_vertex(0, 8, 50.0, 100.0, cx, cy, r);
        assert!(close(x, cx));
        assert!(close(y, cy - 75.0));
    }
}
