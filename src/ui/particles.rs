use dioxus::prelude::*;
use rand::Rng;

const PARTICLE_COUNT: usize = 50;
const COLORS: [&str; 3] = ["#14B8A6", "#3B82F6", "#9333EA"];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Percent of the container, 0..100.
    pub x: f64,
    pub y: f64,
    /// Pixels.
    pub size: f64,
    pub color: &'static str,
    /// Seconds per drift cycle.
    pub duration: f64,
}

pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let speed: f64 = rng.random_range(1.0..3.0);
            Particle {
                x: rng.random_range(0.0..100.0),
                y: rng.random_range(0.0..100.0),
                size: rng.random_range(2.0..6.0),
                color: COLORS[rng.random_range(0..COLORS.len())],
                duration: 6.0 / speed,
            }
        })
        .collect()
}

/// Drifting dots behind a page. Positions are rolled once per mount.
#[component]
pub fn ParticleField() -> Element {
    let particles = use_hook(|| scatter(PARTICLE_COUNT, &mut rand::rng()));

    rsx! {
        div { class: "particle-field",
            for (i, p) in particles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "particle",
                    style: "left: {p.x:.2}%; top: {p.y:.2}%; width: {p.size:.1}px; height: {p.size:.1}px; background: {p.color}; animation-duration: {p.duration:.2}s;",
                }
            }
        }
    }
}
