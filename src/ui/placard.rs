use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconAnimation {
    Pulse,
    Rotate,
    Bounce,
    Wiggle,
    Scale,
}

impl IconAnimation {
    pub fn class(self) -> &'static str {
        match self {
            IconAnimation::Pulse => "anim-pulse",
            IconAnimation::Rotate => "anim-rotate",
            IconAnimation::Bounce => "anim-bounce",
            IconAnimation::Wiggle => "anim-wiggle",
            IconAnimation::Scale => "anim-scale",
        }
    }
}

/// Card with an animated icon, a title and a description. `accent` tints
/// the gradient and border.
#[component]
pub fn Placard(
    icon: &'static str,
    title: String,
    description: String,
    accent: &'static str,
    animation: IconAnimation,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let clickable = if onclick.is_some() { " clickable" } else { "" };
    let anim = animation.class();

    rsx! {
        div {
            class: "placard{clickable}",
            style: "--accent: {accent};",
            onclick: move |e: MouseEvent| {
                if let Some(handler) = &onclick {
                    handler.call(e);
                }
            },
            div { class: "placard-glow" }
            div { class: "placard-body",
                div { class: "placard-head",
                    div { class: "placard-icon {anim}", "{icon}" }
                    h3 { class: "placard-title", "{title}" }
                }
                p { class: "placard-description", "{description}" }
                {children}
            }
        }
    }
}
