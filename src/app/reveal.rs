use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Direction a [`Reveal`] slides in from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Slide {
    #[default]
    Up,
    Left,
    Right,
    Fade,
}

impl Slide {
    fn class(self) -> &'static str {
        match self {
            Self::Up => "reveal-up",
            Self::Left => "reveal-left",
            Self::Right => "reveal-right",
            Self::Fade => "reveal-fade",
        }
    }
}

/// Animates its children in the first time they scroll into view and
/// leaves them there.
#[component]
pub fn Reveal(
    #[prop(optional)] slide: Slide,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_shown.set(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if shown.get() { "revealed" } else { "" };
                format!("reveal {} {state} {class}", slide.class())
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
