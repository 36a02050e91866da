use leptos::prelude::*;
use leptos_use::{use_mouse, UseMouseReturn};

// half of the blob's w-96
const BLOB_RADIUS: f64 = 192.0;

/// Blurred colour blobs behind the page; the blue one follows the pointer.
#[component]
pub fn Backdrop() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();

    view! {
        <div class="absolute inset-0 pointer-events-none">
            <div
                class="absolute w-96 h-96 bg-blue-500/20 rounded-full blur-3xl transition-all duration-300 ease-out"
                style:left=move || format!("{}px", x.get() - BLOB_RADIUS)
                style:top=move || format!("{}px", y.get() - BLOB_RADIUS)
            />
            <div class="absolute top-1/4 right-1/4 w-64 h-64 bg-purple-500/20 rounded-full blur-3xl animate-float" />
            <div
                class="absolute bottom-1/4 left-1/4 w-80 h-80 bg-pink-500/20 rounded-full blur-3xl animate-float"
                style="animation-delay: 1s"
            />
        </div>
    }
}
