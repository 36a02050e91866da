use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::portfolio::{BRAND, NAV_SECTIONS};
use crate::scroll::{active_section, SectionBounds, NAV_CLASS};
#[cfg(feature = "hydrate")]
use crate::scroll::scroll_target;

#[component]
pub fn Nav() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let active = Memo::new(move |_| active_section(scroll_y.get(), &measure_sections()));

    view! {
        <nav class=NAV_CLASS>
            <div class="flex justify-between items-center max-w-7xl mx-auto">
                <div class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent enter-left">
                    {BRAND}
                </div>
                <div class="hidden md:flex space-x-8 enter-right">
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| {
                            let id = section.id;
                            let is_active = move || active.get() == Some(id);
                            view! {
                                <button
                                    on:click=move |_| scroll_to_section(id)
                                    class=move || {
                                        let color = if is_active() { "text-blue-400" } else { "" };
                                        format!(
                                            "hover:text-blue-400 transition-colors duration-300 relative group cursor-pointer {color}",
                                        )
                                    }
                                >
                                    {section.label}
                                    <span class=move || {
                                        let width = if is_active() {
                                            "w-full"
                                        } else {
                                            "w-0 group-hover:w-full"
                                        };
                                        format!(
                                            "absolute -bottom-1 left-0 h-0.5 bg-blue-400 transition-all duration-300 {width}",
                                        )
                                    } />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

/// Smooth-scrolls so the section with `id` sits just below the nav bar.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = document().get_element_by_id(id) else {
            log::debug!("no section with id {id}");
            return;
        };
        let top = el.get_bounding_client_rect().top();
        let page_y = window().scroll_y().unwrap_or_default();
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(scroll_target(top, page_y));
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[cfg(feature = "hydrate")]
fn measure_sections() -> Vec<SectionBounds> {
    use wasm_bindgen::JsCast;

    NAV_SECTIONS
        .iter()
        .filter_map(|section| {
            let el = document()
                .get_element_by_id(section.id)?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                id: section.id,
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

// nothing is laid out on the server
#[cfg(not(feature = "hydrate"))]
fn measure_sections() -> Vec<SectionBounds> {
    Vec::new()
}
