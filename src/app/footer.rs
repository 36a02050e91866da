use leptos::prelude::*;

use crate::portfolio::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 py-8 px-6 border-t border-white/10">
            <div class="max-w-6xl mx-auto text-center">
                <p class="text-gray-400">
                    {format!(
                        "© {} {BRAND}. Built with passion and cutting-edge technologies.",
                        env!("BUILD_YEAR"),
                    )}
                </p>
            </div>
        </footer>
    }
}
