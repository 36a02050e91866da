use leptos::prelude::*;

use super::nav::scroll_to_section;
use crate::portfolio::HERO_LINKS;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative z-10 min-h-screen flex items-center justify-center px-6">
            <div class="text-center max-w-4xl mx-auto">
                <h1
                    class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-white via-blue-200 to-purple-300 bg-clip-text text-transparent enter-up"
                    style="animation-delay: 200ms"
                >
                    "Hi, I'm a"
                    <span class="block text-blue-400 animate-glow">"Developer"</span>
                </h1>
                <p
                    class="text-xl md:text-2xl mb-8 text-gray-300 leading-relaxed enter-up"
                    style="animation-delay: 400ms"
                >
                    "I create modern web applications with passion for innovation"
                    <br />
                    "and exceptional user experience"
                </p>
                <div
                    class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-12 enter-up"
                    style="animation-delay: 600ms"
                >
                    <button
                        on:click=move |_| scroll_to_section("projects")
                        class="px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 rounded-full font-semibold hover:from-blue-700 hover:to-purple-700 transition-all duration-300 transform hover:scale-105 hover:shadow-2xl"
                    >
                        "View My Projects"
                    </button>
                </div>
                <div class="flex justify-center space-x-6 mb-12 enter-fade" style="animation-delay: 800ms">
                    {HERO_LINKS
                        .into_iter()
                        .map(|(icon, href)| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-3 bg-white/10 backdrop-blur-sm rounded-full hover:bg-white/20 hover:scale-125 hover:rotate-6 active:scale-90 transition-all duration-300 text-2xl leading-none"
                                >
                                    <i class=icon.class()>{icon.glyph()}</i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div
                    class="animate-bounce cursor-pointer enter-fade"
                    style="animation-delay: 1000ms"
                    on:click=move |_| scroll_to_section("about")
                >
                    <span class="text-3xl text-blue-400 hover:text-blue-300 transition-colors duration-300">
                        "⌄"
                    </span>
                </div>
            </div>
        </section>
    }
}
