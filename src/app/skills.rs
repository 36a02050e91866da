use leptos::prelude::*;

use super::reveal::Reveal;
use crate::portfolio::{stagger_ms, TECH_GRID};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="relative z-10 py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                        "Skills"
                    </h2>
                    <p class="text-xl text-gray-300">
                        "Modern technology stack for building applications of the future"
                    </p>
                </Reveal>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {TECH_GRID
                        .into_iter()
                        .enumerate()
                        .map(|(i, tech)| {
                            view! {
                                <Reveal
                                    delay_ms=stagger_ms(i)
                                    class="p-6 bg-white/5 backdrop-blur-sm rounded-xl border border-white/10 hover:border-blue-400/50 hover:scale-105 hover:rotate-2 transition-all duration-300 text-center group"
                                >
                                    <div class="w-12 h-12 bg-gradient-to-br from-blue-400 to-purple-400 rounded-lg mx-auto mb-4 flex items-center justify-center group-hover:animate-pulse">
                                        <span class="text-white font-mono">"</>"</span>
                                    </div>
                                    <h3 class="font-semibold text-lg">{tech}</h3>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
