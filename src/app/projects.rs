use leptos::{either::*, prelude::*};

use super::nav::scroll_to_section;
use super::reveal::{Reveal, Slide};
use crate::portfolio::{stagger_ms, Project, FEATURED, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="relative z-10 py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                        "My Projects"
                    </h2>
                    <p class="text-xl text-gray-300">
                        "Discover my portfolio of latest projects and implementations"
                    </p>
                </Reveal>
                <Reveal class="mb-16">
                    <Featured />
                </Reveal>
                <div class="space-y-8">
                    <h3 class="text-2xl font-semibold text-center text-gray-300">"Other Projects"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .map(|(i, project)| project_card(i, project))
                            .collect_view()}
                    </div>
                    <Reveal slide=Slide::Up delay_ms=500 class="text-center mt-12">
                        <button
                            on:click=move |_| scroll_to_section("contact")
                            class="px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 rounded-full font-semibold transition-all duration-300 transform hover:scale-105 hover:shadow-2xl"
                        >
                            "Get In Touch"
                        </button>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Featured() -> impl IntoView {
    let bullet_colors = ["bg-emerald-400", "bg-teal-400", "bg-cyan-400", "bg-blue-400"];

    view! {
        <div class="relative overflow-hidden rounded-2xl border border-white/20 bg-gradient-to-br from-gray-900/80 to-gray-800/80 backdrop-blur-sm group hover:border-blue-400/50 transition-all duration-500">
            <div class="absolute inset-0 bg-gradient-to-br from-blue-600/5 to-purple-600/5" />
            <div class="absolute top-6 right-6 z-10">
                <div class="bg-gradient-to-r from-yellow-400 to-orange-500 text-black text-sm font-bold px-4 py-2 rounded-full flex items-center gap-2">
                    <span class="w-2 h-2 bg-black/20 rounded-full animate-pulse" />
                    "Featured Project"
                </div>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 p-8">
                <div class="relative">
                    {match FEATURED.video {
                        Some(src) => {
                            Either::Left(
                                view! {
                                    <div
                                        class="aspect-video rounded-xl overflow-hidden group-hover:scale-105 transition-transform duration-500 border border-white/10"
                                        inner_html=demo_video(src)
                                    ></div>
                                },
                            )
                        }
                        None => {
                            Either::Right(
                                view! {
                                    <div class="aspect-video rounded-xl overflow-hidden group-hover:scale-105 transition-transform duration-500 border border-white/10 bg-gradient-to-br from-emerald-600/20 to-blue-600/20 flex items-center justify-center">
                                        <span class="text-6xl text-emerald-400 opacity-70">"▶"</span>
                                    </div>
                                },
                            )
                        }
                    }}
                    <div class="absolute -top-4 -right-4 w-8 h-8 bg-blue-500/30 rounded-full animate-float" />
                    <div
                        class="absolute -bottom-4 -left-4 w-6 h-6 bg-purple-500/30 rounded-full animate-float"
                        style="animation-delay: 1s"
                    />
                </div>
                <div class="space-y-6 flex flex-col justify-center">
                    <div>
                        <h3 class="text-3xl md:text-4xl font-bold text-white mb-4 group-hover:text-emerald-400 transition-colors duration-300">
                            {FEATURED.title}
                        </h3>
                        <p class="text-gray-300 text-lg leading-relaxed">{FEATURED.summary}</p>
                    </div>
                    <div class="space-y-3">
                        <h4 class="text-lg font-semibold text-emerald-400">"Key Features:"</h4>
                        <ul class="space-y-2 text-gray-300">
                            {FEATURED
                                .features
                                .iter()
                                .zip(bullet_colors.iter().cycle())
                                .map(|(feature, color)| {
                                    view! {
                                        <li class="flex items-center gap-2">
                                            <div class=format!("w-1.5 h-1.5 rounded-full {color}") />
                                            {*feature}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="space-y-3">
                        <h4 class="text-lg font-semibold text-teal-400">"Tech Stack:"</h4>
                        <div class="flex flex-wrap gap-2">
                            {FEATURED
                                .tech
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-3 py-1 bg-gradient-to-r from-emerald-500/20 to-teal-500/20 text-emerald-300 text-sm rounded-full border border-emerald-500/30">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex gap-4 pt-4">
                        <a
                            href=FEATURED.whitepaper_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 px-6 py-3 bg-white/10 hover:bg-white/20 hover:scale-105 active:scale-95 rounded-xl transition-all duration-300 font-medium"
                        >
                            <i class="devicon-github-plain" />
                            "Whitepaper"
                        </a>
                        <a
                            href=FEATURED.live_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 px-6 py-3 bg-gradient-to-r from-emerald-600 to-teal-600 hover:from-emerald-700 hover:to-teal-700 hover:scale-105 active:scale-95 rounded-xl transition-all duration-300 font-medium"
                        >
                            "↗ Live Demo"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn demo_video(src: &str) -> String {
    format!(
        r#"<video class="w-full h-full object-cover" autoplay muted loop playsinline preload="auto"><source src="{src}" type="video/mp4" />Your browser does not support the video tag.</video>"#
    )
}

fn project_card(index: usize, project: &Project) -> impl IntoView {
    let Project {
        title,
        description,
        tech,
        code_url,
        live_url,
        featured,
    } = *project;
    let span = if featured { "md:col-span-2 lg:col-span-1" } else { "" };

    view! {
        <Reveal
            delay_ms=stagger_ms(index)
            class=format!(
                "group relative overflow-hidden rounded-xl border border-white/10 hover:border-blue-400/50 transition-all duration-500 {span}",
            )
        >
            <div class="relative bg-gradient-to-br from-gray-900/50 to-gray-800/50 backdrop-blur-sm p-6 h-full">
                <div class="relative overflow-hidden rounded-lg mb-4 bg-gradient-to-br from-blue-600/20 to-purple-600/20 h-48 flex items-center justify-center group-hover:scale-105 transition-transform duration-500">
                    <div class="absolute inset-0 bg-gradient-to-br from-blue-500/10 to-purple-500/10" />
                    <span class="text-5xl text-blue-400 opacity-70 group-hover:opacity-100 transition-opacity duration-300">
                        "▶"
                    </span>
                    {featured
                        .then(|| {
                            view! {
                                <div class="absolute top-3 right-3 bg-gradient-to-r from-yellow-400 to-orange-500 text-black text-xs font-bold px-2 py-1 rounded-full">
                                    "Featured"
                                </div>
                            }
                        })}
                </div>
                <div class="space-y-4">
                    <h3 class="text-xl font-bold text-white group-hover:text-blue-400 transition-colors duration-300">
                        {title}
                    </h3>
                    <p class="text-gray-300 text-sm leading-relaxed">{description}</p>
                    <div class="flex flex-wrap gap-2">
                        {tech
                            .iter()
                            .map(|t| {
                                view! {
                                    <span class="px-3 py-1 bg-blue-500/20 text-blue-300 text-xs rounded-full border border-blue-500/30">
                                        {*t}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-3 pt-4">
                        <a
                            href=code_url
                            class="flex items-center gap-2 px-4 py-2 bg-white/10 hover:bg-white/20 hover:scale-105 active:scale-95 rounded-lg transition-all duration-300 text-sm font-medium"
                        >
                            <i class="devicon-github-plain" />
                            "Code"
                        </a>
                        <a
                            href=live_url
                            class="flex items-center gap-2 px-4 py-2 bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 hover:scale-105 active:scale-95 rounded-lg transition-all duration-300 text-sm font-medium"
                        >
                            "↗ Live Demo"
                        </a>
                    </div>
                </div>
                <div class="absolute inset-0 bg-gradient-to-t from-blue-600/10 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500 pointer-events-none" />
            </div>
        </Reveal>
    }
}
