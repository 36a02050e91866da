use leptos::prelude::*;

use super::reveal::{Reveal, Slide};
use crate::portfolio::{stagger_ms, CORE_SKILLS, STATS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="relative z-10 py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <Reveal slide=Slide::Left class="space-y-6">
                        <h2 class="text-4xl md:text-5xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                            "About Me"
                        </h2>
                        <div class="space-y-4 text-gray-300 leading-relaxed">
                            <p class="text-lg">
                                "I'm a passionate developer with over "
                                <span class="text-blue-400 font-semibold">"3 years of experience"</span>
                                " creating modern web applications. I specialize in both frontend and backend technologies."
                            </p>
                            <p>
                                "My journey with programming started from curiosity about the world of technology, which transformed into a true passion. I love solving complex problems and creating solutions that have a real impact on users."
                            </p>
                            <p>
                                "Currently, I focus on developing with "
                                <span class="text-purple-400 font-semibold">"React/Next.js"</span>
                                " and "
                                <span class="text-green-400 font-semibold">"Node.js"</span>
                                ", but I'm always open to learning new technologies."
                            </p>
                        </div>
                        <Stats />
                    </Reveal>
                    <Reveal slide=Slide::Right class="space-y-8">
                        <Avatar />
                        <CoreSkills />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-6 pt-6">
            {STATS
                .iter()
                .enumerate()
                .map(|(i, stat)| {
                    let (value, label) = (stat.value, stat.label);
                    view! {
                        <Reveal delay_ms=stagger_ms(i) class="text-center">
                            <div class="text-2xl md:text-3xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                                {value}
                            </div>
                            <div class="text-gray-400 text-sm">{label}</div>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Avatar() -> impl IntoView {
    view! {
        <div class="relative mx-auto lg:mx-0 w-64 h-64 rounded-full bg-gradient-to-br from-blue-600/20 to-purple-600/20 flex items-center justify-center border border-white/10 group hover:border-blue-400/50 transition-all duration-500">
            <div class="absolute inset-0 bg-gradient-to-br from-blue-500/10 to-purple-500/10 rounded-full group-hover:animate-pulse" />
            <span class="text-7xl text-blue-400 opacity-70">"👤"</span>
            <div class="absolute -top-4 -right-4 w-8 h-8 bg-blue-500/30 rounded-full animate-float" />
            <div
                class="absolute -bottom-6 -left-6 w-6 h-6 bg-purple-500/30 rounded-full animate-float"
                style="animation-delay: 1s"
            />
            <div
                class="absolute top-1/2 -left-8 w-4 h-4 bg-pink-500/30 rounded-full animate-float"
                style="animation-delay: 2s"
            />
        </div>
    }
}

#[component]
fn CoreSkills() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h3 class="text-xl font-semibold text-center lg:text-left">"Core Skills"</h3>
            <div class="space-y-3">
                {CORE_SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        let (name, level) = (skill.name, skill.level);
                        view! {
                            <Reveal slide=Slide::Right delay_ms=stagger_ms(i) class="space-y-2">
                                <div class="flex justify-between text-sm">
                                    <span class="text-gray-300">{name}</span>
                                    <span class="text-blue-400">{format!("{level}%")}</span>
                                </div>
                                <div class="w-full bg-gray-700 rounded-full h-2">
                                    // width animates from 0 once the parent is revealed
                                    <div
                                        class="skill-bar bg-gradient-to-r from-blue-500 to-purple-500 h-2 rounded-full"
                                        style=format!("--level: {level}%")
                                    />
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
