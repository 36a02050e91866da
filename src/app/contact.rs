use std::sync::Arc;

use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::reveal::{Reveal, Slide};
use crate::config::ContactConfig;
use crate::contact::{
    BrowserTransport, ContactFields, ContactHandler, RelayConfig, SubmissionState,
    SubmissionStatus,
};
use crate::portfolio::{stagger_ms, CONTACT_CHANNELS};
#[cfg(feature = "hydrate")]
use gloo_timers::future::sleep as reset_timer;

type Handler = ContactHandler<RelayConfig, BrowserTransport>;

// the form never submits during server rendering
#[cfg(not(feature = "hydrate"))]
async fn reset_timer(_delay: std::time::Duration) {}

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/5 border border-white/10 rounded-lg focus:border-blue-400 focus:outline-none focus:scale-[1.02] transition-all duration-300 backdrop-blur-sm";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="relative z-10 py-20 px-6">
            <div class="max-w-4xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                        "Get In Touch"
                    </h2>
                    <p class="text-xl text-gray-300">"Have a project in mind? Let's talk about it!"</p>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <Reveal slide=Slide::Left class="space-y-8">
                        <h3 class="text-2xl font-semibold mb-6">"Contact Information"</h3>
                        <Channels />
                        <Reveal delay_ms=300 class="mt-8 p-6 bg-gradient-to-br from-blue-600/10 to-purple-600/10 rounded-xl border border-blue-400/20">
                            <h4 class="text-lg font-semibold mb-2 text-blue-400">"Availability"</h4>
                            <p class="text-gray-300 text-sm">
                                "Currently open to new freelance projects and collaborations. I usually respond within 24 hours."
                            </p>
                        </Reveal>
                    </Reveal>
                    <Reveal slide=Slide::Right class="space-y-6">
                        <h3 class="text-2xl font-semibold mb-6">"Send Message"</h3>
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Channels() -> impl IntoView {
    view! {
        <div class="space-y-6">
            {CONTACT_CHANNELS
                .iter()
                .enumerate()
                .map(|(i, channel)| {
                    let (icon, title, info, link) = (
                        channel.icon,
                        channel.title,
                        channel.info,
                        channel.link,
                    );
                    view! {
                        <Reveal delay_ms=stagger_ms(i)>
                            <a
                                href=link
                                class="flex items-center gap-4 p-4 bg-white/5 backdrop-blur-sm rounded-xl border border-white/10 hover:border-blue-400/50 hover:scale-105 hover:translate-x-2 transition-all duration-300 group"
                            >
                                <div class="p-3 bg-gradient-to-br from-blue-600 to-purple-600 rounded-lg group-hover:animate-pulse text-2xl leading-none">
                                    <i class=icon.class()>{icon.glyph()}</i>
                                </div>
                                <div>
                                    <div class="font-semibold text-white">{title}</div>
                                    <div class="text-gray-400 group-hover:text-blue-400 transition-colors">
                                        {info}
                                    </div>
                                </div>
                            </a>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let state = RwSignal::new(SubmissionState::default());
    let config = ContactConfig::compiled();
    let handler: StoredValue<Arc<Handler>> = StoredValue::new(Arc::new(
        ContactHandler::new(config.relay, BrowserTransport, &config.fallback_email)
            .on_change(move |s| state.set(s.clone())),
    ));

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let honeypot = RwSignal::new(String::new());

    let clear = move || {
        for field in [name, email, subject, message, honeypot] {
            field.set(String::new());
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let fields = ContactFields {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
            honeypot: honeypot.get_untracked(),
        };
        let handler = handler.get_value();
        spawn_local(async move {
            handler
                .submit_and_reset(
                    &fields,
                    |outcome| {
                        if outcome.clears_form() {
                            clear();
                        }
                    },
                    reset_timer,
                )
                .await;
        });
    };

    let sending = move || state.with(SubmissionState::is_sending);

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="space-y-2">
                    <label for="contact_name" class="text-sm font-medium text-gray-300">
                        "Name"
                    </label>
                    <input
                        id="contact_name"
                        name="name"
                        type="text"
                        required=true
                        class=INPUT_CLASS
                        placeholder="Your name"
                        bind:value=name
                    />
                </div>
                <div class="space-y-2">
                    <label for="contact_email" class="text-sm font-medium text-gray-300">
                        "Email"
                    </label>
                    <input
                        id="contact_email"
                        name="email"
                        type="email"
                        required=true
                        class=INPUT_CLASS
                        placeholder="your@email.com"
                        bind:value=email
                    />
                </div>
            </div>
            <div class="space-y-2">
                <label for="contact_subject" class="text-sm font-medium text-gray-300">
                    "Subject"
                </label>
                <input
                    id="contact_subject"
                    name="subject"
                    type="text"
                    required=true
                    class=INPUT_CLASS
                    placeholder="Message subject"
                    bind:value=subject
                />
            </div>
            <div class="space-y-2">
                <label for="contact_message" class="text-sm font-medium text-gray-300">
                    "Message"
                </label>
                <textarea
                    id="contact_message"
                    name="message"
                    rows=5
                    required=true
                    class=format!("{INPUT_CLASS} resize-none")
                    placeholder="Describe your project or ask a question..."
                    bind:value=message
                ></textarea>
            </div>
            // bots fill in every field, people never see this one
            <input
                type="text"
                name="botcheck"
                class="hidden"
                tabindex="-1"
                autocomplete="off"
                aria-hidden="true"
                bind:value=honeypot
            />
            <button
                type="submit"
                disabled=sending
                class="w-full px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 hover:scale-105 active:scale-95 rounded-lg font-semibold transition-all duration-300 transform hover:shadow-2xl disabled:opacity-50 disabled:cursor-not-allowed disabled:hover:scale-100"
            >
                {move || if sending() { "Sending..." } else { "Send Message" }}
            </button>
            <StatusBanner state />
        </form>
    }
}

/// Shows the outcome of the last submission until the form resets.
#[component]
fn StatusBanner(state: RwSignal<SubmissionState>) -> impl IntoView {
    move || {
        state.with(|s| {
            let color = match s.status {
                SubmissionStatus::Success => "bg-green-500/20 border-green-500/50 text-green-300",
                SubmissionStatus::Error => "bg-red-500/20 border-red-500/50 text-red-300",
                SubmissionStatus::Idle | SubmissionStatus::Sending => return None,
            };
            let message = s.message.clone();
            Some(view! {
                <div role="status" class=format!("p-4 rounded-lg border text-sm {color}")>
                    {message}
                </div>
            })
        })
    }
}
