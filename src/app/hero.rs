use std::time::Duration;

use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::ui::{IconView, SectionLink};
use crate::{
    content::{profile_links, CV_PATH, OWNER_NAME, ROLE},
    motion::{delay_css, interpolate, parallax, stagger},
    page::Section,
};

/// Scroll distance (px) over which the hero's parallax plays out.
const SCROLL_SPAN: f64 = 900.0;
const LETTER_BASE: Duration = Duration::from_millis(300);
const LETTER_STEP: Duration = Duration::from_millis(80);

#[component]
pub fn HeroSection() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let drift = move |distance: f64| {
        format!(
            "transform: translateY({:.1}px)",
            parallax(scroll_y.get(), SCROLL_SPAN, distance)
        )
    };
    let fade = move || {
        let y = scroll_y.get();
        let opacity = interpolate(y, (0.0, SCROLL_SPAN / 2.0), (1.0, 0.0));
        let scale = interpolate(y, (0.0, SCROLL_SPAN / 2.0), (1.0, 0.9));
        format!("opacity: {opacity:.3}; transform: scale({scale:.3})")
    };

    view! {
        <section
            id=Section::Home.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-b from-navy-dark/40 via-black to-black" />
            <div class="absolute inset-0 bg-grid opacity-20" style=move || drift(-150.0) />

            <div
                class="absolute top-1/4 left-[10%] w-24 h-24 border-2 border-amber/20 rotate-45 animate-float-slow"
                style=move || drift(-100.0)
            />
            <div
                class="absolute bottom-1/4 right-[12%] w-32 h-32 rounded-full bg-gradient-to-br from-orange/20 to-transparent blur-xl animate-pulse-glow"
                style=move || drift(-50.0)
            />
            <div
                class="absolute top-1/3 right-1/4 w-4 h-4 rounded-full bg-amber/60 animate-spin-slow"
                style=move || drift(-150.0)
            />

            <div class="relative z-10 max-w-5xl mx-auto px-6 text-center" style=fade>
                <div class="mb-8 animate-slide-up">
                    <span class="inline-flex items-center gap-2 px-4 py-2 rounded-full border border-amber/20 bg-amber/5 font-mono text-sm text-amber">
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-green-400 opacity-75" />
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-green-500" />
                        </span>
                        "Available for opportunities"
                    </span>
                </div>

                <h1
                    class="font-clash text-5xl sm:text-7xl lg:text-8xl font-bold text-accent-cream leading-none"
                    style="perspective: 1000px"
                    aria-label=OWNER_NAME
                >
                    <NameReveal />
                </h1>

                <div class="mt-8 opacity-0 animate-slide-up" style="animation-delay: 1s">
                    <h2 class="font-outfit text-xl md:text-2xl text-accent-cream/80">
                        <span class="text-gradient font-semibold">{ROLE}</span>
                    </h2>
                    <div
                        class="mx-auto mt-4 h-px w-32 bg-gradient-to-r from-transparent via-amber to-transparent origin-center scale-x-0 animate-line-grow"
                        style="animation-delay: 1.3s"
                    />
                </div>

                <p
                    class="mt-8 max-w-2xl mx-auto font-outfit text-lg text-accent-cream/60 opacity-0 animate-slide-up"
                    style="animation-delay: 1.2s"
                >
                    "I am a passionate undergraduate with a strong interest in building practical and scalable solutions to real-world problems."
                </p>

                <div
                    class="mt-12 flex flex-col sm:flex-row items-center justify-center gap-4 opacity-0 animate-slide-up"
                    style="animation-delay: 1.4s"
                >
                    <SectionLink
                        to=Section::Projects
                        class="group relative overflow-hidden px-8 py-4 rounded-full bg-gradient-to-r from-amber to-orange text-black font-outfit font-semibold transition-transform hover:scale-105 active:scale-95"
                    >
                        <span class="relative z-10">"View My Work"</span>
                        <span class="absolute inset-0 -translate-x-full group-hover:translate-x-full transition-transform duration-700 bg-gradient-to-r from-transparent via-white/30 to-transparent" />
                    </SectionLink>
                    <a
                        href=CV_PATH
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-8 py-4 rounded-full border-2 border-accent-cream/20 text-accent-cream font-outfit font-semibold transition-all hover:border-amber hover:text-amber hover:scale-105 active:scale-95"
                    >
                        <span>"View My CV"</span>
                    </a>
                </div>

                <div class="mt-12 flex items-center justify-center gap-6">
                    {profile_links()
                        .enumerate()
                        .map(|(i, social)| {
                            let delay = stagger(
                                Duration::from_millis(1600),
                                Duration::from_millis(100),
                                i,
                            );
                            view! {
                                <a
                                    href=social.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.label
                                    class="text-2xl text-accent-cream/60 hover:text-amber transition-all hover:scale-125 hover:-translate-y-1 opacity-0 animate-slide-up"
                                    style=format!("animation-delay: {}", delay_css(delay))
                                >
                                    <IconView icon=social.kind.icon() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2" style=fade>
                <span class="font-mono text-xs tracking-widest text-accent-cream/40">"SCROLL"</span>
                <span class="text-amber animate-bounce-slow">"↓"</span>
            </div>
        </section>
    }
}

/// The owner's name, one letter at a time.
#[component]
fn NameReveal() -> impl IntoView {
    let words: Vec<&'static str> = OWNER_NAME.split(' ').collect();
    let last = words.len().saturating_sub(1);
    let mut index = 0;
    words
        .into_iter()
        .enumerate()
        .map(|(wi, word)| {
            let letters = word
                .chars()
                .map(|letter| {
                    let delay = stagger(LETTER_BASE, LETTER_STEP, index);
                    index += 1;
                    view! {
                        <span
                            class="inline-block opacity-0 animate-letter-in"
                            style=format!(
                                "animation-delay: {}; transform-style: preserve-3d",
                                delay_css(delay),
                            )
                            aria-hidden="true"
                        >
                            {letter.to_string()}
                        </span>
                    }
                })
                .collect_view();
            view! {
                <span class="inline-block whitespace-nowrap">
                    {letters}
                    {(wi < last).then(|| view! { <span>"\u{a0}\u{a0}"</span> })}
                </span>
            }
        })
        .collect_view()
}
