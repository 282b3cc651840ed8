use std::time::Duration;

use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::{
    effects::Reveal,
    ui::{IconView, SectionHeader, SectionLink},
};
use crate::{
    content::{ABOUT_CARDS, OWNER_SHORT},
    motion::stagger,
    page::Section,
};

#[component]
pub fn AboutSection() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    // floating shapes drift slower than the page
    let drift = move |rate: f64| format!("transform: translateY({:.1}px)", -scroll_y.get() * rate);

    view! {
        <section id=Section::About.id() class="relative py-16 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-black via-navy-dark/20 to-black" />
            <div class="absolute inset-y-0 left-0 w-1/2 opacity-30">
                <div
                    class="h-full bg-gradient-to-br from-navy/40 to-transparent"
                    style="clip-path: polygon(0 0, 100% 0, 70% 100%, 0 100%)"
                />
            </div>
            <div
                class="absolute top-20 right-20 w-40 h-40 rounded-full border border-amber/10 animate-morph"
                style=move || drift(0.08)
            />
            <div
                class="absolute bottom-20 left-10 w-24 h-24 rounded-2xl bg-accent-teal/5 rotate-12"
                style=move || drift(0.04)
            />

            <div class="relative z-10 max-w-7xl mx-auto px-6 lg:px-8">
                <SectionHeader section=Section::About title="Crafting Interfaces With" highlight="Code & Creativity" />

                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="relative">
                        <Reveal from="scale-90 -rotate-3" delay=Duration::from_millis(200)>
                            <div class="relative aspect-square max-w-md mx-auto rounded-3xl overflow-hidden bg-gradient-to-br from-navy via-navy-dark to-black border border-amber/10">
                                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent" />
                                <div class="absolute inset-0 flex items-center justify-center p-12">
                                    <img src="/gem.png" alt="" class="w-full h-full object-contain animate-float" />
                                </div>
                                <div class="absolute top-4 left-4 w-8 h-8 border-t-2 border-l-2 border-amber/50 rounded-tl-lg" />
                                <div class="absolute bottom-4 right-4 w-8 h-8 border-b-2 border-r-2 border-amber/50 rounded-br-lg" />
                            </div>
                        </Reveal>
                        <Reveal
                            from="translate-x-12"
                            delay=Duration::from_millis(600)
                            class="absolute -right-4 top-10"
                        >
                            <StatBadge value="2+" line1="Years" line2="of Coding" />
                        </Reveal>
                        <Reveal
                            from="-translate-x-12"
                            delay=Duration::from_millis(800)
                            class="absolute -left-4 bottom-10"
                        >
                            <StatBadge value="10+" line1="Projects" line2="Completed" />
                        </Reveal>
                    </div>

                    <div class="space-y-8">
                        <Reveal delay=Duration::from_millis(300)>
                            <div class="space-y-4 font-outfit text-lg text-accent-cream/70 leading-relaxed">
                                <p>
                                    "Hey there! I'm "
                                    <span class="text-amber font-semibold">{OWNER_SHORT}</span>
                                    ", a passionate software engineering student who loves turning ideas into clean and modern solutions."
                                </p>
                                <p>
                                    "My journey in tech started with curiosity and has evolved into a deep passion for creating elegant solutions to complex problems. I work with MERN stack, Next.js, and Spring Boot to build scalable and efficient solutions. I'm always eager to learn and grow, constantly exploring new technologies and better ways to solve problems."
                                </p>
                                <p>
                                    "I enjoy the challenge of building things that matter. With a mindset of \"If I don't know something, I'll figure it out,\" I approach every project with confidence, curiosity, and the determination to get things done."
                                </p>
                            </div>
                        </Reveal>

                        <div class="grid grid-cols-2 gap-4">
                            {ABOUT_CARDS
                                .iter()
                                .enumerate()
                                .map(|(i, card)| {
                                    let delay = stagger(
                                        Duration::from_millis(500),
                                        Duration::from_millis(200),
                                        i,
                                    );
                                    view! {
                                        <Reveal delay>
                                            <div class="group p-4 rounded-2xl bg-navy/20 border border-accent-cream/5 hover:border-amber/20 transition-all duration-300 hover:-translate-y-1">
                                                <IconView icon=card.icon class="text-amber" />
                                                <p class="mt-2 font-mono text-xs text-accent-cream/40">
                                                    {card.label}
                                                </p>
                                                <p class="font-outfit text-sm text-accent-cream">
                                                    {card.value}
                                                </p>
                                            </div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <Reveal delay=Duration::from_millis(1300)>
                            <blockquote class="relative pl-6 border-l-2 border-amber/30">
                                <span class="absolute -left-1 -top-4 font-clash text-5xl text-amber/30">
                                    "\""
                                </span>
                                <p class="font-outfit italic text-accent-cream/60">
                                    "Code is poetry, and I'm here to write beautiful verses."
                                </p>
                            </blockquote>
                        </Reveal>

                        <Reveal delay=Duration::from_millis(1500)>
                            <SectionLink
                                to=Section::Contact
                                class="group inline-flex items-center gap-3 font-outfit font-semibold text-amber transition-transform hover:scale-[1.02]"
                            >
                                <span>"Let's Connect"</span>
                                <span class="animate-nudge">"→"</span>
                            </SectionLink>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatBadge(value: &'static str, line1: &'static str, line2: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 p-4 rounded-2xl bg-black/80 backdrop-blur-xl border border-amber/20 shadow-glow-amber">
            <span class="font-clash text-3xl font-bold text-gradient">{value}</span>
            <div>
                <p class="font-outfit text-sm text-accent-cream">{line1}</p>
                <p class="font-mono text-xs text-accent-cream/40">{line2}</p>
            </div>
        </div>
    }
}
