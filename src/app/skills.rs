use std::time::Duration;

use leptos::prelude::*;

use super::{effects::Reveal, ui::SectionHeader};
use crate::{
    content::{tech_icon, SkillCategory, SKILL_CATEGORIES},
    motion::{delay_css, stagger},
    page::Section,
};

/// Names drifting faintly behind the skills grid.
const BACKDROP_NAMES: [&str; 10] = [
    "React", "Next.js", "Node.js", "MongoDB", "AWS", "Docker", "Git", "Web", "Mobile", "Systems",
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    let active_category = RwSignal::new(None::<&'static str>);
    let hovered_tech = RwSignal::new(None::<(&'static str, &'static str)>);

    view! {
        <section id=Section::Skills.id() class="relative py-16 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-black via-navy-dark/30 to-black" />
            <div class="absolute inset-0 pointer-events-none">
                {BACKDROP_NAMES
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let style = format!(
                            "left: {}%; top: {}%; animation-duration: {}s; animation-delay: {}",
                            10 + (i % 5) * 20,
                            10 + (i / 5) * 40,
                            5 + i,
                            delay_css(Duration::from_millis(500) * i as u32),
                        );
                        view! {
                            <span class="absolute font-mono text-xs text-accent-cream opacity-5 animate-drift" style=style>
                                {*name}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6 lg:px-8">
                <SectionHeader
                    section=Section::Skills
                    title="Tech"
                    highlight="Arsenal"
                    blurb="A collection of technologies I've worked with and continue to explore. Always learning, always building."
                />

                <div class="grid md:grid-cols-2 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <SkillCard category index=i active_category hovered_tech />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(
    category: &'static SkillCategory,
    index: usize,
    active_category: RwSignal<Option<&'static str>>,
    hovered_tech: RwSignal<Option<(&'static str, &'static str)>>,
) -> impl IntoView {
    let colors = category.accent.classes();
    let card_delay = Duration::from_millis(150) * index as u32;
    let is_active = move || active_category.get() == Some(category.id);

    view! {
        <Reveal delay=card_delay>
            <div
                class=move || {
                    format!(
                        "group relative p-8 rounded-3xl border transition-all duration-500 bg-gradient-to-br from-navy/40 to-navy-dark/60 backdrop-blur-sm {} {} {}",
                        colors.border,
                        colors.border_hover,
                        if is_active() { colors.glow } else { "" },
                    )
                }
                on:mouseenter=move |_| active_category.set(Some(category.id))
                on:mouseleave=move |_| active_category.set(None)
            >
                <div class="flex items-center gap-4 mb-8">
                    <div class=move || {
                        format!(
                            "p-3 rounded-2xl transition-transform duration-300 {} {} {}",
                            colors.bg,
                            colors.text,
                            if is_active() { "scale-110 rotate-6" } else { "" },
                        )
                    }>
                        <span class="font-mono text-lg">"</>"</span>
                    </div>
                    <div>
                        <h3 class="font-clash text-2xl font-bold text-accent-cream">
                            {category.title}
                        </h3>
                        <p class="font-mono text-xs text-accent-cream/40">
                            {format!("{} technologies", category.technologies.len())}
                        </p>
                    </div>
                </div>

                <div class="grid grid-cols-3 sm:grid-cols-4 gap-4">
                    {category
                        .technologies
                        .iter()
                        .enumerate()
                        .map(|(ti, tech)| {
                            let tech: &'static str = tech;
                            let key = (category.id, tech);
                            let is_hovered = move || hovered_tech.get() == Some(key);
                            let delay = stagger(card_delay, Duration::from_millis(80), ti);
                            view! {
                                <div
                                    class="relative opacity-0 animate-scale-in"
                                    style=format!("animation-delay: {}", delay_css(delay))
                                    on:mouseenter=move |_| hovered_tech.set(Some(key))
                                    on:mouseleave=move |_| hovered_tech.set(None)
                                >
                                    <div class=move || {
                                        format!(
                                            "relative aspect-square rounded-2xl overflow-hidden bg-gradient-to-br from-navy-dark/60 to-navy/40 border-2 transition-all duration-300 hover:scale-110 hover:-translate-y-1 {}",
                                            if is_hovered() {
                                                format!("{} {}", colors.border, colors.glow)
                                            } else {
                                                "border-accent-cream/10".to_string()
                                            },
                                        )
                                    }>
                                        <div class=format!(
                                            "absolute inset-0 opacity-0 group-hover:opacity-20 transition-opacity duration-300 blur-xl {}",
                                            colors.bg,
                                        ) />
                                        <div class="relative flex items-center justify-center w-full h-full p-3">
                                            <img
                                                src=tech_icon(tech)
                                                alt=tech
                                                width="64"
                                                height="64"
                                                loading="lazy"
                                                class="w-full h-full object-contain"
                                            />
                                        </div>
                                        <Show when=is_hovered>
                                            <div class="absolute inset-0 bg-gradient-to-r from-transparent via-white/10 to-transparent animate-shimmer" />
                                        </Show>
                                    </div>
                                    <Show when=is_hovered>
                                        <div class=format!(
                                            "absolute -bottom-8 left-1/2 -translate-x-1/2 px-3 py-1 rounded-lg whitespace-nowrap bg-navy-dark/90 backdrop-blur-sm border font-outfit text-xs text-accent-cream z-10 animate-fade-in {}",
                                            colors.border,
                                        )>{tech}</div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=format!(
                    "absolute top-4 right-4 w-8 h-8 border-t-2 border-r-2 rounded-tr-xl {}",
                    colors.border,
                ) />
                <div class=format!(
                    "absolute bottom-4 left-4 w-8 h-8 border-b-2 border-l-2 rounded-bl-xl {}",
                    colors.border,
                ) />
            </div>
        </Reveal>
    }
}
