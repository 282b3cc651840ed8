use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use super::{effects::Reveal, ui::SectionHeader};
use crate::{
    content::{Project, GITHUB_PROFILE, PROJECTS},
    motion::{delay_css, stagger, tilt, tilt_style},
    page::Section,
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="relative py-16 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-black via-navy-dark/20 to-black" />
            <div class="absolute top-40 right-10 w-72 h-72 rounded-full bg-gradient-to-br from-amber/5 to-orange/5 blur-3xl animate-float-slow" />
            <div
                class="absolute bottom-40 left-10 w-96 h-96 rounded-full bg-gradient-to-br from-accent-teal/5 to-accent-cyan/5 blur-3xl animate-float-slow"
                style="animation-delay: 2s"
            />

            <div class="relative z-10 max-w-7xl mx-auto px-6 lg:px-8">
                <SectionHeader
                    section=Section::Projects
                    title="Selected"
                    highlight="Work"
                    blurb="A showcase of projects I've built, from concept to deployment. Each one represents a unique challenge and learning experience."
                />

                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>

                <Reveal delay=Duration::from_millis(600) class="mt-16 text-center">
                    <a
                        href=GITHUB_PROFILE
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-3 px-8 py-4 border-2 border-amber/30 text-amber font-outfit font-semibold rounded-full transition-all duration-300 hover:border-amber hover:bg-amber/10 hover:scale-105 active:scale-95"
                    >
                        <i class="devicon-github-plain" />
                        <span>"View All Projects on GitHub"</span>
                        <span>"↗"</span>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

/// Project card that tilts towards the pointer while hovered.
#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(card);
    let hovered = move || !is_outside.get();
    let colors = project.accent.classes();
    let delay = Duration::from_millis(150) * index as u32;

    let transform = move || {
        let (rx, ry) = if hovered() {
            tilt(
                element_x.get(),
                element_y.get(),
                element_width.get(),
                element_height.get(),
            )
        } else {
            (0.0, 0.0)
        };
        tilt_style(rx, ry)
    };

    view! {
        <Reveal delay from="translate-y-12">
            <div
                node_ref=card
                style=transform
                class=move || {
                    format!(
                        "group relative rounded-3xl overflow-hidden bg-gradient-to-br from-navy/60 to-navy-dark/80 border border-accent-cream/5 hover:border-amber/20 transition-[box-shadow,border-color] duration-500 {}",
                        if hovered() { colors.glow } else { "" },
                    )
                }
            >
                <div class="relative aspect-video overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        loading="lazy"
                        class="absolute inset-0 w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
                    {project
                        .featured
                        .then(|| {
                            view! {
                                <span class="absolute top-4 left-4 px-3 py-1 rounded-full bg-black/60 backdrop-blur-sm font-mono text-xs text-amber border border-amber/30">
                                    "Featured"
                                </span>
                            }
                        })}
                    <div class="absolute bottom-4 left-4 right-4 flex items-center gap-3 opacity-0 translate-y-5 group-hover:opacity-100 group-hover:translate-y-0 transition-all duration-300">
                        {project
                            .live_url
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-2 px-4 py-2 rounded-full bg-amber text-black font-outfit font-medium text-sm hover:scale-105 active:scale-95 transition-transform"
                                    >
                                        "↗ Live Demo"
                                    </a>
                                }
                            })}
                        <a
                            href=project.repo_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 px-4 py-2 rounded-full bg-accent-cream/10 text-accent-cream font-outfit font-medium text-sm backdrop-blur-sm hover:scale-105 active:scale-95 transition-transform"
                        >
                            <i class="devicon-github-plain" />
                            "Code"
                        </a>
                    </div>
                </div>

                <div class="p-6 space-y-4">
                    <div class="flex items-start justify-between gap-4">
                        <h3 class="font-clash text-xl font-bold text-accent-cream group-hover:text-amber transition-colors">
                            {project.title}
                        </h3>
                        <span class=format!(
                            "{} opacity-50 group-hover:opacity-100 group-hover:translate-x-1 group-hover:-translate-y-1 transition-all duration-200",
                            colors.text,
                        )>"↗"</span>
                    </div>
                    <p class="font-outfit text-sm text-accent-cream/60 leading-relaxed line-clamp-2">
                        {project.description}
                    </p>
                    <div class="flex flex-wrap gap-2 pt-2">
                        {project
                            .tags
                            .iter()
                            .enumerate()
                            .map(|(ti, tag)| {
                                let delay = stagger(
                                    Duration::from_millis(100) * index as u32,
                                    Duration::from_millis(50),
                                    ti,
                                );
                                view! {
                                    <span
                                        class=format!(
                                            "px-3 py-1 rounded-full border font-mono text-xs bg-navy/30 opacity-0 animate-scale-in {}",
                                            colors.tag,
                                        )
                                        style=format!("animation-delay: {}", delay_css(delay))
                                    >
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class=format!(
                    "absolute bottom-0 left-0 right-0 h-1 bg-gradient-to-r opacity-50 {}",
                    colors.gradient,
                ) />
            </div>
        </Reveal>
    }
}
