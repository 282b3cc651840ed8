use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use super::ui::scroll_to_section;
use crate::{
    content::OWNER_INITIALS,
    page::{active_section, is_scrolled, Section},
};

fn section_top(section: Section) -> Option<f64> {
    document()
        .get_element_by_id(section.id())
        .map(|el| el.get_bounding_client_rect().top())
}

fn link_class(active: bool) -> &'static str {
    if active {
        "text-amber"
    } else {
        "text-accent-cream/70 hover:text-amber"
    }
}

/// Fixed navbar: compacts once the page scrolls, highlights the section in
/// view, and collapses into a slide-in menu on small screens.
#[component]
pub fn Navigation() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (active, set_active) = signal(Section::Home);
    let (menu_open, set_menu_open) = signal(false);

    Effect::new(move |_| {
        scroll_y.track();
        let tops = Section::ALL
            .into_iter()
            .filter_map(|s| section_top(s).map(|top| (s, top)));
        if let Some(section) = active_section(tops) {
            set_active(section);
        }
    });

    // lock page scroll behind the mobile menu
    Effect::new(move |_| {
        let overflow = if menu_open.get() { "hidden" } else { "" };
        if let Some(body) = document().body() {
            if let Err(e) = body.style().set_property("overflow", overflow) {
                log::warn!("couldn't set body overflow: {e:?}");
            }
        }
    });

    let go = move |section: Section| {
        set_menu_open(false);
        scroll_to_section(section);
    };

    let nav_class = move || {
        let state = if is_scrolled(scroll_y.get()) {
            "py-3 backdrop-blur-xl bg-black/70"
        } else {
            "py-6 bg-transparent"
        };
        format!("fixed top-0 left-0 right-0 z-50 transition-all duration-500 animate-slide-down {state}")
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-6 lg:px-8">
                <div class="flex items-center justify-between">
                    <a
                        href=Section::Home.anchor()
                        class="relative group transition-transform hover:scale-105 active:scale-95"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go(Section::Home);
                        }
                    >
                        <span class="font-clash text-2xl font-bold text-gradient">
                            {OWNER_INITIALS}
                            <span class="text-amber">"."</span>
                        </span>
                        <div class="absolute inset-0 bg-amber/20 blur-xl opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
                    </a>

                    <div class="hidden md:flex items-center gap-1">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                let is_active = move || active.get() == section;
                                view! {
                                    <a
                                        href=section.anchor()
                                        class=move || {
                                            format!(
                                                "relative px-4 py-2 font-outfit text-sm font-medium transition-colors duration-300 {}",
                                                link_class(is_active()),
                                            )
                                        }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            go(section);
                                        }
                                    >
                                        {section.label()}
                                        <Show when=is_active>
                                            <div class="absolute bottom-0 left-1/2 -translate-x-1/2 w-1 h-1 rounded-full bg-amber" />
                                        </Show>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <a
                        href=Section::Contact.anchor()
                        class="hidden md:block relative group"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go(Section::Contact);
                        }
                    >
                        <span class="relative z-10 inline-flex items-center gap-2 px-5 py-2.5 font-outfit font-medium text-sm bg-gradient-to-r from-amber to-orange text-black rounded-full transition-all duration-300 group-hover:shadow-glow-amber">
                            "Let's Talk"
                        </span>
                        <div class="absolute inset-0 rounded-full bg-gradient-to-r from-amber to-orange opacity-0 group-hover:opacity-100 blur-md transition-opacity duration-300" />
                    </a>

                    <button
                        class="md:hidden relative z-50 p-2 text-accent-cream text-2xl"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                Either::Left(view! { <span class="block animate-rotate-in">"✕"</span> })
                            } else {
                                Either::Right(view! { <span class="block animate-fade-in">"☰"</span> })
                            }
                        }}
                    </button>
                </div>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <div class="fixed inset-0 z-40 md:hidden animate-fade-in">
                <div
                    class="absolute inset-0 bg-black/90 backdrop-blur-xl"
                    on:click=move |_| set_menu_open(false)
                />
                <div class="absolute right-0 top-0 h-full w-full max-w-sm bg-navy-dark/95 backdrop-blur-xl border-l border-amber/10 animate-slide-in-right">
                    <div class="flex flex-col justify-center h-full px-8">
                        <nav class="space-y-2">
                            {Section::ALL
                                .into_iter()
                                .enumerate()
                                .map(|(i, section)| {
                                    view! {
                                        <a
                                            href=section.anchor()
                                            class=move || {
                                                format!(
                                                    "block py-4 font-clash text-3xl font-semibold transition-colors duration-300 {}",
                                                    link_class(active.get() == section),
                                                )
                                            }
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                go(section);
                                            }
                                        >
                                            <span class="text-amber/50 text-lg font-mono mr-3">
                                                {format!("{:02}", i + 1)}
                                            </span>
                                            {section.label()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                        <a
                            href=Section::Contact.anchor()
                            class="mt-12 inline-flex items-center justify-center gap-2 px-8 py-4 font-outfit font-semibold text-lg bg-gradient-to-r from-amber to-orange text-black rounded-full"
                            on:click=move |ev| {
                                ev.prevent_default();
                                go(Section::Contact);
                            }
                        >
                            "Let's Connect"
                        </a>
                    </div>
                </div>
            </div>
        </Show>
    }
}
