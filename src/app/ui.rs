use leptos::{either::Either, prelude::*};

use super::effects::Reveal;
use crate::{content::Icon, page::Section};

/// Smoothly scrolls the section into view without touching the URL or history.
pub fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element with id {}", section.id());
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// In-page anchor that scrolls to `to` instead of jumping.
#[component]
pub fn SectionLink(
    to: Section,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=to.anchor()
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to_section(to);
            }
        >
            {children()}
        </a>
    }
}

#[component]
pub fn SectionHeader(
    section: Section,
    title: &'static str,
    highlight: &'static str,
    #[prop(optional)] blurb: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-20">
            <span class="font-mono text-amber text-sm tracking-wider">{section.eyebrow()}</span>
            <h2 class="font-clash text-4xl md:text-6xl font-bold mt-4 text-accent-cream">
                {title}
                " "
                <span class="text-gradient">{highlight}</span>
            </h2>
            {blurb
                .map(|b| {
                    view! {
                        <p class="mt-6 font-outfit text-lg text-accent-cream/60 max-w-2xl mx-auto">
                            {b}
                        </p>
                    }
                })}
        </Reveal>
    }
}

#[component]
pub fn IconView(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    match icon {
        Icon::Devicon(name) => Either::Left(view! { <i class=format!("{name} {class}") /> }),
        Icon::Glyph(glyph) => Either::Right(
            view! {
                <span class=format!("inline-block leading-none {class}") aria-hidden="true">
                    {glyph}
                </span>
            },
        ),
    }
}
