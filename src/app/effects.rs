use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::{content::LOADER_GLYPH, motion::delay_css};

/// Fades and slides its children in the first time they enter the viewport.
///
/// `from` holds the hidden-state transform classes; the visible state always
/// resets translation and scale. Once revealed the content stays put.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] delay: Duration,
    #[prop(default = "translate-y-8")] from: &'static str,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_revealed(true);
        }
    });

    let class = move || {
        let state = if revealed.get() {
            "opacity-100 translate-x-0 translate-y-0 scale-100 rotate-0"
        } else {
            from
        };
        let hidden = if revealed.get() { "" } else { "opacity-0" };
        format!("transition-all duration-700 ease-out {class} {state} {hidden}")
    };

    view! {
        <div node_ref=el class=class style=format!("transition-delay: {}", delay_css(delay))>
            {children()}
        </div>
    }
}

#[component]
pub fn GradientBlobs() -> impl IntoView {
    view! {
        <div class="absolute -top-32 -left-32 w-[32rem] h-[32rem] rounded-full bg-gradient-to-br from-amber/20 to-orange/5 blur-3xl animate-blob" />
        <div
            class="absolute top-1/3 -right-40 w-[28rem] h-[28rem] rounded-full bg-gradient-to-br from-accent-teal/15 to-accent-cyan/5 blur-3xl animate-blob"
            style="animation-delay: 2s"
        />
        <div
            class="absolute -bottom-40 left-1/4 w-[36rem] h-[36rem] rounded-full bg-gradient-to-br from-navy-light/30 to-transparent blur-3xl animate-blob"
            style="animation-delay: 4s"
        />
    }
}

/// Full-screen logo spinner shown until the page hydrates.
///
/// The CSS fade-out also runs without JS so server-rendered visitors are never stuck behind it.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let (hydrated, set_hydrated) = signal(false);
    Effect::new(move |_| set_hydrated(true));

    view! {
        <Show when=move || !hydrated.get()>
            <div class="fixed inset-0 z-[200] flex items-center justify-center bg-black animate-loader-out pointer-events-none">
                <div class="relative">
                    <div class="relative animate-rotate-in">
                        <span class="font-clash text-6xl font-bold text-gradient">
                            {LOADER_GLYPH}
                            <span class="text-amber">"."</span>
                        </span>
                    </div>
                    <div class="absolute -inset-8 border-2 border-amber/20 rounded-full animate-spin-slow" />
                    <div class="absolute -bottom-12 left-1/2 -translate-x-1/2 w-32 h-1 bg-navy rounded-full overflow-hidden">
                        <div class="h-full bg-gradient-to-r from-amber to-orange rounded-full animate-loading-bar" />
                    </div>
                </div>
            </div>
        </Show>
    }
}
