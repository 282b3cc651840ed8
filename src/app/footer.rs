use chrono::Datelike;
use leptos::prelude::*;

use super::ui::SectionLink;
use crate::{
    content::{OWNER_INITIALS, OWNER_SHORT},
    page::Section,
};

const BUILD_TIME: &str = env!("BUILD_TIME");

fn scroll_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="relative py-6 border-t border-accent-cream/5" title=format!("Built {BUILD_TIME}")>
            <div class="absolute inset-0 bg-gradient-to-t from-navy-dark/50 to-transparent" />
            <div class="relative z-10 max-w-7xl mx-auto px-6 lg:px-8">
                <div class="flex flex-col md:flex-row items-center justify-between gap-6">
                    <div class="text-center md:text-left">
                        <SectionLink to=Section::Home class="font-clash text-2xl font-bold text-gradient">
                            {OWNER_INITIALS}
                            <span class="text-amber">"."</span>
                        </SectionLink>
                        <p class="mt-2 font-outfit text-sm text-accent-cream/40">
                            {format!("© {year} {OWNER_SHORT}. All rights reserved.")}
                        </p>
                    </div>

                    <div class="flex items-center gap-2 font-outfit text-md text-accent-cream/40">
                        <span>"Crafted with"</span>
                        <span class="text-amber animate-heartbeat">"♥"</span>
                        <span class="flex items-center gap-1.5">
                            "and lots of"
                            <img
                                src="/coffee-cup2.png"
                                width="25"
                                height="25"
                                alt="coffee cup"
                                class="inline-block"
                            />
                        </span>
                    </div>

                    <button
                        class="group flex items-center gap-2 px-4 py-2 rounded-full border border-accent-cream/10 text-accent-cream/60 hover:border-amber/30 hover:text-amber hover:scale-110 hover:-translate-y-1 active:scale-95 transition-all duration-300"
                        on:click=move |_| scroll_to_top()
                    >
                        <span class="font-mono text-xs">"Back to top"</span>
                        <span class="animate-float-fast">"↑"</span>
                    </button>
                </div>
            </div>
        </footer>
    }
}
