mod about;
mod contact;
mod effects;
mod footer;
mod hero;
mod navigation;
mod projects;
mod skills;
mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{OWNER_NAME, SITE_DESCRIPTION};
use about::AboutSection;
use contact::ContactSection;
use effects::{GradientBlobs, LoadingScreen};
use footer::Footer;
use hero::HeroSection;
use navigation::Navigation;
use projects::ProjectsSection;
use skills::SkillsSection;

pub use contact::send_message;

const NOISE_TEXTURE: &str = "background-image: url(\"data:image/svg+xml,%3Csvg viewBox='0 0 256 256' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noise'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.65' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noise)'/%3E%3C/svg%3E\");";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Outfit:wght@300;400;500;600;700&family=JetBrains+Mono:wght@400;500;600&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://api.fontshare.com/v2/css?f[]=clash-display@400,500,600,700&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-accent-cream antialiased">
                <div class="fixed inset-0 pointer-events-none z-50 opacity-[0.015]" style=NOISE_TEXTURE />
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta
            name="keywords"
            content="software engineer, developer, portfolio, web development, frontend, backend"
        />
        <Meta name="author" content=OWNER_NAME />
        <Meta property="og:title" content=format!("{OWNER_NAME} | Portfolio") />
        <Meta property="og:description" content=SITE_DESCRIPTION />
        <Meta property="og:type" content="website" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole single-page site: background layer, navigation, the five sections and the footer.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=OWNER_NAME />
        <LoadingScreen />
        <div class="fixed inset-0 z-0 pointer-events-none">
            <GradientBlobs />
        </div>
        <Navigation />
        <main class="relative z-10">
            <HeroSection />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <ContactSection />
        </main>
        <Footer />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    set_not_found_status();

    view! {
        <Title text="Page not found" />
        <main class="flex flex-col min-h-screen justify-center items-center gap-6 px-6 text-center">
            <span class="font-mono text-amber text-sm tracking-wider">"404 // NOT FOUND"</span>
            <h1 class="font-clash text-4xl md:text-6xl font-bold">
                "Nothing " <span class="text-gradient">"here"</span>
            </h1>
            <a
                href="/"
                class="px-6 py-3 rounded-full border-2 border-amber/30 text-amber font-outfit font-semibold hover:border-amber hover:bg-amber/10 transition-all duration-300"
            >
                "Back to the portfolio"
            </a>
        </main>
    }
}

#[cfg(feature = "ssr")]
fn set_not_found_status() {
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }
}
