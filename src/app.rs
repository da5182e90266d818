mod about;
mod avatar;
mod button;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod homepage;
mod icons;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::{portfolio::PORTFOLIO, theme::Theme};

use footer::Footer;
use header::Header;
use homepage::HomePage;

/// Current colour scheme, shared with any component that needs to read or flip it.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggle();
        log::debug!("theme -> {next:?}");
        self.set_theme.set(next);
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let portfolio = &*PORTFOLIO;
    let description = format!(
        "Portfolio of {} - {}",
        portfolio.personal.name, portfolio.personal.role
    );
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <meta
                    name="keywords"
                    content="DevOps, SRE, Linux, Kubernetes, AWS, Terraform, Docker, CI/CD, Infrastructure"
                />
                <meta name="author" content=portfolio.personal.name.clone() />
                <meta name="robots" content="index, follow" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };
    provide_context(ThemeContext { theme, set_theme });

    let name = PORTFOLIO.personal.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} | {title}") />
        <Meta property="og:type" content="website" />

        <div class=move || theme.get().class()>
            <div class="min-h-screen bg-white dark:bg-gray-950 text-gray-900 dark:text-white transition-colors duration-300">
                <Router>
                    <Header />
                    <main>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                    <Footer />
                </Router>
            </div>
        </div>
    }
}
