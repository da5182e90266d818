use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::header::NAV_ITEMS;
use super::icons::{GithubIcon, LinkedinIcon, MailIcon};
use crate::portfolio::PORTFOLIO;

const BUILD_TIME: &str = env!("BUILD_TIME");
const ICON_LINK: &str = "p-2 hover:bg-gray-800 rounded-lg transition-colors duration-300";

fn build_date() -> Option<String> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.format("%b %e, %Y").to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    let personal = &PORTFOLIO.personal;
    let year = Utc::now().year();

    view! {
        <footer class="bg-gray-900 dark:bg-gray-950 text-gray-300 border-t border-gray-800">
            <div class="max-w-6xl mx-auto px-4 py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-8">
                    <div class="section-content">
                        <h3 class="text-2xl font-bold text-white mb-2">{personal.name.clone()}</h3>
                        <p class="text-sm text-gray-400">{personal.role.clone()}</p>
                    </div>
                    <div class="section-content">
                        <h4 class="font-semibold text-white mb-4">"Quick Links"</h4>
                        <ul class="space-y-2 text-sm">
                            {NAV_ITEMS
                                .into_iter()
                                .filter(|(label, _)| *label != "Skills")
                                .map(|(label, href)| {
                                    view! {
                                        <li>
                                            <a
                                                href=href
                                                class="hover:text-white transition-colors duration-300"
                                            >
                                                {label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="section-content">
                        <h4 class="font-semibold text-white mb-4">"Connect"</h4>
                        <div class="flex gap-4">
                            <a
                                href=format!("mailto:{}", personal.email)
                                class=ICON_LINK
                                title="Email"
                                aria-label="Email"
                            >
                                <MailIcon class="w-5 h-5" />
                            </a>
                            <a
                                href=personal.linkedin.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class=ICON_LINK
                                title="LinkedIn"
                                aria-label="LinkedIn"
                            >
                                <LinkedinIcon class="w-5 h-5" />
                            </a>
                            <a
                                href=personal.github.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class=ICON_LINK
                                title="GitHub"
                                aria-label="GitHub"
                            >
                                <GithubIcon class="w-5 h-5" />
                            </a>
                        </div>
                    </div>
                </div>
                <div class="border-t border-gray-800 my-8" />
                <div class="flex flex-col md:flex-row justify-between items-center text-sm text-gray-500">
                    <p>{format!("© {year} {}. All rights reserved.", personal.name)}</p>
                    <p class="mt-4 md:mt-0">
                        "Built with Rust, Leptos & Axum"
                        {build_date().map(|d| format!(" · {d}"))}
                    </p>
                </div>
            </div>
        </footer>
    }
}
