use leptos::prelude::*;

use super::avatar::{Avatar, AvailabilityBadge};
use super::button::{button_class, Size, Variant};
use super::icons::DownloadIcon;
use crate::portfolio::PORTFOLIO;

#[component]
pub fn Hero() -> impl IntoView {
    let portfolio = &*PORTFOLIO;
    let personal = &portfolio.personal;
    let resume = &portfolio.resume;

    view! {
        <section class="min-h-screen flex items-center justify-center pt-16 px-4">
            <div class="max-w-4xl mx-auto text-center space-y-8">
                <div class="flex justify-center">
                    <Avatar />
                </div>
                <AvailabilityBadge />
                <h1 class="text-5xl md:text-7xl font-bold text-gray-900 dark:text-white leading-tight section-content">
                    {personal.name.clone()}
                </h1>
                <h2 class="text-2xl md:text-4xl font-semibold text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-cyan-600 section-content">
                    {personal.role.clone()}
                </h2>
                <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto section-content">
                    {portfolio.summary.clone()}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center section-content">
                    <a
                        href=resume.path.clone()
                        download=resume.filename.clone()
                        class=button_class(Variant::Primary, Size::Lg, "flex items-center gap-2")
                    >
                        <DownloadIcon class="w-5 h-5" />
                        "Download Resume"
                    </a>
                    <a
                        href="#contact"
                        class=button_class(Variant::Outline, Size::Lg, "flex items-center gap-2")
                    >
                        "Get In Touch"
                        <span aria-hidden="true">"→"</span>
                    </a>
                </div>
                <div class="flex flex-col sm:flex-row justify-center items-center gap-6 text-sm text-gray-600 dark:text-gray-400 pt-4 section-content">
                    <a
                        href=format!("mailto:{}", personal.email)
                        class="hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                    >
                        {personal.email.clone()}
                    </a>
                    <span>"•"</span>
                    <span>{personal.location.clone()}</span>
                    <span>"•"</span>
                    <a
                        href=personal.linkedin.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                    >
                        "LinkedIn"
                    </a>
                </div>
            </div>
            <div class="fixed bottom-8 left-1/2 -translate-x-1/2 text-gray-600 dark:text-gray-400 animate-bounce">
                <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M19 14l-7 7m0 0l-7-7m7 7V3"
                    />
                </svg>
            </div>
        </section>
    }
}
