use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About, contact::Contact, experience::Experience, hero::Hero, projects::Projects,
    skills::Skills,
};

/// Every section lives on one page; the header links jump between them by anchor.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="DevOps Engineer & SRE" />
        <div class="page-content">
            <Hero />
            <About />
            <Skills />
            <Experience />
            <Projects />
            <Contact />
        </div>
    }
}

/// Shared heading for the anchored sections.
#[component]
pub fn SectionHeading(text: &'static str, #[prop(optional)] centered: bool) -> impl IntoView {
    let class = if centered {
        "text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-12 text-center section-content"
    } else {
        "text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-12 section-content"
    };
    view! { <h2 class=class>{text}</h2> }
}
