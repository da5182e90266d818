use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::portfolio::PORTFOLIO;

#[component]
pub fn About() -> impl IntoView {
    let portfolio = &*PORTFOLIO;
    view! {
        <section id="about" class="py-20 px-4 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-4xl mx-auto">
                <SectionHeading text="About Me" />
                <div class="bg-white dark:bg-gray-800 rounded-xl p-8 border border-gray-200 dark:border-gray-700 section-content">
                    <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed mb-6">
                        {portfolio.summary.clone()}
                    </p>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mt-8">
                        <div class="slide-in-left">
                            <h3 class="font-semibold text-gray-900 dark:text-white mb-4">
                                "Expertise"
                            </h3>
                            <ul class="space-y-2 text-gray-700 dark:text-gray-300">
                                {portfolio
                                    .expertise
                                    .iter()
                                    .map(|item| view! { <li>"✓ "{item.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div class="slide-in-right">
                            <h3 class="font-semibold text-gray-900 dark:text-white mb-4">
                                "Education & Certifications"
                            </h3>
                            <div class="space-y-4">
                                {portfolio
                                    .education
                                    .iter()
                                    .map(|edu| {
                                        view! {
                                            <div>
                                                <p class="font-medium text-gray-900 dark:text-white">
                                                    {edu.degree.clone()}
                                                </p>
                                                <p class="text-sm text-gray-600 dark:text-gray-400">
                                                    {format!("{} • {}", edu.institution, edu.year)}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                                <div class="pt-4 border-t border-gray-200 dark:border-gray-700">
                                    <p class="font-medium text-gray-900 dark:text-white mb-2">
                                        "Certifications:"
                                    </p>
                                    <ul class="space-y-1">
                                        {portfolio
                                            .certifications
                                            .iter()
                                            .map(|cert| {
                                                view! {
                                                    <li class="text-sm text-gray-600 dark:text-gray-400">
                                                        "• "{cert.clone()}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
