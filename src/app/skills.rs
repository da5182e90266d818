use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::portfolio::PORTFOLIO;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading text="Skills & Expertise" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 stagger">
                    {PORTFOLIO
                        .skills
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="bg-white dark:bg-gray-800 rounded-xl p-6 border border-gray-200 dark:border-gray-700 hover:border-blue-400 dark:hover:border-blue-600 transition-all duration-300 section-content">
                                    <h3 class="font-bold text-lg text-gray-900 dark:text-white mb-4">
                                        {group.category.clone()}
                                    </h3>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .items
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-1 bg-gradient-to-r from-blue-500 to-cyan-500 text-white text-sm rounded-full font-medium hover:scale-105 transition-transform">
                                                        {skill.clone()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
