use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::portfolio::PORTFOLIO;

#[component]
pub fn Experience() -> impl IntoView {
    let jobs = &PORTFOLIO.experience;
    let last = jobs.len().saturating_sub(1);
    view! {
        <section id="experience" class="py-20 px-4 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-4xl mx-auto">
                <SectionHeading text="Experience" />
                <div class="space-y-8">
                    {jobs
                        .iter()
                        .enumerate()
                        .map(|(idx, job)| {
                            view! {
                                <div
                                    class="relative slide-in-left"
                                    style=format!("animation-delay: {}ms", idx * 100)
                                >
                                    // timeline connector to the next entry
                                    {(idx < last)
                                        .then(|| {
                                            view! {
                                                <div class="absolute left-5 top-16 w-0.5 h-12 bg-gradient-to-b from-blue-500 to-transparent" />
                                            }
                                        })}
                                    <div class="flex gap-6">
                                        <div class="flex flex-col items-center">
                                            <div class="w-10 h-10 bg-gradient-to-r from-blue-600 to-cyan-600 rounded-full flex items-center justify-center text-white font-bold hover:scale-125 transition-transform">
                                                {idx + 1}
                                            </div>
                                        </div>
                                        <div class="bg-white dark:bg-gray-800 rounded-xl p-6 border border-gray-200 dark:border-gray-700 flex-1 hover:translate-x-2 transition-transform">
                                            <div class="flex flex-col md:flex-row md:justify-between md:items-start gap-2 mb-2">
                                                <div>
                                                    <h3 class="text-xl font-bold text-gray-900 dark:text-white">
                                                        {job.role.clone()}
                                                    </h3>
                                                    <p class="text-blue-600 dark:text-blue-400 font-semibold">
                                                        {job.company.clone()}
                                                    </p>
                                                </div>
                                                <span class="text-sm text-gray-600 dark:text-gray-400 whitespace-nowrap">
                                                    {job.duration.clone()}
                                                </span>
                                            </div>
                                            <p class="text-gray-600 dark:text-gray-300 mb-4">
                                                {job.description.clone()}
                                            </p>
                                            <ul class="space-y-2">
                                                {job
                                                    .responsibilities
                                                    .iter()
                                                    .map(|resp| {
                                                        view! {
                                                            <li class="text-gray-700 dark:text-gray-400 flex items-start gap-2">
                                                                <span class="text-blue-500 font-bold mt-1">"▸"</span>
                                                                <span>{resp.clone()}</span>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
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
