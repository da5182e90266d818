use leptos::{either::Either, prelude::*};

use super::ThemeContext;
use crate::portfolio::PORTFOLIO;

pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let theme_ctx = expect_context::<ThemeContext>();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="fixed top-0 w-full bg-white/80 dark:bg-gray-900/80 backdrop-blur-xl border-b border-gray-200 dark:border-gray-800 z-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="font-bold text-xl text-blue-600 dark:text-blue-400">
                        {PORTFOLIO.personal.initials.clone()}
                    </a>
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <a
                                        href=href
                                        class="text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center space-x-4">
                        <button
                            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                            aria-label="Toggle color theme"
                            on:click=move |_| theme_ctx.toggle()
                        >
                            {move || {
                                if theme_ctx.theme.get().is_dark() {
                                    Either::Left(view! { <span class="text-yellow-500">"☀"</span> })
                                } else {
                                    Either::Right(view! { <span class="text-gray-700">"☾"</span> })
                                }
                            }}
                        </button>
                        <button
                            class="md:hidden p-2 rounded-lg bg-gray-100 dark:bg-gray-800"
                            aria-label="Toggle navigation menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden pb-4 border-t border-gray-200 dark:border-gray-800 expand-in">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <a
                                        href=href
                                        class="block py-2 text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400"
                                        on:click=move |_| set_menu_open(false)
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
