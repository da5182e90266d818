use leptos::prelude::*;

use crate::portfolio::PORTFOLIO;

#[component]
pub fn Avatar() -> impl IntoView {
    let personal = &PORTFOLIO.personal;
    view! {
        <div class="relative w-48 h-48 md:w-56 md:h-56 avatar-in">
            <img
                src=personal.photo.clone()
                alt=personal.name.clone()
                class="w-full h-full rounded-full object-cover border-4 border-blue-600 shadow-2xl"
            />
        </div>
    }
}

/// Pulsing availability pill shown above the name.
#[component]
pub fn AvailabilityBadge() -> impl IntoView {
    view! {
        <div class="inline-flex items-center px-4 py-2 rounded-full bg-blue-100 dark:bg-blue-900/30 border border-blue-200 dark:border-blue-800 section-content">
            <span class="w-2 h-2 bg-blue-600 rounded-full mr-2 animate-pulse" />
            <span class="text-sm font-medium text-blue-700 dark:text-blue-300">
                {PORTFOLIO.personal.availability.clone()}
            </span>
        </div>
    }
}
