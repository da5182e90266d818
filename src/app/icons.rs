use leptos::prelude::*;

// Stroke icons drawn inline so they render without any icon font.

#[component]
fn StrokeIcon(class: &'static str, children: Children) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn MailIcon(class: &'static str) -> impl IntoView {
    view! {
        <StrokeIcon class>
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </StrokeIcon>
    }
}

#[component]
pub fn MapPinIcon(class: &'static str) -> impl IntoView {
    view! {
        <StrokeIcon class>
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
            <circle cx="12" cy="10" r="3" />
        </StrokeIcon>
    }
}

#[component]
pub fn DownloadIcon(class: &'static str) -> impl IntoView {
    view! {
        <StrokeIcon class>
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
            <polyline points="7 10 12 15 17 10" />
            <line x1="12" x2="12" y1="15" y2="3" />
        </StrokeIcon>
    }
}

#[component]
pub fn LinkedinIcon(class: &'static str) -> impl IntoView {
    view! {
        <StrokeIcon class>
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
            <rect width="4" height="12" x="2" y="9" />
            <circle cx="4" cy="4" r="2" />
        </StrokeIcon>
    }
}

#[component]
pub fn GithubIcon(class: &'static str) -> impl IntoView {
    view! {
        <StrokeIcon class>
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        </StrokeIcon>
    }
}
