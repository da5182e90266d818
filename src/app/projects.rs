use leptos::{ev::MouseEvent, prelude::*};

use super::homepage::SectionHeading;
use crate::portfolio::{Project, ProjectId};
use crate::projects::{CategoryFilter, ProjectsView, PROJECT_CATALOG};

const CHIP_ACTIVE: &str = "px-4 py-2 rounded-full font-medium transition-all duration-300 bg-blue-600 text-white";
const CHIP_IDLE: &str = "px-4 py-2 rounded-full font-medium transition-all duration-300 bg-gray-200 dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-300 dark:hover:bg-gray-700";

#[component]
pub fn Projects() -> impl IntoView {
    let state = RwSignal::new(ProjectsView::new(PROJECT_CATALOG.clone()));
    // the catalog never changes under this view, so its index is read once
    let categories = state.with_untracked(|s| s.categories().to_vec());

    let visible = Memo::new(move |_| {
        state.with(|s| s.visible().into_iter().cloned().collect::<Vec<Project>>())
    });
    let expanded = Memo::new(move |_| state.with(|s| s.expanded_visible()));

    let select = move |filter: CategoryFilter| {
        log::debug!("project filter -> {filter:?}");
        state.update(|s| s.select_category(filter));
    };

    view! {
        <section id="projects" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading text="Projects & Case Studies" />
                <div class="flex flex-wrap gap-3 mb-12 section-content">
                    <button
                        class=move || {
                            if state.with(|s| *s.filter() == CategoryFilter::All) {
                                CHIP_ACTIVE
                            } else {
                                CHIP_IDLE
                            }
                        }
                        on:click=move |_| select(CategoryFilter::All)
                    >
                        "All Projects"
                    </button>
                    {categories
                        .into_iter()
                        .map(|label| {
                            let chip = label.clone();
                            let is_selected = move || state.with(|s| s.filter().is_selected(&chip));
                            let target = label.clone();
                            view! {
                                <button
                                    class=move || if is_selected() { CHIP_ACTIVE } else { CHIP_IDLE }
                                    on:click=move |_| select(CategoryFilter::Only(target.clone()))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 gap-6 stagger">
                    <For
                        each=move || visible.get()
                        key=|project| project.id
                        children=move |project| {
                            view! { <ProjectCard project state expanded /> }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    state: RwSignal<ProjectsView>,
    expanded: Memo<Option<ProjectId>>,
) -> impl IntoView {
    let id = project.id;
    let is_open = move || expanded.get() == Some(id);
    let toggle = move |_: MouseEvent| {
        state.update(|s| s.toggle_project(id));
        log::debug!("project expansion -> {:?}", state.with_untracked(|s| s.expansion()));
    };

    let detail_data = project.clone();
    let details = move || {
        is_open().then(|| {
            let p = detail_data.clone();
            view! {
                <div class="border-t border-gray-200 dark:border-gray-700 px-6 py-4 bg-gray-50 dark:bg-gray-700/30 expand-in">
                    <div class="space-y-4">
                        <div>
                            <h4 class="font-semibold text-gray-900 dark:text-white mb-2">"Impact"</h4>
                            <p class="text-gray-700 dark:text-gray-300">{p.impact}</p>
                        </div>
                        <div>
                            <h4 class="font-semibold text-gray-900 dark:text-white mb-2">
                                "Key Highlights"
                            </h4>
                            <ul class="space-y-2">
                                {p
                                    .highlights
                                    .into_iter()
                                    .map(|highlight| {
                                        view! {
                                            <li class="text-gray-700 dark:text-gray-300 flex items-start gap-2">
                                                <span class="text-blue-500 font-bold mt-1">"▸"</span>
                                                <span>{highlight}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h4 class="font-semibold text-gray-900 dark:text-white mb-2">
                                "Technologies"
                            </h4>
                            <div class="flex flex-wrap gap-2">
                                {p
                                    .technologies
                                    .into_iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="px-3 py-1 bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300 text-sm rounded-full font-medium">
                                                {tech}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 overflow-hidden hover:border-blue-400 dark:hover:border-blue-600 transition-all duration-300 section-content">
            <button
                class="w-full p-6 text-left hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors duration-300"
                aria-expanded=move || is_open().to_string()
                on:click=toggle
            >
                <div class="flex items-start justify-between gap-4">
                    <div class="flex-1">
                        <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">
                            {project.title}
                        </h3>
                        {project
                            .client
                            .map(|client| {
                                view! {
                                    <p class="text-blue-600 dark:text-blue-400 font-semibold mb-2">
                                        {client}
                                    </p>
                                }
                            })}
                        <p class="text-gray-700 dark:text-gray-300 mb-3">{project.description}</p>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .category
                                .into_iter()
                                .map(|cat| {
                                    view! {
                                        <span class="px-2 py-1 bg-gray-200 dark:bg-gray-700 text-xs font-medium text-gray-700 dark:text-gray-300 rounded">
                                            {cat}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <span class=move || {
                        if is_open() {
                            "text-blue-600 flex-shrink-0 rotate-180 transition-transform"
                        } else {
                            "text-gray-600 flex-shrink-0 transition-transform"
                        }
                    }>"⌄"</span>
                </div>
            </button>
            {details}
        </div>
    }
}
