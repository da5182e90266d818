use std::collections::BTreeSet;
use std::sync::{Arc, LazyLock, OnceLock};

use crate::portfolio::{Project, ProjectId, PORTFOLIO};

pub static PROJECT_CATALOG: LazyLock<Arc<ProjectCatalog>> =
    LazyLock::new(|| Arc::new(ProjectCatalog::new(PORTFOLIO.projects.clone())));

/// An immutable project list plus the category index derived from it.
///
/// The index is computed on first use and kept for the lifetime of the catalog.
/// Swapping the list means building a new catalog, so the index can never go
/// stale against its source.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Arc<[Project]>,
    categories: OnceLock<Vec<String>>,
}

impl ProjectCatalog {
    pub fn new(projects: impl Into<Arc<[Project]>>) -> Self {
        Self {
            projects: projects.into(),
            categories: OnceLock::new(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Distinct category labels across all projects, ascending.
    pub fn categories(&self) -> &[String] {
        self.categories.get_or_init(|| {
            self.projects
                .iter()
                .flat_map(|p| p.category.iter().cloned())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        })
    }

    /// Whether both catalogs were built over the same underlying list.
    #[cfg(test)]
    fn same_source(&self, other: &ProjectCatalog) -> bool {
        Arc::ptr_eq(&self.projects, &other.projects)
    }

    pub fn contains(&self, id: ProjectId) -> bool {
        self.projects.iter().any(|p| p.id == id)
    }

    /// Projects matching `filter`, in catalog order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => project.in_category(label),
        }
    }

    pub fn is_selected(&self, label: &str) -> bool {
        matches!(self, CategoryFilter::Only(l) if l == label)
    }
}

/// Which project card, if any, has its detail panel open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded(ProjectId),
}

impl Expansion {
    /// Header click on project `id`: open it, close it if already open, or
    /// switch straight over from whichever card was open.
    pub fn toggle(self, id: ProjectId) -> Self {
        if self.is_expanded(id) {
            Expansion::Collapsed
        } else {
            Expansion::Expanded(id)
        }
    }

    pub fn is_expanded(self, id: ProjectId) -> bool {
        self == Expansion::Expanded(id)
    }

    /// The expanded id, but only if that project is among `visible`.
    pub fn visible_in(self, visible: &[&Project]) -> Option<ProjectId> {
        visible
            .iter()
            .map(|p| p.id)
            .find(|id| self.is_expanded(*id))
    }
}

/// Filter and expansion state for one rendering of the project list.
#[derive(Debug, Clone)]
pub struct ProjectsView {
    catalog: Arc<ProjectCatalog>,
    filter: CategoryFilter,
    expansion: Expansion,
}

impl ProjectsView {
    pub fn new(catalog: Arc<ProjectCatalog>) -> Self {
        Self {
            catalog,
            filter: CategoryFilter::All,
            expansion: Expansion::Collapsed,
        }
    }

    pub fn categories(&self) -> &[String] {
        self.catalog.categories()
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    /// Expansion is left alone; a filtered-out card just stops rendering.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Ids outside the catalog collapse everything instead of failing.
    pub fn toggle_project(&mut self, id: ProjectId) {
        self.expansion = if self.catalog.contains(id) {
            self.expansion.toggle(id)
        } else {
            Expansion::Collapsed
        };
    }

    pub fn visible(&self) -> Vec<&Project> {
        self.catalog.filter(&self.filter)
    }

    pub fn expanded_visible(&self) -> Option<ProjectId> {
        self.expansion.visible_in(&self.visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, categories: &[&str]) -> Project {
        Project {
            id: ProjectId(id),
            title: format!("Project {id}"),
            client: None,
            category: categories.iter().map(|c| c.to_string()).collect(),
            description: String::new(),
            impact: String::new(),
            technologies: vec![],
            highlights: vec![],
        }
    }

    fn sample() -> Arc<ProjectCatalog> {
        Arc::new(ProjectCatalog::new(vec![
            project(1, &["Linux", "Automation"]),
            project(2, &["Kubernetes", "Security"]),
            project(3, &["Monitoring", "Logging"]),
            project(4, &["CI/CD", "Kubernetes"]),
            project(5, &["Terraform", "AWS"]),
        ]))
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_categories_sorted_and_unique() {
        let catalog = sample();
        assert_eq!(
            catalog.categories(),
            [
                "AWS",
                "Automation",
                "CI/CD",
                "Kubernetes",
                "Linux",
                "Logging",
                "Monitoring",
                "Security",
                "Terraform"
            ]
        );
    }

    #[test]
    fn test_categories_equal_union() {
        let catalog = sample();
        let union: BTreeSet<&String> = catalog
            .projects()
            .iter()
            .flat_map(|p| p.category.iter())
            .collect();
        let index: BTreeSet<&String> = catalog.categories().iter().collect();
        assert_eq!(union, index);
        assert_eq!(index.len(), catalog.categories().len());
    }

    #[test]
    fn test_categories_empty_catalog() {
        let catalog = ProjectCatalog::new(Vec::<Project>::new());
        assert!(catalog.categories().is_empty());
        assert!(catalog.filter(&CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_categories_memoized() {
        let catalog = sample();
        let first = catalog.categories().as_ptr();
        let second = catalog.categories().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_source() {
        let catalog = sample();
        let cloned = (*catalog).clone();
        assert!(catalog.same_source(&cloned));

        let rebuilt = ProjectCatalog::new(catalog.projects().to_vec());
        assert!(!catalog.same_source(&rebuilt));
        assert_eq!(catalog.categories(), rebuilt.categories());
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let catalog = sample();
        let all = catalog.filter(&CategoryFilter::All);
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_every_category_is_subset() {
        let catalog = sample();
        for label in catalog.categories() {
            let filter = CategoryFilter::Only(label.clone());
            let visible = catalog.filter(&filter);
            assert!(!visible.is_empty());
            assert!(visible.iter().all(|p| p.in_category(label)));
            let all_ids = ids(&catalog.filter(&CategoryFilter::All));
            let visible_ids = ids(&visible);
            // order is preserved
            let mut expected = all_ids.clone();
            expected.retain(|id| visible_ids.contains(id));
            assert_eq!(visible_ids, expected);
        }
    }

    #[test]
    fn test_filter_shared_category() {
        let catalog = sample();
        let visible = catalog.filter(&CategoryFilter::Only("Kubernetes".to_string()));
        assert_eq!(ids(&visible), vec![2, 4]);
    }

    #[test]
    fn test_filter_two_projects_scenario() {
        let catalog = ProjectCatalog::new(vec![project(1, &["Linux"]), project(2, &["Security"])]);
        let visible = catalog.filter(&CategoryFilter::Only("Security".to_string()));
        assert_eq!(ids(&visible), vec![2]);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let catalog = sample();
        let visible = catalog.filter(&CategoryFilter::Only("NonexistentCategory".to_string()));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let catalog = sample();
        let before = catalog.projects().to_vec();
        let _ = catalog.filter(&CategoryFilter::Only("Linux".to_string()));
        assert_eq!(catalog.projects(), before.as_slice());
    }

    #[test]
    fn test_is_selected() {
        let filter = CategoryFilter::Only("AWS".to_string());
        assert!(filter.is_selected("AWS"));
        assert!(!filter.is_selected("Linux"));
        assert!(!CategoryFilter::All.is_selected("AWS"));
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let state = Expansion::Collapsed.toggle(ProjectId(1));
        assert_eq!(state, Expansion::Expanded(ProjectId(1)));
        assert_eq!(state.toggle(ProjectId(1)), Expansion::Collapsed);
    }

    #[test]
    fn test_toggle_switches_directly() {
        let state = Expansion::Collapsed.toggle(ProjectId(1));
        let state = state.toggle(ProjectId(2));
        assert_eq!(state, Expansion::Expanded(ProjectId(2)));
        assert!(state.is_expanded(ProjectId(2)));
        assert!(!state.is_expanded(ProjectId(1)));
    }

    #[test]
    fn test_at_most_one_expanded() {
        let catalog = sample();
        let mut state = Expansion::Collapsed;
        for id in [1, 3, 3, 5, 2, 2, 4, 1] {
            state = state.toggle(ProjectId(id));
            let open = catalog
                .projects()
                .iter()
                .filter(|p| state.is_expanded(p.id))
                .count();
            assert!(open <= 1);
        }
    }

    #[test]
    fn test_view_initial_state() {
        let view = ProjectsView::new(sample());
        assert_eq!(view.filter(), &CategoryFilter::All);
        assert_eq!(view.expansion(), Expansion::Collapsed);
        assert_eq!(view.visible().len(), 5);
        assert_eq!(view.expanded_visible(), None);
    }

    #[test]
    fn test_view_expansion_survives_filter() {
        let mut view = ProjectsView::new(sample());
        view.toggle_project(ProjectId(1));
        assert_eq!(view.expanded_visible(), Some(ProjectId(1)));

        // filtered out: state kept, nothing rendered expanded
        view.select_category(CategoryFilter::Only("Security".to_string()));
        assert_eq!(view.expansion(), Expansion::Expanded(ProjectId(1)));
        assert_eq!(view.expanded_visible(), None);

        view.select_category(CategoryFilter::Only("Linux".to_string()));
        assert_eq!(view.expanded_visible(), Some(ProjectId(1)));

        view.select_category(CategoryFilter::All);
        assert_eq!(view.expanded_visible(), Some(ProjectId(1)));
    }

    #[test]
    fn test_view_unknown_id_collapses() {
        let mut view = ProjectsView::new(sample());
        view.toggle_project(ProjectId(2));
        view.toggle_project(ProjectId(99));
        assert_eq!(view.expansion(), Expansion::Collapsed);
    }

    #[test]
    fn test_global_catalog() {
        let catalog = &*PROJECT_CATALOG;
        assert_eq!(catalog.projects().len(), 5);
        assert!(catalog.categories().contains(&"Kubernetes".to_string()));
        assert!(catalog.same_source(&PROJECT_CATALOG));
    }
}
