//! Filter Composition Module
//!
//! Combines the three independent filter dimensions - category, skill
//! level and a debounced free-text query - into one derived result set.
//! The derivation policy is deliberate and fixed: an active search query
//! replaces the category scope entirely (the two are alternative base
//! sets, never intersected), and the level filter is applied last on top
//! of whichever base set won.
//!
//! The debounce clock is passed in by the caller (`Instant`), so the main
//! loop drives it with real time while tests drive it with synthetic
//! instants.

use std::time::{Duration, Instant};

use crate::catalog::{Catalog, SkillLevel, Snippet};

/// Quiet period before a typed query takes effect.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Named(name) => Some(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(SkillLevel),
}

impl LevelFilter {
    pub fn admits(&self, level: SkillLevel) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(only) => *only == level,
        }
    }

    /// All → Beginner → Intermediate → Advanced → All.
    pub fn cycle(self) -> Self {
        match self {
            LevelFilter::All => LevelFilter::Only(SkillLevel::Beginner),
            LevelFilter::Only(SkillLevel::Beginner) => LevelFilter::Only(SkillLevel::Intermediate),
            LevelFilter::Only(SkillLevel::Intermediate) => LevelFilter::Only(SkillLevel::Advanced),
            LevelFilter::Only(SkillLevel::Advanced) => LevelFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LevelFilter::All => "all",
            LevelFilter::Only(level) => level.display_name(),
        }
    }
}

#[derive(Debug)]
struct PendingQuery {
    value: String,
    due: Instant,
}

/// A free-text query under a trailing-edge debounce discipline.
///
/// `raw` tracks every keystroke for input echo; `effective` is what the
/// filters actually see, and only advances when a pending value's deadline
/// passes without a superseding keystroke. The pending timer is a scoped
/// resource: every exit path (a newer keystroke, `flush`, `cancel_pending`,
/// `clear`) resolves or discards it, so a stale value can never apply late.
#[derive(Debug, Default)]
pub struct DebouncedQuery {
    raw: String,
    effective: String,
    pending: Option<PendingQuery>,
}

impl DebouncedQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn effective(&self) -> &str {
        &self.effective
    }

    /// True when the effective query would drive a search.
    pub fn is_active(&self) -> bool {
        !self.effective.trim().is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, for poll-timeout scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due)
    }

    /// Records a keystroke: the raw text updates immediately, and the
    /// effective update is (re)scheduled one quiet period from `now`,
    /// replacing any previously pending value.
    pub fn set(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.raw = text.clone();
        self.pending = Some(PendingQuery {
            value: text,
            due: now + SEARCH_DEBOUNCE,
        });
    }

    /// Applies the pending value if its quiet period has elapsed. Returns
    /// true when the effective query actually changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.pending.as_ref().is_none_or(|pending| now < pending.due) {
            return false;
        }
        self.flush()
    }

    /// Applies the pending value immediately (Enter in the search box).
    pub fn flush(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                let changed = self.effective != pending.value;
                self.effective = pending.value;
                changed
            }
            None => false,
        }
    }

    /// Discards the pending value without applying it. Called on every
    /// teardown path so an abandoned search session cannot apply late.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Resets the query entirely: raw, effective and pending.
    pub fn clear(&mut self) {
        self.raw.clear();
        self.effective.clear();
        self.pending = None;
    }
}

/// External slot the category filter mirrors into, so the current scope
/// can be restored next session. The session-state file implements this;
/// `NullLink` is for tests and one-shot CLI use.
pub trait CategoryLink {
    /// Read once at filter construction.
    fn read(&self) -> Option<String>;
    /// Written on every category change; `None` means "all".
    fn write(&mut self, category: Option<&str>);
}

pub struct NullLink;

impl CategoryLink for NullLink {
    fn read(&self) -> Option<String> {
        None
    }

    fn write(&mut self, _category: Option<&str>) {}
}

/// The full three-dimensional filter over the whole catalog.
#[derive(Debug, Default)]
pub struct LibraryFilter {
    category: CategoryFilter,
    level: LevelFilter,
    pub query: DebouncedQuery,
}

impl LibraryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter seeded from the link: if the link holds the name of
    /// a category that actually exists, it becomes the initial scope. The
    /// link is read exactly once, here.
    pub fn restore(link: &dyn CategoryLink, catalog: &Catalog) -> Self {
        let category = match link.read() {
            Some(name) if catalog.is_category(&name) => CategoryFilter::Named(name),
            _ => CategoryFilter::All,
        };

        Self {
            category,
            ..Self::default()
        }
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Changes the category scope and mirrors the new value into the link.
    pub fn set_category(&mut self, category: CategoryFilter, link: &mut dyn CategoryLink) {
        link.write(category.name());
        self.category = category;
    }

    pub fn set_level(&mut self, level: LevelFilter) {
        self.level = level;
    }

    pub fn cycle_level(&mut self) {
        self.level = self.level.cycle();
    }

    /// Derives the result set. The order of the rules is the contract:
    ///
    /// 1. an active (debounced, non-blank) query searches the entire
    ///    collection - the category scope is bypassed, not intersected;
    /// 2. otherwise a named category scopes the base set;
    /// 3. otherwise the base set is everything;
    /// 4. the level filter always applies last, to whichever base won.
    pub fn results(&self, catalog: &Catalog) -> Vec<Snippet> {
        let base: Vec<Snippet> = if self.query.is_active() {
            catalog.search(self.query.effective())
        } else if let CategoryFilter::Named(name) = &self.category {
            catalog.by_category(name).to_vec()
        } else {
            catalog.all().to_vec()
        };

        match self.level {
            LevelFilter::All => base,
            LevelFilter::Only(level) => base
                .into_iter()
                .filter(|snippet| snippet.level == level)
                .collect(),
        }
    }
}

/// The two-dimensional variant for a pre-scoped candidate list (the
/// favorites page): search plus level, no category dimension.
#[derive(Debug, Default)]
pub struct ScopedFilter {
    level: LevelFilter,
    pub query: DebouncedQuery,
}

impl ScopedFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn cycle_level(&mut self) {
        self.level = self.level.cycle();
    }

    pub fn results(&self, pool: &[Snippet]) -> Vec<Snippet> {
        let needle = self.query.effective().trim().to_lowercase();

        pool.iter()
            .filter(|snippet| needle.is_empty() || snippet.matches(&needle))
            .filter(|snippet| self.level.admits(snippet.level))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::content::Source;
    use crate::catalog::SnippetLanguage;

    const REACT: &[Snippet] = &[
        Snippet {
            id: "a",
            title: "Snippet A",
            description: "first react snippet",
            code: "",
            language: SnippetLanguage::Jsx,
            level: SkillLevel::Beginner,
            tags: &["react"],
            related: &[],
            featured_note: None,
        },
        Snippet {
            id: "b",
            title: "Snippet B",
            description: "second react snippet",
            code: "",
            language: SnippetLanguage::Jsx,
            level: SkillLevel::Intermediate,
            tags: &["react"],
            related: &[],
            featured_note: None,
        },
    ];

    const TYPESCRIPT: &[Snippet] = &[Snippet {
        id: "c",
        title: "Snippet C",
        description: "a typescript snippet",
        code: "",
        language: SnippetLanguage::Ts,
        level: SkillLevel::Advanced,
        tags: &["typescript"],
        related: &[],
        featured_note: None,
    }];

    fn fixture() -> Catalog {
        Catalog::from_sources(&[
            Source {
                category: "react",
                snippets: REACT,
            },
            Source {
                category: "typescript",
                snippets: TYPESCRIPT,
            },
        ])
    }

    fn ids(results: &[Snippet]) -> Vec<&'static str> {
        results.iter().map(|snippet| snippet.id).collect()
    }

    #[derive(Default)]
    struct RecordingLink {
        stored: Option<String>,
        writes: Vec<Option<String>>,
    }

    impl CategoryLink for RecordingLink {
        fn read(&self) -> Option<String> {
            self.stored.clone()
        }

        fn write(&mut self, category: Option<&str>) {
            self.stored = category.map(str::to_owned);
            self.writes.push(self.stored.clone());
        }
    }

    #[test]
    fn category_scopes_the_base_set() {
        let catalog = fixture();
        let mut link = NullLink;
        let mut filter = LibraryFilter::new();

        filter.set_category(CategoryFilter::Named("react".into()), &mut link);
        assert_eq!(ids(&filter.results(&catalog)), vec!["a", "b"]);
    }

    #[test]
    fn level_intersects_on_top_of_category() {
        let catalog = fixture();
        let mut link = NullLink;
        let mut filter = LibraryFilter::new();

        filter.set_category(CategoryFilter::Named("react".into()), &mut link);
        filter.set_level(LevelFilter::Only(SkillLevel::Beginner));
        assert_eq!(ids(&filter.results(&catalog)), vec!["a"]);
    }

    #[test]
    fn search_overrides_category() {
        let catalog = fixture();
        let mut link = NullLink;
        let mut filter = LibraryFilter::new();
        let start = Instant::now();

        // Category is react, but an applied search for typescript wins.
        filter.set_category(CategoryFilter::Named("react".into()), &mut link);
        filter.query.set("typescript", start);
        assert!(filter.query.poll(start + SEARCH_DEBOUNCE));
        assert_eq!(ids(&filter.results(&catalog)), vec!["c"]);

        // Clearing search and category yields everything again.
        filter.query.clear();
        filter.set_category(CategoryFilter::All, &mut link);
        assert_eq!(ids(&filter.results(&catalog)), vec!["a", "b", "c"]);
    }

    #[test]
    fn level_applies_on_top_of_search_too() {
        let catalog = fixture();
        let mut filter = LibraryFilter::new();
        let start = Instant::now();

        filter.query.set("snippet", start);
        filter.query.flush();
        filter.set_level(LevelFilter::Only(SkillLevel::Intermediate));
        assert_eq!(ids(&filter.results(&catalog)), vec!["b"]);
    }

    #[test]
    fn blank_effective_query_does_not_search() {
        let catalog = fixture();
        let mut link = NullLink;
        let mut filter = LibraryFilter::new();
        let start = Instant::now();

        filter.set_category(CategoryFilter::Named("typescript".into()), &mut link);
        filter.query.set("   ", start);
        filter.query.flush();

        // Whitespace is not an active query; the category still scopes.
        assert_eq!(ids(&filter.results(&catalog)), vec!["c"]);
    }

    #[test]
    fn debounce_skips_superseded_values() {
        let mut query = DebouncedQuery::new();
        let t0 = Instant::now();

        query.set("ty", t0);
        assert_eq!(query.raw(), "ty");
        assert_eq!(query.effective(), "");

        // Second keystroke 150ms in, before the first deadline.
        query.set("typescript", t0 + Duration::from_millis(150));

        // At the first value's would-be deadline nothing applies.
        assert!(!query.poll(t0 + Duration::from_millis(200)));
        assert_eq!(query.effective(), "");

        // Only the second value ever lands, at its own deadline.
        assert!(query.poll(t0 + Duration::from_millis(350)));
        assert_eq!(query.effective(), "typescript");
    }

    #[test]
    fn cancel_discards_a_pending_update() {
        let mut query = DebouncedQuery::new();
        let t0 = Instant::now();

        query.set("abandoned", t0);
        query.cancel_pending();

        assert!(!query.poll(t0 + Duration::from_secs(10)));
        assert_eq!(query.effective(), "");
        // Raw text is still there for the input echo.
        assert_eq!(query.raw(), "abandoned");
    }

    #[test]
    fn poll_of_identical_value_reports_no_change() {
        let mut query = DebouncedQuery::new();
        let t0 = Instant::now();

        query.set("same", t0);
        assert!(query.poll(t0 + SEARCH_DEBOUNCE));
        query.set("same", t0 + Duration::from_secs(1));
        assert!(!query.poll(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn restore_seeds_only_valid_categories() {
        let catalog = fixture();

        let link = RecordingLink {
            stored: Some("react".into()),
            writes: Vec::new(),
        };
        let filter = LibraryFilter::restore(&link, &catalog);
        assert_eq!(filter.category(), &CategoryFilter::Named("react".into()));

        let stale = RecordingLink {
            stored: Some("vanished".into()),
            writes: Vec::new(),
        };
        let filter = LibraryFilter::restore(&stale, &catalog);
        assert_eq!(filter.category(), &CategoryFilter::All);
    }

    #[test]
    fn category_changes_mirror_into_the_link() {
        let catalog = fixture();
        let mut link = RecordingLink::default();
        let mut filter = LibraryFilter::restore(&link, &catalog);

        filter.set_category(CategoryFilter::Named("react".into()), &mut link);
        filter.set_category(CategoryFilter::All, &mut link);

        assert_eq!(link.writes, vec![Some("react".to_string()), None]);
    }

    #[test]
    fn scoped_filter_searches_and_levels_a_fixed_pool() {
        let catalog = fixture();
        let pool = catalog.all().to_vec();
        let mut scoped = ScopedFilter::new();
        let start = Instant::now();

        assert_eq!(ids(&scoped.results(&pool)), vec!["a", "b", "c"]);

        scoped.query.set("react", start);
        scoped.query.flush();
        assert_eq!(ids(&scoped.results(&pool)), vec!["a", "b"]);

        scoped.cycle_level(); // Beginner
        assert_eq!(ids(&scoped.results(&pool)), vec!["a"]);
    }

    #[test]
    fn results_are_idempotent() {
        let catalog = fixture();
        let mut filter = LibraryFilter::new();
        filter.query.set("snippet", Instant::now());
        filter.query.flush();

        assert_eq!(filter.results(&catalog), filter.results(&catalog));
    }
}
