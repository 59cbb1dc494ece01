// End-to-end filter pipeline over the real bundled catalog: category
// scoping, level intersection, debounced search and the favorites view,
// composed the way the TUI drives them.

use std::time::{Duration, Instant};

use anyhow::Result;

use snipdex::catalog::Catalog;
use snipdex::favorites::FavoriteSet;
use snipdex::filters::{
    CategoryFilter, CategoryLink, LevelFilter, LibraryFilter, NullLink, ScopedFilter,
    SEARCH_DEBOUNCE,
};

struct MemoryLink(Option<String>);

impl CategoryLink for MemoryLink {
    fn read(&self) -> Option<String> {
        self.0.clone()
    }

    fn write(&mut self, category: Option<&str>) {
        self.0 = category.map(str::to_owned);
    }
}

#[test]
fn full_pipeline_over_bundled_content() -> Result<()> {
    let catalog = Catalog::load();
    let mut link = MemoryLink(None);
    let mut filter = LibraryFilter::restore(&link, &catalog);
    let start = Instant::now();

    // Unfiltered: everything, in catalog order.
    assert_eq!(filter.results(&catalog), catalog.all().to_vec());

    // Category scope.
    filter.set_category(CategoryFilter::Named("css".into()), &mut link);
    let css = filter.results(&catalog);
    assert!(!css.is_empty());
    assert_eq!(css, catalog.by_category("css").to_vec());
    assert_eq!(link.0.as_deref(), Some("css"));

    // Level narrows the category scope.
    filter.set_level(LevelFilter::Only(snipdex::catalog::SkillLevel::Beginner));
    for snippet in filter.results(&catalog) {
        assert_eq!(snippet.level, snipdex::catalog::SkillLevel::Beginner);
    }

    // A debounced search bypasses the category scope entirely.
    filter.set_level(LevelFilter::All);
    filter.query.set("debounce", start);
    assert!(filter.results(&catalog).iter().all(|s| {
        catalog.by_category("css").contains(s)
    }), "pending query must not affect results yet");

    filter.query.poll(start + SEARCH_DEBOUNCE);
    let hits = filter.results(&catalog);
    assert!(!hits.is_empty());
    assert!(
        hits.iter().any(|snippet| snippet.id == "js-debounce"),
        "search must reach outside the css category"
    );

    // Clearing everything restores the full collection.
    filter.query.clear();
    filter.set_category(CategoryFilter::All, &mut link);
    assert_eq!(filter.results(&catalog).len(), catalog.all().len());
    assert_eq!(link.0, None);

    Ok(())
}

#[test]
fn session_category_survives_a_restart() -> Result<()> {
    let catalog = Catalog::load();
    let mut link = MemoryLink(None);

    {
        let mut filter = LibraryFilter::restore(&link, &catalog);
        filter.set_category(CategoryFilter::Named("react".into()), &mut link);
    }

    // A fresh filter seeded from the same link lands on the same scope.
    let restored = LibraryFilter::restore(&link, &catalog);
    assert_eq!(
        restored.category(),
        &CategoryFilter::Named("react".to_string())
    );
    Ok(())
}

#[test]
fn superseded_keystroke_never_applies() -> Result<()> {
    let catalog = Catalog::load();
    let mut filter = LibraryFilter::restore(&NullLink, &catalog);
    let t0 = Instant::now();

    filter.query.set("grid", t0);
    filter.query.set("dialog", t0 + Duration::from_millis(150));

    // The first value's deadline passes without effect.
    filter.query.poll(t0 + Duration::from_millis(200));
    assert_eq!(filter.results(&catalog).len(), catalog.all().len());

    // The second value lands at its own deadline.
    filter.query.poll(t0 + Duration::from_millis(350));
    let hits = filter.results(&catalog);
    assert!(hits.iter().any(|snippet| snippet.id == "html-dialog-element"));
    assert!(hits.iter().all(|snippet| snippet.id != "css-grid-auto-fit"));
    Ok(())
}

#[test]
fn favorites_view_is_scoped_filtering_only() -> Result<()> {
    let catalog = Catalog::load();
    let mut favorites = FavoriteSet::new();
    favorites.toggle("react-fetch-hook");
    favorites.toggle("css-container-queries");
    favorites.toggle("removed-in-some-release");

    let pool = favorites.resolve(&catalog);
    assert_eq!(pool.len(), 2, "dangling ids drop out silently");

    let mut scoped = ScopedFilter::new();
    assert_eq!(scoped.results(&pool).len(), 2);

    scoped.query.set("container", Instant::now());
    scoped.query.flush();
    let hits = scoped.results(&pool);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "css-container-queries");
    Ok(())
}

#[test]
fn stats_remain_consistent_with_queries() -> Result<()> {
    let catalog = Catalog::load();
    let stats = catalog.stats();

    assert_eq!(stats.total, catalog.all().len());
    assert_eq!(stats.categories, catalog.categories().len());
    assert_eq!(
        stats.by_category.iter().map(|c| c.count).sum::<usize>(),
        stats.total
    );
    assert_eq!(stats.by_level.total(), stats.total);

    // Category names in stats follow discovery order.
    let from_stats: Vec<_> = stats.by_category.iter().map(|c| c.category).collect();
    let from_catalog: Vec<_> = catalog.category_names().collect();
    assert_eq!(from_stats, from_catalog);
    Ok(())
}
