//! Snippet Catalog Module
//!
//! The catalog is the read-only heart of snipdex: it aggregates every
//! statically authored content source into one canonical, category-grouped
//! collection and answers all queries against it. Content is compiled into
//! the binary; nothing here touches the filesystem or mutates after load.
//!
//! A `Catalog` is constructed once at startup (`Catalog::load`) and passed
//! by reference to whoever needs it - the TUI, the CLI, and the filter
//! layer all share the same instance.

use once_cell::sync::OnceCell;
use serde::Serialize;

pub mod content;

/// A single immutable snippet record.
///
/// All fields borrow from the binary's static data. The category a snippet
/// belongs to is not stored on the record - it is determined by the content
/// source the snippet was authored under (see [`content::MANIFEST`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Stable, globally unique identifier. Used as the lookup key by
    /// `Catalog::get` and by the favorites store.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Source text shown verbatim; display code may trim surrounding
    /// whitespace but never rewrites it.
    pub code: &'static str,
    pub language: SnippetLanguage,
    pub level: SkillLevel,
    /// Ordered free-text labels, searchable and shown as chips.
    pub tags: &'static [&'static str],
    /// Ids of related snippets. Not required to resolve; consumers drop
    /// dangling entries silently.
    pub related: &'static [&'static str],
    /// Editorial note shown for spotlighted snippets. Presence of the note
    /// (not its content) is what marks a snippet as featured.
    pub featured_note: Option<&'static str>,
}

impl Snippet {
    pub fn is_featured(&self) -> bool {
        self.featured_note.is_some()
    }

    /// Case-insensitive substring match against title, description and
    /// each tag. `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.id.trim().is_empty() {
            return Err("empty id");
        }
        if self.title.trim().is_empty() {
            return Err("empty title");
        }
        Ok(())
    }
}

/// Fixed set of content languages. Purely presentational: it selects the
/// icon and the highlighting grammar, and is never validated against the
/// snippet body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SnippetLanguage {
    Ts,
    Tsx,
    Js,
    Jsx,
    Css,
    Html,
    Json,
    Bash,
}

impl SnippetLanguage {
    pub fn display_name(&self) -> &'static str {
        match self {
            SnippetLanguage::Ts => "TypeScript",
            SnippetLanguage::Tsx => "TSX",
            SnippetLanguage::Js => "JavaScript",
            SnippetLanguage::Jsx => "JSX",
            SnippetLanguage::Css => "CSS",
            SnippetLanguage::Html => "HTML",
            SnippetLanguage::Json => "JSON",
            SnippetLanguage::Bash => "Bash",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            SnippetLanguage::Ts => "TS",
            SnippetLanguage::Tsx => "TSX",
            SnippetLanguage::Js => "JS",
            SnippetLanguage::Jsx => "JSX",
            SnippetLanguage::Css => "CSS",
            SnippetLanguage::Html => "HTML",
            SnippetLanguage::Json => "JSON",
            SnippetLanguage::Bash => "Bash",
        }
    }

    /// Get icon for the language
    pub fn icon(&self) -> &'static str {
        match self {
            SnippetLanguage::Ts | SnippetLanguage::Tsx => "",
            SnippetLanguage::Js | SnippetLanguage::Jsx => "",
            SnippetLanguage::Css => "",
            SnippetLanguage::Html => "",
            SnippetLanguage::Json => "",
            SnippetLanguage::Bash => "",
        }
    }

    /// Token handed to syntect for grammar lookup. The default syntect
    /// bundle has no TypeScript/JSX grammar, so those fall back to the
    /// JavaScript one.
    pub fn syntax_token(&self) -> &'static str {
        match self {
            SnippetLanguage::Ts
            | SnippetLanguage::Tsx
            | SnippetLanguage::Js
            | SnippetLanguage::Jsx => "js",
            SnippetLanguage::Css => "css",
            SnippetLanguage::Html => "html",
            SnippetLanguage::Json => "json",
            SnippetLanguage::Bash => "sh",
        }
    }
}

/// Three-value ordered skill classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "○",
            SkillLevel::Intermediate => "◐",
            SkillLevel::Advanced => "●",
        }
    }
}

/// One named partition of the collection, in authoring order.
#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    snippets: Vec<Snippet>,
}

impl Category {
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }
}

/// Aggregate counts over the whole catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub categories: usize,
    pub by_category: Vec<CategoryCount>,
    pub by_level: LevelCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub category: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LevelCounts {
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

impl LevelCounts {
    pub fn total(&self) -> usize {
        self.beginner + self.intermediate + self.advanced
    }
}

const NO_SNIPPETS: &[Snippet] = &[];

/// The aggregated, immutable snippet collection.
///
/// Category order is manifest order; per-category order is authoring order.
/// The flattened view is computed lazily on first use and cached for the
/// lifetime of the instance - there is no runtime mutation to invalidate it.
pub struct Catalog {
    categories: Vec<Category>,
    all: OnceCell<Vec<Snippet>>,
}

impl Catalog {
    /// Builds the catalog from the compiled-in content manifest.
    pub fn load() -> Self {
        Self::from_sources(content::MANIFEST)
    }

    /// Builds a catalog from an explicit set of sources. A record that
    /// fails validation is logged and skipped; a source left with no
    /// records is not registered as a category. One bad source never
    /// aborts the others.
    pub fn from_sources(sources: &[content::Source]) -> Self {
        let mut categories: Vec<Category> = Vec::with_capacity(sources.len());

        for source in sources {
            let mut kept = Vec::with_capacity(source.snippets.len());
            for snippet in source.snippets {
                match snippet.validate() {
                    Ok(()) => kept.push(*snippet),
                    Err(reason) => {
                        eprintln!(
                            "Warning: skipping snippet in category '{}': {}",
                            source.category, reason
                        );
                    }
                }
            }

            if kept.is_empty() {
                continue;
            }

            categories.push(Category {
                name: source.category,
                snippets: kept,
            });
        }

        Self {
            categories,
            all: OnceCell::new(),
        }
    }

    /// Every snippet, category order then authoring order. Cached after the
    /// first call.
    pub fn all(&self) -> &[Snippet] {
        self.all.get_or_init(|| {
            self.categories
                .iter()
                .flat_map(|category| category.snippets.iter().copied())
                .collect()
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in discovery order.
    pub fn category_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|category| category.name)
    }

    /// The snippets of one category, or an empty slice for an unknown name.
    pub fn by_category(&self, name: &str) -> &[Snippet] {
        self.categories
            .iter()
            .find(|category| category.name == name)
            .map(|category| category.snippets.as_slice())
            .unwrap_or(NO_SNIPPETS)
    }

    pub fn is_category(&self, name: &str) -> bool {
        self.categories.iter().any(|category| category.name == name)
    }

    /// Linear first-match lookup by id. Absence is `None`, never an error.
    /// If duplicate ids were ever authored, the first in collection order
    /// wins.
    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.all().iter().find(|snippet| snippet.id == id)
    }

    /// Case-insensitive substring search over title, description and tags.
    /// An empty or whitespace-only query returns the entire collection.
    pub fn search(&self, query: &str) -> Vec<Snippet> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.all().to_vec();
        }

        self.all()
            .iter()
            .filter(|snippet| snippet.matches(&needle))
            .copied()
            .collect()
    }

    /// Snippets carrying a featured note, in collection order.
    pub fn featured(&self) -> Vec<Snippet> {
        self.all()
            .iter()
            .filter(|snippet| snippet.is_featured())
            .copied()
            .collect()
    }

    /// Resolves a snippet's related ids, silently dropping dangling ones.
    pub fn related_to(&self, snippet: &Snippet) -> Vec<Snippet> {
        snippet
            .related
            .iter()
            .filter_map(|id| self.get(id))
            .copied()
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let by_category = self
            .categories
            .iter()
            .map(|category| CategoryCount {
                category: category.name,
                count: category.len(),
            })
            .collect();

        let mut by_level = LevelCounts::default();
        for snippet in self.all() {
            match snippet.level {
                SkillLevel::Beginner => by_level.beginner += 1,
                SkillLevel::Intermediate => by_level.intermediate += 1,
                SkillLevel::Advanced => by_level.advanced += 1,
            }
        }

        CatalogStats {
            total: self.all().len(),
            categories: self.categories.len(),
            by_category,
            by_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::content::Source;
    use super::*;

    const ALPHA: &[Snippet] = &[
        Snippet {
            id: "alpha-one",
            title: "Alpha One",
            description: "First fixture snippet",
            code: "const one = 1;",
            language: SnippetLanguage::Ts,
            level: SkillLevel::Beginner,
            tags: &["fixture", "one"],
            related: &["beta-one", "no-such-id"],
            featured_note: Some("Fixture spotlight."),
        },
        Snippet {
            id: "alpha-two",
            title: "Alpha Two",
            description: "Second fixture snippet",
            code: "const two = 2;",
            language: SnippetLanguage::Js,
            level: SkillLevel::Advanced,
            tags: &["fixture", "two"],
            related: &[],
            featured_note: None,
        },
    ];

    const BETA: &[Snippet] = &[Snippet {
        id: "beta-one",
        title: "Beta One",
        description: "Third fixture snippet",
        code: ".beta { color: red; }",
        language: SnippetLanguage::Css,
        level: SkillLevel::Intermediate,
        tags: &["styling"],
        related: &[],
        featured_note: None,
    }];

    const BROKEN: &[Snippet] = &[Snippet {
        id: "",
        title: "Broken",
        description: "",
        code: "",
        language: SnippetLanguage::Json,
        level: SkillLevel::Beginner,
        tags: &[],
        related: &[],
        featured_note: None,
    }];

    fn fixture() -> Catalog {
        Catalog::from_sources(&[
            Source {
                category: "alpha",
                snippets: ALPHA,
            },
            Source {
                category: "beta",
                snippets: BETA,
            },
        ])
    }

    #[test]
    fn aggregation_preserves_order() {
        let catalog = fixture();
        let ids: Vec<_> = catalog.all().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["alpha-one", "alpha-two", "beta-one"]);
        assert_eq!(
            catalog.category_names().collect::<Vec<_>>(),
            vec!["alpha", "beta"]
        );
    }

    #[test]
    fn malformed_records_and_empty_sources_are_skipped() {
        let catalog = Catalog::from_sources(&[
            Source {
                category: "broken",
                snippets: BROKEN,
            },
            Source {
                category: "empty",
                snippets: &[],
            },
            Source {
                category: "beta",
                snippets: BETA,
            },
        ]);

        // The bad sources degrade away; the good one survives.
        assert_eq!(catalog.category_names().collect::<Vec<_>>(), vec!["beta"]);
        assert_eq!(catalog.all().len(), 1);
    }

    #[test]
    fn get_round_trips_every_id() {
        let catalog = fixture();
        for snippet in catalog.all() {
            assert_eq!(catalog.get(snippet.id), Some(snippet));
        }
        assert_eq!(catalog.get("no-such-id"), None);
    }

    #[test]
    fn by_category_is_total() {
        let catalog = fixture();
        assert_eq!(catalog.by_category("alpha").len(), 2);
        assert!(catalog.by_category("does-not-exist").is_empty());
    }

    #[test]
    fn search_empty_and_whitespace_return_everything() {
        let catalog = fixture();
        assert_eq!(catalog.search("").len(), catalog.all().len());
        assert_eq!(catalog.search("   ").len(), catalog.all().len());
    }

    #[test]
    fn search_is_case_insensitive_and_covers_tags() {
        let catalog = fixture();
        assert_eq!(catalog.search("ALPHA").len(), 2);
        assert_eq!(catalog.search("alpha").len(), 2);
        // "styling" only appears as a tag.
        assert_eq!(catalog.search("styling").len(), 1);
        assert_eq!(catalog.search("xyzxyz-no-such-text").len(), 0);
    }

    #[test]
    fn search_does_not_look_at_code_bodies() {
        let catalog = fixture();
        // "color" appears only inside beta-one's code.
        assert!(catalog.search("color: red").is_empty());
    }

    #[test]
    fn stats_sums_are_consistent() {
        let catalog = fixture();
        let stats = catalog.stats();
        assert_eq!(stats.total, catalog.all().len());
        assert_eq!(stats.categories, 2);
        let by_category_sum: usize = stats.by_category.iter().map(|c| c.count).sum();
        assert_eq!(by_category_sum, stats.total);
        assert_eq!(stats.by_level.total(), stats.total);
    }

    #[test]
    fn featured_and_related_resolution() {
        let catalog = fixture();
        let featured = catalog.featured();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "alpha-one");

        // Dangling related ids disappear silently.
        let related = catalog.related_to(&featured[0]);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "beta-one");
    }

    #[test]
    fn queries_are_idempotent() {
        let catalog = fixture();
        assert_eq!(catalog.search("alpha"), catalog.search("alpha"));
        assert_eq!(catalog.all(), catalog.all());
        assert_eq!(catalog.stats().total, catalog.stats().total);
    }

    #[test]
    fn bundled_content_is_well_formed() {
        let catalog = Catalog::load();
        assert!(catalog.all().len() >= 20);

        // Ids must stay unique across the whole collection; a duplicate
        // would make lookups ambiguous.
        let mut seen = std::collections::HashSet::new();
        for snippet in catalog.all() {
            assert!(seen.insert(snippet.id), "duplicate id: {}", snippet.id);
        }

        for snippet in catalog.all() {
            assert_eq!(catalog.get(snippet.id), Some(snippet));
        }
    }
}
