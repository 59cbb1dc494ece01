//! Favorites Module
//!
//! An ordered set of snippet ids the user has starred. The set holds
//! references only - ids, never snippet copies - and is persisted through
//! [`crate::storage::StorageManager`]. Membership reads are pure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Snippet};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: String,
    pub added_at: DateTime<Utc>,
}

/// The user's favorites, in the order they were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoriteSet {
    entries: Vec<FavoriteEntry>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    pub fn added_at(&self, id: &str) -> Option<DateTime<Utc>> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.added_at)
    }

    /// Adds the id if absent, removes it if present. Returns true when the
    /// snippet is favorited after the call.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(position) = self.entries.iter().position(|entry| entry.id == id) {
            self.entries.remove(position);
            false
        } else {
            self.entries.push(FavoriteEntry {
                id: id.to_owned(),
                added_at: Utc::now(),
            });
            true
        }
    }

    /// Looks every favorited id up in the catalog, in insertion order.
    /// Ids that no longer resolve (content removed between releases) are
    /// dropped silently.
    pub fn resolve(&self, catalog: &Catalog) -> Vec<Snippet> {
        self.entries
            .iter()
            .filter_map(|entry| catalog.get(&entry.id))
            .copied()
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::content::Source;
    use crate::catalog::{SkillLevel, SnippetLanguage};

    const POOL: &[Snippet] = &[
        Snippet {
            id: "kept",
            title: "Kept",
            description: "",
            code: "",
            language: SnippetLanguage::Js,
            level: SkillLevel::Beginner,
            tags: &[],
            related: &[],
            featured_note: None,
        },
        Snippet {
            id: "other",
            title: "Other",
            description: "",
            code: "",
            language: SnippetLanguage::Js,
            level: SkillLevel::Beginner,
            tags: &[],
            related: &[],
            featured_note: None,
        },
    ];

    fn catalog() -> Catalog {
        Catalog::from_sources(&[Source {
            category: "pool",
            snippets: POOL,
        }])
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut favorites = FavoriteSet::new();

        assert!(favorites.toggle("kept"));
        assert!(favorites.contains("kept"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle("kept"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn resolve_keeps_insertion_order_and_drops_dangling() {
        let catalog = catalog();
        let mut favorites = FavoriteSet::new();

        favorites.toggle("other");
        favorites.toggle("gone-from-catalog");
        favorites.toggle("kept");

        let resolved = favorites.resolve(&catalog);
        let ids: Vec<_> = resolved.iter().map(|snippet| snippet.id).collect();
        assert_eq!(ids, vec!["other", "kept"]);
    }

    #[test]
    fn round_trips_through_json() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle("kept");

        let json = serde_json::to_string(&favorites).unwrap();
        let restored: FavoriteSet = serde_json::from_str(&json).unwrap();

        assert!(restored.contains("kept"));
        assert_eq!(restored.added_at("kept"), favorites.added_at("kept"));
    }
}
