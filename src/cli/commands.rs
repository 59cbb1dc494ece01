use crate::catalog::{Catalog, Snippet};
use crate::storage::StorageManager;
use colored::Colorize;
use std::error::Error;

/// Lists snippets, optionally scoped to one category.
pub fn list_snippets(category: Option<&str>) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::load();

    match category {
        Some(name) => {
            let snippets = catalog.by_category(name);
            if snippets.is_empty() {
                println!(
                    "{}  No category named: {}",
                    "┃".bright_magenta(),
                    name
                );
                println!("{}  Available categories:", "┃".bright_magenta());
                for category in catalog.categories() {
                    println!(
                        "{}    {} ({})",
                        "┃".bright_magenta(),
                        category.name.bright_white(),
                        category.len()
                    );
                }
                return Ok(());
            }

            println!(
                "{}  {} {} ({} snippets)",
                "┃".bright_magenta(),
                "CATEGORY".bright_green().bold(),
                name.bright_white().bold(),
                snippets.len()
            );
            println!("{}", "─".repeat(60).bright_magenta());
            print_snippet_rows(snippets);
        }
        None => {
            for category in catalog.categories() {
                println!(
                    "{}  {} ({})",
                    "┃".bright_magenta(),
                    category.name.bright_white().bold(),
                    category.len()
                );
                print_snippet_rows(category.snippets());
            }
        }
    }

    Ok(())
}

fn print_snippet_rows(snippets: &[Snippet]) {
    for snippet in snippets {
        println!(
            "{}    {} {:<34} {:<14} {}",
            "┃".bright_magenta(),
            snippet.level.icon().yellow(),
            snippet.title.bright_white(),
            snippet.language.display_name().bright_cyan(),
            snippet.id.bright_black()
        );
    }
}

/// Lists all categories with counts.
pub fn list_categories() -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::load();

    println!(
        "{}  {} categories:",
        "┃".bright_magenta(),
        catalog.categories().len()
    );
    for category in catalog.categories() {
        println!(
            "{}  {:<16} {} snippets",
            "┃".bright_magenta(),
            category.name.bright_white().bold(),
            category.len()
        );
    }

    Ok(())
}

/// Shows one snippet: exact id first, then exact title, then partial
/// title match.
pub fn show_snippet(id_or_title: &str) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::load();

    let found = catalog.get(id_or_title).copied().or_else(|| {
        let needle = id_or_title.to_lowercase();
        catalog
            .all()
            .iter()
            .find(|snippet| snippet.title.to_lowercase() == needle)
            .or_else(|| {
                catalog
                    .all()
                    .iter()
                    .find(|snippet| snippet.title.to_lowercase().contains(&needle))
            })
            .copied()
    });

    match found {
        Some(snippet) => display_snippet(&catalog, &snippet),
        None => {
            println!(
                "{}  No snippet found matching: {}",
                "┃".bright_magenta(),
                id_or_title
            );
            println!("{}  Available snippets:", "┃".bright_magenta());
            println!("{}", "─".repeat(60).bright_magenta());

            for (idx, snippet) in catalog.all().iter().enumerate().take(10) {
                println!(
                    "{}  {}. {}",
                    "┃".bright_magenta(),
                    (idx + 1).to_string().yellow(),
                    snippet.title.bright_white()
                );
            }

            if catalog.all().len() > 10 {
                println!(
                    "{}  ... and {} more",
                    "┃".bright_magenta(),
                    catalog.all().len() - 10
                );
            }
        }
    }

    Ok(())
}

fn display_snippet(catalog: &Catalog, snippet: &Snippet) {
    println!(
        "{}  {} {}",
        "┃".bright_magenta(),
        "SNIPPET".bright_green().bold(),
        snippet.title.bold()
    );
    println!("{}", "─".repeat(60).bright_magenta());

    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Language".bright_yellow(),
        snippet.language.display_name()
    );
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Level".bright_blue(),
        snippet.level.display_name()
    );
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Description".bright_cyan(),
        snippet.description
    );
    if !snippet.tags.is_empty() {
        println!(
            "{}  {}: {}",
            "┃".bright_magenta(),
            "Tags".bright_green(),
            snippet
                .tags
                .iter()
                .map(|tag| format!("#{tag}"))
                .collect::<Vec<_>>()
                .join(" ")
        );
    }
    if let Some(note) = snippet.featured_note {
        println!(
            "{}  {}: {}",
            "┃".bright_magenta(),
            "Featured".bright_yellow(),
            note.italic()
        );
    }

    let related = catalog.related_to(snippet);
    if !related.is_empty() {
        println!(
            "{}  {}: {}",
            "┃".bright_magenta(),
            "Related".bright_magenta(),
            related
                .iter()
                .map(|related| related.title)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "ID".bright_black(),
        snippet.id
    );
    println!("{}", "─".repeat(60).bright_magenta());

    for line in snippet.code.trim().lines() {
        println!("{}  {}", "┃".bright_magenta(), line);
    }
}

/// Searches for snippets matching a query string.
pub fn search_snippets(query: &str) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::load();
    let results = catalog.search(query);

    println!(
        "{}  {} '{}'",
        "┃".bright_magenta(),
        "SEARCH RESULTS FOR".bold(),
        query.bright_white()
    );

    if results.is_empty() {
        println!(
            "{}  No snippets found matching query: {}",
            "┃".bright_magenta(),
            query
        );
        return Ok(());
    }

    println!(
        "{}  Found {} snippets matching '{}':",
        "┃".bright_magenta(),
        results.len(),
        query
    );
    println!("{}", "─".repeat(60).bright_magenta());

    for (idx, snippet) in results.iter().enumerate() {
        println!(
            "{}  {}. {} ({}, {})",
            "┃".bright_magenta(),
            (idx + 1).to_string().bright_yellow(),
            snippet.title.bright_white().bold(),
            snippet.language.display_name().bright_cyan(),
            snippet.level.display_name().bright_green()
        );
        println!(
            "{}     {}: {}",
            "┃".bright_magenta(),
            "ID".bright_black(),
            snippet.id
        );

        if idx < results.len() - 1 {
            println!(
                "{}  {}",
                "┃".bright_magenta(),
                "─".repeat(40).bright_black()
            );
        }
    }

    Ok(())
}

/// Lists all favorite snippets.
pub fn list_favorites() -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::load();
    let storage = StorageManager::new()?;
    let favorites = storage.load_favorites()?;

    let resolved = favorites.resolve(&catalog);
    if resolved.is_empty() {
        println!("{}  No favorite snippets found.", "┃".bright_magenta());
        return Ok(());
    }

    println!(
        "{}  {} favorite snippets:",
        "┃".bright_magenta(),
        resolved.len()
    );

    for (idx, snippet) in resolved.iter().enumerate() {
        println!(
            "{}  {}. {} {}",
            "┃".bright_magenta(),
            (idx + 1).to_string().bright_yellow(),
            "★".yellow(),
            snippet.title.bright_white().bold()
        );
        println!(
            "{}     {}: {}",
            "┃".bright_magenta(),
            "Language".bright_green(),
            snippet.language.display_name()
        );
        if let Some(added_at) = favorites.added_at(snippet.id) {
            println!(
                "{}     {}: {}",
                "┃".bright_magenta(),
                "Starred".bright_blue(),
                added_at.format("%Y-%m-%d %H:%M")
            );
        }
        println!(
            "{}     {}: {}",
            "┃".bright_magenta(),
            "ID".bright_black(),
            snippet.id
        );

        if idx < resolved.len() - 1 {
            println!(
                "{}  {}",
                "┃".bright_magenta(),
                "─".repeat(40).bright_black()
            );
        }
    }

    Ok(())
}

/// Prints aggregate counts, human-readable or as JSON.
pub fn show_stats(json: bool) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::load();
    let stats = catalog.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "LIBRARY STATISTICS".bold()
    );
    println!("{}", "─".repeat(60).bright_magenta());
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Total snippets".bright_white(),
        stats.total
    );
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Categories".bright_white(),
        stats.categories
    );

    println!("{}  {}", "┃".bright_magenta(), "By category:".bright_yellow());
    for entry in &stats.by_category {
        println!(
            "{}    {:<16} {}",
            "┃".bright_magenta(),
            entry.category.bright_white(),
            entry.count
        );
    }

    println!("{}  {}", "┃".bright_magenta(), "By level:".bright_yellow());
    println!(
        "{}    {:<16} {}",
        "┃".bright_magenta(),
        "beginner".bright_green(),
        stats.by_level.beginner
    );
    println!(
        "{}    {:<16} {}",
        "┃".bright_magenta(),
        "intermediate".bright_yellow(),
        stats.by_level.intermediate
    );
    println!(
        "{}    {:<16} {}",
        "┃".bright_magenta(),
        "advanced".bright_red(),
        stats.by_level.advanced
    );

    Ok(())
}
