//! CLI Module for snipdex
//! Scripted access to the snippet library without launching the TUI:
//! listing, lookup, search, favorites and statistics, printed in a
//! colored gutter format that stays grep-friendly.

pub mod commands;

use colored::Colorize;
use std::error::Error;

/// Executes CLI commands based on the provided arguments.
pub fn execute_cli(args: &[String]) -> Result<(), Box<dyn Error>> {
    if args.is_empty() {
        print_help();
        return Ok(());
    }

    match args[0].as_str() {
        "list" | "ls" => {
            commands::list_snippets(args.get(1).map(String::as_str))?;
        }
        "categories" => {
            commands::list_categories()?;
        }
        "show" | "view" | "cat" => {
            if args.len() < 2 {
                println!("{}  Error: Missing snippet id or title", "┃".bright_magenta());
                println!(
                    "{}  Usage: snipdex show <ID_OR_TITLE>",
                    "┃".bright_magenta()
                );
                return Ok(());
            }
            commands::show_snippet(&args[1])?;
        }
        "search" | "find" => {
            if args.len() < 2 {
                println!("{}  Error: Missing search query", "┃".bright_magenta());
                println!("{}  Usage: snipdex search <QUERY>", "┃".bright_magenta());
                return Ok(());
            }
            commands::search_snippets(&args[1])?;
        }
        "favorites" | "fav" => {
            commands::list_favorites()?;
        }
        "stats" => {
            let json = args.iter().any(|arg| arg == "--json");
            commands::show_stats(json)?;
        }
        "help" => {
            print_help();
        }
        _ => {
            println!("{}  Unknown command: {}", "┃".bright_magenta(), args[0]);
            print_help();
        }
    }

    Ok(())
}

/// Prints the help message with available commands.
fn print_help() {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "SNIPDEX CLI - CODE SNIPPET LIBRARY".bold()
    );

    println!("{}  {}", "┃".bright_magenta(), "USAGE:".bright_yellow());
    println!("{}  snipdex [COMMAND] [ARGS]", "┃".bright_magenta());
    println!("{}  {}", "┃".bright_magenta(), "COMMANDS:".bright_yellow());
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "list, ls [CATEGORY]".bright_white(),
        "List all snippets, or only one category's"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "categories".bright_white(),
        "List every category with its snippet count"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "show, view <ID_OR_TITLE>".bright_white(),
        "Display a snippet (partial title works)"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "search, find <QUERY>".bright_white(),
        "Search titles, descriptions and tags"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "favorites, fav".bright_white(),
        "List your starred snippets"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "stats [--json]".bright_white(),
        "Aggregate counts, optionally as JSON"
    );
    println!(
        "{}  {:<27} {}",
        "┃".bright_magenta(),
        "help".bright_white(),
        "Display this help message"
    );

    println!("{}  {}", "┃".bright_magenta(), "TIP:".bright_green());
    println!(
        "{}  Run with no arguments to launch the full TUI (Terminal User Interface) mode",
        "┃".bright_magenta()
    );
}
