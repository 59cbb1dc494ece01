//! snipdex - Code Snippet Library
//!
//! A terminal-based, read-only library of curated code snippets for the
//! working front-end developer: TypeScript, JavaScript, React, CSS and
//! HTML patterns, browsable by category and skill level, searchable by
//! title, description and tags, with locally persisted favorites.
//!
//! The crate splits into:
//! - `catalog`: the immutable, compiled-in snippet collection and all
//!   read-only queries over it
//! - `filters`: category/level/search composition with a debounced query
//! - `favorites` + `storage`: the only mutable, persisted state
//! - `app`, `ui`, `handlers`: the ratatui front end
//! - `cli`: scripted access to the same catalog

pub mod app;
pub mod catalog;
pub mod cli;
pub mod favorites;
pub mod filters;
pub mod handlers;
pub mod storage;
pub mod ui;
