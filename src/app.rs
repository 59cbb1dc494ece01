use std::time::Instant;

use ratatui::Frame;

use crate::catalog::{Catalog, Snippet};
use crate::favorites::FavoriteSet;
use crate::filters::{CategoryFilter, DebouncedQuery, LibraryFilter, ScopedFilter};
use crate::storage::{SessionCategoryLink, SessionState, StorageManager};
use crate::ui;
use crate::ui::theme::Theme;

/// Application State Enumeration
/// Represents all possible states (pages) that the application can be in.
/// Each variant corresponds to a different screen in the user interface.
/// The state determines which rendering function is called and which key
/// handler the input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    StartPage,
    Library,
    Favorites,
    Stats,
    About,
}

impl Default for AppState {
    /// The application always starts on the StartPage, which serves as the
    /// navigation hub for all other pages.
    fn default() -> Self {
        AppState::StartPage
    }
}

/// Input routing mode. While an overlay is open (search box, help menu)
/// keystrokes go to the overlay instead of the page underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    HelpMenu,
}

/// Start page menu: icon, label, shortcut key, description.
pub const MENU_ITEMS: [(&str, &str, &str, &str); 5] = [
    (
        "",
        "Library",
        "s",
        "Browse every snippet, filtered by category, level and search",
    ),
    (
        "★",
        "Favorites",
        "f",
        "The snippets you starred, stored locally on this machine",
    ),
    (
        "󰄨",
        "Statistics",
        "t",
        "How the library breaks down by category and skill level",
    ),
    (
        "",
        "About",
        "i",
        "What snipdex is and the keys that drive it",
    ),
    ("󰈆", "Exit", "q", "Leave the application"),
];

/// Main Application State Container
/// Holds everything needed to run the TUI: the immutable catalog, the two
/// filter states (library and favorites), the favorites store, session
/// state, and per-page selection/scroll positions. It is passed to every
/// rendering function and key handler.
pub struct App {
    pub state: AppState,
    pub selected_menu_item: usize,
    pub page_history: Vec<AppState>,

    pub catalog: Catalog,
    pub storage: Option<StorageManager>,
    pub session: SessionState,
    pub favorites: FavoriteSet,

    pub filter: LibraryFilter,
    pub favorites_filter: ScopedFilter,

    pub input_mode: InputMode,
    pub selected_snippet: usize,
    pub selected_favorite: usize,
    pub preview_scroll: u16,
    pub theme: Theme,
    pub needs_redraw: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    /// Loads the catalog, restores session state and favorites from disk,
    /// and seeds the library filter from the persisted category scope.
    /// Storage being unavailable is not fatal - the app runs with defaults
    /// and simply doesn't persist.
    pub fn new() -> Self {
        let catalog = Catalog::load();

        let storage = match StorageManager::new() {
            Ok(storage) => Some(storage),
            Err(err) => {
                eprintln!("Warning: storage unavailable, favorites will not persist: {err:#}");
                None
            }
        };

        let mut session = storage
            .as_ref()
            .and_then(|storage| storage.load_state().ok())
            .unwrap_or_default();

        let favorites = storage
            .as_ref()
            .and_then(|storage| storage.load_favorites().ok())
            .unwrap_or_else(FavoriteSet::new);

        let filter = {
            let link = SessionCategoryLink {
                state: &mut session,
                storage: None,
            };
            LibraryFilter::restore(&link, &catalog)
        };

        let theme = session.theme;

        Self {
            state: AppState::StartPage,
            selected_menu_item: 0,
            page_history: Vec::new(),

            catalog,
            storage,
            session,
            favorites,

            filter,
            favorites_filter: ScopedFilter::new(),

            input_mode: InputMode::Normal,
            selected_snippet: 0,
            selected_favorite: 0,
            preview_scroll: 0,
            theme,
            needs_redraw: true,
            error_message: None,
            success_message: None,
        }
    }

    // Navigation

    pub fn next_menu_item(&mut self) {
        self.selected_menu_item = (self.selected_menu_item + 1) % MENU_ITEMS.len();
    }

    pub fn previous_menu_item(&mut self) {
        self.selected_menu_item =
            (self.selected_menu_item + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }

    /// Moves to a new page, saving the current one for back navigation.
    pub fn navigate_to(&mut self, new_state: AppState) {
        if self.state != new_state {
            self.page_history.push(self.state);
            self.state = new_state;
            self.clear_messages();
            self.needs_redraw = true;
        }
    }

    pub fn go_back(&mut self) {
        if let Some(previous_state) = self.page_history.pop() {
            self.state = previous_state;
            self.needs_redraw = true;
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.page_history.is_empty()
    }

    // Derived views

    /// The library page's current result set.
    pub fn visible_snippets(&self) -> Vec<Snippet> {
        self.filter.results(&self.catalog)
    }

    /// The favorites page's current result set: the resolved favorites
    /// pool run through the scoped (search + level) filter.
    pub fn favorite_snippets(&self) -> Vec<Snippet> {
        let pool = self.favorites.resolve(&self.catalog);
        self.favorites_filter.results(&pool)
    }

    /// The snippet the cursor is on, for the page that owns the cursor.
    pub fn selected(&self) -> Option<Snippet> {
        match self.state {
            AppState::Library => self.visible_snippets().get(self.selected_snippet).copied(),
            AppState::Favorites => self
                .favorite_snippets()
                .get(self.selected_favorite)
                .copied(),
            _ => None,
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = match self.state {
            AppState::Library => self.visible_snippets().len(),
            AppState::Favorites => self.favorite_snippets().len(),
            _ => return,
        };

        let index = match self.state {
            AppState::Library => &mut self.selected_snippet,
            AppState::Favorites => &mut self.selected_favorite,
            _ => return,
        };

        if len == 0 {
            *index = 0;
            return;
        }

        *index = (*index as isize + delta).rem_euclid(len as isize) as usize;
        self.preview_scroll = 0;
        self.needs_redraw = true;
    }

    // Category sidebar

    /// Sidebar rows: index 0 is "All", then one per category.
    pub fn category_row_count(&self) -> usize {
        self.catalog.categories().len() + 1
    }

    /// Sidebar row matching the active category filter.
    pub fn category_index(&self) -> usize {
        match self.filter.category() {
            CategoryFilter::All => 0,
            CategoryFilter::Named(name) => self
                .catalog
                .category_names()
                .position(|candidate| candidate == name)
                .map(|position| position + 1)
                .unwrap_or(0),
        }
    }

    pub fn select_category_row(&mut self, row: usize) {
        let category = if row == 0 {
            CategoryFilter::All
        } else {
            match self.catalog.categories().get(row - 1) {
                Some(category) => CategoryFilter::Named(category.name.to_owned()),
                None => return,
            }
        };

        let mut link = SessionCategoryLink {
            state: &mut self.session,
            storage: self.storage.as_ref(),
        };
        self.filter.set_category(category, &mut link);
        self.selected_snippet = 0;
        self.preview_scroll = 0;
        self.needs_redraw = true;
    }

    pub fn next_category(&mut self) {
        let row = (self.category_index() + 1) % self.category_row_count();
        self.select_category_row(row);
    }

    pub fn previous_category(&mut self) {
        let count = self.category_row_count();
        let row = (self.category_index() + count - 1) % count;
        self.select_category_row(row);
    }

    // Level filter

    pub fn cycle_level(&mut self) {
        match self.state {
            AppState::Library => {
                self.filter.cycle_level();
                self.selected_snippet = 0;
            }
            AppState::Favorites => {
                self.favorites_filter.cycle_level();
                self.selected_favorite = 0;
            }
            _ => return,
        }
        self.preview_scroll = 0;
        self.needs_redraw = true;
    }

    // Search

    /// The query owned by the page currently showing the search overlay.
    pub fn active_query_mut(&mut self) -> &mut DebouncedQuery {
        match self.state {
            AppState::Favorites => &mut self.favorites_filter.query,
            _ => &mut self.filter.query,
        }
    }

    pub fn active_query(&self) -> &DebouncedQuery {
        match self.state {
            AppState::Favorites => &self.favorites_filter.query,
            _ => &self.filter.query,
        }
    }

    /// Advances the debounce clocks and resets the cursor of whichever
    /// page's result set just changed.
    pub fn tick(&mut self, now: Instant) {
        if self.filter.query.poll(now) {
            self.selected_snippet = 0;
            self.preview_scroll = 0;
            self.needs_redraw = true;
        }
        if self.favorites_filter.query.poll(now) {
            self.selected_favorite = 0;
            self.needs_redraw = true;
        }
    }

    /// Earliest pending debounce deadline, for the event-poll timeout.
    pub fn next_poll_deadline(&self) -> Option<Instant> {
        [
            self.filter.query.next_deadline(),
            self.favorites_filter.query.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    // Favorites

    /// Stars or unstars the snippet under the cursor and persists the set.
    pub fn toggle_favorite_selected(&mut self) {
        let Some(snippet) = self.selected() else {
            return;
        };

        let now_favorite = self.favorites.toggle(snippet.id);
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.save_favorites(&self.favorites) {
                self.set_error_message(format!("Could not save favorites: {err:#}"));
                return;
            }
        }

        if now_favorite {
            self.set_success_message(format!("★ Added '{}' to favorites", snippet.title));
        } else {
            self.set_success_message(format!("Removed '{}' from favorites", snippet.title));
        }

        // Unfavoriting the last visible row on the favorites page would
        // otherwise leave the cursor past the end.
        if self.state == AppState::Favorites {
            let len = self.favorite_snippets().len();
            if self.selected_favorite >= len {
                self.selected_favorite = len.saturating_sub(1);
            }
        }
        self.needs_redraw = true;
    }

    // Theme

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.session.theme = self.theme;
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.save_state(&self.session) {
                eprintln!("Warning: failed to persist theme: {err:#}");
            }
        }
        self.set_success_message(format!("Theme: {}", self.theme.display_name()));
        self.needs_redraw = true;
    }

    // Messages

    pub fn set_error_message(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
        self.needs_redraw = true;
    }

    pub fn set_success_message(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
        self.needs_redraw = true;
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    // Rendering

    /// Renders the active page, then any overlay on top of it.
    pub fn render(&self, frame: &mut Frame) {
        match self.state {
            AppState::StartPage => ui::start_page::render(frame, self),
            AppState::Library => ui::library::render(frame, self),
            AppState::Favorites => ui::favorites::render(frame, self),
            AppState::Stats => ui::stats::render(frame, self),
            AppState::About => ui::about::render(frame, self),
        }

        match self.input_mode {
            InputMode::Search => ui::search::render_floating_search(frame, self),
            InputMode::HelpMenu => ui::components::render_help_overlay(frame, self),
            InputMode::Normal => {}
        }

        ui::components::render_messages(frame, self);
    }
}
