//! Storage Manager for disk operations.
//!
//! Snippet content never touches the disk - it is compiled in. What does
//! persist is small: the favorites set and the session state (last
//! category scope, theme). Both live as pretty-printed JSON under the
//! platform data directory. Missing or corrupt files degrade to defaults
//! with a logged warning; persistence failures never take the app down.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::favorites::FavoriteSet;
use crate::filters::CategoryLink;
use crate::ui::theme::Theme;

/// Session state restored on launch. `category` is the shareable slot the
/// category filter mirrors into - the TUI analog of a bookmarkable query
/// parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub category: Option<String>,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug)]
pub struct StorageManager {
    data_dir: PathBuf,
    favorites_file: PathBuf,
    state_file: PathBuf,
}

impl StorageManager {
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .context("Failed to get data directory")?
            .join("snipdex");

        Self::with_root(data_dir)
    }

    /// Uses an explicit root instead of the platform data directory.
    pub fn with_root(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        let favorites_file = data_dir.join("favorites.json");
        let state_file = data_dir.join("state.json");

        Ok(Self {
            data_dir,
            favorites_file,
            state_file,
        })
    }

    pub fn data_directory(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_favorites(&self) -> Result<FavoriteSet> {
        load_json_or_default(&self.favorites_file)
    }

    pub fn save_favorites(&self, favorites: &FavoriteSet) -> Result<()> {
        let content =
            serde_json::to_string_pretty(favorites).context("Failed to serialize favorites")?;
        fs::write(&self.favorites_file, content).context("Failed to write favorites file")
    }

    pub fn load_state(&self) -> Result<SessionState> {
        load_json_or_default(&self.state_file)
    }

    pub fn save_state(&self, state: &SessionState) -> Result<()> {
        let content =
            serde_json::to_string_pretty(state).context("Failed to serialize session state")?;
        fs::write(&self.state_file, content).context("Failed to write session state file")
    }
}

fn load_json_or_default<T>(path: &Path) -> Result<T>
where
    T: Default + for<'de> Deserialize<'de>,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match serde_json::from_str(&content) {
        Ok(value) => Ok(value),
        Err(err) => {
            eprintln!(
                "Warning: {} is not valid JSON ({}), starting fresh",
                path.display(),
                err
            );
            Ok(T::default())
        }
    }
}

/// [`CategoryLink`] backed by the session state. Writes update the state
/// in memory and persist it best effort - a full disk should not break
/// filtering.
pub struct SessionCategoryLink<'a> {
    pub state: &'a mut SessionState,
    pub storage: Option<&'a StorageManager>,
}

impl CategoryLink for SessionCategoryLink<'_> {
    fn read(&self) -> Option<String> {
        self.state.category.clone()
    }

    fn write(&mut self, category: Option<&str>) {
        self.state.category = category.map(str::to_owned);

        if let Some(storage) = self.storage {
            if let Err(err) = storage.save_state(self.state) {
                eprintln!("Warning: failed to persist session state: {err:#}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::CategoryLink;

    #[test]
    fn favorites_round_trip_on_disk() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let storage = StorageManager::with_root(dir.path().to_path_buf())?;

        let mut favorites = FavoriteSet::new();
        favorites.toggle("react-fetch-hook");
        storage.save_favorites(&favorites)?;

        let restored = storage.load_favorites()?;
        assert!(restored.contains("react-fetch-hook"));
        Ok(())
    }

    #[test]
    fn missing_and_corrupt_files_degrade_to_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let storage = StorageManager::with_root(dir.path().to_path_buf())?;

        assert!(storage.load_favorites()?.is_empty());

        fs::write(dir.path().join("state.json"), "{ not json")?;
        let state = storage.load_state()?;
        assert_eq!(state.category, None);
        Ok(())
    }

    #[test]
    fn session_link_persists_category_writes() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let storage = StorageManager::with_root(dir.path().to_path_buf())?;
        let mut state = SessionState::default();

        {
            let mut link = SessionCategoryLink {
                state: &mut state,
                storage: Some(&storage),
            };
            link.write(Some("css"));
        }

        let reloaded = storage.load_state()?;
        assert_eq!(reloaded.category.as_deref(), Some("css"));
        Ok(())
    }
}
