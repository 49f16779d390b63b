use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::theme::Theme;
use crate::shared::errors::{AppError, AppResult};

const THEME_FILE_NAME: &str = "theme";

/// File-persisted theme preference: a single `"dark"` / `"light"` string
///
/// The environment-preferred default is the caller's to supply; the core
/// cannot ask the operating system for its color scheme.
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(THEME_FILE_NAME),
        }
    }

    /// Reads the persisted preference, falling back to `default` when the
    /// file is missing or unreadable
    pub fn load(&self, default: Theme) -> Theme {
        match fs::read_to_string(&self.path) {
            Ok(raw) => raw.parse().unwrap_or_else(|e: String| {
                warn!("Ignoring persisted theme: {}", e);
                default
            }),
            Err(_) => default,
        }
    }

    pub fn save(&self, theme: Theme) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| AppError::StoreError(format!("Failed to create theme dir: {}", e)))?;
        }

        fs::write(&self.path, theme.to_string())
            .map_err(|e| AppError::StoreError(format!("Failed to persist theme: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> ThemeStore {
        let dir = std::env::temp_dir().join(format!("loker-theme-test-{}", rand::random::<u64>()));
        ThemeStore::new(&dir)
    }

    #[test]
    fn test_missing_file_yields_supplied_default() {
        let store = temp_store();
        assert_eq!(store.load(Theme::Dark), Theme::Dark);
        assert_eq!(store.load(Theme::Light), Theme::Light);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = temp_store();
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(Theme::Light), Theme::Dark);
    }

    #[test]
    fn test_garbage_file_yields_default() {
        let store = temp_store();
        fs::create_dir_all(store.path.parent().unwrap()).unwrap();
        fs::write(&store.path, "solarized").unwrap();

        assert_eq!(store.load(Theme::Light), Theme::Light);
    }
}
