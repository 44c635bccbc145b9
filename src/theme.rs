use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{Theme, BUILTIN_THEMES};

const USER_THEME_APP_DIR: &str = "grid-snake";

/// Failure to load or parse a user theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unrecognized color {0:?}")]
    Color(String),
}

/// On-disk theme representation: every field is a ratatui color name
/// (`"green"`, `"dark gray"`) or hex value (`"#00ff00"`).
#[derive(Debug, Deserialize)]
struct ThemeFile {
    snake_head: String,
    snake_body: String,
    snake_tail: String,
    food: String,
    play_bg: String,
    border_fg: String,
    border_bg: String,
    hud_score: String,
    menu_title: String,
    menu_footer: String,
}

/// A selectable theme with its id.
#[derive(Debug, Clone)]
pub struct ThemeItem {
    pub id: String,
    pub theme: Theme,
}

/// Builtin themes overlaid with user-provided ones, selectable by id.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<ThemeItem>,
}

impl ThemeCatalog {
    /// Loads the builtin themes, then overlays user themes found in the
    /// platform config directory (`<config>/grid-snake/themes/*.json`).
    ///
    /// A user file whose stem matches a builtin id replaces it. Unreadable
    /// or malformed files are skipped with a warning on stderr; this runs
    /// before the terminal enters raw mode.
    #[must_use]
    pub fn load() -> Self {
        let mut themes: Vec<ThemeItem> = BUILTIN_THEMES
            .iter()
            .map(|(id, theme)| ThemeItem {
                id: (*id).to_owned(),
                theme: *theme,
            })
            .collect();

        if let Some(dir) = user_theme_dir() {
            merge_theme_dir(&dir, &mut themes);
        }

        Self { themes }
    }

    /// Returns the theme registered under `id`, if any.
    #[must_use]
    pub fn select(&self, id: &str) -> Option<Theme> {
        self.themes
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.theme)
    }

    /// Returns the first catalog entry (the classic builtin unless a user
    /// theme replaced it).
    #[must_use]
    pub fn default_theme(&self) -> Theme {
        self.themes
            .first()
            .expect("theme catalog always contains the builtin themes")
            .theme
    }

    /// Iterates over available theme ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|item| item.id.as_str())
    }
}

fn user_theme_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_THEME_APP_DIR).join("themes"))
}

fn merge_theme_dir(dir: &Path, themes: &mut Vec<ThemeItem>) {
    let Ok(entries) = fs::read_dir(dir) else {
        // Missing directory is the common case: no user themes installed.
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        match load_theme_file(&path) {
            Ok(theme) => insert_theme(themes, id.to_owned(), theme),
            Err(error) => {
                eprintln!("Skipping theme {}: {error}", path.display());
            }
        }
    }
}

fn insert_theme(themes: &mut Vec<ThemeItem>, id: String, theme: Theme) {
    if let Some(existing) = themes.iter_mut().find(|item| item.id == id) {
        existing.theme = theme;
    } else {
        themes.push(ThemeItem { id, theme });
    }
}

fn load_theme_file(path: &Path) -> Result<Theme, ThemeError> {
    parse_theme(&fs::read_to_string(path)?)
}

fn parse_theme(raw: &str) -> Result<Theme, ThemeError> {
    let file: ThemeFile = serde_json::from_str(raw)?;

    Ok(Theme {
        snake_head: parse_color(&file.snake_head)?,
        snake_body: parse_color(&file.snake_body)?,
        snake_tail: parse_color(&file.snake_tail)?,
        food: parse_color(&file.food)?,
        play_bg: parse_color(&file.play_bg)?,
        border_fg: parse_color(&file.border_fg)?,
        border_bg: parse_color(&file.border_bg)?,
        hud_score: parse_color(&file.hud_score)?,
        menu_title: parse_color(&file.menu_title)?,
        menu_footer: parse_color(&file.menu_footer)?,
    })
}

fn parse_color(name: &str) -> Result<Color, ThemeError> {
    Color::from_str(name).map_err(|_| ThemeError::Color(name.to_owned()))
}
