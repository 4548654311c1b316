//! Theme persistence and application to the document root.

use plantventory_core::{ResultExt, Theme};

use crate::error::{Result, UiError};

fn storage() -> Result<web_sys::Storage> {
    let window = web_sys::window().ok_or(UiError::WindowNotAvailable)?;
    window
        .local_storage()
        .map_err(|e| UiError::Storage(format!("{e:?}")))?
        .ok_or_else(|| UiError::Storage("localStorage is disabled".to_string()))
}

/// Theme saved by a previous visit, if any and if still valid.
#[must_use]
pub fn stored_theme() -> Option<Theme> {
    let value = storage().ok()?.get_item(Theme::STORAGE_KEY).ok()??;
    value.parse::<Theme>().into_option_logged()
}

/// Stored preference, falling back to the server default.
#[must_use]
pub fn initial_theme(server_default: Theme) -> Theme {
    stored_theme().unwrap_or(server_default)
}

/// Persist the preference.
///
/// # Errors
///
/// Returns `UiError::Storage` when localStorage is unavailable or full.
pub fn store_theme(theme: Theme) -> Result<()> {
    storage()?
        .set_item(Theme::STORAGE_KEY, theme.as_str())
        .map_err(|e| UiError::Storage(format!("{e:?}")))
}

/// Advance to the next theme and persist it. Only an explicit choice by the
/// visitor is stored; the server default never is.
///
/// The second element reports whether saving worked; the new theme applies
/// either way.
pub fn cycle_theme(current: Theme) -> (Theme, Result<()>) {
    let next = current.toggle();
    (next, store_theme(next))
}

/// Put the theme's class on `<html>`, removing the other one.
///
/// `System` removes both and leaves the choice to `prefers-color-scheme`.
///
/// # Errors
///
/// Returns an error when there is no document or the class list rejects the
/// change.
pub fn apply_theme(theme: Theme) -> Result<()> {
    let root = web_sys::window()
        .ok_or(UiError::WindowNotAvailable)?
        .document()
        .ok_or(UiError::DocumentNotAvailable)?
        .document_element()
        .ok_or(UiError::DocumentNotAvailable)?;
    let classes = root.class_list();

    classes
        .remove_2("light", "dark")
        .map_err(|e| UiError::Storage(format!("{e:?}")))?;
    if let Some(class) = theme.css_class() {
        classes
            .add_1(class)
            .map_err(|e| UiError::Storage(format!("{e:?}")))?;
    }
    Ok(())
}
