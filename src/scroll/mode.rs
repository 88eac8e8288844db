//! Scroll-mode preference: paged stack transitions vs. native scrolling.
//!
//! Resolution order at load: explicit `?scroll=` query parameter, then the
//! stored preference, then the OS reduced-motion signal, then paged. The
//! preference is the only state that outlives a session.

use web_sys::window;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    /// The controller animates full-viewport stack transitions and owns all
    /// navigation input.
    Paged,
    /// The browser scrolls; the controller only observes which section is
    /// in view.
    Native,
}

impl ScrollMode {
    /// `?scroll=` accepts `native`, `standard`, and `snap` (the latter two
    /// both name the paged experience).
    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "native" => Some(Self::Native),
            "standard" | "snap" => Some(Self::Paged),
            _ => None,
        }
    }

    /// Stored preference values are `native` and `snap`.
    pub fn from_stored_value(value: &str) -> Option<Self> {
        match value {
            "native" => Some(Self::Native),
            "snap" => Some(Self::Paged),
            _ => None,
        }
    }

    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Paged => "snap",
        }
    }
}

/// Pure resolution core, separated from the browser lookups below.
pub fn resolve(
    query: Option<&str>,
    stored: Option<&str>,
    prefers_reduced_motion: bool,
) -> ScrollMode {
    if let Some(mode) = query.and_then(ScrollMode::from_query_value) {
        return mode;
    }
    if let Some(mode) = stored.and_then(ScrollMode::from_stored_value) {
        return mode;
    }
    if prefers_reduced_motion {
        return ScrollMode::Native;
    }
    ScrollMode::Paged
}

/// Resolve the initial mode from the actual environment. Safe without a
/// `window` (server-side or test contexts): resolves as if nothing was set.
pub fn resolve_initial() -> ScrollMode {
    let query = query_param_value();
    let stored = stored_value();
    resolve(
        query.as_deref(),
        stored.as_deref(),
        prefers_reduced_motion(),
    )
}

pub fn persist(mode: ScrollMode) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(config::SCROLL_MODE_STORAGE_KEY, mode.stored_value());
        }
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

fn query_param_value() -> Option<String> {
    let search = window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(config::SCROLL_MODE_QUERY_PARAM)
}

fn stored_value() -> Option<String> {
    window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(config::SCROLL_MODE_STORAGE_KEY)
        .ok()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_overrides_everything() {
        assert_eq!(
            resolve(Some("native"), Some("snap"), false),
            ScrollMode::Native
        );
        assert_eq!(
            resolve(Some("standard"), Some("native"), true),
            ScrollMode::Paged
        );
        assert_eq!(
            resolve(Some("snap"), Some("native"), true),
            ScrollMode::Paged
        );
    }

    #[test]
    fn stored_preference_beats_reduced_motion() {
        assert_eq!(resolve(None, Some("snap"), true), ScrollMode::Paged);
        assert_eq!(resolve(None, Some("native"), false), ScrollMode::Native);
    }

    #[test]
    fn reduced_motion_defaults_to_native() {
        assert_eq!(resolve(None, None, true), ScrollMode::Native);
        assert_eq!(resolve(None, None, false), ScrollMode::Paged);
    }

    #[test]
    fn garbage_values_are_ignored() {
        assert_eq!(resolve(Some("warp"), Some("???"), false), ScrollMode::Paged);
    }

    #[test]
    fn stored_value_round_trips() {
        for mode in [ScrollMode::Paged, ScrollMode::Native] {
            assert_eq!(ScrollMode::from_stored_value(mode.stored_value()), Some(mode));
        }
    }
}
