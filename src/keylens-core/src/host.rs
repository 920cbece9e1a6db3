//! Capability traits for the host environment.
//!
//! The pipeline never depends on a concrete keymap store or action registry;
//! it talks to these traits, and an adapter (such as
//! [`crate::store::FileKeymapStore`]) supplies the data.

use crate::keymap::Keymap;

/// Which modifier set the host platform carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    /// Four modifiers (shift, ctrl, meta, alt) — the macOS family.
    Extended,
    /// Three modifiers (shift, ctrl, alt).
    Standard,
}

impl PlatformFamily {
    /// Family of the platform this build targets.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            PlatformFamily::Extended
        } else {
            PlatformFamily::Standard
        }
    }
}

/// Resolves an action id to its human-readable display name.
///
/// A `None` result is not an error; callers fall back to the raw id.
pub trait ActionCatalog {
    fn resolve_name(&self, action_id: &str) -> Option<String>;
}

/// Application identity shown in export banners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppBanner {
    pub name: String,
    pub version: String,
    /// Raw image bytes (PNG), embedded in the HTML export when present.
    pub logo: Option<Vec<u8>>,
}

impl Default for AppBanner {
    fn default() -> Self {
        Self {
            name: "Keylens".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            logo: None,
        }
    }
}

/// Access to the host's named keymaps.
pub trait KeymapStore {
    /// The keymap the host considers active.
    fn active_keymap(&self) -> Option<&Keymap>;

    /// Every available keymap, in the host's order.
    fn keymaps(&self) -> Vec<&Keymap>;

    /// Look up one keymap by name.
    fn keymap(&self, name: &str) -> Option<&Keymap>;

    /// Application identity for export banners.
    fn banner(&self) -> AppBanner {
        AppBanner::default()
    }
}
