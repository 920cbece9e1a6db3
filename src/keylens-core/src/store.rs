//! File-backed keymap store.
//!
//! Keymap documents are TOML:
//!
//! ```toml
//! active = "Default"
//!
//! [application]
//! name = "Acme Studio"
//! version = "2025.2"
//!
//! [[keymap]]
//! name = "Default"
//!
//! [keymap.actions.EditorCopy]
//! name = "Copy"
//! shortcuts = ["ctrl C"]
//!
//! [keymap.actions.GotoDeclaration]
//! name = "Go to Declaration"
//! shortcuts = ["ctrl B, ctrl B"]
//!
//! [[keymap]]
//! name = "Visual Studio"
//! parent = "Default"
//! ```
//!
//! Action display names live beside the bindings, so one document implements
//! both [`KeymapStore`] and [`ActionCatalog`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::host::{ActionCatalog, AppBanner, KeymapStore};
use crate::keymap::Keymap;
use crate::keystroke::{Shortcut, ShortcutParseError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read keymap document {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse keymap document")]
    Parse(#[from] toml::de::Error),
    #[error("keymap document defines no keymaps")]
    NoKeymaps,
    #[error("keymap {0:?} is defined twice")]
    DuplicateKeymap(String),
    #[error("active keymap {0:?} is not defined")]
    UnknownActive(String),
    #[error("invalid shortcut {value:?} for action {action:?} in keymap {keymap:?}")]
    Shortcut {
        keymap: String,
        action: String,
        value: String,
        #[source]
        source: ShortcutParseError,
    },
}

#[derive(Debug, Deserialize)]
struct StoreDoc {
    active: Option<String>,
    application: Option<BannerDoc>,
    #[serde(default, rename = "keymap")]
    keymaps: Vec<KeymapDoc>,
}

#[derive(Debug, Deserialize)]
struct BannerDoc {
    name: String,
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KeymapDoc {
    name: String,
    parent: Option<String>,
    #[serde(default)]
    actions: IndexMap<String, ActionDoc>,
}

#[derive(Debug, Deserialize)]
struct ActionDoc {
    name: Option<String>,
    #[serde(default)]
    shortcuts: Vec<String>,
}

/// Keymaps, display names, and banner loaded from one TOML document.
#[derive(Debug, Clone)]
pub struct FileKeymapStore {
    banner: AppBanner,
    active: String,
    keymaps: Vec<Keymap>,
    display_names: HashMap<String, String>,
}

impl FileKeymapStore {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            keymaps = store.keymaps.len(),
            "loaded keymap document"
        );
        Ok(store)
    }

    pub fn parse(text: &str) -> Result<Self, StoreError> {
        let doc: StoreDoc = toml::from_str(text)?;
        if doc.keymaps.is_empty() {
            return Err(StoreError::NoKeymaps);
        }

        let mut keymaps = Vec::with_capacity(doc.keymaps.len());
        let mut display_names = HashMap::new();
        for keymap_doc in doc.keymaps {
            if keymaps
                .iter()
                .any(|existing: &Keymap| existing.name() == keymap_doc.name)
            {
                return Err(StoreError::DuplicateKeymap(keymap_doc.name));
            }
            let mut keymap = Keymap::new(&keymap_doc.name);
            if let Some(parent) = keymap_doc.parent {
                keymap = keymap.with_parent(parent);
            }
            for (action_id, action) in keymap_doc.actions {
                if let Some(name) = action.name {
                    display_names.insert(action_id.clone(), name);
                }
                let mut shortcuts = Vec::with_capacity(action.shortcuts.len());
                for value in action.shortcuts {
                    let shortcut: Shortcut =
                        value.parse().map_err(|source| StoreError::Shortcut {
                            keymap: keymap_doc.name.clone(),
                            action: action_id.clone(),
                            value: value.clone(),
                            source,
                        })?;
                    shortcuts.push(shortcut);
                }
                keymap.bind(action_id, shortcuts);
            }
            keymaps.push(keymap);
        }

        let active = match doc.active {
            Some(name) => {
                if !keymaps.iter().any(|keymap| keymap.name() == name) {
                    return Err(StoreError::UnknownActive(name));
                }
                name
            }
            None => keymaps[0].name().to_string(),
        };

        let banner = match doc.application {
            Some(app) => AppBanner {
                name: app.name,
                version: app.version.unwrap_or_default(),
                logo: None,
            },
            None => AppBanner::default(),
        };

        Ok(Self {
            banner,
            active,
            keymaps,
            display_names,
        })
    }
}

impl KeymapStore for FileKeymapStore {
    fn active_keymap(&self) -> Option<&Keymap> {
        self.keymap(&self.active)
    }

    fn keymaps(&self) -> Vec<&Keymap> {
        self.keymaps.iter().collect()
    }

    fn keymap(&self, name: &str) -> Option<&Keymap> {
        self.keymaps.iter().find(|keymap| keymap.name() == name)
    }

    fn banner(&self) -> AppBanner {
        self.banner.clone()
    }
}

impl ActionCatalog for FileKeymapStore {
    fn resolve_name(&self, action_id: &str) -> Option<String> {
        self.display_names.get(action_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
active = "Default"

[application]
name = "Acme Studio"
version = "2025.2"

[[keymap]]
name = "Default"

[keymap.actions.EditorCopy]
name = "Copy"
shortcuts = ["ctrl C"]

[keymap.actions.GotoDeclaration]
name = "Go to Declaration"
shortcuts = ["ctrl B, ctrl B"]

[keymap.actions.Reformat]
name = "Reformat Code"

[[keymap]]
name = "Visual Studio"
parent = "Default"

[keymap.actions.EditorCopy]
shortcuts = ["ctrl INSERT"]
"#;

    #[test]
    fn test_parse_sample_document() {
        let store = FileKeymapStore::parse(SAMPLE).unwrap();
        assert_eq!(store.keymaps().len(), 2);
        let active = store.active_keymap().unwrap();
        assert_eq!(active.name(), "Default");
        assert_eq!(active.len(), 3);
        assert_eq!(active.shortcuts("EditorCopy").len(), 1);
        assert!(active.shortcuts("Reformat").is_empty());

        let vs = store.keymap("Visual Studio").unwrap();
        assert_eq!(vs.parent(), Some("Default"));

        assert_eq!(store.resolve_name("EditorCopy").as_deref(), Some("Copy"));
        assert_eq!(store.resolve_name("Missing"), None);

        let banner = KeymapStore::banner(&store);
        assert_eq!(banner.name, "Acme Studio");
        assert_eq!(banner.version, "2025.2");
    }

    #[test]
    fn test_active_defaults_to_first_keymap() {
        let doc = r#"
[[keymap]]
name = "Only"
"#;
        let store = FileKeymapStore::parse(doc).unwrap();
        assert_eq!(store.active_keymap().unwrap().name(), "Only");
    }

    #[test]
    fn test_unknown_active_is_an_error() {
        let doc = r#"
active = "Ghost"

[[keymap]]
name = "Only"
"#;
        assert!(matches!(
            FileKeymapStore::parse(doc),
            Err(StoreError::UnknownActive(name)) if name == "Ghost"
        ));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        assert!(matches!(
            FileKeymapStore::parse(""),
            Err(StoreError::NoKeymaps)
        ));
    }

    #[test]
    fn test_duplicate_keymap_is_an_error() {
        let doc = r#"
[[keymap]]
name = "Twice"

[[keymap]]
name = "Twice"
"#;
        assert!(matches!(
            FileKeymapStore::parse(doc),
            Err(StoreError::DuplicateKeymap(name)) if name == "Twice"
        ));
    }

    #[test]
    fn test_bad_shortcut_reports_context() {
        let doc = r#"
[[keymap]]
name = "Default"

[keymap.actions.Broken]
shortcuts = ["hyper X"]
"#;
        match FileKeymapStore::parse(doc) {
            Err(StoreError::Shortcut {
                keymap,
                action,
                value,
                ..
            }) => {
                assert_eq!(keymap, "Default");
                assert_eq!(action, "Broken");
                assert_eq!(value, "hyper X");
            }
            other => panic!("expected shortcut error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = FileKeymapStore::load(Path::new("/nonexistent/keymaps.toml")).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }
}
