//! Light/dark mode, persisted to a preference file and broadcast to the
//! renderer through a watch channel.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;

use crate::mvi::{Intent, Reducer, UiState};

use super::cell::{ChangeListener, StateCell};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl UiState for ThemeMode {}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ThemeIntent {
    Toggle,
    Set(ThemeMode),
}

impl Intent for ThemeIntent {}

pub struct ThemeReducer;

impl Reducer for ThemeReducer {
    type State = ThemeMode;
    type Intent = ThemeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ThemeIntent::Toggle => state.toggled(),
            ThemeIntent::Set(mode) => mode,
        }
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to access theme preference {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unrecognised theme preference {value:?} in {path}")]
    Invalid { path: PathBuf, value: String },
}

/// The one-line preference file holding `light` or `dark`.
#[derive(Debug, Clone)]
pub struct ThemePreference {
    path: PathBuf,
}

impl ThemePreference {
    pub const FILE_NAME: &'static str = "theme";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<ThemeMode>, ThemeError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ThemeError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        ThemeMode::parse(&content)
            .map(Some)
            .ok_or_else(|| ThemeError::Invalid {
                path: self.path.clone(),
                value: content.trim().to_string(),
            })
    }

    pub fn save(&self, mode: ThemeMode) -> Result<(), ThemeError> {
        let io_err = |source| ThemeError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&self.path, mode.as_str()).map_err(io_err)
    }
}

/// Current theme mode.
///
/// Every transition is written to the preference file (when one is
/// configured) and published on the watch channel the renderer reads.
#[derive(Clone)]
pub struct ThemeStore {
    cell: StateCell<ThemeReducer>,
    attribute: Arc<watch::Sender<ThemeMode>>,
    preference: Option<ThemePreference>,
}

impl ThemeStore {
    /// Start from the persisted preference, else `fallback`.
    pub fn new(
        preference: Option<ThemePreference>,
        fallback: ThemeMode,
        listener: Option<ChangeListener>,
    ) -> Self {
        let initial = match preference.as_ref().map(ThemePreference::load) {
            Some(Ok(Some(mode))) => mode,
            Some(Ok(None)) | None => fallback,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Ignoring theme preference");
                fallback
            }
        };

        let (attribute, _) = watch::channel(initial);

        Self {
            cell: StateCell::with_state("theme", initial, listener),
            attribute: Arc::new(attribute),
            preference,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.cell.snapshot()
    }

    /// Receiver that always holds the applied mode.
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.attribute.subscribe()
    }

    pub fn toggle(&self) -> ThemeMode {
        self.apply(ThemeIntent::Toggle)
    }

    pub fn set(&self, mode: ThemeMode) -> ThemeMode {
        self.apply(ThemeIntent::Set(mode))
    }

    fn apply(&self, intent: ThemeIntent) -> ThemeMode {
        self.cell.dispatch(intent);
        let mode = self.cell.snapshot();

        if let Some(preference) = &self.preference {
            if let Err(e) = preference.save(mode) {
                tracing::warn!(error = %e, "Failed to persist theme");
            }
        }
        self.attribute.send_replace(mode);
        tracing::debug!(mode = mode.as_str(), "Theme applied");
        mode
    }
}
