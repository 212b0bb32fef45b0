//! Theme service - light/dark preference persisted between runs.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::{Config, DARK_THEME_MARKER, THEME_STORAGE_KEY};
use crate::domain::theme::prefers_dark_from_colorfgbg;
use crate::domain::ThemeMode;
use crate::infra::KeyValueStore;

struct ThemeState {
    mode: ThemeMode,
    initialized: bool,
}

pub struct ThemeService {
    state: Mutex<ThemeState>,
    storage: Arc<dyn KeyValueStore>,
    system_prefers_dark: bool,
}

impl ThemeService {
    /// Create the service and apply the saved or system theme
    pub fn new(storage: Arc<dyn KeyValueStore>, system_prefers_dark: bool) -> Self {
        let service = Self {
            state: Mutex::new(ThemeState {
                mode: ThemeMode::default(),
                initialized: false,
            }),
            storage,
            system_prefers_dark,
        };
        service.initialize();
        service
    }

    /// System preference: explicit configuration first, then the terminal
    pub fn system_preference(config: &Config) -> bool {
        config
            .prefers_dark
            .or_else(|| prefers_dark_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()))
            .unwrap_or(false)
    }

    fn lock(&self) -> MutexGuard<'_, ThemeState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Load the saved preference once; later calls do nothing
    pub fn initialize(&self) {
        let mut state = self.lock();
        if state.initialized {
            return;
        }

        state.mode = match self.storage.get(THEME_STORAGE_KEY) {
            Some(saved) => ThemeMode::from_saved(&saved),
            None => ThemeMode::from_dark(self.system_prefers_dark),
        };
        state.initialized = true;
        tracing::debug!(theme = %state.mode, "Theme applied");
    }

    pub fn theme(&self) -> ThemeMode {
        self.lock().mode
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    /// Styling marker for the active theme
    pub fn marker(&self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_THEME_MARKER)
    }

    /// Switch to the other mode and persist it
    pub fn toggle(&self) -> ThemeMode {
        let mut state = self.lock();
        state.mode = state.mode.toggled();
        state.initialized = true;
        self.persist(state.mode);
        state.mode
    }

    pub fn set(&self, mode: ThemeMode) {
        let mut state = self.lock();
        state.mode = mode;
        state.initialized = true;
        self.persist(mode);
    }

    fn persist(&self, mode: ThemeMode) {
        tracing::debug!(theme = %mode, "Theme applied");
        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, mode.as_str()) {
            tracing::warn!(error = %e, "Failed to persist theme preference");
        }
    }
}
