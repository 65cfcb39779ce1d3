//! Save, load and background changes

use tracing::info;
use crate::background::{BackgroundSettings, ImageProvider};
use crate::error::BoardError;
use crate::persistence::{DashboardState, KeyValueStore};
use super::BoardEngine;

impl BoardEngine {
    /// Capture the current widgets and background
    pub fn snapshot(&self) -> DashboardState {
        DashboardState::new(self.widgets.widgets().to_vec(), self.background.clone())
    }

    /// Replace the board with `state`.
    ///
    /// Content resources of the replaced widgets are torn down and any
    /// active gesture ends.
    pub fn restore(&mut self, mut state: DashboardState) {
        if state.needs_migration() {
            state.migrate();
        }
        self.teardown_all_content();
        self.input.end_drag();
        self.widgets.restore(state.widgets);
        self.background = state.background;
    }

    /// Save the board to `store`
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), BoardError> {
        self.bridge.save(store, &self.snapshot())
    }

    /// Load the board from `store`.
    ///
    /// Returns `Ok(false)` when nothing was saved; the board is untouched
    /// in that case and on error.
    pub fn load<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> Result<bool, BoardError> {
        match self.bridge.load(store)? {
            Some(state) => {
                self.restore(state);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[inline]
    pub fn background(&self) -> &BackgroundSettings {
        &self.background
    }

    /// Replace the background wholesale
    pub fn set_background(&mut self, background: BackgroundSettings) {
        info!(kind = background.kind.id(), "background changed");
        self.background = background;
    }

    /// Generate a background from `prompt` and apply it.
    ///
    /// The current background is kept when generation fails.
    pub fn generate_background<P: ImageProvider + ?Sized>(
        &mut self,
        provider: &mut P,
        credential: Option<&str>,
        prompt: &str,
    ) -> Result<(), BoardError> {
        let background = self.generator.generate(provider, credential, prompt)?;
        self.set_background(background);
        Ok(())
    }
}
