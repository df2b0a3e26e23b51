//! Active difficulty-level selection.

use crate::error::Result;
use crate::types::AppSettings;

/// Store for the level selection.
///
/// `set_settings` does not re-validate its input: keeping `selected_levels`
/// non-empty is the caller's contract, enforced at the facade before the
/// value reaches the store. `settings` falls back to the all-levels default
/// when the record is absent or unreadable.
pub trait SettingsStore {
    fn settings(&self) -> AppSettings;

    fn set_settings(&mut self, settings: &AppSettings) -> Result<()>;
}
