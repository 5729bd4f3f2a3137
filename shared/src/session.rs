use serde::{Serialize, Deserialize};

use crate::i18n::Language;
use crate::selector::SpinOutcome;

/// Per-session UI state: the active language, the spin-in-progress guard
/// and the outcome of the last completed spin. Kept in one place instead
/// of ambient globals so handlers receive it explicitly.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct WheelSession {
    pub language: Language,
    pub is_spinning: bool,
    pub last_outcome: Option<SpinOutcome>,
}

impl WheelSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the spin slot. Returns `false` without touching anything if
    /// a spin is already in flight; the caller must not select a prize in
    /// that case. Overlapping triggers would otherwise both read stock
    /// before either write, over-allocating a scarce prize.
    pub fn try_begin_spin(&mut self) -> bool {
        if self.is_spinning {
            log::warn!("spin rejected: one is already in flight");
            return false;
        }
        self.is_spinning = true;
        self.last_outcome = None;
        true
    }

    pub fn complete_spin(&mut self, outcome: SpinOutcome) {
        self.is_spinning = false;
        self.last_outcome = Some(outcome);
    }

    /// Releases the guard without recording an outcome, for spins aborted
    /// before a prize was drawn.
    pub fn cancel_spin(&mut self) {
        self.is_spinning = false;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
    }
}
