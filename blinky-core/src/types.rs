//! Core Types für die LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Logischer LED-Zustand für Logging und Status-Meldungen
///
/// Der Treiber selbst rechnet intern mit `bool` (Shadow-State);
/// dieser Typ macht den Zustand in Log-Ausgaben lesbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedState {
    Off,
    On,
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on { LedState::On } else { LedState::Off }
    }
}

impl From<LedState> for bool {
    fn from(state: LedState) -> Self {
        matches!(state, LedState::On)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedState::Off => defmt::write!(fmt, "Off"),
            LedState::On => defmt::write!(fmt, "On"),
        }
    }
}
