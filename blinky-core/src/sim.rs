//! Simuliertes Backend: Shadow-State ohne Hardware-Zugriff
//!
//! Für Host-Tests (x86_64). Verhält sich aus Caller-Sicht identisch zum
//! Hardware-Backend: gleicher Init-Guard, gleicher Fehler-Typ, gleiche
//! Prüf-Reihenfolge.

use crate::traits::{LedDriver, LedError, LedReset};

/// Simulierter LED-Treiber (nur Shadow-State, kein Pin)
#[derive(Debug, Default)]
pub struct SimLedDriver {
    initialized: bool,
    state: bool,
}

impl SimLedDriver {
    /// Erstellt einen neuen Treiber im uninitialisierten Zustand
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedDriver for SimLedDriver {
    fn init(&mut self) -> Result<(), LedError> {
        // Keine Hardware, kein Fehlerpfad
        self.initialized = true;
        self.state = false;
        Ok(())
    }

    fn on(&mut self) -> Result<(), LedError> {
        if !self.initialized {
            return Err(LedError::NotConnected);
        }

        self.state = true;
        Ok(())
    }

    fn off(&mut self) -> Result<(), LedError> {
        if !self.initialized {
            return Err(LedError::NotConnected);
        }

        self.state = false;
        Ok(())
    }

    fn toggle(&mut self) -> Result<(), LedError> {
        if !self.initialized {
            return Err(LedError::NotConnected);
        }

        self.state = !self.state;
        Ok(())
    }

    fn get_state(&self) -> Result<bool, LedError> {
        if !self.initialized {
            return Err(LedError::NotConnected);
        }

        Ok(self.state)
    }
}

impl LedReset for SimLedDriver {
    fn reset(&mut self) {
        self.initialized = false;
        self.state = false;
    }
}
