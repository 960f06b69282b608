//! Hardware-Backend: LED-Treiber über einen GPIO-Pin
//!
//! Die komplette Zustands-Logik (Init-Guard, Shadow-State) lebt hier
//! plattformunabhängig - der eigentliche Pin-Zugriff steckt hinter dem
//! [`LedPin`] Trait und ist damit auf dem Host testbar.

use crate::traits::{LedDriver, LedError, LedPin};

/// LED-Treiber für einen echten GPIO-Pin
///
/// Besitzt den Pin exklusiv und hält den zuletzt kommandierten Zustand
/// als Shadow-State. Der Shadow-State wird NUR aktualisiert wenn der
/// Pin-Zugriff erfolgreich war - kein partielles Update.
pub struct GpioLedDriver<P: LedPin> {
    pin: P,
    initialized: bool,
    state: bool,
}

impl<P: LedPin> GpioLedDriver<P> {
    /// Erstellt einen neuen Treiber (noch nicht initialisiert)
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            initialized: false,
            state: false,
        }
    }
}

impl<P: LedPin> LedDriver for GpioLedDriver<P> {
    fn init(&mut self) -> Result<(), LedError> {
        if !self.pin.is_ready() {
            return Err(LedError::DeviceNotReady);
        }

        self.pin.configure_output_inactive()?;

        self.initialized = true;
        self.state = false;
        Ok(())
    }

    fn on(&mut self) -> Result<(), LedError> {
        if !self.initialized {
            return Err(LedError::NotConnected);
        }

        self.pin.set_level(true)?;
        self.state = true;
        Ok(())
    }

    fn off(&mut self) -> Result<(), LedError> {
        if !self.initialized {
            return Err(LedError::NotConnected);
        }

        self.pin.set_level(false)?;
        self.state = false;
        Ok(())
    }

    fn toggle(&mut self) -> Result<(), LedError> {
        if !self.initialized {
            return Err(LedError::NotConnected);
        }

        // Hardware-Invert, nicht "setze berechneten Wert". Schlägt der
        // Zugriff fehl, bleibt der Shadow-State unverändert; Hardware und
        // Shadow können dann auseinanderlaufen (bekannte Grenze).
        self.pin.toggle_level()?;
        self.state = !self.state;
        Ok(())
    }

    fn get_state(&self) -> Result<bool, LedError> {
        if !self.initialized {
            return Err(LedError::NotConnected);
        }

        // Reiner Shadow-Read, die Hardware wird nicht erneut abgefragt
        Ok(self.state)
    }
}
