// GPIO LED Pin Adapter
//
// Implementiert das LedPin Trait aus blinky-core über das
// esp-hal GPIO Peripheral.

use blinky_core::{LedError, LedPin};
use esp_hal::gpio::{AnyPin, Level, Output, OutputConfig};

/// Pin-Adapter für einen esp-hal GPIO-Ausgang
///
/// Hält den Pin bis zur Konfiguration unkonfiguriert; erst
/// `configure_output_inactive()` wandelt ihn in einen Output um.
/// Dadurch bleibt die Init-Reihenfolge des Treibers (erst Readiness,
/// dann Konfiguration) auch auf echter Hardware erhalten.
pub struct EspLedPin<'d> {
    unconfigured: Option<AnyPin<'d>>,
    output: Option<Output<'d>>,
}

impl<'d> EspLedPin<'d> {
    /// Erstellt einen neuen Adapter aus einem noch unkonfigurierten Pin
    pub fn new(pin: AnyPin<'d>) -> Self {
        Self {
            unconfigured: Some(pin),
            output: None,
        }
    }
}

impl LedPin for EspLedPin<'_> {
    fn is_ready(&self) -> bool {
        // Der GPIO-Controller des ESP32-C6 ist nach esp_hal::init() immer
        // getaktet; "bereit" heißt hier: wir besitzen den Pin.
        self.unconfigured.is_some() || self.output.is_some()
    }

    fn configure_output_inactive(&mut self) -> Result<(), LedError> {
        match self.unconfigured.take() {
            Some(pin) => {
                self.output = Some(Output::new(pin, Level::Low, OutputConfig::default()));
                Ok(())
            }
            // Bereits konfiguriert: zurück in den inaktiven Zustand ziehen
            None => match self.output.as_mut() {
                Some(output) => {
                    output.set_low();
                    Ok(())
                }
                None => Err(LedError::DeviceNotReady),
            },
        }
    }

    fn set_level(&mut self, level: bool) -> Result<(), LedError> {
        let output = self.output.as_mut().ok_or(LedError::WriteFailed)?;
        output.set_level(if level { Level::High } else { Level::Low });
        Ok(())
    }

    fn toggle_level(&mut self) -> Result<(), LedError> {
        let output = self.output.as_mut().ok_or(LedError::WriteFailed)?;
        output.toggle();
        Ok(())
    }
}
