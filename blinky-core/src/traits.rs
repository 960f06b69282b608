//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstellen für den LED-Treiber
//! ohne konkrete Implementierung.

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Operation vor erfolgreichem `init()` aufgerufen
    NotConnected,
    /// Der GPIO-Port/Controller ist nicht bereit (nur Hardware-Backend)
    DeviceNotReady,
    /// Konfigurieren oder Schreiben des Pins ist fehlgeschlagen
    WriteFailed,
}

/// Trait für den LED-Treiber
///
/// Der Vertrag ist für beide Backends identisch: jede Operation außer
/// `init()` prüft ZUERST ob die Initialisierung erfolgreich war und gibt
/// sonst `LedError::NotConnected` zurück - ohne den Zustand anzufassen.
///
/// # Implementierungen
/// - **Production:** [`GpioLedDriver`](crate::gpio::GpioLedDriver) (echter GPIO-Pin)
/// - **Testing:** [`SimLedDriver`](crate::sim::SimLedDriver) (nur Shadow-State im Speicher)
pub trait LedDriver {
    /// Initialisiert die LED; danach ist der Zustand AUS
    fn init(&mut self) -> Result<(), LedError>;

    /// Schaltet die LED ein
    fn on(&mut self) -> Result<(), LedError>;

    /// Schaltet die LED aus
    fn off(&mut self) -> Result<(), LedError>;

    /// Invertiert den LED-Zustand
    fn toggle(&mut self) -> Result<(), LedError>;

    /// Liest den Shadow-State (`true` = AN), ohne Hardware-Zugriff
    fn get_state(&self) -> Result<bool, LedError>;
}

/// Trait für den physischen Pin hinter dem Hardware-Backend
///
/// Abstrahiert den Zugriff auf einen GPIO-Ausgang.
///
/// # Implementierungen
/// - **Production:** EspLedPin (esp-hal GPIO Output, in blinky-firmware)
/// - **Testing:** MockPin (in-memory Mock, in blinky-tests)
pub trait LedPin: Send {
    /// `true` wenn der zugrundeliegende Port konfigurierbar ist
    fn is_ready(&self) -> bool;

    /// Konfiguriert den Pin als Ausgang im inaktiven (AUS) Zustand
    fn configure_output_inactive(&mut self) -> Result<(), LedError>;

    /// Setzt das Pin-Level absolut (`true` = aktiv)
    fn set_level(&mut self, level: bool) -> Result<(), LedError>;

    /// Invertiert das Pin-Level auf Hardware-Ebene
    fn toggle_level(&mut self) -> Result<(), LedError>;
}

/// Rücksetzen auf den Ausgangszustand
///
/// Nicht Teil des Produktions-Vertrags: nur das simulierte Backend
/// implementiert diesen Trait, damit Host-Tests zwischen Testfällen den
/// Null-Zustand wiederherstellen können.
pub trait LedReset {
    /// Erzwingt den uninitialisierten Zustand, umgeht alle Guards
    fn reset(&mut self);
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::NotConnected => defmt::write!(fmt, "NotConnected"),
            LedError::DeviceNotReady => defmt::write!(fmt, "DeviceNotReady"),
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}
