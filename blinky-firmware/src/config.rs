// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Status-LED
/// Entspricht peripherals.GPIO8 in main.rs (On-Board LED des DevKits)
pub const LED_GPIO_PIN: u8 = 8;

/// Blink-Intervall in Sekunden
pub const BLINK_INTERVAL_SECS: u64 = 1;
