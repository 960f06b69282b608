// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von blinky-core
pub use blinky_core::{GpioLedDriver, LedDriver, LedError, LedPin, LedState, SimLedDriver};

// ============================================================================
// Testing-Strategie für Embedded no_std Crates
// ============================================================================
//
// Standard Unit Tests (#[test]) laufen in dieser Crate nicht: esp-hal und
// esp-rtos kompilieren nur für riscv32imac-unknown-none-elf, cargo test
// würde für das Host-Target (x86_64) bauen und scheitern.
//
// Deshalb lebt die komplette Treiber-Logik (Init-Guard, Shadow-State,
// Fehlerpfade) hardware-frei in blinky-core und wird in blinky-tests auf
// dem Host getestet - mit SimLedDriver bzw. einem MockPin statt echter
// Hardware. Diese Crate enthält nur noch den dünnen esp-hal Adapter
// (EspLedPin) und die Tasks.
