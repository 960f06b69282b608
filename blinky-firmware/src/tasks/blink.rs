// LED Blink Task - Steuert die Status-LED über GPIO
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Pin;

use crate::config::BLINK_INTERVAL_SECS;
use crate::hal::EspLedPin;
use blinky_core::{GpioLedDriver, LedDriver, LedState};

/// Blink Logic - Testbare Logik ohne konkrete Hardware
///
/// Initialisiert den Treiber einmal und invertiert dann die LED endlos
/// mit festem Intervall. Das Delay übernimmt der Embassy Timer.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `L: LedDriver` ermöglicht:
/// - Real Hardware (GpioLedDriver + EspLedPin) im Production-Code
/// - Simulation (SimLedDriver) in Host-Tests
pub async fn blink_logic<L: LedDriver>(mut led: L) {
    // Init schlägt nur auf dem Hardware-Backend fehl (Port nicht bereit
    // oder Konfiguration fehlgeschlagen). Dann gibt es nichts zu blinken.
    if let Err(e) = led.init() {
        error!("LED init failed: {}", e);
        return;
    }
    info!("LED initialisiert, Zustand: {}", LedState::Off);

    // Hauptschleife: Toggle ist best-effort, ein einzelner Fehlschlag
    // stoppt den Task nicht
    loop {
        match led.toggle() {
            Ok(()) => {
                if let Ok(state) = led.get_state() {
                    info!("Blink! LED: {}", LedState::from(state));
                }
            }
            Err(e) => error!("LED toggle failed: {}", e),
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_secs(BLINK_INTERVAL_SECS)).await;
    }
}

/// LED Blink Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Zuordnung (GPIO-Pin) und ruft dann die
/// testbare `blink_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für die Status-LED
#[embassy_executor::task]
pub async fn led_blink_task(gpio8: esp_hal::peripherals::GPIO8<'static>) {
    // Pin typ-löschen und hinter dem LedPin Trait kapseln
    let led = GpioLedDriver::new(EspLedPin::new(gpio8.degrade()));

    // Treiber-Logik aufrufen (testbar!)
    blink_logic(led).await;
}
