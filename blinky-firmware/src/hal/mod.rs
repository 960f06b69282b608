// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt den esp-hal Pin-Zugriff hinter dem LedPin Trait
// aus blinky-core, um Testbarkeit und Wartbarkeit zu verbessern.

pub mod led_pin;

pub use led_pin::EspLedPin;
