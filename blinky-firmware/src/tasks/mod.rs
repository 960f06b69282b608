// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.

pub mod blink;

// Re-export Tasks für einfachen Import
pub use blink::led_blink_task;
