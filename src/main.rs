// Beacon Shell - Tauri Native Application
// Native desktop and mobile wrapper for the Beacon application layer

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    beacon_shell::run();
}
