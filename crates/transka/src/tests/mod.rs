mod config;
mod hotkey_backend;
mod tray;
