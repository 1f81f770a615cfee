mod registry;
mod router;

pub use {
    registry::{ActionLookup, HotkeyBackend, HotkeyRegistry},
    router::PressRouter,
};
