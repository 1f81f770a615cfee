//! Transka Core Library
//!
//! Hotkey-driven translation workflow: double-press detection, the
//! `Hidden → Shown → Translated` cycle, and background translation with
//! results marshalled back onto a single UI execution context. Windows,
//! clipboards, focus, and translation backends plug in through traits.
//!
//! # Example
//!
//! ```no_run
//! use transka_core::{
//!     ClipboardSink, CoreResult, LanguagePair, NoopFocus, PresentationSurface, Severity,
//!     TranslationDispatcher, Translator, UiHandle, Workflow, WorkflowCommand, WorkflowDriver,
//!     HotkeyAction, DEFAULT_TRANSLATION_TIMEOUT,
//! };
//!
//! use std::sync::Arc;
//!
//! struct Upper;
//!
//! impl Translator for Upper {
//!     fn translate(&self, text: &str, _: &str, _: &str) -> CoreResult<String> {
//!         Ok(text.to_uppercase())
//!     }
//!
//!     fn service_name(&self) -> &str {
//!         "upper"
//!     }
//! }
//!
//! # struct Surface;
//! # impl PresentationSurface for Surface {
//! #     fn input_text(&self) -> String { "ahoj".into() }
//! #     fn set_output_text(&mut self, _: &str) {}
//! #     fn output_text(&self) -> String { String::new() }
//! #     fn clear_input(&mut self) {}
//! #     fn clear_output(&mut self) {}
//! #     fn set_status(&mut self, _: &str, _: Severity) {}
//! #     fn show(&mut self) {}
//! #     fn hide(&mut self) {}
//! #     fn focus_input(&mut self) {}
//! #     fn notify(&mut self, _: &str, _: &str) {}
//! #     fn set_languages(&mut self, _: &LanguagePair) {}
//! # }
//! # struct Clipboard;
//! # impl ClipboardSink for Clipboard { fn copy(&mut self, _: &str) {} }
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let (ui, commands) = UiHandle::channel();
//!     let workflow = Workflow::new(Surface, Clipboard, NoopFocus, LanguagePair::new("CS", "EN-US"));
//!     let dispatcher =
//!         TranslationDispatcher::new(Arc::new(Upper), ui.clone(), DEFAULT_TRANSLATION_TIMEOUT);
//!
//!     ui.post(WorkflowCommand::Action(HotkeyAction::Main))?;
//!     ui.post(WorkflowCommand::Action(HotkeyAction::Main))?;
//!
//!     let driver = WorkflowDriver::new(workflow, dispatcher, commands);
//!     driver.run().await?;
//!     Ok(())
//! }
//! ```

mod action;
mod clipboard;
mod debounce;
mod error;
mod focus;
mod hotkey;
mod surface;
mod translation;
mod workflow;

pub use {
    action::HotkeyAction,
    clipboard::ClipboardSink,
    debounce::{DEFAULT_DOUBLE_PRESS_THRESHOLD, DoublePressDebouncer},
    error::{CoreError, Result as CoreResult},
    focus::{FocusProvider, FocusToken, NoopFocus},
    hotkey::{ActionLookup, HotkeyBackend, HotkeyRegistry, PressRouter},
    surface::{PresentationSurface, Severity},
    translation::{
        AUTO_DETECT, DEFAULT_TRANSLATION_TIMEOUT, LanguagePair, PendingTranslation,
        TranslationDispatcher, TranslationOrigin, TranslationRequest, TranslationResult,
        Translator,
    },
    workflow::{
        UiHandle, Workflow, WorkflowCommand, WorkflowDriver, WorkflowSnapshot, WorkflowState,
    },
};

#[cfg(test)]
mod tests;
