//! Transka: hotkey-driven translation from the system tray.

mod app;
mod command_translator;
mod config;
mod error;
mod hotkey_backend;
mod hotkey_handler;
mod logging;
mod output_handler;
mod paste_shortcut;
mod platform_focus;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_icon_state;
mod tray_manager;
mod tray_surface;

pub(crate) use {
    app::App,
    command_translator::CommandTranslator,
    error::{AppError, Result as AppResult},
    hotkey_backend::GlobalHotkeyBackend,
    hotkey_handler::HotkeyHandler,
    output_handler::OutputHandler,
    paste_shortcut::PasteShortcut,
    platform_focus::PlatformFocus,
    tray_command::TrayCommand,
    tray_icon_state::TrayIconState,
    tray_manager::TrayManager,
    tray_surface::TraySurface,
};

use crate::config::{Config, HotkeysConfig};

use std::sync::Arc;

use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::watch;
use tracing::{error, info, warn};
use transka_core::{
    DoublePressDebouncer, HotkeyRegistry, PressRouter, TranslationDispatcher, UiHandle, Workflow,
    WorkflowDriver,
};

/// Bind every configured hotkey, logging the ones that fail.
fn bind_hotkeys(registry: &mut HotkeyRegistry<GlobalHotkeyBackend>, hotkeys: &HotkeysConfig) {
    let bindings = hotkeys.bindings();
    let failures = registry.bind_all(
        bindings
            .iter()
            .map(|(action, spec)| (*action, spec.as_str())),
    );
    if failures.is_empty() {
        info!("All hotkeys bound");
    } else {
        warn!(failed = failures.len(), "Some hotkeys could not be bound");
    }
}

/// Application entry point.
fn main() {
    let log_guard = logging::init();

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new() {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    // Persists across event loop iterations; dropping it unregisters the hotkeys.
    let mut hotkey_registry: Option<HotkeyRegistry<GlobalHotkeyBackend>> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => {
                match cmd {
                    TrayCommand::SetState(state) => {
                        if let Err(e) = tray_manager.update_state(state) {
                            error!(error = ?e, "Failed to update tray icon");
                        }
                    }
                    TrayCommand::SetTooltip(text) => {
                        if let Err(e) = tray_manager.set_tooltip(&text) {
                            error!(error = ?e, "Failed to update tray tooltip");
                        }
                    }
                    TrayCommand::Rebind(hotkeys) => {
                        if let Some(registry) = hotkey_registry.as_mut() {
                            bind_hotkeys(registry, &hotkeys);
                        }
                    }
                    TrayCommand::Shutdown => {
                        if let Some(registry) = hotkey_registry.as_mut() {
                            registry.unbind_all();
                        }
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
                return;
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                let config = match Config::load() {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                if let Err(e) = config.validate() {
                    error!("Invalid config: {:?}", e);
                    std::process::exit(1);
                }

                let config_path = match Config::path() {
                    Ok(p) => p,
                    Err(e) => {
                        error!("Failed to locate config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                if !config.translator.is_configured() {
                    warn!(config_path = ?config_path, "No translator command configured");
                }

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                // Register hotkeys on the main thread: tao's event loop pumps
                // the Windows messages needed for WM_HOTKEY delivery.
                let mut registry = match GlobalHotkeyBackend::new() {
                    Ok(backend) => HotkeyRegistry::new(backend),
                    Err(e) => {
                        error!("Failed to create hotkey manager: {:?}", e);
                        std::process::exit(1);
                    }
                };
                bind_hotkeys(&mut registry, &config.hotkeys);
                let lookup = registry.lookup();
                hotkey_registry = Some(registry);

                let (ui, commands) = UiHandle::channel();
                let (shutdown_tx, shutdown_rx) = watch::channel(false);
                let (behaviour_tx, behaviour_rx) = watch::channel(config.behavior.clone());
                let (translator_tx, translator_rx) = watch::channel(config.translator.clone());

                let debouncer = Arc::new(DoublePressDebouncer::new(
                    config.workflow.double_press_threshold(),
                ));
                let router = PressRouter::new(
                    lookup,
                    Arc::clone(&debouncer),
                    config.workflow.double_press_actions.iter().copied(),
                    ui.clone(),
                );

                let tray_proxy = tray_proxy.clone();
                let menu_ids = tray_manager.menu_ids().clone();

                // Spawn tokio runtime on separate thread.
                // TrayManager and the hotkey registry stay on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let output_handler = match OutputHandler::new(behaviour_rx.clone()) {
                            Ok(oh) => oh,
                            Err(e) => {
                                error!("Failed to create OutputHandler: {:?}", e);
                                std::process::exit(1);
                            }
                        };

                        let languages = config.languages.pair();
                        let surface =
                            TraySurface::new(languages.clone(), tray_proxy.clone(), behaviour_rx);
                        let workflow =
                            Workflow::new(surface, output_handler, PlatformFocus, languages);
                        let snapshots = workflow.subscribe();

                        let dispatcher = TranslationDispatcher::new(
                            Arc::new(CommandTranslator::new(
                                translator_rx,
                                config.workflow.translation_timeout(),
                            )),
                            ui.clone(),
                            config.workflow.translation_timeout(),
                        );
                        let driver = WorkflowDriver::new(workflow, dispatcher, commands);
                        let hotkey_handler = HotkeyHandler::new(router);

                        let app = App {
                            tray_proxy,
                            config,
                            config_path,
                            ui,
                            snapshots,
                            debouncer,
                            behaviour_tx,
                            translator_tx,
                            shutdown_tx,
                            menu_ids,
                        };

                        tokio::join!(
                            async {
                                if let Err(e) = hotkey_handler.run(shutdown_rx).await {
                                    error!(error = ?e, "Hotkey handler error");
                                }
                            },
                            async {
                                if let Err(e) = driver.run().await {
                                    error!(error = ?e, "Workflow driver error");
                                }
                            },
                            async {
                                if let Err(e) = app.run().await {
                                    error!(error = ?e, "App error");
                                }
                            }
                        );
                    });
                });
            }
            _ => {}
        }

        // Keep the registry and log writer alive in the closure for the app's lifetime.
        let _ = (&hotkey_registry, &log_guard);
    });
}
