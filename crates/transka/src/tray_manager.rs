//! System tray icon with state-based updates.
//!
//! Manages a system tray icon that mirrors the workflow state and a context
//! menu for driving the workflow without hotkeys.

use crate::{AppError, AppResult, TrayIconState};

use std::panic::Location;

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use tracing::{info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const ICON_SIZE: u32 = 64;

/// Longest tooltip most platforms display in full.
const MAX_TOOLTIP_CHARS: usize = 120;

/// Ids of the tray menu entries, handed to the async side.
#[derive(Debug, Clone)]
pub struct TrayMenuIds {
    /// Reveal the surface.
    pub show: MenuId,
    /// Hide the surface.
    pub hide: MenuId,
    /// Translate the current input without advancing the cycle.
    pub translate: MenuId,
    /// Open the config file in the default editor.
    pub settings: MenuId,
    /// Re-read the config file and apply it.
    pub reload: MenuId,
    /// Quit.
    pub exit: MenuId,
}

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    menu_ids: TrayMenuIds,
}

impl TrayManager {
    /// Create a new tray manager with initial state.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let show_item = MenuItem::new("Show", true, None);
        let hide_item = MenuItem::new("Hide", true, None);
        let translate_item = MenuItem::new("Translate now", true, None);
        let settings_item = MenuItem::new("Open settings", true, None);
        let reload_item = MenuItem::new("Reload settings", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let menu_ids = TrayMenuIds {
            show: show_item.id().clone(),
            hide: hide_item.id().clone(),
            translate: translate_item.id().clone(),
            settings: settings_item.id().clone(),
            reload: reload_item.id().clone(),
            exit: exit_item.id().clone(),
        };

        menu.append_items(&[
            &show_item,
            &hide_item,
            &translate_item,
            &PredefinedMenuItem::separator(),
            &settings_item,
            &reload_item,
            &PredefinedMenuItem::separator(),
            &exit_item,
        ])
        .map_err(|e| AppError::TrayError {
            reason: format!("Failed to build tray menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip("Transka")
            .with_menu(Box::new(menu))
            .with_icon(Self::render_icon(TrayIconState::Hidden)?)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            menu_ids,
        })
    }

    /// Swap the icon for `state`. The tooltip belongs to the surface.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: TrayIconState) -> AppResult<()> {
        self.tray_icon
            .set_icon(Some(Self::render_icon(state)?))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Replace the tooltip, shortening it to what the platform can show.
    #[track_caller]
    pub fn set_tooltip(&mut self, text: &str) -> AppResult<()> {
        self.tray_icon
            .set_tooltip(Some(truncate_tooltip(text)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Ids of the menu entries.
    pub fn menu_ids(&self) -> &TrayMenuIds {
        &self.menu_ids
    }

    /// Draw the state icon: a tinted square with a white inset.
    #[track_caller]
    fn render_icon(state: TrayIconState) -> AppResult<Icon> {
        let [r, g, b] = state.tint();
        let inset = ICON_SIZE / 4..ICON_SIZE * 3 / 4;

        let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
            if inset.contains(&x) && inset.contains(&y) {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([r, g, b, 255])
            }
        });

        Icon::from_rgba(rgba.into_raw(), ICON_SIZE, ICON_SIZE).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Shorten `text` to the tooltip limit on a char boundary.
pub(crate) fn truncate_tooltip(text: &str) -> String {
    if text.chars().count() <= MAX_TOOLTIP_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_TOOLTIP_CHARS - 1).collect();
    short.push('…');
    short
}
