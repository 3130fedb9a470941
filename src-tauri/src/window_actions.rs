use tauri::{AppHandle, Manager, WebviewWindow};

use crate::MAIN_WINDOW_LABEL;

pub fn main_window(app_handle: &AppHandle) -> Option<WebviewWindow> {
    app_handle.get_webview_window(MAIN_WINDOW_LABEL)
}

/// Focused webview window, falling back to the main window.
pub fn focused_window(app_handle: &AppHandle) -> Option<WebviewWindow> {
    app_handle
        .webview_windows()
        .into_values()
        .find(|window| window.is_focused().unwrap_or(false))
        .or_else(|| main_window(app_handle))
}

pub fn focus_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle) else {
        log("focus_main_window skipped: main window not found");
        return;
    };

    if let Ok(true) = window.is_minimized() {
        if let Err(error) = window.unminimize() {
            log(&format!("failed to unminimize main window: {error}"));
        }
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}

pub fn reload_focused_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = focused_window(app_handle) else {
        log("reload skipped: no webview window available");
        return;
    };

    if let Err(error) = window.reload() {
        log(&format!(
            "failed to reload window {}: {}",
            window.label(),
            error
        ));
    }
}

pub fn close_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = main_window(app_handle) else {
        log("close_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.close() {
        log(&format!("failed to close main window: {error}"));
    }
}
