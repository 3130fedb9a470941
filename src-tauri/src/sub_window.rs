use std::{
    sync::atomic::{AtomicU64, Ordering},
    thread,
    time::Duration,
};

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{window_actions, SubWindowContent, SubWindowOptions, SUB_WINDOW_LABEL_PREFIX};

static SUB_WINDOW_COUNTER: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_sub_window_label() -> String {
    let n = SUB_WINDOW_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{SUB_WINDOW_LABEL_PREFIX}-{n}")
}

pub(crate) fn webview_url_for(content: &SubWindowContent) -> WebviewUrl {
    match content {
        SubWindowContent::LocalPage(path) => WebviewUrl::App(path.clone()),
        SubWindowContent::RemoteUrl(url) => WebviewUrl::External(url.clone()),
    }
}

/// Creates a child window of the main window. Must not be called from the
/// event loop thread on Windows; use [`spawn_sub_window`] from menu handlers.
pub(crate) fn create_sub_window(
    app_handle: &AppHandle,
    content: &SubWindowContent,
    options: &SubWindowOptions,
) -> Result<WebviewWindow, String> {
    let label = next_sub_window_label();
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| app_handle.package_info().name.clone());

    let mut builder = WebviewWindowBuilder::new(app_handle, &label, webview_url_for(content))
        .title(title)
        .inner_size(options.width, options.height);
    if let Some(script) = &options.initialization_script {
        builder = builder.initialization_script(script.as_str());
    }
    if let Some(main_window) = window_actions::main_window(app_handle) {
        builder = builder
            .parent(&main_window)
            .map_err(|error| format!("Failed to attach sub window {label} to main window: {error}"))?;
    }

    builder
        .build()
        .map_err(|error| format!("Failed to create sub window {label}: {error}"))
}

pub(crate) fn spawn_sub_window<L>(
    app_handle: &AppHandle,
    content: SubWindowContent,
    options: SubWindowOptions,
    auto_close: Option<Duration>,
    log: L,
) where
    L: Fn(&str) + Send + 'static,
{
    let app_handle = app_handle.clone();
    tauri::async_runtime::spawn_blocking(move || {
        let window = match create_sub_window(&app_handle, &content, &options) {
            Ok(window) => window,
            Err(error) => {
                log(&error);
                return;
            }
        };
        log(&format!("opened sub window {}", window.label()));

        let Some(delay) = auto_close else {
            return;
        };
        thread::sleep(delay);
        if let Err(error) = window.close() {
            log(&format!(
                "failed to auto-close sub window {}: {}",
                window.label(),
                error
            ));
        }
    });
}
