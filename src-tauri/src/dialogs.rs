use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::{window_actions, AboutInfo};

/// Asks a yes/no question attached to the main window. `on_answer` runs once
/// the user picks a button; `true` means the confirm button.
pub(crate) fn confirm<F>(
    app_handle: &AppHandle,
    message: &str,
    cancel_label: &str,
    confirm_label: &str,
    on_answer: F,
) where
    F: FnOnce(bool) + Send + 'static,
{
    let mut builder = app_handle
        .dialog()
        .message(message)
        .kind(MessageDialogKind::Info)
        .buttons(MessageDialogButtons::OkCancelCustom(
            confirm_label.to_string(),
            cancel_label.to_string(),
        ));
    if let Some(main_window) = window_actions::main_window(app_handle) {
        builder = builder.parent(&main_window);
    }
    builder.show(on_answer);
}

pub(crate) fn show_message(app_handle: &AppHandle, message: &str) {
    let mut builder = app_handle
        .dialog()
        .message(message)
        .kind(MessageDialogKind::Info)
        .buttons(MessageDialogButtons::Ok);
    if let Some(main_window) = window_actions::main_window(app_handle) {
        builder = builder.parent(&main_window);
    }
    builder.show(|_| {});
}

pub(crate) fn about_initialization_script(info: &AboutInfo) -> Result<String, String> {
    let payload = serde_json::to_string(info)
        .map_err(|error| format!("Failed to serialize about info: {error}"))?;
    Ok(format!("window.__SUNSHINE_ABOUT__ = {payload};"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_initialization_script_assigns_json_payload() {
        let script = about_initialization_script(&AboutInfo {
            icon_path: "https://example.com/icon.png".to_string(),
            product_name: "Sunshine \"Base\"".to_string(),
            copyright: "Copyright".to_string(),
        })
        .expect("script should build");

        assert_eq!(
            script,
            r#"window.__SUNSHINE_ABOUT__ = {"iconPath":"https://example.com/icon.png","productName":"Sunshine \"Base\"","copyright":"Copyright"};"#
        );
    }
}
