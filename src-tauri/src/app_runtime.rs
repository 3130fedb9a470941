use crate::{
    append_desktop_log, logging, menu_setup, runtime_paths, window_actions, SunshinePaths,
    DESKTOP_LOG_FILE,
};

pub(crate) fn run() {
    let paths = SunshinePaths::resolve();

    append_desktop_log("desktop process starting");
    append_desktop_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(
            runtime_paths::default_packaged_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));
    append_desktop_log(&format!(
        "sunshine paths: sunshine={} tools={} virtual_driver={}",
        paths.sunshine_dir.display(),
        paths.tools_dir.display(),
        paths.virtual_driver_dir.display()
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            append_desktop_log("second instance launched, focusing main window");
            window_actions::focus_main_window(app, append_desktop_log);
        }))
        .plugin(tauri_plugin_dialog::init())
        .manage(paths)
        .setup(|app| {
            let app_handle = app.handle().clone();
            if let Err(error) = menu_setup::setup_application_menu(&app_handle) {
                append_desktop_log(&format!("failed to initialize application menu: {error}"));
            }
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
