use crate::{logging, runtime_paths, DESKTOP_LOG_FILE};

fn append_log(category: &str, message: &str) {
    let log_path = logging::resolve_desktop_log_path(
        runtime_paths::default_packaged_root_dir(),
        DESKTOP_LOG_FILE,
    );
    logging::append_categorized_log(&log_path, category, message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_log("desktop", message);
}

pub(crate) fn append_menu_log(message: &str) {
    append_log("menu", message);
}

pub(crate) fn append_admin_log(message: &str) {
    append_log("admin", message);
}
