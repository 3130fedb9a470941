use std::path::Path;

use crate::{
    DISPLAY_CLASS_GUID, SUNSHINE_EXECUTABLE, SUNSHINE_SERVICE_NAME, VIRTUAL_DISPLAY_HARDWARE_ID,
};

fn quoted(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

pub fn build_uninstall_virtual_display_command(virtual_driver_dir: &Path) -> String {
    [
        quoted(&virtual_driver_dir.join("nefconw.exe")),
        "--remove-device-node".to_string(),
        format!("--hardware-id {VIRTUAL_DISPLAY_HARDWARE_ID}"),
        format!("--class-guid {DISPLAY_CLASS_GUID}"),
    ]
    .join(" ")
}

pub fn build_restart_graphics_driver_command(tools_dir: &Path) -> String {
    quoted(&tools_dir.join("restart64.exe"))
}

pub fn build_restart_sunshine_command(sunshine_dir: &Path) -> String {
    [
        format!("net stop {SUNSHINE_SERVICE_NAME}"),
        format!("taskkill /IM {SUNSHINE_EXECUTABLE} /F"),
        format!("cd {}", quoted(sunshine_dir)),
        format!("./{SUNSHINE_EXECUTABLE}"),
    ]
    .join(" && ")
}
