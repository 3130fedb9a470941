#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod admin_commands;
mod app_constants;
mod app_helpers;
mod app_runtime;
mod app_types;
mod dialogs;
mod elevated_command;
mod external_url;
mod logging;
mod menu_actions;
mod menu_handler;
mod menu_setup;
mod menu_template;
mod runtime_paths;
mod shell_locale;
mod sub_window;
mod window_actions;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{append_admin_log, append_desktop_log, append_menu_log};
pub(crate) use app_types::{
    AboutInfo, DesktopPlatform, ElevatedExit, SubWindowContent, SubWindowOptions,
};
pub(crate) use runtime_paths::SunshinePaths;

fn main() {
    app_runtime::run();
}
