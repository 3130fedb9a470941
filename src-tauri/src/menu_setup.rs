use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle, Manager, Wry,
};

use crate::{
    append_desktop_log,
    menu_handler,
    menu_template::{self, MenuEntry, PredefinedItem},
    shell_locale, DesktopPlatform, DEFAULT_SHELL_LOCALE,
};

fn predefined_item(
    app_handle: &AppHandle,
    item: PredefinedItem,
) -> tauri::Result<PredefinedMenuItem<Wry>> {
    match item {
        PredefinedItem::About => PredefinedMenuItem::about(app_handle, None, None),
        PredefinedItem::Services => PredefinedMenuItem::services(app_handle, None),
        PredefinedItem::Hide => PredefinedMenuItem::hide(app_handle, None),
        PredefinedItem::HideOthers => PredefinedMenuItem::hide_others(app_handle, None),
        PredefinedItem::ShowAll => PredefinedMenuItem::show_all(app_handle, None),
        PredefinedItem::Quit => PredefinedMenuItem::quit(app_handle, None),
        PredefinedItem::Minimize => PredefinedMenuItem::minimize(app_handle, None),
        PredefinedItem::Maximize => PredefinedMenuItem::maximize(app_handle, None),
        PredefinedItem::CloseWindow => PredefinedMenuItem::close_window(app_handle, None),
    }
}

fn append_entry(
    app_handle: &AppHandle,
    submenu: &Submenu<Wry>,
    entry: &MenuEntry,
) -> Result<(), String> {
    match entry {
        MenuEntry::Submenu {
            label,
            items,
            windows_menu,
        } => {
            let nested = build_submenu(app_handle, label, items, *windows_menu)?;
            submenu.append(&nested)
        }
        MenuEntry::Item { action, label } => {
            let item = MenuItem::with_id(app_handle, action.menu_id(), label, true, None::<&str>)
                .map_err(|error| format!("Failed to create menu item {label}: {error}"))?;
            submenu.append(&item)
        }
        MenuEntry::Predefined(kind) => {
            let item = predefined_item(app_handle, *kind)
                .map_err(|error| format!("Failed to create {kind:?} menu item: {error}"))?;
            submenu.append(&item)
        }
        MenuEntry::Separator => {
            let separator = PredefinedMenuItem::separator(app_handle)
                .map_err(|error| format!("Failed to create separator menu item: {error}"))?;
            submenu.append(&separator)
        }
    }
    .map_err(|error| format!("Failed to append menu entry: {error}"))
}

fn build_submenu(
    app_handle: &AppHandle,
    label: &str,
    items: &[MenuEntry],
    windows_menu: bool,
) -> Result<Submenu<Wry>, String> {
    let submenu = Submenu::new(app_handle, label, true)
        .map_err(|error| format!("Failed to create submenu {label}: {error}"))?;
    for entry in items {
        append_entry(app_handle, &submenu, entry)?;
    }

    #[cfg(target_os = "macos")]
    {
        if windows_menu {
            submenu
                .set_as_windows_menu_for_nsapp()
                .map_err(|error| format!("Failed to register {label} as windows menu: {error}"))?;
        }
    }
    #[cfg(not(target_os = "macos"))]
    let _ = windows_menu;

    Ok(submenu)
}

pub fn build_menu(app_handle: &AppHandle, template: &[MenuEntry]) -> Result<Menu<Wry>, String> {
    let menu = Menu::new(app_handle)
        .map_err(|error| format!("Failed to create application menu: {error}"))?;

    for entry in template {
        let MenuEntry::Submenu {
            label,
            items,
            windows_menu,
        } = entry
        else {
            return Err(format!("Top-level menu entry must be a submenu: {entry:?}"));
        };
        let submenu = build_submenu(app_handle, label, items, *windows_menu)?;
        menu.append(&submenu)
            .map_err(|error| format!("Failed to append submenu {label}: {error}"))?;
    }
    Ok(menu)
}

pub fn setup_application_menu(app_handle: &AppHandle) -> Result<(), String> {
    let locale = shell_locale::resolve_shell_locale(DEFAULT_SHELL_LOCALE);
    let texts = shell_locale::menu_texts_for_locale(locale);
    let app_name = app_handle.package_info().name.clone();
    let template =
        menu_template::create_menu_template(DesktopPlatform::current(), &app_name, &texts);

    let menu = build_menu(app_handle, &template)?;
    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install application menu: {error}"))?;
    app_handle.on_menu_event(|app, event| menu_handler::handle_menu_event(app, event.id().as_ref()));

    append_desktop_log(&format!(
        "application menu installed: locale={} actions={}",
        locale,
        menu_template::collect_actions(&template).len()
    ));
    Ok(())
}
