//! Declarative description of the application menu.
//!
//! The template is plain data so it can be inspected without a running
//! webview; `menu_setup` turns it into native menus.

use crate::{menu_actions::MenuAction, shell_locale::MenuTexts, DesktopPlatform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredefinedItem {
    About,
    Services,
    Hide,
    HideOthers,
    ShowAll,
    Quit,
    Minimize,
    Maximize,
    CloseWindow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Submenu {
        label: String,
        items: Vec<MenuEntry>,
        /// macOS: register as the NSApp windows menu, which adds
        /// "Bring All to Front" and the open window list.
        windows_menu: bool,
    },
    Item {
        action: MenuAction,
        label: String,
    },
    Predefined(PredefinedItem),
    Separator,
}

impl MenuEntry {
    fn submenu(label: &str, items: Vec<MenuEntry>) -> Self {
        MenuEntry::Submenu {
            label: label.to_string(),
            items,
            windows_menu: false,
        }
    }

    fn item(action: MenuAction, label: &str) -> Self {
        MenuEntry::Item {
            action,
            label: label.to_string(),
        }
    }

    #[cfg(test)]
    fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Submenu { label, .. } | MenuEntry::Item { label, .. } => Some(label),
            MenuEntry::Predefined(_) | MenuEntry::Separator => None,
        }
    }
}

pub fn create_menu_template(
    platform: DesktopPlatform,
    app_name: &str,
    texts: &MenuTexts,
) -> Vec<MenuEntry> {
    let is_mac = platform.is_mac();
    let mut template = Vec::new();

    if is_mac {
        template.push(MenuEntry::submenu(
            app_name,
            vec![
                MenuEntry::Predefined(PredefinedItem::About),
                MenuEntry::Separator,
                MenuEntry::Predefined(PredefinedItem::Services),
                MenuEntry::Separator,
                MenuEntry::Predefined(PredefinedItem::Hide),
                MenuEntry::Predefined(PredefinedItem::HideOthers),
                MenuEntry::Predefined(PredefinedItem::ShowAll),
                MenuEntry::Separator,
                MenuEntry::Predefined(PredefinedItem::Quit),
            ],
        ));
    }

    let mut window_items = vec![
        MenuEntry::Predefined(PredefinedItem::Minimize),
        MenuEntry::Predefined(PredefinedItem::Maximize),
        MenuEntry::item(MenuAction::ReloadWindow, texts.reload),
    ];
    if is_mac {
        window_items.push(MenuEntry::Separator);
    } else {
        window_items.push(MenuEntry::Predefined(PredefinedItem::CloseWindow));
    }
    template.push(MenuEntry::Submenu {
        label: texts.window_menu.to_string(),
        items: window_items,
        windows_menu: is_mac,
    });

    template.push(MenuEntry::submenu(
        texts.manage_menu,
        vec![
            MenuEntry::item(MenuAction::EditVirtualDisplay, texts.edit_virtual_display),
            MenuEntry::item(
                MenuAction::UninstallVirtualDisplay,
                texts.uninstall_virtual_display,
            ),
            MenuEntry::Separator,
            MenuEntry::item(
                MenuAction::RestartGraphicsDriver,
                texts.restart_graphics_driver,
            ),
            MenuEntry::item(MenuAction::RestartSunshine, texts.restart_sunshine_as_admin),
        ],
    ));

    template.push(MenuEntry::submenu(
        texts.user_guide_menu,
        vec![
            MenuEntry::item(MenuAction::DownloadSunshine, texts.download_sunshine),
            MenuEntry::item(MenuAction::JoinQqGroup, texts.join_qq_group),
            MenuEntry::item(MenuAction::UserGuide, texts.user_guide),
        ],
    ));

    template.push(MenuEntry::submenu(
        texts.tools_menu,
        vec![
            MenuEntry::item(MenuAction::ClipboardSync, texts.clipboard_sync),
            MenuEntry::item(MenuAction::StopClock, texts.stop_clock),
            MenuEntry::item(MenuAction::DelayTestClock, texts.delay_test_clock),
            MenuEntry::item(MenuAction::GamepadTest, texts.gamepad_test),
        ],
    ));

    // Top-level entries must be submenus for the macOS menu bar.
    template.push(MenuEntry::submenu(
        texts.about_menu,
        vec![MenuEntry::item(MenuAction::About, texts.about)],
    ));

    template
}

pub fn collect_actions(template: &[MenuEntry]) -> Vec<MenuAction> {
    let mut actions = Vec::new();
    for entry in template {
        match entry {
            MenuEntry::Submenu { items, .. } => actions.extend(collect_actions(items)),
            MenuEntry::Item { action, .. } => actions.push(*action),
            MenuEntry::Predefined(_) | MenuEntry::Separator => {}
        }
    }
    actions
}
