pub const MENU_RELOAD_WINDOW: &str = "menu_reload_window";
pub const MENU_EDIT_VIRTUAL_DISPLAY: &str = "menu_edit_virtual_display";
pub const MENU_UNINSTALL_VIRTUAL_DISPLAY: &str = "menu_uninstall_virtual_display";
pub const MENU_RESTART_GRAPHICS_DRIVER: &str = "menu_restart_graphics_driver";
pub const MENU_RESTART_SUNSHINE: &str = "menu_restart_sunshine";
pub const MENU_DOWNLOAD_SUNSHINE: &str = "menu_download_sunshine";
pub const MENU_JOIN_QQ_GROUP: &str = "menu_join_qq_group";
pub const MENU_USER_GUIDE: &str = "menu_user_guide";
pub const MENU_CLIPBOARD_SYNC: &str = "menu_clipboard_sync";
pub const MENU_STOP_CLOCK: &str = "menu_stop_clock";
pub const MENU_DELAY_TEST_CLOCK: &str = "menu_delay_test_clock";
pub const MENU_GAMEPAD_TEST: &str = "menu_gamepad_test";
pub const MENU_ABOUT: &str = "menu_about";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ReloadWindow,
    EditVirtualDisplay,
    UninstallVirtualDisplay,
    RestartGraphicsDriver,
    RestartSunshine,
    DownloadSunshine,
    JoinQqGroup,
    UserGuide,
    ClipboardSync,
    StopClock,
    DelayTestClock,
    GamepadTest,
    About,
}

impl MenuAction {
    pub const ALL: [MenuAction; 13] = [
        MenuAction::ReloadWindow,
        MenuAction::EditVirtualDisplay,
        MenuAction::UninstallVirtualDisplay,
        MenuAction::RestartGraphicsDriver,
        MenuAction::RestartSunshine,
        MenuAction::DownloadSunshine,
        MenuAction::JoinQqGroup,
        MenuAction::UserGuide,
        MenuAction::ClipboardSync,
        MenuAction::StopClock,
        MenuAction::DelayTestClock,
        MenuAction::GamepadTest,
        MenuAction::About,
    ];

    pub fn menu_id(self) -> &'static str {
        match self {
            MenuAction::ReloadWindow => MENU_RELOAD_WINDOW,
            MenuAction::EditVirtualDisplay => MENU_EDIT_VIRTUAL_DISPLAY,
            MenuAction::UninstallVirtualDisplay => MENU_UNINSTALL_VIRTUAL_DISPLAY,
            MenuAction::RestartGraphicsDriver => MENU_RESTART_GRAPHICS_DRIVER,
            MenuAction::RestartSunshine => MENU_RESTART_SUNSHINE,
            MenuAction::DownloadSunshine => MENU_DOWNLOAD_SUNSHINE,
            MenuAction::JoinQqGroup => MENU_JOIN_QQ_GROUP,
            MenuAction::UserGuide => MENU_USER_GUIDE,
            MenuAction::ClipboardSync => MENU_CLIPBOARD_SYNC,
            MenuAction::StopClock => MENU_STOP_CLOCK,
            MenuAction::DelayTestClock => MENU_DELAY_TEST_CLOCK,
            MenuAction::GamepadTest => MENU_GAMEPAD_TEST,
            MenuAction::About => MENU_ABOUT,
        }
    }
}

pub fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_RELOAD_WINDOW => Some(MenuAction::ReloadWindow),
        MENU_EDIT_VIRTUAL_DISPLAY => Some(MenuAction::EditVirtualDisplay),
        MENU_UNINSTALL_VIRTUAL_DISPLAY => Some(MenuAction::UninstallVirtualDisplay),
        MENU_RESTART_GRAPHICS_DRIVER => Some(MenuAction::RestartGraphicsDriver),
        MENU_RESTART_SUNSHINE => Some(MenuAction::RestartSunshine),
        MENU_DOWNLOAD_SUNSHINE => Some(MenuAction::DownloadSunshine),
        MENU_JOIN_QQ_GROUP => Some(MenuAction::JoinQqGroup),
        MENU_USER_GUIDE => Some(MenuAction::UserGuide),
        MENU_CLIPBOARD_SYNC => Some(MenuAction::ClipboardSync),
        MENU_STOP_CLOCK => Some(MenuAction::StopClock),
        MENU_DELAY_TEST_CLOCK => Some(MenuAction::DelayTestClock),
        MENU_GAMEPAD_TEST => Some(MenuAction::GamepadTest),
        MENU_ABOUT => Some(MenuAction::About),
        _ => None,
    }
}
