pub const MAIN_WINDOW_LABEL: &str = "main";
pub const SUB_WINDOW_LABEL_PREFIX: &str = "sub";
pub const DEFAULT_SHELL_LOCALE: &str = "en-US";

pub const DESKTOP_LOG_FILE: &str = "desktop.log";
pub const PANEL_ROOT_DIR_NAME: &str = ".sunshine-control-panel";

pub const PANEL_ROOT_ENV: &str = "SUNSHINE_PANEL_ROOT";
pub const PANEL_LOCALE_ENV: &str = "SUNSHINE_PANEL_LOCALE";
pub const SUNSHINE_PATH_ENV: &str = "SUNSHINE_PATH";
pub const SUNSHINE_TOOLS_PATH_ENV: &str = "SUNSHINE_TOOLS_PATH";
pub const VIRTUAL_DRIVER_PATH_ENV: &str = "SUNSHINE_VIRTUAL_DRIVER_PATH";

pub const DEFAULT_SUNSHINE_PATH: &str = r"C:\Program Files\Sunshine";

/// Name shown by the OS privilege prompt.
pub const ELEVATION_PROMPT_NAME: &str = "Sunshine Control Panel";

pub const VIRTUAL_DISPLAY_HARDWARE_ID: &str = r"ROOT\iddsampledriver";
pub const DISPLAY_CLASS_GUID: &str = "4d36e968-e325-11ce-bfc1-08002be10318";
pub const SUNSHINE_SERVICE_NAME: &str = "sunshineservice";
pub const SUNSHINE_EXECUTABLE: &str = "sunshine.exe";

pub const SUNSHINE_RELEASES_URL: &str = "https://github.com/qiin2333/Sunshine/releases/tag/alpha";
pub const QQ_GROUP_URL: &str = "https://qm.qq.com/q/s3QnqbxvFK";
pub const USER_GUIDE_URL: &str = "https://docs.qq.com/aio/DSGdQc3htbFJjSFdO";
pub const CLIPBOARD_SYNC_URL: &str = "https://gcopy.rutron.net/zh";
pub const DELAY_TEST_CLOCK_URL: &str = "https://yangkile.github.io/D-lay/";
pub const GAMEPAD_TEST_URL: &str = "https://hardwaretester.com/gamepad";

pub const VDD_PAGE: &str = "vdd/index.html";
pub const STOP_CLOCK_PAGE: &str = "stop-clock-canvas/index.html";
pub const ABOUT_PAGE: &str = "about/index.html";

pub const QQ_GROUP_WINDOW_CLOSE_DELAY_MS: u64 = 3000;

pub const ABOUT_ICON_URL: &str =
    "https://raw.gitmirror.com/qiin2333/qiin.github.io/assets/img/109527119_p1.png";
pub const ABOUT_PRODUCT_NAME: &str = "Sunshine Base Version";
pub const ABOUT_COPYRIGHT: &str = "Copyright (c) 2023 Qiin";
