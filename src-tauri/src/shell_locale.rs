use std::env;

use crate::PANEL_LOCALE_ENV;

#[derive(Debug, Clone, Copy)]
pub struct MenuTexts {
    pub window_menu: &'static str,
    pub reload: &'static str,
    pub manage_menu: &'static str,
    pub edit_virtual_display: &'static str,
    pub uninstall_virtual_display: &'static str,
    pub restart_graphics_driver: &'static str,
    pub restart_sunshine_as_admin: &'static str,
    pub user_guide_menu: &'static str,
    pub download_sunshine: &'static str,
    pub join_qq_group: &'static str,
    pub user_guide: &'static str,
    pub tools_menu: &'static str,
    pub clipboard_sync: &'static str,
    pub stop_clock: &'static str,
    pub delay_test_clock: &'static str,
    pub gamepad_test: &'static str,
    pub about_menu: &'static str,
    pub about: &'static str,
    pub uninstall_confirm_message: &'static str,
    pub cancel_button: &'static str,
    pub confirm_button: &'static str,
    pub uninstall_completed_prefix: &'static str,
}

pub fn menu_texts_for_locale(locale: &str) -> MenuTexts {
    if locale == "zh-CN" {
        return MenuTexts {
            window_menu: "窗口",
            reload: "重新加载",
            manage_menu: "管理",
            edit_virtual_display: "编辑虚拟显示器分辨率",
            uninstall_virtual_display: "卸载虚拟显示器",
            restart_graphics_driver: "重启显卡驱动",
            restart_sunshine_as_admin: "以管理员身份重启 Sunshine",
            user_guide_menu: "使用教程",
            download_sunshine: "下载最新 Sunshine 基地版",
            join_qq_group: "加入 QQ 群",
            user_guide: "使用教程",
            tools_menu: "小工具",
            clipboard_sync: "剪贴板同步",
            stop_clock: "串流画面延迟测试秒表",
            delay_test_clock: "新一代延迟测试时钟 by Kile",
            gamepad_test: "手柄测试",
            about_menu: "关于",
            about: "关于",
            uninstall_confirm_message: "确定要卸载吗？重新安装 Sunshine 基地版即可恢复。",
            cancel_button: "取消",
            confirm_button: "确定",
            uninstall_completed_prefix: "虚拟显示器卸载完成：",
        };
    }

    MenuTexts {
        window_menu: "Window",
        reload: "Reload",
        manage_menu: "Manage",
        edit_virtual_display: "Edit Virtual Display Resolution",
        uninstall_virtual_display: "Uninstall Virtual Display",
        restart_graphics_driver: "Restart Graphics Driver",
        restart_sunshine_as_admin: "Restart Sunshine as Administrator",
        user_guide_menu: "User Guide",
        download_sunshine: "Download Latest Base Version of Sunshine",
        join_qq_group: "Join My QQ Group",
        user_guide: "User Guide",
        tools_menu: "Tools",
        clipboard_sync: "Clipboard Sync",
        stop_clock: "Timer for Streaming Screen Capture",
        delay_test_clock: "New Generation Delay Test Clock by Kile",
        gamepad_test: "Gamepad Testing",
        about_menu: "About",
        about: "About",
        uninstall_confirm_message:
            "Are you sure you want to uninstall? You can restore it by reinstalling the base version of Sunshine.",
        cancel_button: "Cancel",
        confirm_button: "Confirm",
        uninstall_completed_prefix: "Uninstallation of virtual display completed: ",
    }
}

pub fn resolve_shell_locale(default_shell_locale: &'static str) -> &'static str {
    for env_key in [PANEL_LOCALE_ENV, "LC_ALL", "LANG"] {
        if let Ok(value) = env::var(env_key) {
            if let Some(locale) = normalize_shell_locale(&value) {
                return locale;
            }
        }
    }

    default_shell_locale
}

pub(crate) fn normalize_shell_locale(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw == "zh-CN" {
        return Some("zh-CN");
    }
    if raw == "en-US" {
        return Some("en-US");
    }

    let lowered = raw.to_ascii_lowercase();
    if lowered.starts_with("zh") {
        return Some("zh-CN");
    }
    if lowered.starts_with("en") {
        return Some("en-US");
    }
    None
}
