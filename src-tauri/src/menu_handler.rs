use std::{path::PathBuf, time::Duration};

use tauri::{AppHandle, Manager};
use url::Url;

use crate::{
    admin_commands, append_admin_log, append_menu_log, dialogs, elevated_command, external_url,
    menu_actions::{self, MenuAction},
    shell_locale::{self, MenuTexts},
    sub_window, window_actions, AboutInfo, ElevatedExit, SubWindowContent, SubWindowOptions,
    SunshinePaths, ABOUT_COPYRIGHT, ABOUT_ICON_URL, ABOUT_PAGE, ABOUT_PRODUCT_NAME,
    CLIPBOARD_SYNC_URL, DEFAULT_SHELL_LOCALE, DELAY_TEST_CLOCK_URL, GAMEPAD_TEST_URL,
    QQ_GROUP_URL, QQ_GROUP_WINDOW_CLOSE_DELAY_MS, STOP_CLOCK_PAGE, SUNSHINE_RELEASES_URL,
    USER_GUIDE_URL, VDD_PAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AfterElevatedExit {
    Nothing,
    CloseMainWindow,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ActionPlan {
    ReloadFocusedWindow,
    OpenSubWindow {
        content: SubWindowContent,
        options: SubWindowOptions,
        auto_close: Option<Duration>,
    },
    OpenExternal(Url),
    ConfirmUninstallVirtualDisplay {
        command: String,
    },
    RunElevated {
        command: String,
        after_exit: AfterElevatedExit,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UninstallDecision {
    Cancelled,
    RunElevated(String),
}

pub(crate) fn decide_uninstall(confirmed: bool, command: String) -> UninstallDecision {
    if confirmed {
        UninstallDecision::RunElevated(command)
    } else {
        UninstallDecision::Cancelled
    }
}

pub(crate) fn uninstall_completed_message(texts: &MenuTexts, exit: ElevatedExit) -> String {
    format!(
        "{}{}",
        texts.uninstall_completed_prefix,
        exit.describe_code()
    )
}

fn external(raw_url: &str) -> Result<ActionPlan, String> {
    external_url::browser_url(raw_url).map(ActionPlan::OpenExternal)
}

fn remote_content(raw_url: &str) -> Result<SubWindowContent, String> {
    Url::parse(raw_url)
        .map(SubWindowContent::RemoteUrl)
        .map_err(|error| format!("Invalid URL {raw_url}: {error}"))
}

fn remote_sub_window(raw_url: &str) -> Result<ActionPlan, String> {
    Ok(ActionPlan::OpenSubWindow {
        content: remote_content(raw_url)?,
        options: SubWindowOptions::default(),
        auto_close: None,
    })
}

fn local_sub_window(page: &str, options: SubWindowOptions) -> ActionPlan {
    ActionPlan::OpenSubWindow {
        content: SubWindowContent::LocalPage(PathBuf::from(page)),
        options,
        auto_close: None,
    }
}

fn about_sub_window() -> Result<ActionPlan, String> {
    let script = dialogs::about_initialization_script(&AboutInfo {
        icon_path: ABOUT_ICON_URL.to_string(),
        product_name: ABOUT_PRODUCT_NAME.to_string(),
        copyright: ABOUT_COPYRIGHT.to_string(),
    })?;
    Ok(local_sub_window(
        ABOUT_PAGE,
        SubWindowOptions {
            width: 400.0,
            height: 400.0,
            title: Some(format!("About {ABOUT_PRODUCT_NAME}")),
            initialization_script: Some(script),
        },
    ))
}

pub(crate) fn plan_for_action(
    action: MenuAction,
    paths: &SunshinePaths,
) -> Result<ActionPlan, String> {
    let plan = match action {
        MenuAction::ReloadWindow => ActionPlan::ReloadFocusedWindow,
        MenuAction::EditVirtualDisplay => local_sub_window(VDD_PAGE, SubWindowOptions::default()),
        MenuAction::UninstallVirtualDisplay => ActionPlan::ConfirmUninstallVirtualDisplay {
            command: admin_commands::build_uninstall_virtual_display_command(
                &paths.virtual_driver_dir,
            ),
        },
        MenuAction::RestartGraphicsDriver => ActionPlan::RunElevated {
            command: admin_commands::build_restart_graphics_driver_command(&paths.tools_dir),
            after_exit: AfterElevatedExit::Nothing,
        },
        MenuAction::RestartSunshine => ActionPlan::RunElevated {
            command: admin_commands::build_restart_sunshine_command(&paths.sunshine_dir),
            after_exit: AfterElevatedExit::CloseMainWindow,
        },
        MenuAction::DownloadSunshine => external(SUNSHINE_RELEASES_URL)?,
        MenuAction::JoinQqGroup => ActionPlan::OpenSubWindow {
            content: remote_content(QQ_GROUP_URL)?,
            options: SubWindowOptions::default(),
            auto_close: Some(Duration::from_millis(QQ_GROUP_WINDOW_CLOSE_DELAY_MS)),
        },
        MenuAction::UserGuide => external(USER_GUIDE_URL)?,
        MenuAction::ClipboardSync => remote_sub_window(CLIPBOARD_SYNC_URL)?,
        MenuAction::StopClock => {
            local_sub_window(STOP_CLOCK_PAGE, SubWindowOptions::sized(1080.0, 600.0))
        }
        MenuAction::DelayTestClock => remote_sub_window(DELAY_TEST_CLOCK_URL)?,
        MenuAction::GamepadTest => external(GAMEPAD_TEST_URL)?,
        MenuAction::About => about_sub_window()?,
    };
    Ok(plan)
}

fn run_action_plan(app_handle: &AppHandle, plan: ActionPlan) {
    match plan {
        ActionPlan::ReloadFocusedWindow => {
            window_actions::reload_focused_window(app_handle, append_menu_log)
        }
        ActionPlan::OpenSubWindow {
            content,
            options,
            auto_close,
        } => sub_window::spawn_sub_window(app_handle, content, options, auto_close, append_menu_log),
        ActionPlan::OpenExternal(url) => {
            if let Err(error) = external_url::open_external_url(&url) {
                append_menu_log(&format!("failed to open {url}: {error}"));
            }
        }
        ActionPlan::ConfirmUninstallVirtualDisplay { command } => {
            let texts = shell_locale::menu_texts_for_locale(shell_locale::resolve_shell_locale(
                DEFAULT_SHELL_LOCALE,
            ));
            let app_handle_cloned = app_handle.clone();
            dialogs::confirm(
                app_handle,
                texts.uninstall_confirm_message,
                texts.cancel_button,
                texts.confirm_button,
                move |confirmed| match decide_uninstall(confirmed, command) {
                    UninstallDecision::Cancelled => {
                        append_admin_log("virtual display uninstall cancelled");
                    }
                    UninstallDecision::RunElevated(command) => {
                        elevated_command::run_command_as_admin(
                            &command,
                            append_admin_log,
                            move |exit| {
                                dialogs::show_message(
                                    &app_handle_cloned,
                                    &uninstall_completed_message(&texts, exit),
                                );
                            },
                        );
                    }
                },
            );
        }
        ActionPlan::RunElevated {
            command,
            after_exit: AfterElevatedExit::Nothing,
        } => elevated_command::exec_elevated(&command, append_admin_log),
        ActionPlan::RunElevated {
            command,
            after_exit: AfterElevatedExit::CloseMainWindow,
        } => {
            let app_handle_cloned = app_handle.clone();
            elevated_command::run_command_as_admin(&command, append_admin_log, move |_| {
                window_actions::close_main_window(&app_handle_cloned, append_admin_log);
            });
        }
    }
}

pub fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let Some(action) = menu_actions::action_from_menu_id(menu_id) else {
        return;
    };
    append_menu_log(&format!("menu action requested: {menu_id}"));

    let paths = app_handle
        .try_state::<SunshinePaths>()
        .map(|state| state.inner().clone())
        .unwrap_or_else(SunshinePaths::resolve);
    match plan_for_action(action, &paths) {
        Ok(plan) => run_action_plan(app_handle, plan),
        Err(error) => append_menu_log(&format!("failed to prepare {menu_id}: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_paths() -> SunshinePaths {
        SunshinePaths {
            sunshine_dir: PathBuf::from("sunshine"),
            tools_dir: PathBuf::from("sunshine").join("tools"),
            virtual_driver_dir: PathBuf::from("sunshine").join("tools").join("vdd"),
        }
    }

    fn plan(action: MenuAction) -> ActionPlan {
        plan_for_action(action, &test_paths()).expect("plan should build")
    }

    #[test]
    fn every_menu_action_has_a_plan() {
        for action in MenuAction::ALL {
            assert!(plan_for_action(action, &test_paths()).is_ok(), "{action:?}");
        }
    }

    #[test]
    fn browser_actions_open_their_literal_urls() {
        for (action, url) in [
            (
                MenuAction::DownloadSunshine,
                "https://github.com/qiin2333/Sunshine/releases/tag/alpha",
            ),
            (MenuAction::UserGuide, "https://docs.qq.com/aio/DSGdQc3htbFJjSFdO"),
            (MenuAction::GamepadTest, "https://hardwaretester.com/gamepad"),
        ] {
            assert_eq!(
                plan(action),
                ActionPlan::OpenExternal(Url::parse(url).unwrap())
            );
        }
    }

    #[test]
    fn uninstall_runs_only_after_confirmation() {
        assert_eq!(
            decide_uninstall(true, "remove".to_string()),
            UninstallDecision::RunElevated("remove".to_string())
        );
        assert_eq!(
            decide_uninstall(false, "remove".to_string()),
            UninstallDecision::Cancelled
        );
    }

    #[test]
    fn uninstall_completed_message_reports_exit_code() {
        let texts = shell_locale::menu_texts_for_locale("en-US");
        assert_eq!(
            uninstall_completed_message(&texts, ElevatedExit { code: Some(0) }),
            "Uninstallation of virtual display completed: 0"
        );
        assert_eq!(
            uninstall_completed_message(&texts, ElevatedExit::unknown()),
            "Uninstallation of virtual display completed: unknown"
        );
    }

    #[test]
    fn qq_group_window_closes_after_three_seconds() {
        let ActionPlan::OpenSubWindow {
            content,
            options,
            auto_close,
        } = plan(MenuAction::JoinQqGroup)
        else {
            panic!("expected a sub window");
        };
        assert_eq!(
            content,
            SubWindowContent::RemoteUrl(Url::parse("https://qm.qq.com/q/s3QnqbxvFK").unwrap())
        );
        assert_eq!(options, SubWindowOptions::default());
        assert_eq!(auto_close, Some(Duration::from_millis(3000)));
    }

    #[test]
    fn remote_tool_windows_stay_open() {
        for (action, url) in [
            (MenuAction::ClipboardSync, "https://gcopy.rutron.net/zh"),
            (MenuAction::DelayTestClock, "https://yangkile.github.io/D-lay/"),
        ] {
            assert_eq!(
                plan(action),
                ActionPlan::OpenSubWindow {
                    content: SubWindowContent::RemoteUrl(Url::parse(url).unwrap()),
                    options: SubWindowOptions::default(),
                    auto_close: None,
                }
            );
        }
    }

    #[test]
    fn local_pages_use_expected_window_sizes() {
        assert_eq!(
            plan(MenuAction::EditVirtualDisplay),
            ActionPlan::OpenSubWindow {
                content: SubWindowContent::LocalPage(PathBuf::from("vdd/index.html")),
                options: SubWindowOptions::default(),
                auto_close: None,
            }
        );
        assert_eq!(
            plan(MenuAction::StopClock),
            ActionPlan::OpenSubWindow {
                content: SubWindowContent::LocalPage(PathBuf::from(
                    "stop-clock-canvas/index.html"
                )),
                options: SubWindowOptions::sized(1080.0, 600.0),
                auto_close: None,
            }
        );
    }

    #[test]
    fn admin_actions_run_the_built_commands() {
        let paths = test_paths();
        assert_eq!(
            plan(MenuAction::UninstallVirtualDisplay),
            ActionPlan::ConfirmUninstallVirtualDisplay {
                command: admin_commands::build_uninstall_virtual_display_command(
                    &paths.virtual_driver_dir
                ),
            }
        );
        assert_eq!(
            plan(MenuAction::RestartGraphicsDriver),
            ActionPlan::RunElevated {
                command: admin_commands::build_restart_graphics_driver_command(&paths.tools_dir),
                after_exit: AfterElevatedExit::Nothing,
            }
        );
        assert_eq!(
            plan(MenuAction::RestartSunshine),
            ActionPlan::RunElevated {
                command: admin_commands::build_restart_sunshine_command(&paths.sunshine_dir),
                after_exit: AfterElevatedExit::CloseMainWindow,
            }
        );
    }

    #[test]
    fn about_window_injects_product_details() {
        let ActionPlan::OpenSubWindow {
            content, options, ..
        } = plan(MenuAction::About)
        else {
            panic!("expected a sub window");
        };
        assert_eq!(content, SubWindowContent::LocalPage(PathBuf::from("about/index.html")));
        let script = options.initialization_script.expect("about script");
        assert!(script.contains("\"productName\":\"Sunshine Base Version\""));
        assert!(script.contains("\"copyright\":\"Copyright (c) 2023 Qiin\""));
        assert!(script.contains("109527119_p1.png"));
    }

    #[test]
    fn reload_targets_the_focused_window() {
        assert_eq!(plan(MenuAction::ReloadWindow), ActionPlan::ReloadFocusedWindow);
    }
}
