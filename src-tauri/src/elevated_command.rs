//! Runs shell commands through the platform's privilege prompt.
//!
//! Windows goes through UAC via `Start-Process -Verb RunAs`, macOS through
//! `osascript ... with administrator privileges`, other Unix via `pkexec`.
//! The exit code of the elevated shell is reported back to the caller.

use std::process::{Child, Command, Stdio};

use crate::{DesktopPlatform, ElevatedExit, ELEVATION_PROMPT_NAME};

/// `ERROR_CANCELLED`; the Windows wrapper exits with it when elevation is
/// refused or `Start-Process` fails.
pub(crate) const ELEVATION_CANCELLED_EXIT_CODE: i32 = 1223;

#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ElevatedInvocation {
    pub(crate) program: String,
    pub(crate) args: Vec<String>,
}

impl ElevatedInvocation {
    pub(crate) fn describe(&self) -> String {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        shlex::try_join(words).unwrap_or_else(|_| {
            let mut parts = vec![self.program.clone()];
            parts.extend(self.args.clone());
            format!("{parts:?}")
        })
    }
}

fn escape_powershell_single_quoted(raw: &str) -> String {
    raw.replace('\'', "''")
}

fn escape_applescript_string(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

pub(crate) fn build_elevated_invocation(
    platform: DesktopPlatform,
    command: &str,
    prompt_name: &str,
) -> ElevatedInvocation {
    match platform {
        DesktopPlatform::Windows => {
            // cmd strips the outer quote pair of a /c payload that contains quotes.
            // A refused UAC prompt exits with the cancelled sentinel.
            let script = format!(
                "try {{ $process = Start-Process -FilePath 'cmd.exe' -ArgumentList '/c \"{}\"' -Verb RunAs -WindowStyle Hidden -Wait -PassThru -ErrorAction Stop; exit $process.ExitCode }} catch {{ exit {} }}",
                escape_powershell_single_quoted(command),
                ELEVATION_CANCELLED_EXIT_CODE
            );
            ElevatedInvocation {
                program: "powershell".to_string(),
                args: vec![
                    "-NoProfile".to_string(),
                    "-NonInteractive".to_string(),
                    "-WindowStyle".to_string(),
                    "Hidden".to_string(),
                    "-Command".to_string(),
                    script,
                ],
            }
        }
        DesktopPlatform::MacOs => ElevatedInvocation {
            program: "osascript".to_string(),
            args: vec![
                "-e".to_string(),
                format!(
                    "do shell script \"{}\" with prompt \"{} wants to make changes.\" with administrator privileges",
                    escape_applescript_string(command),
                    escape_applescript_string(prompt_name)
                ),
            ],
        },
        DesktopPlatform::Linux => ElevatedInvocation {
            program: "pkexec".to_string(),
            args: vec!["sh".to_string(), "-c".to_string(), command.to_string()],
        },
    }
}

/// Exit as seen by callers. On Windows the cancelled sentinel means the
/// elevated command never ran, so no real exit code exists.
pub(crate) fn elevated_exit_from_code(platform: DesktopPlatform, code: Option<i32>) -> ElevatedExit {
    match (platform, code) {
        (DesktopPlatform::Windows, Some(ELEVATION_CANCELLED_EXIT_CODE)) => ElevatedExit::unknown(),
        _ => ElevatedExit { code },
    }
}

pub(crate) fn spawn_elevated(command: &str) -> Result<Child, String> {
    let invocation =
        build_elevated_invocation(DesktopPlatform::current(), command, ELEVATION_PROMPT_NAME);

    let mut process = Command::new(&invocation.program);
    process
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        process.creation_flags(CREATE_NO_WINDOW);
    }

    process.spawn().map_err(|error| {
        format!(
            "Failed to spawn elevated command {}: {}",
            invocation.describe(),
            error
        )
    })
}

/// Spawns `command` elevated and calls `on_exit` from a blocking worker once
/// the elevated shell exits. Spawn failures are reported as an unknown exit.
pub(crate) fn run_command_as_admin<L, F>(command: &str, log: L, on_exit: F)
where
    L: Fn(&str) + Send + 'static,
    F: FnOnce(ElevatedExit) + Send + 'static,
{
    log(&format!("running elevated command: {command}"));
    let mut child = match spawn_elevated(command) {
        Ok(child) => child,
        Err(error) => {
            log(&error);
            on_exit(ElevatedExit::unknown());
            return;
        }
    };

    tauri::async_runtime::spawn_blocking(move || {
        let exit = match child.wait() {
            Ok(status) => elevated_exit_from_code(DesktopPlatform::current(), status.code()),
            Err(error) => {
                log(&format!("failed to wait for elevated command: {error}"));
                ElevatedExit::unknown()
            }
        };
        log(&format!(
            "elevated command exited with code {}",
            exit.describe_code()
        ));
        on_exit(exit);
    });
}

pub(crate) fn exec_elevated<L>(command: &str, log: L)
where
    L: Fn(&str) + Send + 'static,
{
    run_command_as_admin(command, log, |_| {});
}
