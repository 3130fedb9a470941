use std::process::{Command, Stdio};
use url::Url;

use crate::DesktopPlatform;

/// Parses a link opened from the menu. Only http(s) goes to the browser.
pub(crate) fn browser_url(raw_url: &str) -> Result<Url, String> {
    let url = Url::parse(raw_url).map_err(|error| format!("Invalid URL {raw_url}: {error}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(format!(
            "Refusing to open {raw_url} in the browser: scheme '{scheme}' is not http/https."
        )),
    }
}

fn browser_launcher(platform: DesktopPlatform, url: &Url) -> (&'static str, Vec<String>) {
    match platform {
        DesktopPlatform::Windows => (
            "rundll32",
            vec!["url.dll,FileProtocolHandler".to_string(), url.to_string()],
        ),
        DesktopPlatform::MacOs => ("open", vec![url.to_string()]),
        DesktopPlatform::Linux => ("xdg-open", vec![url.to_string()]),
    }
}

pub(crate) fn open_external_url(url: &Url) -> Result<(), String> {
    let (program, args) = browser_launcher(DesktopPlatform::current(), url);
    Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run '{program}' for {url}: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_url_accepts_http_and_https() {
        assert!(browser_url("https://hardwaretester.com/gamepad").is_ok());
        assert!(browser_url("http://localhost:47990/").is_ok());
    }

    #[test]
    fn browser_url_rejects_other_schemes_and_garbage() {
        let error = browser_url("file:///etc/passwd").expect_err("file scheme");
        assert!(error.contains("'file'"));
        assert!(browser_url("javascript:alert(1)").is_err());
        assert!(browser_url("not a url").is_err());
    }

    #[test]
    fn browser_launcher_uses_the_platform_opener() {
        let url = browser_url("https://docs.qq.com/aio/DSGdQc3htbFJjSFdO").expect("valid url");
        let (program, args) = browser_launcher(DesktopPlatform::Windows, &url);
        assert_eq!(program, "rundll32");
        assert_eq!(
            args,
            vec!["url.dll,FileProtocolHandler", "https://docs.qq.com/aio/DSGdQc3htbFJjSFdO"]
        );
        assert_eq!(
            browser_launcher(DesktopPlatform::MacOs, &url),
            ("open", vec![url.to_string()])
        );
        assert_eq!(
            browser_launcher(DesktopPlatform::Linux, &url),
            ("xdg-open", vec![url.to_string()])
        );
    }
}
