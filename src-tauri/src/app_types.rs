use std::path::PathBuf;

use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DesktopPlatform {
    Windows,
    MacOs,
    Linux,
}

impl DesktopPlatform {
    pub(crate) fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    pub(crate) fn is_mac(self) -> bool {
        self == Self::MacOs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SubWindowOptions {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) title: Option<String>,
    pub(crate) initialization_script: Option<String>,
}

impl SubWindowOptions {
    pub(crate) fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Default for SubWindowOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: None,
            initialization_script: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SubWindowContent {
    /// Page bundled with the frontend, relative to the dist root.
    LocalPage(PathBuf),
    RemoteUrl(Url),
}

/// Exit code of an elevated process. `None` when the process could not be
/// spawned, elevation was refused, it was killed by a signal, or its status
/// could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ElevatedExit {
    pub(crate) code: Option<i32>,
}

impl ElevatedExit {
    pub(crate) fn unknown() -> Self {
        Self { code: None }
    }

    pub(crate) fn describe_code(&self) -> String {
        match self.code {
            Some(code) => code.to_string(),
            None => "unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AboutInfo {
    pub(crate) icon_path: String,
    pub(crate) product_name: String,
    pub(crate) copyright: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_window_options_default_to_800_by_600() {
        let options = SubWindowOptions::default();
        assert_eq!(options.width, 800.0);
        assert_eq!(options.height, 600.0);
        assert!(options.title.is_none());
    }

    #[test]
    fn sized_sub_window_options_keep_other_defaults() {
        let options = SubWindowOptions::sized(1080.0, 600.0);
        assert_eq!(options.width, 1080.0);
        assert_eq!(options.height, 600.0);
        assert!(options.initialization_script.is_none());
    }

    #[test]
    fn elevated_exit_describes_missing_code_as_unknown() {
        assert_eq!(ElevatedExit { code: Some(0) }.describe_code(), "0");
        assert_eq!(ElevatedExit::unknown().describe_code(), "unknown");
    }

    #[test]
    fn about_info_serializes_camel_case_fields() {
        let info = AboutInfo {
            icon_path: "icon.png".to_string(),
            product_name: "Product".to_string(),
            copyright: "(c)".to_string(),
        };
        let json = serde_json::to_value(&info).expect("about info should serialize");
        assert_eq!(json["iconPath"], "icon.png");
        assert_eq!(json["productName"], "Product");
        assert_eq!(json["copyright"], "(c)");
    }
}
