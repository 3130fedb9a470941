use std::{env, path::PathBuf};

use crate::{
    DEFAULT_SUNSHINE_PATH, PANEL_ROOT_DIR_NAME, PANEL_ROOT_ENV, SUNSHINE_PATH_ENV,
    SUNSHINE_TOOLS_PATH_ENV, VIRTUAL_DRIVER_PATH_ENV,
};

/// Root for files owned by the control panel itself (logs).
pub fn default_packaged_root_dir() -> Option<PathBuf> {
    if let Some(root) = non_empty_env(PANEL_ROOT_ENV) {
        return Some(PathBuf::from(root));
    }
    home::home_dir().map(|home| home.join(PANEL_ROOT_DIR_NAME))
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunshinePaths {
    pub sunshine_dir: PathBuf,
    pub tools_dir: PathBuf,
    pub virtual_driver_dir: PathBuf,
}

impl SunshinePaths {
    pub fn resolve() -> Self {
        Self::from_lookup(non_empty_env)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let sunshine_dir = lookup(SUNSHINE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SUNSHINE_PATH));
        let tools_dir = lookup(SUNSHINE_TOOLS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| sunshine_dir.join("tools"));
        let virtual_driver_dir = lookup(VIRTUAL_DRIVER_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| tools_dir.join("vdd"));

        Self {
            sunshine_dir,
            tools_dir,
            virtual_driver_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn sunshine_paths_default_to_program_files_layout() {
        let paths = SunshinePaths::from_lookup(lookup_from(&[]));
        assert_eq!(paths.sunshine_dir, PathBuf::from(DEFAULT_SUNSHINE_PATH));
        assert_eq!(paths.tools_dir, PathBuf::from(DEFAULT_SUNSHINE_PATH).join("tools"));
        assert_eq!(
            paths.virtual_driver_dir,
            PathBuf::from(DEFAULT_SUNSHINE_PATH).join("tools").join("vdd")
        );
    }

    #[test]
    fn tools_and_driver_dirs_follow_sunshine_override() {
        let paths = SunshinePaths::from_lookup(lookup_from(&[(SUNSHINE_PATH_ENV, "/opt/sunshine")]));
        assert_eq!(paths.tools_dir, PathBuf::from("/opt/sunshine/tools"));
        assert_eq!(paths.virtual_driver_dir, PathBuf::from("/opt/sunshine/tools/vdd"));
    }

    #[test]
    fn explicit_overrides_win_over_derived_dirs() {
        let paths = SunshinePaths::from_lookup(lookup_from(&[
            (SUNSHINE_PATH_ENV, "/opt/sunshine"),
            (SUNSHINE_TOOLS_PATH_ENV, "/srv/tools"),
            (VIRTUAL_DRIVER_PATH_ENV, "/srv/driver"),
        ]));
        assert_eq!(paths.sunshine_dir, PathBuf::from("/opt/sunshine"));
        assert_eq!(paths.tools_dir, PathBuf::from("/srv/tools"));
        assert_eq!(paths.virtual_driver_dir, PathBuf::from("/srv/driver"));
    }
}
