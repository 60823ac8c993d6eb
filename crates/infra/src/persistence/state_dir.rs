use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use codestat_shared_kernel::path::logical_absolute;

const APP_DIR: &str = "codestat";

/// Directory holding per-workspace history files.
///
/// Precedence: explicit directory, `$XDG_STATE_HOME/codestat`,
/// `$HOME/.local/state/codestat`, then `./.codestat-state`.
pub fn resolve_state_dir(explicit: Option<&Path>) -> PathBuf {
    resolve_state_dir_from(explicit, env::var_os("XDG_STATE_HOME"), env::var_os("HOME"))
}

pub fn resolve_state_dir_from(
    explicit: Option<&Path>,
    xdg_state_home: Option<OsString>,
    home: Option<OsString>,
) -> PathBuf {
    if let Some(dir) = explicit {
        return logical_absolute(dir);
    }
    if let Some(state_home) = xdg_state_home.filter(|v| !v.is_empty()) {
        return PathBuf::from(state_home).join(APP_DIR);
    }
    if let Some(home) = home.filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local/state").join(APP_DIR);
    }
    logical_absolute(Path::new(".codestat-state"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directory_wins() {
        let explicit = std::env::temp_dir().join("explicit");
        let dir = resolve_state_dir_from(Some(&explicit), Some("/xdg".into()), Some("/home/u".into()));
        assert_eq!(dir, explicit);
    }

    #[test]
    fn xdg_then_home_then_local_fallback() {
        assert_eq!(
            resolve_state_dir_from(None, Some("/xdg".into()), Some("/home/u".into())),
            PathBuf::from("/xdg/codestat")
        );
        assert_eq!(
            resolve_state_dir_from(None, Some("".into()), Some("/home/u".into())),
            PathBuf::from("/home/u/.local/state/codestat")
        );
        let fallback = resolve_state_dir_from(None, None, None);
        assert!(fallback.is_absolute());
        assert!(fallback.ends_with(".codestat-state"));
    }
}
