use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory given with `--config-dir`, if any. Set once at startup.
static CONFIG_DIR_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

/// What: Pin the configuration directory for the rest of the process.
///
/// Inputs:
/// - `dir`: Directory to use instead of the XDG/HOME default.
///
/// Details:
/// - Only the first call has an effect; later calls are ignored.
pub fn set_config_dir_override(dir: PathBuf) {
    let _ = CONFIG_DIR_OVERRIDE.set(dir);
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory for gitseek: the `--config-dir` override, else
/// `$XDG_CONFIG_HOME/gitseek`, else `$HOME/.config/gitseek` (ensured to exist).
pub fn config_dir() -> PathBuf {
    let dir = CONFIG_DIR_OVERRIDE
        .get()
        .cloned()
        .unwrap_or_else(|| xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("gitseek"));
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Location of `settings.conf`.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// Location of `theme.conf`.
pub fn theme_path() -> PathBuf {
    config_dir().join("theme.conf")
}
