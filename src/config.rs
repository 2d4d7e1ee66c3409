//! Settings loading and validation.
//!
//! Settings come from `<config dir>/monthcal/settings.json` when that file
//! exists, then `MONTHCAL_*` environment variables override single fields.

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::{Settings, WeekStart};
use crate::ui::styles::is_hex_color;

pub const ENV_WEEK_START: &str = "MONTHCAL_WEEK_START";
pub const ENV_PREVIEW_LIMIT: &str = "MONTHCAL_PREVIEW_LIMIT";
pub const ENV_DEFAULT_COLOR: &str = "MONTHCAL_DEFAULT_COLOR";
pub const ENV_TINT_FACTOR: &str = "MONTHCAL_TINT_FACTOR";

pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("monthcal").join("settings.json"))
}

/// Load settings from the default location plus environment overrides.
pub fn load_settings() -> AppResult<Settings> {
    let base = match settings_path() {
        Some(path) if path.exists() => read_settings_file(&path)?,
        _ => Settings::default(),
    };
    let settings = apply_env_overrides(base)?;
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn read_settings_file(path: &Path) -> AppResult<Settings> {
    info!("Loading settings from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::config(format!("{}: {}", path.display(), e)))
}

pub fn apply_env_overrides(mut settings: Settings) -> AppResult<Settings> {
    if let Ok(value) = env::var(ENV_WEEK_START) {
        settings.week_starts_on = WeekStart::parse(&value).ok_or_else(|| {
            AppError::config(format!("{} must be 'monday' or 'sunday', got '{}'", ENV_WEEK_START, value))
        })?;
    }
    if let Ok(value) = env::var(ENV_PREVIEW_LIMIT) {
        settings.preview_limit = value.trim().parse().map_err(|_| {
            AppError::config(format!("{} must be a positive integer, got '{}'", ENV_PREVIEW_LIMIT, value))
        })?;
    }
    if let Ok(value) = env::var(ENV_DEFAULT_COLOR) {
        settings.default_color = value;
    }
    if let Ok(value) = env::var(ENV_TINT_FACTOR) {
        settings.tint_factor = value.trim().parse().map_err(|_| {
            AppError::config(format!("{} must be a number, got '{}'", ENV_TINT_FACTOR, value))
        })?;
    }
    debug!("Effective settings: {:?}", settings);
    Ok(settings)
}

pub fn validate_settings(settings: &Settings) -> AppResult<()> {
    if settings.preview_limit == 0 {
        return Err(AppError::config("preview_limit must be at least 1"));
    }
    if !(0.0..=1.0).contains(&settings.tint_factor) {
        return Err(AppError::config(format!(
            "tint_factor must be between 0 and 1, got {}",
            settings.tint_factor
        )));
    }
    for (name, color) in [
        ("default_color", &settings.default_color),
        ("conflict_color", &settings.conflict_color),
    ] {
        if !is_hex_color(color) {
            return Err(AppError::config(format!("{} must be #RRGGBB, got '{}'", name, color)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for key in [ENV_WEEK_START, ENV_PREVIEW_LIMIT, ENV_DEFAULT_COLOR, ENV_TINT_FACTOR] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_default_settings_validate() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_preview = Settings { preview_limit: 0, ..Settings::default() };
        assert!(matches!(validate_settings(&zero_preview), Err(AppError::Config(_))));

        let tint = Settings { tint_factor: 1.5, ..Settings::default() };
        assert!(validate_settings(&tint).is_err());

        let color = Settings { default_color: "blue".to_string(), ..Settings::default() };
        assert!(validate_settings(&color).is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var(ENV_WEEK_START, "Sunday");
        env::set_var(ENV_PREVIEW_LIMIT, "3");
        env::set_var(ENV_TINT_FACTOR, "0.5");

        let settings = apply_env_overrides(Settings::default()).unwrap();
        clear_env();

        assert_eq!(settings.week_starts_on, WeekStart::Sunday);
        assert_eq!(settings.preview_limit, 3);
        assert_eq!(settings.tint_factor, 0.5);
    }

    #[test]
    #[serial]
    fn test_env_override_parse_error() {
        clear_env();
        env::set_var(ENV_PREVIEW_LIMIT, "two");
        let result = apply_env_overrides(Settings::default());
        clear_env();
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_read_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{"preview_limit": 4, "default_color": "#10B981"}}"##).unwrap();

        let settings = read_settings_file(file.path()).unwrap();
        assert_eq!(settings.preview_limit, 4);
        assert_eq!(settings.default_color, "#10B981");
        assert_eq!(settings.tint_factor, 0.85);
    }

    #[test]
    fn test_read_settings_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "preview_limit = 4").unwrap();
        assert!(matches!(read_settings_file(file.path()), Err(AppError::Config(_))));
    }
}
