use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// When to color terminal diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Global configuration loaded from `~/.config/dck/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DckConfig {
    /// Terminal color mode for diagnostics: "auto" (default), "always" or "never".
    #[serde(default)]
    pub color: ColorMode,
    /// Maximum number of per-event diagnostics to print (None = no cap). Counters stay exact.
    #[serde(default)]
    pub max_reports: Option<u64>,
    /// Print the summary as a JSON object after the text summary.
    #[serde(default)]
    pub json_summary: bool,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DckConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = DckConfig::default();
        assert_eq!(cfg.color, ColorMode::Auto);
        assert!(cfg.max_reports.is_none());
        assert!(!cfg.json_summary);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DckConfig {
            color: ColorMode::Never,
            max_reports: Some(10),
            json_summary: true,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DckConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.color, ColorMode::Never);
        assert_eq!(parsed.max_reports, Some(10));
        assert!(parsed.json_summary);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: DckConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.color, ColorMode::Auto);
        assert!(cfg.max_reports.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            color = "always"
            max_reports = 100
        "#;
        let cfg: DckConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.color, ColorMode::Always);
        assert_eq!(cfg.max_reports, Some(100));
        assert!(!cfg.json_summary);
    }

    #[test]
    fn config_toml_rejects_unknown_color() {
        assert!(toml::from_str::<DckConfig>(r#"color = "rainbow""#).is_err());
    }
}
