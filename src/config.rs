use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "almanac.toml";

/// Top-level almanac configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Paper and margins.
    #[serde(default)]
    pub page: PageToml,

    /// Observer location for sun and moon times.
    #[serde(default)]
    pub location: LocationToml,

    /// Month overview and day cell options.
    #[serde(default)]
    pub layout: LayoutToml,

    /// Printed names and glyphs.
    #[serde(default)]
    pub labels: LabelsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageToml {
    #[serde(default = "default_page_width")]
    pub width: f64,
    #[serde(default = "default_page_height")]
    pub height: f64,
    #[serde(default = "default_side_margin")]
    pub margin_left: f64,
    #[serde(default = "default_side_margin")]
    pub margin_right: f64,
    #[serde(default = "default_margin_top")]
    pub margin_top: f64,
    #[serde(default = "default_side_margin")]
    pub margin_bottom: f64,
    #[serde(default = "default_true")]
    pub markers: bool,
}

impl Default for PageToml {
    fn default() -> Self {
        Self {
            width: default_page_width(),
            height: default_page_height(),
            margin_left: default_side_margin(),
            margin_right: default_side_margin(),
            margin_top: default_margin_top(),
            margin_bottom: default_side_margin(),
            markers: true,
        }
    }
}

fn default_page_width() -> f64 {
    297.0
}
fn default_page_height() -> f64 {
    210.0
}
fn default_side_margin() -> f64 {
    10.0
}
fn default_margin_top() -> f64 {
    20.0
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    #[serde(default = "default_location")]
    pub name: String,
    /// IANA zone overriding the location's own.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            name: default_location(),
            timezone: None,
        }
    }
}

fn default_location() -> String {
    "Vilnius".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutToml {
    /// Fixed month count; exclusive with `fit`.
    #[serde(default)]
    pub months: Option<usize>,
    #[serde(default)]
    pub fit: bool,
    #[serde(default = "default_day_width")]
    pub day_width: f64,
    #[serde(default = "default_true")]
    pub split_icons: bool,
}

impl Default for LayoutToml {
    fn default() -> Self {
        Self {
            months: None,
            fit: false,
            day_width: default_day_width(),
            split_icons: true,
        }
    }
}

fn default_day_width() -> f64 {
    5.0
}

/// Label overrides. Missing entries keep the English defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelsToml {
    #[serde(default)]
    pub months: Option<Vec<String>>,
    #[serde(default)]
    pub weekdays_short: Option<Vec<String>>,
    #[serde(default)]
    pub weekdays: Option<Vec<String>>,
    #[serde(default)]
    pub moon: Option<Vec<String>>,
    #[serde(default)]
    pub sunrise: Option<String>,
    #[serde(default)]
    pub sunset: Option<String>,
    #[serde(default)]
    pub daylight: Option<String>,
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, `almanac.toml` in the working
/// directory is used if present, otherwise every setting takes its default.
pub fn load(path: Option<&Path>) -> Result<AlmanacConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
        None => {
            debug!("no config file, using defaults");
            return Ok(AlmanacConfig::default());
        }
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}

pub fn parse(text: &str) -> Result<AlmanacConfig> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.page.width, 297.0);
        assert_eq!(config.page.margin_top, 20.0);
        assert!(config.page.markers);
        assert_eq!(config.location.name, "Vilnius");
        assert!(config.layout.months.is_none());
        assert!(config.layout.split_icons);
        assert!(config.labels.months.is_none());
    }

    #[test]
    fn full_file() {
        let config = parse(
            r#"
            [page]
            width = 420
            height = 297
            markers = false

            [location]
            name = "Riga"
            timezone = "UTC"

            [layout]
            fit = true
            day_width = 4.5
            split_icons = false

            [labels]
            sunrise = "rise "
            moon = ["0", "1", "2", "3", "4", "5", "6", "7"]
            "#,
        )
        .unwrap();
        assert_eq!(config.page.width, 420.0);
        assert!(!config.page.markers);
        assert_eq!(config.location.timezone.as_deref(), Some("UTC"));
        assert!(config.layout.fit);
        assert_eq!(config.layout.day_width, 4.5);
        assert_eq!(config.labels.sunrise.as_deref(), Some("rise "));
        assert_eq!(config.labels.moon.as_ref().map(Vec::len), Some(8));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("[page]\ncolour = \"red\"\n").is_err());
        assert!(parse("[printer]\n").is_err());
    }

    #[test]
    fn load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[layout]\nmonths = 3").unwrap();
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.layout.months, Some(3));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
