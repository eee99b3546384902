//! Configuration management and validation.
//!
//! Provides the settings that shape a conversion run: how delimited input is
//! read, how descriptions are rendered, whether coordinates are range
//! checked, how the KML layer is styled and which wiki template region the
//! map extractor expects.
//!
//! Configuration comes from built-in defaults, optionally overlaid by a JSON
//! file, and finally by command line flags.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, ENCYCLOPEDIA_BASE_URL, KML_LABEL_COLOR, PLACEHOLDER_VALUE,
    WEB_LINK_LABEL, wiki,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Delimited input settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Force a delimiter instead of sniffing it from the header line
    pub delimiter: Option<char>,
}

/// Description rendering settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DescriptionConfig {
    /// Page prefix for commune links
    pub encyclopedia_base_url: String,

    /// Anchor text for web links that cannot be shortened
    pub web_link_label: String,

    /// Cell value treated as "unknown" and never rendered
    pub placeholder: String,
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self {
            encyclopedia_base_url: ENCYCLOPEDIA_BASE_URL.to_string(),
            web_link_label: WEB_LINK_LABEL.to_string(),
            placeholder: PLACEHOLDER_VALUE.to_string(),
        }
    }
}

/// Row validation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject latitudes outside [-90, 90] and longitudes outside [-180, 180]
    pub check_coordinate_ranges: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_coordinate_ranges: true,
        }
    }
}

/// KML layer settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KmlConfig {
    /// Layer title, defaults to the input file stem
    pub title: Option<String>,

    /// Icon URL or local image path
    pub icon: Option<String>,

    /// Embed a local icon as base64 data instead of referencing it
    pub embed_icon: bool,

    /// Label colour, KML aabbggrr hex
    pub label_color: String,
}

impl Default for KmlConfig {
    fn default() -> Self {
        Self {
            title: None,
            icon: None,
            embed_icon: false,
            label_color: KML_LABEL_COLOR.to_string(),
        }
    }
}

/// Wiki extraction settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WikiConfig {
    /// Region name expected as first argument of the map template
    pub region: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            region: wiki::DEFAULT_REGION.to_string(),
        }
    }
}

/// Main configuration for table2kml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub description: DescriptionConfig,
    pub validation: ValidationConfig,
    pub kml: KmlConfig,
    pub wiki: WikiConfig,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit file, else from the default location if it
    /// exists, else fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(default_path) if default_path.is_file() => Self::from_file(&default_path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Set the layer title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.kml.title = Some(title.into());
        self
    }

    /// Set the icon URL or path
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.kml.icon = Some(icon.into());
        self
    }

    /// Embed local icons into the KML file
    pub fn with_embedded_icon(mut self) -> Self {
        self.kml.embed_icon = true;
        self
    }

    /// Disable coordinate range checks
    pub fn without_range_check(mut self) -> Self {
        self.validation.check_coordinate_ranges = false;
        self
    }

    /// Force the input delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.input.delimiter = Some(delimiter);
        self
    }

    /// Set the wiki map template region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.wiki.region = region.into();
        self
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        if let Some(delimiter) = self.input.delimiter {
            if !delimiter.is_ascii() || delimiter == '"' || delimiter == '\n' {
                return Err(Error::configuration(format!(
                    "Delimiter must be a single ASCII character other than quote or newline, got {:?}",
                    delimiter
                )));
            }
        }

        if !self.description.encyclopedia_base_url.starts_with("http") {
            return Err(Error::configuration(format!(
                "Encyclopedia base URL must be an http(s) URL, got '{}'",
                self.description.encyclopedia_base_url
            )));
        }

        if self.description.placeholder.trim().is_empty() {
            return Err(Error::configuration(
                "Placeholder value cannot be empty".to_string(),
            ));
        }

        let color = &self.kml.label_color;
        if color.len() != 8 || !color.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::configuration(format!(
                "Label colour must be 8 hex digits (aabbggrr), got '{}'",
                color
            )));
        }

        if self.wiki.region.trim().is_empty() || self.wiki.region.contains('|') {
            return Err(Error::configuration(format!(
                "Wiki region must be a non-empty name without '|', got '{}'",
                self.wiki.region
            )));
        }

        Ok(())
    }
}

/// Default configuration file location, `<config_dir>/table2kml/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
