use anyhow::{bail, Context, Result};
use chrono::{Month, Weekday};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::console::prompt::title_case;

pub const CONFIG_FILE_NAME: &str = "bikeshare.yaml";

/// Months covered by the shipped trip data, in calendar order
pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Days of the week, Monday first (index 0)
pub const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A city and the CSV file holding its trips
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub file: String,
}

impl City {
    pub fn new(name: &str, file: &str) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_page_size() -> usize {
    5
}

fn default_cities() -> Vec<City> {
    vec![
        City::new("Chicago", "chicago.csv"),
        City::new("New York", "new_york_city.csv"),
        City::new("Washington", "washington.csv"),
    ]
}

/// Explorer settings from bikeshare.yaml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_cities")]
    pub cities: Vec<City>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            page_size: default_page_size(),
            cities: default_cities(),
        }
    }
}

impl Config {
    /// Load settings from a YAML file.
    /// A relative `data_dir` is resolved against the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config: {:?}", path))?;
        let mut config = Self::from_yaml(&content)
            .context(format!("Failed to parse config: {:?}", path))?;

        if config.data_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.data_dir = parent.join(&config.data_dir);
            }
        }

        Ok(config)
    }

    /// Parse and validate settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content).context("Invalid config YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Use the first config file found, or the built-in defaults
    pub fn discover() -> Result<Self> {
        match find_config_path() {
            Some(path) => {
                tracing::info!("using config {:?}", path);
                Self::load(path)
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be at least 1");
        }
        if self.cities.is_empty() {
            bail!("at least one city must be configured");
        }
        for (i, city) in self.cities.iter().enumerate() {
            if title_case(&city.name) != city.name {
                bail!("city name '{}' must be in title case", city.name);
            }
            if self.cities[..i].iter().any(|c| c.name == city.name) {
                bail!("city '{}' is configured twice", city.name);
            }
        }
        Ok(())
    }

    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.name == name)
    }

    /// Full path to a city's trip file
    pub fn city_path(&self, city: &City) -> PathBuf {
        self.data_dir.join(&city.file)
    }
}

/// Find a config file: working directory first, then the user config dir
pub fn find_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join("bikeshare").join(CONFIG_FILE_NAME);
        if user.exists() {
            return Some(user);
        }
    }
    None
}
