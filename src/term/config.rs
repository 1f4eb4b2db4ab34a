use crate::error;
use crate::lang::{Error, NumberFormat};
use crate::mach::Engine;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_FILE: &str = "calc.toml";

/// Settings for the interactive calculator, read from `calc.toml`.
///
/// ```toml
/// prompt = "> "
/// decimal_separator = ","
/// program = "saved.json"
///
/// [variables]
/// m = 2.5
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub prompt: String,
    pub decimal_separator: char,
    pub variables: BTreeMap<String, f64>,
    pub program: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "> ".to_string(),
            decimal_separator: '.',
            variables: BTreeMap::new(),
            program: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, Error> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => {
                    return Err(error!(FileNotFound; path.display().to_string()))
                }
                _ => return Err(error!(DiskIoError; e.to_string())),
            },
        };
        Config::from_toml(&content)
    }

    /// A missing default file is not an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config, Error> {
        match path {
            Some(path) => Config::load(path),
            None => {
                let path = Path::new(DEFAULT_FILE);
                if path.exists() {
                    Config::load(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Config, Error> {
        let config: Config = match toml::from_str(content) {
            Ok(config) => config,
            Err(e) => return Err(error!(BadConfig; e.to_string())),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let sep = self.decimal_separator;
        if sep.is_ascii_digit() || sep.is_whitespace() || "+-eE".contains(sep) {
            return Err(error!(BadConfig; format!("DECIMAL SEPARATOR {:?} NOT ALLOWED", sep)));
        }
        Ok(())
    }

    /// Engine with the configured format and starting variables.
    pub fn engine(&self) -> Engine {
        let mut engine = Engine::with_format(NumberFormat::new(self.decimal_separator));
        engine
            .variables_mut()
            .extend(self.variables.iter().map(|(k, v)| (k.clone(), *v)));
        engine
    }
}
