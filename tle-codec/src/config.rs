use crate::{elements::TrailingLines, serializer::OutputFormat, DEFAULT_COLLECTION_NAME};
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}'. {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config file. {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Collection name '{0}' is not a valid JavaScript identifier")]
    InvalidCollectionName(String),
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Name of the exported array
    pub collection_name: String,
    pub format: OutputFormat,
    pub trailing_lines: TrailingLines,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection_name: DEFAULT_COLLECTION_NAME.to_owned(),
            format: OutputFormat::default(),
            trailing_lines: TrailingLines::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_str_checked(&content)
    }

    pub fn from_str_checked(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply command line options, which take precedence over the file
    pub fn with_overrides(
        mut self,
        collection_name: Option<String>,
        format: Option<OutputFormat>,
        strict: bool,
    ) -> Self {
        if let Some(name) = collection_name {
            self.collection_name = name;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if strict {
            self.trailing_lines = TrailingLines::Error;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_js_identifier(&self.collection_name) {
            Ok(())
        } else {
            Err(ConfigError::InvalidCollectionName(
                self.collection_name.clone(),
            ))
        }
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
