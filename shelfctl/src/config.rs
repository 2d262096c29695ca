//! Shell configuration.
//!
//! Values are layered lowest to highest: built-in defaults, the TOML file,
//! the process environment (after an optional `.env` is loaded) and finally
//! command-line flags applied by the binary.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] = ["shelf.toml", "config/shelf.toml"];
pub const DEFAULT_PROMPT: &str = "shelf> ";

pub const ENV_CONFIG_PATH: &str = "SHELF_CONFIG";
pub const ENV_SEED: &str = "SHELF_SEED";
pub const ENV_PROMPT: &str = "SHELF_PROMPT";
pub const ENV_SHOW_PROMPT: &str = "SHELF_SHOW_PROMPT";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("config file {path} does not exist")]
    MissingConfig { path: PathBuf },
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {key}")]
    InvalidEnv { key: &'static str, value: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

/// Resolved shell settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    /// `None` means "only when stdin is a terminal"
    pub show_prompt: Option<bool>,
    /// Seed for CD shuffles; random when unset
    pub seed: Option<u64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_prompt: None,
            seed: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub shell: FileShellSection,
    #[serde(default)]
    pub session: FileSessionSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileShellSection {
    pub prompt: Option<String>,
    pub show_prompt: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSessionSection {
    pub seed: Option<u64>,
}

/// Settings read from the environment
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub prompt: Option<String>,
    pub show_prompt: Option<bool>,
    pub seed: Option<u64>,
}

impl EnvConfig {
    pub fn gather() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key).filter(|value| !value.trim().is_empty())
        };

        let seed = match non_empty(ENV_SEED) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                ConfigLoadError::InvalidEnv {
                    key: ENV_SEED,
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        let show_prompt = match non_empty(ENV_SHOW_PROMPT) {
            Some(raw) => Some(parse_bool(&raw).ok_or_else(|| {
                ConfigLoadError::InvalidEnv {
                    key: ENV_SHOW_PROMPT,
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            config_path: non_empty(ENV_CONFIG_PATH).map(PathBuf::from),
            prompt: lookup(ENV_PROMPT),
            show_prompt,
            seed,
        })
    }
}

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Loads the env file into the process environment, then resolves the
    /// config from the file and the environment.
    pub fn load(&self) -> Result<ShellConfig, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };
        tracing::debug!(env_file_loaded, "environment prepared");

        self.load_with_env(EnvConfig::gather()?)
    }

    /// Resolves the config against an already gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ShellConfig, ConfigLoadError> {
        let file = self.load_file_config(&env)?;
        Ok(compose(file, env))
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<Option<FileConfig>, ConfigLoadError> {
        let (path, explicit) = match (&self.options.config_path, &env.config_path)
        {
            (Some(path), _) => (path.clone(), true),
            (None, Some(path)) => (path.clone(), false),
            (None, None) => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(path) => (path, false),
                None => return Ok(None),
            },
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(None);
        }

        read_file_config(&path).map(Some)
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    let file_config =
        toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source: err,
        })?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(file_config)
}

fn compose(file: Option<FileConfig>, env: EnvConfig) -> ShellConfig {
    let mut config = ShellConfig::default();

    if let Some(file) = file {
        if let Some(prompt) = file.shell.prompt {
            config.prompt = prompt;
        }
        config.show_prompt = file.shell.show_prompt.or(config.show_prompt);
        config.seed = file.session.seed.or(config.seed);
    }

    if let Some(prompt) = env.prompt {
        config.prompt = prompt;
    }
    config.show_prompt = env.show_prompt.or(config.show_prompt);
    config.seed = env.seed.or(config.seed);

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> EnvConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|key| map.get(key).cloned()).unwrap()
    }

    #[test]
    fn parse_bool_accepts_common_forms() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn invalid_seed_is_reported() {
        let err = EnvConfig::from_lookup(|key| {
            (key == ENV_SEED).then(|| "twelve".to_string())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidEnv { key: ENV_SEED, .. }
        ));
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.toml");
        fs::write(
            &path,
            "[shell]\nprompt = \"lib> \"\nshow_prompt = false\n\n[session]\nseed = 3\n",
        )
        .unwrap();

        let loader = ConfigLoader::new().with_config_path(&path);

        let from_file = loader.load_with_env(EnvConfig::default()).unwrap();
        assert_eq!(
            from_file,
            ShellConfig {
                prompt: "lib> ".to_string(),
                show_prompt: Some(false),
                seed: Some(3),
            }
        );

        let layered = loader
            .load_with_env(env_from(&[(ENV_SEED, "11"), (ENV_SHOW_PROMPT, "1")]))
            .unwrap();
        assert_eq!(layered.prompt, "lib> ");
        assert_eq!(layered.show_prompt, Some(true));
        assert_eq!(layered.seed, Some(11));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader =
            ConfigLoader::new().with_config_path(dir.path().join("nope.toml"));
        assert!(matches!(
            loader.load_with_env(EnvConfig::default()),
            Err(ConfigLoadError::MissingConfig { .. })
        ));
    }

    #[test]
    fn missing_env_named_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let env = env_from(&[(ENV_CONFIG_PATH, missing.to_str().unwrap())]);
        let config = ConfigLoader::new().load_with_env(env).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.toml");
        fs::write(&path, "[shell]\ncolour = \"blue\"\n").unwrap();
        let loader = ConfigLoader::new().with_config_path(&path);
        assert!(matches!(
            loader.load_with_env(EnvConfig::default()),
            Err(ConfigLoadError::Parse { .. })
        ));
    }
}
