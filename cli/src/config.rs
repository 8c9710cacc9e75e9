// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path, path::PathBuf, str::FromStr};

use tokio::fs;

use kalendar_core::{APP_NAME, Config as CoreConfig};

const KALENDAR_CONFIG_ENV: &str = "KALENDAR_CONFIG";

/// Load the configuration.
///
/// An explicit path, from `--config` or `$KALENDAR_CONFIG`, must exist. The
/// default file in the user config directory is optional.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        expand_path(&path)?
    } else if let Ok(env_path) = std::env::var(KALENDAR_CONFIG_ENV) {
        expand_path(Path::new(&env_path))?
    } else {
        let config = match get_config_dir() {
            Ok(dir) => dir.join(format!("{APP_NAME}/config.toml")),
            Err(e) => {
                tracing::warn!("{e}, using default configuration");
                return Ok(CoreConfig::default());
            }
        };

        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    let config = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?
        .core
        .unwrap_or_default();
    Ok(config)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    core: Option<CoreConfig>,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Handle tilde (~) and `$HOME` in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            let home = dirs::home_dir().ok_or("User-specific home directory not found")?;
            return Ok(home.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
