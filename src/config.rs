use crate::error::{GalefetchError, Result};
use crate::value::Value;
use dirs::config_dir;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const SYSTEM_CONFIG_PATH: &str = "/usr/share/galefetch/config.toml";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Distribution id whose ascii art to show, or "auto" to follow the
    /// detected distribution.
    pub distro_ascii: String,
    /// Optional override for the detected distribution name.
    pub distro_name: Option<String>,
    /// Optional path to a custom ascii art file, tilde-expanded.
    pub ascii_path: Option<String>,
    /// Modules to run, in output order.
    pub modules: Vec<ModuleEntry>,
    /// 256-color palette indices for color slots 1..N.
    pub ansii_colors: Vec<u8>,
    /// Prefer `ansii_colors` over a color header embedded in the ascii art.
    pub force_config_ansii: bool,
    /// Expose filesystem types through the partitions module.
    pub show_fs_type: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            distro_ascii: "auto".to_string(),
            distro_name: None,
            ascii_path: None,
            modules: Vec::new(),
            ansii_colors: Vec::new(),
            force_config_ansii: false,
            show_fs_type: true,
        }
    }
}

/// One entry of the configured module list. Omitted `format`/`data` fall
/// back to the module's built-in defaults.
#[derive(Deserialize, Debug, Clone)]
pub struct ModuleEntry {
    pub name: String,
    pub format: Option<String>,
    pub data: Option<BTreeMap<String, Value>>,
}

fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("galefetch/config.toml"))
}

/// Copy the packaged default config into the user config dir on first run.
/// Best effort: a failure here never blocks the fetch itself.
pub fn ensure_user_config_exists() {
    let Some(user_config_path) = user_config_path() else {
        return;
    };

    if user_config_path.exists() {
        return;
    }

    if let Some(parent) = user_config_path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    if Path::new(SYSTEM_CONFIG_PATH).exists() {
        if fs::copy(SYSTEM_CONFIG_PATH, &user_config_path).is_ok() {
            println!("Created config at {}", user_config_path.display());
        }
    } else {
        eprintln!("Missing default config at {}", SYSTEM_CONFIG_PATH);
    }
}

/// Load the configuration from `path`, or from the user config dir with a
/// fallback to the system-wide default.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let user_config_path = user_config_path();
            match user_config_path {
                Some(p) if p.exists() => p,
                _ => SYSTEM_CONFIG_PATH.into(),
            }
        }
    };

    let config_data = fs::read_to_string(&config_path).map_err(|err| {
        GalefetchError::Config(format!(
            "could not read config file {}: {}",
            config_path.display(),
            err
        ))
    })?;

    toml::de::from_str(&config_data).map_err(|err| {
        GalefetchError::Config(format!(
            "could not parse config file {}: {}",
            config_path.display(),
            err
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_entries_keep_configured_order() {
        let config: Config = toml::de::from_str(
            r#"
            distro_ascii = "arch"
            ansii_colors = [4, 6]

            [[modules]]
            name = "memory"

            [[modules]]
            name = "hostname"
            format = "$HOSTNAME"

            [[modules]]
            name = "cpus"
            [modules.data]
            hidden_cpus = [2]
            "#,
        )
        .unwrap();

        let names: Vec<&str> = config.modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["memory", "hostname", "cpus"]);
        assert_eq!(config.modules[1].format.as_deref(), Some("$HOSTNAME"));
        assert_eq!(
            config.modules[2].data.as_ref().unwrap()["hidden_cpus"],
            Value::List(vec![Value::Integer(2)])
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = toml::de::from_str("").unwrap();
        assert_eq!(config.distro_ascii, "auto");
        assert!(config.show_fs_type);
        assert!(!config.force_config_ansii);
        assert!(config.modules.is_empty());
    }
}
