use std::fs;
use std::path::{Path, PathBuf};

use super::client_config::{CURRENT_VERSION, ConfigError, ConfigFile};

const APP_DIR_NAME: &str = "lensql";
const CONFIG_FILE_NAME: &str = "config.toml";

pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = get_config_dir()?;
        Ok(Self::with_config_dir(config_dir))
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            path: config_dir.join(CONFIG_FILE_NAME),
        }
    }

    /// Store for an explicit `--config` file path.
    pub fn for_file(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.path.clone()
    }

    pub fn load(&self) -> Result<Option<ConfigFile>, ConfigError> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: ConfigFile =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidFormat {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        if config.version != CURRENT_VERSION {
            return Err(ConfigError::VersionMismatch {
                found: config.version,
                expected: CURRENT_VERSION,
            });
        }

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(Some(config))
    }

    pub fn save(&self, config: &ConfigFile) -> Result<(), ConfigError> {
        let path = self.storage_path();
        let write_error = |message: String| ConfigError::Write {
            path: path.display().to_string(),
            message,
        };

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|e| write_error(e.to_string()))?;
        }

        let content = toml::to_string_pretty(config).map_err(|e| write_error(e.to_string()))?;
        let content_with_header = format!(
            "# lensql configuration\n# WARNING: session_id is stored in plain text\n\n{content}"
        );
        fs::write(&path, content_with_header).map_err(|e| write_error(e.to_string()))?;

        set_file_permissions(&path).map_err(|e| write_error(e.to_string()))
    }

    /// Writes the default config unless one exists and `force` is not set.
    pub fn init(&self, force: bool) -> Result<PathBuf, ConfigError> {
        let path = self.storage_path();
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.display().to_string()));
        }
        self.save(&ConfigFile::with_defaults())?;
        Ok(path)
    }
}

fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let config_base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_base.join(APP_DIR_NAME))
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
