use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "ALGODEMO_CONFIG";

/// Configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "algodemo.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub sieve: SieveConfig,
    #[serde(default)]
    pub hanoi: HanoiConfig,
}

/// General driver settings
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Queue demonstration settings
#[derive(Debug, Clone, Deserialize)]
pub struct QueueConfig {
    #[serde(default = "default_circular_capacity")]
    pub circular_capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            circular_capacity: default_circular_capacity(),
        }
    }
}

/// Sieve settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SieveConfig {
    /// Segment width for the segmented sieve; 0 picks `floor(sqrt n) + 1`.
    #[serde(default)]
    pub segment_size: usize,
}

/// Tower of Hanoi settings
#[derive(Debug, Clone, Deserialize)]
pub struct HanoiConfig {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_destination")]
    pub destination: String,
    #[serde(default = "default_auxiliary")]
    pub auxiliary: String,
    /// Above this many disks only the move count is reported.
    #[serde(default = "default_max_listed_disks")]
    pub max_listed_disks: u32,
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            destination: default_destination(),
            auxiliary: default_auxiliary(),
            max_listed_disks: default_max_listed_disks(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_circular_capacity() -> usize {
    5
}

fn default_source() -> String {
    "A".to_string()
}

fn default_destination() -> String {
    "C".to_string()
}

fn default_auxiliary() -> String {
    "B".to_string()
}

fn default_max_listed_disks() -> u32 {
    10
}

/// Largest circular queue the queue demonstration will build.
pub const MAX_CIRCULAR_CAPACITY: usize = 4096;

/// Largest puzzle whose full move list may be printed (2^20 - 1 moves).
const MAX_LISTED_DISKS_LIMIT: u32 = 20;

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. `explicit` path (e.g. from `--config`)
    /// 2. Path specified in ALGODEMO_CONFIG environment variable
    /// 3. ./algodemo.toml in current directory
    ///
    /// A path named by 1 or 2 must exist. Without any file the built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        // Optional file; a missing .env is not an error
        let _ = dotenv::dotenv();

        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let config_path = match named {
            Some(path) => path,
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    let config = Config::default();
                    config.validate()?;
                    return Ok(config);
                }
                fallback
            }
        };

        Self::from_file(&config_path)
    }

    /// Read and validate a specific configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.queue.circular_capacity == 0 {
            anyhow::bail!("queue.circular_capacity must be greater than 0");
        }

        if self.queue.circular_capacity > MAX_CIRCULAR_CAPACITY {
            anyhow::bail!(
                "queue.circular_capacity must be at most {}",
                MAX_CIRCULAR_CAPACITY
            );
        }

        let hanoi = &self.hanoi;
        if hanoi.source == hanoi.destination
            || hanoi.source == hanoi.auxiliary
            || hanoi.destination == hanoi.auxiliary
        {
            anyhow::bail!(
                "hanoi peg names must be distinct (got {}, {}, {})",
                hanoi.source,
                hanoi.destination,
                hanoi.auxiliary
            );
        }

        if hanoi.max_listed_disks > MAX_LISTED_DISKS_LIMIT {
            anyhow::bail!(
                "hanoi.max_listed_disks must be at most {}",
                MAX_LISTED_DISKS_LIMIT
            );
        }

        Ok(())
    }

    /// Segment width to hand to the segmented sieve, if one is configured
    pub fn segment_size(&self) -> Option<usize> {
        (self.sieve.segment_size > 0).then_some(self.sieve.segment_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serialize config tests that mutate process-wide cwd and env so they don't race.
    static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

    const FULL_CONFIG: &str = r#"
[demo]
log_level = "debug"

[queue]
circular_capacity = 8

[sieve]
segment_size = 128

[hanoi]
source = "left"
destination = "right"
auxiliary = "middle"
max_listed_disks = 4
"#;

    /// Restores cwd when dropped (e.g. on panic).
    struct CwdGuard(PathBuf);
    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.0);
        }
    }

    fn with_config_env(config_path: Option<&Path>, f: impl FnOnce()) {
        let original = std::env::var(CONFIG_ENV).ok();
        match config_path {
            Some(path) => std::env::set_var(CONFIG_ENV, path),
            None => std::env::remove_var(CONFIG_ENV),
        }
        f();
        std::env::remove_var(CONFIG_ENV);
        if let Some(val) = original {
            std::env::set_var(CONFIG_ENV, val);
        }
    }

    #[test]
    fn test_config_load_from_env_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.toml");
        fs::write(&config_path, FULL_CONFIG).unwrap();

        with_config_env(Some(&config_path), || {
            let config = Config::load(None);
            assert!(config.is_ok(), "Config::load() failed: {:?}", config.err());
            let config = config.unwrap();
            assert_eq!(config.demo.log_level, "debug");
            assert_eq!(config.queue.circular_capacity, 8);
            assert_eq!(config.segment_size(), Some(128));
            assert_eq!(config.hanoi.source, "left");
            assert_eq!(config.hanoi.max_listed_disks, 4);
        });
    }

    #[test]
    fn test_explicit_path_overrides_env() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("explicit.toml");
        fs::write(&explicit, "[queue]\ncircular_capacity = 3\n").unwrap();

        with_config_env(Some(Path::new("does-not-exist.toml")), || {
            let config = Config::load(Some(&explicit)).unwrap();
            assert_eq!(config.queue.circular_capacity, 3);
            assert_eq!(config.demo.log_level, "info");
        });
    }

    #[test]
    fn test_defaults_without_any_file() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let original_dir = std::env::current_dir().unwrap();
        let _cwd = CwdGuard(original_dir);
        std::env::set_current_dir(temp_dir.path()).unwrap();

        with_config_env(None, || {
            let config = Config::load(None).unwrap();
            assert_eq!(config.demo.log_level, "info");
            assert_eq!(config.queue.circular_capacity, 5);
            assert_eq!(config.segment_size(), None);
            assert_eq!(config.hanoi.destination, "C");
            assert_eq!(config.hanoi.max_listed_disks, 10);
        });
    }

    #[test]
    fn test_config_picked_up_from_cwd() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            "[demo]\nlog_level = \"warn\"\n",
        )
        .unwrap();
        let original_dir = std::env::current_dir().unwrap();
        let _cwd = CwdGuard(original_dir);
        std::env::set_current_dir(temp_dir.path()).unwrap();

        with_config_env(None, || {
            let config = Config::load(None).unwrap();
            assert_eq!(config.demo.log_level, "warn");
        });
    }

    #[test]
    fn test_config_invalid_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        with_config_env(Some(Path::new("nonexistent.toml")), || {
            let config = Config::load(None);
            assert!(config.is_err());
            assert!(config
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file"));
        });
    }

    #[test]
    fn test_config_rejects_zero_capacity() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[queue]\ncircular_capacity = 0\n").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("circular_capacity"));
    }

    #[test]
    fn test_config_rejects_oversized_capacity() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(
            &path,
            format!("[queue]\ncircular_capacity = {}\n", MAX_CIRCULAR_CAPACITY + 1),
        )
        .unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("at most"));

        fs::write(
            &path,
            format!("[queue]\ncircular_capacity = {}\n", MAX_CIRCULAR_CAPACITY),
        )
        .unwrap();
        assert!(Config::from_file(&path).is_ok());
    }

    #[test]
    fn test_config_rejects_duplicate_pegs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[hanoi]\nsource = \"A\"\ndestination = \"A\"\n").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }

    #[test]
    fn test_config_rejects_huge_listing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[hanoi]\nmax_listed_disks = 30\n").unwrap();
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_config_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[queue\ncircular_capacity = ").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
