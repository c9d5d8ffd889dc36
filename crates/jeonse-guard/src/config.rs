use anyhow::Context;
use jeonse_core::{SearchEndpoint, NAVER_LAND_SEARCH};
use serde::Deserialize;
use std::io;
use std::path::Path;

const DEFAULT_STEP: u64 = 100;

#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) input: InputConfig,
    #[serde(default)]
    pub(crate) search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InputConfig {
    #[serde(default = "default_step")]
    pub(crate) step: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchConfig {
    #[serde(default = "default_endpoint")]
    pub(crate) endpoint: String,
}

impl Config {
    /// Reads the TOML file at `path`. A missing file yields the defaults.
    pub(crate) fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read config {}", path.display()))
            }
        };
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.input.step == 0 {
            anyhow::bail!("input.step must be greater than 0");
        }
        if self.search.endpoint.trim().is_empty() {
            anyhow::bail!("search.endpoint must not be empty");
        }
        Ok(())
    }

    pub(crate) fn search_endpoint(&self) -> SearchEndpoint {
        SearchEndpoint::new(self.search.endpoint.trim())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_step() -> u64 {
    DEFAULT_STEP
}

fn default_endpoint() -> String {
    NAVER_LAND_SEARCH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.input.step, 100);
        assert_eq!(config.search.endpoint, NAVER_LAND_SEARCH);
    }

    #[test]
    fn overrides_step_and_endpoint() {
        let input = r#"
[input]
step = 1000

[search]
endpoint = "https://example.test/find?q="
"#;
        let config: Config = toml::from_str(input).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.input.step, 1000);
        assert_eq!(
            config.search_endpoint().url_for("Mapo").as_deref(),
            Some("https://example.test/find?q=Mapo")
        );
    }

    #[test]
    fn rejects_zero_step() {
        let input = r#"
[input]
step = 0
"#;
        let config: Config = toml::from_str(input).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_step() {
        let input = r#"
[input]
step = -100
"#;
        let parsed: Result<Config, _> = toml::from_str(input);
        assert!(parsed.is_err());
    }

    #[test]
    fn rejects_blank_endpoint() {
        let input = r#"
[search]
endpoint = "  "
"#;
        let config: Config = toml::from_str(input).unwrap();
        assert!(config.validate().is_err());
    }

    fn temp_dir(prefix: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        dir.push(format!("{prefix}-{nanos}"));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = temp_dir("jeonse-guard-load-rejects-malformed-file");
        let path = dir.join("jeonse-guard.toml");
        fs::write(&path, "[input\nstep = 100\n").expect("write config");
        let err = Config::load(&path).expect_err("malformed config");
        assert!(format!("{err:#}").contains("failed to parse config"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_zero_step_file() {
        let dir = temp_dir("jeonse-guard-load-rejects-zero-step-file");
        let path = dir.join("jeonse-guard.toml");
        fs::write(&path, "[input]\nstep = 0\n").expect("write config");
        assert!(Config::load(&path).is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reads_existing_file() {
        let dir = temp_dir("jeonse-guard-load-reads-existing-file");
        let path = dir.join("jeonse-guard.toml");
        fs::write(&path, "[input]\nstep = 500\n").expect("write config");
        let config = Config::load(&path).expect("load");
        assert_eq!(config.input.step, 500);
        assert_eq!(config.search.endpoint, NAVER_LAND_SEARCH);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_fails_on_directory() {
        let dir = temp_dir("jeonse-guard-load-fails-on-directory");
        assert!(Config::load(&dir).is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_default() {
        let config = Config::load("does/not/exist/jeonse-guard.toml").expect("load");
        assert_eq!(config.input.step, 100);
    }
}
