use crate::config::schema::{self, BotConfig, OutputConfig};
use crate::error::{Error, Result};
use crate::output::{OutputHandler, console::ConsoleOutput, json::JsonOutput};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;
use validator::Validate;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<BotConfig> {
        let path = path.as_ref();
        let mut visited = HashSet::new();
        Self::load_with_inheritance(path, &mut visited, false)
    }

    /// Loads `path` when given, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<BotConfig> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let config = BotConfig::default();
                Self::check(&config)?;
                Ok(config)
            }
        }
    }

    fn load_with_inheritance(
        path: &Path,
        visited: &mut HashSet<PathBuf>,
        is_parent_load: bool,
    ) -> Result<BotConfig> {
        let path = fs::canonicalize(path).map_err(|e| {
            Error::Config(format!("{}: {}", path.display(), e))
        })?;

        if visited.contains(&path) {
            return Err(Error::Config(format!(
                "Circular inheritance detected involving {}",
                path.display()
            )));
        }
        visited.insert(path.clone());

        let config = Self::load_file(&path)?;

        let final_config = if let Some(parent_path_str) = &config.extends {
            let parent_path = path.parent()
                .ok_or_else(|| Error::Config(format!(
                    "Cannot determine parent directory for {}",
                    path.display()
                )))?
                .join(parent_path_str);

            let parent_config = Self::load_with_inheritance(&parent_path, visited, true)?;
            Self::merge_configs(parent_config, config)
        } else {
            config
        };

        if !is_parent_load {
            Self::check(&final_config)?;
        }

        Ok(final_config)
    }

    fn check(config: &BotConfig) -> Result<()> {
        config.validate()?;

        let url = Url::parse(&config.source_url).map_err(|e| {
            Error::Config(format!("Invalid source_url '{}': {}", config.source_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "source_url must be http(s), got '{}'",
                url.scheme()
            )));
        }

        Url::parse(&config.llm.endpoint).map_err(|e| {
            Error::Config(format!("Invalid llm.endpoint '{}': {}", config.llm.endpoint, e))
        })?;
        Ok(())
    }

    fn load_file(path: &Path) -> Result<BotConfig> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Err(Error::Config(format!(
                "Unsupported file extension: {}",
                path.display()
            ))),
        }
    }

    /// Child values win wherever they differ from the defaults.
    fn merge_configs(mut parent: BotConfig, child: BotConfig) -> BotConfig {
        let defaults = BotConfig::default();

        if child.name != schema::default_name() {
            parent.name = child.name;
        }
        if child.source_url != schema::default_source_url() {
            parent.source_url = child.source_url;
        }
        if child.table_selector != defaults.table_selector {
            parent.table_selector = child.table_selector;
        }
        if child.timeout_secs != schema::default_timeout() {
            parent.timeout_secs = child.timeout_secs;
        }
        if child.user_agent != schema::default_user_agent() {
            parent.user_agent = child.user_agent;
        }
        if child.llm != defaults.llm {
            parent.llm = child.llm;
        }
        if child.output.is_some() {
            parent.output = child.output;
        }

        parent.extends = None;
        parent
    }

    pub fn create_output(
        config: &BotConfig,
        multi: Option<Arc<indicatif::MultiProgress>>,
    ) -> Result<Box<dyn OutputHandler>> {
        let handler: Box<dyn OutputHandler> = match &config.output {
            Some(OutputConfig::Json { path }) => Box::new(JsonOutput::new(PathBuf::from(path))?),
            Some(OutputConfig::Console) | None => Box::new(ConsoleOutput::new(multi)),
        };
        Ok(handler)
    }
}
