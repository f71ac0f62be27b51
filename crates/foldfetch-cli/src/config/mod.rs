//! Configuration loading for foldfetch.
//! Reads foldfetch.toml from the current directory or path in FOLDFETCH_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::Path;

use foldfetch_structure::alphafold::{ALPHAFOLD_BASE_URL, DEFAULT_MODEL_VERSION};
use foldfetch_structure::uniprot::UNIPROT_BASE_URL;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub dssp: DsspConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    #[serde(default = "default_uniprot_base_url")]
    pub uniprot_base_url: String,
    #[serde(default = "default_alphafold_base_url")]
    pub alphafold_base_url: String,
    #[serde(default = "default_model_version")]
    pub model_version: String,
}

fn default_uniprot_base_url()   -> String { UNIPROT_BASE_URL.to_string() }
fn default_alphafold_base_url() -> String { ALPHAFOLD_BASE_URL.to_string() }
fn default_model_version()      -> String { DEFAULT_MODEL_VERSION.to_string() }

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            uniprot_base_url: default_uniprot_base_url(),
            alphafold_base_url: default_alphafold_base_url(),
            model_version: default_model_version(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsspConfig {
    #[serde(default = "default_dssp_executable")]
    pub executable: String,
    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: String,
}

fn default_dssp_executable() -> String { "mkdssp".to_string() }
fn default_scratch_dir()     -> String { ".".to_string() }

impl Default for DsspConfig {
    fn default() -> Self {
        Self {
            executable: default_dssp_executable(),
            scratch_dir: default_scratch_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default = "default_workspace_path")]
    pub path: String,
}

fn default_workspace_path() -> String { ".".to_string() }

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self { path: default_workspace_path() }
    }
}

mod tests;

impl Config {
    /// Load configuration from foldfetch.toml.
    /// Checks FOLDFETCH_CONFIG env var first, then current directory.
    /// A missing file yields the defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("FOLDFETCH_CONFIG")
            .unwrap_or_else(|_| "foldfetch.toml".to_string());

        if !Path::new(&path).exists() {
            tracing::warn!("Config file not found: {}. Using defaults.", path);
            return Ok(Self::default());
        }

        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
