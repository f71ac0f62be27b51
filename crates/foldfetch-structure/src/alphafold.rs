//! AlphaFold DB model file download.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use foldfetch_common::{Result, SandboxClient};

pub const ALPHAFOLD_BASE_URL: &str = "https://alphafold.ebi.ac.uk";
pub const DEFAULT_MODEL_VERSION: &str = "v2";

/// Model file name for a UniProt accession, e.g. `AF-P69905-F1-model_v2.pdb`.
pub fn model_file_name(uniprot_id: &str, model_version: &str) -> String {
    format!("AF-{}-F1-model_{}.pdb", uniprot_id, model_version)
}

/// Where a model file is fetched from and where it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub uniprot_id: String,
    pub url: String,
    pub path: PathBuf,
}

impl DownloadTarget {
    pub fn new(base_url: &str, uniprot_id: &str, model_version: &str, dir: &Path) -> Self {
        let file_name = model_file_name(uniprot_id, model_version);
        Self {
            uniprot_id: uniprot_id.to_string(),
            url: format!("{}/files/{}", base_url.trim_end_matches('/'), file_name),
            path: dir.join(file_name),
        }
    }
}

/// Files written and identifiers with no model, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub written: Vec<PathBuf>,
    pub missing: Vec<String>,
}

/// Client for downloading AlphaFold model files.
pub struct AlphaFoldFetcher {
    client: SandboxClient,
    base_url: String,
    model_version: String,
}

impl AlphaFoldFetcher {
    pub fn new(client: SandboxClient) -> Self {
        Self {
            client,
            base_url: ALPHAFOLD_BASE_URL.to_string(),
            model_version: DEFAULT_MODEL_VERSION.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model_version(mut self, model_version: impl Into<String>) -> Self {
        self.model_version = model_version.into();
        self
    }

    pub fn target(&self, uniprot_id: &str, dir: &Path) -> DownloadTarget {
        DownloadTarget::new(&self.base_url, uniprot_id, &self.model_version, dir)
    }

    /// Download one model file. Returns `Ok(None)` when the server answers
    /// with any non-success status; transport and file errors are returned.
    pub async fn fetch(&self, target: &DownloadTarget) -> Result<Option<PathBuf>> {
        debug!(url = %target.url, "Fetching AlphaFold model");
        let resp = self.client.get(&target.url)?.send().await?;

        let status = resp.status();
        if !status.is_success() {
            debug!(%status, url = %target.url, "No model served");
            return Ok(None);
        }

        let content = resp.bytes().await?;
        fs::write(&target.path, content).await?;

        debug!("Wrote {:?}", target.path);
        Ok(Some(target.path.clone()))
    }

    /// Download model files for each identifier, strictly in order, into `dir`.
    ///
    /// An HTTP error status is logged and the identifier skipped. Transport,
    /// allowlist and file errors abort the batch; files already written are
    /// left in place.
    pub async fn download_all<S: AsRef<str>>(&self, uniprot_ids: &[S], dir: &Path) -> Result<DownloadSummary> {
        let total = uniprot_ids.len();
        let mut summary = DownloadSummary::default();

        for (counter, id) in uniprot_ids.iter().enumerate() {
            let id = id.as_ref();
            info!("At entry {}/{}", counter, total);
            info!("ID: {}", id);

            let target = self.target(id, dir);
            match self.fetch(&target).await? {
                Some(path) => summary.written.push(path),
                None => {
                    warn!("No such file.");
                    summary.missing.push(id.to_string());
                }
            }
        }

        info!(
            written = summary.written.len(),
            missing = summary.missing.len(),
            "AlphaFold download finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_file_name() {
        assert_eq!(model_file_name("P69905", "v2"), "AF-P69905-F1-model_v2.pdb");
    }

    #[test]
    fn test_default_target() {
        let fetcher = AlphaFoldFetcher::new(SandboxClient::new().unwrap());
        let target = fetcher.target("Q8WZ42", Path::new("/data/af"));
        assert_eq!(
            target.url,
            "https://alphafold.ebi.ac.uk/files/AF-Q8WZ42-F1-model_v2.pdb"
        );
        assert_eq!(target.path, PathBuf::from("/data/af/AF-Q8WZ42-F1-model_v2.pdb"));
        assert_eq!(target.uniprot_id, "Q8WZ42");
    }

    #[test]
    fn test_custom_base_and_version() {
        let fetcher = AlphaFoldFetcher::new(SandboxClient::new().unwrap())
            .with_base_url("http://127.0.0.1:8000/")
            .with_model_version("v4");
        let target = fetcher.target("P1", Path::new("."));
        assert_eq!(target.url, "http://127.0.0.1:8000/files/AF-P1-F1-model_v4.pdb");
        assert_eq!(target.path, PathBuf::from("./AF-P1-F1-model_v4.pdb"));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = AlphaFoldFetcher::new(SandboxClient::new().unwrap());
        let ids: Vec<String> = Vec::new();
        let summary = fetcher.download_all(&ids, dir.path()).await.unwrap();
        assert_eq!(summary, DownloadSummary::default());
    }
}
