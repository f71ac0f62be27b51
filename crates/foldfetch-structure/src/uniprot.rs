//! UniProt entry probe.
//!
//! Checks that a UniProt entry is reachable. The JSON payload is not read.

use std::path::Path;

use foldfetch_common::{FoldError, Result, SandboxClient};
use tracing::{debug, info, instrument};

pub const UNIPROT_BASE_URL: &str = "https://www.uniprot.org/uniprot";

/// Outcome of a successful probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub url: String,
    pub status: u16,
    pub content_length: Option<u64>,
}

impl std::fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {} {}", self.status, self.url)?;
        if let Some(len) = self.content_length {
            write!(f, " ({} bytes)", len)?;
        }
        Ok(())
    }
}

pub struct UniprotClient {
    client: SandboxClient,
    base_url: String,
}

impl UniprotClient {
    pub fn new(client: SandboxClient) -> Self {
        Self::with_base_url(client, UNIPROT_BASE_URL)
    }

    pub fn with_base_url(client: SandboxClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn entry_url(&self, uniprot_id: &str) -> String {
        format!("{}/{}.json", self.base_url, uniprot_id)
    }

    /// Fetch the entry's JSON document and report the response status.
    ///
    /// `_workdir` is accepted for symmetry with the download operations and is unused.
    /// Any transport failure or non-success status becomes `FoldError::Metadata`.
    #[instrument(skip(self, _workdir))]
    pub async fn probe(&self, uniprot_id: &str, _workdir: Option<&Path>) -> Result<ProbeReport> {
        let url = self.entry_url(uniprot_id);
        debug!(url = %url, "Probing UniProt entry");

        let resp = self
            .client
            .get(&url)
            .map_err(FoldError::metadata)?
            .send()
            .await
            .map_err(FoldError::metadata)?
            .error_for_status()
            .map_err(FoldError::metadata)?;

        let report = ProbeReport {
            url: resp.url().to_string(),
            status: resp.status().as_u16(),
            content_length: resp.content_length(),
        };
        info!("{}", report);
        Ok(report)
    }
}
