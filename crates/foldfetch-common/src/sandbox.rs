use reqwest::{Client, ClientBuilder, Url};
use std::collections::HashSet;
use tracing::debug;

use crate::error::FoldError;

/// An HTTP client that only allows requests to approved hosts.
///
/// The allowlist guards against a misconfigured base URL sending requests to an
/// unintended host. Hosts of configured base URLs are added with `allow_url_host`.
///
/// Requests carry no authentication and no extra headers. No timeout is set:
/// every call blocks its caller until the server answers or the transport fails.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a new SandboxClient with the default allowlist of structure and metadata services.
    pub fn new() -> Result<Self, FoldError> {
        let mut allowlist = HashSet::new();
        let domains = vec![
            "www.uniprot.org",     // UniProt metadata (legacy endpoint)
            "rest.uniprot.org",    // UniProt redirect target
            "alphafold.ebi.ac.uk", // AlphaFold DB model files
            "localhost",
            "127.0.0.1",
        ];

        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .build()
            .map_err(|e| FoldError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Appends the host of a base URL to the allowlist.
    pub fn allow_url_host(&mut self, base_url: &str) -> Result<(), FoldError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| FoldError::Config(format!("Invalid base URL {}: {}", base_url, e)))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| FoldError::Config(format!("Base URL has no host: {}", base_url)))?;
        debug!(host, "Allowing configured host");
        self.allow_domain(host);
        Ok(())
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Exact match or a subdomain of an allowed domain
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Exposes the inner `reqwest::Client` builder for GET requests.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, FoldError> {
        if !self.is_allowed(url) {
            return Err(FoldError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}
