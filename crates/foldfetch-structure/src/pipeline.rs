//! Orchestrator for download followed by secondary structure extraction.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use foldfetch_common::Result;

use crate::alphafold::AlphaFoldFetcher;
use crate::dssp::DsspRunner;
use crate::secstruct::SecondaryStructure;

/// Secondary structure of one downloaded model.
#[derive(Debug, Clone, Serialize)]
pub struct StructureAnnotation {
    pub uniprot_id: String,
    pub path: PathBuf,
    pub secondary_structure: SecondaryStructure,
}

pub struct StructurePipeline {
    fetcher: AlphaFoldFetcher,
    dssp: DsspRunner,
    output_dir: PathBuf,
}

impl StructurePipeline {
    pub fn new<P: AsRef<Path>>(fetcher: AlphaFoldFetcher, dssp: DsspRunner, output_dir: P) -> Self {
        Self {
            fetcher,
            dssp,
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Download every model, then run DSSP on each file that was written.
    ///
    /// Identifiers without a model are left out of the result.
    pub async fn run<S: AsRef<str>>(&self, uniprot_ids: &[S]) -> Result<Vec<StructureAnnotation>> {
        info!("Running structure pipeline for {} identifiers", uniprot_ids.len());

        let summary = self.fetcher.download_all(uniprot_ids, &self.output_dir).await?;

        let mut annotations = Vec::with_capacity(summary.written.len());
        for id in uniprot_ids.iter().map(AsRef::as_ref) {
            let path = self.fetcher.target(id, &self.output_dir).path;
            if !summary.written.contains(&path) {
                continue;
            }
            let secondary_structure = self.dssp.secondary_structure(&path).await?;
            annotations.push(StructureAnnotation {
                uniprot_id: id.to_string(),
                path,
                secondary_structure,
            });
        }

        Ok(annotations)
    }
}
