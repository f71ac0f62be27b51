//! foldfetch-structure - Protein structure acquisition and secondary structure extraction.
//!
//! This crate handles:
//! 1. Probing UniProt for entry metadata
//! 2. Downloading AlphaFold DB model files
//! 3. Running DSSP and parsing its per-residue secondary structure codes
//! 4. Chaining download and extraction for a batch of identifiers

pub mod alphafold;
pub mod dssp;
pub mod pipeline;
pub mod secstruct;
pub mod uniprot;

pub use foldfetch_common::{FoldError, Result};
