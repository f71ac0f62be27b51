//! Per-residue secondary structure codes as assigned by DSSP.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One DSSP secondary structure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SsCode {
    /// `H`, alpha helix
    AlphaHelix,
    /// `B`, residue in isolated beta bridge
    Bridge,
    /// `E`, extended strand, participates in beta ladder
    Strand,
    /// `G`, 3-10 helix
    Helix310,
    /// `I`, pi helix
    PiHelix,
    /// `T`, hydrogen bonded turn
    Turn,
    /// `S`, bend
    Bend,
    /// `P`, polyproline II helix (DSSP 4 and later)
    PolyProline,
    /// `-`, no assignment (blank in DSSP output)
    Unassigned,
    /// Any other character found in the structure column, kept verbatim.
    Other(char),
}

impl SsCode {
    /// Map a raw byte from the DSSP structure column. A space means no assignment.
    /// Reports are ASCII; any other byte becomes `Other(U+FFFD)`.
    pub fn from_dssp_byte(b: u8) -> Self {
        if b.is_ascii() {
            Self::from_char(b as char)
        } else {
            SsCode::Other(char::REPLACEMENT_CHARACTER)
        }
    }

    pub fn from_char(c: char) -> Self {
        match c {
            'H' => SsCode::AlphaHelix,
            'B' => SsCode::Bridge,
            'E' => SsCode::Strand,
            'G' => SsCode::Helix310,
            'I' => SsCode::PiHelix,
            'T' => SsCode::Turn,
            'S' => SsCode::Bend,
            'P' => SsCode::PolyProline,
            ' ' | '-' => SsCode::Unassigned,
            other => SsCode::Other(other),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            SsCode::AlphaHelix => 'H',
            SsCode::Bridge => 'B',
            SsCode::Strand => 'E',
            SsCode::Helix310 => 'G',
            SsCode::PiHelix => 'I',
            SsCode::Turn => 'T',
            SsCode::Bend => 'S',
            SsCode::PolyProline => 'P',
            SsCode::Unassigned => '-',
            SsCode::Other(c) => *c,
        }
    }

    /// Whether this code is any of the helix classes (H, G, I).
    pub fn is_helix(&self) -> bool {
        matches!(self, SsCode::AlphaHelix | SsCode::Helix310 | SsCode::PiHelix)
    }

    /// Whether this code is a beta class (E, B).
    pub fn is_beta(&self) -> bool {
        matches!(self, SsCode::Strand | SsCode::Bridge)
    }
}

impl fmt::Display for SsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ordered secondary structure codes, one per residue, in residue order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondaryStructure {
    codes: Vec<SsCode>,
}

impl SecondaryStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, code: SsCode) {
        self.codes.push(code);
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[SsCode] {
        &self.codes
    }

    pub fn get(&self, residue: usize) -> Option<SsCode> {
        self.codes.get(residue).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SsCode> {
        self.codes.iter()
    }

    /// Count of residues per code, ordered by code character.
    pub fn composition(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for code in self.iter() {
            *counts.entry(code.as_char()).or_insert(0) += 1;
        }
        counts
    }

    /// Fraction of residues in helix classes (H, G, I). Zero for an empty record.
    pub fn helix_fraction(&self) -> f64 {
        self.fraction(SsCode::is_helix)
    }

    /// Fraction of residues in beta classes (E, B). Zero for an empty record.
    pub fn beta_fraction(&self) -> f64 {
        self.fraction(SsCode::is_beta)
    }

    fn fraction(&self, pred: fn(&SsCode) -> bool) -> f64 {
        if self.codes.is_empty() {
            return 0.0;
        }
        self.iter().filter(|c| pred(c)).count() as f64 / self.codes.len() as f64
    }
}

impl From<Vec<SsCode>> for SecondaryStructure {
    fn from(codes: Vec<SsCode>) -> Self {
        Self { codes }
    }
}

impl FromIterator<SsCode> for SecondaryStructure {
    fn from_iter<I: IntoIterator<Item = SsCode>>(iter: I) -> Self {
        Self { codes: iter.into_iter().collect() }
    }
}

impl std::str::FromStr for SecondaryStructure {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.chars().map(SsCode::from_char).collect())
    }
}

impl fmt::Display for SecondaryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.codes {
            write!(f, "{}", code.as_char())?;
        }
        Ok(())
    }
}

impl Serialize for SecondaryStructure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SecondaryStructure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.chars().map(SsCode::from_char).collect())
    }
}
