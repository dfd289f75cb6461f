//! Genetic code definitions and translation logic.
//!
//! This module provides:
//! - The standard genetic code (NCBI table 1) as a DNA codon table
//! - Codon to amino acid translation
//! - Per-amino-acid tallies for whole-sequence counting

use std::collections::HashMap;

/// The twenty amino acids plus the stop signal.
///
/// Declared in the order the tool reports counts, so `ALL` doubles as the
/// display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Alanine,
    Arginine,
    AsparticAcid,
    Cysteine,
    GlutamicAcid,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Asparagine,
    Stop,
    Threonine,
    Tyrosine,
    Tryptophan,
    Valine,
}

impl AminoAcid {
    /// Every category, in reporting order.
    pub const ALL: [AminoAcid; 21] = [
        AminoAcid::Alanine,
        AminoAcid::Arginine,
        AminoAcid::AsparticAcid,
        AminoAcid::Cysteine,
        AminoAcid::GlutamicAcid,
        AminoAcid::Glutamine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Leucine,
        AminoAcid::Lysine,
        AminoAcid::Methionine,
        AminoAcid::Phenylalanine,
        AminoAcid::Proline,
        AminoAcid::Serine,
        AminoAcid::Asparagine,
        AminoAcid::Stop,
        AminoAcid::Threonine,
        AminoAcid::Tyrosine,
        AminoAcid::Tryptophan,
        AminoAcid::Valine,
    ];

    /// Maps an IUPAC one-letter code (`*` for stop) to its category.
    pub fn from_letter(letter: char) -> Option<AminoAcid> {
        match letter {
            'A' => Some(AminoAcid::Alanine),
            'R' => Some(AminoAcid::Arginine),
            'D' => Some(AminoAcid::AsparticAcid),
            'C' => Some(AminoAcid::Cysteine),
            'E' => Some(AminoAcid::GlutamicAcid),
            'Q' => Some(AminoAcid::Glutamine),
            'G' => Some(AminoAcid::Glycine),
            'H' => Some(AminoAcid::Histidine),
            'I' => Some(AminoAcid::Isoleucine),
            'L' => Some(AminoAcid::Leucine),
            'K' => Some(AminoAcid::Lysine),
            'M' => Some(AminoAcid::Methionine),
            'F' => Some(AminoAcid::Phenylalanine),
            'P' => Some(AminoAcid::Proline),
            'S' => Some(AminoAcid::Serine),
            'N' => Some(AminoAcid::Asparagine),
            '*' => Some(AminoAcid::Stop),
            'T' => Some(AminoAcid::Threonine),
            'Y' => Some(AminoAcid::Tyrosine),
            'W' => Some(AminoAcid::Tryptophan),
            'V' => Some(AminoAcid::Valine),
            _ => None,
        }
    }

    /// The display name used in count reports.
    pub fn name(&self) -> &'static str {
        match self {
            AminoAcid::Alanine => "Alanine",
            AminoAcid::Arginine => "Arginine",
            AminoAcid::AsparticAcid => "Aspartic acid",
            AminoAcid::Cysteine => "Cysteine",
            AminoAcid::GlutamicAcid => "Glutamic acid",
            AminoAcid::Glutamine => "Glutamine",
            AminoAcid::Glycine => "Glycine",
            AminoAcid::Histidine => "Histidine",
            AminoAcid::Isoleucine => "Isoleucine",
            AminoAcid::Leucine => "Leucine",
            AminoAcid::Lysine => "Lysine",
            AminoAcid::Methionine => "Methionine",
            AminoAcid::Phenylalanine => "Phenylalanine",
            AminoAcid::Proline => "Proline",
            AminoAcid::Serine => "Serine",
            AminoAcid::Asparagine => "Asparagine",
            AminoAcid::Stop => "Stop codon",
            AminoAcid::Threonine => "Threonine",
            AminoAcid::Tyrosine => "Tyrosine",
            AminoAcid::Tryptophan => "Tryptophan",
            AminoAcid::Valine => "Valine",
        }
    }
}

/// The standard genetic code in NCBI format: 64 amino-acid letters in
/// TTT, TTC, TTA, TTG, TCT, ... order (Base1 outermost, T/C/A/G).
const STANDARD_NCBIEAA: &str = "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// A codon → amino-acid table over the DNA alphabet.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    /// Codon to amino acid mapping (64 entries)
    codon_table: HashMap<String, AminoAcid>,
}

impl GeneticCode {
    /// Builds the standard genetic code table.
    pub fn standard() -> Self {
        let bases = ['T', 'C', 'A', 'G'];
        let mut codon_table = HashMap::new();
        let mut letters = STANDARD_NCBIEAA.chars();

        for &b1 in &bases {
            for &b2 in &bases {
                for &b3 in &bases {
                    let codon = format!("{}{}{}", b1, b2, b3);
                    let letter = letters.next().expect("64-entry code string");
                    let aa = AminoAcid::from_letter(letter).expect("valid amino-acid letter");
                    codon_table.insert(codon, aa);
                }
            }
        }

        Self { codon_table }
    }

    /// Translates a single DNA codon.
    ///
    /// The lookup is exact: three uppercase A/C/G/T characters. Anything
    /// else (wrong length, U, ambiguity codes, lowercase) returns `None`;
    /// uppercasing and U→T conversion are the caller's concern.
    pub fn translate(&self, codon: &str) -> Option<AminoAcid> {
        self.codon_table.get(codon).copied()
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::standard()
    }
}

/// Occurrence tallies per amino-acid category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AminoAcidCounts {
    counts: [usize; AminoAcid::ALL.len()],
}

impl AminoAcidCounts {
    /// Adds one occurrence of `aa`.
    pub fn record(&mut self, aa: AminoAcid) {
        self.counts[aa as usize] += 1;
    }

    /// The tally for one category.
    pub fn get(&self, aa: AminoAcid) -> usize {
        self.counts[aa as usize]
    }

    /// Sum over all categories.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterates categories with their tallies, in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, usize)> + '_ {
        AminoAcid::ALL.iter().map(move |&aa| (aa, self.get(aa)))
    }
}
