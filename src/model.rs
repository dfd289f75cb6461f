//! Data model for nucleotide sequences.
//!
//! This module contains the core value type of the application:
//! - [`Sequence`]: one nucleotide sequence plus its strand orientation,
//!   reading frame, and alphabet (DNA or RNA)
//! - [`NucleotideCounts`]: per-base tallies
//! - [`Diagnostic`]: recoverable warnings recorded during construction
//!
//! Every transformation returns a fresh, independent `Sequence`. The two
//! `convert_to_*` methods additionally update the receiver in place; they are
//! the only mutation path besides construction.

use thiserror::Error;

use crate::genetic_code::{AminoAcidCounts, GeneticCode};

/// The nucleic-acid alphabet a sequence is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Deoxyribonucleic acid (A, T, C, G).
    Dna,
    /// Ribonucleic acid (A, U, C, G).
    Rna,
}

impl SequenceKind {
    /// Parses a user-supplied label, case-insensitively.
    ///
    /// Unknown labels fall back to DNA and record a [`Diagnostic`].
    fn from_label(label: &str, diagnostics: &mut Vec<Diagnostic>) -> Self {
        if label.eq_ignore_ascii_case("DNA") {
            SequenceKind::Dna
        } else if label.eq_ignore_ascii_case("RNA") {
            SequenceKind::Rna
        } else {
            diagnostics.push(Diagnostic::InvalidSequenceType(label.to_string()));
            SequenceKind::Dna
        }
    }

    /// Returns the display label ("DNA" or "RNA").
    pub fn label(&self) -> &'static str {
        match self {
            SequenceKind::Dna => "DNA",
            SequenceKind::Rna => "RNA",
        }
    }

    /// Returns the opposite alphabet.
    pub fn other(&self) -> SequenceKind {
        match self {
            SequenceKind::Dna => SequenceKind::Rna,
            SequenceKind::Rna => SequenceKind::Dna,
        }
    }
}

impl std::fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Recoverable warnings emitted while constructing a [`Sequence`].
///
/// None of these abort construction; the offending value is normalized (or,
/// for stray characters, kept verbatim) and the warning is recorded on the
/// resulting instance for the caller to display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("invalid reading frame {0}, defaulting to 1 (valid: 1 to 3 or -1 to -3)")]
    InvalidReadingFrame(i32),

    #[error("invalid sequence type {0:?}, defaulting to DNA (valid: DNA, RNA)")]
    InvalidSequenceType(String),

    #[error("non-nucleotide character {character:?} at index {index}")]
    NonNucleotide { character: char, index: usize },
}

/// A single nucleotide sequence with its bookkeeping metadata.
///
/// The sequence data is stored verbatim; uppercasing input is the caller's
/// concern. Characters outside {A, T, C, G, U} are tolerated (each one is
/// reported via a [`Diagnostic`]) so that real-world files with ambiguity
/// codes still load.
#[derive(Debug, Clone)]
pub struct Sequence {
    forward_strand: bool,
    reading_frame: i32,
    kind: SequenceKind,
    data: String,
    diagnostics: Vec<Diagnostic>,
}

impl Default for Sequence {
    /// An empty forward DNA strand with reading frame 1.
    fn default() -> Self {
        Self {
            forward_strand: true,
            reading_frame: 1,
            kind: SequenceKind::Dna,
            data: String::new(),
            diagnostics: Vec::new(),
        }
    }
}

impl Sequence {
    /// Creates a sequence from raw text and user-supplied metadata.
    ///
    /// The reading frame must lie in 1..=3 or -3..=-1; anything else is
    /// normalized to 1. The type label is matched case-insensitively against
    /// "DNA"/"RNA" and falls back to DNA. Both normalizations, and every
    /// character outside the nucleotide alphabet, are recorded in
    /// [`Sequence::diagnostics`].
    pub fn new(
        forward_strand: bool,
        reading_frame: i32,
        kind_label: &str,
        data: impl Into<String>,
    ) -> Self {
        let mut diagnostics = Vec::new();
        let reading_frame = normalize_reading_frame(reading_frame, &mut diagnostics);
        let kind = SequenceKind::from_label(kind_label, &mut diagnostics);
        let data = data.into();
        scan_for_strays(&data, &mut diagnostics);
        Self {
            forward_strand,
            reading_frame,
            kind,
            data,
            diagnostics,
        }
    }

    /// Internal constructor for transformation results.
    ///
    /// Runs the same frame normalization and character scan as
    /// [`Sequence::new`], so a recomputed frame that falls out of range
    /// (possible for the empty sequence) is caught here too.
    fn derive(forward_strand: bool, reading_frame: i32, kind: SequenceKind, data: String) -> Self {
        let mut diagnostics = Vec::new();
        let reading_frame = normalize_reading_frame(reading_frame, &mut diagnostics);
        scan_for_strays(&data, &mut diagnostics);
        Self {
            forward_strand,
            reading_frame,
            kind,
            data,
            diagnostics,
        }
    }

    /// True if the sequence is oriented 5'→3'.
    pub fn forward_strand(&self) -> bool {
        self.forward_strand
    }

    /// The reading frame, always in 1..=3 or -3..=-1.
    pub fn reading_frame(&self) -> i32 {
        self.reading_frame
    }

    /// The alphabet this sequence is expressed in.
    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    /// The raw sequence text.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Returns the length of the sequence.
    pub fn len(&self) -> usize {
        self.data.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Warnings recorded while this instance was constructed.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The reading frame as seen from the opposite strand.
    ///
    /// Uses the pre-transformation strand direction and length. The forward
    /// and reverse cases are deliberately asymmetric:
    ///
    /// ```text
    /// forward:  -(((L + F - 1) % 3) + 1)
    /// reverse:   ((L + F + 1) % 3) + 1
    /// ```
    ///
    /// `%` is truncated remainder, so small lengths with negative frames can
    /// land outside the valid range; [`Sequence::derive`] normalizes that.
    fn opposite_frame(&self) -> i32 {
        let len = self.len() as i32;
        if self.forward_strand {
            -((len + self.reading_frame - 1) % 3 + 1)
        } else {
            (len + self.reading_frame + 1) % 3 + 1
        }
    }

    /// Returns this sequence in the DNA alphabet (U → T).
    ///
    /// The result is on the opposite strand, with the reading frame
    /// recomputed accordingly.
    pub fn to_dna(&self) -> Sequence {
        let data = self.data.replace('U', "T");
        Sequence::derive(
            !self.forward_strand,
            self.opposite_frame(),
            SequenceKind::Dna,
            data,
        )
    }

    /// Converts this sequence to the DNA alphabet in place.
    ///
    /// The receiver and the returned copy both carry the new state: DNA
    /// alphabet, flipped strand, recomputed frame.
    pub fn convert_to_dna(&mut self) -> Sequence {
        let next = self.to_dna();
        *self = next.clone();
        next
    }

    /// Returns this sequence in the RNA alphabet (T → U).
    ///
    /// Note: unlike [`Sequence::to_dna`], the strand orientation is left
    /// unchanged; only the reading frame is recomputed. This mirrors the
    /// established behavior of the tool and is relied upon by callers.
    pub fn to_rna(&self) -> Sequence {
        let data = self.data.replace('T', "U");
        Sequence::derive(
            self.forward_strand,
            self.opposite_frame(),
            SequenceKind::Rna,
            data,
        )
    }

    /// Converts this sequence to the RNA alphabet in place.
    ///
    /// Same asymmetry as [`Sequence::to_rna`]: the strand orientation does
    /// not change.
    pub fn convert_to_rna(&mut self) -> Sequence {
        let next = self.to_rna();
        *self = next.clone();
        next
    }

    /// Base-pair substitution for every character, in input order.
    fn paired_data(&self) -> String {
        self.data
            .chars()
            .filter_map(|c| match c {
                'A' => Some(match self.kind {
                    SequenceKind::Dna => 'T',
                    SequenceKind::Rna => 'U',
                }),
                'T' | 'U' => Some('A'),
                'C' => Some('G'),
                'G' => Some('C'),
                // Characters outside the pairing alphabet have no partner.
                _ => None,
            })
            .collect()
    }

    /// Returns the complementary strand.
    ///
    /// Pairs A↔T (DNA) or A↔U (RNA) and C↔G, keeping the alphabet and the
    /// character order. The result is on the opposite strand with the frame
    /// recomputed. This is the plain complement; see
    /// [`Sequence::reverse_complement`] for the reversed form.
    pub fn complement(&self) -> Sequence {
        Sequence::derive(
            !self.forward_strand,
            self.opposite_frame(),
            self.kind,
            self.paired_data(),
        )
    }

    /// Returns the reverse-complementary strand.
    ///
    /// Built as two chained steps: a complement that keeps the current
    /// reading frame on the intermediate, then [`Sequence::reversed`] on that
    /// result. The strand therefore flips twice and the frame is recomputed
    /// once, against the intermediate orientation. The two steps are kept
    /// literal rather than collapsed into one formula.
    pub fn reverse_complement(&self) -> Sequence {
        Sequence::derive(
            !self.forward_strand,
            self.reading_frame,
            self.kind,
            self.paired_data(),
        )
        .reversed()
    }

    /// Returns the sequence with its character order reversed.
    ///
    /// The result is on the opposite strand with the frame recomputed.
    pub fn reversed(&self) -> Sequence {
        let data: String = self.data.chars().rev().collect();
        Sequence::derive(!self.forward_strand, self.opposite_frame(), self.kind, data)
    }

    /// Finds the first occurrence of `query` in the sequence.
    ///
    /// The query is uppercased before searching; the stored data is matched
    /// verbatim. Returns `None` when absent. An empty query matches at 0.
    pub fn find(&self, query: &str) -> Option<usize> {
        self.data.find(&query.to_uppercase())
    }

    /// Tallies every nucleotide in the sequence.
    ///
    /// All five symbols are counted; which of thymine/uracil is shown to the
    /// user is a display decision based on [`Sequence::kind`].
    pub fn count_nucleotides(&self) -> NucleotideCounts {
        let mut counts = NucleotideCounts::default();
        for c in self.data.chars() {
            match c {
                'A' => counts.adenine += 1,
                'T' => counts.thymine += 1,
                'C' => counts.cytosine += 1,
                'G' => counts.guanine += 1,
                'U' => counts.uracil += 1,
                _ => {}
            }
        }
        counts
    }

    /// Counts the amino acids coded by this sequence.
    ///
    /// RNA sequences are first converted to their DNA view with
    /// [`Sequence::to_dna`] (the codon table is DNA-alphabet), which flips
    /// the strand and recomputes the frame; the walk below then uses that
    /// recomputed frame. Codons are read in triplets starting at offset
    /// `reading_frame - 1`; a trailing partial codon is ignored, and codons
    /// containing non-ACGT characters count nothing.
    ///
    /// Negative frames start the walk below zero; offsets before the start
    /// of the sequence yield no codon until the walk re-enters it.
    pub fn count_amino_acids(&self) -> AminoAcidCounts {
        let dna_view;
        let seq = match self.kind {
            SequenceKind::Dna => self,
            SequenceKind::Rna => {
                dna_view = self.to_dna();
                &dna_view
            }
        };

        let code = GeneticCode::standard();
        let chars: Vec<char> = seq.data.chars().collect();
        let len = chars.len() as i32;
        let mut counts = AminoAcidCounts::default();

        let mut pos = seq.reading_frame - 1;
        while pos < len {
            if pos >= 0 && pos + 3 <= len {
                let codon: String = chars[pos as usize..(pos + 3) as usize].iter().collect();
                if let Some(aa) = code.translate(&codon) {
                    counts.record(aa);
                }
            }
            pos += 3;
        }

        counts
    }
}

/// Clamps an out-of-range reading frame to 1, recording a diagnostic.
fn normalize_reading_frame(reading_frame: i32, diagnostics: &mut Vec<Diagnostic>) -> i32 {
    if (1..=3).contains(&reading_frame) || (-3..=-1).contains(&reading_frame) {
        reading_frame
    } else {
        diagnostics.push(Diagnostic::InvalidReadingFrame(reading_frame));
        1
    }
}

/// Records a diagnostic for every character outside {A, T, C, G, U}.
fn scan_for_strays(data: &str, diagnostics: &mut Vec<Diagnostic>) {
    for (index, character) in data.chars().enumerate() {
        if !matches!(character, 'A' | 'T' | 'C' | 'G' | 'U') {
            diagnostics.push(Diagnostic::NonNucleotide { character, index });
        }
    }
}

/// Per-base occurrence tallies for a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NucleotideCounts {
    pub adenine: usize,
    pub thymine: usize,
    pub cytosine: usize,
    pub guanine: usize,
    pub uracil: usize,
}

impl NucleotideCounts {
    /// Sum over all five tallied symbols.
    pub fn total(&self) -> usize {
        self.adenine + self.thymine + self.cytosine + self.guanine + self.uracil
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetic_code::AminoAcid;

    #[test]
    fn test_default_sequence() {
        let seq = Sequence::default();
        assert!(seq.forward_strand());
        assert_eq!(seq.reading_frame(), 1);
        assert_eq!(seq.kind(), SequenceKind::Dna);
        assert!(seq.is_empty());
        assert!(seq.diagnostics().is_empty());
    }

    #[test]
    fn test_construction_keeps_valid_metadata() {
        let seq = Sequence::new(false, -2, "rna", "AUGC");
        assert!(!seq.forward_strand());
        assert_eq!(seq.reading_frame(), -2);
        assert_eq!(seq.kind(), SequenceKind::Rna);
        assert_eq!(seq.data(), "AUGC");
        assert!(seq.diagnostics().is_empty());
    }

    #[test]
    fn test_invalid_reading_frame_normalized() {
        for bad in [0, 4, -4, 100] {
            let seq = Sequence::new(true, bad, "DNA", "ATCG");
            assert_eq!(seq.reading_frame(), 1);
            assert_eq!(seq.diagnostics(), &[Diagnostic::InvalidReadingFrame(bad)]);
        }
    }

    #[test]
    fn test_invalid_sequence_type_normalized() {
        let seq = Sequence::new(true, 1, "XNA", "ATCG");
        assert_eq!(seq.kind(), SequenceKind::Dna);
        assert_eq!(
            seq.diagnostics(),
            &[Diagnostic::InvalidSequenceType("XNA".to_string())]
        );
    }

    #[test]
    fn test_stray_characters_reported_not_rejected() {
        let seq = Sequence::new(true, 1, "DNA", "ANTX");
        assert_eq!(seq.data(), "ANTX");
        assert_eq!(
            seq.diagnostics(),
            &[
                Diagnostic::NonNucleotide {
                    character: 'N',
                    index: 1
                },
                Diagnostic::NonNucleotide {
                    character: 'X',
                    index: 3
                },
            ]
        );
    }

    #[test]
    fn test_reversed() {
        let seq = Sequence::new(true, 1, "DNA", "ATCG");
        let rev = seq.reversed();
        assert_eq!(rev.data(), "GCTA");
        assert!(!rev.forward_strand());
        // forward, L=4, F=1: -(((4 + 1 - 1) % 3) + 1) = -2
        assert_eq!(rev.reading_frame(), -2);
        assert_eq!(rev.kind(), SequenceKind::Dna);
    }

    #[test]
    fn test_reverse_of_reverse_restores_data_and_strand() {
        let seq = Sequence::new(true, 2, "DNA", "ATCGATC");
        let twice = seq.reversed().reversed();
        assert_eq!(twice.data(), seq.data());
        assert_eq!(twice.forward_strand(), seq.forward_strand());

        // The frame after two flips follows the double-applied rule, not
        // necessarily the original value.
        let len = seq.len() as i32;
        let once = -((len + seq.reading_frame() - 1) % 3 + 1);
        let expected = (len + once + 1) % 3 + 1;
        assert_eq!(twice.reading_frame(), expected);
    }

    #[test]
    fn test_complement_dna() {
        let seq = Sequence::new(true, 1, "DNA", "ATCG");
        let comp = seq.complement();
        assert_eq!(comp.data(), "TAGC");
        assert!(!comp.forward_strand());
        assert_eq!(comp.kind(), SequenceKind::Dna);
    }

    #[test]
    fn test_complement_rna_pairs_a_with_u() {
        let seq = Sequence::new(true, 1, "RNA", "AUCG");
        let comp = seq.complement();
        assert_eq!(comp.data(), "UAGC");
        assert_eq!(comp.kind(), SequenceKind::Rna);
    }

    #[test]
    fn test_complement_is_self_inverse_on_data() {
        let dna = Sequence::new(true, 1, "DNA", "ATCGGGTTA");
        assert_eq!(dna.complement().complement().data(), dna.data());

        let rna = Sequence::new(true, 1, "RNA", "AUCGGGUUA");
        assert_eq!(rna.complement().complement().data(), rna.data());
    }

    #[test]
    fn test_complement_drops_unpairable_characters() {
        let seq = Sequence::new(true, 1, "DNA", "ANTG");
        assert_eq!(seq.complement().data(), "TAC");
    }

    #[test]
    fn test_reverse_complement_is_a_two_step_pipeline() {
        let seq = Sequence::new(true, 1, "DNA", "ATCG");
        let rc = seq.reverse_complement();
        assert_eq!(rc.data(), "CGAT");
        // Strand flips twice: complement, then reverse.
        assert!(rc.forward_strand());
        // The intermediate keeps frame 1 on the reverse strand; reversing it
        // recomputes: ((4 + 1 + 1) % 3) + 1 = 1.
        assert_eq!(rc.reading_frame(), 1);
    }

    #[test]
    fn test_to_dna_flips_strand() {
        let seq = Sequence::new(true, 1, "RNA", "AUGC");
        let dna = seq.to_dna();
        assert_eq!(dna.data(), "ATGC");
        assert_eq!(dna.kind(), SequenceKind::Dna);
        assert!(!dna.forward_strand());
        // Original untouched.
        assert_eq!(seq.data(), "AUGC");
        assert!(seq.forward_strand());
    }

    #[test]
    fn test_to_rna_keeps_strand() {
        let seq = Sequence::new(true, 1, "DNA", "ATGC");
        let rna = seq.to_rna();
        assert_eq!(rna.data(), "AUGC");
        assert_eq!(rna.kind(), SequenceKind::Rna);
        // The RNA conversion does not flip the strand.
        assert!(rna.forward_strand());
        // The frame is still recomputed: forward, L=4, F=1 → -2.
        assert_eq!(rna.reading_frame(), -2);
    }

    #[test]
    fn test_convert_to_dna_mutates_receiver() {
        let mut seq = Sequence::new(true, 1, "RNA", "AUGC");
        let returned = seq.convert_to_dna();
        assert_eq!(seq.data(), "ATGC");
        assert_eq!(seq.kind(), SequenceKind::Dna);
        assert!(!seq.forward_strand());
        assert_eq!(returned.data(), seq.data());
        assert_eq!(returned.forward_strand(), seq.forward_strand());
        assert_eq!(returned.reading_frame(), seq.reading_frame());
    }

    #[test]
    fn test_dna_then_rna_round_trips_the_letters() {
        let mut seq = Sequence::new(true, 1, "RNA", "AUGGC");
        seq.convert_to_dna();
        assert_eq!(seq.data(), "ATGGC");
        seq.convert_to_rna();
        assert_eq!(seq.data(), "AUGGC");
        assert_eq!(seq.kind(), SequenceKind::Rna);
    }

    #[test]
    fn test_find() {
        let seq = Sequence::new(true, 1, "DNA", "ATGGGATAG");
        assert_eq!(seq.find("GGA"), Some(3));
        assert_eq!(seq.find("CCC"), None);
        // Query is uppercased before searching.
        assert_eq!(seq.find("gga"), Some(3));
        // Empty query matches at the start.
        assert_eq!(seq.find(""), Some(0));
    }

    #[test]
    fn test_count_nucleotides() {
        let seq = Sequence::new(true, 1, "DNA", "ATGGGATAG");
        let counts = seq.count_nucleotides();
        assert_eq!(counts.adenine, 3);
        assert_eq!(counts.thymine, 2);
        assert_eq!(counts.guanine, 4);
        assert_eq!(counts.cytosine, 0);
        assert_eq!(counts.uracil, 0);
        assert_eq!(counts.total(), seq.len());
    }

    #[test]
    fn test_count_nucleotides_skips_strays() {
        let seq = Sequence::new(true, 1, "DNA", "ATNNGC");
        let counts = seq.count_nucleotides();
        assert_eq!(counts.total(), seq.len() - 2);
    }

    #[test]
    fn test_count_amino_acids_frame_one() {
        let seq = Sequence::new(true, 1, "DNA", "ATGGGATAG");
        let counts = seq.count_amino_acids();
        // ATG GGA TAG → Met, Gly, Stop.
        assert_eq!(counts.get(AminoAcid::Methionine), 1);
        assert_eq!(counts.get(AminoAcid::Glycine), 1);
        assert_eq!(counts.get(AminoAcid::Stop), 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_count_amino_acids_frame_two() {
        let seq = Sequence::new(true, 2, "DNA", "ATGGGATAG");
        let counts = seq.count_amino_acids();
        // TGG GAT → Trp, Asp; the trailing "AG" is a partial codon.
        assert_eq!(counts.get(AminoAcid::Tryptophan), 1);
        assert_eq!(counts.get(AminoAcid::AsparticAcid), 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_count_amino_acids_negative_frame_skips_leading_offsets() {
        let seq = Sequence::new(false, -1, "DNA", "ATGGGATAG");
        let counts = seq.count_amino_acids();
        // The walk starts at offset -2; the first in-bounds codons start at
        // 1 and 4: TGG, GAT.
        assert_eq!(counts.get(AminoAcid::Tryptophan), 1);
        assert_eq!(counts.get(AminoAcid::AsparticAcid), 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_count_amino_acids_rna_uses_recomputed_dna_frame() {
        let seq = Sequence::new(true, 1, "RNA", "AUGGGAUAG");
        // The DNA view flips to the reverse strand with frame -1, so the
        // codon walk starts at offset -2 and reads TGG, GAT.
        let counts = seq.count_amino_acids();
        assert_eq!(counts.get(AminoAcid::Tryptophan), 1);
        assert_eq!(counts.get(AminoAcid::AsparticAcid), 1);
        assert_eq!(counts.total(), 2);
        // Non-destructive: the receiver is still RNA.
        assert_eq!(seq.kind(), SequenceKind::Rna);
        assert_eq!(seq.data(), "AUGGGAUAG");
    }

    #[test]
    fn test_count_amino_acids_ignores_codons_with_strays() {
        let seq = Sequence::new(true, 1, "DNA", "ATGNNNGGA");
        let counts = seq.count_amino_acids();
        assert_eq!(counts.get(AminoAcid::Methionine), 1);
        assert_eq!(counts.get(AminoAcid::Glycine), 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_empty_sequence_transformations() {
        let seq = Sequence::default();
        // forward, L=0, F=1: -(((0 + 1 - 1) % 3) + 1) = -1.
        let rev = seq.reversed();
        assert_eq!(rev.reading_frame(), -1);
        assert!(rev.data().is_empty());
        assert_eq!(seq.count_amino_acids().total(), 0);
        assert_eq!(seq.count_nucleotides().total(), 0);
    }
}
