//! nuctui - Terminal Nucleotide Multi-Tool
//!
//! An interactive terminal utility for DNA/RNA sequences.
//!
//! ## Usage
//!
//! ```bash
//! nuctui                       # interactive, starts with the input wizard
//! nuctui genome.fasta          # interactive, sequence preloaded
//! nuctui genome.fasta -o - --op reverse-complement   # one-shot CLI mode
//! ```
//!
//! ## Interactive keys
//!
//! - `j/k` or arrows: move / scroll
//! - `1`-`9`: pick a menu option directly
//! - `Enter`: confirm, `Esc`/`q`: back, `Ctrl+C`: quit

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use nuctui::controller::run_app;
use nuctui::fasta::load_sequence_file;
use nuctui::model::{Sequence, SequenceKind};
use nuctui::session::AppState;

/// Operation to apply in CLI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OpArg {
    /// Write the sequence as loaded
    Print,
    /// Reverse the character order
    Reverse,
    /// Base-pair complement, in input order
    Complement,
    /// Complement, then reverse
    ReverseComplement,
    /// Convert to the DNA alphabet
    ToDna,
    /// Convert to the RNA alphabet
    ToRna,
    /// Count nucleotide occurrences
    Nucleotides,
    /// Count coded amino acids
    AminoAcids,
    /// Find the first index of --query (prints -1 when absent)
    Index,
}

/// nuctui - an interactive multi-tool for one nucleotide sequence
///
/// When run without -o/--output, opens the interactive TUI (with the input
/// wizard, or with the given file preloaded). With -o/--output, runs in CLI
/// mode and writes the result of --op to a file (or stdout with "-").
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence file to load (FASTA or plain text)
    file: Option<PathBuf>,

    /// Reading frame of the input sequence (1 to 3 or -1 to -3)
    #[arg(
        short = 'r',
        long = "reading-frame",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    reading_frame: i32,

    /// Treat the input as the reverse strand (3' to 5')
    #[arg(long = "reverse-strand")]
    reverse_strand: bool,

    /// Sequence type of the input (DNA or RNA)
    #[arg(short = 't', long = "sequence-type", default_value = "DNA")]
    sequence_type: String,

    /// Output file (enables CLI mode). Use "-" for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Operation to apply in CLI mode
    #[arg(long = "op", value_enum, default_value = "print")]
    op: OpArg,

    /// Subsequence to look up with --op index
    #[arg(short = 'q', long = "query")]
    query: Option<String>,
}

/// Formats a derived sequence as a FASTA-style record the reader can load
/// back.
fn sequence_record(label: &str, seq: &Sequence) -> Vec<String> {
    vec![
        format!(
            ">{} | forward={} frame={} type={} length={}",
            label,
            seq.forward_strand(),
            seq.reading_frame(),
            seq.kind(),
            seq.len()
        ),
        seq.data().to_string(),
    ]
}

/// Runs CLI mode: load the file, apply the operation, write the result.
fn run_cli_mode(args: &Args, file_path: &PathBuf, output: &str) -> Result<()> {
    let mut sequence = load_sequence_file(
        file_path,
        !args.reverse_strand,
        args.reading_frame,
        &args.sequence_type,
    )?;

    for diag in sequence.diagnostics() {
        eprintln!("Warning: {}", diag);
    }

    let lines: Vec<String> = match args.op {
        OpArg::Print => sequence_record("sequence", &sequence),
        OpArg::Reverse => sequence_record("reverse", &sequence.reversed()),
        OpArg::Complement => sequence_record("complement", &sequence.complement()),
        OpArg::ReverseComplement => {
            sequence_record("reverse-complement", &sequence.reverse_complement())
        }
        OpArg::ToDna => sequence_record("dna", &sequence.convert_to_dna()),
        OpArg::ToRna => sequence_record("rna", &sequence.convert_to_rna()),
        OpArg::Nucleotides => {
            let counts = sequence.count_nucleotides();
            let mut lines = vec![
                format!("Adenine: {}", counts.adenine),
                format!("Guanine: {}", counts.guanine),
                format!("Cytosine: {}", counts.cytosine),
            ];
            match sequence.kind() {
                SequenceKind::Dna => lines.push(format!("Thymine: {}", counts.thymine)),
                SequenceKind::Rna => lines.push(format!("Uracil: {}", counts.uracil)),
            }
            lines
        }
        OpArg::AminoAcids => sequence
            .count_amino_acids()
            .iter()
            .map(|(aa, n)| format!("{}: {}", aa.name(), n))
            .collect(),
        OpArg::Index => {
            let query = args
                .query
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("--query is required with --op index"))?;
            // -1 is the conventional sentinel for a miss.
            let index = sequence.find(query).map(|i| i as i64).unwrap_or(-1);
            vec![index.to_string()]
        }
    };

    // Write output
    if output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for line in &lines {
            writeln!(handle, "{}", line)?;
        }
    } else {
        let mut file = std::fs::File::create(output)?;
        for line in &lines {
            writeln!(file, "{}", line)?;
        }
        eprintln!("Wrote {} lines to {}", lines.len(), output);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(output) = args.output.clone() {
        let Some(file_path) = args.file.clone() else {
            anyhow::bail!("a sequence file is required with -o/--output");
        };
        run_cli_mode(&args, &file_path, &output)?;
    } else if let Some(file_path) = &args.file {
        let sequence = load_sequence_file(
            file_path,
            !args.reverse_strand,
            args.reading_frame,
            &args.sequence_type,
        )?;
        run_app(AppState::with_sequence(sequence))?;
    } else {
        run_app(AppState::new())?;
    }

    Ok(())
}
