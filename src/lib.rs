//! # nuctui - Terminal Nucleotide Multi-Tool
//!
//! An interactive terminal utility for a single DNA/RNA sequence: view it in
//! its transformed forms (reverse, complement, reverse-complement), convert
//! between the DNA and RNA alphabets, count nucleotides and coded amino
//! acids, and search for a subsequence.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture with clear separation:
//! - `model`: the core sequence type with its transformations and analyses
//! - `genetic_code`: the standard codon table and amino-acid tallies
//! - `fasta`: minimal header-skipping sequence-file reading
//! - `session`: shell state (menus, prompts, wizard, result buffers)
//! - `event`: keyboard event handling
//! - `ui`: TUI rendering with ratatui
//! - `controller`: orchestration of the main loop
//!
//! All sequence semantics live in `model` and `genetic_code`; the remaining
//! modules only collect input and display results.

pub mod controller;
pub mod event;
pub mod fasta;
pub mod genetic_code;
pub mod model;
pub mod session;
pub mod ui;
