//! Shell state for the interactive application.
//!
//! This module contains the session/context object passed between the event
//! handlers:
//! - [`AppState`]: the current sequence, active mode, menus, and result view
//! - [`AppMode`] / [`MenuKind`] / [`PromptField`]: which screen is active
//!
//! The shell is a thin collaborator around the sequence model: it collects
//! construction parameters through prompts (with validation retries), invokes
//! one model operation per menu action, and buffers plain text results for
//! rendering. No sequence logic lives here.

use crate::fasta;
use crate::model::{Sequence, SequenceKind};

/// Which menu is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    /// Choose where the sequence comes from (file or manual entry).
    Source,
    /// Top-level actions on the loaded sequence.
    Main,
    /// The transformed-view and count printouts.
    Print,
}

impl MenuKind {
    /// The panel title for this menu.
    pub fn title(&self) -> &'static str {
        match self {
            MenuKind::Source => "Sequence source",
            MenuKind::Main => "Main menu",
            MenuKind::Print => "Print options",
        }
    }
}

/// Which value an active prompt is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    FilePath,
    SequenceText,
    ReadingFrame,
    Strand,
    Kind,
    Subsequence,
}

impl PromptField {
    /// The question shown above the input line.
    pub fn question(&self) -> &'static str {
        match self {
            PromptField::FilePath => "Enter the path of the sequence file:",
            PromptField::SequenceText => "Enter the nucleotide sequence (one line):",
            PromptField::ReadingFrame => {
                "What is the reading frame of the sequence? (1 to 3 or -1 to -3):"
            }
            PromptField::Strand => "Is this a forward strand (5' to 3')? (y/n):",
            PromptField::Kind => "What type of sequence is this? (DNA or RNA):",
            PromptField::Subsequence => "Enter a subsequence to search for:",
        }
    }
}

/// Application mode for handling different input states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Navigating a menu.
    Menu(MenuKind),
    /// Collecting one line of input (the `String` is the buffer).
    Prompt(PromptField, String),
    /// Viewing a result; scrollable, any other key returns.
    Results,
}

/// Construction parameters collected by the input wizard, in prompt order.
#[derive(Debug, Clone, Default)]
struct SequenceDraft {
    data: String,
    reading_frame: i32,
    forward_strand: bool,
}

/// The complete shell state.
#[derive(Debug)]
pub struct AppState {
    /// The loaded sequence, once the wizard has finished.
    pub sequence: Option<Sequence>,
    /// Wizard progress (source text, then frame, then strand).
    draft: SequenceDraft,
    /// Current application mode.
    pub mode: AppMode,
    /// Cursor position in the active menu.
    pub selected: usize,
    /// Title of the result view.
    pub result_title: String,
    /// Metadata line of the result view (for derived sequences).
    pub result_info: Option<String>,
    /// Body lines of the result view.
    pub result: Vec<String>,
    /// True when the result body is sequence data (enables base coloring).
    pub result_is_sequence: bool,
    /// Menu to return to when the result view is dismissed.
    results_return_to: MenuKind,
    /// Scroll offset in the result view.
    pub scroll: usize,
    /// Status message to display.
    pub status_message: Option<String>,
    /// Whether the application should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Creates a session with no sequence; starts in the input wizard.
    pub fn new() -> Self {
        Self {
            sequence: None,
            draft: SequenceDraft::default(),
            mode: AppMode::Menu(MenuKind::Source),
            selected: 0,
            result_title: String::new(),
            result_info: None,
            result: Vec::new(),
            result_is_sequence: false,
            results_return_to: MenuKind::Main,
            scroll: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Creates a session with a preloaded sequence; starts at the main menu.
    pub fn with_sequence(sequence: Sequence) -> Self {
        let mut state = Self::new();
        state.status_message = diagnostics_status(&sequence)
            .or_else(|| Some(format!("Sequence loaded ({} nt).", sequence.len())));
        state.sequence = Some(sequence);
        state.mode = AppMode::Menu(MenuKind::Main);
        state
    }

    /// The items of the currently active menu.
    pub fn menu_items(&self) -> Vec<String> {
        match self.mode {
            AppMode::Menu(MenuKind::Source) => vec![
                "Load sequence from a file".to_string(),
                "Enter sequence manually".to_string(),
            ],
            AppMode::Menu(MenuKind::Main) => {
                let target = self
                    .sequence
                    .as_ref()
                    .map(|s| s.kind().other().label())
                    .unwrap_or("RNA");
                vec![
                    "Print a version of the sequence".to_string(),
                    format!("Transform sequence to {}", target),
                    "Search sequence for a subsequence".to_string(),
                    "Restart with a new sequence".to_string(),
                    "Quit".to_string(),
                ]
            }
            AppMode::Menu(MenuKind::Print) => vec![
                "Sequence".to_string(),
                "Reverse strand".to_string(),
                "Complementary strand".to_string(),
                "Reverse complementary strand".to_string(),
                "Nucleotide count".to_string(),
                "Amino acid count".to_string(),
                "Back".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Moves the menu cursor up by one item.
    pub fn menu_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Moves the menu cursor down by one item.
    pub fn menu_down(&mut self) {
        let len = self.menu_items().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Jumps to item `index` and activates it (number-key selection).
    pub fn menu_choose(&mut self, index: usize) {
        let len = self.menu_items().len();
        if index < len {
            self.selected = index;
            self.menu_activate();
        } else {
            self.status_message = Some(format!("Invalid option: {}", index + 1));
        }
    }

    /// Activates the currently selected menu item.
    pub fn menu_activate(&mut self) {
        match self.mode {
            AppMode::Menu(MenuKind::Source) => self.activate_source_item(),
            AppMode::Menu(MenuKind::Main) => self.activate_main_item(),
            AppMode::Menu(MenuKind::Print) => self.activate_print_item(),
            _ => {}
        }
    }

    /// Leaves the current menu: print menu backs out to the main menu,
    /// everything else quits.
    pub fn menu_back(&mut self) {
        match self.mode {
            AppMode::Menu(MenuKind::Print) => self.enter_menu(MenuKind::Main),
            AppMode::Menu(_) => self.should_quit = true,
            _ => {}
        }
    }

    fn activate_source_item(&mut self) {
        match self.selected {
            0 => self.enter_prompt(PromptField::FilePath),
            1 => self.enter_prompt(PromptField::SequenceText),
            _ => {}
        }
    }

    fn activate_main_item(&mut self) {
        match self.selected {
            0 => self.enter_menu(MenuKind::Print),
            1 => self.transform_sequence(),
            2 => self.enter_prompt(PromptField::Subsequence),
            3 => {
                self.sequence = None;
                self.draft = SequenceDraft::default();
                self.status_message = Some("Enter a new sequence.".to_string());
                self.enter_menu(MenuKind::Source);
            }
            4 => self.should_quit = true,
            _ => {}
        }
    }

    fn activate_print_item(&mut self) {
        let Some(seq) = self.sequence.as_ref() else {
            return;
        };
        match self.selected {
            0 => {
                let current = seq.clone();
                self.show_sequence_result("Sequence", current);
            }
            1 => {
                let reversed = seq.reversed();
                self.show_sequence_result("Reverse strand", reversed);
            }
            2 => {
                let comp = seq.complement();
                self.show_sequence_result("Complementary strand", comp);
            }
            3 => {
                let revcomp = seq.reverse_complement();
                self.show_sequence_result("Reverse complementary strand", revcomp);
            }
            4 => {
                let counts = seq.count_nucleotides();
                let mut lines = vec![
                    format!("Adenine: {}", counts.adenine),
                    format!("Guanine: {}", counts.guanine),
                    format!("Cytosine: {}", counts.cytosine),
                ];
                // Only the symbol of the declared alphabet is reported.
                match seq.kind() {
                    SequenceKind::Dna => lines.push(format!("Thymine: {}", counts.thymine)),
                    SequenceKind::Rna => lines.push(format!("Uracil: {}", counts.uracil)),
                }
                self.show_text_result("Nucleotide count", lines, MenuKind::Print);
            }
            5 => {
                let counts = seq.count_amino_acids();
                let lines = counts
                    .iter()
                    .map(|(aa, n)| format!("{}: {}", aa.name(), n))
                    .collect();
                self.show_text_result("Amino acid count", lines, MenuKind::Print);
            }
            6 => self.enter_menu(MenuKind::Main),
            _ => {}
        }
    }

    /// Converts the loaded sequence to the other alphabet, in place.
    fn transform_sequence(&mut self) {
        let Some(seq) = self.sequence.as_mut() else {
            return;
        };
        match seq.kind() {
            SequenceKind::Dna => {
                seq.convert_to_rna();
                self.status_message = Some("Sequence converted to RNA.".to_string());
            }
            SequenceKind::Rna => {
                seq.convert_to_dna();
                self.status_message = Some("Sequence converted to DNA.".to_string());
            }
        }
    }

    fn enter_menu(&mut self, menu: MenuKind) {
        self.mode = AppMode::Menu(menu);
        self.selected = 0;
    }

    fn enter_prompt(&mut self, field: PromptField) {
        self.mode = AppMode::Prompt(field, String::new());
    }

    /// Handles a character typed into the active prompt.
    pub fn prompt_input(&mut self, c: char) {
        if let AppMode::Prompt(_, ref mut buffer) = self.mode {
            buffer.push(c);
        }
    }

    /// Handles backspace in the active prompt.
    pub fn prompt_backspace(&mut self) {
        if let AppMode::Prompt(_, ref mut buffer) = self.mode {
            buffer.pop();
        }
    }

    /// Cancels the active prompt and returns to the owning menu.
    pub fn prompt_cancel(&mut self) {
        if let AppMode::Prompt(field, _) = self.mode {
            match field {
                PromptField::Subsequence => self.enter_menu(MenuKind::Main),
                _ => self.enter_menu(MenuKind::Source),
            }
        }
    }

    /// Submits the active prompt.
    ///
    /// Invalid input keeps the prompt active with a status message, so the
    /// user can retry; valid input advances the wizard (or runs the search).
    pub fn prompt_submit(&mut self) {
        let AppMode::Prompt(field, ref buffer) = self.mode else {
            return;
        };
        let entry = buffer.trim().to_string();

        match field {
            PromptField::FilePath => match fasta::parse_fasta_file(&entry) {
                Ok(data) => {
                    self.draft.data = data;
                    self.status_message = None;
                    self.enter_prompt(PromptField::ReadingFrame);
                }
                Err(err) => {
                    self.status_message = Some(err.to_string());
                }
            },
            PromptField::SequenceText => {
                // Manual entry is uppercased on behalf of the user; file
                // content stays verbatim.
                self.draft.data = entry.to_uppercase();
                self.status_message = None;
                self.enter_prompt(PromptField::ReadingFrame);
            }
            PromptField::ReadingFrame => match entry.parse::<i32>() {
                Ok(frame) if (1..=3).contains(&frame) || (-3..=-1).contains(&frame) => {
                    self.draft.reading_frame = frame;
                    self.status_message = None;
                    self.enter_prompt(PromptField::Strand);
                }
                _ => {
                    self.status_message = Some(
                        "Invalid reading frame! Enter 1 to 3 or -1 to -3.".to_string(),
                    );
                    self.clear_prompt_buffer();
                }
            },
            PromptField::Strand => match entry.to_lowercase().as_str() {
                "y" | "yes" => {
                    self.draft.forward_strand = true;
                    self.status_message = None;
                    self.enter_prompt(PromptField::Kind);
                }
                "n" | "no" => {
                    self.draft.forward_strand = false;
                    self.status_message = None;
                    self.enter_prompt(PromptField::Kind);
                }
                _ => {
                    self.status_message = Some("Invalid response! Enter y or n.".to_string());
                    self.clear_prompt_buffer();
                }
            },
            PromptField::Kind => {
                if entry.eq_ignore_ascii_case("DNA") || entry.eq_ignore_ascii_case("RNA") {
                    let seq = Sequence::new(
                        self.draft.forward_strand,
                        self.draft.reading_frame,
                        &entry,
                        self.draft.data.clone(),
                    );
                    self.status_message = diagnostics_status(&seq)
                        .or_else(|| Some(format!("Sequence loaded ({} nt).", seq.len())));
                    self.sequence = Some(seq);
                    self.enter_menu(MenuKind::Main);
                } else {
                    self.status_message =
                        Some("Invalid sequence type! Enter DNA or RNA.".to_string());
                    self.clear_prompt_buffer();
                }
            }
            PromptField::Subsequence => {
                let Some(seq) = self.sequence.as_ref() else {
                    return;
                };
                let lines = match seq.find(&entry) {
                    Some(index) => vec![
                        format!("Query: {}", entry.to_uppercase()),
                        format!("Found at index: {}", index),
                    ],
                    // The conventional sentinel for a miss.
                    None => vec![
                        format!("Query: {}", entry.to_uppercase()),
                        "Subsequence not found (index -1).".to_string(),
                    ],
                };
                self.show_text_result("Subsequence search", lines, MenuKind::Main);
            }
        }
    }

    fn clear_prompt_buffer(&mut self) {
        if let AppMode::Prompt(_, ref mut buffer) = self.mode {
            buffer.clear();
        }
    }

    /// Shows a derived sequence in the result view.
    fn show_sequence_result(&mut self, title: &str, seq: Sequence) {
        self.result_title = title.to_string();
        self.result_info = Some(sequence_info_line(&seq));
        self.result = vec![seq.data().to_string()];
        self.result_is_sequence = true;
        self.results_return_to = MenuKind::Print;
        self.scroll = 0;
        self.status_message = diagnostics_status(&seq);
        self.mode = AppMode::Results;
    }

    /// Shows plain text lines (counts, search outcome) in the result view.
    fn show_text_result(&mut self, title: &str, lines: Vec<String>, return_to: MenuKind) {
        self.result_title = title.to_string();
        self.result_info = None;
        self.result = lines;
        self.result_is_sequence = false;
        self.results_return_to = return_to;
        self.scroll = 0;
        self.status_message = None;
        self.mode = AppMode::Results;
    }

    /// Dismisses the result view and returns to the owning menu.
    pub fn dismiss_results(&mut self) {
        let menu = self.results_return_to;
        self.enter_menu(menu);
    }

    /// Scrolls the result view up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scrolls the result view down.
    ///
    /// Bounded by the wrapped line count at the narrowest sensible panel
    /// width, so long sequences stay reachable without unbounded scrolling.
    pub fn scroll_down(&mut self) {
        let max_lines: usize = self.result.iter().map(|l| l.len() / 16 + 1).sum::<usize>() + 2;
        if self.scroll + 1 < max_lines {
            self.scroll += 1;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The one-line metadata summary shown for a sequence.
pub fn sequence_info_line(seq: &Sequence) -> String {
    format!(
        "Forward: {}, Type: {}, Reading frame: {}, Length: {} nt",
        seq.forward_strand(),
        seq.kind(),
        seq.reading_frame(),
        seq.len()
    )
}

/// Summarizes construction diagnostics for the status bar.
fn diagnostics_status(seq: &Sequence) -> Option<String> {
    let diags = seq.diagnostics();
    match diags.len() {
        0 => None,
        1 => Some(format!("Warning: {}", diags[0])),
        n => Some(format!("Warning: {} (+{} more)", diags[0], n - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Drives the active prompt with `entry` and submits it.
    fn submit(state: &mut AppState, entry: &str) {
        for c in entry.chars() {
            state.prompt_input(c);
        }
        state.prompt_submit();
    }

    fn wizard_to_main(state: &mut AppState, data: &str, frame: &str, strand: &str, kind: &str) {
        state.menu_choose(1); // manual entry
        submit(state, data);
        submit(state, frame);
        submit(state, strand);
        submit(state, kind);
    }

    #[test]
    fn test_starts_in_source_menu_without_sequence() {
        let state = AppState::new();
        assert_eq!(state.mode, AppMode::Menu(MenuKind::Source));
        assert!(state.sequence.is_none());
    }

    #[test]
    fn test_wizard_manual_entry_happy_path() {
        let mut state = AppState::new();
        wizard_to_main(&mut state, "atggga", "2", "y", "DNA");

        assert_eq!(state.mode, AppMode::Menu(MenuKind::Main));
        let seq = state.sequence.as_ref().unwrap();
        // Manual entry is uppercased by the shell.
        assert_eq!(seq.data(), "ATGGGA");
        assert_eq!(seq.reading_frame(), 2);
        assert!(seq.forward_strand());
    }

    #[test]
    fn test_wizard_invalid_frame_retries() {
        let mut state = AppState::new();
        state.menu_choose(1);
        submit(&mut state, "ATG");
        submit(&mut state, "7");

        // Still on the reading-frame prompt, with an emptied buffer.
        assert_eq!(
            state.mode,
            AppMode::Prompt(PromptField::ReadingFrame, String::new())
        );
        assert!(state.status_message.as_deref().unwrap().contains("Invalid"));

        submit(&mut state, "-3");
        assert_eq!(state.mode, AppMode::Prompt(PromptField::Strand, String::new()));
    }

    #[test]
    fn test_wizard_invalid_strand_and_kind_retry() {
        let mut state = AppState::new();
        state.menu_choose(1);
        submit(&mut state, "ATG");
        submit(&mut state, "1");
        submit(&mut state, "maybe");
        assert_eq!(state.mode, AppMode::Prompt(PromptField::Strand, String::new()));

        submit(&mut state, "no");
        submit(&mut state, "XNA");
        assert_eq!(state.mode, AppMode::Prompt(PromptField::Kind, String::new()));

        submit(&mut state, "rna");
        let seq = state.sequence.as_ref().unwrap();
        assert!(!seq.forward_strand());
        assert_eq!(seq.kind(), crate::model::SequenceKind::Rna);
    }

    #[test]
    fn test_wizard_file_path_retry_on_missing_file() {
        let mut state = AppState::new();
        state.menu_choose(0);
        submit(&mut state, "/no/such/file.fasta");

        assert!(matches!(
            state.mode,
            AppMode::Prompt(PromptField::FilePath, _)
        ));
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_wizard_file_path_loads_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ">header").unwrap();
        writeln!(file, "ATGC").unwrap();

        let mut state = AppState::new();
        state.menu_choose(0);
        submit(&mut state, &file.path().display().to_string());
        assert_eq!(
            state.mode,
            AppMode::Prompt(PromptField::ReadingFrame, String::new())
        );

        submit(&mut state, "1");
        submit(&mut state, "y");
        submit(&mut state, "dna");
        assert_eq!(state.sequence.as_ref().unwrap().data(), "ATGC");
    }

    #[test]
    fn test_transform_toggles_alphabet_in_place() {
        let mut state = AppState::new();
        wizard_to_main(&mut state, "ATGC", "1", "y", "DNA");

        state.menu_choose(1);
        let seq = state.sequence.as_ref().unwrap();
        assert_eq!(seq.kind(), crate::model::SequenceKind::Rna);
        assert_eq!(seq.data(), "AUGC");
        // The RNA conversion keeps the strand.
        assert!(seq.forward_strand());

        state.menu_choose(1);
        let seq = state.sequence.as_ref().unwrap();
        assert_eq!(seq.kind(), crate::model::SequenceKind::Dna);
        assert_eq!(seq.data(), "ATGC");
        // The DNA conversion flips it.
        assert!(!seq.forward_strand());
    }

    #[test]
    fn test_search_found_and_missing() {
        let mut state = AppState::new();
        wizard_to_main(&mut state, "ATGGGATAG", "1", "y", "DNA");

        state.menu_choose(2);
        submit(&mut state, "gga");
        assert_eq!(state.mode, AppMode::Results);
        assert_eq!(state.result[1], "Found at index: 3");

        state.dismiss_results();
        assert_eq!(state.mode, AppMode::Menu(MenuKind::Main));

        state.menu_choose(2);
        submit(&mut state, "CCC");
        assert_eq!(state.result[1], "Subsequence not found (index -1).");
    }

    #[test]
    fn test_print_menu_reverse_result() {
        let mut state = AppState::new();
        wizard_to_main(&mut state, "ATCG", "1", "y", "DNA");

        state.menu_choose(0); // print options
        assert_eq!(state.mode, AppMode::Menu(MenuKind::Print));
        state.menu_choose(1); // reverse
        assert_eq!(state.mode, AppMode::Results);
        assert_eq!(state.result, vec!["GCTA".to_string()]);
        assert!(state.result_is_sequence);
        assert!(state.result_info.as_deref().unwrap().contains("Forward: false"));

        state.dismiss_results();
        assert_eq!(state.mode, AppMode::Menu(MenuKind::Print));
    }

    #[test]
    fn test_nucleotide_count_reports_declared_alphabet_only() {
        let mut state = AppState::new();
        wizard_to_main(&mut state, "ATGGGATAG", "1", "y", "DNA");
        state.menu_choose(0);
        state.menu_choose(4);

        assert!(state.result.iter().any(|l| l == "Thymine: 2"));
        assert!(!state.result.iter().any(|l| l.starts_with("Uracil")));
    }

    #[test]
    fn test_amino_acid_count_lines() {
        let mut state = AppState::new();
        wizard_to_main(&mut state, "ATGGGATAG", "1", "y", "DNA");
        state.menu_choose(0);
        state.menu_choose(5);

        assert_eq!(state.result.len(), 21);
        assert!(state.result.iter().any(|l| l == "Methionine: 1"));
        assert!(state.result.iter().any(|l| l == "Glycine: 1"));
        assert!(state.result.iter().any(|l| l == "Stop codon: 1"));
        assert!(state.result.iter().any(|l| l == "Valine: 0"));
    }

    #[test]
    fn test_menu_navigation_clamps() {
        let mut state = AppState::new();
        assert_eq!(state.selected, 0);
        state.menu_up();
        assert_eq!(state.selected, 0);
        state.menu_down();
        assert_eq!(state.selected, 1);
        state.menu_down();
        // Source menu has two items.
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_restart_clears_sequence() {
        let mut state = AppState::new();
        wizard_to_main(&mut state, "ATGC", "1", "y", "DNA");
        state.menu_choose(3);
        assert!(state.sequence.is_none());
        assert_eq!(state.mode, AppMode::Menu(MenuKind::Source));
    }

    #[test]
    fn test_quit_from_main_menu() {
        let mut state = AppState::new();
        wizard_to_main(&mut state, "ATGC", "1", "y", "DNA");
        state.menu_choose(4);
        assert!(state.should_quit);
    }

    #[test]
    fn test_back_from_print_menu_and_quit_from_main() {
        let mut state = AppState::new();
        wizard_to_main(&mut state, "ATGC", "1", "y", "DNA");
        state.menu_choose(0);
        state.menu_back();
        assert_eq!(state.mode, AppMode::Menu(MenuKind::Main));
        state.menu_back();
        assert!(state.should_quit);
    }

    #[test]
    fn test_with_sequence_surfaces_diagnostics() {
        let seq = Sequence::new(true, 9, "DNA", "ATGC");
        let state = AppState::with_sequence(seq);
        assert_eq!(state.mode, AppMode::Menu(MenuKind::Main));
        assert!(state.status_message.as_deref().unwrap().contains("reading frame"));
    }
}
