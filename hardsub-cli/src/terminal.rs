// ============================================================================
// hardsub-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// This module provides a consistent terminal output styling system for the
// CLI: section headers, key-value status lines, and error blocks. Normal
// output goes to stdout; error blocks go to stderr so they remain visible
// when stdout is piped (e.g. `probe --json`).
//
// KEY COMPONENTS:
// - styling: Constants for symbols and formatting
// - UI component functions: print_section, print_status, print_error, etc.
//
// Color is handled by the `console` crate, which disables styling on its
// own when the stream is not a terminal.
//
// AI-ASSISTANT-INFO: Terminal UI components and styling for the CLI

// ---- External crate imports ----
use console::style;

// ============================================================================
// STYLING CONSTANTS
// ============================================================================

/// Styling constants for terminal output
pub mod styling {
    // Symbols (monochrome)
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const ERROR_SYMBOL: &str = "✗";

    // Section formatting
    pub const SECTION_PREFIX: &str = "===== ";
    pub const SECTION_SUFFIX: &str = " =====";

    // Indentation
    pub const STATUS_INDENT: &str = "  ";
    pub const SUBSECTION_INDENT: &str = "  ";
}

// ============================================================================
// TERMINAL COMPONENTS
// ============================================================================
//
// Terminal UI components follow a visual hierarchy:
//
// 1. Sections (===== SECTION =====)
//    - Used for major workflow phase transitions
//
// 2. Subsections (  Title)
//    - Used for per-file groupings within a section
//
// 3. Status items (  Label:     Value)
//    - Used for key-value information
//
// 4. Success messages (✓ Success message)
//    - Used to indicate completion of steps

/// Print a section header for major workflow phases
pub fn print_section(title: &str) {
    println!();
    println!(
        "{}{}{}",
        styling::SECTION_PREFIX,
        style(title.to_uppercase()).cyan().bold(),
        styling::SECTION_SUFFIX
    );
    println!();
}

/// Print a status line (key-value pair)
///
/// `highlight` emphasizes the value for key results.
pub fn print_status(label: &str, value: &str, highlight: bool) {
    let padding = if label.len() < 15 { 15 - label.len() } else { 1 };
    let formatted_label = format!("{}{}{}", label, ":", " ".repeat(padding));

    let formatted_value = if highlight {
        style(value).bold().to_string()
    } else {
        value.to_string()
    };

    println!("{}{} {}", styling::STATUS_INDENT, formatted_label, formatted_value);
}

/// Print a bold subsection title, used for per-file groupings
pub fn print_subsection(title: &str) {
    println!("{}{}", styling::SUBSECTION_INDENT, style(title).bold());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!(
        "{}{} {}",
        styling::SUBSECTION_INDENT,
        styling::SUCCESS_SYMBOL,
        message
    );
}

/// Print a formatted error block to stderr, with an optional suggestion line
pub fn print_error(title: &str, message: &str, suggestion: Option<&str>) {
    eprintln!("{} {}", styling::ERROR_SYMBOL, style(title).red().bold());
    eprintln!();
    eprintln!("  Message:  {message}");

    if let Some(suggestion_text) = suggestion {
        eprintln!();
        eprintln!("  Suggestion: {suggestion_text}");
    }

    eprintln!();
}
