use std::fs;
use std::io::IsTerminal;
use std::path::Path;

/// Create an OSC8 file:// hyperlink for terminal output
pub fn osc8_file_link(path: &Path, text: &str) -> String {
    let abs_path = fs::canonicalize(path)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string_lossy().to_string());
    format!("\x1b]8;;file://{}\x1b\\{}\x1b]8;;\x1b\\", abs_path, text)
}

/// `text` as a link to `path` when stdout is a terminal, plain text otherwise
pub fn display_file(path: &Path, text: &str) -> String {
    if std::io::stdout().is_terminal() {
        osc8_file_link(path, text)
    } else {
        text.to_string()
    }
}
