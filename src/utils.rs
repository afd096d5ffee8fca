use std::fs;
use std::io::IsTerminal;
use std::path::Path;

/// Create an OSC8 file:// hyperlink for terminal output
pub fn osc8_file_link(path: &Path, text: &str) -> String {
    let abs_path = fs::canonicalize(path)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.display().to_string());
    format!("\x1b]8;;file://{}\x1b\\{}\x1b]8;;\x1b\\", abs_path, text)
}

/// Directory name for a summary line, clickable when stdout is a terminal
pub fn display_dir(path: &Path) -> String {
    let text = format!("{}/", path.display());
    if std::io::stdout().is_terminal() {
        osc8_file_link(path, &text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_link_wraps_text_and_uses_absolute_path() {
        let temp_dir = TempDir::new().unwrap();
        let abs = fs::canonicalize(temp_dir.path()).unwrap();

        let link = osc8_file_link(temp_dir.path(), "crops/");
        assert!(link.starts_with(&format!("\x1b]8;;file://{}\x1b\\", abs.display())));
        assert!(link.ends_with("crops/\x1b]8;;\x1b\\"));
    }

    #[test]
    fn file_link_falls_back_to_given_path() {
        let link = osc8_file_link(Path::new("does/not/exist"), "x");
        assert!(link.contains("file://does/not/exist"));
    }
}
