//! Filename derivation for saved uploads.

use std::path::Path;

use uuid::Uuid;

/// Extensions accepted into the vault
pub const SUPPORTED_EXTENSIONS: [&str; 11] = [
    ".pdf", ".docx", ".txt", ".pptx", ".md", ".csv", ".xlsx", ".xls", ".db", ".sqlite", ".sqlite3",
];

/// Lowercase extension of `name` including the leading dot, or an empty
/// string when the name has none
pub fn extension_of(name: &str) -> String {
    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!(".{}", ext.to_ascii_lowercase()),
        None => String::new(),
    }
}

pub fn is_supported(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&ext)
}

/// Random 8-hex-character token plus the extension. Uniqueness within a
/// directory is probabilistic, not checked against existing entries.
pub fn random_filename(ext: &str) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{}{}", &token[..8], ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_extension_is_lowercased_with_leading_dot() {
        assert_eq!(extension_of("report.PDF"), ".pdf");
        assert_eq!(extension_of("notes.md"), ".md");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
    }

    #[test]
    fn test_names_without_extension_yield_empty_string() {
        assert_eq!(extension_of("file"), "");
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn test_supported_set_membership() {
        assert!(is_supported(".pdf"));
        assert!(is_supported(".sqlite3"));
        assert!(!is_supported(".png"));
        assert!(!is_supported(".exe"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_random_filename_shape() {
        let name = random_filename(".pdf");
        assert_eq!(name.len(), 8 + ".pdf".len());
        assert!(name.ends_with(".pdf"));
        assert!(name[..8].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_random_filenames_are_distinct() {
        let names: HashSet<String> = (0..100).map(|_| random_filename(".txt")).collect();
        assert_eq!(names.len(), 100);
    }
}
