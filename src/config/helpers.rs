use crate::lexer::strip_comments;

/// Locate the line that defines `path` in the raw source.
///
/// Returns `(0, "<key not found>")` when the key cannot be located.
pub(super) fn find_config_line(path: &str, raw_content: &str) -> (usize, String) {
    let stripped = strip_comments(raw_content);
    let mut group = String::new();

    for (idx, line) in stripped.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            group = header.to_string();
            if group == path {
                return (idx + 1, trimmed.to_string());
            }
            continue;
        }

        let Some((key, _)) = trimmed.split_once('=') else {
            continue;
        };

        let full_path = if group.is_empty() {
            key.trim().to_string()
        } else {
            format!("{}.{}", group, key.trim())
        };

        if full_path == path {
            return (idx + 1, trimmed.to_string());
        }
    }

    (0, "<key not found>".into())
}
