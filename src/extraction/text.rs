// src/extraction/text.rs

/// Collapse whitespace runs inside each line, trim lines and keep at most one
/// blank line between paragraphs.
pub fn normalize_whitespace(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut previous_blank = true;

    for line in text.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            if !previous_blank {
                lines.push(String::new());
                previous_blank = true;
            }
        } else {
            lines.push(collapsed);
            previous_blank = false;
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// Length as the user perceives it, not in bytes
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_spaces_and_blank_lines() {
        let raw = "  Software   Engineer\tIntern \n\n\n   \n Requirements:\n  - Rust\n\n";
        assert_eq!(
            normalize_whitespace(raw),
            "Software Engineer Intern\n\nRequirements:\n- Rust"
        );
    }

    #[test]
    fn test_no_leading_blank_lines() {
        assert_eq!(normalize_whitespace("\n\n  \nHello"), "Hello");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(normalize_whitespace("a\r\n\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(char_len("café"), 4);
    }
}
