//! Small helpers shared across the pipeline.

/// Truncate a string for log lines and console previews.
///
/// Counts characters rather than bytes so multi-byte headlines never
/// split mid-character. Strings at or under `max` come back unchanged;
/// longer ones are cut and marked with `"..."`.
pub fn truncate_display(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_unchanged() {
        assert_eq!(truncate_display("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_long_string_cut_and_marked() {
        let s = "a".repeat(120);
        let result = truncate_display(&s, 100);
        assert_eq!(result, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let s = "é".repeat(60);
        let result = truncate_display(&s, 50);
        assert_eq!(result.trim_end_matches("...").chars().count(), 50);
    }

    #[test]
    fn test_exact_length_unchanged() {
        let s = "a".repeat(100);
        assert_eq!(truncate_display(&s, 100), s);
    }
}
