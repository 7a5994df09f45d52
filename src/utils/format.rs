/// Format a second count with the correct singular/plural unit
pub fn seconds_label(seconds: u32) -> String {
    if seconds == 1 {
        "1 second".to_string()
    } else {
        format!("{} seconds", seconds)
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_label() {
        assert_eq!(seconds_label(30), "30 seconds");
        assert_eq!(seconds_label(2), "2 seconds");
        assert_eq!(seconds_label(1), "1 second");
        assert_eq!(seconds_label(0), "0 seconds");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 8), "Hello...");
        assert_eq!(truncate("Hi", 2), "Hi");
    }
}
