/// Prefix every derived hostname starts with, matching the sticker labels
/// ("CPU 1234") used on physical machines.
pub const HOSTNAME_PREFIX: &str = "cpu";

/// Removes every whitespace character from the input, internal ones included.
///
/// Splitting on whitespace and rejoining with an empty separator strips
/// whitespace anywhere in the string, as opposed to `trim()` which only
/// cleans the head and tail.
pub fn strip_whitespace(input: &str) -> String {
    input.split_whitespace().collect()
}

/// Derives the machine hostname from the operator-entered asset identifier.
///
/// No validation is applied beyond whitespace stripping: an empty input
/// yields the bare prefix.
pub fn hostname_for(input: &str) -> String {
    format!("{}{}", HOSTNAME_PREFIX, strip_whitespace(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_whitespace_removes_internal_whitespace() {
        assert_eq!(strip_whitespace(" 1 2 3 "), "123");
        assert_eq!(strip_whitespace("A1 B2"), "A1B2");
        assert_eq!(strip_whitespace("\t42\n"), "42");
    }

    #[test]
    fn test_strip_whitespace_leaves_clean_input_untouched() {
        assert_eq!(strip_whitespace("1234"), "1234");
    }

    #[test]
    fn test_strip_whitespace_empty_input() {
        assert_eq!(strip_whitespace(""), "");
        assert_eq!(strip_whitespace("   "), "");
    }

    #[test]
    fn test_hostname_for_prefixes_cleaned_input() {
        assert_eq!(hostname_for("  42 "), "cpu42");
        assert_eq!(hostname_for("A1 B2"), "cpuA1B2");
    }

    #[test]
    fn test_hostname_for_empty_input_yields_bare_prefix() {
        assert_eq!(hostname_for(""), "cpu");
    }
}
