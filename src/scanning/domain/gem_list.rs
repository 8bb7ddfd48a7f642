/// Ordered list of gem names to inventory.
///
/// Parsed from the plain-text gem list file: one name per line, blank
/// lines skipped, surrounding whitespace trimmed. Input order and
/// duplicates are preserved, since the list drives the column order of
/// the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GemList {
    names: Vec<String>,
}

impl GemList {
    /// Parses the raw content of a gem list file.
    pub fn parse(content: &str) -> Self {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_name_per_line() {
        let list = GemList::parse("rails\nrack\npuma\n");
        assert_eq!(list.names(), &["rails", "rack", "puma"]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let list = GemList::parse("  rails  \n\n\t\nrack\n   \n");
        assert_eq!(list.names(), &["rails", "rack"]);
    }

    #[test]
    fn test_parse_preserves_order_and_duplicates() {
        let list = GemList::parse("zeta\nalpha\nzeta\n");
        assert_eq!(list.names(), &["zeta", "alpha", "zeta"]);
    }

    #[test]
    fn test_parse_empty_content() {
        let list = GemList::parse("");
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let list = GemList::parse("rails\r\nrack\r\n");
        assert_eq!(list.names(), &["rails", "rack"]);
    }
}
