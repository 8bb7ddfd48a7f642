use crate::shared::error::ScanError;
use crate::shared::Result;
use regex::Regex;

/// Combined line matcher for all requested gems.
///
/// Gemfile.lock records a resolved gem as a line of the exact form
/// `name (version)`, where the version is one or more dot-separated
/// integers. Rather than scanning each lock file once per gem, a single
/// alternation pattern is compiled from the whole gem list up front, so
/// every lock file is read in one linear pass with one regex test per
/// line regardless of how many gems are requested.
///
/// Each name goes through `regex::escape`, so names containing
/// metacharacters (dots, plus signs) match literally.
#[derive(Debug)]
pub struct LineMatcher {
    pattern: Regex,
}

/// A single `name (version)` hit extracted from a lock file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedGem {
    pub name: String,
    pub version: String,
}

impl LineMatcher {
    /// Compiles the combined pattern from the requested gem names.
    pub fn compile(names: &[String]) -> Result<Self> {
        let alternatives = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");

        let pattern =
            Regex::new(&format!(r"^({}) \((\d+(?:\.\d+)*)\)$", alternatives)).map_err(|e| {
                ScanError::PatternError {
                    details: e.to_string(),
                }
            })?;

        Ok(Self { pattern })
    }

    /// Tests one lock file line (already trimmed) against the pattern.
    ///
    /// Returns the captured (name, version) pair on a match, `None` for
    /// every line that is not a locked-gem line for a requested gem.
    pub fn match_line(&self, line: &str) -> Option<LockedGem> {
        let captures = self.pattern.captures(line)?;

        Some(LockedGem {
            name: captures[1].to_string(),
            version: captures[2].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(names: &[&str]) -> LineMatcher {
        let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        LineMatcher::compile(&names).unwrap()
    }

    #[test]
    fn test_matches_exact_form() {
        let m = matcher(&["rails"]);
        let hit = m.match_line("rails (7.1.2)").unwrap();
        assert_eq!(hit.name, "rails");
        assert_eq!(hit.version, "7.1.2");
    }

    #[test]
    fn test_matches_single_component_version() {
        let m = matcher(&["rack"]);
        let hit = m.match_line("rack (3)").unwrap();
        assert_eq!(hit.version, "3");
    }

    #[test]
    fn test_rejects_other_gems() {
        let m = matcher(&["rails"]);
        assert!(m.match_line("rack (3.0.8)").is_none());
    }

    #[test]
    fn test_rejects_dependency_constraint_lines() {
        // Gemfile.lock dependency entries carry constraints, not bare versions
        let m = matcher(&["rails"]);
        assert!(m.match_line("rails (>= 7.0)").is_none());
        assert!(m.match_line("rails (~> 7.1.2)").is_none());
    }

    #[test]
    fn test_rejects_prerelease_versions() {
        let m = matcher(&["rails"]);
        assert!(m.match_line("rails (7.1.0.beta1)").is_none());
    }

    #[test]
    fn test_anchored_to_whole_line() {
        let m = matcher(&["rack"]);
        assert!(m.match_line("  rack (3.0.8)").is_none());
        assert!(m.match_line("rack (3.0.8) extra").is_none());
        assert!(m.match_line("webrack (3.0.8)").is_none());
    }

    #[test]
    fn test_escapes_metacharacters_in_names() {
        // The dot must match literally, not any character
        let m = matcher(&["net.http"]);
        assert!(m.match_line("net.http (0.4.1)").is_some());
        assert!(m.match_line("netxhttp (0.4.1)").is_none());
    }

    #[test]
    fn test_alternation_captures_the_matched_name() {
        let m = matcher(&["rails", "rack", "puma"]);
        let hit = m.match_line("puma (6.4.0)").unwrap();
        assert_eq!(hit.name, "puma");
        assert_eq!(hit.version, "6.4.0");
    }

    #[test]
    fn test_empty_name_list_matches_nothing() {
        let m = matcher(&[]);
        assert!(m.match_line("rails (7.1.2)").is_none());
        assert!(m.match_line("(1.0)").is_none());
    }
}
