/// Extraction of an application's Ruby runtime version from its version
/// manager marker files.
///
/// Two sources, in priority order:
/// 1. `.tool-versions` (asdf/mise) - a multi-tool file with lines of the
///    form `<tool> <version>`; only the `ruby` line is of interest.
/// 2. `.ruby-version` (rbenv/rvm) - the whole file is one version string.

/// Tag token marking the Ruby line in a `.tool-versions` file.
const RUBY_TOOL_TAG: &str = "ruby";

/// Extracts the Ruby version from `.tool-versions` content.
///
/// Takes the first line whose first whitespace-separated token is `ruby`
/// and returns the following token. Returns `None` when no such line
/// exists or the tag has no version after it.
pub fn from_tool_versions(content: &str) -> Option<String> {
    for line in content.lines() {
        let mut tokens = line.trim().split_whitespace();
        if tokens.next() != Some(RUBY_TOOL_TAG) {
            continue;
        }
        if let Some(version) = tokens.next() {
            return Some(version.to_string());
        }
    }
    None
}

/// Extracts the Ruby version from `.ruby-version` content.
///
/// The whole trimmed content is the version. Returns `None` for a blank
/// file.
pub fn from_ruby_version_file(content: &str) -> Option<String> {
    let version = content.trim();
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}
