//! Package name canonicalization.

use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_.]+").unwrap());

/// Canonicalize a distribution name.
///
/// Lowercases the name and collapses every run of `-`, `_` and `.` into a
/// single `-`, so `Foo_Bar`, `foo.bar` and `foo--bar` all compare equal.
pub fn canonicalize(name: &str) -> String {
    SEPARATOR_RUN
        .replace_all(name.trim(), "-")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases() {
        assert_eq!(canonicalize("Django"), "django");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(canonicalize("zope.interface"), "zope-interface");
        assert_eq!(canonicalize("typing_extensions"), "typing-extensions");
        assert_eq!(canonicalize("Foo.-_Bar"), "foo-bar");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(canonicalize("  requests "), "requests");
    }

    #[test]
    fn spellings_of_one_name_agree() {
        assert_eq!(canonicalize("PyYAML"), canonicalize("pyyaml"));
        assert_eq!(canonicalize("ruamel.yaml"), canonicalize("ruamel_yaml"));
        assert_ne!(canonicalize("requests"), canonicalize("requests-oauthlib"));
    }
}
