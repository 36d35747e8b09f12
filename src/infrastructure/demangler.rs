//! Symbol Demangler
//!
//! Rewrites mangled Rust symbol names embedded in graph-description lines to
//! their demangled form. Upstream pipelines usually demangle before handing
//! the graph over; this covers the ones that do not.

use regex::{Captures, Regex};
use rustc_demangle::demangle;

/// Rewrites every mangled symbol occurrence in a line.
pub struct Demangler {
    mangled_re: Regex,
}

impl Default for Demangler {
    fn default() -> Self {
        // Legacy (_ZN) and v0 (_R) mangling schemes
        Self {
            mangled_re: Regex::new(r"_(ZN|R)[\$\._[:alnum:]]*").unwrap(),
        }
    }
}

impl Demangler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demangle every symbol in `line`. The alternate form strips the
    /// trailing hash suffix so labels stay comparable across builds.
    pub fn demangle_line(&self, line: &str) -> String {
        self.mangled_re
            .replace_all(line, |caps: &Captures| format!("{:#}", demangle(&caps[0])))
            .into_owned()
    }

    pub fn demangle_lines(&self, lines: Vec<String>) -> Vec<String> {
        lines.iter().map(|line| self.demangle_line(line)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demangles_legacy_symbol() {
        let demangler = Demangler::new();
        assert_eq!(demangler.demangle_line("_ZN4testE"), "test");
        assert_eq!(
            demangler.demangle_line("node0 [shape=record,label=\"{_ZN3foo3barE}\"];"),
            "node0 [shape=record,label=\"{foo::bar}\"];"
        );
    }

    #[test]
    fn test_hash_suffix_is_stripped() {
        let demangler = Demangler::new();
        assert_eq!(
            demangler.demangle_line("_ZN3foo17h05af220e108fecc6E"),
            "foo"
        );
    }

    #[test]
    fn test_unmangled_text_passes_through() {
        let demangler = Demangler::new();
        let line = "    n0 -> n1;";
        assert_eq!(demangler.demangle_line(line), line);
    }
}
