//! Anchored command patterns with named capture groups.
//!
//! A command's grammar is an ordinary regex; the dispatcher anchors it
//! (`^pattern$`) before evaluation so a partial-line match never
//! silently succeeds. Arguments travel through named capture groups,
//! canonically `value` and `extra`. An optional group that matched the
//! empty string is "present but empty" — handlers treat that the same
//! as "absent": no value supplied.

use std::collections::HashMap;

use regex_lite::Regex;
use thiserror::Error;

/// Canonical name of the primary argument group.
pub const VALUE_GROUP: &str = "value";

/// Canonical name of the secondary argument group.
pub const EXTRA_GROUP: &str = "extra";

/// Grammar fragment for a required (non-empty) argument.
pub const REQUIRED_ARGUMENT: &str = "(?<value>.+)";

/// Grammar fragment for an optional (possibly empty) argument.
pub const OPTIONAL_ARGUMENT: &str = "(?<value>.*)";

/// Errors from compiling a command pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern is not a valid regex.
    #[error("invalid command pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },
}

/// A compiled, anchored command pattern.
#[derive(Debug, Clone)]
pub struct CommandPattern {
    raw: String,
    regex: Regex,
}

impl CommandPattern {
    /// Compile `^pattern$`.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^{pattern}$")).map_err(|source| PatternError::Invalid {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            raw: pattern.to_string(),
            regex,
        })
    }

    /// The unanchored pattern text, as registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a whole input line, extracting the named groups that
    /// participated in the match.
    pub fn try_match(&self, line: &str) -> Option<Arguments> {
        let caps = self.regex.captures(line)?;

        let mut groups = HashMap::new();
        for name in self.regex.capture_names().flatten() {
            if let Some(m) = caps.name(name) {
                groups.insert(name.to_string(), m.as_str().to_string());
            }
        }
        Some(Arguments { groups })
    }
}

/// Named argument groups extracted from one matched line.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    groups: HashMap<String, String>,
}

impl Arguments {
    /// Raw text of a group that participated in the match. An optional
    /// group with a zero-length match yields `Some("")`.
    pub fn group(&self, name: &str) -> Option<&str> {
        self.groups.get(name).map(String::as_str)
    }

    /// A group's text, trimmed, treating "absent" and "present but
    /// empty" alike as no value supplied.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.group(name)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Supplied value of the canonical `value` group.
    pub fn value(&self) -> Option<&str> {
        self.value_of(VALUE_GROUP)
    }

    /// Supplied value of the canonical `extra` group.
    pub fn extra(&self) -> Option<&str> {
        self.value_of(EXTRA_GROUP)
    }
}
