//! Splits an argument tail into prefixed values
//!
//! A prefix only counts when it starts a whitespace-separated token, so the
//! `n/` in `des/see appendix/n/a` stays part of the description. Everything
//! before the first prefix is the preamble.

use std::collections::HashMap;

/// Marker introducing a named argument, e.g. `n/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PRIORITY: Prefix = Prefix::new("p/");
pub const PREFIX_DESCRIPTION: Prefix = Prefix::new("des/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_REMINDER: Prefix = Prefix::new("r/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");

/// Values of each prefix in order of appearance, plus the preamble
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Unprefixed leading text, trimmed
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for a prefix
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for a prefix, in order
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.contains(*p))
    }
}

/// Tokenizes `args` using only the given prefixes
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    // A leading space lets a prefix at the very start count as a token start
    let padded = format!(" {}", args);

    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for (i, c) in padded.char_indices() {
        if !c.is_whitespace() {
            continue;
        }
        let start = i + c.len_utf8();
        if let Some(prefix) = prefixes
            .iter()
            .find(|p| padded[start..].starts_with(p.as_str()))
        {
            positions.push((start, *prefix));
        }
    }

    let preamble_end = positions.first().map_or(padded.len(), |(pos, _)| *pos);
    let mut multimap = ArgumentMultimap {
        preamble: padded[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (n, (pos, prefix)) in positions.iter().enumerate() {
        let value_start = pos + prefix.as_str().len();
        let value_end = positions.get(n + 1).map_or(padded.len(), |(next, _)| *next);
        let value = padded[value_start..value_end].trim().to_string();
        multimap.values.entry(*prefix).or_default().push(value);
    }

    multimap
}
