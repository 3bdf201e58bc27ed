// Keyboard adjacency tables used to model plausible mis-strikes

use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Built-in German QWERTZ layout. Each key maps to the keys a finger is
/// likely to hit instead of it. An empty string is a terminal key.
const QWERTZ: &[(char, &str)] = &[
    ('q', "aw"),
    ('w', "se"),
    ('e', "dr"),
    ('r', "ft"),
    ('t', "gz"),
    ('z', "hu"),
    ('u', "ji"),
    ('i', "ko"),
    ('o', "lp"),
    ('p', "öü"),
    ('ü', "ä"),
    ('a', "ys"),
    ('s', "xd"),
    ('d', "cf"),
    ('f', "vg"),
    ('g', "bh"),
    ('h', "nj"),
    ('j', "mk"),
    ('k', "l"),
    ('l', "ö"),
    ('ö', "ä"),
    ('ä', ""),
    ('y', "sx"),
    ('x', "dc"),
    ('c', "fv"),
    ('v', "gb"),
    ('b', "hn"),
    ('n', "jm"),
    ('m', "k"),
];

/// Immutable mapping from a lowercase character to its adjacent keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    entries: HashMap<char, Vec<char>>,
}

impl Keymap {
    /// The built-in QWERTZ table.
    pub fn qwertz() -> Self {
        let entries = QWERTZ
            .iter()
            .map(|(key, adjacent)| (*key, adjacent.chars().collect()))
            .collect();
        Self { entries }
    }

    /// Parse a keymap from text.
    ///
    /// One entry per line: the key, whitespace, then its adjacent characters.
    /// A key on its own is a terminal entry. Blank lines and `#` comments are
    /// skipped. Everything is lowercased.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim().to_lowercase();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let key_token = tokens.next().unwrap_or_default();
            let mut key_chars = key_token.chars();
            let key = match (key_chars.next(), key_chars.next()) {
                (Some(key), None) => key,
                _ => {
                    return Err(CoreError::InvalidKeymap {
                        line: line_no,
                        reason: format!("key '{}' must be a single character", key_token),
                    });
                }
            };

            let adjacent: Vec<char> = tokens.flat_map(str::chars).collect();
            if entries.insert(key, adjacent).is_some() {
                return Err(CoreError::InvalidKeymap {
                    line: line_no,
                    reason: format!("duplicate key '{}'", key),
                });
            }
        }

        if entries.is_empty() {
            return Err(CoreError::EmptyKeymap);
        }

        Ok(Self { entries })
    }

    /// Load a keymap file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let keymap = Self::parse(&content)?;
        debug!("Loaded {} keymap entries from {}", keymap.len(), path.display());
        Ok(keymap)
    }

    /// Adjacent characters for `ch`, in table order. Unknown and terminal
    /// keys both yield an empty slice.
    pub fn substitutes(&self, ch: char) -> &[char] {
        self.entries.get(&ch).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, ch: char) -> bool {
        self.entries.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::qwertz()
    }
}
