//! In-memory gesture binding set
//!
//! A `BindingSet` is built from one freshly loaded config file and keeps
//! both the parsed bindings and the raw lines they came from. Edits never
//! touch lines in place: `with_upsert` and `with_delete` rebuild a complete
//! `ConfigFile` that the caller persists in one save.
//!
//! # Duplicates
//! libinput-gestures lets a later line override an earlier one for the same
//! gesture and finger count. The set mirrors that: only the last binding per
//! `BindingKey` is exposed, and the earlier lines are reported by
//! `superseded_lines()`. Upsert and delete remove every line for the key.

use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use crate::core::{
    parser::{classify_config, ParseError},
    types::{ActionKind, Binding, BindingKey, ConfigFile},
    validator::LineKind,
};

/// One raw line with its classification
#[derive(Clone, Debug)]
struct ClassifiedLine {
    text: String,
    kind: LineKind,
}

impl ClassifiedLine {
    fn binding_key(&self) -> Option<BindingKey> {
        match &self.kind {
            LineKind::Binding(binding) => Some(binding.key()),
            _ => None,
        }
    }
}

/// Parsed bindings plus the config lines they came from
#[derive(Clone, Debug)]
pub struct BindingSet {
    lines: Vec<ClassifiedLine>,
    /// Effective bindings, ordered by the line that defines them
    bindings: Vec<Binding>,
    /// 1-based numbers of binding lines overridden by a later line
    superseded: Vec<usize>,
}

impl BindingSet {
    /// Builds the set from a config file
    ///
    /// Fails on the first malformed line; nothing partial is returned.
    pub fn from_config(file: ConfigFile) -> Result<Self, ParseError> {
        let kinds = classify_config(&file)?;

        let lines = file
            .lines()
            .iter()
            .cloned()
            .zip(kinds)
            .map(|(text, kind)| ClassifiedLine { text, kind })
            .collect::<Vec<_>>();

        // Last line per key wins
        let mut last_line: HashMap<BindingKey, usize> = HashMap::new();
        for (index, line) in lines.iter().enumerate() {
            if let Some(key) = line.binding_key() {
                last_line.insert(key, index);
            }
        }

        let mut bindings = Vec::new();
        let mut superseded = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            if let LineKind::Binding(binding) = &line.kind {
                if last_line.get(&binding.key()) == Some(&index) {
                    bindings.push(binding.clone());
                } else {
                    superseded.push(index + 1);
                }
            }
        }

        debug!(
            bindings = bindings.len(),
            superseded = superseded.len(),
            "built binding set"
        );

        Ok(Self {
            lines,
            bindings,
            superseded,
        })
    }

    /// Effective bindings in file order
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Looks up the effective binding for a gesture and finger count
    pub fn get(&self, key: BindingKey) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.key() == key)
    }

    /// Line numbers of bindings shadowed by a later duplicate
    pub fn superseded_lines(&self) -> &[usize] {
        &self.superseded
    }

    /// The config file this set was built from, unchanged
    pub fn config(&self) -> ConfigFile {
        self.lines.iter().map(|line| line.text.clone()).collect()
    }

    /// Bindings in display order
    ///
    /// Sorted by label, then finger count, action value, config token and
    /// action kind.
    pub fn sorted_view(&self) -> Vec<&Binding> {
        let mut view = self.bindings.iter().collect::<Vec<_>>();
        view.sort_by(|a, b| display_order(a, b));
        view
    }

    /// Case-insensitive search over label, finger count and action text
    ///
    /// An empty query returns the whole sorted view.
    pub fn filter(&self, query: &str) -> Vec<&Binding> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.sorted_view();
        }

        self.sorted_view()
            .into_iter()
            .filter(|binding| {
                binding.gesture.label().to_lowercase().contains(&query)
                    || binding.fingers.to_string() == query
                    || binding.action.value().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Config content with `binding` added or replacing its key
    ///
    /// Layout of the result: every non-binding line in original order,
    /// then the remaining binding lines as originally written, then the
    /// new binding's line.
    pub fn with_upsert(&self, binding: &Binding) -> ConfigFile {
        let key = binding.key();

        let passthrough = self
            .lines
            .iter()
            .filter(|line| line.binding_key().is_none())
            .map(|line| line.text.clone());

        let kept_bindings = self
            .lines
            .iter()
            .filter(|line| matches!(line.binding_key(), Some(k) if k != key))
            .map(|line| line.text.clone());

        passthrough
            .chain(kept_bindings)
            .chain(std::iter::once(binding.to_line()))
            .collect()
    }

    /// Config content without any line bound to `key`
    ///
    /// Every other line stays where it was.
    pub fn with_delete(&self, key: BindingKey) -> ConfigFile {
        self.lines
            .iter()
            .filter(|line| line.binding_key() != Some(key))
            .map(|line| line.text.clone())
            .collect()
    }
}

fn display_order(a: &Binding, b: &Binding) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

fn sort_key(binding: &Binding) -> (&'static str, u32, &str, &'static str, ActionKind) {
    (
        binding.gesture.label(),
        binding.fingers,
        binding.action.value(),
        binding.gesture.token(),
        binding.action.kind(),
    )
}
