//! `var()` expansion against a property map.
//!
//! Supports `var(--name)` and `var(--name, fallback)`. References expand
//! recursively. A reference that is missing, malformed, or part of a cycle
//! resolves to its fallback, or to the empty string when there is none. A
//! `var(` without a closing parenthesis is kept verbatim.
//!
//! Each call expands a property at most once. A reference nested deeper than
//! [`MAX_DEPTH`] or expanding to more than [`MAX_EXPANDED_LEN`] bytes is
//! treated as invalid and takes its fallback.

use std::collections::HashMap;

use crate::prefix::SENTINEL;
use crate::property::PropertyMap;

/// Deepest chain of nested references followed.
pub const MAX_DEPTH: usize = 64;

/// Largest expansion a single property may produce.
pub const MAX_EXPANDED_LEN: usize = 64 * 1024;

/// Expands every `var()` reference in `value`.
pub fn resolve_value(value: &str, properties: &PropertyMap) -> String {
    Expander::new(properties).expand(value)
}

/// Resolves a property by name; `None` if the map has no such property.
pub fn resolve_property(name: &str, properties: &PropertyMap) -> Option<String> {
    let raw = properties.get(name)?;
    let mut expander = Expander::new(properties);
    expander.stack.push(name.to_string());
    Some(expander.expand(raw))
}

struct Expander<'a> {
    properties: &'a PropertyMap,
    stack: Vec<String>,
    /// Expanded value per property name; `None` marks one that grew too large.
    cache: HashMap<String, Option<String>>,
    /// Cycle and depth cut-offs seen so far. Results that depend on the
    /// current stack are not cached.
    cutoffs: usize,
}

impl<'a> Expander<'a> {
    fn new(properties: &'a PropertyMap) -> Self {
        Self {
            properties,
            stack: Vec::new(),
            cache: HashMap::new(),
            cutoffs: 0,
        }
    }

    fn expand(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find("var(") {
            out.push_str(&rest[..start]);
            let args_start = &rest[start + 4..];
            let Some(close) = closing_paren(args_start) else {
                out.push_str(&rest[start..]);
                return out;
            };
            let replacement = self.substitute(&args_start[..close]);
            out.push_str(&replacement);
            rest = &args_start[close + 1..];
        }
        out.push_str(rest);
        out
    }

    fn substitute(&mut self, args: &str) -> String {
        let (name, fallback) = match args.split_once(',') {
            Some((name, fallback)) => (name.trim(), Some(fallback.trim())),
            None => (args.trim(), None),
        };

        match self.lookup(name) {
            Some(expanded) => expanded,
            None => fallback.map(|f| self.expand(f)).unwrap_or_default(),
        }
    }

    /// Expanded value of `name`, or `None` when the reference is invalid.
    fn lookup(&mut self, name: &str) -> Option<String> {
        if !name.starts_with(SENTINEL) {
            return None;
        }
        let raw = self.properties.get(name)?;
        if let Some(cached) = self.cache.get(name) {
            return cached.clone();
        }
        if self.stack.len() >= MAX_DEPTH || self.stack.iter().any(|seen| seen == name) {
            self.cutoffs += 1;
            return None;
        }

        let cutoffs_before = self.cutoffs;
        self.stack.push(name.to_string());
        let expanded = self.expand(raw);
        self.stack.pop();

        let result = (expanded.len() <= MAX_EXPANDED_LEN).then_some(expanded);
        if self.cutoffs == cutoffs_before {
            self.cache.insert(name.to_string(), result.clone());
        }
        result
    }
}

/// Offset of the parenthesis that closes an already-opened group.
fn closing_paren(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, byte) in text.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}
