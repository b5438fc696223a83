//! Holding area for finished markup that later passes must not touch.
//!
//! A pass puts its output on the [`Shelf`] and leaves a slot token in the
//! text instead. The token is built from private-use characters, so no later
//! rule pattern matches it. [`Shelf::restore`] swaps the tokens back once the
//! last pass has run.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const SLOT_OPEN: char = '\u{E000}';
const SLOT_CLOSE: char = '\u{E001}';

static SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}(\d+)\x{E001}").expect("valid slot pattern"));

#[derive(Debug, Default)]
pub struct Shelf {
    items: Vec<String>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `markup` and return the slot token that stands in for it.
    pub fn put(&mut self, markup: String) -> String {
        let index = self.items.len();
        self.items.push(markup);
        format!("{SLOT_OPEN}{index}{SLOT_CLOSE}")
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace every slot token in `text` with the markup it stands for.
    ///
    /// Tokens with no matching item are left as they are.
    pub fn restore(&self, text: &str) -> String {
        if self.items.is_empty() {
            return text.to_string();
        }
        SLOT.replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| self.items.get(index))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
    }
}
