use std::iter::Peekable;
use std::str::CharIndices;

use derive_getters::Dissolve;
use eyre::{ensure, Result};

use super::nucleotide::is_nucleotide;

/// A maximal run of nucleotide characters with the guarantees:
/// - The text is non-empty and contains only A/T/C/G/N in either case.
/// - `start` is the offset of the first character in the original text, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Dissolve)]
pub struct Segment<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Segment<'a> {
    pub fn new(text: &'a str, start: usize) -> Result<Self> {
        ensure!(!text.is_empty(), "Nucleotide segment cannot be empty");
        for (i, x) in text.chars().enumerate() {
            ensure!(
                is_nucleotide(x),
                "Non-nucleotide character at index {i} = {x:?}"
            );
        }
        Ok(Self { text, start })
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of characters in the segment. Nucleotides are ASCII, so this is also the byte length.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Absolute position of the last character of the segment.
    pub fn last(&self) -> usize {
        self.start + self.len() - 1
    }
}

/// Lazy iterator over nucleotide segments of a text. Cloning it restarts the scan
/// from the current position; `segments(text)` restarts from the beginning.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
    cursor: usize,
}

pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        chars: text.char_indices().peekable(),
        cursor: 0,
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // Skip separators
        let (begin, start) = loop {
            let (byte, symbol) = self.chars.next()?;
            let position = self.cursor;
            self.cursor += 1;
            if is_nucleotide(symbol) {
                break (byte, position);
            }
        };

        while self.chars.next_if(|(_, x)| is_nucleotide(*x)).is_some() {
            self.cursor += 1;
        }
        let end = self
            .chars
            .peek()
            .map(|(byte, _)| *byte)
            .unwrap_or(self.text.len());

        Some(Segment {
            text: &self.text[begin..end],
            start,
        })
    }
}
