use crate::error::{Error, Result};
use crate::types::Direction;

/// Ordered, fixed list of image identifiers with a circular cursor.
///
/// The list is never empty, so the cursor always points at a valid entry
/// and stepping in either direction cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    identifiers: Vec<String>,
    cursor: usize,
}

impl ImageSet {
    /// Build a set positioned on its first identifier
    pub fn new(identifiers: Vec<String>) -> Result<Self> {
        if identifiers.is_empty() {
            return Err(Error::EmptyImageSet);
        }

        Ok(Self {
            identifiers,
            cursor: 0,
        })
    }

    /// Identifier under the cursor
    pub fn current(&self) -> &str {
        &self.identifiers[self.cursor]
    }

    /// Advance the cursor, wrapping from the last entry to the first
    pub fn step_next(&mut self) -> &str {
        self.cursor = (self.cursor + 1) % self.identifiers.len();
        self.current()
    }

    /// Move the cursor back, wrapping from the first entry to the last
    pub fn step_previous(&mut self) -> &str {
        self.cursor = match self.cursor {
            0 => self.identifiers.len() - 1,
            i => i - 1,
        };
        self.current()
    }

    pub fn step(&mut self, direction: Direction) -> &str {
        match direction {
            Direction::Next => self.step_next(),
            Direction::Previous => self.step_previous(),
        }
    }

    /// Zero-based cursor position
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of identifiers (always at least one)
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Always false; kept for parity with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}
