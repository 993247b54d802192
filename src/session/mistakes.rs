use std::collections::HashSet;

/// Positions typed wrong at least once, plus every wrong keystroke.
///
/// Positions are never removed: fixing a typo with backspace still leaves it
/// on the ledger, so the ledger is a cumulative record rather than a diff of
/// the current input.
#[derive(Clone, Debug, Default)]
pub struct MistakeLedger {
    positions: HashSet<usize>,
    raw_count: usize,
}

impl MistakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_mistake(&mut self, position: usize) {
        self.positions.insert(position);
        self.raw_count += 1;
    }

    /// Ascending, so callers can slice the text left to right.
    pub fn positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self.positions.iter().copied().collect();
        positions.sort_unstable();
        positions
    }

    /// Distinct positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn raw_count(&self) -> usize {
        self.raw_count
    }
}
