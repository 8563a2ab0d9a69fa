// File: crates/linechart-core/src/series.rs
// Summary: Value-series store with the clamped extent policy.

/// Store of value-only lines; the x coordinate of a point is its index.
#[derive(Clone, Debug, Default)]
pub struct DataStore {
    lines: Vec<Vec<f64>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line of y values.
    pub fn push_line(&mut self, values: Vec<f64>) {
        self.lines.push(values);
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Vec<f64>] {
        &self.lines
    }

    /// Point count of the longest line.
    pub fn longest_len(&self) -> usize {
        self.lines.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Minimum value across all lines, clamped to at most 0.
    pub fn min_value(&self) -> f64 {
        self.lines
            .iter()
            .flatten()
            .fold(0.0f64, |acc, &v| acc.min(v))
    }

    /// Maximum value across all lines, clamped to at least 1.
    ///
    /// Together with [`DataStore::min_value`] this keeps the y extent span
    /// at `>= 1`, the precondition tick generation relies on.
    pub fn max_value(&self) -> f64 {
        self.lines
            .iter()
            .flatten()
            .fold(1.0f64, |acc, &v| acc.max(v))
    }

    /// One value per line at `index`, clamping out-of-range indices to each
    /// line's last element. Empty lines are skipped.
    pub fn values_at(&self, index: usize) -> Vec<f64> {
        self.lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| line[index.min(line.len() - 1)])
            .collect()
    }
}
