//! Load results that carry non-fatal errors alongside the data.

/// Result of a load that skips bad records instead of aborting.
/// The caller gets everything that parsed plus the list of what did not.
#[derive(Debug)]
pub struct LoadReport<T, E> {
    /// The successfully loaded data.
    pub data: T,
    /// Non-fatal errors collected during the load.
    pub errors: Vec<E>,
}

impl<T, E> LoadReport<T, E> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the report.
    pub fn add_error(&mut self, error: E) {
        self.errors.push(error);
    }

    /// Returns true if nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Drops the error list, keeping the data.
    pub fn into_data(self) -> T {
        self.data
    }
}
