/// Lifecycle of a value fetched from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    /// Nothing requested yet.
    Idle,
    Loading,
    Ready(T),
    /// Fetch failed; carries the error text shown inline.
    Failed(String),
}

// Derived Default would require `T: Default`.
impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Idle
    }
}

impl<T> Remote<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }
}

impl<T> From<Result<T, String>> for Remote<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(error) => Remote::Failed(error),
        }
    }
}
