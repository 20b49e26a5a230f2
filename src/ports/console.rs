//! Console port for status line output.

/// Writes presentation text for the user.
///
/// Status lines rely on carriage returns and unterminated lines, so writes
/// are passed through verbatim and flushed immediately.
pub trait Console: Send + Sync {
    /// Writes `text` exactly as given.
    fn write(&self, text: &str);
}
