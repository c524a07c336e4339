//! Common types and data structures

/// Readiness message produced by the load action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStatus(pub String);

/// Label and explanation produced by the classify action.
///
/// Both halves are display text. The confidence figures inside `detail` are
/// placeholders, never computed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub label: String,
    pub detail: String,
}

/// Event sources the shell can fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    LoadModel,
    Classify,
}

/// Display fields handlers read from and write to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Status,
    Input,
    Label,
    Detail,
}
