use serde::Serialize;

/// A labeled link attached to a worklog entry. Order is preserved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Attachment {
    pub label: String,
    pub url: String,
}
