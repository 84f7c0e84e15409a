use serde::Serialize;

/// Task progress state of a worklog entry.
///
/// Stored in the DB as the internal codes ('TODO','DOING','DONE','DELAY'),
/// shown everywhere else as the display labels (未開始/進行中/已完成/延後).
/// The label↔code mapping is total: anything outside it is rejected at the
/// input boundary, never coerced.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Status {
    Todo,
    Doing,
    Done,
    Delay,
}

impl Status {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::Doing => "DOING",
            Status::Done => "DONE",
            Status::Delay => "DELAY",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "TODO" => Some(Status::Todo),
            "DOING" => Some(Status::Doing),
            "DONE" => Some(Status::Done),
            "DELAY" => Some(Status::Delay),
            _ => None,
        }
    }

    /// Display label used by the dashboard and by filter input.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "未開始",
            Status::Doing => "進行中",
            Status::Done => "已完成",
            Status::Delay => "延後",
        }
    }

    /// Parse user input: display label, internal code, or English alias.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "未開始" | "TODO" | "NOT_STARTED" => Some(Status::Todo),
            "進行中" | "DOING" | "IN_PROGRESS" => Some(Status::Doing),
            "已完成" | "DONE" => Some(Status::Done),
            "延後" | "DELAY" | "DELAYED" => Some(Status::Delay),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Status::Done)
    }
}
