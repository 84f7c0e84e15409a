use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Department {
    Marketing, // 行銷
    Design,    // 設計
}

impl Department {
    pub fn label(&self) -> &'static str {
        match self {
            Department::Marketing => "行銷",
            Department::Design => "設計",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "行銷" => Some(Department::Marketing),
            "設計" => Some(Department::Design),
            _ => None,
        }
    }

    /// Helper: parse input from the CLI (label or English alias)
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "行銷" | "marketing" | "mkt" => Some(Department::Marketing),
            "設計" | "design" => Some(Department::Design),
            _ => None,
        }
    }
}
