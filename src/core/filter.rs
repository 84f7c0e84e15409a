//! Filter-parameter normalization for the `list` and `export` commands.
//!
//! Raw CLI strings become a typed `WorklogFilter`; labels outside the
//! fixed status/department tables and malformed dates are rejected here,
//! before any query is built.

use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use crate::models::status::Status;
use crate::utils::date::parse_optional_date;
use chrono::NaiveDate;

#[derive(Debug, Default, Clone)]
pub struct WorklogFilter {
    /// Substring over title, details, project name and owner name.
    /// SQL LIKE semantics: ASCII case-insensitive, multi-byte exact.
    pub keyword: Option<String>,
    pub role: Option<Department>,
    pub status: Option<Status>,
    /// Inclusive lower bound on the entry date.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the entry date.
    pub to: Option<NaiveDate>,
}

impl WorklogFilter {
    /// No constraints: the full archive, date descending.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_args(
        keyword: &Option<String>,
        role: &Option<String>,
        status: &Option<String>,
        from: &Option<String>,
        to: &Option<String>,
    ) -> AppResult<Self> {
        // Empty keyword imposes no constraint
        let keyword = keyword
            .as_ref()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(|k| k.to_string());

        let role = match role {
            Some(r) => Some(
                Department::from_label(r).ok_or_else(|| AppError::InvalidRole(r.clone()))?,
            ),
            None => None,
        };

        let status = match status {
            Some(s) => {
                Some(Status::from_label(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?)
            }
            None => None,
        };

        let from = parse_optional_date(from.as_ref()).map_err(AppError::InvalidDate)?;
        let to = parse_optional_date(to.as_ref()).map_err(AppError::InvalidDate)?;

        Ok(Self {
            keyword,
            role,
            status,
            from,
            to,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_none()
            && self.role.is_none()
            && self.status.is_none()
            && self.from.is_none()
            && self.to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keyword_imposes_no_constraint() {
        let f =
            WorklogFilter::from_args(&Some("   ".to_string()), &None, &None, &None, &None).unwrap();
        assert!(f.is_empty());
    }

    #[test]
    fn labels_are_translated() {
        let f = WorklogFilter::from_args(
            &None,
            &Some("設計".to_string()),
            &Some("已完成".to_string()),
            &Some("2025-06-20".to_string()),
            &Some("2025-06-21".to_string()),
        )
        .unwrap();
        assert_eq!(f.role, Some(Department::Design));
        assert_eq!(f.status, Some(Status::Done));
        assert_eq!(f.from, NaiveDate::from_ymd_opt(2025, 6, 20));
        assert_eq!(f.to, NaiveDate::from_ymd_opt(2025, 6, 21));
    }

    #[test]
    fn unknown_status_label_fails_fast() {
        let err = WorklogFilter::from_args(&None, &None, &Some("完了".to_string()), &None, &None)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidStatus(_)));
    }

    #[test]
    fn unknown_role_label_fails_fast() {
        let err = WorklogFilter::from_args(&None, &Some("業務".to_string()), &None, &None, &None)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRole(_)));
    }

    #[test]
    fn bad_date_fails_fast() {
        let err =
            WorklogFilter::from_args(&None, &None, &None, &Some("21/06/2025".to_string()), &None)
                .unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(_)));
    }
}
