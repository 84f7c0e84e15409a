use crate::core::filter::WorklogFilter;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attachment::Attachment;
use crate::models::department::Department;
use crate::models::metrics::Metrics;
use crate::models::status::Status;
use crate::models::worklog::WorkLog;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_WORKLOGS: &str = "SELECT w.id, w.date, u.name AS owner, w.role, p.name AS project,
        w.title, w.details, w.status, w.blockers, w.plan_tomorrow,
        w.source, w.created_at,
        m.reach, m.engage, m.convert, m.budget
   FROM worklogs w
   JOIN users u ON u.id = w.owner_id
   LEFT JOIN projects p ON p.id = w.project_id
   LEFT JOIN metrics m ON m.worklog_id = w.id";

/// Load worklogs matching `filter`, most recent first, fully
/// materialized (owner, project, metrics, attachments).
///
/// Active constraints are ANDed; the keyword is matched with LIKE
/// against title, details, project name and owner name.
pub fn load_worklogs(pool: &mut DbPool, filter: &WorklogFilter) -> AppResult<Vec<WorkLog>> {
    let mut sql = String::from(SELECT_WORKLOGS);
    let mut clauses: Vec<String> = Vec::new();
    let mut args: Vec<String> = Vec::new();

    if let Some(kw) = &filter.keyword {
        let pattern = format!("%{}%", kw);
        let mut ors = Vec::new();
        for field in ["w.title", "w.details", "p.name", "u.name"] {
            args.push(pattern.clone());
            ors.push(format!("{} LIKE ?{}", field, args.len()));
        }
        clauses.push(format!("({})", ors.join(" OR ")));
    }

    if let Some(role) = filter.role {
        args.push(role.to_db_str().to_string());
        clauses.push(format!("w.role = ?{}", args.len()));
    }

    if let Some(status) = filter.status {
        args.push(status.to_db_str().to_string());
        clauses.push(format!("w.status = ?{}", args.len()));
    }

    if let Some(from) = filter.from {
        args.push(from.format("%Y-%m-%d").to_string());
        clauses.push(format!("w.date >= ?{}", args.len()));
    }

    if let Some(to) = filter.to {
        args.push(to.format("%Y-%m-%d").to_string());
        clauses.push(format!("w.date <= ?{}", args.len()));
    }

    if !clauses.is_empty() {
        sql.push_str("\n  WHERE ");
        sql.push_str(&clauses.join("\n    AND "));
    }

    // Date descending; equal dates tie-broken by id for stable output
    sql.push_str("\n  ORDER BY w.date DESC, w.id ASC");

    let mut out = Vec::new();
    {
        let mut stmt = pool.conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(args.iter()), map_row)?;
        for r in rows {
            out.push(r?);
        }
    }

    // Second pass: attachments, in their recorded order
    for log in &mut out {
        log.attachments = load_attachments(&pool.conn, log.id)?;
    }

    Ok(out)
}

pub fn map_row(row: &Row) -> Result<WorkLog> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = Status::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    let role_str: String = row.get("role")?;
    let role = Department::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    // LEFT JOIN: a NULL reach means no metrics row at all
    let reach: Option<i64> = row.get("reach")?;
    let metrics = match reach {
        Some(reach) => Some(Metrics {
            reach,
            engage: row.get("engage")?,
            convert: row.get("convert")?,
            budget: row.get("budget")?,
        }),
        None => None,
    };

    Ok(WorkLog {
        id: row.get("id")?,
        date,
        owner: row.get("owner")?,
        role,
        project: row.get("project")?,
        title: row.get("title")?,
        details: row.get("details")?,
        status,
        blockers: row.get("blockers")?,
        plan_tomorrow: row.get("plan_tomorrow")?,
        metrics,
        attachments: Vec::new(),
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn load_attachments(conn: &Connection, worklog_id: i64) -> AppResult<Vec<Attachment>> {
    let mut stmt = conn.prepare_cached(
        "SELECT label, url FROM attachments
         WHERE worklog_id = ?1
         ORDER BY seq ASC, id ASC",
    )?;

    let rows = stmt.query_map([worklog_id], |row| {
        Ok(Attachment {
            label: row.get(0)?,
            url: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Row shape for inserting a new worklog entry.
pub struct NewWorklogRow<'a> {
    pub date: NaiveDate,
    pub owner_id: i64,
    pub role: Department,
    pub project_id: Option<&'a str>,
    pub title: &'a str,
    pub details: &'a str,
    pub status: Status,
    pub blockers: &'a str,
    pub plan_tomorrow: &'a str,
    pub source: &'a str,
}

pub fn insert_worklog(conn: &Connection, row: &NewWorklogRow) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO worklogs (date, owner_id, role, project_id, title, details, status,
                               blockers, plan_tomorrow, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            row.date.format("%Y-%m-%d").to_string(),
            row.owner_id,
            row.role.to_db_str(),
            row.project_id,
            row.title,
            row.details,
            row.status.to_db_str(),
            row.blockers,
            row.plan_tomorrow,
            row.source,
            chrono::Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_metrics(conn: &Connection, worklog_id: i64, m: &Metrics) -> AppResult<()> {
    conn.execute(
        "INSERT INTO metrics (worklog_id, reach, engage, convert, budget)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![worklog_id, m.reach, m.engage, m.convert, m.budget],
    )?;
    Ok(())
}

pub fn insert_attachments(
    conn: &Connection,
    worklog_id: i64,
    attachments: &[Attachment],
) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO attachments (worklog_id, seq, label, url)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for (seq, a) in attachments.iter().enumerate() {
        stmt.execute(params![worklog_id, seq as i64, a.label, a.url])?;
    }
    Ok(())
}

/// Upsert a user by email (natural key). Returns the user id.
/// Existing rows are left untouched.
pub fn upsert_user(
    conn: &Connection,
    name: &str,
    email: &str,
    dept: Department,
) -> AppResult<i64> {
    conn.execute(
        "INSERT OR IGNORE INTO users (name, email, dept) VALUES (?1, ?2, ?3)",
        params![name, email, dept.to_db_str()],
    )?;

    let id: i64 = conn.query_row(
        "SELECT id FROM users WHERE email = ?1",
        [email],
        |row| row.get(0),
    )?;
    Ok(id)
}

/// Find a user by display name, creating one (without email) if absent.
pub fn find_or_create_user(conn: &Connection, name: &str, dept: Department) -> AppResult<i64> {
    let existing: Option<i64> = conn
        .query_row("SELECT id FROM users WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO users (name, email, dept) VALUES (?1, NULL, ?2)",
        params![name, dept.to_db_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Upsert a project by its fixed id (natural key).
pub fn upsert_project(conn: &Connection, id: &str, name: &str, code: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO projects (id, name, code) VALUES (?1, ?2, ?3)",
        params![id, name, code],
    )?;
    Ok(())
}

/// Find a project by name, creating one if absent. Returns the project id.
pub fn find_or_create_project(
    conn: &Connection,
    name: &str,
    code: Option<&str>,
) -> AppResult<String> {
    let existing: Option<String> = conn
        .query_row("SELECT id FROM projects WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let id = format!("p_{}", code.unwrap_or(name).to_lowercase());
    conn.execute(
        "INSERT INTO projects (id, name, code) VALUES (?1, ?2, ?3)",
        params![id, name, code.unwrap_or("")],
    )?;
    Ok(id)
}
