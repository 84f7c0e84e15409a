use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `worklogs` table exists.
fn worklogs_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='worklogs'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a table has a given column.
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the full schema: users, projects, worklogs and the two
/// relation tables (metrics, attachments).
fn create_worklog_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL,
            email TEXT UNIQUE,
            dept  TEXT NOT NULL DEFAULT '行銷' CHECK(dept IN ('行銷','設計'))
        );

        CREATE TABLE IF NOT EXISTS projects (
            id   TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            code TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS worklogs (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            date          TEXT NOT NULL,
            owner_id      INTEGER NOT NULL REFERENCES users(id),
            role          TEXT NOT NULL CHECK(role IN ('行銷','設計')),
            project_id    TEXT REFERENCES projects(id),
            title         TEXT NOT NULL,
            details       TEXT NOT NULL DEFAULT '',
            status        TEXT NOT NULL DEFAULT 'TODO' CHECK(status IN ('TODO','DOING','DONE','DELAY')),
            blockers      TEXT NOT NULL DEFAULT '',
            plan_tomorrow TEXT NOT NULL DEFAULT '',
            source        TEXT NOT NULL DEFAULT 'cli',
            created_at    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS metrics (
            worklog_id INTEGER PRIMARY KEY REFERENCES worklogs(id),
            reach   INTEGER NOT NULL DEFAULT 0 CHECK(reach >= 0),
            engage  INTEGER NOT NULL DEFAULT 0 CHECK(engage >= 0),
            convert INTEGER NOT NULL DEFAULT 0 CHECK(convert >= 0),
            budget  INTEGER NOT NULL DEFAULT 0 CHECK(budget >= 0)
        );

        CREATE TABLE IF NOT EXISTS attachments (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            worklog_id INTEGER NOT NULL REFERENCES worklogs(id),
            seq        INTEGER NOT NULL DEFAULT 0,
            label      TEXT NOT NULL,
            url        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_worklogs_date ON worklogs(date);
        CREATE INDEX IF NOT EXISTS idx_worklogs_status ON worklogs(status);
        CREATE INDEX IF NOT EXISTS idx_attachments_worklog ON attachments(worklog_id, seq);
        "#,
    )?;
    Ok(())
}

/// Add `plan_tomorrow` to worklogs created before 0.3.0.
fn migrate_add_plan_tomorrow_column(conn: &Connection) -> Result<(), Error> {
    let version = "20250701_0003_add_plan_tomorrow";

    // 1) Already applied?
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if table_has_column(conn, "worklogs", "plan_tomorrow")? {
        return Ok(());
    }

    // 2) Apply
    conn.execute(
        "ALTER TABLE worklogs ADD COLUMN plan_tomorrow TEXT NOT NULL DEFAULT '';",
        [],
    )
    .map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!("Failed to add 'plan_tomorrow' column: {}", e)),
        )
    })?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added plan_tomorrow to worklogs')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'plan_tomorrow' to worklogs table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create schema if missing
    if !worklogs_table_exists(conn)? {
        create_worklog_tables(conn)?;
        success("Created worklog tables.");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_worklogs_date ON worklogs(date);
            CREATE INDEX IF NOT EXISTS idx_worklogs_status ON worklogs(status);
            "#,
        )?;

        migrate_add_plan_tomorrow_column(conn)?;
    }

    Ok(())
}
