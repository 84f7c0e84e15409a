use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklogger
/// CLI dashboard to log and review daily work entries with SQLite
#[derive(Parser)]
#[command(
    name = "worklogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple worklog CLI: record daily work entries and review them with filters and KPI summaries",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a worklog entry
    Add {
        /// Date the work pertains to (YYYY-MM-DD)
        date: String,

        /// Owner display name (created on first use)
        #[arg(long = "owner", help = "Owner name")]
        owner: String,

        /// Department label: 行銷 (marketing) or 設計 (design)
        #[arg(long = "role", help = "Department: 行銷/marketing or 設計/design")]
        role: String,

        /// Entry title
        #[arg(long = "title", help = "Title of the entry")]
        title: String,

        #[arg(long = "details", help = "Free-text details")]
        details: Option<String>,

        /// Status label (未開始 / 進行中 / 已完成 / 延後); defaults to the configured one
        #[arg(
            long = "status",
            help = "Status: 未開始, 進行中, 已完成 or 延後 (English aliases accepted)"
        )]
        status: Option<String>,

        #[arg(long = "project", help = "Project name (created on first use)")]
        project: Option<String>,

        #[arg(
            long = "project-code",
            requires = "project",
            help = "Short project code (used when the project is created)"
        )]
        project_code: Option<String>,

        #[arg(long = "blockers", help = "What is blocking this entry")]
        blockers: Option<String>,

        #[arg(long = "plan", help = "Plan for tomorrow")]
        plan: Option<String>,

        /// Performance metrics; providing any of the four creates the
        /// metrics record, the missing ones default to 0
        #[arg(long = "reach", help = "Metric: reach")]
        reach: Option<i64>,

        #[arg(long = "engage", help = "Metric: engagement")]
        engage: Option<i64>,

        #[arg(long = "convert", help = "Metric: conversions")]
        convert: Option<i64>,

        #[arg(long = "budget", help = "Metric: budget")]
        budget: Option<i64>,

        /// Attachment in the form LABEL=URL (repeatable, order preserved)
        #[arg(long = "attach", value_name = "LABEL=URL", help = "Attach a labeled link")]
        attach: Vec<String>,
    },

    /// List worklog entries with KPI summary
    List {
        /// Keyword over title, details, project name and owner name
        /// (LIKE semantics: ASCII case-insensitive)
        #[arg(long = "query", short = 'q', help = "Keyword (owner / project / title / details)")]
        query: Option<String>,

        #[arg(long = "role", help = "Filter by department label")]
        role: Option<String>,

        #[arg(long = "status", help = "Filter by status label")]
        status: Option<String>,

        #[arg(long = "from", value_name = "DATE", help = "Inclusive lower date bound (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", value_name = "DATE", help = "Inclusive upper date bound (YYYY-MM-DD)")]
        to: Option<String>,

        /// Print the normalized items as JSON instead of the dashboard view
        #[arg(long = "json", help = "Output {\"items\": [...]} as JSON")]
        json: bool,
    },

    /// Create demo data (users, projects and worklog entries)
    Seed {
        /// Required: only the demo seed is supported by this command
        #[arg(long = "demo", help = "Seed the fixed demo dataset")]
        demo: bool,
    },

    /// Export worklog data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "query", short = 'q', help = "Keyword (owner / project / title / details)")]
        query: Option<String>,

        #[arg(long = "role", help = "Filter by department label")]
        role: Option<String>,

        #[arg(long = "status", help = "Filter by status label")]
        status: Option<String>,

        #[arg(long = "from", value_name = "DATE", help = "Inclusive lower date bound (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", value_name = "DATE", help = "Inclusive upper date bound (YYYY-MM-DD)")]
        to: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
