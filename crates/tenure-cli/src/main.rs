// Rust guideline compliant 2026-10-12

//! Tenure CLI Application
//!
//! Command-line interface for tracking the validity of contracts, minutes
//! and amendments.

use clap::Parser;
use std::path::PathBuf;
use tenure_app::Workspace;
use tenure_cli::commands::audit::AuditArgs;
use tenure_cli::commands::date::DateAction;
use tenure_cli::commands::records::RecordAction;
use tenure_cli::commands::{self, Context};
use tenure_cli::{create_formatter, logging, should_use_color};
use tenure_core::{Amendment, Contract, Minute, OutputFormat};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "tenure",
    version,
    about = "Tenure: validity tracking for contracts, minutes and amendments",
    long_about = "Tenure keeps contracts, price-registration minutes and amendments in a local workspace and derives their status (active, warning, expired, executed, rescinded) from their end dates.",
    after_help = "Examples:\n  tenure init\n  tenure contract add --number 012/2030 --supplier \"Acme\" --start 01/01/2030 --end 31/12/2030\n  tenure contract list --status warning\n  tenure amendment add --contract ctr-1a2b --number 1 --kind term --end 31/12/2031\n  tenure minute update min-9f8e --override executed\n  tenure status\n  tenure date days 31/12/2030\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Log level or filter directive (overrides TENURE_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Tenure workspace
    Init,

    /// Manage contracts
    Contract {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage price-registration minutes
    #[command(visible_alias = "ata")]
    Minute {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage contract amendments
    Amendment {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Show status counts and records ending soon
    Status,

    /// Show the audit log
    Audit(AuditArgs),

    /// Date conversion helpers
    Date {
        #[command(subcommand)]
        action: DateAction,
    },
}

/// Picks the output format: `--format`, then `--json`, then the workspace
/// configuration.
fn resolve_format(cli: &Cli) -> OutputFormat {
    if let Some(format) = cli.format {
        return format.into();
    }
    if cli.json {
        return OutputFormat::Json;
    }
    Workspace::discover(cli.root.as_deref())
        .and_then(|workspace| workspace.load_config())
        .map(|config| config.output_format)
        .unwrap_or_default()
}

fn run(ctx: &Context, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Init => commands::init::execute(ctx),
        Commands::Contract { action } => commands::records::execute::<Contract>(ctx, action),
        Commands::Minute { action } => commands::records::execute::<Minute>(ctx, action),
        Commands::Amendment { action } => commands::records::execute::<Amendment>(ctx, action),
        Commands::Status => commands::status::execute(ctx),
        Commands::Audit(args) => commands::audit::execute(ctx, args),
        Commands::Date { action } => commands::date::execute(ctx, action),
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = logging::resolve_filter(
        cli.log_level.as_deref(),
        std::env::var(logging::LOG_ENV).ok(),
    );
    if let Err(err) = logging::init_tracing(&filter, cli.log_json) {
        eprintln!("Error: {:#}", err);
        std::process::exit(2);
    }

    let format = resolve_format(&cli);
    let use_color = !cli.no_color && should_use_color();
    let ctx = Context::new(cli.root.clone(), create_formatter(format, use_color));

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return;
    };

    if let Err(err) = run(&ctx, command) {
        debug!(error = ?err, "command failed");
        let output = ctx.formatter.format_error(&err);
        if format == OutputFormat::Json {
            println!("{}", output);
        } else {
            eprintln!("{}", output);
        }
        std::process::exit(1);
    }
}
