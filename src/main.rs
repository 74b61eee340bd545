// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info, warn};
use std::io::Write;
use std::path::PathBuf;

use prospects::app_config::{self, Config};
use prospects::{AppError, DatabaseConnector, ProspectDao, ProspectRecord};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Contact fields shared by `add` and `update`
#[derive(Args, Debug)]
struct ProspectArgs {
    /// Full name
    #[arg(long)]
    name: String,

    /// Email address
    #[arg(long)]
    email: String,

    /// Mobile phone number
    #[arg(long)]
    phone: String,

    /// Facebook profile address
    #[arg(long, default_value = "")]
    facebook: String,

    /// WhatsApp number
    #[arg(long, default_value = "")]
    whatsapp: String,
}

impl From<ProspectArgs> for ProspectRecord {
    fn from(args: ProspectArgs) -> Self {
        ProspectRecord::new(args.name, args.email, args.phone, args.facebook, args.whatsapp)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert a new prospect and print its ID
    Add(ProspectArgs),

    /// Overwrite every field of an existing prospect
    Update {
        /// Prospect ID
        id: i64,

        #[command(flatten)]
        fields: ProspectArgs,
    },

    /// Delete a prospect
    Delete {
        /// Prospect ID
        id: i64,
    },

    /// List prospects, optionally only those with a given email
    Search {
        /// Exact email to match
        #[arg(short, long)]
        email: Option<String>,

        /// Print JSON instead of one line per prospect
        #[arg(long)]
        json: bool,
    },

    /// Show database statistics
    Stats,

    /// Generate shell completions for prospects
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Prospects - contact storage on SQLite
#[derive(Parser, Debug)]
#[command(name = "prospects")]
#[command(version)]
#[command(about = "Store and search prospect contacts")]
#[command(long_about = "Stores prospect contacts in a SQLite table and lets you add, update, delete and search them.

EXAMPLES:
    prospects add --name 'Maria' --email maria@example.com --phone 11912345678
    prospects update 3 --name 'Maria S.' --email maria@example.com --phone 11912345678
    prospects delete 3
    prospects search --email maria@example.com --json
    prospects --database ./crm.db stats
    prospects completions bash > prospects.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", value_name = "PATH", default_value = "conf.json", global = true)]
    config_path: PathBuf,

    /// Database file; overrides the configuration
    #[arg(short, long, env = "PROSPECTS_DB", global = true)]
    database: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // Filtering happens through log::max_level so it can change after init
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config tells us otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = cli.log_level {
        log::set_max_level(app_config::LogLevel::from(level).to_level_filter());
    }

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "prospects", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let dao = open_dao(&config)?;

    run_command(cli.command, &dao).await
}

fn load_config(cli: &CommandLineOptions) -> Result<Config, AppError> {
    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(database) = &cli.database {
        config.database.path = Some(database.clone());
    }

    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }

    config.validate()?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Ok(config)
}

fn open_dao(config: &Config) -> Result<ProspectDao, AppError> {
    let connector = DatabaseConnector::from_config(&config.database)?;
    debug!("Using database {:?}", connector.path());
    Ok(ProspectDao::new(connector))
}

async fn run_command(command: Commands, dao: &ProspectDao) -> Result<()> {
    match command {
        Commands::Add(fields) => {
            let prospect: ProspectRecord = fields.into();
            let id = dao
                .insert_prospect(&prospect)
                .await
                .context("Failed to add prospect")?;
            info!("Added prospect #{}", id);
            println!("{}", id);
        }
        Commands::Update { id, fields } => {
            let prospect = ProspectRecord::from(fields).with_id(id);
            if dao
                .update_prospect(&prospect)
                .await
                .context("Failed to update prospect")?
            {
                info!("Updated prospect #{}", id);
            } else {
                warn!("No prospect with ID {}", id);
            }
        }
        Commands::Delete { id } => {
            if dao
                .delete_prospect(id)
                .await
                .context("Failed to delete prospect")?
            {
                info!("Deleted prospect #{}", id);
            } else {
                warn!("No prospect with ID {}", id);
            }
        }
        Commands::Search { email, json } => {
            let found = dao
                .search_prospects(email.as_deref())
                .await
                .context("Failed to search prospects")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else if found.is_empty() {
                info!("No prospects found");
            } else {
                for prospect in &found {
                    println!("{}", prospect);
                }
            }
        }
        Commands::Stats => {
            let stats = dao.connector().stats().context("Failed to read statistics")?;
            println!("{}", stats);
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
