//! sqlshift: T-SQL translation from the command line
//!
//! # Usage
//!
//! ```bash
//! # Translate a query
//! sqlshift translate "SELECT TOP 5 * FROM [Users] WITH (NOLOCK)"
//!
//! # Translate from stdin
//! cat report.sql | sqlshift translate
//!
//! # Build a paging clause
//! sqlshift paging --dialect sqlite --offset 20 --page-size 10
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use sqlshift::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlshift")]
#[command(version)]
#[command(about = "Translate T-SQL into LIMIT-style SQL dialects", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqlshift translate 'SELECT TOP 10 * FROM [Orders] WITH (NOLOCK)'
    sqlshift random --dialect mysql
    sqlshift paging --dialect postgres --offset 40 --page-size 20
    sqlshift limit --dialect sqlite --count 5 'SELECT * FROM t'")]
struct Cli {
    /// Config file (defaults to ./sqlshift.toml, then the user config dir)
    #[arg(long, global = true, env = "SQLSHIFT_CONFIG")]
    config: Option<PathBuf>,

    /// Reject unknown dialect names instead of falling back to T-SQL
    #[arg(long, global = true)]
    strict: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a T-SQL query (reads stdin when QUERY is omitted)
    Translate {
        query: Option<String>,

        /// Skip boolean literal normalization
        #[arg(long)]
        no_booleans: bool,
    },
    /// ORDER BY expression that shuffles rows
    Random {
        #[arg(short, long)]
        dialect: Option<String>,

        /// The query uses SELECT DISTINCT
        #[arg(long)]
        distinct: bool,
    },
    /// Paging clause
    Paging {
        #[arg(short, long)]
        dialect: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        offset: i64,

        #[arg(long, allow_hyphen_values = true)]
        page_size: i64,
    },
    /// TOP prefix for the SELECT list
    Top {
        #[arg(short, long)]
        dialect: Option<String>,

        #[arg(short, long, allow_hyphen_values = true)]
        count: i64,
    },
    /// Append a LIMIT unless the query already has one (reads stdin when SQL is omitted)
    Limit {
        sql: Option<String>,

        #[arg(short, long)]
        dialect: Option<String>,

        #[arg(short, long, allow_hyphen_values = true)]
        count: i64,
    },
    /// List the rewrite rules in execution order
    Rules,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "sqlshift=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = TranslatorConfig::load(cli.config.as_deref()).context("loading config")?;

    match &cli.command {
        Commands::Translate { query, no_booleans } => {
            let mut config = config;
            if *no_booleans {
                config.booleans.enabled = false;
            }
            let translator = Translator::from_config(&config)?;
            let input = query_or_stdin(query.as_deref())?;
            if cli.verbose {
                eprintln!("{} {}", "Input:".dimmed(), input.yellow());
            }
            let output = translator.translate(&input);
            match cli.format {
                OutputFormat::Text => println!("{}", output),
                OutputFormat::Json => print_json(serde_json::json!({
                    "input": input,
                    "output": output,
                }))?,
            }
        }
        Commands::Random { dialect, distinct } => {
            let dialect = pick_dialect(cli, &config, dialect.as_deref())?;
            let clause = dialect.generator().order_by_random(*distinct);
            emit_clause(cli, dialect, &clause)?;
        }
        Commands::Paging {
            dialect,
            offset,
            page_size,
        } => {
            let dialect = pick_dialect(cli, &config, dialect.as_deref())?;
            let clause = dialect.generator().paging(*offset, *page_size);
            emit_clause(cli, dialect, &clause)?;
        }
        Commands::Top { dialect, count } => {
            let dialect = pick_dialect(cli, &config, dialect.as_deref())?;
            let clause = dialect.generator().top(*count);
            emit_clause(cli, dialect, &clause)?;
        }
        Commands::Limit {
            sql,
            dialect,
            count,
        } => {
            let dialect = pick_dialect(cli, &config, dialect.as_deref())?;
            let input = query_or_stdin(sql.as_deref())?;
            let output = dialect.generator().append_limit(&input, *count);
            emit_clause(cli, dialect, &output)?;
        }
        Commands::Rules => {
            let translator = Translator::from_config(&config)?;
            let ids = translator.pipeline().rule_ids();
            match cli.format {
                OutputFormat::Text => {
                    for (i, id) in ids.iter().enumerate() {
                        println!("{:>2}. {}", i + 1, id.cyan());
                    }
                }
                OutputFormat::Json => print_json(serde_json::json!(ids))?,
            }
        }
    }

    Ok(())
}

/// `--dialect`, else the config's dialect. `--strict` rejects unknown names.
fn pick_dialect(
    cli: &Cli,
    config: &TranslatorConfig,
    arg: Option<&str>,
) -> anyhow::Result<Dialect> {
    let name = arg.or(config.dialect.as_deref());
    let dialect = match name {
        Some(name) if cli.strict => name.parse::<Dialect>()?,
        _ => Dialect::resolve(name),
    };
    if cli.verbose {
        eprintln!("{} {}", "Dialect:".dimmed(), dialect.to_string().cyan());
    }
    Ok(dialect)
}

fn emit_clause(cli: &Cli, dialect: Dialect, clause: &str) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Text => println!("{}", clause),
        OutputFormat::Json => print_json(serde_json::json!({
            "dialect": dialect,
            "clause": clause,
        }))?,
    }
    Ok(())
}

fn print_json(value: serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn query_or_stdin(arg: Option<&str>) -> anyhow::Result<String> {
    match arg {
        Some(q) => Ok(q.to_string()),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading query from stdin")?;
            Ok(buf.trim_end_matches(['\n', '\r']).to_string())
        }
    }
}
