//! Personal Finance Survey CLI
//!
//! Thin wrapper around finsurvey-core for operators: list the questions,
//! register accounts, and export what respondents submitted.
//!
//! ## Usage
//!
//! ```bash
//! # Show the survey questions
//! finsurvey questions
//!
//! # Register a respondent account
//! finsurvey account create ada@example.com hunter22
//!
//! # Export submitted surveys
//! finsurvey surveys list
//! finsurvey surveys list --json
//!
//! # Export waitlist signups
//! finsurvey waitlist list
//!
//! # Record counts and answer tallies
//! finsurvey stats
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use finsurvey_core::config::default_data_dir;
use finsurvey_core::stats::tally;
use finsurvey_core::{
    AppConfig, Collection, DocId, Document, LocalAuth, Session, Storage, SurveyResponse,
    WaitlistEntry, QUESTIONS,
};

/// Personal Finance Survey - operator tools
#[derive(Parser)]
#[command(name = "finsurvey")]
#[command(version = "0.1.0")]
#[command(about = "Personal Finance Survey - operator tools")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: <platform data dir>/finsurvey)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the survey questions and their options
    Questions,

    /// Account management
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Submitted surveys
    Surveys {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Waitlist signups
    Waitlist {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Record counts and per-option answer tallies
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Register a new respondent account
    Create {
        /// Email address
        email: String,
        /// Password (at least 6 characters)
        password: String,
    },
}

#[derive(Subcommand)]
enum ListAction {
    /// List every stored record, oldest first
    List {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Document with its id folded in, for JSON export
fn with_id(id: DocId, mut doc: Document) -> serde_json::Value {
    doc.insert("id".to_string(), serde_json::Value::String(id.to_string()));
    serde_json::Value::Object(doc)
}

fn print_json(docs: Vec<(DocId, Document)>) -> Result<()> {
    let array: Vec<_> = docs.into_iter().map(|(id, doc)| with_id(id, doc)).collect();
    println!("{}", serde_json::to_string_pretty(&array)?);
    Ok(())
}

fn format_timestamp(ts: Option<chrono::DateTime<chrono::Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn list_surveys(storage: &Storage, json: bool) -> Result<()> {
    let docs = storage.list(Collection::Surveys)?;
    if json {
        return print_json(docs);
    }

    if docs.is_empty() {
        println!("No surveys submitted yet.");
        return Ok(());
    }

    println!("Surveys ({}):", docs.len());
    for (id, doc) in docs {
        let response = SurveyResponse::from_document(doc)
            .with_context(|| format!("Malformed survey document {}", id))?;
        println!();
        println!("  ID: {}", id);
        println!("  Submitted: {}", format_timestamp(response.created_at));
        println!("  Respondent: {} ({})", response.email, response.user_id);
        for question in QUESTIONS.iter() {
            let shown = response
                .answers
                .get(question.id)
                .map(|a| a.values().join(", "))
                .unwrap_or_else(|| "(no answer)".to_string());
            println!("    {}: {}", question.id, shown);
        }
    }
    Ok(())
}

fn list_waitlist(storage: &Storage, json: bool) -> Result<()> {
    let docs = storage.list(Collection::Waitlist)?;
    if json {
        return print_json(docs);
    }

    if docs.is_empty() {
        println!("No waitlist signups yet.");
        return Ok(());
    }

    println!("Waitlist ({}):", docs.len());
    for (id, doc) in docs {
        let entry = WaitlistEntry::from_document(doc)
            .with_context(|| format!("Malformed waitlist document {}", id))?;
        let user = entry
            .user_id
            .map(|u| u.to_string())
            .unwrap_or_else(|| "anonymous".to_string());
        println!(
            "  {}  {}  {}  {}",
            id,
            format_timestamp(entry.created_at),
            entry.email,
            user
        );
    }
    Ok(())
}

fn show_stats(storage: &Storage, json: bool) -> Result<()> {
    let responses = storage
        .list(Collection::Surveys)?
        .into_iter()
        .map(|(id, doc)| {
            SurveyResponse::from_document(doc)
                .with_context(|| format!("Malformed survey document {}", id))
        })
        .collect::<Result<Vec<_>>>()?;
    let tallies = tally(&QUESTIONS, &responses);
    let waitlist = storage.count(Collection::Waitlist)?;
    let accounts = storage.count_accounts()?;

    if json {
        let out = serde_json::json!({
            "surveys": responses.len(),
            "waitlist": waitlist,
            "accounts": accounts,
            "questions": tallies,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Surveys: {}", responses.len());
    println!("Waitlist: {}", waitlist);
    println!("Accounts: {}", accounts);
    for t in tallies {
        println!();
        println!("{}:", t.question_id);
        for c in &t.counts {
            println!("  {:<26} {}", c.option, c.count);
        }
        if t.unanswered > 0 {
            println!("  {:<26} {}", "(no answer)", t.unanswered);
        }
    }
    Ok(())
}

fn open_storage(config: &AppConfig) -> Result<Storage> {
    let storage = Storage::new(config.db_path())
        .with_context(|| format!("Failed to open {}", config.db_path().display()))?;
    tracing::info!(data_dir = ?config.data_dir, "Opened storage");
    Ok(storage)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = AppConfig::new(cli.data_dir.unwrap_or_else(default_data_dir));

    match cli.command {
        Commands::Questions => {
            for (i, q) in QUESTIONS.iter().enumerate() {
                let kind = if q.is_multi_choice() { "multiple" } else { "single" };
                println!("{}. {} ({})", i + 1, q.id, kind);
                println!("   {}", q.prompt);
                for option in q.options {
                    println!("   - {}", option);
                }
            }
        }

        Commands::Account { action } => match action {
            AccountAction::Create { email, password } => {
                let storage = open_storage(&config)?;
                let auth = LocalAuth::new(Arc::new(storage), Session::new());
                let account = auth.register(&email, &password)?;
                println!("Account created");
                println!("  ID: {}", account.id);
                println!("  Email: {}", account.email);
            }
        },

        Commands::Surveys { action } => match action {
            ListAction::List { json } => list_surveys(&open_storage(&config)?, json)?,
        },

        Commands::Waitlist { action } => match action {
            ListAction::List { json } => list_waitlist(&open_storage(&config)?, json)?,
        },

        Commands::Stats { json } => show_stats(&open_storage(&config)?, json)?,
    }

    Ok(())
}
