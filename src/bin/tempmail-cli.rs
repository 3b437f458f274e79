#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Interactive disposable inbox for public temp-mail services

use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tempmail_client::{MessageArchiver, MessageSummary, SessionConfig, TempMailSession};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tempmail-cli")]
#[command(
    about = "Interactive disposable inbox for public temp-mail services"
)]
struct Args {
    /// Comma-separated domain allow-list override
    #[arg(long)]
    domains: Option<String>,

    /// Directory saved messages are written to
    #[arg(long)]
    save_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = SessionConfig::from_env()?;
    if let Some(domains) = &args.domains {
        config.domains = domains
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Some(dir) = &args.save_dir {
        config.archive_dir.clone_from(dir);
    }

    let mut session = TempMailSession::start(&config)?;
    let archiver = MessageArchiver::new(config.archive_dir.clone());

    println!("Your address: {}", session.address());
    println!("Type 'help' for commands.");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else { continue };

        if matches!(command, "quit" | "exit") {
            break;
        }

        let result = match command {
            "inbox" | "refresh" => cmd_inbox(&mut session).await,
            "read" => match parse_id(words.next(), "read") {
                Ok(id) => cmd_read(&session, id).await,
                Err(e) => Err(e),
            },
            "save" => match parse_id(words.next(), "save") {
                Ok(id) => cmd_save(&session, &archiver, id).await,
                Err(e) => Err(e),
            },
            "new" => {
                println!("Your address: {}", session.rotate());
                Ok(())
            }
            "address" => {
                println!("Your address: {}", session.address());
                Ok(())
            }
            "help" => {
                print_help();
                Ok(())
            }
            other => {
                println!("Unknown command '{other}'. Type 'help'.");
                Ok(())
            }
        };

        // No session error is fatal: report it and keep the loop
        // alive so the user can retry, read another id, or rotate.
        if let Err(e) = result {
            eprintln!("error: {e}");
        }
    }

    Ok(())
}

fn parse_id(word: Option<&str>, command: &str) -> anyhow::Result<u64> {
    let Some(word) = word else {
        anyhow::bail!("usage: {command} <id>");
    };
    word.parse()
        .map_err(|e| anyhow::anyhow!("invalid id '{word}': {e}"))
}

async fn cmd_inbox(session: &mut TempMailSession) -> anyhow::Result<()> {
    let new_mail = session.refresh().await?;
    if !new_mail.is_empty() {
        println!("{} new message(s)", new_mail.len());
    }
    print_summary_table(session.inbox().summaries());
    Ok(())
}

async fn cmd_read(session: &TempMailSession, id: u64) -> anyhow::Result<()> {
    let message = session.read(id).await?;
    println!("From:    {}", message.sender);
    println!("Subject: {}", message.subject);
    println!("\n{}", message.body_text);
    Ok(())
}

async fn cmd_save(
    session: &TempMailSession,
    archiver: &MessageArchiver,
    id: u64,
) -> anyhow::Result<()> {
    let message = session.read(id).await?;
    let path = archiver.save(&message)?;
    println!("Saved to {}", path.display());
    Ok(())
}

fn print_summary_table(summaries: &[MessageSummary]) {
    if summaries.is_empty() {
        println!("Inbox is empty.");
        return;
    }

    let header = format!("{:<8} {:<30} {}", "ID", "From", "Subject");
    println!("{header}");
    println!("{}", "-".repeat(80));

    for summary in summaries {
        println!(
            "{:<8} {:<30} {}",
            summary.id,
            truncate(&summary.sender, 28),
            truncate(&summary.subject, 40),
        );
    }

    println!("\n{} message(s)", summaries.len());
}

fn print_help() {
    println!("Commands:");
    println!("  inbox       refresh and show the inbox");
    println!("  read <id>   show a message");
    println!("  save <id>   save a message to disk");
    println!("  new         rotate to a fresh address");
    println!("  address     show the current address");
    println!("  quit        exit");
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String =
            s.chars().take(max.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
