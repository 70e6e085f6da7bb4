use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use context_keeper::env::{GitCli, SystemClock};
use context_keeper::manager::AUTO_SAVE_DESCRIPTION;
use context_keeper::models::{DocKind, StatusReport};
use context_keeper::store::{DocumentStore, FsStore};
use context_keeper::ContextManager;

#[derive(Parser)]
#[command(name = "ctx")]
#[command(about = "Session context and handoff tracking for AI-assisted development")]
struct Cli {
    /// Project root containing the .context directory (defaults to the
    /// current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the current context state
    Save {
        /// What changed since the last save
        description: Option<String>,

        /// Suppress confirmation output (for hook-driven saves)
        #[arg(long)]
        auto: bool,
    },
    /// Create an immutable timestamped checkpoint
    Checkpoint {
        /// Milestone description, slugified into the checkpoint name
        description: String,
    },
    /// Regenerate continuation instructions for the next session
    Handoff,
    /// Print a state document to stdout
    Show {
        /// Document name: overview, current_state, summary, or handoff
        doc: String,
    },
    /// Show branch, recent checkpoints, and the last save
    Status {
        /// Emit the report as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Append an entry to the decision log
    LogDecision {
        /// Short category label, e.g. ARCH or TOOLING
        category: String,

        /// The decision itself
        text: String,
    },
}

/// Initialize tracing to stderr so stdout stays clean for report output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "context_keeper=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_status(report: &StatusReport) {
    println!("============================================================");
    println!("PROJECT STATUS");
    println!("============================================================");
    println!();
    println!("Branch:      {}", report.branch);
    println!("Last Commit: {}", report.last_commit);
    println!("Status:      {}", report.status);
    println!();
    println!("Checkpoints: {}", report.checkpoint_count);
    for id in &report.recent_checkpoints {
        println!("  - {id}");
    }
    println!("Decisions logged: {}", report.decision_count);
    match (&report.last_saved, &report.latest_description) {
        (Some(at), Some(description)) => println!("Last save: {at} - {description}"),
        (Some(at), None) => println!("Last save: {at}"),
        _ => println!("Last save: (none)"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let store = FsStore::open(&root)?;
    let manager = ContextManager::new(&store, GitCli::new(&root), SystemClock);

    match cli.command {
        Commands::Save { description, auto } => {
            let description =
                description.unwrap_or_else(|| AUTO_SAVE_DESCRIPTION.to_string());
            let outcome = manager.save(&description)?;
            if !auto {
                println!("Context saved: {}", outcome.description);
                println!("Branch: {}", outcome.branch);
                println!("Status: {}", outcome.status);
            }
        }
        Commands::Checkpoint { description } => {
            let outcome = manager.checkpoint(&description)?;
            println!("Checkpoint created: {}", outcome.id);
            println!("Description: {}", outcome.description);
        }
        Commands::Handoff => {
            let outcome = manager.handoff()?;
            println!("Handoff document updated.");
            println!();
            println!("Copy this to continue in a new session:");
            println!("------------------------------------------------------------");
            println!("{}", outcome.prompt);
            println!("------------------------------------------------------------");
        }
        Commands::Show { doc } => {
            let kind = DocKind::from_str(&doc).ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown document '{doc}' (expected overview, current_state, summary, or handoff)"
                )
            })?;
            match store.read_document(kind)? {
                Some(body) => print!("{body}"),
                None => anyhow::bail!("document '{}' has not been written yet", kind.as_str()),
            }
        }
        Commands::Status { json } => {
            let report = manager.status()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_status(&report);
            }
        }
        Commands::LogDecision { category, text } => {
            let entry = manager.log_decision(&category, &text)?;
            println!("Decision logged: [{}] {}", entry.category, entry.text);
        }
    }

    Ok(())
}
