//! Hearsay CLI
//!
//! Command-line surface over the rumor feed state engine. Every invocation
//! is one session: the store is opened from the persisted snapshot, the
//! command runs against it, and mutations are written through before exit.
//! The active actor defaults to the first roster user; use `--as` to act
//! as someone else.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};

use hearsay_core::{Config, SnapshotStore, Store, Vote};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "hearsay")]
#[command(about = "Hearsay - a local rumor feed")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Act as a specific user for this invocation
    #[arg(long = "as", global = true, value_name = "USER_ID")]
    as_user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the rumor feed
    Feed,
    /// Post a new rumor as the active user
    Post {
        /// The claim text
        content: String,
    },
    /// Vote a rumor true or false
    Vote {
        /// Rumor ID
        rumor_id: String,
        /// Which way to vote
        vote: VoteArg,
    },
    /// Delete a rumor
    #[command(alias = "rm")]
    Delete {
        /// Rumor ID
        rumor_id: String,
    },
    /// Spend points on a reward
    Redeem {
        /// Point cost
        cost: i64,
        /// Reward name
        name: String,
    },
    /// Show the active user
    Whoami,
    /// Rotate to the next user
    Switch,
    /// Show the active user's profile
    Profile,
    /// Auto-generate synthetic rumors
    Generate {
        /// Seconds between rumors (defaults to the configured period)
        #[arg(long)]
        period: Option<u64>,
        /// How many rumors to generate
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Delete the persisted snapshot and start over from seed data
    Reset,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VoteArg {
    True,
    False,
}

impl From<VoteArg> for Vote {
    fn from(arg: VoteArg) -> Self {
        match arg {
            VoteArg::True => Vote::True,
            VoteArg::False => Vote::False,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config = Config::load()?;

    if let Commands::Reset = cli.command {
        let snapshot = SnapshotStore::open(&config.db_path())?;
        snapshot.clear()?;
        output.success("Cleared persisted state");
        return Ok(());
    }

    let mut store = Store::open(&config);

    if let Some(ref user_id) = cli.as_user {
        if !store.set_current_user(user_id) {
            bail!("No such user: {}", user_id);
        }
    }

    match cli.command {
        Commands::Feed => commands::feed::show(&store, &output),
        Commands::Post { content } => commands::rumor::post(&mut store, content, &output),
        Commands::Vote { rumor_id, vote } => {
            commands::rumor::vote(&mut store, rumor_id, vote.into(), &output)
        }
        Commands::Delete { rumor_id } => commands::rumor::delete(&mut store, rumor_id, &output),
        Commands::Redeem { cost, name } => commands::redeem::redeem(&mut store, cost, name, &output),
        Commands::Whoami => commands::user::whoami(&store, &output),
        Commands::Switch => commands::user::switch(&mut store, &output),
        Commands::Profile => commands::user::profile(&store, &output),
        Commands::Generate { period, count } => {
            let period = period.unwrap_or(config.generator_period_secs);
            commands::generate::run(store, period, count, &output).await
        }
        Commands::Reset => unreachable!("handled above"),
    }
}
