//! CLI frontend for the Playhouse theater-management simulation.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ph",
    about = "Playhouse: run a theater, one season at a time",
    version,
    propagate_version = true
)]
struct Cli {
    /// Game state file
    #[arg(long, global = true, default_value = "playhouse.json")]
    state: PathBuf,

    /// RNG seed for reproducible outcomes (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game with the sample company
    Init {
        /// Overwrite an existing game
        #[arg(short, long)]
        force: bool,
    },

    /// Show the current year, capital and pending performance
    Status,

    /// List the company
    Actors,

    /// List the repertoire
    Plots,

    /// Quote an actor's contract
    Quote {
        /// Actor ID
        actor: u32,
    },

    /// Hire an actor
    Hire {
        /// Surname
        #[arg(long)]
        last: String,

        /// First name
        #[arg(long)]
        first: String,

        /// Patronymic
        #[arg(long)]
        patronymic: Option<String>,

        /// Rank (beginner, regular, lead, master, honored, peoples)
        #[arg(long, default_value = "beginner")]
        rank: String,

        /// Awards received so far
        #[arg(long, default_value = "0")]
        awards: u32,

        /// Years of experience
        #[arg(long, default_value = "0")]
        experience: u32,
    },

    /// Edit an actor
    Edit {
        /// Actor ID
        actor: u32,

        /// New surname
        #[arg(long)]
        last: Option<String>,

        /// New first name
        #[arg(long)]
        first: Option<String>,

        /// New patronymic (empty to clear)
        #[arg(long)]
        patronymic: Option<String>,

        /// New rank
        #[arg(long)]
        rank: Option<String>,

        /// New awards count
        #[arg(long)]
        awards: Option<u32>,

        /// New years of experience
        #[arg(long)]
        experience: Option<u32>,
    },

    /// Dismiss an actor
    Fire {
        /// Actor ID
        actor: u32,
    },

    /// Commit, cast and schedule a performance for the current year
    Produce {
        /// Billing title
        #[arg(long)]
        title: String,

        /// Plot ID
        #[arg(long)]
        plot: u32,

        /// Budget to commit
        #[arg(long)]
        budget: i64,

        /// Role assignment as NAME=ACTOR or NAME=ACTOR:COST (repeatable)
        #[arg(short, long = "role")]
        roles: Vec<String>,
    },

    /// Commit a budget to a performance without casting it
    Commit {
        /// Billing title
        #[arg(long)]
        title: String,

        /// Plot ID
        #[arg(long)]
        plot: u32,

        /// Budget to commit
        #[arg(long)]
        budget: i64,

        /// Season year (default: current year)
        #[arg(long)]
        year: Option<u32>,
    },

    /// Cast an actor in a committed performance
    Assign {
        /// Performance ID
        performance: u32,

        /// Actor ID
        actor: u32,

        /// Role name
        role: String,

        /// Contract cost (default: the quoted total)
        cost: Option<i64>,
    },

    /// Stage a committed performance and settle the season
    Resolve {
        /// Performance ID
        performance: u32,
    },

    /// Sit out the year and sell staging rights
    Skip,

    /// List all performances
    History,

    /// Show a performance with its cast
    Show {
        /// Performance ID
        performance: u32,
    },

    /// Print the season journal
    Journal {
        /// Output format: text, markdown
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let ctx = commands::Context::new(cli.state, cli.seed);

    let result = match cli.command {
        Commands::Init { force } => commands::init::run(&ctx, force),
        Commands::Status => commands::status::run(&ctx),
        Commands::Actors => commands::actors::list(&ctx),
        Commands::Plots => commands::plots::run(&ctx),
        Commands::Quote { actor } => commands::actors::quote(&ctx, actor),
        Commands::Hire {
            last,
            first,
            patronymic,
            rank,
            awards,
            experience,
        } => commands::actors::hire(
            &ctx,
            commands::actors::HireArgs {
                last,
                first,
                patronymic,
                rank,
                awards,
                experience,
            },
        ),
        Commands::Edit {
            actor,
            last,
            first,
            patronymic,
            rank,
            awards,
            experience,
        } => commands::actors::edit(
            &ctx,
            actor,
            commands::actors::EditArgs {
                last,
                first,
                patronymic,
                rank,
                awards,
                experience,
            },
        ),
        Commands::Fire { actor } => commands::actors::fire(&ctx, actor),
        Commands::Produce {
            title,
            plot,
            budget,
            roles,
        } => commands::produce::run(&ctx, &title, plot, budget, &roles),
        Commands::Commit {
            title,
            plot,
            budget,
            year,
        } => commands::produce::commit(&ctx, &title, plot, budget, year),
        Commands::Assign {
            performance,
            actor,
            role,
            cost,
        } => commands::produce::assign(&ctx, performance, actor, &role, cost),
        Commands::Resolve { performance } => commands::resolve::run(&ctx, performance),
        Commands::Skip => commands::resolve::skip(&ctx),
        Commands::History => commands::history::list(&ctx),
        Commands::Show { performance } => commands::history::show(&ctx, performance),
        Commands::Journal { format } => commands::journal::run(&ctx, &format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
