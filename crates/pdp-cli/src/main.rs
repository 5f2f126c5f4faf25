mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{assessment::AssessmentSubcommand, config::ConfigSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdp",
    about = "Generate and inspect 24-month leadership development plans",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .pdp/)
    #[arg(long, global = true, env = "PDP_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log rotation and allocation decisions
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .pdp/ and a default config
    Init,

    /// List the competency tiers
    Tiers,

    /// List content library items
    Library {
        /// Only items of this tier (T1..T5)
        #[arg(long)]
        tier: Option<String>,

        /// Only items of this difficulty (Intro, Core, Mastery)
        #[arg(long)]
        difficulty: Option<String>,
    },

    /// Work with assessment files
    Assessment {
        #[command(subcommand)]
        subcommand: AssessmentSubcommand,
    },

    /// Show the tier rotation an assessment produces
    Rotation {
        /// Assessment YAML file
        file: PathBuf,
    },

    /// Generate a plan from an assessment and store it
    Generate {
        /// Assessment YAML file
        file: PathBuf,

        /// Owner uid the plan is stored under
        #[arg(long)]
        owner: String,

        /// Generate and print without storing
        #[arg(long)]
        dry_run: bool,
    },

    /// Show a stored plan
    Show {
        #[arg(long)]
        owner: String,

        /// Only this month (1-24)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Summarize a stored plan against the generic baseline
    Review {
        #[arg(long)]
        owner: String,
    },

    /// Inspect the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Tiers => cmd::tiers::run(cli.json),
        Commands::Library { tier, difficulty } => {
            cmd::library::run(&root, tier.as_deref(), difficulty.as_deref(), cli.json)
        }
        Commands::Assessment { subcommand } => cmd::assessment::run(&root, subcommand, cli.json),
        Commands::Rotation { file } => cmd::rotation::run(&file, cli.json),
        Commands::Generate {
            file,
            owner,
            dry_run,
        } => cmd::generate::run(&root, &file, &owner, dry_run, cli.json),
        Commands::Show { owner, month } => cmd::show::run(&root, &owner, month, cli.json),
        Commands::Review { owner } => cmd::review::run(&root, &owner, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
