use clap::{Parser, Subcommand};
use mechforge::knowledge::loader;
use mechforge::scorer::Scorer;
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Build assistant over scraped unit counter data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value = "data/units.json")]
    counters: String,

    #[arg(global = true, long, default_value = "data/tiers.json")]
    tiers: String,

    #[arg(global = true, long, default_value = "data/metadata.json")]
    metadata: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score every unit against the current rosters and round.
    Advise(cmd::advise::AdviseArgs),
    /// Show the reference card for one or more units.
    Inspect(cmd::inspect::InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    println!("\n🤖 MechForge Build Assistant");

    let config = match &cli.command {
        Commands::Advise(args) => args.config.clone(),
        Commands::Inspect(args) => args.config.clone(),
    };

    let kb = loader::load_documents(
        &cli.counters,
        &cli.tiers,
        &cli.metadata,
        config.weights.default_cost,
        config.weights.default_unlock_cost,
    );

    if kb.is_empty() {
        eprintln!("\n❌ No reference data loaded.");
        eprintln!("   Expected JSON documents at:");
        eprintln!("     counters: {}", cli.counters);
        eprintln!("     tiers:    {}", cli.tiers);
        eprintln!("     metadata: {}", cli.metadata);
        process::exit(1);
    }
    println!("📂 Knowledge base: {} units", kb.len());

    let scorer = Scorer::new(kb, config);

    match cli.command {
        Commands::Advise(args) => cmd::advise::run(&args, &scorer),
        Commands::Inspect(args) => cmd::inspect::run(&args, &scorer),
    }
}
