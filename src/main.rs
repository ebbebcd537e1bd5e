use anyhow::Result;
use clap::Parser;
use dinosim_lib::app::App;
use dinosim_lib::model::config::SimConfig;
use dinosim_lib::model::metrics::init_logging;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Stop after this many ticks (runs until extinction otherwise)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override the world seed from the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Ignore target_fps and tick as fast as possible
    #[arg(long)]
    fast: bool,

    /// Print the final world state as JSON to stdout
    #[arg(long)]
    dump_state: bool,

    /// Default log filter when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = SimConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    let mut app = App::new(config)?.with_max_ticks(args.ticks);
    if args.fast {
        app = app.unthrottled();
    }
    let summary = app.run();

    if args.dump_state {
        println!("{}", serde_json::to_string_pretty(app.world.state())?);
    } else {
        let stats = app.world.stats();
        eprintln!(
            "Stopped after {} ticks ({:?}): {} dinos, {} plants, max generation {}",
            summary.ticks, summary.reason, stats.dinos, stats.plants, stats.max_generation
        );
    }

    Ok(())
}
