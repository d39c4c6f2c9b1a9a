use anyhow::Context;
use cable_splitter::utils::logger;
use cable_splitter::{Cable, CliConfig, SplitError, Splitter, SplitterConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let pieces = match run(&config) {
        Ok(pieces) => pieces,
        Err(e) => {
            tracing::error!("Split failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if config.json {
        let output =
            serde_json::to_string_pretty(&pieces).context("failed to encode pieces as JSON")?;
        println!("{}", output);
    } else {
        for piece in &pieces {
            println!("{}\t{}", piece.name(), piece.length());
        }
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<Vec<Cable>, SplitError> {
    let splitter_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading splitter limits from: {}", path);
            SplitterConfig::from_file(path)?
        }
        None => SplitterConfig::default(),
    };
    let splitter = Splitter::with_config(splitter_config)?;

    let (cable, times) = config.split_arguments();
    splitter.split_value(&cable, &times)
}
