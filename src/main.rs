use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;

use property_deal::{Game, GameConfig, LoopEnd, TurnLoop};

#[derive(Debug, Default)]
struct CliOptions {
    seed: Option<u64>,
    config: Option<PathBuf>,
    max_turns: Option<u32>,
    players: Vec<String>,
}

fn parse_cli_options(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                let value = args.get(idx + 1).context("--seed needs a value")?;
                options.seed = Some(value.parse().with_context(|| format!("bad seed: {value}"))?);
                idx += 1;
            }
            "--config" => {
                let value = args.get(idx + 1).context("--config needs a path")?;
                options.config = Some(PathBuf::from(value));
                idx += 1;
            }
            "--max-turns" => {
                let value = args.get(idx + 1).context("--max-turns needs a value")?;
                options.max_turns =
                    Some(value.parse().with_context(|| format!("bad turn limit: {value}"))?);
                idx += 1;
            }
            flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
            name => options.players.push(name.to_string()),
        }
        idx += 1;
    }
    Ok(options)
}

fn load_config(options: &CliOptions) -> anyhow::Result<GameConfig> {
    let mut config = match &options.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if !options.players.is_empty() {
        config.players = options.players.clone();
    }
    if let Some(seed) = options.seed {
        config.seed = seed;
    }
    config.validate().context("invalid config")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args)?;
    let config = load_config(&options)?;
    info!(seed = config.seed, players = ?config.players, "starting game");

    let game = Game::new(config)?;
    let stdin = io::stdin();
    let mut driver = TurnLoop::new(game, stdin.lock(), io::stdout());
    if let Some(max) = options.max_turns {
        driver = driver.with_max_turns(max);
    }

    match driver.run()? {
        LoopEnd::Winner(winner) => info!(%winner, "game over"),
        LoopEnd::InputClosed => info!("input closed"),
        LoopEnd::TurnLimit => info!("turn limit reached"),
    }
    Ok(())
}
