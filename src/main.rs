// Scrim balancer entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr; stdout carries the result)
// 2. Load config
// 3. Read the session snapshot
// 4. Replay it through a GameSession and close voting
// 5. Print the team partition

use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::info;

use scrim_balancer::config;
use scrim_balancer::session::snapshot::SessionSnapshot;
use scrim_balancer::session::state::SessionResult;

const USAGE: &str = "usage: scrimbal <session.json> [--pretty]";

struct Args {
    snapshot: PathBuf,
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;

    let args = parse_args()?;

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        roster_size = config.session.roster_size,
        rating_min = config.ratings.min,
        rating_max = config.ratings.max,
        "config loaded"
    );

    // 3. Read the session snapshot
    let text = std::fs::read_to_string(&args.snapshot).with_context(|| {
        format!(
            "failed to read session snapshot {}",
            args.snapshot.display()
        )
    })?;
    let snapshot: SessionSnapshot =
        serde_json::from_str(&text).context("failed to parse session snapshot")?;
    info!(
        game = %snapshot.game,
        players = snapshot.players.len(),
        ballots = snapshot.ballots.len(),
        "snapshot loaded"
    );

    // 4. Replay the snapshot and close voting
    let mut session = snapshot
        .into_session(&config)
        .context("snapshot does not form a valid session")?;
    let result = session.close_voting().context("failed to close voting")?;

    // 5. Print the team partition
    if args.pretty {
        print_partition(&result);
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

fn parse_args() -> anyhow::Result<Args> {
    let mut snapshot = None;
    let mut pretty = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--pretty" => pretty = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => bail!("unknown flag `{arg}`\n{USAGE}"),
            _ => {
                if snapshot.is_some() {
                    bail!("expected exactly one snapshot path\n{USAGE}");
                }
                snapshot = Some(PathBuf::from(arg));
            }
        }
    }

    match snapshot {
        Some(snapshot) => Ok(Args { snapshot, pretty }),
        None => bail!("{USAGE}"),
    }
}

fn print_partition(result: &SessionResult) {
    for (idx, team) in result.partition.teams.iter().enumerate() {
        println!("Team {} (average {:.2})", idx + 1, team.average_score);
        for player in &team.players {
            println!("  {:<24} {:>5.2}", player.name, player.score);
        }
    }
    println!("Average gap: {:.2}", result.partition.score_gap());
}

/// Initialize tracing to stderr so stdout stays clean for the result.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("scrim_balancer=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
