/// TuneCloud Console - headless player driven by line commands
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tunecloud_console::{Command, ConsoleConfig, Session};

#[derive(Parser)]
#[command(name = "tunecloud-console")]
#[command(about = "Headless TuneCloud player driven by line commands", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "tunecloud.toml")]
    config: PathBuf,

    /// Catalog file (overrides catalog.path from the configuration)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the player
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tunecloud_console=info,tunecloud_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = ConsoleConfig::load(&cli.config)?;
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }
    config.validate()?;

    let catalog = config
        .load_catalog()
        .with_context(|| format!("Failed to load catalog {}", config.catalog.path.display()))?;
    let mut session = Session::new(&config, catalog);

    tracing::info!("TuneCloud console ready");
    run(&mut session)
}

fn run(session: &mut Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", session.status_line())?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{} (try \"help\")", e)?;
                continue;
            }
        };

        for output in session.execute(command) {
            writeln!(stdout, "{}", output)?;
        }
        stdout.flush()?;
    }

    Ok(())
}
