use anyhow::Result;
use chess_engine::{Color, Cpu, Player, SearchConfig};
use clap::Parser;
use console_chess::{settings, Cli, Game, Human, PlayerKind};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .init();

    let config = settings::resolve(&cli)?;
    info!(
        "[MAIN] White: {:?}, Black: {:?}, depth {}",
        cli.white, cli.black, config.search.depth
    );

    let mut game = Game::new(
        player(cli.player_kind(Color::White), Color::White, config.search),
        player(cli.player_kind(Color::Black), Color::Black, config.search),
        config.eval,
        config.search.max_plies,
        io::stdout(),
    )?;
    game.run()?;
    Ok(())
}

fn player(kind: PlayerKind, color: Color, search: SearchConfig) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(Human::stdio(color)),
        PlayerKind::Cpu => Box::new(Cpu::new(color, search)),
    }
}
