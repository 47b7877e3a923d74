#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, CliPlayer, Console, GameConfig, Session, BOARD_SIZE_RANGE, DEFAULT_BOARD_SIZE,
    SHIP_COUNT_RANGE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two-player hot-seat battleship on one terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(*SHIP_COUNT_RANGE.start() as i64..=*SHIP_COUNT_RANGE.end() as i64),
        help = "Ships per player; a fleet of k ships has lengths 1..=k (asked interactively if omitted)"
    )]
    ships: Option<u8>,
    #[arg(
        long,
        default_value_t = DEFAULT_BOARD_SIZE,
        value_parser = clap::value_parser!(u8).range(*BOARD_SIZE_RANGE.start() as i64..=*BOARD_SIZE_RANGE.end() as i64)
    )]
    board_size: u8,
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut console = Console::stdio();
    let ships = match cli.ships {
        Some(n) => n,
        None => console.ship_count()?,
    };
    let config = GameConfig::new(cli.board_size, ships)?;
    log::info!(
        "starting {}x{} match with {} ships each",
        config.board_size(),
        config.board_size(),
        config.ship_count()
    );

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (random placement will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let (mut one, mut two) = CliPlayer::pair(console);
    let mut session = Session::new(config);
    session.run(&mut rng, &mut one, &mut two)?;
    Ok(())
}
