#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use seabattle::{init_logging, AiPlayer, GameSession, InteractivePlayer, BOARD_SIZE};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn greet() {
    println!("-------------------------");
    println!("   Welcome to Sea Battle ");
    println!("-------------------------");
    println!(" Enter your shot as two  ");
    println!(" numbers from 1 to {}:    ", BOARD_SIZE);
    println!(" row first, then column  ");
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            let rng = make_rng(seed);
            let mut session: GameSession = GameSession::<BOARD_SIZE>::new(
                Box::new(InteractivePlayer::stdio()),
                Box::new(AiPlayer::new()),
                rng,
            )?;
            greet();
            session.run(&mut stdout)?;
        }
        Commands::Watch { seed } => {
            let rng = make_rng(seed);
            let mut session: GameSession = GameSession::<BOARD_SIZE>::new(
                Box::new(AiPlayer::new()),
                Box::new(AiPlayer::new()),
                rng,
            )?
            .with_labels("Computer 1", "Computer 2");
            session.run(&mut stdout)?;
        }
    }
    Ok(())
}
