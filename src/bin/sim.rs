use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiPlayer, GameSession, Side, BOARD_SIZE};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut session: GameSession = GameSession::<BOARD_SIZE>::new(
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        SmallRng::seed_from_u64(seed),
    )?;
    let winner = session.run(&mut std::io::sink())?;

    let winner = match winner {
        Side::First => "player1",
        Side::Second => "player2",
    };

    let result = json!({
        "seed": seed,
        "winner": winner,
        "handovers": session.turn_index(),
        "shots": session.shots_fired(Side::First) + session.shots_fired(Side::Second),
        "player1": {
            "shots": session.shots_fired(Side::First),
            "ships_lost": session.board(Side::First).sunk_count(),
        },
        "player2": {
            "shots": session.shots_fired(Side::Second),
            "ships_lost": session.board(Side::Second).sunk_count(),
        },
        "last_shot": session.last_shot(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
