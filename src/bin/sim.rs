use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tetroship::{engine_for, init_logging, maps, play_out, Board, BonusKind, Tier, MAX_SHOTS};

#[derive(Parser)]
#[command(author, version, about = "Play the targeting engine against a board and print a JSON report", long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = Tier::Two)]
    tier: Tier,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Index into the map catalogue; a random board is used when omitted")]
    map: Option<usize>,
    #[arg(
        long,
        default_value = "+*=",
        help = "Bonus cells on a random board, as layout symbols (+ replay, * cross fire, = move)"
    )]
    bonuses: String,
    #[arg(long, help = "Print the board to stderr once the game is over")]
    show_board: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let mut rng = if let Some(s) = args.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut board = match args.map {
        Some(index) => maps::map(index).map_err(|e| anyhow::anyhow!(e))?,
        None => {
            let bonuses = args
                .bonuses
                .chars()
                .map(|c| {
                    BonusKind::from_symbol(c)
                        .ok_or_else(|| anyhow::anyhow!("unknown bonus symbol {:?}", c))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            Board::random(&mut rng, &bonuses).map_err(|e| anyhow::anyhow!(e))?
        }
    };

    let mut engine = engine_for(args.tier, &board);
    let report = play_out(&mut engine, &mut board, &mut rng, MAX_SHOTS)?;
    if args.show_board {
        eprintln!("{}", board);
    }
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
