use clap::Parser;
use log::info;

use checkers_engine::config::{MatchConfig, DEFAULT_MAX_PLIES};
use checkers_engine::game_repr::{count_kings, count_pieces, GameStatus, Player, Variant};
use checkers_engine::orchestrator::{play_match, MatchOutcome};
use checkers_engine::Difficulty;

/// Play one engine-versus-engine checkers game and print the result
#[derive(Parser, Debug)]
#[command(name = "self_play", version, about)]
struct Args {
    /// Rule variant: american, casual, brazilian or suicide
    #[arg(short, long, default_value = "american")]
    variant: Variant,

    /// Difficulty for Red (moves first): easy, medium or hard
    #[arg(long, default_value = "medium")]
    red: Difficulty,

    /// Difficulty for Black
    #[arg(long, default_value = "medium")]
    black: Difficulty,

    /// Abandon the game after this many plies
    #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
    max_plies: usize,

    /// Seed for reproducible random play
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every ply
    #[arg(long)]
    show_board: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = MatchConfig::new(args.variant, args.red, args.black).with_max_plies(args.max_plies);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    info!("{}: {}", config.rules.display_name, config.rules.description);
    let outcome = play_match(&config);

    if args.show_board {
        replay(&outcome);
    }
    report(&outcome);
}

fn replay(outcome: &MatchOutcome) {
    let mut board = checkers_engine::create_initial_board();
    let mut player = Player::Red;
    println!("{board}");
    for (ply, mv) in outcome.history.iter().enumerate() {
        board = board.execute_move(mv);
        println!("{}. {} {}", ply + 1, player.name(), mv);
        println!("{board}");
        player = player.opposite();
    }
}

fn report(outcome: &MatchOutcome) {
    let result = match outcome.status {
        GameStatus::RedWins => "Red wins",
        GameStatus::BlackWins => "Black wins",
        GameStatus::Draw => "Draw",
        GameStatus::Playing if outcome.ply_limit_reached => "Ply limit reached",
        GameStatus::Playing => "Unfinished",
    };

    let pieces = count_pieces(&outcome.final_board);
    let kings = count_kings(&outcome.final_board);

    println!("Result: {result} after {} plies", outcome.plies());
    println!("{}", outcome.final_board);
    for player in [Player::Red, Player::Black] {
        let stats = outcome.stats(player);
        println!(
            "{:<5} pieces {:>2} kings {:>2} captured {:>2} crowned {:>2} longest chain {}",
            player.name(),
            pieces.of(player),
            kings.of(player),
            stats.pieces_captured,
            stats.kings_earned,
            stats.longest_chain
        );
    }
}
