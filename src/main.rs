//! Self-play driver
//!
//! Two agents play each other, white first. Each proposed move is recorded
//! on the other agent's board. Set `RUST_LOG=debug` for search details.

use clap::Parser;
use log::{info, warn};

use network::{Agent, AgentError, Color};

/// Let two Network agents play a game against each other
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Search depth of the black agent
    #[arg(long, default_value_t = network::DEFAULT_SEARCH_DEPTH)]
    black_depth: u8,
    /// Search depth of the white agent
    #[arg(long, default_value_t = network::DEFAULT_SEARCH_DEPTH)]
    white_depth: u8,
    /// Stop after this many moves without a winner
    #[arg(long, default_value_t = 200)]
    max_turns: u32,
    /// Do not print the board after every move
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), AgentError> {
    env_logger::init();
    let args = Args::parse();

    let mut white = Agent::with_depth(Color::White, args.white_depth);
    let mut black = Agent::with_depth(Color::Black, args.black_depth);

    for turn in 1..=args.max_turns {
        let (mover, other) = if turn % 2 == 1 {
            (&mut white, &mut black)
        } else {
            (&mut black, &mut white)
        };

        let result = mover.propose_move_with_stats()?;
        let color = mover.color();
        if !other.record_opponent_move(result.best_move) {
            warn!("{} refused {} by {color}", other.color(), result.best_move);
            println!("boards diverged at move {turn}");
            return Ok(());
        }

        println!(
            "{turn:>3}. {color} {} score {} nodes {} ({} ms)",
            result.best_move, result.score, result.nodes, result.time_ms
        );
        if !args.quiet {
            println!("{}", mover.board());
        }

        if let Some(winner) = mover.board().winner(color) {
            println!("{winner} wins after {turn} moves");
            return Ok(());
        }
    }

    info!("no winner after {} moves", args.max_turns);
    println!("no winner after {} moves", args.max_turns);
    Ok(())
}
