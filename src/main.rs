//! Golf Chaos demo runner
//!
//! Plays a full round in demo mode on the builtin (or a user-supplied)
//! course, then prints the scorecard and the resulting local leaderboard.
//! Run with RUST_LOG=info to watch the round stroke by stroke.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;

use golf_chaos::Leaderboard;
use golf_chaos::consts::SIM_DT;
use golf_chaos::leaderboard::{LeaderboardEntry, ScoreSubmission};
use golf_chaos::sim::{Course, GameState, TickInput, tick};

#[derive(Parser, Debug)]
#[command(name = "golf-chaos", about = "Casual 2D physics golf, autoplayed")]
struct Args {
    /// Course definition JSON (defaults to the builtin nine holes)
    #[arg(long)]
    course: Option<PathBuf>,

    /// Demo autoplayer seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Player name for the leaderboard
    #[arg(long, default_value = "Demo Player")]
    player: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let course = match &args.course {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading course file {}", path.display()))?;
            Course::from_json(&json).context("parsing course file")?
        }
        None => Course::standard(),
    };

    let mut state = GameState::new(course, args.seed).context("starting round")?;
    let input = TickInput {
        gestures: vec![],
        demo_mode: true,
    };

    let mut ticks: u64 = 0;
    while !state.is_round_complete() {
        tick(&mut state, &input, SIM_DT);
        ticks += 1;
        if ticks > 100_000_000 {
            bail!("demo round did not finish");
        }
    }

    println!("\nScorecard (seed {})", args.seed);
    println!("{:<6} {:>4} {:>8} {:>6}", "hole", "par", "strokes", "score");
    for result in &state.round.results {
        let par = state.course.holes[result.hole_index].par;
        println!(
            "{:<6} {:>4} {:>8} {:>+6}",
            result.hole_index + 1,
            par,
            result.strokes,
            result.relative_to_par
        );
    }
    let summary = state.round_summary();
    println!(
        "\nTotal: {} strokes, {:+} to par\n",
        summary.total_strokes, summary.score_relative_to_par
    );

    // Submission is validated exactly as it would be before the network call
    let submission = ScoreSubmission::new(
        &args.player,
        summary.score_relative_to_par,
        summary.total_strokes,
    );
    submission.validate().context("score submission rejected")?;

    let completed_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before unix epoch")?
        .as_millis() as u64;

    let mut board = Leaderboard::new();
    let rank = board.submit(LeaderboardEntry {
        player_name: submission.player_name.clone(),
        score_relative_to_par: submission.score_relative_to_par,
        total_strokes: submission.total_strokes,
        completed_at,
    });

    match rank {
        Some(rank) => println!("Leaderboard rank: #{rank}"),
        None => println!("Score did not make the leaderboard"),
    }
    for (i, entry) in board.entries.iter().enumerate() {
        println!(
            "{:>2}. {:<20} {:+} ({} strokes)",
            i + 1,
            entry.player_name,
            entry.score_relative_to_par,
            entry.total_strokes
        );
    }

    Ok(())
}
