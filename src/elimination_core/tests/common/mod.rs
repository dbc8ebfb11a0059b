//! Random season completions, used to cross-check elimination verdicts.
#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use elimination_core::Roster;

/// Probability that either side wins a simulated game.
const WIN_PROB: f64 = 0.5;

/// Play out every remaining game at random and return final win totals,
/// indexed by team id.
///
/// Games between division teams credit exactly one of the two sides; games
/// against outside opponents (remaining minus in-division games) are won or
/// lost independently.
pub fn complete_season<R: Rng>(roster: &Roster, rng: &mut R) -> Vec<u32> {
    let n = roster.len();
    let mut wins: Vec<u32> = roster.teams().iter().map(|team| team.wins).collect();

    for i in 0..n {
        for j in (i + 1)..n {
            for _ in 0..roster.games_between(i, j) {
                if rng.gen_bool(WIN_PROB) {
                    wins[i] += 1;
                } else {
                    wins[j] += 1;
                }
            }
        }
    }

    for team in roster.teams() {
        let outside = team.remaining.saturating_sub(team.remaining_in_division());
        for _ in 0..outside {
            if rng.gen_bool(WIN_PROB) {
                wins[team.id] += 1;
            }
        }
    }

    wins
}

/// Teams whose final total is at least every rival's.
pub fn contenders(final_wins: &[u32]) -> Vec<usize> {
    let best = final_wins.iter().copied().max().unwrap_or(0);
    final_wins
        .iter()
        .enumerate()
        .filter(|&(_, &w)| w == best)
        .map(|(id, _)| id)
        .collect()
}

/// Run `seasons` seeded completions and count, per team id, how many of them
/// leave the team in contention for first place.
///
/// Per-season seeds are drawn up front from one `ChaCha8Rng`, so the result
/// depends only on `seed` and not on how rayon schedules the work.
pub fn run_playouts(roster: &Roster, seasons: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let seeds: Vec<u64> = (0..seasons).map(|_| rng.gen::<u64>()).collect();

    seeds
        .par_iter()
        .map(|&season_seed| {
            let mut season_rng = ChaCha8Rng::seed_from_u64(season_seed);
            let mut tally = vec![0usize; roster.len()];
            for id in contenders(&complete_season(roster, &mut season_rng)) {
                tally[id] += 1;
            }
            tally
        })
        .reduce(
            || vec![0usize; roster.len()],
            |mut acc, tally| {
                for (a, t) in acc.iter_mut().zip(tally) {
                    *a += t;
                }
                acc
            },
        )
}
