//! Per-team elimination verdicts.
//!
//! A team is first checked against every rival's current wins; only when no
//! single rival settles the question is a flow network built. The certificate
//! is read off the source side of the minimum cut and double-checked with the
//! averaging bound before it is accepted.

use crate::error::{EliminationError, Result};
use crate::network::{EliminationNetwork, SINK, SOURCE};
use crate::roster::Roster;

/// Verdict for one team.
///
/// The certificate is the set of rival ids proving elimination; it is empty
/// exactly when the team can still finish first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Elimination {
    pub team: usize,
    certificate: Vec<usize>,
}

impl Elimination {
    fn alive(team: usize) -> Self {
        Elimination {
            team,
            certificate: Vec::new(),
        }
    }

    pub fn is_eliminated(&self) -> bool {
        !self.certificate.is_empty()
    }

    /// Rival ids in ascending order.
    pub fn certificate(&self) -> &[usize] {
        &self.certificate
    }
}

/// Rival whose current wins already exceed what `team` can reach.
///
/// Picks the rival with the most wins, lowest id on a tie. `team` must be a
/// roster id.
pub fn trivial_eliminator(roster: &Roster, team: usize) -> Option<usize> {
    let ceiling = roster.team(team).max_possible_wins();
    roster
        .teams()
        .iter()
        .filter(|rival| rival.id != team && rival.wins > ceiling)
        .max_by(|a, b| a.wins.cmp(&b.wins).then(b.id.cmp(&a.id)))
        .map(|rival| rival.id)
}

/// Averaging bound: do the rivals in `subset` have, between current wins and
/// the games they still play among themselves, more than `ceiling` wins per
/// team on average?
pub fn exceeds_average(roster: &Roster, subset: &[usize], ceiling: u32) -> bool {
    if subset.is_empty() {
        return false;
    }

    let wins: u64 = subset.iter().map(|&i| roster.team(i).wins as u64).sum();
    let mut games: u64 = 0;
    for (a, &i) in subset.iter().enumerate() {
        for &j in &subset[a + 1..] {
            games += roster.games_between(i, j) as u64;
        }
    }

    // (wins + games) / |R| > ceiling, kept in integers
    wins + games > ceiling as u64 * subset.len() as u64
}

/// Reject a cut-derived certificate that does not prove elimination.
/// `team` must be a roster id.
pub fn check_certificate(roster: &Roster, team: usize, certificate: &[usize]) -> Result<()> {
    let ceiling = roster.team(team).max_possible_wins();
    if exceeds_average(roster, certificate, ceiling) {
        return Ok(());
    }
    Err(EliminationError::SolverInvariant(format!(
        "certificate for {} ({} rivals) does not beat the ceiling of {} wins",
        roster.team(team).name,
        certificate.len(),
        ceiling
    )))
}

/// Decide whether `team` is eliminated and build its certificate.
///
/// Fails with `UnknownTeam` if `team` is not a roster id.
pub fn evaluate(roster: &Roster, team: usize) -> Result<Elimination> {
    let name = &roster
        .get(team)
        .ok_or_else(|| EliminationError::UnknownTeam(format!("team id {}", team)))?
        .name;

    if let Some(rival) = trivial_eliminator(roster, team) {
        log::debug!(
            "{} trivially eliminated by {}",
            name,
            roster.team(rival).name
        );
        return Ok(Elimination {
            team,
            certificate: vec![rival],
        });
    }

    let mut flow = EliminationNetwork::build(roster, team);
    let cut = flow.network.max_flow(SOURCE, SINK)?;

    if cut.value() >= flow.total_games {
        log::debug!(
            "{} not eliminated: all {} remaining rival games fit under the ceiling",
            name,
            flow.total_games
        );
        return Ok(Elimination::alive(team));
    }

    let mut certificate: Vec<usize> = flow
        .rivals()
        .iter()
        .filter(|&&(vertex, _)| cut.in_cut(vertex))
        .map(|&(_, id)| id)
        .collect();
    certificate.sort_unstable();

    check_certificate(roster, team, &certificate)?;

    log::debug!(
        "{} eliminated: max flow {} < {} games, certificate of {} rivals",
        name,
        cut.value(),
        flow.total_games,
        certificate.len()
    );

    Ok(Elimination { team, certificate })
}
