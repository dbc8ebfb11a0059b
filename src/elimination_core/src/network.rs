use crate::flow::{Capacity, FlowNetwork};
use crate::roster::Roster;

pub const SOURCE: usize = 0;
pub const SINK: usize = 1;

/// Flow network asking whether every game among the rivals of one team can
/// be played without any rival passing that team's best possible total.
///
/// Layout: source and sink first, then one vertex per rival, then one
/// vertex per pair of rivals that still meet.
#[derive(Clone, Debug)]
pub struct EliminationNetwork {
    pub network: FlowNetwork,

    /// Roster id of the team under test
    pub team: usize,

    /// Sum of all `source -> game` capacities
    pub total_games: Capacity,

    /// `(vertex, roster id)` for every rival
    rivals: Vec<(usize, usize)>,
}

impl EliminationNetwork {
    /// Build the network for `team`.
    ///
    /// Expects rivals with more wins than `team` can reach to have been
    /// handled by the trivial check; their sink capacity is clamped to zero
    /// all the same.
    pub fn build(roster: &Roster, team: usize) -> Self {
        let ceiling = roster.team(team).max_possible_wins() as Capacity;
        let others: Vec<usize> = (0..roster.len()).filter(|&id| id != team).collect();

        let mut games = Vec::new();
        for (a, &i) in others.iter().enumerate() {
            for &j in &others[a + 1..] {
                let count = roster.games_between(i, j);
                if count > 0 {
                    games.push((i, j, count as Capacity));
                }
            }
        }

        let total_games: Capacity = games.iter().map(|&(_, _, count)| count).sum();
        let unbounded = total_games + 1;

        let first_rival = 2;
        let first_game = first_rival + others.len();
        let vertices = first_game + games.len();

        let mut vertex_of = vec![usize::MAX; roster.len()];
        let mut rivals = Vec::with_capacity(others.len());
        for (offset, &id) in others.iter().enumerate() {
            vertex_of[id] = first_rival + offset;
            rivals.push((first_rival + offset, id));
        }

        let mut network = FlowNetwork::with_capacity(vertices, 3 * games.len() + others.len());

        for (offset, &(i, j, count)) in games.iter().enumerate() {
            let game = first_game + offset;
            network.add_edge(SOURCE, game, count);
            network.add_edge(game, vertex_of[i], unbounded);
            network.add_edge(game, vertex_of[j], unbounded);
        }

        for &(vertex, id) in &rivals {
            let headroom = (ceiling - roster.team(id).wins as Capacity).max(0);
            network.add_edge(vertex, SINK, headroom);
        }

        log::trace!(
            "network for {}: {} rivals, {} games left among them, {} vertices",
            roster.team(team).name,
            rivals.len(),
            games.len(),
            vertices
        );

        EliminationNetwork {
            network,
            team,
            total_games,
            rivals,
        }
    }

    /// `(vertex, roster id)` pairs of the rival vertices.
    pub fn rivals(&self) -> &[(usize, usize)] {
        &self.rivals
    }
}
