use std::collections::HashMap;

use crate::error::{EliminationError, Result};

/// One row of the input schedule, as handed over by a loader.
///
/// Counts are signed so that bad input can be rejected with a proper error
/// instead of wrapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRecord {
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub remaining: i64,

    /// Remaining games against every team, indexed by input position
    pub against: Vec<i64>,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>, wins: i64, losses: i64, remaining: i64, against: Vec<i64>) -> Self {
        TeamRecord {
            name: name.into(),
            wins,
            losses,
            remaining,
            against,
        }
    }
}

/// Validated division member.
#[derive(Clone, Debug)]
pub struct Team {
    /// Position in the roster, also the vertex index in derived graphs
    pub id: usize,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub remaining: u32,
    pub against: Vec<u32>,
}

impl Team {
    /// Best win total this team can still reach.
    pub fn max_possible_wins(&self) -> u32 {
        self.wins + self.remaining
    }

    /// Games left against teams of this division.
    pub fn remaining_in_division(&self) -> u32 {
        self.against.iter().sum()
    }
}

/// Immutable set of teams, indexed by id and by name.
#[derive(Clone, Debug)]
pub struct Roster {
    teams: Vec<Team>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Validate input records and build the roster.
    ///
    /// Rejects repeated names, negative counts, rows of the wrong length,
    /// games against oneself and asymmetric matrices.
    pub fn new(records: Vec<TeamRecord>) -> Result<Self> {
        let n = records.len();
        let mut index = HashMap::with_capacity(n);

        for (id, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), id).is_some() {
                return Err(EliminationError::DuplicateTeam(record.name.clone()));
            }
        }

        let mut teams = Vec::with_capacity(n);
        for (id, record) in records.into_iter().enumerate() {
            teams.push(validate_record(id, n, record)?);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if teams[i].against[j] != teams[j].against[i] {
                    return Err(EliminationError::InvalidSchedule(format!(
                        "{} lists {} games against {}, but {} lists {}",
                        teams[i].name, teams[i].against[j], teams[j].name, teams[j].name, teams[j].against[i]
                    )));
                }
            }
        }

        Ok(Roster { teams, index })
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Team by id.
    ///
    /// # Panics
    /// If `id` is not below [`Roster::len`]; use [`Roster::get`] for
    /// unchecked ids.
    pub fn team(&self, id: usize) -> &Team {
        &self.teams[id]
    }

    pub fn get(&self, id: usize) -> Option<&Team> {
        self.teams.get(id)
    }

    /// Look up a team id by name.
    pub fn id_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| EliminationError::UnknownTeam(name.to_string()))
    }

    pub fn by_name(&self, name: &str) -> Result<&Team> {
        self.id_of(name).map(|id| &self.teams[id])
    }

    /// Remaining games between two teams, by id.
    pub fn games_between(&self, i: usize, j: usize) -> u32 {
        self.teams[i].against[j]
    }
}

fn non_negative(team: &str, field: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        EliminationError::InvalidSchedule(format!("{}: {} must be a non-negative count, got {}", team, field, value))
    })
}

fn validate_record(id: usize, n: usize, record: TeamRecord) -> Result<Team> {
    let TeamRecord {
        name,
        wins,
        losses,
        remaining,
        against,
    } = record;

    if against.len() != n {
        return Err(EliminationError::InvalidSchedule(format!(
            "{}: expected {} remaining-game entries, got {}",
            name,
            n,
            against.len()
        )));
    }
    if against[id] != 0 {
        return Err(EliminationError::InvalidSchedule(format!(
            "{}: {} games scheduled against itself",
            name, against[id]
        )));
    }

    let wins = non_negative(&name, "wins", wins)?;
    let losses = non_negative(&name, "losses", losses)?;
    let remaining = non_negative(&name, "remaining", remaining)?;
    let against = against
        .into_iter()
        .map(|g| non_negative(&name, "remaining games", g))
        .collect::<Result<Vec<_>>>()?;

    // final totals must stay representable however the remaining games go
    let in_division = against.iter().try_fold(0u32, |acc, &g| acc.checked_add(g));
    if in_division
        .and_then(|games| wins.checked_add(remaining.max(games)))
        .is_none()
    {
        return Err(EliminationError::InvalidSchedule(format!(
            "{}: {} wins plus remaining games overflow a win count",
            name, wins
        )));
    }

    Ok(Team {
        id,
        name,
        wins,
        losses,
        remaining,
        against,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a_vs_b: i64, b_vs_a: i64) -> Vec<TeamRecord> {
        vec![
            TeamRecord::new("A", 10, 5, 3, vec![0, a_vs_b]),
            TeamRecord::new("B", 8, 7, 3, vec![b_vs_a, 0]),
        ]
    }

    #[test]
    fn test_lookup_by_name_and_id() {
        let roster = Roster::new(pair(2, 2)).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.id_of("B").unwrap(), 1);
        assert_eq!(roster.by_name("A").unwrap().wins, 10);
        assert_eq!(roster.games_between(0, 1), 2);
        assert_eq!(roster.team(0).max_possible_wins(), 13);
        assert_eq!(roster.team(1).remaining_in_division(), 2);
    }

    #[test]
    fn test_unknown_team() {
        let roster = Roster::new(pair(1, 1)).unwrap();
        let err = roster.by_name("Z").unwrap_err();
        assert!(matches!(err, EliminationError::UnknownTeam(ref name) if name == "Z"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let records = vec![
            TeamRecord::new("A", 1, 1, 0, vec![0, 0]),
            TeamRecord::new("A", 1, 1, 0, vec![0, 0]),
        ];
        let err = Roster::new(records).unwrap_err();
        assert!(matches!(err, EliminationError::DuplicateTeam(ref name) if name == "A"));
    }

    #[test]
    fn test_asymmetric_matrix_rejected() {
        let err = Roster::new(pair(2, 3)).unwrap_err();
        assert!(matches!(err, EliminationError::InvalidSchedule(_)));
    }

    #[test]
    fn test_negative_entry_rejected() {
        let err = Roster::new(pair(-1, -1)).unwrap_err();
        assert!(matches!(err, EliminationError::InvalidSchedule(_)));
    }

    #[test]
    fn test_self_game_rejected() {
        let records = vec![
            TeamRecord::new("A", 1, 1, 2, vec![2, 0]),
            TeamRecord::new("B", 1, 1, 0, vec![0, 0]),
        ];
        let err = Roster::new(records).unwrap_err();
        assert!(matches!(err, EliminationError::InvalidSchedule(_)));
    }

    #[test]
    fn test_short_row_rejected() {
        let records = vec![
            TeamRecord::new("A", 1, 1, 0, vec![0]),
            TeamRecord::new("B", 1, 1, 0, vec![0, 0]),
        ];
        let err = Roster::new(records).unwrap_err();
        assert!(matches!(err, EliminationError::InvalidSchedule(_)));
    }

    #[test]
    fn test_win_total_overflow_rejected() {
        let records = vec![
            TeamRecord::new("A", 4_000_000_000, 0, 400_000_000, vec![0, 0]),
            TeamRecord::new("B", 10, 0, 0, vec![0, 0]),
        ];
        let err = Roster::new(records).unwrap_err();
        assert!(matches!(err, EliminationError::InvalidSchedule(_)));
    }

    #[test]
    fn test_row_sum_overflow_rejected() {
        let big = u32::MAX as i64;
        let records = vec![
            TeamRecord::new("A", 0, 0, 0, vec![0, big, big]),
            TeamRecord::new("B", 0, 0, 0, vec![big, 0, 0]),
            TeamRecord::new("C", 0, 0, 0, vec![big, 0, 0]),
        ];
        let err = Roster::new(records).unwrap_err();
        assert!(matches!(err, EliminationError::InvalidSchedule(_)));
    }

    #[test]
    fn test_largest_representable_total_accepted() {
        let records = vec![TeamRecord::new("A", u32::MAX as i64 - 5, 0, 5, vec![0])];
        let roster = Roster::new(records).unwrap();
        assert_eq!(roster.team(0).max_possible_wins(), u32::MAX);
        assert!(roster.get(1).is_none());
    }

    #[test]
    fn test_negative_wins_rejected() {
        let records = vec![TeamRecord::new("A", -3, 1, 0, vec![0])];
        let err = Roster::new(records).unwrap_err();
        assert!(matches!(err, EliminationError::InvalidSchedule(_)));
    }
}
