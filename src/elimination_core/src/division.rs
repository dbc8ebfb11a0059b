use std::collections::BTreeSet;
use std::path::Path;

use rayon::prelude::*;

use crate::elimination::{evaluate, Elimination};
use crate::error::Result;
use crate::roster::{Roster, Team, TeamRecord};
use crate::schedule;

/// A division with every team's elimination verdict worked out.
///
/// Verdicts are computed once, in parallel, when the division is built;
/// afterwards the division is read-only and every query is a lookup.
#[derive(Clone, Debug)]
pub struct Division {
    roster: Roster,
    verdicts: Vec<Elimination>,
}

impl Division {
    /// Validate the records and evaluate every team.
    pub fn new(records: Vec<TeamRecord>) -> Result<Self> {
        let roster = Roster::new(records)?;
        let verdicts = (0..roster.len())
            .into_par_iter()
            .map(|id| evaluate(&roster, id))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "division of {} teams: {} eliminated",
            roster.len(),
            verdicts.iter().filter(|v| v.is_eliminated()).count()
        );

        Ok(Division { roster, verdicts })
    }

    /// Load a division from a schedule file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Division::new(schedule::read_from_file(path)?)
    }

    /// Parse a division from schedule text.
    pub fn from_text(text: &str) -> Result<Self> {
        Division::new(schedule::parse(text)?)
    }

    pub fn team_count(&self) -> usize {
        self.roster.len()
    }

    /// Team names in roster order.
    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.roster.teams().iter().map(|team| team.name.as_str())
    }

    pub fn team(&self, name: &str) -> Result<&Team> {
        self.roster.by_name(name)
    }

    pub fn wins(&self, name: &str) -> Result<u32> {
        Ok(self.team(name)?.wins)
    }

    pub fn losses(&self, name: &str) -> Result<u32> {
        Ok(self.team(name)?.losses)
    }

    pub fn remaining(&self, name: &str) -> Result<u32> {
        Ok(self.team(name)?.remaining)
    }

    /// Remaining games between two teams.
    pub fn against(&self, team1: &str, team2: &str) -> Result<u32> {
        let i = self.roster.id_of(team1)?;
        let j = self.roster.id_of(team2)?;
        Ok(self.roster.games_between(i, j))
    }

    pub fn is_eliminated(&self, name: &str) -> Result<bool> {
        let id = self.roster.id_of(name)?;
        Ok(self.verdicts[id].is_eliminated())
    }

    /// Names of the rivals proving `name` is eliminated; empty if it is not.
    pub fn certificate(&self, name: &str) -> Result<BTreeSet<String>> {
        let id = self.roster.id_of(name)?;
        Ok(self.verdicts[id]
            .certificate()
            .iter()
            .map(|&rival| self.roster.team(rival).name.clone())
            .collect())
    }

    /// Raw verdicts, indexed by team id.
    pub fn verdicts(&self) -> &[Elimination] {
        &self.verdicts
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
