use pyo3::create_exception;
use pyo3::exceptions::{PyIOError, PyKeyError, PyValueError};
use pyo3::prelude::*;

use crate::division::Division;
use crate::error::EliminationError;
use crate::roster::TeamRecord;

create_exception!(elimination_core, UnknownTeamError, PyKeyError);
create_exception!(elimination_core, DuplicateTeamError, PyValueError);
create_exception!(elimination_core, InvalidScheduleError, PyValueError);
create_exception!(elimination_core, SolverInvariantError, PyValueError);

impl From<EliminationError> for PyErr {
    fn from(err: EliminationError) -> PyErr {
        let msg = err.to_string();
        match err {
            EliminationError::UnknownTeam(_) => UnknownTeamError::new_err(msg),
            EliminationError::DuplicateTeam(_) => DuplicateTeamError::new_err(msg),
            EliminationError::InvalidSchedule(_) => InvalidScheduleError::new_err(msg),
            EliminationError::SolverInvariant(_) => SolverInvariantError::new_err(msg),
            EliminationError::Io(_) => PyIOError::new_err(msg),
            EliminationError::Parse { .. } => PyValueError::new_err(msg),
        }
    }
}

/// Python view of a [`Division`].
#[pyclass(name = "Division", frozen)]
pub struct PyDivision {
    inner: Division,
}

#[pymethods]
impl PyDivision {
    /// Build a division from `(name, wins, losses, remaining, against)` tuples.
    #[new]
    pub fn new(teams: Vec<(String, i64, i64, i64, Vec<i64>)>) -> PyResult<Self> {
        let records = teams
            .into_iter()
            .map(|(name, w, l, r, against)| TeamRecord::new(name, w, l, r, against))
            .collect();
        Ok(PyDivision {
            inner: Division::new(records)?,
        })
    }

    /// Load a division from a schedule file.
    #[staticmethod]
    pub fn from_file(filepath: &str) -> PyResult<Self> {
        Ok(PyDivision {
            inner: Division::from_file(filepath)?,
        })
    }

    pub fn number_of_teams(&self) -> usize {
        self.inner.team_count()
    }

    pub fn teams(&self) -> Vec<String> {
        self.inner.team_names().map(str::to_string).collect()
    }

    pub fn wins(&self, team: &str) -> PyResult<u32> {
        Ok(self.inner.wins(team)?)
    }

    pub fn losses(&self, team: &str) -> PyResult<u32> {
        Ok(self.inner.losses(team)?)
    }

    pub fn remaining(&self, team: &str) -> PyResult<u32> {
        Ok(self.inner.remaining(team)?)
    }

    pub fn against(&self, team1: &str, team2: &str) -> PyResult<u32> {
        Ok(self.inner.against(team1, team2)?)
    }

    pub fn is_eliminated(&self, team: &str) -> PyResult<bool> {
        Ok(self.inner.is_eliminated(team)?)
    }

    /// Rivals proving elimination, sorted; empty if the team is alive.
    pub fn certificate_of_elimination(&self, team: &str) -> PyResult<Vec<String>> {
        Ok(self.inner.certificate(team)?.into_iter().collect())
    }

    fn __len__(&self) -> usize {
        self.inner.team_count()
    }

    fn __repr__(&self) -> String {
        let eliminated = self.inner.verdicts().iter().filter(|v| v.is_eliminated()).count();
        format!(
            "Division({} teams, {} eliminated)",
            self.inner.team_count(),
            eliminated
        )
    }
}

/// Register classes and exception types on the Python module.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add_class::<PyDivision>()?;
    m.add("UnknownTeamError", py.get_type_bound::<UnknownTeamError>())?;
    m.add("DuplicateTeamError", py.get_type_bound::<DuplicateTeamError>())?;
    m.add("InvalidScheduleError", py.get_type_bound::<InvalidScheduleError>())?;
    m.add("SolverInvariantError", py.get_type_bound::<SolverInvariantError>())?;
    Ok(())
}
