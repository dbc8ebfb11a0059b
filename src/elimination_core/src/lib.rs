//! Elimination Core - max-flow elimination analysis for round-robin divisions.
//!
//! Given each team's record and the remaining schedule inside the division,
//! decides which teams can no longer finish first and, for each of those,
//! names the rivals that prove it. Python bindings via PyO3 are available
//! behind the `python` feature.

pub mod constants;
pub mod division;
pub mod elimination;
pub mod error;
pub mod flow;
pub mod network;
#[cfg(feature = "python")]
pub mod python;
pub mod roster;
pub mod schedule;

pub use division::Division;
pub use elimination::{check_certificate, evaluate, exceeds_average, trivial_eliminator, Elimination};
pub use error::{EliminationError, Result};
pub use flow::{FlowNetwork, MinCut};
pub use network::EliminationNetwork;
pub use roster::{Roster, Team, TeamRecord};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn elimination_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register(m)
}
