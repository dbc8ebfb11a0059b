use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{EliminationError, Result};
use crate::roster::TeamRecord;

/// Parse a schedule in the plain-text division format.
///
/// Format: the team count `n` on the first line, then one line per team:
/// `name wins losses remaining g_0 .. g_{n-1}`, whitespace separated.
/// Blank lines are skipped. Only the shape is checked here; counts are
/// validated when the roster is built.
pub fn parse(text: &str) -> Result<Vec<TeamRecord>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or(EliminationError::Parse {
        line: 1,
        reason: "missing team count".to_string(),
    })?;
    let n: usize = number(header_line, header)?;

    let mut records = Vec::with_capacity(n);
    for (line_no, line) in lines.by_ref().take(n) {
        records.push(parse_record(line_no, line, n)?);
    }

    if records.len() < n {
        return Err(EliminationError::Parse {
            line: text.lines().count(),
            reason: format!("expected {} teams, found {}", n, records.len()),
        });
    }

    if let Some((line_no, _)) = lines.next() {
        return Err(EliminationError::Parse {
            line: line_no,
            reason: format!("trailing data after {} teams", n),
        });
    }

    Ok(records)
}

/// Read and parse a schedule file.
pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<TeamRecord>> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

fn number<T: FromStr>(line: usize, token: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    token.parse().map_err(|e| EliminationError::Parse {
        line,
        reason: format!("invalid number {:?}: {}", token, e),
    })
}

fn parse_record(line_no: usize, line: &str, n: usize) -> Result<TeamRecord> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 4 + n {
        return Err(EliminationError::Parse {
            line: line_no,
            reason: format!("expected {} fields, found {}", 4 + n, parts.len()),
        });
    }

    let against = parts[4..]
        .iter()
        .map(|token| number(line_no, token))
        .collect::<Result<Vec<i64>>>()?;

    Ok(TeamRecord::new(
        parts[0],
        number(line_no, parts[1])?,
        number(line_no, parts[2])?,
        number(line_no, parts[3])?,
        against,
    ))
}
