//! File I/O for cube states and solutions.
//!
//! A cube state file is a JSON object mapping each face letter to three
//! rows of single-character color codes:
//!
//! ```json
//! { "U": [["W","W","W"], ["W","W","W"], ["W","W","W"]], "D": ..., ... }
//! ```
//!
//! A solution is saved twice: as JSON (`{"solution": [...], "sequence": "..."}`)
//! and, next to it, as a plain text report with the starting net.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::grid::{CubeState, FaceGrid, InputError};
use crate::{Solution, ALREADY_SOLVED};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Input(#[from] InputError),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> PersistenceError + '_ {
    move |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Parses a cube state from its JSON form.
pub fn state_from_json(json: &str) -> Result<CubeState, PersistenceError> {
    let grid: FaceGrid = serde_json::from_str(json)?;
    Ok(CubeState::from_grid(&grid)?)
}

pub fn state_to_json(state: &CubeState) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(&state.to_grid())?)
}

pub fn load_state(path: &Path) -> Result<CubeState, PersistenceError> {
    let json = std::fs::read_to_string(path).map_err(io_error(path))?;
    state_from_json(&json)
}

pub fn save_state(path: &Path, state: &CubeState) -> Result<(), PersistenceError> {
    let json = state_to_json(state)?;
    std::fs::write(path, json).map_err(io_error(path))?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Saves a solution as JSON at `path` and as a text report beside it.
pub fn save_solution(
    path: &Path,
    start: &CubeState,
    solution: &Solution,
) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(solution)?;
    std::fs::write(path, json).map_err(io_error(path))?;

    let report_path = path.with_extension("txt");
    save_report(&report_path, start, solution).map_err(io_error(&report_path))?;
    info!("wrote {} and {}", path.display(), report_path.display());
    Ok(())
}

/// Saves a solution in human-readable text format.
fn save_report(path: &Path, start: &CubeState, solution: &Solution) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Starting cube:")?;
    write!(file, "{}", start.format_net())?;
    writeln!(file)?;
    if solution.is_empty() {
        writeln!(file, "{ALREADY_SOLVED}")?;
    } else {
        writeln!(file, "Solution ({} moves):", solution.len())?;
        writeln!(file, "{solution}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_algorithm;
    use crate::pieces::Face;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("layerwise-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_state_json_roundtrip() {
        let mut state = CubeState::solved();
        state.apply_all(&parse_algorithm("R U F'").unwrap());

        let json = state_to_json(&state).unwrap();
        assert!(json.contains("\"U\""));
        assert_eq!(state_from_json(&json).unwrap(), state);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            state_from_json("{\"U\": "),
            Err(PersistenceError::Json(_))
        ));
        assert!(matches!(
            state_from_json("{\"Q\": []}"),
            Err(PersistenceError::Json(_))
        ));

        let mut grid = CubeState::solved().to_grid();
        grid.remove(&Face::R);
        let json = serde_json::to_string(&grid).unwrap();
        assert!(matches!(
            state_from_json(&json),
            Err(PersistenceError::Input(InputError::MissingFace(Face::R)))
        ));
    }

    #[test]
    fn test_save_and_load_files() {
        let mut state = CubeState::solved();
        state.apply_all(&parse_algorithm("L2 D'").unwrap());

        let state_path = temp_path("state.json");
        save_state(&state_path, &state).unwrap();
        assert_eq!(load_state(&state_path).unwrap(), state);

        let solution = Solution::new(parse_algorithm("D L2").unwrap());
        let solution_path = temp_path("solution.json");
        save_solution(&solution_path, &state, &solution).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&solution_path).unwrap()).unwrap();
        assert_eq!(saved["sequence"], "D L2");
        assert_eq!(saved["solution"][1], "L2");

        let report = std::fs::read_to_string(solution_path.with_extension("txt")).unwrap();
        assert!(report.contains("Solution (2 moves):\nD L2"));

        for path in [state_path, solution_path.clone(), solution_path.with_extension("txt")] {
            let _ = std::fs::remove_file(path);
        }
    }

    #[test]
    fn test_empty_solution_reads_as_already_solved() {
        let state = CubeState::solved();
        let path = temp_path("solved.json");
        save_solution(&path, &state, &Solution::default()).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["sequence"], ALREADY_SOLVED);
        assert_eq!(saved["solution"].as_array().map(Vec::len), Some(0));

        let report = std::fs::read_to_string(path.with_extension("txt")).unwrap();
        assert!(report.ends_with("Cube is already solved!\n"));

        for path in [path.clone(), path.with_extension("txt")] {
            let _ = std::fs::remove_file(path);
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = temp_path("does-not-exist.json");
        let err = load_state(&path).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
