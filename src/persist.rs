//! Save/load of a game in progress.
//!
//! The persisted form is a small pretty-printed JSON document holding the 16
//! grid values (row-major) and the score. Writes go through a single
//! [`fs::write`] of the fully serialized document, so a failed save never
//! leaves a truncated file where a good one was.

use crate::error::PersistResult;
use crate::game::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the save inside the data directory.
const SAVE_FILE: &str = "savegame.json";

/// Subdirectory of the user's home that holds game data.
const DATA_SUBDIR: &str = ".twenty48";

/// The serializable pair of board grid and score.
///
/// Schema (JSON): `{ "cells": [[u32; 4]; 4], "score": u64 }`. There is no
/// format versioning; a file that does not match is reported as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// Grid values in row-major order; 0 means empty.
    pub cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
    /// Score at the time of saving.
    pub score: u64,
}

/// Write a saved game to `path`.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn save(path: &Path, saved: &SavedGame) -> PersistResult<()> {
    let json = serde_json::to_string_pretty(saved)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a saved game from `path`.
///
/// Returns `Ok(None)` if no save exists there; a missing file is not an
/// error.
///
/// # Errors
///
/// Returns an error if the file cannot be read for any other reason, or
/// exists but does not parse as a saved game.
pub fn load(path: &Path) -> PersistResult<Option<SavedGame>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let saved = serde_json::from_str(&contents)?;
    Ok(Some(saved))
}

/// Path of the default save file (`~/.twenty48/savegame.json`).
///
/// Creates the data directory if it doesn't exist.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined or directory
/// creation fails.
pub fn default_save_path() -> io::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| io::Error::new(io::ErrorKind::NotFound, "cannot determine home directory"))?;

    let data_dir = Path::new(&home).join(DATA_SUBDIR);
    fs::create_dir_all(&data_dir)?;
    Ok(data_dir.join(SAVE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersistError;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_roundtrip() {
        let saved = SavedGame {
            cells: [
                [2, 4, 8, 16],
                [0, 0, 2, 0],
                [32, 0, 0, 64],
                [0, 128, 256, 0],
            ],
            score: 388,
        };

        let dir = tempdir().unwrap();
        let path = dir.path().join(SAVE_FILE);

        save(&path, &saved).unwrap();
        let loaded = load(&path).unwrap().unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_roundtrip_all_zero_board() {
        let saved = SavedGame {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
        };

        let dir = tempdir().unwrap();
        let path = dir.path().join(SAVE_FILE);

        save(&path, &saved).unwrap();
        assert_eq!(load(&path).unwrap(), Some(saved));
    }

    #[test]
    fn test_roundtrip_full_board() {
        let saved = SavedGame {
            cells: [
                [2, 4, 8, 16],
                [32, 64, 128, 256],
                [512, 1024, 2048, 4096],
                [8192, 16384, 32768, 65536],
            ],
            score: u64::from(u32::MAX),
        };

        let dir = tempdir().unwrap();
        let path = dir.path().join(SAVE_FILE);

        save(&path, &saved).unwrap();
        assert_eq!(load(&path).unwrap(), Some(saved));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nothing-here.json");
        assert!(load(&path).unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SAVE_FILE);
        fs::write(&path, "{ not json ").unwrap();

        match load(&path) {
            Err(PersistError::Malformed(_)) => {}
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn test_save_overwrites_previous_save() {
        let first = SavedGame {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
        };
        let mut second = first;
        second.cells[2][1] = 8;
        second.score = 16;

        let dir = tempdir().unwrap();
        let path = dir.path().join(SAVE_FILE);

        save(&path, &first).unwrap();
        save(&path, &second).unwrap();
        assert_eq!(load(&path).unwrap(), Some(second));
    }
}
