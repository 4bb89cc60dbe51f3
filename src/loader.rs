use crate::trip::Trip;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open trips file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse trips file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("trips file '{}' contains no trips", .path.display())]
    Empty { path: PathBuf },
}

/// Read the whole trips file as a JSON array.
///
/// The file handle is dropped before returning.
pub fn load_trips(path: &Path) -> Result<Vec<Trip>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let trips: Vec<Trip> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if trips.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(trips)
}
