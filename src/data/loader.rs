use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Measurement file loader
// ---------------------------------------------------------------------------

/// Why a measurement file could not become a series.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: '{token}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        token: String,
    },
}

/// Read one timing series from a harness output file.
///
/// Expected layout: one floating-point literal per line, no header.
/// Surrounding whitespace on each line is ignored; file order becomes
/// series order. Fails on the first unparseable line and never returns a
/// partial series.
pub fn load_series(path: &Path) -> Result<Vec<f64>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    text.lines()
        .enumerate()
        .map(|(i, line)| {
            let token = line.trim();
            token.parse::<f64>().map_err(|_| LoadError::Parse {
                path: path.to_path_buf(),
                line: i + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("performance_insert");
        std::fs::write(&path, contents).expect("write input");
        (dir, path)
    }

    #[test]
    fn parses_one_float_per_line_in_order() {
        let (_dir, path) = write_temp("12\n 3.5 \n-4e2\n0.125\n");
        let series = load_series(&path).expect("valid file");
        assert_eq!(series, [12.0, 3.5, -400.0, 0.125]);
    }

    #[test]
    fn bad_line_reports_location_and_token() {
        let (_dir, path) = write_temp("1.0\n2.0\nfast\n4.0\n");
        match load_series(&path) {
            Err(LoadError::Parse { line, token, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "fast");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn blank_line_is_not_a_number() {
        let (_dir, path) = write_temp("1.0\n\n3.0\n");
        assert!(matches!(
            load_series(&path),
            Err(LoadError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("performance_search");
        assert!(matches!(load_series(&path), Err(LoadError::Io { .. })));
    }
}
