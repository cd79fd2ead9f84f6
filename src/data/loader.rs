use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::model::Series;
use crate::error::{AnalysisError, FileError, Result};

/// Suffix a directory entry must carry to be read as a spectrum.
pub const DEFAULT_SUFFIX: &str = ".txt";

// ---------------------------------------------------------------------------
// Aggregation output
// ---------------------------------------------------------------------------

/// A directory entry that did not contribute to the sum.
#[derive(Debug)]
pub struct FaultyFile {
    pub name: String,
    pub reason: FileError,
}

/// Outcome of reading a folder.
#[derive(Debug)]
pub struct LoadResult {
    /// Summed spectrum; `None` when no file could be read.
    pub series: Option<Series>,
    /// Number of files that were parsed and added.
    pub files_read: u32,
    /// Skipped entries, in the order they were visited.
    pub faulty_files: Vec<FaultyFile>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read every entry of `folder` and sum the spectra into one series.
///
/// * Entries whose name does not end in `suffix` are faulty.
/// * The first readable file provides the x-axis; every readable file adds
///   its second column onto a running y-axis.
/// * Files whose row count differs from the first one are faulty. No
///   interpolation is attempted.
///
/// Entries are visited in file-name order so the faulty list is stable
/// across platforms.
pub fn aggregate(folder: &Path, suffix: &str) -> Result<LoadResult> {
    if !folder.is_dir() {
        return Err(AnalysisError::NotADirectory(folder.to_path_buf()));
    }

    let mut entries: Vec<(String, PathBuf)> = fs::read_dir(folder)
        .map_err(|e| {
            warn!("Cannot list {}: {e}", folder.display());
            AnalysisError::NotADirectory(folder.to_path_buf())
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            (
                entry.file_name().to_string_lossy().into_owned(),
                entry.path(),
            )
        })
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut x_axis: Vec<f64> = Vec::new();
    let mut y_sum: Vec<f64> = Vec::new();
    let mut files_read = 0u32;
    let mut faulty_files = Vec::new();

    for (name, path) in entries {
        let parsed = read_entry(&name, &path, suffix).and_then(|(x, y)| {
            if files_read > 0 && y.len() != y_sum.len() {
                return Err(FileError::LengthMismatch {
                    expected: y_sum.len(),
                    found: y.len(),
                });
            }
            Ok((x, y))
        });

        match parsed {
            Ok((x, y)) => {
                if files_read == 0 {
                    y_sum = vec![0.0; x.len()];
                    x_axis = x;
                }
                for (acc, v) in y_sum.iter_mut().zip(&y) {
                    *acc += v;
                }
                files_read += 1;
                debug!("Added {name} ({} rows)", y.len());
            }
            Err(reason) => faulty_files.push(FaultyFile { name, reason }),
        }
    }

    let series = if files_read > 0 {
        Some(Series::new(x_axis, y_sum)?)
    } else {
        None
    };

    info!(
        "Aggregated {files_read} file(s) from {} ({} faulty)",
        folder.display(),
        faulty_files.len()
    );

    Ok(LoadResult {
        series,
        files_read,
        faulty_files,
    })
}

/// Parsed `(x, y)` columns of one file.
pub type Columns = (Vec<f64>, Vec<f64>);

fn read_entry(name: &str, path: &Path, suffix: &str) -> std::result::Result<Columns, FileError> {
    if !name.ends_with(suffix) {
        return Err(FileError::WrongSuffix(suffix.to_string()));
    }
    let text = fs::read_to_string(path)?;
    parse_two_column(&text)
}

// ---------------------------------------------------------------------------
// Two-column text parser
// ---------------------------------------------------------------------------

/// Parse whitespace-delimited `x y` rows.
///
/// Blank lines and anything after `#` are ignored. Every remaining line must
/// hold exactly two numbers.
pub fn parse_two_column(text: &str) -> std::result::Result<Columns, FileError> {
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or("");
        let tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 2 {
            return Err(FileError::ColumnCount {
                line,
                found: tokens.len(),
            });
        }
        x.push(parse_number(tokens[0], line)?);
        y.push(parse_number(tokens[1], line)?);
    }

    if x.is_empty() {
        return Err(FileError::Empty);
    }
    Ok((x, y))
}

fn parse_number(token: &str, line: usize) -> std::result::Result<f64, FileError> {
    token.parse::<f64>().map_err(|_| FileError::NotANumber {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) {
        fs::write(dir.path().join(name), body).unwrap();
    }

    #[test]
    fn test_aggregate_sums_second_column() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "a.txt", "0 1\n1 2\n2 3\n");
        write(&dir, "b.txt", "0 10\n1 20\n2 30\n");

        let result = aggregate(dir.path(), DEFAULT_SUFFIX).unwrap();
        assert_eq!(result.files_read, 2);
        assert!(result.faulty_files.is_empty());

        let series = result.series.unwrap();
        assert_eq!(series.x(), &[0.0, 1.0, 2.0]);
        assert_eq!(series.y(), &[11.0, 22.0, 33.0]);
    }

    #[test]
    fn test_aggregate_reports_faulty_entries_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "a.txt", "0 1\n1 1\n");
        write(&dir, "b.csv", "0 1\n1 1\n");
        write(&dir, "c.txt", "0 1 2\n");
        write(&dir, "d.txt", "0 one\n");
        write(&dir, "e.txt", "");
        write(&dir, "f.txt", "0 1\n1 1\n2 1\n");
        fs::create_dir(dir.path().join("g.txt")).unwrap();
        write(&dir, "h.txt", "0 5\n1 5\n");

        let result = aggregate(dir.path(), DEFAULT_SUFFIX).unwrap();
        assert_eq!(result.files_read, 2);
        let names: Vec<&str> = result.faulty_files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b.csv", "c.txt", "d.txt", "e.txt", "f.txt", "g.txt"]);
        assert!(matches!(
            result.faulty_files[4].reason,
            FileError::LengthMismatch { expected: 2, found: 3 }
        ));
        assert_eq!(result.series.unwrap().y(), &[6.0, 6.0]);
    }

    #[test]
    fn test_aggregate_only_faulty_files() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "readme.md", "hello");
        write(&dir, "bad.txt", "x y\n");

        let result = aggregate(dir.path(), DEFAULT_SUFFIX).unwrap();
        assert_eq!(result.files_read, 0);
        assert!(result.series.is_none());
        assert_eq!(result.faulty_files.len(), 2);
    }

    #[test]
    fn test_aggregate_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = aggregate(&missing, DEFAULT_SUFFIX).unwrap_err();
        assert_eq!(err, AnalysisError::NotADirectory(missing));
    }

    #[test]
    fn test_aggregate_rejects_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "a.txt", "0 1\n");
        let err = aggregate(&dir.path().join("a.txt"), DEFAULT_SUFFIX).unwrap_err();
        assert!(matches!(err, AnalysisError::NotADirectory(_)));
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let (x, y) = parse_two_column("# header\n\n  1.5\t2e3  # trailing\n2 -4\n").unwrap();
        assert_eq!(x, vec![1.5, 2.0]);
        assert_eq!(y, vec![2000.0, -4.0]);
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        assert!(matches!(
            parse_two_column("1 2\n3\n"),
            Err(FileError::ColumnCount { line: 2, found: 1 })
        ));
        assert!(matches!(
            parse_two_column("1 2\n3 abc\n"),
            Err(FileError::NotANumber { line: 2, .. })
        ));
        assert!(matches!(parse_two_column("# only comments\n"), Err(FileError::Empty)));
    }
}
