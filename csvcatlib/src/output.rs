//! Output path resolution and table serialization

use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::error::CsvcatError;
use crate::options::CombineOptions;
use crate::table::Table;
use crate::Result;

/// Resolve where the combined file should be written.
///
/// An absolute `output` is used unchanged. A relative one is anchored to
/// the parent directory of the first input file, so the combined file
/// lands next to the data it came from regardless of the working
/// directory. With no inputs a relative path is used as-is.
pub fn resolve_output_path(inputs: &[PathBuf], output: &Path) -> PathBuf {
    if output.is_absolute() {
        return output.to_path_buf();
    }
    match inputs.first().and_then(|first| first.parent()) {
        Some(parent) => parent.join(output),
        None => output.to_path_buf(),
    }
}

/// Serialize a table as delimited text at `path`.
///
/// Writes one record of column labels followed by one record per row,
/// then flushes. An existing file at `path` is overwritten. Any failure
/// along the way is reported as a write error naming the path.
pub fn write_table(table: &Table, path: &Path, options: &CombineOptions) -> Result<()> {
    write_records(table, path, options).map_err(|source| CsvcatError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_records(table: &Table, path: &Path, options: &CombineOptions) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_path(path)?;

    writer.write_record(&table.labels)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_table() -> Table {
        Table {
            labels: vec!["x".to_string(), "y".to_string()],
            rows: vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string(), "4".to_string()],
            ],
        }
    }

    #[test]
    fn test_resolve_relative_anchors_to_first_input() {
        let inputs = vec![
            PathBuf::from("/data/first/a.csv"),
            PathBuf::from("/data/second/b.csv"),
        ];
        let resolved = resolve_output_path(&inputs, Path::new("CombinedData.csv"));
        assert_eq!(resolved, PathBuf::from("/data/first/CombinedData.csv"));
    }

    #[test]
    fn test_resolve_absolute_is_unchanged() {
        let inputs = vec![PathBuf::from("/data/a.csv")];
        let resolved = resolve_output_path(&inputs, Path::new("/elsewhere/out.csv"));
        assert_eq!(resolved, PathBuf::from("/elsewhere/out.csv"));
    }

    #[test]
    fn test_resolve_bare_filename_input() {
        // A bare input name has an empty parent; the output stays bare too.
        let inputs = vec![PathBuf::from("a.csv")];
        let resolved = resolve_output_path(&inputs, Path::new("CombinedData.csv"));
        assert_eq!(resolved, PathBuf::from("CombinedData.csv"));
    }

    #[test]
    fn test_resolve_without_inputs() {
        let resolved = resolve_output_path(&[], Path::new("CombinedData.csv"));
        assert_eq!(resolved, PathBuf::from("CombinedData.csv"));
    }

    #[test]
    fn test_write_table_round_trips_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_table(&sample_table(), &path, &CombineOptions::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x,y\n1,2\n3,4\n");
    }

    #[test]
    fn test_write_table_custom_delimiter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let options = CombineOptions::new().delimiter(b';');
        write_table(&sample_table(), &path, &options).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x;y\n1;2\n3;4\n");
    }

    #[test]
    fn test_write_table_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents\n").unwrap();

        write_table(&sample_table(), &path, &CombineOptions::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x,y\n1,2\n3,4\n");
    }

    #[test]
    fn test_write_into_missing_directory_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.csv");

        let err = write_table(&sample_table(), &path, &CombineOptions::new()).unwrap_err();
        assert!(matches!(err, CsvcatError::Write { .. }));
        assert!(err.to_string().contains("failed to write"));
    }
}
