use std::fs;
use std::path::Path;

use crate::domain::UniprotId;
use crate::error::AfError;

/// Reads the identifier list: one accession per line, whitespace trimmed.
/// Empty lines are kept as empty identifiers rather than filtered, so the
/// batch reports them as failures instead of silently skipping input.
pub fn read_id_list(path: &Path) -> Result<Vec<UniprotId>, AfError> {
    let content =
        fs::read_to_string(path).map_err(|_| AfError::IdListRead(path.to_path_buf()))?;
    Ok(content
        .lines()
        .map(|line| UniprotId::new(line.trim()))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn reads_trimmed_lines_keeping_empties() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "P69905").unwrap();
        writeln!(file, "  Q8WZ42  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "O95905").unwrap();

        let ids = read_id_list(file.path()).unwrap();
        let tokens: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(tokens, vec!["P69905", "Q8WZ42", "", "O95905"]);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = read_id_list(Path::new("/nonexistent/ids.txt")).unwrap_err();
        assert_matches!(err, AfError::IdListRead(_));
    }
}
