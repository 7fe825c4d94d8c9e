//! Endpoint input and report output
//! A path of `-` means stdin / stdout

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::errors::LoadError;

pub const STANDARD_STREAM: &str = "-";


/// Start and destination names, one per line
pub fn read_endpoints(input: &str) -> Result<(String, String), LoadError> {
    if input == STANDARD_STREAM {
        return parse_endpoints(io::stdin().lock(), Path::new("<stdin>"));
    }
    let file = File::open(input).map_err(|e| LoadError::io(input, e))?;
    parse_endpoints(BufReader::new(file), Path::new(input))
}

/// First two lines of `reader`, trimmed
pub fn parse_endpoints<R: BufRead>(reader: R, origin: &Path) -> Result<(String, String), LoadError> {
    let mut lines = reader.lines();
    let mut next = || -> Result<String, LoadError> {
        match lines.next() {
            Some(line) => Ok(line.map_err(|e| LoadError::io(origin, e))?.trim().to_string()),
            None => Err(LoadError::MissingEndpoints),
        }
    };

    let start = next()?;
    let destination = next()?;
    Ok((start, destination))
}

/// Write the report followed by a newline
pub fn write_report(output: &str, report: &str) -> Result<(), LoadError> {
    if output == STANDARD_STREAM {
        let mut stdout = io::stdout().lock();
        return writeln!(stdout, "{report}")
            .and_then(|_| stdout.flush())
            .map_err(|e| LoadError::io("<stdout>", e));
    }

    let mut file = File::create(output).map_err(|e| LoadError::io(output, e))?;
    writeln!(file, "{report}").map_err(|e| LoadError::io(output, e))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_endpoints() {
        let input = "  Rochester \nBuffalo\nignored\n";
        let (start, destination) = parse_endpoints(input.as_bytes(), Path::new("in.txt")).unwrap();
        assert_eq!(start, "Rochester");
        assert_eq!(destination, "Buffalo");
    }

    #[test]
    fn test_single_line_is_missing_endpoints() {
        let err = parse_endpoints("Rochester\n".as_bytes(), Path::new("in.txt")).unwrap_err();
        assert!(matches!(err, LoadError::MissingEndpoints));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "A\nB\n").unwrap();

        let endpoints = read_endpoints(input.to_str().unwrap()).unwrap();
        assert_eq!(endpoints, ("A".to_string(), "B".to_string()));

        write_report(output.to_str().unwrap(), "report").unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "report\n");
    }

    #[test]
    fn test_unwritable_output_names_path() {
        let err = write_report("/nonexistent/dir/out.txt", "report").unwrap_err();
        assert!(err.to_string().starts_with("cannot access /nonexistent/dir/out.txt: "));
    }

    #[test]
    fn test_missing_input_file() {
        let err = read_endpoints("/nonexistent/input.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().starts_with("cannot access /nonexistent/input.txt: "));
    }
}
