//! Input helpers shared by CLI commands.

use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::path::Path;

use crate::repo::location_from_path;

/// Expand CLI arguments into locations.
///
/// A single `-` reads arguments from stdin instead. With `as_paths`, each
/// argument is a filesystem path converted to a `file://` location.
pub fn collect_locations(args: &[String], as_paths: bool) -> Result<Vec<String>> {
    let args = if args.len() == 1 && args[0] == "-" {
        read_lines(io::stdin().lock())?
    } else {
        args.to_vec()
    };

    if !as_paths {
        return Ok(args);
    }

    args.iter()
        .map(|arg| {
            location_from_path(Path::new(arg))
                .with_context(|| format!("Failed to resolve path '{arg}'"))
        })
        .collect()
}

/// Read non-empty trimmed lines.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines_skips_blank() {
        let input = "file:///repo/a.md\n\n  file:///repo/b.md  \n";
        let lines = read_lines(input.as_bytes()).unwrap();
        assert_eq!(lines, ["file:///repo/a.md", "file:///repo/b.md"]);
    }

    #[test]
    fn test_collect_locations_passthrough() {
        let args = vec!["file:///repo/a.md".to_string(), "oops".to_string()];
        assert_eq!(collect_locations(&args, false).unwrap(), args);
    }

    #[test]
    fn test_collect_locations_from_paths() {
        let args = vec!["/repo/a.md".to_string()];
        assert_eq!(
            collect_locations(&args, true).unwrap(),
            ["file:///repo/a.md"]
        );
    }
}
