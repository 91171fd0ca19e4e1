//! Plain-text probe descriptions.
//!
//! Probe packages ship two files with one row per channel:
//!
//! - `positions`: `x,y` (a trailing comma is common)
//! - `neighbormatrix`: comma-separated channel indices
//!
//! Channel ids are line order, so rows cannot be skipped. Trailing blank
//! lines are ignored in both files. Elsewhere a blank line is an error in a
//! positions file and a channel without neighbors in a neighbor file.

use crate::error::{LocalizeError, Result};
use crate::types::{ChannelId, ElectrodePosition};

/// Parse a positions description.
///
/// # Errors
///
/// Returns `GeometryParse` with the 1-based line number of the first row
/// that does not hold exactly two finite numbers, or of a blank line
/// followed by further rows.
pub fn parse_positions(text: &str) -> Result<Vec<ElectrodePosition>> {
    let mut positions = Vec::new();
    let mut blank_line = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let fields = split_fields(line);
        if fields.is_empty() {
            blank_line.get_or_insert(line_no);
            continue;
        }
        if let Some(blank) = blank_line {
            return Err(parse_error(
                blank,
                format!("blank line before channel {}", positions.len()),
            ));
        }
        if fields.len() != 2 {
            return Err(parse_error(
                line_no,
                format!("expected 2 coordinates, found {}", fields.len()),
            ));
        }

        let x = parse_coordinate(fields[0], line_no)?;
        let y = parse_coordinate(fields[1], line_no)?;
        positions.push(ElectrodePosition::new(x, y));
    }

    Ok(positions)
}

/// Parse a neighbor-matrix description.
///
/// Channel bounds are checked later by
/// [`ProbeGeometry::with_neighbors`](super::ProbeGeometry::with_neighbors),
/// once the channel count is known.
pub fn parse_neighbors(text: &str) -> Result<Vec<Vec<ChannelId>>> {
    let mut rows: Vec<Vec<ChannelId>> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let row = split_fields(line)
            .into_iter()
            .map(|field| {
                field
                    .parse::<usize>()
                    .map(ChannelId)
                    .map_err(|_| parse_error(line_no, format!("'{field}' is not a channel index")))
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    // Editors tend to leave a final newline or two.
    while rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }

    Ok(rows)
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

fn parse_coordinate(field: &str, line: usize) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(parse_error(line, format!("'{field}' is not a finite coordinate"))),
    }
}

fn parse_error(line: usize, reason: String) -> LocalizeError {
    LocalizeError::GeometryParse { line, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_trailing_comma() {
        let positions = parse_positions("0,0,\n42,0,\n0,16,\n\n\n").unwrap();
        assert_eq!(
            positions,
            vec![
                ElectrodePosition::new(0.0, 0.0),
                ElectrodePosition::new(42.0, 0.0),
                ElectrodePosition::new(0.0, 16.0),
            ]
        );
    }

    #[test]
    fn test_positions_rejects_interior_blank_line() {
        let err = parse_positions("0,0,\n\n5,0,\n10,0,\n").unwrap_err();
        assert!(matches!(err, LocalizeError::GeometryParse { line: 2, .. }));
    }

    #[test]
    fn test_positions_rejects_bad_rows() {
        let err = parse_positions("0,0\n1,2,3\n").unwrap_err();
        assert!(matches!(err, LocalizeError::GeometryParse { line: 2, .. }));

        let err = parse_positions("0,0\nx,1\n").unwrap_err();
        assert!(matches!(err, LocalizeError::GeometryParse { line: 2, .. }));

        let err = parse_positions("inf,1\n").unwrap_err();
        assert!(matches!(err, LocalizeError::GeometryParse { line: 1, .. }));
    }

    #[test]
    fn test_neighbors_rows() {
        let rows = parse_neighbors("0,1,\n\n1,2,\n\n").unwrap();
        assert_eq!(
            rows,
            vec![
                vec![ChannelId(0), ChannelId(1)],
                vec![],
                vec![ChannelId(1), ChannelId(2)],
            ]
        );
    }

    #[test]
    fn test_neighbors_rejects_non_integer() {
        let err = parse_neighbors("0,1\n2,-3\n").unwrap_err();
        assert!(matches!(err, LocalizeError::GeometryParse { line: 2, .. }));
    }
}
