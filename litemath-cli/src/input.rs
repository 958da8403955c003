//! Sample text parsing
//!
//! Accepts either a JSON array of numeric arrays or free text with one
//! sample per line.

use tracing::debug;

/// Parse pasted samples into 3-D points
///
/// JSON is tried first. Text lines are split on commas, or on whitespace
/// when the line has no comma. Tokens that are not finite numbers are
/// skipped, as are lines with fewer than two numbers. A missing z is 0 and
/// components past the third are ignored.
pub fn parse_points(text: &str) -> Vec<[f64; 3]> {
    if let Ok(rows) = serde_json::from_str::<Vec<Vec<f64>>>(text) {
        debug!(rows = rows.len(), "input parsed as JSON");
        return rows.iter().filter_map(|r| to_point(r)).collect();
    }

    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<[f64; 3]> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let fields: Vec<&str> = if line.contains(',') {
        line.split(',').collect()
    } else {
        line.split_whitespace().collect()
    };

    let nums: Vec<f64> = fields
        .iter()
        .filter_map(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect();

    if nums.len() <= 1 {
        debug!(line, "skipping line with fewer than two numbers");
        return None;
    }
    to_point(&nums)
}

fn to_point(nums: &[f64]) -> Option<[f64; 3]> {
    match nums {
        [x, y] => Some([*x, *y, 0.0]),
        [x, y, z, ..] => Some([*x, *y, *z]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        let pts = parse_points("1, 0, 0\n-1,0,0\n\n0, 1.5e-1, -2\n");
        assert_eq!(pts, vec![[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.15, -2.0]]);
    }

    #[test]
    fn test_whitespace_separated() {
        let pts = parse_points("1 2 3\n  4\t5   6  \n");
        assert_eq!(pts, vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_skips_bad_tokens_and_short_lines() {
        let pts = parse_points("x, y, z\n7\n1, abc, 2, 3\n1, 2\nnan, inf, 4, 5\n");
        assert_eq!(pts, vec![[1.0, 2.0, 3.0], [1.0, 2.0, 0.0], [4.0, 5.0, 0.0]]);
    }

    #[test]
    fn test_extra_components_ignored() {
        assert_eq!(parse_points("1,2,3,4,5"), vec![[1.0, 2.0, 3.0]]);
    }

    #[test]
    fn test_json_array() {
        let pts = parse_points("[[1, 0, 0], [0, 1], [2]]");
        assert_eq!(pts, vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    }

    #[test]
    fn test_empty() {
        assert!(parse_points("").is_empty());
        assert!(parse_points("\n\n").is_empty());
    }
}
