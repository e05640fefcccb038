use super::dense::DenseGraph;

/// Parse a bracketed matrix literal like `[[0,4,0],[4,0,1],[0,1,0]]`.
///
/// The literal must hold n row groups of exactly n non-negative integers
/// each. Anything else (unbalanced brackets, ragged rows, non-integer or
/// negative tokens) is a fatal input error.
pub fn parse_matrix(input: &str) -> Result<DenseGraph, String> {
    let s = input.trim();
    let inner = s
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .ok_or("matrix literal must be wrapped in [ ]")?;

    let mut rows: Vec<Vec<u32>> = Vec::new();
    let mut rest = inner.trim_start();

    while !rest.is_empty() {
        rest = rest
            .strip_prefix('[')
            .ok_or_else(|| format!("expected '[' to open row {}", rows.len()))?;
        let end = rest
            .find(']')
            .ok_or_else(|| format!("unbalanced brackets in row {}", rows.len()))?;

        let mut row = Vec::new();
        for tok in rest[..end].split(',') {
            let tok = tok.trim();
            let v: u32 = tok.parse().map_err(|_| {
                format!("invalid weight {:?} in row {}", tok, rows.len())
            })?;
            row.push(v);
        }
        rows.push(row);

        rest = rest[end + 1..].trim_start();
        if let Some(r) = rest.strip_prefix(',') {
            rest = r.trim_start();
            if rest.is_empty() {
                return Err("trailing comma after last row".into());
            }
        } else if let Some(c) = rest.chars().next() {
            return Err(format!("unexpected {:?} between rows", c));
        }
    }

    let n = rows.len();
    if n == 0 {
        return Err("matrix must have at least one row".into());
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(format!(
                "row {} has {} entries, expected {} (matrix must be square)",
                i,
                row.len(),
                n
            ));
        }
    }

    let mut w = Vec::with_capacity(n * n);
    for row in rows {
        w.extend_from_slice(&row);
    }
    Ok(DenseGraph { n, w })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triangle_matrix() {
        let g = parse_matrix("[[0,4,1],[4,0,2],[1,2,0]]").unwrap();
        assert_eq!(g.n(), 3);
        assert_eq!(g.weight(0, 1), 4);
        assert_eq!(g.weight(0, 2), 1);
        assert_eq!(g.weight(2, 1), 2);
    }

    #[test]
    fn parses_single_vertex() {
        let g = parse_matrix("[[0]]").unwrap();
        assert_eq!(g.n(), 1);
        assert_eq!(g.weight(0, 0), 0);
    }

    #[test]
    fn tolerates_whitespace() {
        let g = parse_matrix(" [ [0, 1] , [1, 0] ] ").unwrap();
        assert_eq!(g.n(), 2);
        assert_eq!(g.weight(0, 1), 1);
    }

    #[test]
    fn rejects_missing_outer_brackets() {
        assert!(parse_matrix("[0,1],[1,0]").is_err());
    }

    #[test]
    fn rejects_unbalanced_row_bracket() {
        assert!(parse_matrix("[[0,1],[1,0]").is_err());
        assert!(parse_matrix("[[0,1,[1,0]]").is_err());
    }

    #[test]
    fn rejects_non_integer_token() {
        assert!(parse_matrix("[[0,x],[1,0]]").is_err());
    }

    #[test]
    fn rejects_negative_weight() {
        assert!(parse_matrix("[[0,-3],[3,0]]").is_err());
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(parse_matrix("[[0,1,2],[1,0],[2,0,0]]").is_err());
    }

    #[test]
    fn rejects_non_square_shape() {
        // 2 rows of 3 entries: rows consistent with each other, not with n
        assert!(parse_matrix("[[0,1,2],[1,0,3]]").is_err());
    }

    #[test]
    fn rejects_empty_literal() {
        assert!(parse_matrix("").is_err());
        assert!(parse_matrix("[]").is_err());
    }
}
