use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graph::dense::UNREACHABLE;

/// Render the per-vertex distance report: a header line, then one
/// tab-separated line per vertex with either the finite distance or the
/// literal "unreachable".
pub fn render_report(dist: &[u64]) -> String {
    let mut out = String::from("Vertex\tDistance from source\n");
    for (v, &d) in dist.iter().enumerate() {
        if d == UNREACHABLE {
            out.push_str(&format!("{v}\tunreachable\n"));
        } else {
            out.push_str(&format!("{v}\t{d}\n"));
        }
    }
    out
}

pub fn write_report(path: &Path, dist: &[u64]) -> Result<(), String> {
    let f = File::create(path).map_err(|e| format!("create {:?}: {e}", path))?;
    let mut w = BufWriter::new(f);
    w.write_all(render_report(dist).as_bytes())
        .map_err(|e| format!("write {:?}: {e}", path))?;
    w.flush().map_err(|e| format!("write {:?}: {e}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_finite_and_unreachable_lines() {
        let out = render_report(&[0, 1, UNREACHABLE]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Vertex\tDistance from source",
                "0\t0",
                "1\t1",
                "2\tunreachable",
            ]
        );
    }

    #[test]
    fn write_fails_on_bad_path() {
        let err = write_report(Path::new("/nonexistent-dir/report.txt"), &[0]);
        assert!(err.is_err());
    }
}
