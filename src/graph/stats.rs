use super::dense::DenseGraph;

pub fn validate_dense(g: &DenseGraph) -> Result<(), String> {
    if g.n == 0 {
        return Err("matrix must have at least one vertex".into());
    }
    let expect = g.n * g.n;
    if g.w.len() != expect {
        return Err(format!(
            "weight buffer len {} != n*n = {} (n = {})",
            g.w.len(),
            expect,
            g.n
        ));
    }
    Ok(())
}

pub fn degree_summary(g: &DenseGraph) -> (usize, usize, f64) {
    let n = g.n();
    if n == 0 {
        return (0, 0, 0.0);
    }
    let mut min_d = usize::MAX;
    let mut max_d = 0usize;
    let mut sum: u64 = 0;

    for u in 0..n {
        let d = g.row(u).iter().filter(|&&w| w > 0).count();
        min_d = min_d.min(d);
        max_d = max_d.max(d);
        sum += d as u64;
    }

    (min_d, max_d, sum as f64 / n as f64)
}
