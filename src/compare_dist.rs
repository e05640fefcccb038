/// Compare two SSSP distance vectors, printing the first few mismatches and
/// a summary line. Returns the mismatch count so callers can pass/fail on it.
pub fn compare_sssp_u64(a: &[u64], b: &[u64]) -> Result<usize, String> {
    if a.len() != b.len() {
        return Err(format!("SSSP len mismatch: a={} b={}", a.len(), b.len()));
    }

    let mut mismatches = 0usize;
    for i in 0..a.len() {
        if a[i] != b[i] {
            mismatches += 1;
            if mismatches <= 10 {
                eprintln!("[SSSP mismatch] idx={i} a={} b={}", a[i], b[i]);
            }
        }
    }

    if mismatches == 0 {
        println!("[SSSP compare] OK: all {} entries match", a.len());
    } else {
        println!("[SSSP compare] mismatches = {mismatches} / {}", a.len());
    }
    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_vectors_have_no_mismatches() {
        assert_eq!(compare_sssp_u64(&[0, 3, 1], &[0, 3, 1]).unwrap(), 0);
    }

    #[test]
    fn counts_differing_entries() {
        assert_eq!(compare_sssp_u64(&[0, 3, 1], &[0, 4, 2]).unwrap(), 2);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert!(compare_sssp_u64(&[0], &[0, 1]).is_err());
    }
}
