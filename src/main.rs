use std::path::PathBuf;
use std::thread;

use clap::Parser;

use dense_sssp::{dijkstra_sssp_par, parse_matrix, validate_dense, write_report};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// adjacency matrix literal, e.g. [[0,4,0],[4,0,1],[0,1,0]]
    matrix: String,

    /// source vertex index
    source: usize,

    /// output report path
    output: PathBuf,

    /// worker threads per phase (default: available parallelism)
    #[arg(short = 't', long = "threads")]
    threads: Option<usize>,
}

fn default_threads() -> usize {
    thread::available_parallelism().map(|p| p.get()).unwrap_or(1)
}

fn run(args: &Args) -> Result<(), String> {
    let g = parse_matrix(&args.matrix)?;
    validate_dense(&g)?;

    if args.source >= g.n() {
        return Err(format!(
            "source vertex {} out of range (graph has {} vertices)",
            args.source,
            g.n()
        ));
    }

    let threads = args.threads.unwrap_or_else(default_threads);
    let dist = dijkstra_sssp_par(&g, args.source, threads);

    write_report(&args.output, &dist)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
