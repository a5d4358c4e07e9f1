use std::{env, fs, path::PathBuf, process::ExitCode, time::Instant};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tf_idf_pipeline::{io, Pipeline, PipelineConfig};

fn print_usage() {
    eprintln!("Usage: tf-idf-pipeline --docs DIR [--out DIR] [--workers N]");
    eprintln!("Computes TF-IDF over every non-hidden file directly under DIR.");
    eprintln!("With --out, writes one <name>.csv per document plus idf.csv;");
    eprintln!("otherwise prints term,score lines per document to stdout.");
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // ---- flag parsing ----
    // --docs DIR     : document directory (required)
    // --out DIR      : output directory for CSV files (optional)
    // --workers N    : worker thread count (0 = one per core)
    let mut args = env::args().skip(1);
    let mut docs_dir: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut workers = 0usize;
    while let Some(a) = args.next() {
        match a.as_str() {
            "--docs" => {
                let Some(v) = args.next() else {
                    error!("--docs requires a path");
                    return ExitCode::FAILURE;
                };
                docs_dir = Some(v.into());
            }
            "--out" => {
                let Some(v) = args.next() else {
                    error!("--out requires a path");
                    return ExitCode::FAILURE;
                };
                out_dir = Some(v.into());
            }
            "--workers" => {
                let parsed = args.next().and_then(|v| v.parse::<usize>().ok());
                let Some(n) = parsed else {
                    error!("--workers requires a non-negative integer");
                    return ExitCode::FAILURE;
                };
                workers = n;
            }
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => {
                // first positional arg doubles as --docs
                if docs_dir.is_none() {
                    docs_dir = Some(other.into());
                } else {
                    warn!(arg = other, "extra argument ignored");
                }
            }
        }
    }
    let Some(docs_dir) = docs_dir else {
        print_usage();
        return ExitCode::FAILURE;
    };

    // ---- enumerate and run ----
    let documents = match io::list_documents(&docs_dir) {
        Ok(d) => d,
        Err(e) => {
            error!(dir = %docs_dir.display(), "failed to list documents: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(documents = documents.len(), dir = %docs_dir.display(), "documents enumerated");

    let pipeline = Pipeline::new(PipelineConfig::new().with_worker_threads(workers));
    let run_start = Instant::now();
    let outcome = match pipeline.run(documents) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("pipeline run failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        elapsed_ms = run_start.elapsed().as_millis() as u64,
        failed = outcome.failures.len(),
        "run finished"
    );

    // ---- output ----
    if let Some(out_dir) = out_dir {
        if let Err(e) = fs::create_dir_all(&out_dir) {
            error!(dir = %out_dir.display(), "failed to create output directory: {e}");
            return ExitCode::FAILURE;
        }
        for (path, scores) in &outcome.scores {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("document");
            let dest = out_dir.join(format!("{name}.csv"));
            if let Err(e) = io::write_mapping(scores, &dest) {
                error!(dest = %dest.display(), "failed to write scores: {e}");
                return ExitCode::FAILURE;
            }
        }
        let idf_dest = out_dir.join("idf.csv");
        if let Err(e) = io::write_mapping(&outcome.idf, &idf_dest) {
            error!(dest = %idf_dest.display(), "failed to write idf: {e}");
            return ExitCode::FAILURE;
        }
        info!(dir = %out_dir.display(), files = outcome.scores.len() + 1, "csv output written");
    } else {
        for (path, scores) in &outcome.scores {
            println!("# {}", path.display());
            for (term, score) in scores {
                println!("{term},{score}");
            }
        }
    }

    ExitCode::SUCCESS
}
