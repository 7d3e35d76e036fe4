//! `tabula ingest` — batch parse and align a corpus directory.
//!
//! Artifacts are independent, so the batch fans out over a fixed worker
//! pool pulling from a shared index. Per-artifact failures are collected
//! and reported at the end rather than aborting the run.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tabula_align::{run, AlignConfig};
use tabula_parser::parse_artifact;

use crate::align::AlignOutput;
use crate::io::{load_config, load_translations, write_json};
use crate::CliError;

#[derive(Debug, Default)]
struct BatchStats {
    parsed: usize,
    aligned: usize,
    failures: Vec<String>,
}

pub fn cmd_ingest(
    input_dir: PathBuf,
    out_dir: PathBuf,
    translations_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    workers: Option<usize>,
) -> Result<(), CliError> {
    let config = load_config(config.as_deref())?;
    let jobs = collect_jobs(&input_dir)?;
    if jobs.is_empty() {
        return Err(CliError::args(format!(
            "no .atf or .txt files under {}",
            input_dir.display()
        )));
    }
    std::fs::create_dir_all(&out_dir)
        .map_err(|e| CliError::io(format!("cannot create {}: {e}", out_dir.display())))?;

    let workers = workers
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
        .clamp(1, jobs.len());

    let next = Mutex::new(0usize);
    let stats = Mutex::new(BatchStats::default());

    std::thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| loop {
                let index = {
                    let mut guard = next.lock().unwrap();
                    let i = *guard;
                    *guard += 1;
                    i
                };
                let Some(job) = jobs.get(index) else { break };
                match process_one(job, &out_dir, translations_dir.as_deref(), &config) {
                    Ok(aligned) => {
                        let mut s = stats.lock().unwrap();
                        s.parsed += 1;
                        if aligned {
                            s.aligned += 1;
                        }
                    }
                    Err(e) => {
                        let mut s = stats.lock().unwrap();
                        s.failures.push(format!("{}: {}", job.display(), e.message));
                    }
                }
            });
        }
    });

    let stats = stats.into_inner().unwrap();
    for failure in &stats.failures {
        eprintln!("error: {failure}");
    }
    eprintln!(
        "ingested {} artifacts ({} aligned), {} failures",
        stats.parsed,
        stats.aligned,
        stats.failures.len(),
    );
    if stats.failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::io(format!(
            "{} of {} artifacts failed",
            stats.failures.len(),
            jobs.len()
        )))
    }
}

/// Transliteration inputs, sorted so worker scheduling never changes which
/// artifact gets which identifier-collision diagnostics.
fn collect_jobs(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", dir.display())))?;
    let mut jobs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("atf") | Some("txt")
            )
        })
        .collect();
    jobs.sort();
    Ok(jobs)
}

/// Parse one artifact, write its lines, and align its translations when a
/// sibling CSV exists. Returns whether an alignment was produced.
fn process_one(
    job: &Path,
    out_dir: &Path,
    translations_dir: Option<&Path>,
    config: &AlignConfig,
) -> Result<bool, CliError> {
    let text = std::fs::read_to_string(job)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", job.display())))?;
    let stem = job
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".into());
    let parsed = parse_artifact(&stem, &text);

    write_json(
        &out_dir.join(format!("{}.lines.json", parsed.artifact_id)),
        &parsed,
    )?;

    let Some(translations_dir) = translations_dir else {
        return Ok(false);
    };
    let csv_path = translations_dir.join(format!("{stem}.csv"));
    if !csv_path.exists() {
        return Ok(false);
    }

    let records = load_translations(&csv_path)?;
    let result = run(config, &parsed.lines, records);
    let out = AlignOutput {
        artifact_id: parsed.artifact_id,
        records: result.records,
        summary: result.summary,
    };
    write_json(
        &out_dir.join(format!("{}.outcomes.json", out.artifact_id)),
        &out,
    )?;
    Ok(true)
}
