//! Check command implementation.

use crate::decode::DecodeRequest;
use crate::input::InputFile;
use crate::utils::{create_progress_bar, format_bits};
use log::info;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

fn check_file(path: &Path, request: &DecodeRequest) -> Result<u64, String> {
    let input = InputFile::open(path).map_err(|e| e.to_string())?;
    request
        .decode(input.bytes())
        .map(|dissection| dissection.consumed_bits)
        .map_err(|e| e.to_string())
}

pub fn cmd_check(
    files: &[PathBuf],
    request: &DecodeRequest,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_progress_bar(files.len() as u64, progress);

    let results: Vec<(&PathBuf, Result<u64, String>)> = files
        .par_iter()
        .map(|path| {
            let outcome = check_file(path, request);
            pb.inc(1);
            (path, outcome)
        })
        .collect();

    pb.finish_and_clear();

    println!(
        "Checking {} files ({}, {})",
        files.len(),
        request.structure.root_name(),
        request.version
    );

    let mut error_count = 0usize;
    for (path, outcome) in &results {
        match outcome {
            Ok(bits) => println!("  OK: {} - {}", path.display(), format_bits(*bits)),
            Err(e) => {
                error_count += 1;
                println!("  FAILED: {} - {}", path.display(), e);
            }
        }
    }

    let ok_count = results.len() - error_count;
    println!();
    println!("Files checked: {}", results.len());
    println!("  OK: {}", ok_count);
    println!("  Failed: {}", error_count);
    info!("check finished: {} ok, {} failed", ok_count, error_count);

    if error_count > 0 {
        return Err(format!("{} of {} files failed to decode", error_count, results.len()).into());
    }

    Ok(())
}
