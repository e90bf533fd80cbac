use std::path::{Path, PathBuf};

use wjiv_core::{LineStream, parse_batch};

use crate::cli::{OutputFormat, ParseArgs};
use crate::shared::{ProgressReporter, parse_options, read_lines};

pub fn run(files: &[PathBuf], format: &OutputFormat, args: &ParseArgs) -> Result<(), i32> {
    let options = parse_options(args);
    let progress = ProgressReporter::new(files.len());

    // Unreadable files are reported and left out of the batch.
    let mut failed = false;
    let mut readable: Vec<&Path> = Vec::new();
    let mut documents: Vec<LineStream> = Vec::new();
    for (i, file) in files.iter().enumerate() {
        progress.report(i + 1);
        match read_lines(file) {
            Ok(lines) => {
                readable.push(file.as_path());
                documents.push(lines);
            }
            Err(_) => failed = true,
        }
    }
    progress.finish();

    let outcomes = parse_batch(&documents, &options);

    for (file, outcome) in readable.iter().zip(outcomes) {
        let parsed = match outcome {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("Error: {}: {e}", file.display());
                failed = true;
                continue;
            }
        };

        match format {
            OutputFormat::Text => {
                println!("--- {} ---", file.display());
                println!("{}", parsed.value.record);
            }
            OutputFormat::Json => {
                let warnings: Vec<String> =
                    parsed.warnings.iter().map(ToString::to_string).collect();
                let obj = serde_json::json!({
                    "file": file.display().to_string(),
                    "language": parsed.value.language,
                    "record": parsed.value.record,
                    "warnings": warnings,
                });
                println!("{obj}");
            }
        }
    }

    if failed { Err(1) } else { Ok(()) }
}
