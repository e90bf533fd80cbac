use std::path::Path;

use wjiv_core::{ObservationSection, ParseOptions, detect_layout};

use crate::cli::OutputFormat;
use crate::shared::read_lines;

fn anchor_str(anchor: Option<usize>) -> String {
    anchor.map_or_else(|| "-".to_string(), |i| i.to_string())
}

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    let lines = read_lines(file)?;
    let layout = detect_layout(&lines, &ParseOptions::default())
        .map_err(|e| {
            eprintln!("Error: {}: {e}", file.display());
            1
        })?
        .value;
    let anchors = layout.anchors;

    match format {
        OutputFormat::Text => {
            println!("language: {}", layout.language);
            println!("scores: {}", anchor_str(anchors.scores));
            for section in ObservationSection::ALL {
                println!(
                    "{}: {}",
                    section.label(),
                    anchor_str(anchors.observation(section))
                );
            }
            println!("end_of_scores_line: {}", layout.end_of_scores_line);
            println!("last_line: {}", layout.last_line);
        }
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "language": layout.language,
                "anchors": anchors,
                "end_of_scores_line": layout.end_of_scores_line,
                "last_line": layout.last_line,
            });
            println!("{obj}");
        }
    }
    Ok(())
}
