use std::path::PathBuf;

use scriptorium::convert::batch::convert_directory;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut input_dir: Option<PathBuf> = None;
    let mut output_dir: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                input_dir = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--output" => {
                output_dir = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let Some(input_dir) = input_dir else {
        eprintln!("Usage: {} --input <xml dir> [--output <json dir>]", args[0]);
        eprintln!("Example: {} --input xml_files --output json_files", args[0]);
        std::process::exit(1);
    };

    // Sibling of the input directory by default, mirroring the store layout
    // the query service expects.
    let output_dir = output_dir.unwrap_or_else(|| {
        input_dir
            .parent()
            .map(|parent| parent.join("json_files"))
            .unwrap_or_else(|| PathBuf::from("json_files"))
    });

    let summary = convert_directory(&input_dir, &output_dir)?;

    if summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
