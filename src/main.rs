mod cli_main;

use clap::Parser;
use cli_main::{Cli, Commands};
use pdbkit::range::grouping::group_ranges;
use pdbkit::range::interval::Interval;
use pdbkit::repo::scan::{collect_entry_paths, load_skip_list, write_path_list};
use pdbkit::text::unescape::unescape_char_refs;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    let cli = Cli::parse();

    match cli.command {
        Commands::GroupRanges {
            input,
            output,
            format,
        } => {
            let content = match std::fs::read_to_string(&input) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error reading range file {}: {}", input, e);
                    return;
                }
            };

            let tokens = content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(|l| l.parse::<Interval>());
            let partition = group_ranges(tokens);
            info!(
                "grouped {} ranges into {} rows",
                partition.interval_count(),
                partition.group_count()
            );

            let rendered = match format.as_str() {
                "json" => match serde_json::to_string_pretty(&partition) {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!("Error serializing partition: {}", e);
                        return;
                    }
                },
                "text" => {
                    let mut out = String::new();
                    for (id, grp) in partition.iter() {
                        let row: Vec<String> = grp.iter().map(|r| r.to_string()).collect();
                        out.push_str(&format!("group {}: {}\n", id, row.join(" ")));
                    }
                    out
                }
                _ => {
                    eprintln!("Unsupported format: {}", format);
                    return;
                }
            };

            if let Some(path) = output {
                if let Err(e) = std::fs::write(&path, rendered) {
                    eprintln!("Error writing output file {}: {}", path, e);
                }
            } else {
                print!("{}", rendered);
            }
        }

        Commands::MakePathList {
            repo_path,
            output,
            skip_file,
        } => {
            let skip = match skip_file {
                Some(path) => match load_skip_list(Path::new(&path)) {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!("Error reading skip file {}: {}", path, e);
                        return;
                    }
                },
                None => HashSet::new(),
            };

            let paths = collect_entry_paths(Path::new(&repo_path), &skip);
            if let Err(e) = write_path_list(Path::new(&output), &paths) {
                eprintln!("Error writing path list {}: {}", output, e);
                return;
            }
            println!("Wrote {} entry paths to {}", paths.len(), output);
        }

        Commands::Unescape { input, output } => {
            let content = match std::fs::read_to_string(&input) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error reading input file {}: {}", input, e);
                    return;
                }
            };

            let decoded = unescape_char_refs(&content);
            if let Some(path) = output {
                if let Err(e) = std::fs::write(&path, decoded) {
                    eprintln!("Error writing output file {}: {}", path, e);
                }
            } else {
                print!("{}", decoded);
            }
        }
    }
}
