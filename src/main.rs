//! Eulerline - one-stroke puzzle level checker
//!
//! Validates a catalog of line-drawing puzzle levels and builds new ones from
//! cycle templates.
//!
//! # Usage
//!
//! ```bash
//! eulerline check levels.cat
//! eulerline check levels.cat --json > report.json
//! eulerline generate --nodes 14 --triplet 0,5,10 --triplet 1,6,11 --chord 2,9 --id 49 --name "The Colossus"
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eulerline::{
    catalog,
    error::{EulerlineError, Result},
    Template,
};
use log::debug;

/// One-stroke puzzle level checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug messages
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate every level of a catalog; exits non-zero if any issue is found
    Check {
        /// Path to the level catalog
        #[arg(value_name = "CATALOG_FILE")]
        catalog: PathBuf,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Build a level from a cycle template and print it in catalog syntax
    Generate {
        /// Number of nodes in the base cycle
        #[arg(short, long)]
        nodes: u32,

        /// Chord triplet, as three comma-separated node ids (repeatable)
        #[arg(short, long, value_name = "X,Y,Z", value_parser = parse_triplet)]
        triplet: Vec<[u32; 3]>,

        /// Extra chord turning the circuit into a path
        #[arg(short, long, value_name = "U,V", value_parser = parse_chord)]
        chord: Option<(u32, u32)>,

        /// Level id for the printed block
        #[arg(long, default_value_t = 1)]
        id: u32,

        /// Level name for the printed block
        #[arg(long, default_value = "Generated")]
        name: String,

        /// Print nodes and edges instead of template directives
        #[arg(long, default_value_t = false)]
        explicit: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    debug!("{:?}", args);

    match run(args.command) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<u8> {
    match command {
        Command::Check { catalog, json } => {
            // Parse and assemble the catalog
            let levels = catalog::load_file(&catalog)?;

            // Validate
            let report = catalog::check_catalog(&levels);

            if json {
                let text = serde_json::to_string_pretty(&report).map_err(|e| {
                    EulerlineError::ReportError {
                        message: e.to_string(),
                    }
                })?;
                println!("{}", text);
            } else {
                println!("{}", report);
            }

            Ok(report.exit_code())
        }
        Command::Generate {
            nodes,
            triplet,
            chord,
            id,
            name,
            explicit,
        } => {
            let mut template = Template::cycle(nodes)?;
            for t in triplet {
                template = template.with_triplet(t);
            }
            if let Some((u, v)) = chord {
                template = template.with_chord(u, v);
            }

            let generated = template.generate()?;
            print!(
                "{}",
                catalog::write_level(id, &name, &template, &generated, explicit)
            );
            Ok(0)
        }
    }
}

fn parse_ids<const N: usize>(s: &str) -> std::result::Result<[u32; N], String> {
    let ids = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid node id '{}': {}", part.trim(), e))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    ids.try_into()
        .map_err(|ids: Vec<u32>| format!("expected {} node ids, got {}", N, ids.len()))
}

fn parse_triplet(s: &str) -> std::result::Result<[u32; 3], String> {
    parse_ids::<3>(s)
}

fn parse_chord(s: &str) -> std::result::Result<(u32, u32), String> {
    let [u, v] = parse_ids::<2>(s)?;
    Ok((u, v))
}
