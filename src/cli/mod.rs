//! Command-line interface for str-match.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **analyze**: Flag the profiles in a case file that match its unknown sequences
//! - **cleanup**: Flag profiles, then drop every profile that is not of interest
//!
//! ## Usage
//!
//! ```text
//! # Report which profiles match
//! str-match analyze case.json
//!
//! # Exclude a known person before matching
//! str-match analyze case.json --remove "Franklin, Rosalind"
//!
//! # Keep only the profiles of interest, as JSON
//! str-match cleanup case.json --format json
//! ```

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::matching::engine::{MatchingEngine, ProfileEvaluation};
use crate::registry::store::ProfileRegistry;

pub mod analyze;
pub mod cleanup;

#[derive(Parser)]
#[command(name = "str-match")]
#[command(version)]
#[command(about = "Flag genetic profiles that match two unknown sequences by STR counts")]
#[command(
    long_about = "str-match checks a set of named STR profiles against two unknown DNA sequences.\n\nA marker agrees with the sequences when its repeat unit occurs (non-overlapping) the expected number of times across both sequences combined. A profile is of interest when at least half of its markers, rounded up, agree."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Flag profiles of interest and report the results
    Analyze(analyze::AnalyzeArgs),

    /// Flag profiles of interest and remove all others
    Cleanup(cleanup::CleanupArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// One profile as shown in command output
#[derive(Debug, Serialize)]
pub struct ProfileRow {
    pub name: String,
    pub of_interest: bool,
    pub evaluation: ProfileEvaluation,
}

/// Evaluate every profile in the registry, in name order
pub fn profile_rows(registry: &ProfileRegistry) -> Vec<ProfileRow> {
    let engine = MatchingEngine::new(registry.first_sequence(), registry.second_sequence());
    registry
        .in_order_iter()
        .map(|node| ProfileRow {
            name: node.name().to_string(),
            of_interest: node.profile().is_of_interest(),
            evaluation: engine.evaluate(node.profile()),
        })
        .collect()
}

fn print_text_rows(rows: &[ProfileRow], verbose: bool) {
    for row in rows {
        let mark = if row.of_interest { "x" } else { " " };
        println!(
            "  [{mark}] {}  {}/{} markers (need {})",
            row.name,
            row.evaluation.satisfied,
            row.evaluation.total(),
            row.evaluation.threshold,
        );

        if verbose {
            for marker in &row.evaluation.markers {
                let status = if marker.is_satisfied() { "ok" } else { "--" };
                println!(
                    "        {status} {}: {} + {} = {} (expected {})",
                    marker.repeat_unit,
                    marker.in_first,
                    marker.in_second,
                    marker.observed(),
                    marker.expected,
                );
            }
        }
    }
}

fn print_tsv_rows(rows: &[ProfileRow]) {
    println!("name\tof_interest\tsatisfied\tmarkers\tthreshold");
    for row in rows {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            row.name,
            row.of_interest,
            row.evaluation.satisfied,
            row.evaluation.total(),
            row.evaluation.threshold,
        );
    }
}
