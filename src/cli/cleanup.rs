use std::path::PathBuf;

use clap::Args;

use crate::cli::{print_text_rows, print_tsv_rows, profile_rows, OutputFormat, ProfileRow};
use crate::parsing::case_file::load_case_file;

#[derive(Args)]
pub struct CleanupArgs {
    /// Case file (JSON) with the two unknown sequences and the candidate profiles
    #[arg(required = true)]
    pub case: PathBuf,
}

/// Execute cleanup subcommand
///
/// # Errors
///
/// Returns an error if the case file cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CleanupArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut registry = load_case_file(&args.case)?;

    registry.flag_all();
    let removed = registry.cleanup();

    if verbose {
        eprintln!(
            "Removed {removed} profiles not of interest, {} remain",
            registry.len()
        );
    }

    let rows = profile_rows(&registry);

    match format {
        OutputFormat::Text => print_text_report(&args, removed, &rows, verbose),
        OutputFormat::Json => print_json_report(&args, removed, &rows)?,
        OutputFormat::Tsv => print_tsv_rows(&rows),
    }

    Ok(())
}

fn print_text_report(args: &CleanupArgs, removed: usize, rows: &[ProfileRow], verbose: bool) {
    println!("Profile Cleanup");
    println!("{}", "=".repeat(60));

    println!("\nCase: {}", args.case.display());
    println!("  Removed: {removed}");
    println!("  Remaining: {}", rows.len());

    if rows.is_empty() {
        println!("\nNo profiles of interest.");
    } else {
        println!("\nProfiles of interest:");
        print_text_rows(rows, verbose);
    }
}

fn print_json_report(args: &CleanupArgs, removed: usize, rows: &[ProfileRow]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "case": args.case.display().to_string(),
        "removed_count": removed,
        "remaining_count": rows.len(),
        "profiles": rows,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
