use std::path::PathBuf;

use clap::Args;

use crate::cli::{print_text_rows, print_tsv_rows, profile_rows, OutputFormat, ProfileRow};
use crate::parsing::case_file::load_case_file;
use crate::registry::store::ProfileRegistry;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Case file (JSON) with the two unknown sequences and the candidate profiles
    #[arg(required = true)]
    pub case: PathBuf,

    /// Remove the profile with this name ("last, first") before matching; may be repeated
    #[arg(long = "remove", value_name = "NAME")]
    pub remove: Vec<String>,
}

/// Execute analyze subcommand
///
/// # Errors
///
/// Returns an error if the case file cannot be loaded, or if a removal is
/// requested from a case file without profiles.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnalyzeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut registry = load_case_file(&args.case)?;

    if verbose {
        eprintln!(
            "Loaded {} profiles (tree height {})",
            registry.len(),
            registry.height()
        );
    }

    for name in &args.remove {
        match registry.remove(name)? {
            Some(_) if verbose => eprintln!("Removed '{name}'"),
            Some(_) => {}
            None => eprintln!("Warning: No profile named '{name}'"),
        }
    }

    registry.flag_all();

    let rows = profile_rows(&registry);
    let unflagged = registry.list_matching();

    match format {
        OutputFormat::Text => print_text_report(&args, &registry, &rows, &unflagged, verbose),
        OutputFormat::Json => print_json_report(&args, &registry, &rows, &unflagged)?,
        OutputFormat::Tsv => print_tsv_rows(&rows),
    }

    Ok(())
}

fn print_text_report(
    args: &AnalyzeArgs,
    registry: &ProfileRegistry,
    rows: &[ProfileRow],
    unflagged: &[String],
    verbose: bool,
) {
    println!("Profile Analysis");
    println!("{}", "=".repeat(60));

    println!("\nCase: {}", args.case.display());
    println!("  Profiles: {}", registry.len());
    println!("  Of interest: {}", registry.count_matching(true));
    println!("  Not of interest: {}", registry.count_matching(false));

    if !rows.is_empty() {
        println!("\nProfiles:");
        print_text_rows(rows, verbose);
    }

    if !unflagged.is_empty() {
        println!("\nNot of interest (level order):");
        for name in unflagged {
            println!("  - {name}");
        }
    }
}

fn print_json_report(
    args: &AnalyzeArgs,
    registry: &ProfileRegistry,
    rows: &[ProfileRow],
    unflagged: &[String],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "case": args.case.display().to_string(),
        "profile_count": registry.len(),
        "of_interest_count": registry.count_matching(true),
        "not_of_interest_count": registry.count_matching(false),
        "profiles": rows,
        "not_of_interest": unflagged,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
