use anyhow::{bail, Context, Result};
use clap::Parser;
use link_recon_core::{
    find_duplicates, format_json, generate_fix, reconcile_with_options, write_report_csv,
    write_table_csv, KeyMode, MatchStatus, PortComparison, ReconcileOptions,
};
use nelink_compare::load::load_table;
use nelink_compare::report::{render_dupes, render_summary, render_text, render_warnings};

mod cli;

use cli::{Cli, Command, CompareArgs, DupesArgs, InspectArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Compare(args) => run_compare(args),
        Command::Dupes(args) => run_dupes(args),
        Command::Inspect(args) => run_inspect(args),
    }
}

fn run_compare(args: CompareArgs) -> Result<()> {
    let left = load_table(&args.file1)?;
    let right = load_table(&args.file2)?;

    let opts = ReconcileOptions {
        direction_sensitive: !args.ignore_direction,
    };
    let outcome = reconcile_with_options(&left, &right, &opts);

    if let Some(out_path) = &args.output {
        write_report_csv(&outcome.entries, out_path)
            .with_context(|| format!("failed to write report {}", out_path.display()))?;
    }

    if let Some(fix_path) = &args.fix_output {
        let fixed = generate_fix(&left, &right, &opts);
        write_table_csv(&fixed, fix_path)
            .with_context(|| format!("failed to write fixed table {}", fix_path.display()))?;
    }

    match args.format {
        OutputFormat::Json => println!("{}", format_json(&outcome)),
        OutputFormat::Text => {
            if !outcome.warnings.is_empty() {
                eprintln!("{}", render_warnings(&outcome.warnings));
            }
            if args.quiet || args.summary {
                println!("{}", render_summary(&outcome.entries));
            } else {
                println!("{}", render_text(&outcome.entries));
                println!();
                println!("{}", render_summary(&outcome.entries));
            }
        }
    }

    if args.strict {
        let unmatched = outcome
            .entries
            .iter()
            .filter(|entry| {
                entry.match_status != MatchStatus::Matched
                    || matches!(entry.port_comparison, PortComparison::PortMismatch { .. })
            })
            .count();
        if unmatched > 0 {
            bail!("strict mode failed: {unmatched} unmatched or mismatched pair(s)");
        }
    }

    Ok(())
}

fn run_dupes(args: DupesArgs) -> Result<()> {
    let table = load_table(&args.file)?;
    let groups = find_duplicates(&table, key_mode(args.ignore_direction));

    match args.format {
        OutputFormat::Text => println!("{}", render_dupes(&groups)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&groups)?),
    }

    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let table = load_table(&args.file)?;
    let duplicates = find_duplicates(&table, key_mode(args.ignore_direction));

    let report = InspectReport {
        table: table.name.clone(),
        records: table.len(),
        passthrough_columns: table.extra_columns.clone(),
        absent_source_ports: table
            .records
            .iter()
            .filter(|r| r.source_port.is_absent())
            .count(),
        absent_destination_ports: table
            .records
            .iter()
            .filter(|r| r.destination_port.is_absent())
            .count(),
        duplicates,
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("table={} records={}", report.table, report.records);
            println!(
                "passthrough_columns={}",
                if report.passthrough_columns.is_empty() {
                    "none".to_string()
                } else {
                    report.passthrough_columns.join(", ")
                }
            );
            println!(
                "absent_source_ports={} absent_destination_ports={}",
                report.absent_source_ports, report.absent_destination_ports
            );
            if report.duplicates.is_empty() {
                println!("duplicate_keys=none");
            } else {
                println!("duplicate_keys={}", report.duplicates.len());
                println!("{}", render_dupes(&report.duplicates));
            }
        }
    }

    Ok(())
}

fn key_mode(ignore_direction: bool) -> KeyMode {
    if ignore_direction {
        KeyMode::Normalized
    } else {
        KeyMode::Directional
    }
}

#[derive(Debug, serde::Serialize)]
struct InspectReport {
    table: String,
    records: usize,
    passthrough_columns: Vec<String>,
    absent_source_ports: usize,
    absent_destination_ports: usize,
    duplicates: Vec<link_recon_core::DuplicateGroup>,
}
