//! Terminal output for conversion runs

use colored::*;
use nexcraft_core::{ConversionReport, ConversionSummary};

pub fn print_header(title: &str) {
    println!("\n╭───────────────────────────────────────────────────────────╮");
    println!("│{}│", format!("{title:^59}").bright_cyan().bold());
    println!("╰───────────────────────────────────────────────────────────╯\n");
}

/// Print the run summary and, when present, the identifier usage report
pub fn print_report(report: &ConversionReport, assets_copied: usize) {
    print_summary(&report.summary, assets_copied, report.warning_count());

    if !report.identifier_report.is_empty() {
        println!("\n{}", "Custom model data:".bold());
        for line in report.identifier_report.lines() {
            println!("  {}", line);
        }
    }
}

fn print_summary(summary: &ConversionSummary, assets_copied: usize, warnings: usize) {
    println!("\n{}", "Summary:".bold());
    println!(
        "  Files converted: {}/{}",
        summary.files_converted, summary.files_found
    );
    if summary.files_skipped > 0 {
        println!(
            "  Files skipped: {}",
            summary.files_skipped.to_string().yellow()
        );
    }
    println!(
        "  Items converted: {}",
        summary.items_converted.to_string().green()
    );
    if summary.items_unrendered > 0 {
        println!("  Items without a model: {}", summary.items_unrendered);
    }
    if summary.duplicates_dropped > 0 {
        println!(
            "  Duplicates dropped: {}",
            summary.duplicates_dropped.to_string().yellow()
        );
    }
    if summary.collisions > 0 {
        println!(
            "  Identifier collisions: {}",
            summary.collisions.to_string().yellow()
        );
    }
    println!("  Assets copied: {}", assets_copied);
    println!("  Documents written: {}", summary.documents_written);

    if summary.has_errors() {
        println!(
            "  Write errors: {}",
            summary.write_errors.to_string().red()
        );
    }
    if warnings > 0 {
        println!("  Warnings: {}", warnings.to_string().yellow());
    }

    if summary.has_errors() {
        println!("\n{} Conversion finished with errors", "⚠️".yellow());
    } else {
        println!("\n{} Conversion complete", "✅".green());
    }
}
