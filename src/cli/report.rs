//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow langsync to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, CommentSummary, InitSummary, MergeSummary, SyncSummary,
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::{MergeStats, SyncOutcome},
    pipeline::UpdateReport,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Sync(summary) => print_sync(summary, writer),
        CommandSummary::Comment(summary) => print_comment(summary, writer),
        CommandSummary::Merge(summary) => print_merge(summary, writer),
        CommandSummary::Unmerge(summary) => {
            let _ = write!(writer, "{}", summary.rendered);
        }
        CommandSummary::Update(report) => print_update(report, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_sync<W: Write>(summary: &SyncSummary, writer: &mut W) {
    let path = summary.path.display();
    let _ = match summary.outcome {
        SyncOutcome::Skipped => writeln!(
            writer,
            "{} {} is a merged file, skipped",
            "Skipped".yellow().bold(),
            path
        ),
        SyncOutcome::Synced { added: 0 } => writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} is up to date", path).green()
        ),
        SyncOutcome::Synced { added } => writeln!(
            writer,
            "{} {} key(s) to {}",
            "Added".green().bold(),
            added,
            path
        ),
    };
}

fn print_comment<W: Write>(summary: &CommentSummary, writer: &mut W) {
    let changed: Vec<_> = summary.files.iter().filter(|f| f.annotated > 0).collect();
    for record in &changed {
        let _ = writeln!(
            writer,
            "  {} {} ({} line(s))",
            "-->".blue(),
            record.path.display(),
            record.annotated
        );
    }
    let lines: usize = changed.iter().map(|r| r.annotated).sum();
    let _ = writeln!(
        writer,
        "{} {} line(s) in {} file(s) (checked {} file(s)).",
        "Commented".green().bold(),
        lines,
        changed.len(),
        summary.files.len()
    );
}

fn print_merge<W: Write>(summary: &MergeSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} and {} into {}",
        "Merged".green().bold(),
        summary.first.display(),
        summary.second.display(),
        summary.output.display()
    );
    print_merge_stats(&summary.stats, writer);
}

fn print_merge_stats<W: Write>(stats: &MergeStats, writer: &mut W) {
    let _ = writeln!(writer, "  - shared: {} key(s)", stats.promoted);
    if stats.reverted > 0 {
        let _ = writeln!(
            writer,
            "  - reverted: {} key(s) no longer shared",
            stats.reverted
        );
    }
    if stats.unresolved > 0 {
        let _ = writeln!(
            writer,
            "  - unresolved: {} key(s) missing or empty in a variant",
            stats.unresolved
        );
    }
}

fn print_update<W: Write>(report: &UpdateReport, writer: &mut W) {
    if !report.synced.is_empty() {
        let skipped = report
            .synced
            .iter()
            .filter(|r| r.outcome == SyncOutcome::Skipped)
            .count();
        let _ = writeln!(
            writer,
            "{} {} file(s): {} key(s) added, {} merged file(s) skipped",
            "Synced".green().bold(),
            report.synced.len() - skipped,
            report.keys_added(),
            skipped
        );
    }

    for record in &report.merged {
        let _ = writeln!(
            writer,
            "{} {} into {}",
            "Merged".green().bold(),
            record.job.base,
            record.job.parent.display()
        );
        print_merge_stats(&record.stats, writer);
    }

    for group in &report.skipped_groups {
        let _ = writeln!(
            writer,
            "{} {}: {} variant(s) found, merging needs exactly 2",
            "warning:".bold().yellow(),
            group.base,
            group.variants.len()
        );
        for variant in &group.variants {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), variant.display());
        }
    }

    if !report.annotated.is_empty() {
        let changed = report.annotated.iter().filter(|r| r.annotated > 0).count();
        let _ = writeln!(
            writer,
            "{} {} line(s) in {} file(s).",
            "Commented".green().bold(),
            report.lines_annotated(),
            changed
        );
    }

    let processed =
        !report.synced.is_empty() || !report.merged.is_empty() || !report.annotated.is_empty();
    if !processed && report.skipped_groups.is_empty() {
        let _ = writeln!(writer, "Nothing to update.");
    } else if report.skipped_groups.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Locale files are up to date".green()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = if summary.created {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        )
    } else {
        writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        )
    };
}
