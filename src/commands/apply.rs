//! sqlshift apply コマンド
//!
//! ヘルパー import を挿入してファイルへ書き戻す。
//! --dry-run 時は判定だけ行い、書き戻しはしない。

use crate::discover::discover;
use crate::fs::{FileSystem, RealFs};
use crate::inject::{inject, InjectOutcome};
use crate::output::CommandSummary;
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
pub struct Args {
    /// Files, directories, or glob patterns to rewrite
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<String>,

    /// Report changes without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// 1ファイル分の適用結果
///
/// 読み書きに失敗したファイルは outcome の代わりに error を持つ。
#[derive(Debug, Clone, Serialize)]
struct ApplyReport {
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<InjectOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(args: Args) -> Result<(), String> {
    let files = discover(&args.paths).map_err(|e| e.to_string())?;

    let fs = RealFs;
    let reports = apply_all(&fs, &files, args.dry_run);

    if args.json {
        print_json(&reports).map_err(|e| e.to_string())?;
    } else {
        print_reports(&reports, args.dry_run);
    }

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    if failed == 0 {
        Ok(())
    } else {
        Err(format!("{} file(s) failed", failed))
    }
}

fn print_json(reports: &[ApplyReport]) -> crate::error::Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    println!("{json}");
    Ok(())
}

/// 全対象ファイルへ適用する
///
/// 1ファイルの失敗で全体は止めず、残りのファイルも処理する。
fn apply_all(fs: &dyn FileSystem, files: &[PathBuf], dry_run: bool) -> Vec<ApplyReport> {
    files
        .iter()
        .map(|path| match process_file(fs, path, dry_run) {
            Ok(outcome) => ApplyReport {
                path: path.clone(),
                outcome: Some(outcome),
                error: None,
            },
            Err(e) => ApplyReport {
                path: path.clone(),
                outcome: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

/// 1ファイルを読み、必要なら import を挿入して書き戻す
fn process_file(
    fs: &dyn FileSystem,
    path: &Path,
    dry_run: bool,
) -> crate::error::Result<InjectOutcome> {
    let content = fs.read_to_string(path)?;
    let result = inject(&content);
    if result.outcome.changed() && !dry_run {
        fs.write(path, result.content.as_bytes())?;
    }
    Ok(result.outcome)
}

fn print_reports(reports: &[ApplyReport], dry_run: bool) {
    let mut changed = 0usize;
    let mut failed = 0usize;

    for report in reports {
        match (&report.outcome, &report.error) {
            (Some(outcome), _) if outcome.changed() => {
                changed += 1;
                let label = if dry_run { "would inject" } else { outcome.label() };
                println!("{} {} ({label})", "+".green(), report.path.display());
            }
            (None, Some(message)) => {
                failed += 1;
                println!("{} {} ({message})", "!".red(), report.path.display());
            }
            // 変更なしのファイルは個別表示しない
            _ => {}
        }
    }

    let summary = CommandSummary::format(changed, failed, dry_run);
    println!("{} {}", summary.prefix, summary.message);
}

#[cfg(test)]
#[path = "apply_test.rs"]
mod tests;
