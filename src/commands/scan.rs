//! sqlshift scan コマンド
//!
//! 対象ファイル中の sqlx クエリ呼び出し箇所を集計して表示する。
//! ファイルは一切変更しない。

use crate::callsite::{self, CallSiteCounts};
use crate::discover::discover;
use crate::fs::{FileSystem, RealFs};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Files, directories, or glob patterns to scan
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only file paths containing call sites
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

/// 1ファイル分の集計結果
#[derive(Debug, Clone, Serialize)]
struct FileCallSites {
    path: PathBuf,
    #[serde(flatten)]
    counts: CallSiteCounts,
    total: usize,
}

pub fn run(args: Args) -> Result<(), String> {
    let files = discover(&args.paths).map_err(|e| e.to_string())?;

    let fs = RealFs;
    let reports = collect_reports(&fs, &files).map_err(|e| e.to_string())?;

    if args.json {
        print_json(&reports).map_err(|e| e.to_string())?;
    } else if args.simple {
        print_simple(&reports);
    } else {
        print_table(&reports, files.len());
    }

    Ok(())
}

/// 全対象ファイルを読み、呼び出し箇所を 1 件以上含むものだけを集める
fn collect_reports(
    fs: &dyn FileSystem,
    files: &[PathBuf],
) -> crate::error::Result<Vec<FileCallSites>> {
    let mut reports = Vec::new();
    for path in files {
        let content = fs.read_to_string(path)?;
        let counts = callsite::count(&content);
        if counts.total() > 0 {
            reports.push(FileCallSites {
                path: path.clone(),
                total: counts.total(),
                counts,
            });
        }
    }
    Ok(reports)
}

fn print_json(reports: &[FileCallSites]) -> crate::error::Result<()> {
    // 空の場合も [] を出力
    let json = serde_json::to_string_pretty(reports)?;
    println!("{json}");
    Ok(())
}

fn print_simple(reports: &[FileCallSites]) {
    for report in reports {
        println!("{}", report.path.display());
    }
}

fn print_table(reports: &[FileCallSites], scanned: usize) {
    if reports.is_empty() {
        println!("No query call sites found ({} file(s) scanned)", scanned);
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["File", "query", "query_as", "query_scalar", "Total"]);

    for report in reports {
        table.add_row(vec![
            report.path.display().to_string(),
            report.counts.query.to_string(),
            report.counts.query_as.to_string(),
            report.counts.query_scalar.to_string(),
            report.total.to_string(),
        ]);
    }

    println!("{table}");

    let total: usize = reports.iter().map(|r| r.total).sum();
    println!(
        "{} call site(s) in {} file(s) ({} scanned)",
        total,
        reports.len(),
        scanned
    );
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod tests;
