//! sqlshift check コマンド
//!
//! ヘルパー import の不足を書き換えなしで検査する。
//! 不足があれば非ゼロ終了するため、CI のゲートとして使える。

use crate::discover::discover;
use crate::fs::{FileSystem, RealFs};
use crate::inject::{inject, InjectOutcome};
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Files, directories, or glob patterns to check
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// 1ファイル分の検査結果
#[derive(Debug, Clone, Serialize)]
struct CheckReport {
    path: PathBuf,
    outcome: InjectOutcome,
}

pub fn run(args: Args) -> Result<(), String> {
    let files = discover(&args.paths).map_err(|e| e.to_string())?;

    let fs = RealFs;
    let reports = collect_reports(&fs, &files).map_err(|e| e.to_string())?;

    let missing = reports.iter().filter(|r| r.outcome.changed()).count();

    if args.json {
        print_json(&reports).map_err(|e| e.to_string())?;
    } else if missing == 0 {
        println!(
            "{} No missing helper imports ({} file(s) checked)",
            "✓".green(),
            reports.len()
        );
    } else {
        for report in reports.iter().filter(|r| r.outcome.changed()) {
            println!("{} {}", "✗".red(), report.path.display());
        }
    }

    if missing == 0 {
        Ok(())
    } else {
        Err(format!("{} file(s) missing helper imports", missing))
    }
}

fn print_json(reports: &[CheckReport]) -> crate::error::Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    println!("{json}");
    Ok(())
}

/// 全対象ファイルを読み、書き換えなしで判定する
fn collect_reports(
    fs: &dyn FileSystem,
    files: &[PathBuf],
) -> crate::error::Result<Vec<CheckReport>> {
    files
        .iter()
        .map(|path| {
            let content = fs.read_to_string(path)?;
            Ok(CheckReport {
                path: path.clone(),
                outcome: inject(&content).outcome,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "check_test.rs"]
mod tests;
