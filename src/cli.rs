use clap::{Parser, Subcommand};

use crate::commands::{apply, check, scan};

#[derive(Debug, Parser)]
#[command(name = "sqlshift")]
#[command(about = "Helper-import refactoring CLI for Tauri + sqlx codebases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// sqlx クエリ呼び出し箇所の集計
    Scan(scan::Args),

    /// ヘルパー import 不足の検査
    Check(check::Args),

    /// ヘルパー import の挿入と書き戻し
    Apply(apply::Args),
}
