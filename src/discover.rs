//! 対象ファイルの列挙
//!
//! CLI のパス引数（ファイル / ディレクトリ / glob パターン）を、
//! 重複なしのソート済みファイル一覧に解決する。

use crate::error::{Result, SqlshiftError};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Rust ソースの拡張子
const RUST_EXTENSION: &str = "rs";

/// パス引数を対象ファイル一覧に解決する
///
/// - 既存ファイルはそのまま採用（明示指定なので拡張子は問わない）
/// - 既存ディレクトリは再帰的に辿り `.rs` のみ採用
/// - それ以外は glob パターンとして展開。マッチしたディレクトリは
///   再帰的に辿り、マッチしたファイルはそのまま採用
/// - 1件もマッチしない引数はエラー
///
/// 結果はソート済みで重複を含まない。
pub fn discover(paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut found: BTreeSet<PathBuf> = BTreeSet::new();

    for raw in paths {
        let path = Path::new(raw);

        if path.is_file() {
            found.insert(path.to_path_buf());
            continue;
        }

        if path.is_dir() {
            collect_rust_files(path, &mut found)?;
            continue;
        }

        let mut matched_any = false;
        for entry in glob::glob(raw)? {
            let matched = entry.map_err(|e| SqlshiftError::Io(e.into_error()))?;
            matched_any = true;
            if matched.is_dir() {
                collect_rust_files(&matched, &mut found)?;
            } else {
                found.insert(matched);
            }
        }
        if !matched_any {
            return Err(SqlshiftError::TargetNotFound(raw.clone()));
        }
    }

    Ok(found.into_iter().collect())
}

/// ディレクトリ配下の `.rs` ファイルを集める
fn collect_rust_files(dir: &Path, found: &mut BTreeSet<PathBuf>) -> Result<()> {
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| SqlshiftError::Io(e.into()))?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some(RUST_EXTENSION)
        {
            found.insert(entry.path().to_path_buf());
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "discover_test.rs"]
mod tests;
