//! ファイルシステム抽象化
//!
//! ソースファイルの読み書きを抽象化するレイヤー。
//! テスト時に MockFs を注入してファイル操作をモック化できる。

use crate::error::{Result, SqlshiftError};
use std::io::Write;
use std::path::Path;

/// ファイルシステム操作を抽象化するトレイト
///
/// 本番コードでは RealFs を使用する。
pub trait FileSystem: Send + Sync {
    /// ファイル内容を読み込み
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// ファイルに書き込み
    ///
    /// - 既存ファイルは上書き
    /// - 書き込みが途中で失敗しても元ファイルの内容は壊れない
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
}

/// 本番用ファイルシステム実装
///
/// 書き込みは同一ディレクトリの一時ファイルに書いてからリネームする。
pub struct RealFs;

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content)?;
        tmp.persist(path).map_err(|e| SqlshiftError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "fs_test.rs"]
mod tests;
