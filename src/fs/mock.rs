//! テスト用モックファイルシステム

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
pub struct MockFs {
    files: RwLock<HashMap<String, String>>,
    fail_writes: bool,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            fail_writes: false,
        }
    }

    /// 書き込みが常に失敗するモック
    pub fn failing_writes() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            fail_writes: true,
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), content.to_string());
    }

    /// ファイル内容を取得（検証用）
    pub fn file(&self, path: &str) -> Option<String> {
        self.files.read().unwrap().get(path).cloned()
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .read()
            .unwrap()
            .get(path.to_string_lossy().as_ref())
            .cloned()
            .ok_or_else(|| {
                SqlshiftError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("mock file not found: {}", path.display()),
                ))
            })
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(SqlshiftError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "mock write failure",
            )));
        }
        self.files.write().unwrap().insert(
            path.to_string_lossy().into_owned(),
            String::from_utf8_lossy(content).into_owned(),
        );
        Ok(())
    }
}
