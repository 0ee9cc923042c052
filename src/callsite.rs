//! sqlx クエリ呼び出し箇所の検出
//!
//! `sqlx::query` / `sqlx::query_as` / `sqlx::query_scalar` の出現を
//! テキストとして数える。呼び出しの書き換えは行わない。

use serde::Serialize;

/// 呼び出し形ごとの出現数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CallSiteCounts {
    pub query: usize,
    pub query_as: usize,
    pub query_scalar: usize,
}

impl CallSiteCounts {
    /// 合計出現数
    pub fn total(&self) -> usize {
        self.query + self.query_as + self.query_scalar
    }
}

/// 1ファイル分の呼び出し箇所を数える
///
/// マッチ対象は `sqlx::query` 系 3 形のみ。`sqlx::query_file` のような
/// 別名や `db_query` 系マクロにはマッチしない。
pub fn count(content: &str) -> CallSiteCounts {
    use regex::Regex;

    let re = Regex::new(r"\bsqlx::query(_as|_scalar)?\b").unwrap();

    let mut counts = CallSiteCounts::default();
    for m in re.find_iter(content) {
        match m.as_str() {
            "sqlx::query_as" => counts.query_as += 1,
            "sqlx::query_scalar" => counts.query_scalar += 1,
            _ => counts.query += 1,
        }
    }
    counts
}

#[cfg(test)]
#[path = "callsite_test.rs"]
mod tests;
