//! ヘルパー import 挿入
//!
//! Tauri コマンドファイルに `db_query` 系ヘルパーマクロの import 行が
//! 欠けていれば挿入する。判定と挿入はすべて部分文字列ベースの純粋な
//! テキスト変換で、構文解析は行わない。

use serde::Serialize;

/// 挿入する import ブロック（末尾改行込み）
pub(crate) const HELPER_IMPORT: &str = "use crate::{db_query, db_query_as, db_query_as_one, db_query_as_optional, db_query_scalar, db_query_scalar_optional};\n";

/// ヘルパー参照済み判定マーカー
///
/// 全ヘルパー名が `db_query` を接頭辞に持つため、この一語の有無だけで
/// 参照済みかどうかが決まる。
pub(crate) const HELPER_MARKER: &str = "db_query";

/// コマンドファイル判定マーカー
pub(crate) const ATTRIBUTE_MARKER: &str = "tauri::command";

/// import ブロックの挿入位置となるアンカー
pub(crate) const IMPORT_ANCHOR: &str = "use tauri";

/// 1ファイル分の判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectOutcome {
    /// import ブロックを挿入した
    Injected,
    /// 既にヘルパーを参照している
    AlreadyImported,
    /// `tauri::command` を含まないため対象外
    NotACommandFile,
    /// 対象ファイルだがアンカー行が無く挿入できない
    AnchorMissing,
}

impl InjectOutcome {
    /// 内容が変化したかどうか
    pub fn changed(&self) -> bool {
        matches!(self, InjectOutcome::Injected)
    }

    /// 出力用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            InjectOutcome::Injected => "injected",
            InjectOutcome::AlreadyImported => "already imported",
            InjectOutcome::NotACommandFile => "not a command file",
            InjectOutcome::AnchorMissing => "anchor missing",
        }
    }
}

/// 変換結果
///
/// `content` は変換後の全文。変更が無い場合は入力と同一の文字列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub content: String,
    pub outcome: InjectOutcome,
}

/// ヘルパー import が欠けていれば挿入する
///
/// 判定順序:
/// 1. `db_query` を含む → 変更なし（アンカーの有無は見ない）
/// 2. `tauri::command` を含まない → 変更なし
/// 3. `use tauri` の最初の出現位置の直前に import ブロックを挿入
/// 4. アンカーが無ければ変更なし
///
/// 挿入は最初の出現位置のみ。2箇所目以降のアンカーには手を付けない。
/// 挿入後の内容は `db_query` を含むため、再適用は 1. で no-op になる。
pub fn inject(content: &str) -> Injection {
    if content.contains(HELPER_MARKER) {
        return Injection {
            content: content.to_string(),
            outcome: InjectOutcome::AlreadyImported,
        };
    }

    if !content.contains(ATTRIBUTE_MARKER) {
        return Injection {
            content: content.to_string(),
            outcome: InjectOutcome::NotACommandFile,
        };
    }

    match content.find(IMPORT_ANCHOR) {
        Some(pos) => {
            let mut out = String::with_capacity(content.len() + HELPER_IMPORT.len());
            out.push_str(&content[..pos]);
            out.push_str(HELPER_IMPORT);
            out.push_str(&content[pos..]);
            Injection {
                content: out,
                outcome: InjectOutcome::Injected,
            }
        }
        None => Injection {
            content: content.to_string(),
            outcome: InjectOutcome::AnchorMissing,
        },
    }
}

#[cfg(test)]
#[path = "inject_test.rs"]
mod tests;

#[cfg(test)]
#[path = "inject_proptests.rs"]
mod proptests;
