use super::*;
use proptest::prelude::*;

/// マーカー文字列を含み得ない本文（英小文字を含まない文字集合）
///
/// `db_query` / `tauri::command` / `use tauri` はすべて英小文字を含むため、
/// この戦略が生成する文字列とは交差しない。
fn neutral_text_strategy() -> impl Strategy<Value = String> {
    "[A-Z0-9 \\n(){};:=_#\\[\\]\"]{0,64}".prop_map(|s| s)
}

proptest! {
    /// アンカーを含みヘルパー未参照なら、import ブロックが
    /// 最初のアンカー直前に 1 度だけ入り、他のバイトは変わらない
    #[test]
    fn prop_injects_exactly_before_first_anchor(
        pre in neutral_text_strategy(),
        post in neutral_text_strategy()
    ) {
        let content = format!("{pre}#[tauri::command]\nuse tauri::Manager;\n{post}");
        let result = inject(&content);

        prop_assert_eq!(result.outcome, InjectOutcome::Injected);

        let anchor_pos = content.find(IMPORT_ANCHOR).unwrap();
        let expected = format!(
            "{}{}{}",
            &content[..anchor_pos],
            HELPER_IMPORT,
            &content[anchor_pos..]
        );
        prop_assert_eq!(result.content, expected);
    }

    /// ヘルパーマーカーを含むファイルはアンカーの有無によらず変化しない
    #[test]
    fn prop_helper_marker_suppresses_insertion(
        pre in neutral_text_strategy(),
        post in neutral_text_strategy()
    ) {
        let content = format!("{pre}db_query{post}use tauri::command;\n");
        let result = inject(&content);

        prop_assert_eq!(result.outcome, InjectOutcome::AlreadyImported);
        prop_assert_eq!(result.content, content);
    }

    /// マーカーを一切含まないファイルは変化しない
    #[test]
    fn prop_plain_content_unchanged(content in neutral_text_strategy()) {
        let result = inject(&content);

        prop_assert_eq!(result.outcome, InjectOutcome::NotACommandFile);
        prop_assert_eq!(result.content, content);
    }

    /// 2 回適用しても 1 回適用と同じ結果になる
    #[test]
    fn prop_second_application_is_noop(
        pre in neutral_text_strategy(),
        post in neutral_text_strategy()
    ) {
        let content = format!("{pre}#[tauri::command]\nuse tauri::Manager;\n{post}");
        let first = inject(&content);
        let second = inject(&first.content);

        prop_assert_eq!(second.outcome, InjectOutcome::AlreadyImported);
        prop_assert_eq!(second.content, first.content);
    }
}
