use super::*;

#[test]
fn test_inject_inserts_block_before_anchor_at_file_head() {
    let content = "use tauri::command;\nfn foo() {}";
    let result = inject(content);

    assert_eq!(result.outcome, InjectOutcome::Injected);
    assert_eq!(
        result.content,
        "use crate::{db_query, db_query_as, db_query_as_one, db_query_as_optional, db_query_scalar, db_query_scalar_optional};\nuse tauri::command;\nfn foo() {}"
    );
}

#[test]
fn test_inject_preserves_surrounding_bytes() {
    // アンカーより前の use 行は 1 バイトも変わらないこと
    let content = "use serde::Serialize;\nuse tauri::{AppHandle, Manager};\n\n#[tauri::command]\npub fn list_orders() {}\n";
    let result = inject(content);

    assert_eq!(result.outcome, InjectOutcome::Injected);
    assert!(result.content.starts_with("use serde::Serialize;\n"));
    assert!(result
        .content
        .ends_with("use tauri::{AppHandle, Manager};\n\n#[tauri::command]\npub fn list_orders() {}\n"));

    let expected = format!(
        "use serde::Serialize;\n{}use tauri::{{AppHandle, Manager}};\n\n#[tauri::command]\npub fn list_orders() {{}}\n",
        HELPER_IMPORT
    );
    assert_eq!(result.content, expected);
}

#[test]
fn test_inject_skips_file_already_importing_helpers() {
    let content = "use crate::{db_query, db_query_as};\nuse tauri::command;\nfn foo() {}";
    let result = inject(content);

    assert_eq!(result.outcome, InjectOutcome::AlreadyImported);
    assert_eq!(result.content, content);
}

#[test]
fn test_inject_bare_helper_marker_suppresses_insertion() {
    // ヘルパー名そのものでなくても `db_query` という語があれば挿入しない
    let content = "// moved to db_query helpers\nuse tauri::command;\nfn foo() {}";
    let result = inject(content);

    assert_eq!(result.outcome, InjectOutcome::AlreadyImported);
    assert_eq!(result.content, content);
}

#[test]
fn test_inject_helper_marker_wins_even_without_anchor() {
    let content = "fn helper() { db_query!(pool, QUERY) }";
    let result = inject(content);

    assert_eq!(result.outcome, InjectOutcome::AlreadyImported);
    assert_eq!(result.content, content);
}

#[test]
fn test_inject_skips_non_command_file() {
    // `use tauri` はあるが `tauri::command` が無いファイル
    let content = "use tauri::Manager;\nfn foo() {}";
    let result = inject(content);

    assert_eq!(result.outcome, InjectOutcome::NotACommandFile);
    assert_eq!(result.content, content);
}

#[test]
fn test_inject_skips_plain_file() {
    let content = "fn foo() {}";
    let result = inject(content);

    assert_eq!(result.outcome, InjectOutcome::NotACommandFile);
    assert_eq!(result.content, content);
}

#[test]
fn test_inject_reports_missing_anchor() {
    // 完全修飾の属性だけがあり `use tauri` 行が無いファイル
    let content = "#[tauri::command]\nfn foo() {}";
    let result = inject(content);

    assert_eq!(result.outcome, InjectOutcome::AnchorMissing);
    assert_eq!(result.content, content);
}

#[test]
fn test_inject_uses_first_anchor_only() {
    let content = "use tauri::command;\nuse tauri::Manager;\nfn foo() {}";
    let result = inject(content);

    assert_eq!(result.outcome, InjectOutcome::Injected);
    assert_eq!(result.content.matches(HELPER_IMPORT.trim_end()).count(), 1);
    assert!(result.content.starts_with(HELPER_IMPORT));
    // 2つ目のアンカー行はそのまま
    assert!(result.content.contains("use tauri::command;\nuse tauri::Manager;\n"));
}

#[test]
fn test_inject_is_noop_on_second_run() {
    // 挿入後のファイルは db_query を含むので再適用で変化しない
    let content = "use tauri::command;\nfn foo() {}";
    let first = inject(content);
    assert_eq!(first.outcome, InjectOutcome::Injected);

    let second = inject(&first.content);
    assert_eq!(second.outcome, InjectOutcome::AlreadyImported);
    assert_eq!(second.content, first.content);
}

#[test]
fn test_inject_empty_content() {
    let result = inject("");
    assert_eq!(result.outcome, InjectOutcome::NotACommandFile);
    assert_eq!(result.content, "");
}

#[test]
fn test_outcome_changed_only_for_injected() {
    assert!(InjectOutcome::Injected.changed());
    assert!(!InjectOutcome::AlreadyImported.changed());
    assert!(!InjectOutcome::NotACommandFile.changed());
    assert!(!InjectOutcome::AnchorMissing.changed());
}

#[test]
fn test_outcome_labels() {
    assert_eq!(InjectOutcome::Injected.label(), "injected");
    assert_eq!(InjectOutcome::AlreadyImported.label(), "already imported");
    assert_eq!(InjectOutcome::NotACommandFile.label(), "not a command file");
    assert_eq!(InjectOutcome::AnchorMissing.label(), "anchor missing");
}
