//! 평가 집계 -- 카테고리별 요약 줄과 우선순위별 평가 줄
//!
//! 각 평가(assessment) 항목은 한 줄 요약으로 변환됩니다:
//!
//! ```text
//! {status-badge}: {label}[: {count}][ ({links})]
//! ```
//!
//! 하위 `evaluations` 항목은 같은 규칙으로 줄을 만든 뒤 정수 `priority` 값으로
//! 묶어 오름차순으로 출력합니다 (값이 작을수록 먼저). 같은 우선순위 안에서는
//! 원래 순서를 유지합니다.

use std::collections::BTreeMap;

use crate::classify::{capitalize, decorate_status};
use crate::path::PathResolver;
use crate::registry::ViolationRegistry;

/// 카테고리 아래 줄의 들여쓰기
pub const ITEM_INDENT: &str = "    ";

/// 평가 항목 하나를 요약 줄로 만듭니다.
///
/// - 상태는 첫 글자를 대문자로 바꾼 뒤 배지를 붙입니다.
/// - `label`이 없거나 비어 있으면 상태 문자열을 라벨로 씁니다.
/// - `count`가 0보다 클 때만 `: {count}`를 붙입니다.
/// - `violations`가 있으면 레지스트리에 기록하고 ` ({links})`를 붙입니다.
pub fn summarize_assessment(entry: PathResolver<'_>, registry: &mut ViolationRegistry) -> String {
    let status = capitalize(entry.str("status").unwrap_or_default());
    let label = match entry.str("label") {
        Some(label) if !label.is_empty() => label.to_owned(),
        _ => status.clone(),
    };

    let mut line = format!("{}: {}", decorate_status(&status), label);

    if let Some(count) = entry.unsigned("count").filter(|count| *count > 0) {
        line.push_str(&format!(": {count}"));
    }

    let violations = entry.string_list("violations");
    if !violations.is_empty() {
        let links = registry.record_references(&violations);
        line.push_str(&format!(" ({links})"));
    }

    line
}

/// 평가 하위 항목들을 우선순위 순서의 줄 목록으로 만듭니다.
///
/// `priority`가 없거나 정수가 아니면 0으로 취급합니다. 버킷 키는 정수로
/// 비교하므로 10이 2보다 뒤에 옵니다.
pub fn summarize_evaluations(
    entries: &[PathResolver<'_>],
    registry: &mut ViolationRegistry,
) -> Vec<String> {
    let mut buckets: BTreeMap<i64, Vec<String>> = BTreeMap::new();

    for entry in entries {
        let priority = entry.integer("priority").unwrap_or(0);
        let line = summarize_assessment(*entry, registry);
        buckets.entry(priority).or_default().push(line);
    }

    buckets.into_values().flatten().collect()
}

/// 카테고리 하나의 전체 블록을 만듭니다.
///
/// ```text
/// - License:
///     - :green_square: Pass: Pass
/// ```
pub fn summarize_category(
    name: &str,
    entry: PathResolver<'_>,
    registry: &mut ViolationRegistry,
) -> Vec<String> {
    let mut lines = vec![format!("- {}:", capitalize(name))];
    lines.push(format!("{ITEM_INDENT}- {}", summarize_assessment(entry, registry)));

    let evaluations = entry.items("evaluations");
    for line in summarize_evaluations(&evaluations, registry) {
        lines.push(format!("{ITEM_INDENT}- {line}"));
    }

    lines
}
