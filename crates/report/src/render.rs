//! 마크다운 렌더러 -- 순서 있는 줄 버퍼
//!
//! [`MarkdownDocument`]는 출력 줄을 넣은 순서대로 쌓고, 섹션 제목과 접을 수 있는
//! `<details>` 블록을 만드는 도우미를 제공합니다. 최종 문서는 한 줄씩
//! [`emit`](MarkdownDocument::emit)으로 내보냅니다.

use std::fmt;
use std::io::Write;

/// 접힘 블록 시작 태그
const DETAILS_OPEN: &str = "<details>";
/// 접힘 블록 종료 태그
const DETAILS_CLOSE: &str = "</details>";

/// 누적된 마크다운 문서
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDocument {
    lines: Vec<String>,
}

impl MarkdownDocument {
    /// 빈 문서를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 줄 하나를 추가합니다.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// 여러 줄을 추가합니다.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// 제목과 본문 줄, 마지막 빈 줄로 이루어진 섹션을 추가합니다.
    ///
    /// `depth`는 제목 수준(`#` 개수)이며 1-6으로 제한됩니다.
    pub fn section<I, S>(&mut self, depth: usize, title: &str, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(format!("{} {}", "#".repeat(depth.clamp(1, 6)), title));
        self.extend(lines);
        self.push("");
    }

    /// 앵커 이름으로 식별되는 블록을 추가합니다.
    ///
    /// `plain`이면 이름 있는 앵커 뒤에 줄을 그대로 붙이고, 아니면 `<details>`로
    /// 감싸 요약에 앵커 이름을 표시합니다. 어느 쪽이든 `#{anchor}` 링크의
    /// 대상이 됩니다.
    pub fn collapsible<I, S>(&mut self, anchor: &str, lines: I, plain: bool)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = anchor_tag(anchor);
        if plain {
            self.push(target);
            self.extend(lines);
            return;
        }

        self.push(DETAILS_OPEN);
        self.push(format!("<summary>{target}{}</summary>", escape_html(anchor)));
        // 요약 뒤 빈 줄이 있어야 본문이 마크다운으로 해석됩니다.
        self.push("");
        self.extend(lines);
        self.push("");
        self.push(DETAILS_CLOSE);
    }

    /// 누적된 줄을 반환합니다.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 줄 목록으로 변환합니다.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// 줄 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 모든 줄을 순서대로, 줄마다 개행을 붙여 씁니다.
    pub fn emit(&self, w: &mut dyn Write) -> std::io::Result<()> {
        for line in &self.lines {
            writeln!(w, "{line}")?;
        }
        w.flush()
    }
}

impl fmt::Display for MarkdownDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// 링크 대상이 되는 이름 있는 앵커
fn anchor_tag(anchor: &str) -> String {
    format!("<a name=\"{}\"></a>", escape_html(anchor))
}

/// HTML 특수 문자를 엔티티로 바꿉니다.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
