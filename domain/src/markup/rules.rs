//! Individual rewrite passes of the markup pipeline.
//!
//! Every pass is a total function over the whole string. Passes run in the
//! order given by [`RULES`](super::RULES), each one over the output of the
//! passes before it. Headings and lists leave the line ending of their last
//! line outside the element, so the next line still starts a line for the
//! passes that follow.

use super::escape::escape_html;
use super::shelf::Shelf;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").expect("valid code block pattern"));
static HEADING_3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.*?)(\n|$)").expect("valid h3 pattern"));
static HEADING_4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#### (.*?)(\n|$)").expect("valid h4 pattern"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code pattern"));
static NUMBERED_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\d+\. [^\n]*(?:\n\d+\. [^\n]*)*").expect("valid numbered run pattern")
});
static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\d+)\. (.*?)(?:\n|$)").expect("valid numbered item pattern")
});
static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\* (.*?)(\n|$)").expect("valid bullet pattern"));
static DASH_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- (.*?)(\n|$)").expect("valid dash pattern"));

const DEFAULT_LANGUAGE: &str = "plaintext";

/// Fenced code blocks with a language header, copy button and escaped body.
pub fn code_blocks(text: &str) -> String {
    CODE_BLOCK.replace_all(text, code_block).into_owned()
}

/// Same as [`code_blocks`], but each rendered block goes on `shelf` and only
/// its slot token stays in the text.
pub fn shelve_code_blocks(text: &str, shelf: &mut Shelf) -> String {
    CODE_BLOCK
        .replace_all(text, |caps: &Captures| shelf.put(code_block(caps)))
        .into_owned()
}

fn code_block(caps: &Captures) -> String {
    let lang = caps.get(1).map_or(DEFAULT_LANGUAGE, |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());
    format!(
        concat!(
            r#"<div class="code-container">"#,
            r#"<div class="code-header"><span>{label}</span>"#,
            r#"<button class="copy-button" onclick="copyCode(this)">Copy</button></div>"#,
            r#"<pre class="line-numbers"><code class="language-{lang}">{body}</code></pre>"#,
            r#"</div>"#,
        ),
        label = lang.to_uppercase(),
        lang = lang,
        body = escape_html(body),
    )
}

/// `### text` lines. The line ending stays outside the heading.
pub fn level3_headings(text: &str) -> String {
    HEADING_3.replace_all(text, "<h3>${1}</h3>${2}").into_owned()
}

/// `#### text` lines. The line ending stays outside the heading.
pub fn level4_headings(text: &str) -> String {
    HEADING_4.replace_all(text, "<h4>${1}</h4>${2}").into_owned()
}

pub fn bold(text: &str) -> String {
    BOLD.replace_all(text, "<strong>${1}</strong>").into_owned()
}

/// Inline code spans. The span content is NOT escaped.
pub fn inline_code(text: &str) -> String {
    INLINE_CODE.replace_all(text, "<code>${1}</code>").into_owned()
}

/// Runs of consecutive `N. text` lines become one ordered list starting at
/// the first line's number. Line endings between items are consumed; the
/// one after the last item is kept.
pub fn numbered_lists(text: &str) -> String {
    NUMBERED_RUN
        .replace_all(text, |run: &Captures| {
            let mut start: Option<String> = None;
            let mut items = String::new();
            for item in NUMBERED_ITEM.captures_iter(&run[0]) {
                if start.is_none() {
                    start = Some(list_start(&item[1]));
                }
                items.push_str("<li>");
                items.push_str(&item[2]);
                items.push_str("</li>");
            }
            format!(
                r#"<ol start="{}">{}</ol>"#,
                start.unwrap_or_else(|| "1".to_string()),
                items
            )
        })
        .into_owned()
}

/// Each `* text` line becomes its own single-item list; consecutive lines
/// are not merged.
pub fn bullet_lists(text: &str) -> String {
    BULLET_ITEM
        .replace_all(text, "<ul><li>${1}</li></ul>${2}")
        .into_owned()
}

/// Each `- text` line becomes its own single-item list; consecutive lines
/// are not merged.
pub fn dash_lists(text: &str) -> String {
    DASH_ITEM
        .replace_all(text, "<ul><li>${1}</li></ul>${2}")
        .into_owned()
}

/// Normalize the leading number (`007` -> `7`); numbers too large for `u64`
/// are kept as written.
fn list_start(digits: &str) -> String {
    digits
        .parse::<u64>()
        .map(|n| n.to_string())
        .unwrap_or_else(|_| digits.to_string())
}
