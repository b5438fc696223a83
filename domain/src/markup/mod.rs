//! Markdown-subset to HTML markup transform.
//!
//! [`render`] runs the [`RULES`] table front to back. Each rule is a single
//! substitution pass over the whole string and sees the output of every rule
//! before it, never its own output or a later rule's. Fenced code blocks are
//! rendered first and kept on a [`Shelf`] until the last pass has run, so
//! nothing inside them is rewritten again. Only code bodies are HTML-escaped;
//! text in every other construct is emitted as-is.
//!
//! Known quirks kept on purpose:
//! - inline code spans are not escaped
//! - `*` and `-` lines each become their own one-item `<ul>`, while
//!   consecutive numbered lines share one `<ol>`

pub mod escape;
pub mod rules;
pub mod shelf;

pub use escape::escape_html;
pub use shelf::Shelf;

/// Identifies one rewrite pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    CodeBlock,
    Heading3,
    Heading4,
    Bold,
    InlineCode,
    NumberedList,
    BulletList,
    DashList,
}

#[derive(Debug, Clone, Copy)]
enum Pass {
    /// Rewrites text in place; the output stays visible to later passes.
    Text(fn(&str) -> String),
    /// Puts its output on the shelf and leaves a slot token behind.
    Shelved(fn(&str, &mut Shelf) -> String),
}

/// A named rewrite pass.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
    pass: Pass,
}

impl Rule {
    const fn text(kind: RuleKind, apply: fn(&str) -> String) -> Self {
        Self {
            kind,
            pass: Pass::Text(apply),
        }
    }

    const fn shelved(kind: RuleKind, apply: fn(&str, &mut Shelf) -> String) -> Self {
        Self {
            kind,
            pass: Pass::Shelved(apply),
        }
    }

    /// Run this pass once over `text`.
    pub fn apply(&self, text: &str, shelf: &mut Shelf) -> String {
        match self.pass {
            Pass::Text(apply) => apply(text),
            Pass::Shelved(apply) => apply(text, shelf),
        }
    }
}

/// The rewrite passes in the order they are applied.
pub const RULES: [Rule; 8] = [
    Rule::shelved(RuleKind::CodeBlock, rules::shelve_code_blocks),
    Rule::text(RuleKind::Heading3, rules::level3_headings),
    Rule::text(RuleKind::Heading4, rules::level4_headings),
    Rule::text(RuleKind::Bold, rules::bold),
    Rule::text(RuleKind::InlineCode, rules::inline_code),
    Rule::text(RuleKind::NumberedList, rules::numbered_lists),
    Rule::text(RuleKind::BulletList, rules::bullet_lists),
    Rule::text(RuleKind::DashList, rules::dash_lists),
];

/// Render a finalized assistant message into display markup.
pub fn render(plain_text: &str) -> String {
    let mut shelf = Shelf::new();
    let text = RULES
        .iter()
        .fold(plain_text.to_string(), |text, rule| rule.apply(&text, &mut shelf));
    shelf.restore(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_region(out: &str) -> &str {
        let open = out.find("<code class=\"language-").unwrap();
        let start = open + out[open..].find('>').unwrap() + 1;
        let end = out.find("</code></pre>").unwrap();
        &out[start..end]
    }

    #[test]
    fn test_rules_are_in_pipeline_order() {
        let kinds: Vec<RuleKind> = RULES.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RuleKind::CodeBlock,
                RuleKind::Heading3,
                RuleKind::Heading4,
                RuleKind::Bold,
                RuleKind::InlineCode,
                RuleKind::NumberedList,
                RuleKind::BulletList,
                RuleKind::DashList,
            ]
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        let text = "Hello there.\nNothing special here: 3.14, a-b, #hash.";
        assert_eq!(render(text), text);
    }

    #[test]
    fn test_render_is_idempotent_on_plain_text() {
        let text = "Just a sentence.\n\nAnd another one with (parens) & <angle> brackets.";
        let once = render(text);
        assert_eq!(render(&once), once);
        assert_eq!(once, text);
    }

    #[test]
    fn test_python_block_header_and_escaped_body() {
        let out = render("```python\nprint(\"hi\")\n```");
        assert!(out.contains("<span>PYTHON</span>"));
        assert!(out.contains("print(&quot;hi&quot;)"));
        assert!(out.contains(
            r#"<button class="copy-button" onclick="copyCode(this)">Copy</button>"#
        ));
    }

    #[test]
    fn test_code_region_never_contains_raw_special_characters() {
        let out = render("```\nif a < b && c > d { s = \"x\" + 'y' }\n```");
        let region = code_region(&out);
        for raw in ['<', '>', '"', '\''] {
            assert!(!region.contains(raw), "raw {raw:?} in {region}");
        }
        let entities = ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"]
            .iter()
            .map(|e| region.matches(e).count())
            .sum::<usize>();
        assert_eq!(region.matches('&').count(), entities);
    }

    #[test]
    fn test_code_body_is_not_rewritten_by_later_passes() {
        let text = "```yaml\nsteps:\n- run: echo `date`\n* **x**\n1. one\n### not a heading\n```";
        let out = render(text);

        assert_eq!(out, rules::code_blocks(text));
        assert_eq!(
            code_region(&out),
            "steps:\n- run: echo `date`\n* **x**\n1. one\n### not a heading\n"
        );
        for tag in ["<ul>", "<ol", "<strong>", "<code>", "<h3>"] {
            assert!(!out.contains(tag), "{tag} in {out}");
        }
    }

    #[test]
    fn test_text_around_code_block_is_still_rendered() {
        let out = render("**Run:**\n```sh\n- x\n```\n- done");
        assert!(out.starts_with("<strong>Run:</strong>\n<div class=\"code-container\">"));
        assert!(out.ends_with("</div>\n<ul><li>done</li></ul>"));
        assert_eq!(code_region(&out), "- x\n");
    }

    #[test]
    fn test_numbered_start_follows_first_line() {
        let out = render("Plan:\n3. c\n1. a\n2. b");
        assert!(out.contains(r#"<ol start="3"><li>c</li><li>a</li><li>b</li></ol>"#));
    }

    #[test]
    fn test_bullets_render_as_separate_lists() {
        assert_eq!(
            render("* a\n* b"),
            "<ul><li>a</li></ul>\n<ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_dash_line_after_bullet_line() {
        assert_eq!(
            render("* a\n- b"),
            "<ul><li>a</li></ul>\n<ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_dash_line_after_numbered_list() {
        assert_eq!(
            render("1. a\n- b"),
            "<ol start=\"1\"><li>a</li></ol>\n<ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_full_message() {
        let message = concat!(
            "### Summary\n",
            "Use **cargo** with `--release`.\n",
            "#### Steps\n",
            "1. build\n",
            "2. run\n",
            "- note\n",
        );
        assert_eq!(
            render(message),
            concat!(
                "<h3>Summary</h3>\n",
                "Use <strong>cargo</strong> with <code>--release</code>.\n",
                "<h4>Steps</h4>\n",
                "<ol start=\"1\"><li>build</li><li>run</li></ol>\n",
                "<ul><li>note</li></ul>\n",
            )
        );
    }

    #[test]
    fn test_later_rules_see_earlier_output() {
        // Bold inside a heading is rewritten after the heading pass.
        assert_eq!(
            render("### **Important**"),
            "<h3><strong>Important</strong></h3>"
        );
    }
}
