//! Shared utility functions.

/// Longest prefix of `s` that fits in `max_bytes` and ends on a UTF-8
/// character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    let end = (0..=max_bytes.min(s.len()))
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    &s[..end]
}

/// Single-line preview of user or model text for log output.
///
/// Newlines are folded into `⏎` and the result is cut to `max_bytes`,
/// with `…` appended when anything was dropped.
pub fn log_preview(s: &str, max_bytes: usize) -> String {
    let cut = truncate_str(s, max_bytes);
    let mut preview = cut.replace("\r\n", "⏎").replace('\n', "⏎");
    if cut.len() < s.len() {
        preview.push('…');
    }
    preview
}
