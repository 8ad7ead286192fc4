//! Text cleanup for stored fields.
//!
//! Raw post bodies arrive with markdown line breaks, tabs and stray control
//! whitespace; everything stored in the output table goes through
//! `clean_text` first.

/// Collapse whitespace and truncate for display storage.
///
/// Carriage returns, line feeds and tabs become single spaces, consecutive
/// whitespace collapses to one space, and the result is trimmed. Anything
/// longer than `max_len` characters is cut there with a `"..."` marker
/// appended, so the returned length is at most `max_len + 3`. Total over any
/// input; empty in, empty out.
pub fn clean_text(text: &str, max_len: usize) -> String {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.chars().count() > max_len {
        let truncated: String = cleaned.chars().take(max_len).collect();
        return format!("{}...", truncated);
    }
    cleaned
}
