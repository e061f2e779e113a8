/// Split a leading heading line off as the document title.
///
/// If the first line is a heading of any depth (a `#` run plus a
/// space), returns its text (markers stripped, trimmed) and the rest of
/// the input with surrounding whitespace trimmed. Otherwise returns no
/// title and the input unchanged. The converter never calls this — it
/// is the caller-side step that separates the title field from the
/// body before conversion.
pub fn split_title(content: &str) -> (Option<String>, &str) {
    let first_line = content.split('\n').next().unwrap_or("");
    match heading_text(first_line) {
        Some(title) => {
            let body = content
                .split_once('\n')
                .map(|(_, rest)| rest.trim())
                .unwrap_or("");
            (Some(title.trim().to_string()), body)
        }
        None => (None, content),
    }
}

/// Text after a leading `#` run and a space, if the line has both.
/// Unlike block headings, the title line accepts any marker depth.
fn heading_text(line: &str) -> Option<&str> {
    let stripped = line.trim_start_matches('#');
    if stripped.len() == line.len() {
        return None;
    }
    stripped.strip_prefix(' ')
}
