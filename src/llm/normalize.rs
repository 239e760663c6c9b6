//! Cosmetic cleanup of model output for the plain-text result box.

/// Markdown markers removed from model output, applied in order.
const MARKERS: &[&str] = &["**", "##", "###"];

/// Removes bold and heading markers and left-trims every line.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut cleaned = text.to_string();
    for marker in MARKERS {
        cleaned = cleaned.replace(marker, "");
    }

    cleaned
        .split('\n')
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("\n")
}
