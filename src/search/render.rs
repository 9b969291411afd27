//! HTML rendering of search hits
//!
//! Highlighting works on the raw query text, independent of the stems used
//! for scoring.

use super::schema::MatchResult;

/// Wrap the first space-separated word of `line` that contains `query`
/// (case-insensitive) in `<b>` tags.
pub fn make_bold(line: &str, query: &str) -> String {
    let query = query.to_lowercase();
    let mut highlighted = false;
    line.split(' ')
        .map(|word| {
            if !highlighted && word.to_lowercase().contains(&query) {
                highlighted = true;
                format!("<b>{}</b>", word)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wrap every exact (case-sensitive) occurrence of `query` in `<b>` tags
pub fn make_bold_exact(line: &str, query: &str) -> String {
    if query.is_empty() {
        return line.to_string();
    }
    line.replace(query, &format!("<b>{}</b>", query))
}

impl MatchResult {
    /// Context window joined by single spaces: before, hit, after
    pub fn context_text(&self) -> String {
        format!(
            "{} {} {}",
            self.context_before, self.highlighted_text, self.context_after
        )
    }

    /// Render one result card
    pub fn to_html(&self) -> String {
        format!(
            r#"<figure class="result">
        <div class="result__content">
            <div class="result__title">
                <h2 class="result__heading">{} {}</h2>
                <div class="result__tag result__tag--1">#{}</div>
                <div class="result__tag result__tag--2">#{}</div>
            </div>
            <p class="result__description">{}</p>
        </div>
        <div class="result__work">
            RANK {}
        </div>
    </figure>"#,
            self.play_name,
            self.line_number,
            self.line_type,
            self.speaker,
            self.context_text(),
            self.score
        )
    }
}

/// Concatenate result cards in the given order
pub fn render(hits: &[MatchResult]) -> String {
    hits.iter().map(MatchResult::to_html).collect()
}
