use regex::RegexBuilder;

/// Wraps case-insensitive matches of `term` in `<mark>` tags. The term is
/// treated as a regular expression; a pattern that fails to compile
/// degrades to the untouched input instead of erroring.
#[must_use]
pub fn highlight_terms(text: &str, term: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }
    match RegexBuilder::new(term).case_insensitive(true).build() {
        Ok(pattern) => pattern.replace_all(text, "<mark>$0</mark>").into_owned(),
        Err(_) => text.to_string(),
    }
}
