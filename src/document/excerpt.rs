use once_cell::sync::Lazy;
use regex::Regex;

/// Word limit for summaries derived from the body.
pub const DEFAULT_EXCERPT_WORDS: usize = 40;

const ELLIPSIS: &str = "...";

// A word starts with a word character and may continue through apostrophes
// and hyphens ("don't", "well-known").
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w[\w'-]*").expect("Invalid excerpt word regex"));

/// First `max_words` words of `body` joined by single spaces, with `...`
/// appended when the body has more words than that.
///
/// Works on the raw body text, so Markdown punctuation is dropped but link
/// targets and code are counted as words.
pub fn make_excerpt(body: &str, max_words: usize) -> String {
    let mut words = WORD_PATTERN.find_iter(body).map(|m| m.as_str());

    let taken: Vec<&str> = words.by_ref().take(max_words).collect();
    let mut excerpt = taken.join(" ");

    if words.next().is_some() {
        excerpt.push_str(ELLIPSIS);
    }

    excerpt
}
