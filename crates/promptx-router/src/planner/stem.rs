//! Light suffix stripping for tag matching.

/// Suffixes removed by [`stem`], longest first.
const SUFFIXES: &[&str] = &[
    "izations", "ization", "isation", "ations", "ation", "izers", "izer", "izing", "ising", "ized", "ised", "izes",
    "ises", "ize", "ise", "ities", "ity", "ness", "ings", "ing", "ies", "ied", "ers", "er", "ed", "es", "ly", "y",
    "s", "e",
];

/// Shortest stem a suffix may leave behind.
const MIN_STEM_CHARS: usize = 3;

/// Shortest stems that may match by prefix.
const MIN_PREFIX_CHARS: usize = 5;

/// Strips the first (longest) matching suffix, keeping at least three
/// characters.
///
/// `summarize`, `summary` and `summarization` all reduce to `summar`.
pub fn stem(word: &str) -> &str {
    for suffix in SUFFIXES {
        if let Some(base) = word.strip_suffix(suffix) {
            if base.chars().count() >= MIN_STEM_CHARS {
                return base;
            }
        }
    }
    word
}

/// Whether two words share a stem.
///
/// Stems match when equal, or when both are at least five characters and
/// one starts with the other (`improv` / `improvement`).
pub fn stems_match(a: &str, b: &str) -> bool {
    let (a, b) = (stem(a), stem(b));
    if a == b {
        return true;
    }
    a.chars().count() >= MIN_PREFIX_CHARS
        && b.chars().count() >= MIN_PREFIX_CHARS
        && (a.starts_with(b) || b.starts_with(a))
}
