//! Name normalization and display helpers.
//!
//! Normalized names are the canonical lookup keys used everywhere in the
//! pipeline: two raw spellings refer to the same species or member iff they
//! normalize equal. All functions here are pure and total.

/// Prettify exceptions: species whose display form carries punctuation that
/// normalization destroys. Both the dashed and fully stripped spellings map
/// to the same display string.
const SPECIES_DISPLAY_EXCEPTIONS: &[(&str, &str)] = &[
    ("nidoran-f", "Nidoran♀"),
    ("nidoranf", "Nidoran♀"),
    ("nidoran-m", "Nidoran♂"),
    ("nidoranm", "Nidoran♂"),
    ("mr.mime", "Mr. Mime"),
    ("mrmime", "Mr. Mime"),
    ("mime-jr", "Mime Jr."),
    ("mimejr", "Mime Jr."),
    ("type-null", "Type: Null"),
    ("typenull", "Type: Null"),
    ("porygon-z", "Porygon-Z"),
    ("porygonz", "Porygon-Z"),
];

/// Normalize a raw species label into its canonical key.
///
/// Lowercases, maps the gender symbols to `-f`/`-m`, and strips whitespace,
/// periods, and apostrophes. Empty input yields the empty string.
pub fn normalize_species(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    for ch in raw.to_lowercase().chars() {
        match ch {
            '♀' => key.push_str("-f"),
            '♂' => key.push_str("-m"),
            '.' | '\'' | '’' => {}
            c if c.is_whitespace() => {}
            c => key.push(c),
        }
    }
    key
}

/// Normalize a raw member name into its canonical key: trimmed, lowercased,
/// all whitespace removed.
pub fn normalize_member(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Reverse species normalization for display.
///
/// Known punctuation-bearing species come from a fixed exception table;
/// everything else gets dashes replaced by spaces and each word title-cased.
pub fn prettify_species(key: &str) -> String {
    if key.is_empty() {
        return String::new();
    }

    let raw = key.to_lowercase();
    if let Some((_, display)) = SPECIES_DISPLAY_EXCEPTIONS
        .iter()
        .find(|(k, _)| *k == raw)
    {
        return (*display).to_string();
    }

    title_case(&raw.replace('-', " "))
}

/// Title-case a member name for display.
pub fn prettify_member(name: &str) -> String {
    title_case(name)
}

/// Uppercase the first letter of every word.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
