//! Conversion between user-supplied names, lookup keys and display names.

/// Canonical lookup key for a name: every character lowercased.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// Display form of a key: the first character and every character following
/// a space are uppercased, the rest is left alone.
pub fn prettify(key: &str) -> String {
    let mut pretty = String::with_capacity(key.len());
    let mut word_start = true;
    for c in key.chars() {
        if word_start {
            pretty.extend(c.to_uppercase());
        } else {
            pretty.push(c);
        }
        word_start = c == ' ';
    }
    pretty
}
