/// Lettres séparées par `sep`, blancs ignorés.
///
/// # Example
/// ```
/// use ink_speech::spell::letters_separated;
/// assert_eq!(letters_separated("Morizo", " ", true), "M O R I Z O");
/// assert_eq!(letters_separated("a b", "-", false), "a-b");
/// ```
#[must_use]
pub fn letters_separated(word: &str, sep: &str, uppercase: bool) -> String {
    let mut out = String::with_capacity(word.len() * (1 + sep.len()));
    for ch in word.chars().filter(|c| !c.is_whitespace()) {
        if !out.is_empty() {
            out.push_str(sep);
        }
        if uppercase {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Spelling laid out for a speech engine: capitals separated by `", "` so
/// each letter is read on its own.
///
/// # Example
/// ```
/// use ink_speech::spell::spelled_for_speech;
/// assert_eq!(spelled_for_speech("Morizo"), "M, O, R, I, Z, O");
/// ```
#[must_use]
pub fn spelled_for_speech(word: &str) -> String {
    letters_separated(word, ", ", true)
}
