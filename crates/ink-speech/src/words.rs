const BELOW_20: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Échelles décroissantes ; `u64::MAX` tient sous le quintillion × 1000.
const SCALES: [(u64, &str); 7] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
    (1, ""),
];

/// Words for `0 < n < 1000`.
fn below_thousand(n: u64) -> String {
    let hundreds = (n / 100) as usize;
    let rest = (n % 100) as usize;

    let mut out = String::new();
    if hundreds > 0 {
        out.push_str(BELOW_20[hundreds]);
        out.push_str(" hundred");
        if rest > 0 {
            out.push(' ');
        }
    }
    if rest >= 20 {
        out.push_str(TENS[rest / 10]);
        if rest % 10 > 0 {
            out.push('-');
            out.push_str(BELOW_20[rest % 10]);
        }
    } else if rest > 0 {
        out.push_str(BELOW_20[rest]);
    }
    out
}

/// Nombre en toutes lettres (anglais, sans « and »).
///
/// # Example
/// ```
/// use ink_speech::words::number_to_words;
/// assert_eq!(number_to_words(0), "zero");
/// assert_eq!(number_to_words(1408), "one thousand four hundred eight");
/// assert_eq!(number_to_words(-21), "minus twenty-one");
/// ```
#[must_use]
pub fn number_to_words(n: i64) -> String {
    if n == 0 {
        return "zero".to_string();
    }

    let mut rest = n.unsigned_abs();
    let mut parts: Vec<String> = Vec::new();
    for (value, name) in SCALES {
        if rest >= value {
            let chunk = rest / value;
            rest %= value;
            let mut part = below_thousand(chunk);
            if !name.is_empty() {
                part.push(' ');
                part.push_str(name);
            }
            parts.push(part);
        }
    }

    let words = parts.join(" ");
    if n < 0 { format!("minus {words}") } else { words }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        assert_eq!(number_to_words(1), "one");
        assert_eq!(number_to_words(13), "thirteen");
        assert_eq!(number_to_words(20), "twenty");
        assert_eq!(number_to_words(99), "ninety-nine");
    }

    #[test]
    fn hundreds() {
        assert_eq!(number_to_words(300), "three hundred");
        assert_eq!(number_to_words(101), "one hundred one");
        assert_eq!(number_to_words(999), "nine hundred ninety-nine");
    }

    #[test]
    fn empty_chunks_are_skipped() {
        assert_eq!(number_to_words(1_000_000), "one million");
        assert_eq!(
            number_to_words(2_000_017),
            "two million seventeen"
        );
    }

    #[test]
    fn extremes_do_not_overflow() {
        assert_eq!(
            number_to_words(i64::MAX),
            "nine quintillion two hundred twenty-three quadrillion three hundred seventy-two \
             trillion thirty-six billion eight hundred fifty-four million seven hundred \
             seventy-five thousand eight hundred seven"
        );
        assert!(number_to_words(i64::MIN).starts_with("minus nine quintillion"));
        assert!(number_to_words(i64::MIN).ends_with("eight hundred eight"));
    }
}
