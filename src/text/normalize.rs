use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Returns true for chars in the Unicode punctuation (P*) or separator (Z*) categories.
#[inline]
fn is_punctuation_or_separator(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Comparison form of a name or query.
///
/// Drops punctuation and separators, uppercases what remains and recomposes
/// the result to NFC so that precomposed and combining-accent spellings of the
/// same name compare equal. Idempotent.
///
/// ```
/// use place_autocomplete::text::normalize;
///
/// assert_eq!(normalize("St. John's"), "STJOHNS");
/// assert_eq!(normalize("l'Ancienne-Lorette"), "LANCIENNELORETTE");
/// ```
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !is_punctuation_or_separator(*c))
        .collect();

    stripped.to_uppercase().nfc().collect()
}
