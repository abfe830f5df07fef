// Name normalization for cross-source player matching.
//
// The player directory and the ranking export spell names differently
// ("Patrick Mahomes II" vs "Patrick Mahomes", "A.J. Brown" vs "AJ Brown").
// Both sides are reduced to the same lossy key before joining. Collisions
// between distinct real people are possible and accepted.

/// Generational suffixes dropped from names. Matched as whole words only,
/// never as substrings ("Mariota" keeps its "ii").
const SUFFIX_WORDS: &[&str] = &["jr", "sr", "ii", "iii", "iv"];

/// Reduce a raw name to its normalized join key.
///
/// Steps, in order: lowercase, drop every character that is not an ASCII
/// lowercase letter or whitespace (punctuation, digits, accent artifacts),
/// drop standalone suffix words, collapse whitespace runs, trim.
///
/// Total over all inputs; the empty string is a legal but unmatchable key.
/// Idempotent: normalizing a normalized key is a no-op.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    stripped
        .split_whitespace()
        .filter(|word| !SUFFIX_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Case folding --

    #[test]
    fn case_insensitive() {
        assert_eq!(normalize("Patrick Mahomes"), normalize("PATRICK MAHOMES"));
        assert_eq!(normalize("Patrick Mahomes"), "patrick mahomes");
    }

    // -- Punctuation and digits stripped --

    #[test]
    fn punctuation_and_digits_stripped() {
        assert_eq!(normalize("A.J. Brown"), "aj brown");
        assert_eq!(normalize("D'Andre Swift"), "dandre swift");
        assert_eq!(normalize("San Francisco 49ers"), "san francisco ers");
    }

    // -- Suffix words removed at word boundaries only --

    #[test]
    fn suffix_removed_as_whole_word() {
        assert_eq!(normalize("Odell Beckham Jr"), "odell beckham");
        assert_eq!(normalize("Odell Beckham Jr."), "odell beckham");
        assert_eq!(normalize("Patrick Mahomes II"), "patrick mahomes");
        assert_eq!(normalize("Robert Griffin III"), "robert griffin");
    }

    #[test]
    fn suffix_not_stripped_inside_words() {
        // "Mariota" contains "ii"-free text but other names embed suffix
        // letters; none of these may lose characters.
        assert_eq!(normalize("Marcus Mariota"), "marcus mariota");
        assert_eq!(normalize("Iiro Pakarinen"), "iiro pakarinen");
        assert_eq!(normalize("Srinivas"), "srinivas");
    }

    // -- Whitespace handling --

    #[test]
    fn whitespace_collapsed_and_trimmed() {
        assert_eq!(normalize("  Justin   Jefferson  "), "justin jefferson");
        assert_eq!(normalize("Justin\tJefferson\n"), "justin jefferson");
    }

    // -- Degenerate inputs --

    #[test]
    fn empty_and_symbol_only_inputs_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("49!?"), "");
        assert_eq!(normalize("Jr. III"), "");
    }

    // -- Idempotence --

    #[test]
    fn idempotent() {
        for raw in [
            "Patrick Mahomes II",
            "A.J. Brown",
            "  ODELL   Beckham  Jr ",
            "",
            "San Francisco 49ers",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
