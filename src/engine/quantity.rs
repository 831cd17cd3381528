//! Quantity extraction
//!
//! Parses serving multipliers from free text: a deliberately coarse
//! global count (the first integer token, catching patterns like
//! "3 eggs") and per-keyword overrides (a number immediately preceding a
//! specific keyword). Malformed or missing quantities never error; they
//! fall back to a single serving.

/// Characters that belong to a token ('.' kept so "1.5" stays whole)
fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '.'
}

/// Tokens with their byte offsets, in text order
fn tokens(text: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        if is_token_char(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            out.push((s, &text[s..i]));
        }
    }
    if let Some(s) = start {
        out.push((s, &text[s..]));
    }
    out
}

/// Parse a multiplier token: "2" -> 2.0, "2x" -> 2.0, "1.5" -> 1.5
///
/// Negative or non-numeric tokens parse as nothing; zero parses as zero
/// and is excluded later by the resolver.
fn parse_multiplier(token: &str) -> Option<f64> {
    let t = token.trim_matches('.');
    let t = t.strip_suffix('x').unwrap_or(t);
    if t.is_empty() || !t.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parse an integer count token: "3" or "3x"
fn parse_integer(token: &str) -> Option<f64> {
    let t = token.trim_matches('.');
    let t = t.strip_suffix('x').unwrap_or(t);
    if t.is_empty() || !t.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    t.parse::<f64>().ok()
}

/// Byte offsets of word-boundary occurrences of `needle` in `text`
///
/// Both strings are expected to be lower-cased already. A boundary means
/// the characters on either side of the occurrence are not alphanumeric,
/// so "egg" does not match inside "eggs" or "eggplant".
pub(crate) fn word_occurrences(text: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    for (pos, _) in text.match_indices(needle) {
        let before_ok = text[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[pos + needle.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            out.push(pos);
        }
    }
    out
}

/// True when `needle` occurs in `text` on word boundaries
pub(crate) fn contains_word(text: &str, needle: &str) -> bool {
    !word_occurrences(text, needle).is_empty()
}

/// The token ending just before byte `pos`, with its start offset
fn token_before(text: &str, pos: usize) -> Option<(usize, &str)> {
    let mut end = None;
    for (i, c) in text[..pos].char_indices().rev() {
        if is_token_char(c) {
            end = Some(i + c.len_utf8());
            break;
        }
    }
    let end = end?;
    let mut start = 0;
    for (i, c) in text[..end].char_indices().rev() {
        if !is_token_char(c) {
            start = i + c.len_utf8();
            break;
        }
    }
    Some((start, &text[start..end]))
}

/// Extract the global serving multiplier from text
///
/// The first integer token anywhere in the text wins, whether written as
/// "3" or "3x"; defaults to 1 when no integer is present.
pub fn extract_global_multiplier(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    tokens(&lowered)
        .iter()
        .find_map(|(_, t)| parse_integer(t))
        .unwrap_or(1.0)
}

/// Extract a keyword-local multiplier: a number immediately preceding a
/// word-boundary occurrence of `keyword`
///
/// An intervening "x" token is tolerated ("2 x banana"). Returns the
/// first occurrence that carries a number.
pub fn extract_keyword_multiplier(text: &str, keyword: &str) -> Option<f64> {
    let lowered = text.to_lowercase();
    let key = keyword.to_lowercase();
    for pos in word_occurrences(&lowered, &key) {
        let Some((start, token)) = token_before(&lowered, pos) else {
            continue;
        };
        if token == "x" {
            if let Some((_, prev)) = token_before(&lowered, start) {
                if let Some(v) = parse_multiplier(prev) {
                    return Some(v);
                }
            }
            continue;
        }
        if let Some(v) = parse_multiplier(token) {
            return Some(v);
        }
    }
    None
}

/// Global multiplier ignoring counts attached to recognized keywords
///
/// A number that immediately precedes one of `keywords` belongs to that
/// keyword alone and must not leak into other foods in the same text:
/// "3 bananas and apple" gives banana 3 and apple 1. Expects lower-cased
/// text and keywords.
pub(crate) fn unattached_global_multiplier(text: &str, keywords: &[&str]) -> f64 {
    let mut attached: Vec<usize> = Vec::new();
    for key in keywords {
        for pos in word_occurrences(text, key) {
            if let Some((start, token)) = token_before(text, pos) {
                attached.push(start);
                if token == "x" {
                    if let Some((prev_start, _)) = token_before(text, start) {
                        attached.push(prev_start);
                    }
                }
            }
        }
    }
    tokens(text)
        .iter()
        .filter(|(start, _)| !attached.contains(start))
        .find_map(|(_, t)| parse_integer(t))
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_multiplier_first_integer() {
        assert_eq!(extract_global_multiplier("3 eggs and toast"), 3.0);
        assert_eq!(extract_global_multiplier("had 2x banana today"), 2.0);
        assert_eq!(extract_global_multiplier("3 x eggs"), 3.0);
    }

    #[test]
    fn test_global_multiplier_defaults_to_one() {
        assert_eq!(extract_global_multiplier("banana and oatmeal"), 1.0);
        assert_eq!(extract_global_multiplier(""), 1.0);
    }

    #[test]
    fn test_global_multiplier_ignores_decimals() {
        // The global heuristic only picks up integer counts
        assert_eq!(extract_global_multiplier("1.5 servings of rice"), 1.0);
    }

    #[test]
    fn test_keyword_multiplier_preceding_number() {
        assert_eq!(extract_keyword_multiplier("I ate 2 banana today", "banana"), Some(2.0));
        assert_eq!(extract_keyword_multiplier("2x banana", "banana"), Some(2.0));
        assert_eq!(extract_keyword_multiplier("2 x banana", "banana"), Some(2.0));
        assert_eq!(extract_keyword_multiplier("1.5 banana", "banana"), Some(1.5));
    }

    #[test]
    fn test_keyword_multiplier_absent() {
        assert_eq!(extract_keyword_multiplier("a banana for lunch", "banana"), None);
        assert_eq!(extract_keyword_multiplier("no fruit at all", "banana"), None);
    }

    #[test]
    fn test_keyword_multiplier_needs_word_boundary() {
        // "egg" must not match inside "eggs"
        assert_eq!(extract_keyword_multiplier("2 eggs", "egg"), None);
        assert_eq!(extract_keyword_multiplier("2 eggs", "eggs"), Some(2.0));
    }

    #[test]
    fn test_keyword_multiplier_zero_is_parsed() {
        // Zero parses; the resolver decides to drop the match
        assert_eq!(extract_keyword_multiplier("0 banana", "banana"), Some(0.0));
    }

    #[test]
    fn test_unattached_global_skips_keyword_counts() {
        assert_eq!(
            unattached_global_multiplier("3 bananas and apple", &["bananas", "apple"]),
            1.0
        );
        assert_eq!(
            unattached_global_multiplier("2 scrambled eggs", &["eggs"]),
            2.0
        );
        assert_eq!(
            unattached_global_multiplier("just oatmeal", &["oatmeal"]),
            1.0
        );
    }

    #[test]
    fn test_word_occurrences_boundaries() {
        assert_eq!(word_occurrences("eggs and egg", "egg"), vec![9]);
        assert!(word_occurrences("eggplant parmesan", "egg").is_empty());
        assert_eq!(word_occurrences("peanut butter toast", "peanut butter"), vec![0]);
    }
}
