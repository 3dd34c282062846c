//! XML/HTML character-reference decoding for archive text fields.
//!
//! Author names and entry titles in legacy archive files carry
//! references like `&Phi;`, `&#8453;`, or `&#x3b1;`. This module
//! decodes them to the corresponding characters. Anything it cannot
//! decode is left exactly as written.

/// Named entities that occur in archive text: the XML core five, the
/// Greek alphabet, and common Latin-1/typographic references.
///
/// Sorted by name for binary search. Names are case-sensitive.
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("Alpha", '\u{0391}'),
    ("Aring", '\u{00C5}'),
    ("Auml", '\u{00C4}'),
    ("Beta", '\u{0392}'),
    ("Chi", '\u{03A7}'),
    ("Delta", '\u{0394}'),
    ("Epsilon", '\u{0395}'),
    ("Eta", '\u{0397}'),
    ("Gamma", '\u{0393}'),
    ("Iota", '\u{0399}'),
    ("Kappa", '\u{039A}'),
    ("Lambda", '\u{039B}'),
    ("Mu", '\u{039C}'),
    ("Nu", '\u{039D}'),
    ("Omega", '\u{03A9}'),
    ("Omicron", '\u{039F}'),
    ("Ouml", '\u{00D6}'),
    ("Phi", '\u{03A6}'),
    ("Pi", '\u{03A0}'),
    ("Prime", '\u{2033}'),
    ("Psi", '\u{03A8}'),
    ("Rho", '\u{03A1}'),
    ("Sigma", '\u{03A3}'),
    ("Tau", '\u{03A4}'),
    ("Theta", '\u{0398}'),
    ("Upsilon", '\u{03A5}'),
    ("Uuml", '\u{00DC}'),
    ("Xi", '\u{039E}'),
    ("Zeta", '\u{0396}'),
    ("alpha", '\u{03B1}'),
    ("amp", '&'),
    ("apos", '\''),
    ("aring", '\u{00E5}'),
    ("auml", '\u{00E4}'),
    ("beta", '\u{03B2}'),
    ("ccedil", '\u{00E7}'),
    ("chi", '\u{03C7}'),
    ("deg", '\u{00B0}'),
    ("delta", '\u{03B4}'),
    ("divide", '\u{00F7}'),
    ("eacute", '\u{00E9}'),
    ("egrave", '\u{00E8}'),
    ("epsilon", '\u{03B5}'),
    ("eta", '\u{03B7}'),
    ("gamma", '\u{03B3}'),
    ("gt", '>'),
    ("hellip", '\u{2026}'),
    ("iota", '\u{03B9}'),
    ("kappa", '\u{03BA}'),
    ("lambda", '\u{03BB}'),
    ("larr", '\u{2190}'),
    ("ldquo", '\u{201C}'),
    ("lsquo", '\u{2018}'),
    ("lt", '<'),
    ("mdash", '\u{2014}'),
    ("micro", '\u{00B5}'),
    ("middot", '\u{00B7}'),
    ("mu", '\u{03BC}'),
    ("nbsp", '\u{00A0}'),
    ("ndash", '\u{2013}'),
    ("ntilde", '\u{00F1}'),
    ("nu", '\u{03BD}'),
    ("omega", '\u{03C9}'),
    ("omicron", '\u{03BF}'),
    ("ouml", '\u{00F6}'),
    ("phi", '\u{03C6}'),
    ("pi", '\u{03C0}'),
    ("plusmn", '\u{00B1}'),
    ("pound", '\u{00A3}'),
    ("prime", '\u{2032}'),
    ("psi", '\u{03C8}'),
    ("quot", '"'),
    ("rarr", '\u{2192}'),
    ("rdquo", '\u{201D}'),
    ("rho", '\u{03C1}'),
    ("rsquo", '\u{2019}'),
    ("sigma", '\u{03C3}'),
    ("sigmaf", '\u{03C2}'),
    ("tau", '\u{03C4}'),
    ("theta", '\u{03B8}'),
    ("times", '\u{00D7}'),
    ("upsilon", '\u{03C5}'),
    ("uuml", '\u{00FC}'),
    ("xi", '\u{03BE}'),
    ("zeta", '\u{03B6}'),
];

// References longer than this are not worth chasing a terminator for
const MAX_REF_LEN: usize = 40;

/// Decodes `&name;`, `&#NNN;`, and `&#xHHHH;` references in `input`.
///
/// Unknown names, out-of-range code points, and unterminated
/// references pass through verbatim; the function never fails.
pub fn unescape_char_refs(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let semi = tail[1..].find(';').filter(|&i| i <= MAX_REF_LEN);
        match semi.and_then(|i| decode_body(&tail[1..1 + i]).map(|c| (c, i))) {
            Some((decoded, body_len)) => {
                out.push(decoded);
                // '&' + body + ';'
                rest = &tail[body_len + 2..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes the text between `&` and `;`.
fn decode_body(body: &str) -> Option<char> {
    if let Some(num) = body.strip_prefix('#') {
        let code = if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            u32::from_str_radix(hex, 16).ok()?
        } else {
            if num.is_empty() || !num.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            num.parse::<u32>().ok()?
        };
        char::from_u32(code)
    } else {
        let idx = NAMED_ENTITIES
            .binary_search_by_key(&body, |&(name, _)| name)
            .ok()?;
        Some(NAMED_ENTITIES[idx].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_table_is_sorted() {
        for pair in NAMED_ENTITIES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_core_xml_entities() {
        assert_eq!(unescape_char_refs("&lt;b&gt;"), "<b>");
        assert_eq!(unescape_char_refs("A &amp; B"), "A & B");
        assert_eq!(unescape_char_refs("&quot;title&quot;"), "\"title\"");
        assert_eq!(unescape_char_refs("it&apos;s"), "it's");
    }

    #[test]
    fn test_greek_letters() {
        assert_eq!(unescape_char_refs("&Phi;/&Psi; angles"), "\u{03A6}/\u{03A8} angles");
        assert_eq!(unescape_char_refs("&alpha;-helix"), "\u{03B1}-helix");
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(unescape_char_refs("&#163;"), "\u{00A3}");
        assert_eq!(unescape_char_refs("&#xa3;"), "\u{00A3}");
        assert_eq!(unescape_char_refs("&#X3B1;"), "\u{03B1}");
        assert_eq!(unescape_char_refs("&#8453;"), "\u{2105}");
        // Astral plane
        assert_eq!(unescape_char_refs("&#120171;"), "\u{1D56B}");
    }

    #[test]
    fn test_unknown_and_malformed_pass_through() {
        assert_eq!(unescape_char_refs("&bogus;"), "&bogus;");
        assert_eq!(unescape_char_refs("&#;"), "&#;");
        assert_eq!(unescape_char_refs("&#xzz;"), "&#xzz;");
        // Surrogate code point is not a char
        assert_eq!(unescape_char_refs("&#xD800;"), "&#xD800;");
        // No terminator
        assert_eq!(unescape_char_refs("R&D"), "R&D");
        assert_eq!(unescape_char_refs("&amp"), "&amp");
        // Case matters for names
        assert_eq!(unescape_char_refs("&AMP;"), "&AMP;");
    }

    #[test]
    fn test_adjacent_and_nested_ampersands() {
        assert_eq!(unescape_char_refs("&amp;&lt;"), "&<");
        assert_eq!(unescape_char_refs("&&amp;"), "&&");
        assert_eq!(unescape_char_refs("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(unescape_char_refs(""), "");
        assert_eq!(unescape_char_refs("no references here"), "no references here");
    }
}
