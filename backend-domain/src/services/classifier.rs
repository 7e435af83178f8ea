// QR payload classification
// Ordered (predicate, extractor) rules; the first matching rule decides the
// format, and the order is load-bearing: a payload starting with "http" is
// a URL even when it also contains "evento:".

use crate::value_objects::PayloadFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Format recognized and an identifier token extracted.
    Id { format: PayloadFormat, id: String },
    /// The format's prefix/shape matched but extraction failed.
    Malformed { format: PayloadFormat },
    Unrecognized,
}

struct FormatRule {
    format: PayloadFormat,
    matches: fn(&str) -> bool,
    extract: fn(&str) -> Option<String>,
}

const RULES: &[FormatRule] = &[
    FormatRule {
        format: PayloadFormat::UrlWithId,
        matches: matches_url,
        extract: extract_url_id,
    },
    FormatRule {
        format: PayloadFormat::PrefixedId,
        matches: matches_prefixed,
        extract: extract_prefixed_id,
    },
    FormatRule {
        format: PayloadFormat::ShortCode,
        matches: matches_short_code,
        extract: extract_short_code_id,
    },
    FormatRule {
        format: PayloadFormat::DirectId,
        matches: matches_direct,
        extract: extract_direct_id,
    },
];

pub fn classify(payload: &str) -> Classified {
    for rule in RULES {
        if (rule.matches)(payload) {
            return match (rule.extract)(payload) {
                Some(id) => Classified::Id {
                    format: rule.format,
                    id,
                },
                None => Classified::Malformed {
                    format: rule.format,
                },
            };
        }
    }
    Classified::Unrecognized
}

fn matches_url(payload: &str) -> bool {
    // Literal scheme prefix, case-sensitive.
    payload.starts_with("http")
}

fn extract_url_id(payload: &str) -> Option<String> {
    let rest = payload.split_once("://")?.1;
    // Everything after the authority, with query/fragment stripped.
    let path = rest.find('/').map(|idx| &rest[idx + 1..])?;
    let path = path
        .split(|ch| ch == '?' || ch == '#')
        .next()
        .unwrap_or_default();
    path.split('/')
        .find(|segment| is_digits(segment))
        .map(str::to_string)
}

fn matches_prefixed(payload: &str) -> bool {
    payload.contains("evento:")
}

fn extract_prefixed_id(payload: &str) -> Option<String> {
    payload
        .split(':')
        .nth(1)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn matches_short_code(payload: &str) -> bool {
    let Some(prefix) = payload.get(..3) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case("EV-") {
        return false;
    }
    is_digits(&payload[3..])
}

fn extract_short_code_id(payload: &str) -> Option<String> {
    payload
        .split('-')
        .nth(1)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn matches_direct(payload: &str) -> bool {
    is_digits(payload)
}

fn extract_direct_id(payload: &str) -> Option<String> {
    Some(payload.to_string())
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_id(payload: &str, format: PayloadFormat, id: &str) {
        assert_eq!(
            classify(payload),
            Classified::Id {
                format,
                id: id.to_string()
            },
            "payload: {payload}"
        );
    }

    #[test]
    fn url_with_numeric_segment() {
        expect_id("https://x.test/eventos/123", PayloadFormat::UrlWithId, "123");
        expect_id("http://x.test/a/7/b", PayloadFormat::UrlWithId, "7");
        expect_id("https://x.test/eventos/99?ref=qr", PayloadFormat::UrlWithId, "99");
    }

    #[test]
    fn url_without_numeric_segment_is_malformed() {
        assert_eq!(
            classify("https://x.test/eventos/abc"),
            Classified::Malformed {
                format: PayloadFormat::UrlWithId
            }
        );
        // Starts with "http" but is not a parseable absolute URL.
        assert_eq!(
            classify("httpgarbage"),
            Classified::Malformed {
                format: PayloadFormat::UrlWithId
            }
        );
    }

    #[test]
    fn prefixed_id_extracts_second_component() {
        expect_id("evento:42", PayloadFormat::PrefixedId, "42");
        // No numeric validation at this stage.
        expect_id("evento:abc", PayloadFormat::PrefixedId, "abc");
    }

    #[test]
    fn prefixed_id_with_empty_token_is_malformed() {
        assert_eq!(
            classify("evento:"),
            Classified::Malformed {
                format: PayloadFormat::PrefixedId
            }
        );
    }

    #[test]
    fn short_code_is_case_insensitive() {
        expect_id("EV-7", PayloadFormat::ShortCode, "7");
        expect_id("ev-7", PayloadFormat::ShortCode, "7");
        expect_id("Ev-123", PayloadFormat::ShortCode, "123");
    }

    #[test]
    fn short_code_requires_digits() {
        assert_eq!(classify("EV-abc"), Classified::Unrecognized);
        assert_eq!(classify("EV-"), Classified::Unrecognized);
    }

    #[test]
    fn direct_id_is_whole_payload() {
        expect_id("123", PayloadFormat::DirectId, "123");
    }

    #[test]
    fn garbage_is_unrecognized() {
        assert_eq!(classify("garbage!!"), Classified::Unrecognized);
        assert_eq!(classify(""), Classified::Unrecognized);
        assert_eq!(classify("12a3"), Classified::Unrecognized);
    }

    #[test]
    fn url_rule_wins_over_prefixed_rule() {
        // Contains "evento:" but starts with "http": rule 1 applies, and its
        // empty path means extraction fails rather than falling through.
        assert_eq!(
            classify("http://evento:1"),
            Classified::Malformed {
                format: PayloadFormat::UrlWithId
            }
        );
    }

    #[test]
    fn classification_is_total() {
        let samples = [
            "",
            "http",
            "https://",
            "evento:9",
            "EV-1",
            "0",
            "\u{1F389} festa",
            "ev-",
            "  123  ",
        ];
        for sample in samples {
            // Must terminate and produce exactly one classification.
            let _ = classify(sample);
        }
    }
}
