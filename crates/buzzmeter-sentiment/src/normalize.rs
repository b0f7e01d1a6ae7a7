//! Opinion filtering and text cleanup ahead of scoring.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::NormalizedText;

/// Case-sensitive prefixes that mark a post as a news relay rather than an opinion.
pub const REJECTED_PREFIXES: &[&str] = &[
    "BREAKING:",
    "Breaking:",
    "UPDATE:",
    "WATCH:",
    "NEW:",
    "EXCLUSIVE:",
    "REPORT:",
    "Report:",
    "JUST IN:",
    "Just in:",
];

/// Cleaned text needs at least this many whitespace-delimited tokens.
pub const MIN_TOKENS: usize = 3;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("valid url regex"));

/// Clean post text for scoring, or reject it.
///
/// Returns `None` when the trimmed text opens with one of
/// [`REJECTED_PREFIXES`], either before or after URLs are stripped and
/// whitespace is collapsed, or when fewer than [`MIN_TOKENS`] tokens remain.
#[must_use]
pub fn normalize(text: &str) -> Option<NormalizedText> {
    if let Some(prefix) = rejected_prefix(text) {
        tracing::trace!(prefix, "rejecting announcement-style post");
        return None;
    }

    let without_urls = URL_RE.replace_all(text, "");
    let tokens: Vec<&str> = without_urls.split_whitespace().collect();
    let cleaned = tokens.join(" ");

    if let Some(prefix) = rejected_prefix(&cleaned) {
        tracing::trace!(prefix, "rejecting announcement-style post after cleaning");
        return None;
    }

    if tokens.len() < MIN_TOKENS {
        tracing::trace!(tokens = tokens.len(), "rejecting post with too few tokens");
        return None;
    }

    Some(NormalizedText::new(cleaned))
}

/// Returns the announcement prefix `text` starts with, if any.
#[must_use]
pub fn rejected_prefix(text: &str) -> Option<&'static str> {
    let trimmed = text.trim();
    REJECTED_PREFIXES
        .iter()
        .copied()
        .find(|prefix| trimmed.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaned(text: &str) -> Option<String> {
        normalize(text).map(NormalizedText::into_inner)
    }

    #[test]
    fn every_rejected_prefix_yields_none() {
        for prefix in REJECTED_PREFIXES {
            let text = format!("{prefix} she just released a long and thoughtful new album today");
            assert_eq!(cleaned(&text), None, "prefix {prefix:?} should be rejected");
        }
    }

    #[test]
    fn prefix_check_ignores_leading_whitespace() {
        assert_eq!(cleaned("   \n BREAKING: huge news about the tour"), None);
    }

    #[test]
    fn prefix_check_is_case_sensitive() {
        assert_eq!(
            cleaned("breaking: I think this tour is great").as_deref(),
            Some("breaking: I think this tour is great")
        );
        assert_eq!(
            cleaned("JUST in: I love this song").as_deref(),
            Some("JUST in: I love this song")
        );
    }

    #[test]
    fn prefix_only_matches_at_start() {
        assert_eq!(
            cleaned("I hate that every headline says BREAKING: now").as_deref(),
            Some("I hate that every headline says BREAKING: now")
        );
    }

    #[test]
    fn strips_http_https_and_www_urls() {
        let text = "love this https://t.co/abc clip http://x.com/y and www.example.com/page too";
        assert_eq!(cleaned(text).as_deref(), Some("love this clip and too"));
    }

    #[test]
    fn strips_url_glued_to_preceding_word() {
        assert_eq!(
            cleaned("watch this nowhttps://t.co/abc right here").as_deref(),
            Some("watch this now right here")
        );
    }

    #[test]
    fn collapses_whitespace_and_newlines() {
        assert_eq!(
            cleaned("  she   is\n\namazing\t\tlive  ").as_deref(),
            Some("she is amazing live")
        );
    }

    #[test]
    fn keeps_mentions_and_hashtags() {
        assert_eq!(
            cleaned("@fan I think #tour is great").as_deref(),
            Some("@fan I think #tour is great")
        );
    }

    #[test]
    fn fewer_than_three_tokens_is_rejected() {
        assert_eq!(cleaned(""), None);
        assert_eq!(cleaned("   "), None);
        assert_eq!(cleaned("so good"), None);
        assert_eq!(cleaned("so good https://t.co/abc"), None);
    }

    #[test]
    fn exactly_three_tokens_is_returned_unchanged() {
        assert_eq!(cleaned("she is amazing").as_deref(), Some("she is amazing"));
    }

    #[test]
    fn output_never_contains_url() {
        let inputs = [
            "I think https://a.b/c is fine",
            "www.site.com is where I read great stuff",
            "good http:// bad https:// ugly",
            "check httpbin thing out please",
        ];
        for input in inputs {
            if let Some(text) = normalize(input) {
                assert!(
                    !URL_RE.is_match(text.as_str()),
                    "url survived cleaning: {text}"
                );
            }
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "  I   think\nshe deserves https://t.co/x the award ",
            "what a great performance last night",
            "@someone you should see www.site.com this",
            "https://t.co/x BREAKING: she is here",
            "JUST\nIN: she is here tonight",
            "so good https://t.co/abc",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = once.as_ref().and_then(|t| normalize(t.as_str()));
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn prefix_exposed_by_url_strip_is_rejected() {
        assert_eq!(cleaned("https://t.co/x BREAKING: she is here"), None);
        assert_eq!(cleaned("www.news.com UPDATE: the show moved"), None);
    }

    #[test]
    fn prefix_formed_by_whitespace_collapse_is_rejected() {
        assert_eq!(cleaned("JUST\nIN: she is here tonight"), None);
    }

    #[test]
    fn rejected_prefix_reports_matching_prefix() {
        assert_eq!(rejected_prefix("Just in: tour dates"), Some("Just in:"));
        assert_eq!(rejected_prefix("I think so"), None);
    }
}
