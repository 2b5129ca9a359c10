//! Markdown code-fence helpers for model replies.
//!
//! Completion APIs usually wrap code or JSON in a fenced block even when told
//! not to; these helpers pull the body back out.

use regex::Regex;
use std::sync::OnceLock;

fn regex_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)```([A-Za-z0-9_+-]*)\n(.*?)\n```").expect("valid regex literal")
    })
}

/// Returns the body of the first fenced block tagged `lang` (or untagged).
///
/// The fence must be on its own lines: "```lang\n<body>\n```". Tags compare
/// case-insensitively; blocks in other languages are skipped.
pub fn extract_fenced_block<'a>(text: &'a str, lang: &str) -> Option<&'a str> {
    regex_fence()
        .captures_iter(text)
        .find(|caps| {
            let tag = caps.get(1).map_or("", |m| m.as_str());
            tag.is_empty() || tag.eq_ignore_ascii_case(lang)
        })
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// Returns the fenced body if there is one, otherwise `text` unchanged.
pub fn strip_code_fence<'a>(text: &'a str, lang: &str) -> &'a str {
    extract_fenced_block(text, lang).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_tagged_block() {
        let reply = "Here you go:\n```java\nclass A {}\n```\nDone.";
        assert_eq!(extract_fenced_block(reply, "java"), Some("class A {}"));
    }

    #[test]
    fn test_extracts_untagged_block() {
        let reply = "```\n{\"action\": \"fix\"}\n```";
        assert_eq!(
            extract_fenced_block(reply, "json"),
            Some("{\"action\": \"fix\"}")
        );
    }

    #[test]
    fn test_first_block_wins() {
        let reply = "```java\nfirst\n```\n```java\nsecond\n```";
        assert_eq!(strip_code_fence(reply, "java"), "first");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(strip_code_fence("class A {}", "java"), "class A {}");
    }

    #[test]
    fn test_other_language_is_not_matched() {
        let reply = "```python\nprint(1)\n```";
        assert_eq!(extract_fenced_block(reply, "java"), None);
    }

    #[test]
    fn test_skips_blocks_in_other_languages() {
        let reply = "```python\nprint(1)\n```\nand\n```JSON\n{}\n```";
        assert_eq!(extract_fenced_block(reply, "json"), Some("{}"));
        assert_eq!(strip_code_fence(reply, "java"), reply);
    }
}
