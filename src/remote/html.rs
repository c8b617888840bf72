//! Text extraction from puzzle site pages

use regex::Regex;
use std::sync::OnceLock;

/// Server verdict on a submitted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    TooHigh,
    TooLow,
    AlreadySolved,
    /// Rate limited; the message says how long to wait
    TooRecent(String),
    Unrecognized(String),
}

/// Logged-in user name from the page header
///
/// Child elements of the user div (star counts, supporter badges) are
/// dropped.
pub fn find_username(html: &str) -> Option<String> {
    static USER_RE: OnceLock<Regex> = OnceLock::new();
    static CHILD_RE: OnceLock<Regex> = OnceLock::new();
    let user = USER_RE.get_or_init(|| {
        Regex::new(r#"(?s)<div class="user">(.*?)</div>"#).expect("user regex should compile")
    });
    let child = CHILD_RE.get_or_init(|| {
        Regex::new(r"(?s)<([a-z]+)[^>]*>.*?</([a-z]+)>").expect("child regex should compile")
    });

    let inner = user.captures(html)?.get(1)?.as_str();
    let name = strip_tags(&child.replace_all(inner, ""));
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// First paragraph of the page's article, as plain text
pub fn article_text(html: &str) -> Option<String> {
    static ARTICLE_RE: OnceLock<Regex> = OnceLock::new();
    let re = ARTICLE_RE.get_or_init(|| {
        Regex::new(r"(?s)<article[^>]*>\s*<p>(.*?)</p>").expect("article regex should compile")
    });

    let inner = re.captures(html)?.get(1)?.as_str();
    Some(decode_entities(&strip_tags(inner)).trim().to_string())
}

/// First `<pre><code>` block of a puzzle description
pub fn first_example(html: &str) -> Option<String> {
    static EXAMPLE_RE: OnceLock<Regex> = OnceLock::new();
    let re = EXAMPLE_RE.get_or_init(|| {
        Regex::new(r"(?s)<main>.*?<pre><code>(.*?)</code></pre>").expect("example regex should compile")
    });

    let inner = re.captures(html)?.get(1)?.as_str();
    Some(decode_entities(&strip_tags(inner)).trim().to_string())
}

/// Classify the answer page of a submission
pub fn classify_submission(html: &str) -> SubmitOutcome {
    let Some(text) = article_text(html) else {
        return SubmitOutcome::Unrecognized("no result in response".to_string());
    };

    if text.contains("That's the right answer!") {
        SubmitOutcome::Correct
    } else if text.contains("your answer is too high") {
        SubmitOutcome::TooHigh
    } else if text.contains("your answer is too low") {
        SubmitOutcome::TooLow
    } else if text.contains("Did you already complete it?") {
        SubmitOutcome::AlreadySolved
    } else if text.contains("You gave an answer too recently") {
        SubmitOutcome::TooRecent(text)
    } else {
        SubmitOutcome::Unrecognized(text)
    }
}

fn strip_tags(html: &str) -> String {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag regex should compile"));
    re.replace_all(html, "").into_owned()
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = r#"<html><body><header><div><h1 class="title-global"><a href="/">Advent of Code</a></h1>
<div class="user">jane doe <span class="star-count">42*</span></div></div></header>
<main>settings</main></body></html>"#;

    fn answer_page(paragraph: &str) -> String {
        format!(
            "<html><body><main>\n<article><p>{}</p></article>\n</main></body></html>",
            paragraph
        )
    }

    #[test]
    fn username_without_children() {
        assert_eq!(find_username(SETTINGS), Some("jane doe".to_string()));
        assert_eq!(find_username("<html><body>login</body></html>"), None);
    }

    #[test]
    fn classify_correct() {
        let page = answer_page(
            "That's the right answer! You are <em>one gold star</em> closer to finding the Chief Historian.",
        );
        assert_eq!(classify_submission(&page), SubmitOutcome::Correct);
    }

    #[test]
    fn classify_high_and_low_are_distinct() {
        let high = answer_page(
            "That's not the right answer; your answer is too high.  If you're stuck, make sure you're using the full input data.",
        );
        let low = answer_page(
            "That's not the right answer; your answer is too low.  If you're stuck, make sure you're using the full input data.",
        );
        assert_eq!(classify_submission(&high), SubmitOutcome::TooHigh);
        assert_eq!(classify_submission(&low), SubmitOutcome::TooLow);
    }

    #[test]
    fn classify_already_solved() {
        let page = answer_page(
            "You don't seem to be solving the right level.  Did you already complete it? <a href=\"/2024/day/1\">[Return to Day 1]</a>",
        );
        assert_eq!(classify_submission(&page), SubmitOutcome::AlreadySolved);
    }

    #[test]
    fn classify_rate_limited() {
        let page = answer_page("You gave an answer too recently; you have 41s left to wait.");
        assert!(matches!(classify_submission(&page), SubmitOutcome::TooRecent(msg) if msg.contains("41s")));
    }

    #[test]
    fn classify_unknown() {
        assert!(matches!(
            classify_submission(&answer_page("Something new")),
            SubmitOutcome::Unrecognized(text) if text == "Something new"
        ));
        assert!(matches!(
            classify_submission("<html></html>"),
            SubmitOutcome::Unrecognized(_)
        ));
    }

    #[test]
    fn example_is_decoded() {
        let page = "<html><body><main><article><p>For example:</p>\n<pre><code>3   4\n&lt;x&gt; <em>5</em>\n</code></pre></article></main></body></html>";
        assert_eq!(first_example(page), Some("3   4\n<x> 5".to_string()));
    }
}
