use once_cell::sync::Lazy;
use regex::Regex;

const RIGHT_ANSWER_TEXT: &str = "That's the right answer!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    Rejected(Vec<String>),
}

/// Inner html of every `<article>` element in page, in document order.
pub fn articles(page: &str) -> Vec<&str> {
    static ARTICLE_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?s)<article[^>]*>(.*?)</article>").unwrap());

    ARTICLE_PATTERN
        .captures_iter(page)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

pub fn question_markdown(page: &str) -> Option<String> {
    let parts = articles(page);
    if parts.is_empty() {
        return None;
    }

    Some(
        parts
            .iter()
            .map(|a| to_markdown(a))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

pub fn to_markdown(html: &str) -> String {
    static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
        [
            (r"(?s)<h2[^>]*>(.*?)</h2>", "## ${1}\n\n"),
            (r"(?s)<pre[^>]*><code>(.*?)</code></pre>", "```\n${1}\n```\n\n"),
            (r"(?s)<code>(.*?)</code>", "`${1}`"),
            (r"(?s)<em[^>]*>(.*?)</em>", "*${1}*"),
            (r#"(?s)<a [^>]*href="([^"]*)"[^>]*>(.*?)</a>"#, "[${2}](${1})"),
            (r"<li>", "- "),
            (r"</li>", "\n"),
            (r"</?ul>", "\n"),
            (r"<p>", ""),
            (r"</p>", "\n\n"),
            (r"<[^>]+>", ""),
        ]
        .into_iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
        .collect()
    });
    static BLANK_LINES_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

    let mut text = html.to_string();
    for (pattern, replacement) in RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    let text = unescape(&text);
    let text = BLANK_LINES_PATTERN.replace_all(&text, "\n\n");

    format!("{}\n", text.trim())
}

pub fn text_content(html: &str) -> String {
    static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

    unescape(&TAG_PATTERN.replace_all(html, ""))
}

pub fn submit_outcome(page: &str) -> SubmitOutcome {
    static LINK_TEXT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\[[^\]]*\]").unwrap());
    static SPACES_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

    let text = articles(page)
        .first()
        .map(|a| text_content(a))
        .unwrap_or_else(|| text_content(page));
    if text.contains(RIGHT_ANSWER_TEXT) {
        return SubmitOutcome::Correct;
    }

    let lines = text
        .split("  ")
        .map(|l| LINK_TEXT_PATTERN.replace_all(l, ""))
        .map(|l| SPACES_PATTERN.replace_all(l.trim(), " ").into_owned())
        .filter(|l| !l.is_empty())
        .collect();
    SubmitOutcome::Rejected(lines)
}

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
