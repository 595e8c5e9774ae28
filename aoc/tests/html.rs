use aoc::html::{self, SubmitOutcome};

const QUESTION_PAGE: &str = r#"<html><body><main>
<article class="day-desc"><h2>--- Day 1: Trebuchet?! ---</h2><p>Something is <em>wrong</em> with <code>global</code> snow production.</p>
<pre><code>1abc2
pqr3stu8vwx
</code></pre>
<ul><li>one</li><li>two</li></ul>
<p>See <a href="/2023/about">about</a> &amp; more.</p>
</article>
<p>Answer: <input type="text" name="answer"/></p>
</main></body></html>"#;

#[test]
fn question_markdown_convert_article() {
    let markdown = html::question_markdown(QUESTION_PAGE).unwrap();

    assert!(markdown.starts_with("## --- Day 1: Trebuchet?! ---\n\n"));
    assert!(markdown.contains("Something is *wrong* with `global` snow production."));
    assert!(markdown.contains("```\n1abc2\npqr3stu8vwx\n"));
    assert!(markdown.contains("- one\n- two\n"));
    assert!(markdown.contains("See [about](/2023/about) & more."));
    assert!(!markdown.contains('<'));
    assert!(!markdown.contains("Answer:"));
    assert!(!markdown.contains("\n\n\n"));
}

#[test]
fn question_markdown_join_every_article() {
    let page = "<article><p>first</p></article><p>between</p><article><p>second</p></article>";

    assert_eq!(html::articles(page), vec!["<p>first</p>", "<p>second</p>"]);
    assert_eq!(html::question_markdown(page).unwrap(), "first\n\nsecond\n");
}

#[test]
fn question_markdown_need_article() {
    assert_eq!(html::question_markdown("<html><p>404</p></html>"), None);
}

#[test]
fn submit_outcome_detect_right_answer() {
    let page = r#"<main><article><p>That's the right answer!  You are <span class="day-success">one gold star</span> closer to restoring snow operations. <a href="/2023">[Return to Advent Calendar]</a></p></article></main>"#;

    assert_eq!(html::submit_outcome(page), SubmitOutcome::Correct);
}

#[test]
fn submit_outcome_keep_message_without_links() {
    let page = r#"<main><article><p>That's not the right answer; your answer is too low.  If you're stuck, make sure you're using the full input data.  Please wait one minute before trying again. <a href="/2023/day/1">[Return to Day 1]</a></p></article></main>"#;

    assert_eq!(
        html::submit_outcome(page),
        SubmitOutcome::Rejected(vec![
            "That's not the right answer; your answer is too low.".to_string(),
            "If you're stuck, make sure you're using the full input data.".to_string(),
            "Please wait one minute before trying again.".to_string(),
        ])
    );
}

#[test]
fn text_content_unescape_entities() {
    assert_eq!(
        html::text_content("<p>a &lt;b&gt; &amp;&amp; &quot;c&quot;</p>"),
        "a <b> && \"c\""
    );
}
