//! Minimal markdown converter built from ordered rewrite rules.
//!
//! # Responsibility
//! - Map a markdown string to an HTML fragment deterministically.
//! - Degrade gracefully on malformed input instead of failing.
//!
//! # Invariants
//! - Stage order is fixed; each stage rewrites the previous stage's output.
//! - Conversion is total and side-effect free.
//! - Input is trusted author content; body text is not HTML-escaped, raw HTML
//!   passes through unchanged.
//!
//! Two quirks are part of the contract: fenced code block contents remain
//! visible to later inline stages, and ordered-list items are emitted as bare
//! `<li>` without a surrounding container.

use once_cell::sync::Lazy;
use regex::Regex;

/// Stage 1: ``` fenced blocks, optional language tag, up to the next fence.
static FENCED_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").expect("valid fenced code regex"));

/// Stage 2: backtick-delimited inline span.
static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code regex"));

/// Stage 3: line-leading `#`/`##`/`###` plus space, longest marker first so a
/// level-3 header is never captured as level-1 text.
static H3_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.+)$").expect("valid h3 regex"));
static H2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.+)$").expect("valid h2 regex"));
static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.+)$").expect("valid h1 regex"));

/// Stage 4: non-greedy `**bold**`, converted before stage 5 so the
/// single-asterisk pattern cannot consume bold markers.
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));

/// Stage 5: non-greedy `*italic*`.
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("valid italic regex"));

/// Stage 6: `[label](url)`.
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));

/// Stage 7a: line-leading `- ` list item.
static UNORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^- (.+)$").expect("valid unordered item regex"));

/// Stage 7b: maximal run of consecutive `<li>` lines, wrapped once.
static LIST_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<li>[^\n]*</li>(?:\n<li>[^\n]*</li>)*").expect("valid list run regex")
});

/// Stage 8: line-leading `N. ` ordered item. Emitted as a bare `<li>`.
static ORDERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\d+\. (.+)$").expect("valid ordered item regex"));

/// Stage 10: `<p>` immediately before / `</p>` immediately after a
/// block-level element.
static P_BEFORE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<p>(<(?:h[1-3]|ul|pre)>)").expect("valid p-open cleanup regex"));
static P_AFTER_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(</(?:h[1-3]|ul|pre)>)</p>").expect("valid p-close cleanup regex"));

/// Stage 11: line-leading `> ` quote. Runs last, after paragraph wrapping, so
/// a quote on the first line of the source stays inside its paragraph.
static BLOCKQUOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^> (.+)$").expect("valid blockquote regex"));

/// Converts a markdown string to an HTML fragment.
///
/// Deterministic and total: malformed markdown falls through untransformed
/// rather than producing an error.
pub fn render_markdown(source: &str) -> String {
    let html = FENCED_CODE_RE.replace_all(source, "<pre><code>${2}</code></pre>");
    let html = INLINE_CODE_RE.replace_all(&html, "<code>${1}</code>");

    let html = H3_RE.replace_all(&html, "<h3>${1}</h3>");
    let html = H2_RE.replace_all(&html, "<h2>${1}</h2>");
    let html = H1_RE.replace_all(&html, "<h1>${1}</h1>");

    let html = BOLD_RE.replace_all(&html, "<strong>${1}</strong>");
    let html = ITALIC_RE.replace_all(&html, "<em>${1}</em>");
    let html = LINK_RE.replace_all(&html, r#"<a href="${2}" target="_blank">${1}</a>"#);

    let html = UNORDERED_ITEM_RE.replace_all(&html, "<li>${1}</li>");
    let html = LIST_RUN_RE.replace_all(&html, "<ul>${0}</ul>");
    let html = ORDERED_ITEM_RE.replace_all(&html, "<li>${1}</li>");

    let html = wrap_paragraphs(&html);
    let html = clean_paragraphs(&html);

    BLOCKQUOTE_RE
        .replace_all(&html, "<blockquote>${1}</blockquote>")
        .into_owned()
}

/// Stage 9: blank lines become paragraph boundaries and the whole text is
/// wrapped in one outer paragraph.
fn wrap_paragraphs(html: &str) -> String {
    format!("<p>{}</p>", html.replace("\n\n", "</p><p>"))
}

/// Stage 10: drop empty paragraph pairs and un-wrap paragraph tags that
/// directly surround a header, list or code block.
fn clean_paragraphs(html: &str) -> String {
    let html = html.replace("<p></p>", "");
    let html = P_BEFORE_BLOCK_RE.replace_all(&html, "${1}");
    P_AFTER_BLOCK_RE.replace_all(&html, "${1}").into_owned()
}
