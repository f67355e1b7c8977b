//! Text escaping for safe insertion into markup.
//!
//! [`filter_xss`] lets the browser do the escaping (`innerText` in,
//! `innerHTML` out). [`escape_html`] and [`unescape_html`] are the pure
//! equivalents, usable without a document.

use std::borrow::Cow;

use web_sys::HtmlElement;

use crate::core::error::DomError;
use crate::utils::dom;

const LINE_BREAKS: [&str; 3] = ["<br>", "<br/>", "<br />"];

/// Escape `text` through a detached `<div>`.
///
/// The result is what the browser serializes for a text node: `&`, `<`, `>`
/// and non-breaking spaces become entities, line breaks become `<br>`.
pub fn filter_xss(text: &str) -> Result<String, DomError> {
    let document = dom::document()?;
    let div: HtmlElement = dom::create(&document, "div")?;
    div.set_inner_text(text);
    Ok(div.inner_html())
}

/// Escape every character that can open a tag, close an attribute, or start
/// an entity.
#[inline]
pub fn escape_html(text: &str) -> String {
    ammonia::clean_text(text)
}

/// Strip disallowed tags and attributes but keep safe markup.
#[inline]
pub fn sanitize_html(markup: &str) -> String {
    ammonia::clean(markup)
}

/// Decode the output of [`escape_html`] or [`filter_xss`] back to text.
///
/// Single pass, so `&amp;lt;` decodes to `&lt;`. `<br>` becomes a newline;
/// unknown entities are kept verbatim.
pub fn unescape_html(markup: &str) -> String {
    let text = replace_line_breaks(markup);
    html_escape::decode_html_entities(&text).into_owned()
}

/// Replace `<br>`, `<br/>` and `<br />` (any case) with `\n`.
fn replace_line_breaks(markup: &str) -> Cow<'_, str> {
    if !markup.contains('<') {
        return Cow::Borrowed(markup);
    }

    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match LINE_BREAKS.iter().find_map(|tag| {
            rest.get(..tag.len())
                .filter(|head| head.eq_ignore_ascii_case(tag))
                .map(|_| tag.len())
        }) {
            Some(len) => {
                out.push('\n');
                rest = &rest[len..];
            }
            None => {
                out.push('<');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
