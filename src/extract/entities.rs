/// Un-escape the two entities page authors most often leave in `content`
/// attributes. Nothing else is decoded and the pass is not repeated, so
/// `&amp;quot;` stays `&amp;quot;`.
pub fn decode_html_entities(text: &str) -> String {
    text.replace("&quot;", "\"").replace("&#39;", "'")
}
