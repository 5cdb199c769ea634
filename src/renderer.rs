use crate::snippet::Snippet;

/// Render one completed record as an Alfred snippet JSON document.
///
/// Straight field substitution into the document Alfred writes itself; no
/// escaping happens here. The rewriter has already put the body into the
/// escaped-newline form the document carries, and the keyword and name are
/// embedded verbatim.
pub fn render(snippet: &Snippet) -> String {
    format!(
        r#"{{
  "alfredsnippet" : {{
    "snippet" : "{snippet}",
    "uid" : "{uid}",
    "name" : "{name}",
    "keyword" : "{keyword}"
  }}
}}
"#,
        snippet = snippet.snippet,
        uid = snippet.uid,
        name = snippet.name,
        keyword = snippet.keyword,
    )
}
