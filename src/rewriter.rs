use eyre::{Result, eyre};

/// Ordered TextExpander → Alfred replacement table.
///
/// Key-press tokens become the escaped newline the snippet document carries
/// (or vanish, for tab), the date token becomes Alfred's date placeholder, and
/// raw newlines in the body are escaped the same way. The raw-newline rule
/// must stay last: earlier rules emit the escaped form directly, so it never
/// re-matches their output.
const TOKEN_TABLE: &[(&str, &str)] = &[
    ("%key:return%", "\\n"),
    ("%key:enter%", "\\n"),
    ("%key:tab%", ""),
    ("%Y%m%d", "{date:yyyyMMdd}"),
    ("\n", "\\n"),
];

/// Character TextExpander wraps its placeholder tokens in.
const TOKEN_SIGIL: char = '%';

/// Rewrite a TextExpander snippet body into its Alfred form.
///
/// Applies the replacement table top to bottom, each pair as an independent
/// substring replacement over the whole (already partially rewritten) string.
/// Fails if any `%` survives, so a snippet using an unsupported placeholder is
/// rejected instead of imported broken.
pub fn rewrite(body: &str) -> Result<String> {
    let mut rewritten = body.to_string();
    for (token, replacement) in TOKEN_TABLE {
        rewritten = rewritten.replace(token, replacement);
    }

    if rewritten.contains(TOKEN_SIGIL) {
        return Err(eyre!("Unsupported TextExpander token in snippet: {:?}", body));
    }
    Ok(rewritten)
}
