use serde::Deserialize;

/// One row of a TextExpander CSV export, in column order:
/// trigger keyword, expansion body, human-readable name.
///
/// The export carries no header row, so the fields deserialize positionally.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSnippet {
    pub keyword: String,
    pub snippet: String,
    pub name: String,
}

/// A snippet with its collection-unique identifier attached.
///
/// The `uid` disambiguates output filenames when two snippets share a `name`,
/// and is embedded in the rendered document. `keyword` and `name` pass through
/// the pipeline untouched; `snippet` is rewritten in place before rendering.
#[derive(Debug, Clone)]
pub struct Snippet {
    pub keyword: String,
    pub snippet: String,
    pub name: String,
    pub uid: String,
}

impl RawSnippet {
    /// Complete the record by attaching its generated identifier.
    pub fn with_uid(self, uid: String) -> Snippet {
        Snippet {
            keyword: self.keyword,
            snippet: self.snippet,
            name: self.name,
            uid,
        }
    }
}

impl Snippet {
    /// Filename of this snippet inside the collection archive.
    /// The bracketed uid keeps same-named snippets from colliding.
    pub fn filename(&self) -> String {
        format!("{} [{}].json", self.name, self.uid)
    }
}
