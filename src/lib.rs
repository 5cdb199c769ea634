//! # textexpander-to-alfred
//!
//! A CLI tool that converts [TextExpander](https://textexpander.com) CSV exports
//! into [Alfred](https://www.alfredapp.com) snippet collections.
//!
//! ## What it does
//!
//! TextExpander can export a snippet group as a plain CSV file with three columns
//! per row: the trigger keyword, the expansion body, and a human-readable name.
//! This tool reads that file, rewrites TextExpander placeholder tokens
//! (`%key:return%`, `%key:tab%`, `%Y%m%d`, ...) into Alfred's equivalents, and
//! packages everything as a `.alfredsnippets` file: a zip archive holding one
//! JSON document per snippet plus the `info.plist` descriptor Alfred expects.
//!
//! The input file is never modified, and an existing `.alfredsnippets` file is
//! never overwritten.
//!
//! ## Usage
//!
//! ```sh
//! # Produces my-snippets.alfredsnippets next to the input
//! textexpander-to-alfred my-snippets.csv
//! ```
//!
//! Double-click the result (or open it from Alfred's Snippets preferences) to
//! import the collection.
//!
//! ## Compatibility
//!
//! Only the placeholder tokens listed in [`rewriter`] are translated. A snippet
//! using any other `%...%` token fails the conversion, so an unsupported
//! placeholder is never silently passed through to Alfred.

pub mod archiver;
pub mod converter;
pub mod importer;
pub mod renderer;
pub mod rewriter;
pub mod snippet;
pub mod uid;
