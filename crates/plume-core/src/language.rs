//! Language mode selection from filename extensions.
//!
//! The grammars themselves live in the editor widget. This module only
//! decides which one to ask for, and whether the document gets the full
//! code-editing chrome or the minimal plain-text setup.

/// A syntax grammar the editor widget knows how to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// JavaScript family. Flags select JSX and TypeScript dialects.
    JavaScript { jsx: bool, typescript: bool },
    Html,
    Css,
    Markdown,
    Json,
    Python,
    Xml,
    Java,
    Rust,
    Cpp,
    Sql,
    Php,
    CSharp,
}

impl Grammar {
    /// Identifier the widget bridge uses to pick a grammar provider.
    pub fn id(self) -> &'static str {
        match self {
            Grammar::JavaScript { .. } => "javascript",
            Grammar::Html => "html",
            Grammar::Css => "css",
            Grammar::Markdown => "markdown",
            Grammar::Json => "json",
            Grammar::Python => "python",
            Grammar::Xml => "xml",
            Grammar::Java => "java",
            Grammar::Rust => "rust",
            Grammar::Cpp => "cpp",
            Grammar::Sql => "sql",
            Grammar::Php => "php",
            Grammar::CSharp => "csharp",
        }
    }
}

/// The editing configuration derived from a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageMode {
    /// Grammar to highlight with, if the extension is recognised.
    pub grammar: Option<Grammar>,
    /// Full code chrome (line numbers, bracket matching, ...) vs minimal setup.
    pub is_code: bool,
}

impl LanguageMode {
    /// Plain text: no grammar, minimal chrome.
    pub const PLAIN_TEXT: LanguageMode = LanguageMode {
        grammar: None,
        is_code: false,
    };

    /// Unrecognised extension: no grammar, but still code chrome.
    pub const DEFAULT_CODE: LanguageMode = LanguageMode {
        grammar: None,
        is_code: true,
    };

    const fn code(grammar: Grammar) -> LanguageMode {
        LanguageMode {
            grammar: Some(grammar),
            is_code: true,
        }
    }
}

impl Default for LanguageMode {
    fn default() -> Self {
        LanguageMode::DEFAULT_CODE
    }
}

/// Extract the extension of a filename.
///
/// Returns everything after the final `.`. A name without any dot is its
/// own extension.
pub fn extension_of(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) => &filename[dot + 1..],
        None => filename,
    }
}

/// Select the language mode for a filename.
///
/// Matching is case-sensitive and exact. Every string maps to some mode.
pub fn select_mode(filename: &str) -> LanguageMode {
    let js = |jsx, typescript| LanguageMode::code(Grammar::JavaScript { jsx, typescript });

    match extension_of(filename) {
        "js" => js(false, false),
        "jsx" => js(true, false),
        "ts" => js(false, true),
        "tsx" => js(true, true),
        "html" | "htm" => LanguageMode::code(Grammar::Html),
        "css" => LanguageMode::code(Grammar::Css),
        "md" | "mdx" => LanguageMode::code(Grammar::Markdown),
        "json" => LanguageMode::code(Grammar::Json),
        "py" => LanguageMode::code(Grammar::Python),
        "xml" => LanguageMode::code(Grammar::Xml),
        "java" => LanguageMode::code(Grammar::Java),
        // Only the spelled-out extension; `.rs` falls through to the default.
        "rust" => LanguageMode::code(Grammar::Rust),
        "cpp" => LanguageMode::code(Grammar::Cpp),
        "sql" => LanguageMode::code(Grammar::Sql),
        "php" => LanguageMode::code(Grammar::Php),
        "cs" => LanguageMode::code(Grammar::CSharp),
        "txt" | "text" => LanguageMode::PLAIN_TEXT,
        _ => LanguageMode::DEFAULT_CODE,
    }
}
