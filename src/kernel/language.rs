#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LanguageTag {
    Rust,
    Go,
    Python,
    JavaScript,
    TypeScript,
    C,
    Cpp,
    Java,
    Json,
    Yaml,
    Toml,
    Html,
    Css,
    Markdown,
    Shell,
    PlainText,
}

impl LanguageTag {
    /// Derive the language from a display name's extension; unknown or
    /// missing extensions fall back to plain text.
    pub fn from_display_name(name: &str) -> Self {
        let ext = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext,
            _ => return Self::PlainText,
        };
        match ext.to_ascii_lowercase().as_str() {
            "rs" => Self::Rust,
            "go" => Self::Go,
            "py" | "pyi" => Self::Python,
            "js" | "mjs" | "cjs" | "jsx" => Self::JavaScript,
            "ts" | "mts" | "cts" | "tsx" => Self::TypeScript,
            "c" => Self::C,
            "cc" | "cpp" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h++" | "h" => Self::Cpp,
            "java" => Self::Java,
            "json" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            "toml" => Self::Toml,
            "html" | "htm" => Self::Html,
            "css" => Self::Css,
            "md" | "markdown" => Self::Markdown,
            "sh" | "bash" | "zsh" => Self::Shell,
            _ => Self::PlainText,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Html => "html",
            Self::Css => "css",
            Self::Markdown => "markdown",
            Self::Shell => "shell",
            Self::PlainText => "plaintext",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_common_extensions() {
        assert_eq!(LanguageTag::from_display_name("a.rs"), LanguageTag::Rust);
        assert_eq!(
            LanguageTag::from_display_name("index.test.ts"),
            LanguageTag::TypeScript
        );
        assert_eq!(LanguageTag::from_display_name("notes.md"), LanguageTag::Markdown);
    }

    #[test]
    fn unknown_and_bare_names_fall_back_to_plaintext() {
        assert_eq!(
            LanguageTag::from_display_name("Untitled"),
            LanguageTag::PlainText
        );
        assert_eq!(
            LanguageTag::from_display_name("file.xyz"),
            LanguageTag::PlainText
        );
        assert_eq!(LanguageTag::from_display_name(".bashrc"), LanguageTag::PlainText);
    }
}
