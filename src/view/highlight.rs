//! Syntax highlighting with configurable themes using syntect + two-face.
//!
//! Cosmetic pass over rendered turn HTML: every `<code class="language-X">`
//! element whose body is plain escaped text is replaced by inline-styled
//! spans. Elements with nested markup, `plaintext` blocks, unknown languages
//! and highlighting failures are left exactly as rendered, so turning the
//! highlighter off only ever changes colors.
//!
//! # Theme Support
//!
//! Built-in themes (from two-face):
//! - `base16-ocean-dark` - Ocean-inspired colors (default)
//! - `gruvbox-dark` / `gruvbox-light` - Warm retro groove colors
//! - `solarized-dark` / `solarized-light` - Precision colors
//! - `monokai` - Sublime Text classic
//! - And many more (see `VALID_THEMES`)

use crate::render::unescape_html;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use syntect::easy::HighlightLines;
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use two_face::theme::{EmbeddedLazyThemeSet, EmbeddedThemeName};

/// All valid theme names that can be used in configuration.
pub const VALID_THEMES: &[&str] = &[
    "ansi",
    "base16",
    "base16-256",
    "base16-eighties-dark",
    "base16-mocha-dark",
    "base16-ocean-dark",
    "base16-ocean-light",
    "coldark-cold",
    "coldark-dark",
    "dark-neon",
    "dracula",
    "github",
    "gruvbox-dark",
    "gruvbox-light",
    "inspired-github",
    "leet",
    "monokai",
    "monokai-bright",
    "monokai-light",
    "monokai-origin",
    "nord",
    "one-half-dark",
    "one-half-light",
    "solarized-dark",
    "solarized-light",
    "sublime-snazzy",
    "two-dark",
    "visual-studio-dark-plus",
    "zenburn",
];

/// Default theme name.
pub const DEFAULT_THEME: &str = "base16-ocean-dark";

/// Language class that is never highlighted.
const PLAINTEXT: &str = "plaintext";

/// Lazy-loaded theme set containing all two-face themes.
static THEME_SET: LazyLock<EmbeddedLazyThemeSet> = LazyLock::new(two_face::theme::extra);

/// Syntax definitions, including the extra two-face grammars.
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(two_face::syntax::extra_newlines);

/// `<code>` element with a language class and a tag-free body.
static CODE_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<code class="language-([a-z]+)">([^<]*)</code>"#)
        .expect("code element regex is valid")
});

/// Map a theme name string to the corresponding EmbeddedThemeName.
#[allow(deprecated)] // VisualStudioDarkPlus is deprecated in newer two-face 0.4.x releases
fn theme_name_to_embedded(name: &str) -> Option<EmbeddedThemeName> {
    match name {
        "ansi" => Some(EmbeddedThemeName::Ansi),
        "base16" => Some(EmbeddedThemeName::Base16),
        "base16-256" => Some(EmbeddedThemeName::Base16_256),
        "base16-eighties-dark" => Some(EmbeddedThemeName::Base16EightiesDark),
        "base16-mocha-dark" => Some(EmbeddedThemeName::Base16MochaDark),
        "base16-ocean-dark" => Some(EmbeddedThemeName::Base16OceanDark),
        "base16-ocean-light" => Some(EmbeddedThemeName::Base16OceanLight),
        "coldark-cold" => Some(EmbeddedThemeName::ColdarkCold),
        "coldark-dark" => Some(EmbeddedThemeName::ColdarkDark),
        "dark-neon" => Some(EmbeddedThemeName::DarkNeon),
        "dracula" => Some(EmbeddedThemeName::Dracula),
        "github" => Some(EmbeddedThemeName::Github),
        "gruvbox-dark" => Some(EmbeddedThemeName::GruvboxDark),
        "gruvbox-light" => Some(EmbeddedThemeName::GruvboxLight),
        "inspired-github" => Some(EmbeddedThemeName::InspiredGithub),
        "leet" => Some(EmbeddedThemeName::Leet),
        "monokai" | "monokai-extended" => Some(EmbeddedThemeName::MonokaiExtended),
        "monokai-bright" => Some(EmbeddedThemeName::MonokaiExtendedBright),
        "monokai-light" => Some(EmbeddedThemeName::MonokaiExtendedLight),
        "monokai-origin" => Some(EmbeddedThemeName::MonokaiExtendedOrigin),
        "nord" => Some(EmbeddedThemeName::Nord),
        "one-half-dark" => Some(EmbeddedThemeName::OneHalfDark),
        "one-half-light" => Some(EmbeddedThemeName::OneHalfLight),
        "solarized-dark" => Some(EmbeddedThemeName::SolarizedDark),
        "solarized-light" => Some(EmbeddedThemeName::SolarizedLight),
        "sublime-snazzy" => Some(EmbeddedThemeName::SublimeSnazzy),
        "two-dark" => Some(EmbeddedThemeName::TwoDark),
        "visual-studio-dark-plus" => Some(EmbeddedThemeName::VisualStudioDarkPlus),
        "zenburn" => Some(EmbeddedThemeName::Zenburn),
        _ => None,
    }
}

/// Check if a theme name is valid.
pub fn is_valid_theme(name: &str) -> bool {
    theme_name_to_embedded(name).is_some()
}

/// Syntax highlighter with configurable theme.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    theme_name: EmbeddedThemeName,
}

impl SyntaxHighlighter {
    /// Create a new highlighter with the specified theme.
    ///
    /// If the theme name is invalid, falls back to the default theme.
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme_name: theme_name_to_embedded(theme_name)
                .unwrap_or(EmbeddedThemeName::Base16OceanDark),
        }
    }

    /// Highlight `code` as `language`, returning inline-styled HTML spans.
    ///
    /// Returns `None` for `plaintext`, unknown languages, or if syntect fails.
    pub fn highlight_code(&self, code: &str, language: &str) -> Option<String> {
        if language == PLAINTEXT {
            return None;
        }
        let syntax = SYNTAX_SET.find_syntax_by_token(language)?;
        let theme = THEME_SET.get(self.theme_name);

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut html = String::with_capacity(code.len() * 2);
        for line in LinesWithEndings::from(code) {
            let regions = highlighter.highlight_line(line, &SYNTAX_SET).ok()?;
            html.push_str(&styled_line_to_highlighted_html(&regions, IncludeBackground::No).ok()?);
        }
        Some(html)
    }

    /// Highlight every eligible `<code class="language-X">` element in `html`.
    pub fn highlight_all_under(&self, html: &str) -> String {
        CODE_ELEMENT
            .replace_all(html, |caps: &Captures| {
                let whole = caps.get(0).map_or("", |m| m.as_str());
                let language = caps.get(1).map_or("", |m| m.as_str());
                let body = caps.get(2).map_or("", |m| m.as_str());

                match self.highlight_code(&unescape_html(body), language) {
                    Some(highlighted) => {
                        format!(r#"<code class="language-{language}">{highlighted}</code>"#)
                    }
                    None => whole.to_string(),
                }
            })
            .into_owned()
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}
