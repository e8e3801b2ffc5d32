//! Math rendering: the `$...$` / `$$...$$` passes and the renderer boundary.
//!
//! The renderer itself is a collaborator behind [`MathRenderer`]; the
//! production implementation converts LaTeX to MathML via `latex2mathml`.
//! A failed expression never aborts the render: the pass substitutes a
//! visible error span carrying the original expression and moves on.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use thiserror::Error;

/// Whether an expression renders as a display block or inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Inline,
    Block,
}

/// Math rendering failure, observable only as inline error markup.
#[derive(Debug, Error)]
pub enum MathError {
    #[error("invalid LaTeX expression: {0}")]
    Invalid(String),
}

/// The math rendering boundary.
///
/// Implementations must be infallible apart from returning `MathError`;
/// panicking on malformed input is a bug.
pub trait MathRenderer: Sync {
    fn render(&self, expr: &str, mode: DisplayMode) -> Result<String, MathError>;
}

/// LaTeX-to-MathML renderer backed by `latex2mathml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathmlRenderer;

impl MathRenderer for MathmlRenderer {
    fn render(&self, expr: &str, mode: DisplayMode) -> Result<String, MathError> {
        let style = match mode {
            DisplayMode::Inline => latex2mathml::DisplayStyle::Inline,
            DisplayMode::Block => latex2mathml::DisplayStyle::Block,
        };
        latex2mathml::latex_to_mathml(expr, style).map_err(|err| MathError::Invalid(err.to_string()))
    }
}

// `$$...$$` spanning anything but `$`; must run before the inline pass
// so single-`$` matching cannot eat a block delimiter.
static RE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\$([^$]+)\$\$").unwrap());

// `$...$` confined to one line so it cannot swallow paragraphs.
static RE_INLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([^$\n]+)\$").unwrap());

/// Replace `$$expr$$` blocks with rendered display math.
pub fn block_math(input: &str, math: &dyn MathRenderer) -> String {
    RE_BLOCK
        .replace_all(input, |caps: &Captures| {
            render_or_error(math, &caps[1], DisplayMode::Block)
        })
        .into_owned()
}

/// Replace single-line `$expr$` spans with rendered inline math.
pub fn inline_math(input: &str, math: &dyn MathRenderer) -> String {
    RE_INLINE
        .replace_all(input, |caps: &Captures| {
            render_or_error(math, &caps[1], DisplayMode::Inline)
        })
        .into_owned()
}

fn render_or_error(math: &dyn MathRenderer, expr: &str, mode: DisplayMode) -> String {
    match (math.render(expr, mode), mode) {
        (Ok(rendered), DisplayMode::Block) => {
            format!("<div class=\"block-math\">{rendered}</div>")
        }
        (Ok(rendered), DisplayMode::Inline) => {
            format!("<span class=\"inline-math\">{rendered}</span>")
        }
        (Err(_), DisplayMode::Block) => {
            format!(
                "<div class=\"math-error\">Failed to render math: {}</div>",
                escape_text(expr)
            )
        }
        (Err(_), DisplayMode::Inline) => {
            format!(
                "<span class=\"math-error\">Failed to render math: {}</span>",
                escape_text(expr)
            )
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Deterministic stand-in for the real renderer: echoes the expression,
    /// fails on anything containing "bad".
    pub struct StubMath;

    impl MathRenderer for StubMath {
        fn render(&self, expr: &str, _mode: DisplayMode) -> Result<String, MathError> {
            if expr.contains("bad") {
                Err(MathError::Invalid("unknown command".into()))
            } else {
                Ok(format!("<math>{expr}</math>"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::StubMath;
    use super::*;

    #[test]
    fn test_block_math_rendered() {
        let out = block_math("before $$E = mc^2$$ after", &StubMath);
        assert_eq!(
            out,
            "before <div class=\"block-math\"><math>E = mc^2</math></div> after"
        );
    }

    #[test]
    fn test_inline_math_rendered() {
        let out = inline_math("a $x+y$ b", &StubMath);
        assert_eq!(out, "a <span class=\"inline-math\"><math>x+y</math></span> b");
    }

    #[test]
    fn test_inline_math_does_not_span_lines() {
        let input = "price is $5\nand $x$ here";
        let out = inline_math(input, &StubMath);
        // The lone `$5` plus next-line `$` must not pair up across the newline
        assert!(out.contains("price is $5"));
        assert!(out.contains("<span class=\"inline-math\"><math>x</math></span>"));
    }

    #[test]
    fn test_failure_contained_and_render_continues() {
        let out = inline_math("first $bad expr$ then $y$", &StubMath);
        assert!(out.contains("math-error"));
        assert!(out.contains("Failed to render math: bad expr"));
        assert!(out.contains("<math>y</math>"));
    }

    #[test]
    fn test_error_text_is_escaped() {
        let out = block_math("$$bad <script>$$", &StubMath);
        assert!(out.contains("&lt;script&gt;"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn test_mathml_renderer_error_path() {
        // Unterminated group is invalid LaTeX in any renderer
        let result = MathmlRenderer.render("\\frac{1", DisplayMode::Inline);
        assert!(result.is_err());
    }

    #[test]
    fn test_mathml_renderer_ok_path() {
        let rendered = MathmlRenderer.render("x^2", DisplayMode::Block).unwrap();
        assert!(rendered.contains("math"));
    }
}
