//! Template rendering for gostrap.
//! Only `{{ ... }}` placeholders such as `{{ Module }}` are interpreted; block
//! and comment tags are moved to delimiters that never occur in text files, so
//! `{% ... %}` and `{# ... #}` pass through untouched.
use crate::error::{Error, Result};
use minijinja::syntax::SyntaxConfig;
use minijinja::Environment;

const BLOCK_START: &str = "\u{0}{%";
const BLOCK_END: &str = "%}\u{0}";
const COMMENT_START: &str = "\u{0}{#";
const COMMENT_END: &str = "#}\u{0}";

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer that only reacts to variable placeholders and
    /// leaves trailing newlines untouched.
    ///
    /// # Errors
    /// * `Error::Render` if the placeholder syntax cannot be configured
    pub fn new() -> Result<Self> {
        let syntax = SyntaxConfig::builder()
            .block_delimiters(BLOCK_START, BLOCK_END)
            .variable_delimiters("{{", "}}")
            .comment_delimiters(COMMENT_START, COMMENT_END)
            .build()
            .map_err(Error::Render)?;

        let mut env = Environment::new();
        env.set_syntax(syntax);
        env.set_keep_trailing_newline(true);
        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// Unknown placeholders render as empty strings (MiniJinja's lenient
    /// undefined behavior); surrounding text is never touched.
    ///
    /// # Errors
    /// * `Error::Render` if the template cannot be parsed or rendered
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::Render)?;

        let tmpl = env.get_template("temp").map_err(Error::Render)?;

        tmpl.render(context).map_err(Error::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_placeholders() {
        let renderer = MiniJinjaRenderer::new().unwrap();
        let context = json!({"Module": "torugo", "GOVersion": "1.22.0"});

        let result = renderer
            .render("module {{ Module }}\n\ngo {{ GOVersion }}\n", &context)
            .unwrap();
        assert_eq!(result, "module torugo\n\ngo 1.22.0\n");
    }

    #[test]
    fn test_render_keeps_plain_text() {
        let renderer = MiniJinjaRenderer::new().unwrap();
        let content = "package main\n\nfunc main() {\n\tprintln(\"hi\")\n}\n\n";

        let result = renderer.render(content, &json!({})).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_render_ignores_block_and_comment_tags() {
        let renderer = MiniJinjaRenderer::new().unwrap();
        let content = "count:\n\t@echo $${#ARGS} {# keep #} done\nUse {% raw %} in docs\n";

        let result = renderer.render(content, &json!({"Module": "x"})).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_render_unknown_placeholder_is_empty() {
        let renderer = MiniJinjaRenderer::new().unwrap();
        let result = renderer
            .render("a{{ Missing }}b", &json!({"Module": "x"}))
            .unwrap();
        assert_eq!(result, "ab");
    }

    #[test]
    fn test_render_syntax_error() {
        let renderer = MiniJinjaRenderer::new().unwrap();
        let result = renderer.render("{{ Module ", &json!({"Module": "x"}));
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
