//! # Email Template Rendering
//!
//! Fills `{{placeholder}}` slots in an [`EmailTemplate`] subject and body.
//!
//! ```text
//! "Hi {{clientName}}, order {{orderNumber}} has shipped."
//!        │                    │
//!        ▼                    ▼
//! "Hi Dana, order ORD-1004 has shipped."
//! ```
//!
//! Whitespace inside the braces is ignored (`{{ clientName }}`). Unknown
//! placeholders and unterminated `{{` are left exactly as written.

use std::collections::HashMap;

use crate::types::EmailTemplate;

/// A rendered e-mail ready to be copied into a mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub body: String,
}

/// Replaces every known `{{name}}` in `text` with `vars[name]`.
pub fn render(text: &str, vars: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        match after_open.find("}}") {
            Some(end) => {
                let name = after_open[..end].trim();
                match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after_open[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Distinct placeholder names in `text`, in order of first appearance.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            break;
        };
        let name = after_open[..end].trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
        rest = &after_open[end + 2..];
    }

    names
}

impl EmailTemplate {
    /// Renders subject and body with the same variables.
    pub fn render(&self, vars: &HashMap<String, String>) -> RenderedEmail {
        RenderedEmail {
            subject: render(&self.subject, vars),
            body: render(&self.body, vars),
        }
    }

    /// Placeholders used anywhere in the template.
    pub fn placeholders(&self) -> Vec<String> {
        let mut names = placeholders(&self.subject);
        for name in placeholders(&self.body) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_replaces_known_placeholders() {
        let text = "Hi {{clientName}}, order {{ orderNumber }} has shipped.";
        let out = render(text, &vars(&[("clientName", "Dana"), ("orderNumber", "ORD-1004")]));
        assert_eq!(out, "Hi Dana, order ORD-1004 has shipped.");
    }

    #[test]
    fn test_render_keeps_unknown_and_unterminated() {
        let out = render("{{missing}} and {{open", &vars(&[]));
        assert_eq!(out, "{{missing}} and {{open");
    }

    #[test]
    fn test_render_handles_multibyte_text() {
        let out = render("Grüße {{name}} ✓", &vars(&[("name", "Zoë")]));
        assert_eq!(out, "Grüße Zoë ✓");
    }

    #[test]
    fn test_template_placeholders_dedup() {
        let template = EmailTemplate {
            subject: "Quote for {{clientName}}".to_string(),
            body: "Dear {{clientName}},\nTotal: {{total}}".to_string(),
            ..EmailTemplate::default()
        };
        assert_eq!(template.placeholders(), vec!["clientName", "total"]);

        let rendered = template.render(&vars(&[("clientName", "Lee"), ("total", "$120.00")]));
        assert_eq!(rendered.subject, "Quote for Lee");
        assert_eq!(rendered.body, "Dear Lee,\nTotal: $120.00");
    }
}
