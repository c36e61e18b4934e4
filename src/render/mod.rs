//! Template rendering seam.
//!
//! The real HTML templates live outside this crate; handlers only supply
//! a template name, the resolved locale and the structured data. The
//! bundled [`BasicRenderer`] produces minimal bilingual pages so the
//! service runs standalone and the dispatch layer stays testable.

use serde_json::Value;

use crate::i18n::Locale;
use crate::routing::table::{LIVE_POSTCODE_CY, LIVE_POSTCODE_EN};

/// Closed set of pages the dispatch layer can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    PostcodeForm,
    LiveResults,
    SandboxResults,
    SandboxEmptyState,
    NotFound,
}

/// Render a page body for the given locale and data.
pub trait Renderer: Send + Sync {
    fn render(&self, template: Template, locale: Locale, data: &Value) -> Result<String, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template {0:?} missing required field {1}")]
    MissingField(Template, &'static str),
}

/// Minimal built-in renderer. Real deployments swap this for the
/// template-engine collaborator behind the same trait.
pub struct BasicRenderer;

impl BasicRenderer {
    fn page(locale: Locale, title: &str, body: &str) -> String {
        format!(
            "<!doctype html><html lang=\"{lang}\"><head><meta charset=\"utf-8\">\
             <title>{title}</title></head><body>{body}</body></html>",
            lang = locale.tag(),
        )
    }

    fn heading(locale: Locale, en: &str, cy: &str) -> String {
        match locale {
            Locale::English => format!("<h1>{en}</h1>"),
            Locale::Welsh => format!("<h1>{cy}</h1>"),
        }
    }
}

impl Renderer for BasicRenderer {
    fn render(&self, template: Template, locale: Locale, data: &Value) -> Result<String, RenderError> {
        let body = match template {
            Template::PostcodeForm => {
                let action = match locale {
                    Locale::English => LIVE_POSTCODE_EN,
                    Locale::Welsh => LIVE_POSTCODE_CY,
                };
                format!(
                    "{}<form method=\"get\" action=\"{action}\">\
                     <label for=\"postcode\">Postcode</label>\
                     <input id=\"postcode\" name=\"postcode\" type=\"text\">\
                     <button type=\"submit\">Search</button></form>",
                    Self::heading(locale, "Find your polling station", "Dod o hyd i'ch gorsaf bleidleisio"),
                )
            }
            Template::LiveResults => format!(
                "{}<pre>{}</pre>",
                Self::heading(locale, "Your election information", "Eich gwybodaeth etholiad"),
                data,
            ),
            Template::SandboxResults => {
                let description = data
                    .get("description")
                    .and_then(Value::as_str)
                    .ok_or(RenderError::MissingField(template, "description"))?;
                let response = data
                    .get("response")
                    .ok_or(RenderError::MissingField(template, "response"))?;
                format!(
                    "{}<p>{description}</p><pre>{response}</pre>",
                    Self::heading(locale, "Sandbox election information", "Gwybodaeth etholiad blwch tywod"),
                )
            }
            Template::SandboxEmptyState => format!(
                "{}<p>{}</p>",
                Self::heading(locale, "No results", "Dim canlyniadau"),
                match locale {
                    Locale::English => "There are no sandbox results for this postcode.",
                    Locale::Welsh => "Nid oes canlyniadau blwch tywod ar gyfer y cod post hwn.",
                },
            ),
            Template::NotFound => format!(
                "{}<p>{}</p>",
                Self::heading(locale, "Page not found", "Heb ganfod y dudalen"),
                match locale {
                    Locale::English => "Check the address and try again.",
                    Locale::Welsh => "Gwiriwch y cyfeiriad a rhowch gynnig arall arni.",
                },
            ),
        };
        Ok(Self::page(locale, "Where do I vote?", &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pages_carry_the_locale_language_tag() {
        let renderer = BasicRenderer;
        let en = renderer
            .render(Template::PostcodeForm, Locale::English, &Value::Null)
            .unwrap();
        let cy = renderer
            .render(Template::PostcodeForm, Locale::Welsh, &Value::Null)
            .unwrap();
        assert!(en.contains("lang=\"en\""));
        assert!(cy.contains("lang=\"cy\""));
    }

    #[test]
    fn sandbox_results_require_description_and_response() {
        let renderer = BasicRenderer;
        let err = renderer
            .render(Template::SandboxResults, Locale::English, &json!({}))
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingField(_, "description")));

        let ok = renderer
            .render(
                Template::SandboxResults,
                Locale::English,
                &json!({ "description": "No local ballots", "response": { "dates": [] } }),
            )
            .unwrap();
        assert!(ok.contains("No local ballots"));
    }
}
