//! Server-side views for the waste management dashboard
//!
//! Templates live in one directory tree and are rendered off the async
//! runtime. Pages wrap themselves in the shared layout:
//!
//! ```handlebars
//! {{#> layout}}
//!   <h1>{{title}}</h1>
//!   <p>{{plural (len rows) "record" "records"}}</p>
//! {{/layout}}
//! ```
//!
//! ## Helpers
//!
//! - built into handlebars: `eq`, `ne`, `not`, `and`, `or`, `len`
//! - added here: `plural`

pub mod config;
pub mod engine;
pub mod error;
pub mod helpers;

pub use config::HandlebarsConfig;
pub use engine::HandlebarsEngine;
pub use error::{HandlebarsError, Result};

use serde::Serialize;
use wastedash_core::HttpResponse;

/// Async facade over [`HandlebarsEngine`]
#[derive(Clone)]
pub struct HandlebarsService {
    engine: HandlebarsEngine,
}

impl HandlebarsService {
    pub fn new(config: HandlebarsConfig) -> Result<Self> {
        let engine = HandlebarsEngine::new(config)?;
        Ok(Self { engine })
    }

    /// Render a template on the blocking pool
    pub async fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        let engine = self.engine.clone();
        let template = template.to_string();
        let data_json = serde_json::to_value(data)?;

        tokio::task::spawn_blocking(move || engine.render(&template, &data_json))
            .await
            .map_err(|e| HandlebarsError::RenderError(e.to_string()))?
    }

    /// Render a template as a 200 HTML response
    pub async fn render_response<T: Serialize>(
        &self,
        template: &str,
        data: &T,
    ) -> Result<HttpResponse> {
        let html = self.render(template, data).await?;
        Ok(HttpResponse::html(html))
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.engine.has_template(name)
    }

    pub fn config(&self) -> &HandlebarsConfig {
        self.engine.config()
    }

    pub fn engine(&self) -> &HandlebarsEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_templates() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let templates_dir = temp_dir.path().join("templates");
        fs::create_dir(&templates_dir).unwrap();

        fs::write(templates_dir.join("title.hbs"), "<h1>{{title}}</h1>").unwrap();

        temp_dir
    }

    fn service(dir: &TempDir) -> HandlebarsService {
        HandlebarsService::new(HandlebarsConfig::new(dir.path().join("templates"))).unwrap()
    }

    #[tokio::test]
    async fn test_service_render() {
        let dir = create_test_templates();
        let result = service(&dir)
            .render("title", &json!({"title": "Vehicles"}))
            .await
            .unwrap();
        assert_eq!(result, "<h1>Vehicles</h1>");
    }

    #[tokio::test]
    async fn test_service_render_response() {
        let dir = create_test_templates();
        let response = service(&dir)
            .render_response("title", &json!({"title": "Routes"}))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(
            response.headers.get("Content-Type"),
            Some(&"text/html; charset=utf-8".to_string())
        );
        assert_eq!(String::from_utf8(response.body).unwrap(), "<h1>Routes</h1>");
    }

    #[tokio::test]
    async fn test_service_render_missing_template() {
        let dir = create_test_templates();
        let err = service(&dir).render("nope", &json!({})).await.unwrap_err();
        assert!(matches!(err, HandlebarsError::TemplateNotFound(_)));
    }
}
