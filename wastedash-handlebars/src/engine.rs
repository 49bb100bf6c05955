//! Handlebars template engine wrapper

use crate::{Result, config::HandlebarsConfig, error::HandlebarsError, helpers};
use handlebars::Handlebars;
use parking_lot::RwLock;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Template registry loaded from a directory tree
///
/// Templates are named by their path relative to the template directory,
/// without extension: `reset/done.hbs` registers as `reset/done`. Every
/// template doubles as a partial, which is how pages wrap `layout`.
#[derive(Clone)]
pub struct HandlebarsEngine {
    handlebars: Arc<RwLock<Handlebars<'static>>>,
    config: HandlebarsConfig,
}

impl HandlebarsEngine {
    pub fn new(config: HandlebarsConfig) -> Result<Self> {
        let handlebars = build_registry(&config)?;

        Ok(Self {
            handlebars: Arc::new(RwLock::new(handlebars)),
            config,
        })
    }

    /// Render a registered template
    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        if self.config.dev_mode {
            self.reload_templates()?;
        }

        let handlebars = self.handlebars.read();
        if !handlebars.has_template(template) {
            return Err(HandlebarsError::TemplateNotFound(template.to_string()));
        }
        handlebars
            .render(template, data)
            .map_err(HandlebarsError::from)
    }

    /// Render a template string (not from file)
    pub fn render_template<T: Serialize>(&self, template_str: &str, data: &T) -> Result<String> {
        self.handlebars
            .read()
            .render_template(template_str, data)
            .map_err(HandlebarsError::from)
    }

    pub fn register_template(&self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .write()
            .register_template_string(name, template)
            .map_err(HandlebarsError::from)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.read().has_template(name)
    }

    /// Registered template names
    pub fn get_templates(&self) -> Vec<String> {
        self.handlebars.read().get_templates().keys().cloned().collect()
    }

    /// Read the directory into a fresh registry and swap it in whole.
    /// Templates registered by hand are dropped.
    pub fn reload_templates(&self) -> Result<()> {
        let fresh = build_registry(&self.config)?;
        *self.handlebars.write() = fresh;
        Ok(())
    }

    pub fn config(&self) -> &HandlebarsConfig {
        &self.config
    }
}

fn build_registry(config: &HandlebarsConfig) -> Result<Handlebars<'static>> {
    if !config.template_dir.is_dir() {
        return Err(HandlebarsError::ConfigError(format!(
            "Template directory not found: {}",
            config.template_dir.display()
        )));
    }

    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(config.strict_mode);
    helpers::register_builtin_helpers(&mut handlebars);

    load_templates_from_dir(&mut handlebars, config, &config.template_dir)?;
    tracing::debug!(
        dir = %config.template_dir.display(),
        count = handlebars.get_templates().len(),
        "templates loaded"
    );
    Ok(handlebars)
}

fn load_templates_from_dir(
    handlebars: &mut Handlebars<'static>,
    config: &HandlebarsConfig,
    dir: &Path,
) -> Result<()> {
    let extension = config.template_extension.trim_start_matches('.');

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            load_templates_from_dir(handlebars, config, &path)?;
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        let name = path
            .strip_prefix(&config.template_dir)
            .unwrap_or(&path)
            .with_extension("")
            .to_string_lossy()
            .replace('\\', "/");
        let content = fs::read_to_string(&path)?;

        handlebars.register_template_string(&name, content)?;
    }

    Ok(())
}
