//! dotloom - JSON data models rendered as Graphviz DOT diagrams.
//!
//! Parsing, styling, and rendering for data-model diagrams. An input
//! document describing entities, relationships, and layout hints is
//! parsed into a typed model, visual styling is resolved through a
//! three-level cascade (entity-specific, configured default, built-in
//! constant), and the model is rendered to DOT text through named
//! templates with a template-free fallback path that cannot fail for a
//! well-formed model.

pub mod config;
pub mod parse;
pub mod render;

mod error;


pub use dotloom_core::{model, style};

pub use error::DotloomError;

use dotloom_core::model::Diagram;

use config::DiagramConfig;
use render::{DotRenderer, TemplateSet};

/// Front door for the conversion pipeline.
///
/// A generator is built once from an effective configuration and can
/// convert any number of documents.
///
/// # Examples
///
/// ```
/// use dotloom::{DotGenerator, config::DiagramConfig};
///
/// let source = r#"{"entities": [{"id": "user", "name": "User"}]}"#;
///
/// let generator = DotGenerator::new(DiagramConfig::default());
/// let diagram = generator.parse(source).expect("valid model");
/// let dot = generator.render(&diagram);
///
/// assert!(dot.contains("digraph"));
/// assert!(dot.contains("user"));
/// ```
pub struct DotGenerator {
    config: DiagramConfig,
    templates: TemplateSet,
}

impl Default for DotGenerator {
    fn default() -> Self {
        Self::new(DiagramConfig::default())
    }
}

impl DotGenerator {
    /// Creates a generator from an effective configuration.
    ///
    /// The template environment is prepared here; problems with
    /// configured template resources are not fatal and surface later as
    /// per-element fallbacks.
    pub fn new(config: DiagramConfig) -> Self {
        let templates = TemplateSet::new(config.templates());
        Self { config, templates }
    }

    /// Parses an input document into a [`Diagram`].
    ///
    /// The configured default layout direction applies when the document
    /// does not specify one.
    ///
    /// # Errors
    ///
    /// Returns [`DotloomError::Parse`] when the document is not valid
    /// JSON or a required field is absent or malformed.
    pub fn parse(&self, source: &str) -> Result<Diagram, DotloomError> {
        let diagram = parse::parse_diagram(source, self.config.settings().rankdir())?;
        Ok(diagram)
    }

    /// Renders a diagram to DOT text.
    ///
    /// This cannot fail for a well-formed model: any template lookup or
    /// evaluation failure is logged and recovered per element through the
    /// fallback generator.
    pub fn render(&self, diagram: &Diagram) -> String {
        DotRenderer::new(&self.config, &self.templates).render(diagram)
    }

    /// Parses and renders in one step.
    ///
    /// # Errors
    ///
    /// Returns [`DotloomError`] for parse failures; rendering itself
    /// cannot fail.
    pub fn convert(&self, source: &str) -> Result<String, DotloomError> {
        let diagram = self.parse(source)?;
        Ok(self.render(&diagram))
    }

    /// Returns the effective configuration of this generator.
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }
}
