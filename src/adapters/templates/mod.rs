//! Template rendering adapters.

mod handlebars_renderer;

pub use handlebars_renderer::HandlebarsTemplateRenderer;
