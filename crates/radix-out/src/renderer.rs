//! Template rendering for RADIX-OUT.
//!
//! Uses Handlebars for template rendering with custom helpers:
//! - step_line: Style one step-trace line by its category
//! - pad: Left-align a value in a fixed-width column

use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use radix_core::StepLine;
use serde::Serialize;

use crate::templates::BUILTIN;
use crate::RenderError;

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Compiled renderer with registered helpers
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer with the built-in templates
    pub fn new() -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();

        // Plain-text output: quotes in error messages must survive
        handlebars.register_escape_fn(no_escape);
        handlebars.set_strict_mode(false);

        handlebars.register_helper("step_line", Box::new(StepLineHelper));
        handlebars.register_helper("pad", Box::new(PadHelper));

        for template in BUILTIN {
            handlebars
                .register_template_string(template.name, template.template)
                .map_err(|e| RenderError::Template(format!("{}: {}", template.name, e)))?;
        }

        Ok(TemplateRenderer { handlebars })
    }

    /// Render a named template with data
    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String, RenderError> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| RenderError::Render(e.to_string()))
    }

    /// Render a template string directly
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String, RenderError> {
        self.handlebars
            .render_template(template, data)
            .map_err(|e| RenderError::Render(e.to_string()))
    }
}

/// Apply terminal styling to one trace line.
pub fn style_step_line(line: &str, color: bool) -> String {
    if !color {
        return line.to_string();
    }
    match StepLine::classify(line) {
        StepLine::Header => format!("{}{}{}", BOLD, line, RESET),
        StepLine::Note => format!("{}{}{}", DIM, line, RESET),
        StepLine::Blank | StepLine::Detail => line.to_string(),
    }
}

// ============================================================================
// Custom Helpers
// ============================================================================

/// `{{step_line line color}}`
struct StepLineHelper;

impl HelperDef for StepLineHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let line = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
        let color = h.param(1).and_then(|v| v.value().as_bool()).unwrap_or(false);

        out.write(&style_step_line(line, color))?;
        Ok(())
    }
}

/// `{{pad value width}}`, strings or numbers
struct PadHelper;

impl HelperDef for PadHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let text = match h.param(0).map(|v| v.value()) {
            Some(v) => v.as_str().map(String::from).unwrap_or_else(|| v.to_string()),
            None => String::new(),
        };
        let width = h.param(1).and_then(|v| v.value().as_u64()).unwrap_or(0) as usize;

        out.write(&format!("{:<width$}", text, width = width))?;
        Ok(())
    }
}
