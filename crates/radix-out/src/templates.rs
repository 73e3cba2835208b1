//! Built-in templates for RADIX-OUT.
//!
//! Every loop body starts with its own newline so no template line is a
//! bare block tag; the rendered text is trimmed at the end by the caller.

/// A single template definition
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
}

pub const CONVERSION: &str = "conversion";
pub const ALL_CONVERSIONS: &str = "all_conversions";
pub const SYSTEMS: &str = "systems";

/// Templates registered by every renderer
pub const BUILTIN: &[Template] = &[
    Template {
        name: CONVERSION,
        description: "One conversion with its step trace",
        template: "{{#if isValid}}{{input}} ({{from}}) = {{result}} ({{to}})\
{{#if showSteps}}\n\nSteps:{{#each steps}}\n{{step_line this @root.color}}{{/each}}{{/if}}\
{{else}}error: {{errorMessage}}{{/if}}",
    },
    Template {
        name: ALL_CONVERSIONS,
        description: "One value in every base",
        template: "{{#if isValid}}{{input}} ({{from}}){{#each rows}}\n  {{pad label 13}}{{digits}}{{/each}}\
{{else}}error: {{errorMessage}}{{/if}}",
    },
    Template {
        name: SYSTEMS,
        description: "Supported number systems and conversion pairs",
        template: "Number systems:{{#each systems}}\n  {{pad label 13}}base {{pad base 4}}e.g. {{placeholder}}{{/each}}\
\n\nConversions:{{#each pairs}}\n  {{label}}{{/each}}",
    },
];

/// Get a built-in template by name
pub fn get(name: &str) -> Option<&'static Template> {
    BUILTIN.iter().find(|t| t.name == name)
}

/// List all template names
pub fn list_templates() -> Vec<&'static str> {
    BUILTIN.iter().map(|t| t.name).collect()
}
