use crate::plan::FrontMatter;
use miette::Diagnostic;
use tera::{Context, Tera};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum TransformError {
    #[error("Error occurred attempting to render document '{id}'")]
    #[diagnostic(code(docmigrate::transform::render))]
    Render {
        id: String,
        #[source]
        source: tera::Error,
    },
}

/// Skeleton of every written document: metadata block, blank line, body.
/// Only this skeleton is parsed as a template; the body arrives through the
/// context, so Markdown containing `{{` or `{%` passes through untouched.
const DOC_TEMPLATE: &str = "---
id: {{ id }}
title: {{ title }}
sidebar_position: {{ position }}
---

{{ content }}";

/// Wraps `body` in the metadata block described by `front_matter`.
///
/// Pure string-to-string: no filesystem access, no escaping, the body is
/// reproduced verbatim after the blank line.
///
/// # Errors
///
/// Returns a [`TransformError`] if tera fails to render the skeleton.
pub fn render_document(front_matter: &FrontMatter, body: &str) -> Result<String, TransformError> {
    let mut context = Context::new();
    context.insert("id", &front_matter.id);
    context.insert("title", &quote_yaml_string(&front_matter.title));
    context.insert("position", &front_matter.sidebar_position);
    context.insert("content", body);

    Tera::one_off(DOC_TEMPLATE, &context, false).map_err(|error| TransformError::Render {
        id: front_matter.id.clone(),
        source: error,
    })
}

/// Body used for stub documents that have no legacy source yet.
pub fn placeholder_body(front_matter: &FrontMatter) -> String {
    format!("# {}\n\nComing soon...", front_matter.title)
}

/// Quote a YAML string value if it would not survive as a plain scalar.
fn quote_yaml_string(value: &str) -> String {
    if value.contains(':') || value.contains('#') || value.contains('"') || value.starts_with(' ') {
        let escaped = value.replace('"', "\\\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}
