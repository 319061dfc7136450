// src/render.rs
//! Template-based line rendering for certificate records

use anyhow::{Context, Result};
use minijinja::Environment;
use std::io::Write;

use crate::types::CertificateRecord;

const TEMPLATE_NAME: &str = "line";

/// Renders one certificate record per line through a user-supplied template.
///
/// The template is parsed once at construction and never mutated afterwards.
/// A `padlen(value, width)` helper is available to the template, right-padding
/// or truncating a string to exactly `width` characters.
pub struct LineRenderer {
    env: Environment<'static>,
}

impl LineRenderer {
    /// Parse a format template. A trailing newline is appended if the format
    /// does not already end with one, so each record renders as one line.
    pub fn new(format: &str) -> Result<Self> {
        let mut source = format.to_string();
        if !source.ends_with('\n') {
            source.push('\n');
        }

        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_function("padlen", padlen);
        env.add_template_owned(TEMPLATE_NAME, source)
            .context("unable to parse format template")?;

        Ok(Self { env })
    }

    /// Render a single record to the writer.
    pub fn render_to<W: Write>(&self, record: &CertificateRecord, out: &mut W) -> Result<()> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        template.render_to_write(record, &mut *out)?;
        Ok(())
    }
}

/// Right-pad or truncate a string to exactly `width` characters.
fn padlen(value: String, width: usize) -> String {
    let truncated: String = value.chars().take(width).collect();
    format!("{truncated:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name_value: &str) -> CertificateRecord {
        CertificateRecord {
            issuer_ca_id: 1,
            issuer_name: "C=US, O=Test CA".to_string(),
            name_value: name_value.to_string(),
            min_cert_id: 42,
            min_entry_timestamp: "2024-01-01T00:00:00".to_string(),
            not_before: "2024-01-01T00:00:00".to_string(),
            not_after: "2025-01-01T00:00:00".to_string(),
        }
    }

    fn render(format: &str, record: &CertificateRecord) -> String {
        let renderer = LineRenderer::new(format).unwrap();
        let mut out = Vec::new();
        renderer.render_to(record, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_single_field() {
        assert_eq!(
            render("{{ name_value }}", &record("www.example.com")),
            "www.example.com\n"
        );
    }

    #[test]
    fn test_render_appends_newline_once() {
        assert_eq!(
            render("{{ name_value }}\n", &record("www.example.com")),
            "www.example.com\n"
        );
    }

    #[test]
    fn test_render_all_fields() {
        let line = render(
            "{{ issuer_ca_id }} {{ issuer_name }} {{ name_value }} {{ min_cert_id }} \
             {{ min_entry_timestamp }} {{ not_before }} {{ not_after }}",
            &record("www.example.com"),
        );
        assert_eq!(
            line,
            "1 C=US, O=Test CA www.example.com 42 \
             2024-01-01T00:00:00 2024-01-01T00:00:00 2025-01-01T00:00:00\n"
        );
    }

    #[test]
    fn test_default_format_pads_and_tabs() {
        let line = render(crate::cli::DEFAULT_FORMAT, &record("short.com"));
        assert_eq!(line, "short.com           \t2024-01-01T00:00:00\t2025-01-01T00:00:00\n");
    }

    #[test]
    fn test_padlen_pads_short_values() {
        assert_eq!(padlen("abc".to_string(), 6), "abc   ");
    }

    #[test]
    fn test_padlen_truncates_long_values() {
        assert_eq!(padlen("abcdefgh".to_string(), 4), "abcd");
    }

    #[test]
    fn test_padlen_exact_width() {
        assert_eq!(padlen("abcd".to_string(), 4), "abcd");
    }

    #[test]
    fn test_bad_template_is_rejected() {
        assert!(LineRenderer::new("{{ unclosed").is_err());
    }

    #[test]
    fn test_render_failure_surfaces_as_error() {
        // padlen cannot take a negative width
        let renderer = LineRenderer::new("{{ padlen(name_value, min_cert_id) }}").unwrap();
        let mut bad = record("www.example.com");
        bad.min_cert_id = -1;

        let mut out = Vec::new();
        assert!(renderer.render_to(&bad, &mut out).is_err());
    }
}
