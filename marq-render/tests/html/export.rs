//! Export tests for the HTML surface (marq → HTML)
//!
//! These tests go through the Surface trait and the registry, the same path
//! the CLI takes.

use marq_core::parse;
use marq_render::surfaces::html::HtmlSurface;
use marq_render::{Surface, SurfaceRegistry};
use std::collections::HashMap;

#[test]
fn full_pipeline_produces_a_complete_document() {
    let doc = parse("# h1\n\n**bold** *it*\n\npara1 para2");
    let html = HtmlSurface::default().render(&doc).expect("render to html");

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<title>h1</title>"));
    assert!(html.contains("<h1 class=\"marq-heading\">h1</h1>"));
    assert!(html.contains("<strong class=\"marq-emphasis\">bold</strong>"));
    assert!(html.contains("<em class=\"marq-emphasis\">it</em>"));
    assert!(html.contains("<p class=\"marq-paragraph\">para1</p>"));
    assert!(html.contains("<p class=\"marq-paragraph\">para2</p>"));
}

#[test]
fn registry_dispatch_matches_direct_render() {
    let doc = parse("## section\n\nbody");
    let registry = SurfaceRegistry::default();

    let via_registry = registry.render(&doc, "html").expect("registry render");
    let direct = HtmlSurface::default().render(&doc).expect("direct render");

    assert_eq!(via_registry, direct);
}

#[test]
fn theme_option_switches_css() {
    let doc = parse("# t");
    let registry = SurfaceRegistry::default();

    let mut options = HashMap::new();
    options.insert("theme".to_string(), "serif".to_string());

    let html = registry
        .render_with_options(&doc, "html", &options)
        .expect("themed render");
    assert!(html.contains("Georgia"));
}

#[test]
fn malformed_document_renders_diagnostic_and_truncates() {
    // Seven hashes tokenize as Illegal; the builder stops with one Error
    // node and the surface renders everything up to it plus the diagnostic.
    let doc = parse("# ok\n\n####### broken\n\ntail");
    assert!(doc.has_error());

    let html = HtmlSurface::default().render(&doc).expect("render to html");
    assert!(html.contains("<h1 class=\"marq-heading\">ok</h1>"));
    assert!(html.contains("class=\"marq-error\""));
    assert!(!html.contains("tail"));
}

#[test]
fn empty_document_still_wraps() {
    let doc = parse("");
    let html = HtmlSurface::default().render(&doc).expect("render to html");
    assert!(html.contains("<div class=\"marq-document\">"));
}
