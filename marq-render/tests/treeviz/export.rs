//! Export tests for the treeviz surface

use insta::assert_snapshot;
use marq_core::{parse, Document, Node};
use marq_render::surfaces::treeviz::to_treeviz_str;
use marq_render::{Surface, SurfaceRegistry};

#[test]
fn kitchensink_treeviz() {
    let doc = parse("# h1\n\n**bold** *it*\n\npara1 para2");
    let output = to_treeviz_str(&doc);

    assert_snapshot!(output.trim_end(), @r"
    ⧉ Document (5 nodes)
    ├─ § h1
    ├─ 𝐁 bold
    ├─ 𝐼 it
    ├─ ¶ para1
    └─ ¶ para2
    ");
}

#[test]
fn error_node_is_the_last_line() {
    let doc = Document {
        nodes: vec![
            Node::Paragraph {
                text: "kept".to_string(),
            },
            Node::Error {
                message: "unexpected illegal token in stream".to_string(),
            },
            Node::Paragraph {
                text: "dropped".to_string(),
            },
        ],
    };
    let output = to_treeviz_str(&doc);

    assert!(output.contains("✗ unexpected illegal token in"));
    assert!(!output.contains("dropped"));
}

#[test]
fn treeviz_is_registered_by_default() {
    let registry = SurfaceRegistry::default();
    let surface = registry.get("treeviz").expect("treeviz registered");
    let output = surface.render(&parse("word")).expect("render");
    assert!(output.starts_with("⧉ Document (1 nodes)"));
}
