//! Round-trip tests for the canonical markup surface
//!
//! Rendering a clean document to markup and parsing the output again must
//! reproduce the node sequence. The property holds for documents without
//! diagnostics; a failed document intentionally re-parses as a failed
//! document.

use marq_core::{parse, Document, EmphasisStyle, Node};
use marq_render::surfaces::markup::serialize_to_markup;
use proptest::prelude::*;

// Clean nodes only: no Error, no LineBreak (swallowed-whitespace policy),
// paragraph text restricted to single words (runs re-split on whitespace),
// italic text non-empty (an empty italic span serializes to `**`, which is
// an empty bold span).
fn clean_node() -> impl Strategy<Value = Node> {
    prop_oneof![
        (1u8..=6, "[a-zA-Z0-9 ]{0,16}")
            .prop_map(|(level, text)| Node::Heading { level, text }),
        "[a-zA-Z0-9]{1,8}".prop_map(|text| Node::Paragraph { text }),
        "[a-zA-Z0-9 ]{0,12}".prop_map(|text| Node::Emphasis {
            style: EmphasisStyle::Bold,
            text
        }),
        "[a-zA-Z0-9 ]{1,12}".prop_map(|text| Node::Emphasis {
            style: EmphasisStyle::Italic,
            text
        }),
    ]
}

proptest! {
    #[test]
    fn clean_documents_roundtrip(nodes in proptest::collection::vec(clean_node(), 0..12)) {
        let doc = Document { nodes };
        let rendered = serialize_to_markup(&doc);
        prop_assert_eq!(parse(&rendered), doc);
    }
}

#[test]
fn kitchensink_roundtrip() {
    let source = "# h1\n\n**bold** *it*\n\npara1 para2\n\n###### deep";
    let doc = parse(source);
    let rendered = serialize_to_markup(&doc);
    assert_eq!(parse(&rendered), doc);
}

#[test]
fn rendering_is_idempotent() {
    let doc = parse("## a\n\nb **c**");
    let once = serialize_to_markup(&doc);
    let twice = serialize_to_markup(&parse(&once));
    assert_eq!(once, twice);
}
