//! End-to-end conversion tests over parsed fragments.

use std::collections::BTreeMap;

use html_to_blocks_rs::{
    convert_fragment, convert_normalized, Alignment, Block, DiagnosticKind, HeaderData, ImageData,
    ListData, ListStyle, NormalizedNode, ParagraphData, QuoteData, RawData, TagName,
};

fn blocks(html: &str) -> Vec<Block> {
    let conversion = convert_fragment(html).unwrap();
    assert!(
        conversion.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        conversion.diagnostics
    );
    conversion.blocks
}

fn bare_node(tag: TagName) -> NormalizedNode {
    NormalizedNode {
        tag,
        text_content: None,
        inner_markup: String::new(),
        attributes: BTreeMap::new(),
        children: Vec::new(),
    }
}

#[test]
fn recognized_content_flattens_to_one_block_per_emitting_handler() {
    let blocks = blocks(
        "<body><div><p>a</p><section><h1>title</h1></section></div><blockquote>q</blockquote></body>",
    );
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph(ParagraphData {
                text: "a".to_string(),
            }),
            Block::Header(HeaderData {
                text: "title".to_string(),
                level: 1,
            }),
            Block::Quote(QuoteData {
                text: "q".to_string(),
                caption: None,
                alignment: Alignment::Left,
            }),
        ]
    );
}

#[test]
fn wrappers_flatten_away_at_any_depth() {
    let html = "<div><section><article><aside><span><p>deep</p></span></aside></article></section></div>";
    assert_eq!(
        blocks(html),
        vec![Block::Paragraph(ParagraphData {
            text: "deep".to_string(),
        })]
    );
}

#[test]
fn paragraph_with_plain_text() {
    assert_eq!(
        blocks("<p>hello</p>"),
        vec![Block::Paragraph(ParagraphData {
            text: "hello".to_string(),
        })]
    );
}

#[test]
fn paragraph_keeps_inline_markup() {
    assert_eq!(
        blocks("<p>some <b>bold</b> text</p>"),
        vec![Block::Paragraph(ParagraphData {
            text: "some <b>bold</b> text".to_string(),
        })]
    );
}

#[test]
fn anchor_converts_as_paragraph() {
    assert_eq!(
        blocks(r#"<a href="https://example.com">a link</a>"#),
        vec![Block::Paragraph(ParagraphData {
            text: "a link".to_string(),
        })]
    );
}

#[test]
fn empty_paragraph_degrades_to_container() {
    let mut heading = bare_node(TagName::H1);
    heading.inner_markup = "Title".to_string();
    let mut paragraph = bare_node(TagName::P);
    paragraph.children = vec![heading];

    let conversion = convert_normalized(&paragraph);
    assert_eq!(
        conversion.blocks,
        vec![Block::Header(HeaderData {
            text: "Title".to_string(),
            level: 1,
        })]
    );
    assert!(conversion.diagnostics.is_empty());
}

#[test]
fn image_with_src_and_alt() {
    assert_eq!(
        blocks(r#"<img src="x.png" alt="cap">"#),
        vec![Block::Image(ImageData {
            url: "x.png".to_string(),
            caption: "cap".to_string(),
            with_border: false,
            with_background: false,
            stretched: false,
        })]
    );
}

#[test]
fn image_without_src_is_dropped() {
    assert!(blocks(r#"<img alt="cap">"#).is_empty());
}

#[test]
fn image_without_alt_gets_empty_caption() {
    assert_eq!(
        blocks(r#"<img src="x.png">"#),
        vec![Block::Image(ImageData {
            url: "x.png".to_string(),
            caption: String::new(),
            with_border: false,
            with_background: false,
            stretched: false,
        })]
    );
}

#[test]
fn headings_carry_their_level() {
    assert_eq!(
        blocks("<h3>Sub</h3>"),
        vec![Block::Header(HeaderData {
            text: "Sub".to_string(),
            level: 3,
        })]
    );
    assert!(blocks("<h4></h4>").is_empty());
}

#[test]
fn unordered_list_collects_item_markup() {
    assert_eq!(
        blocks("<ul><li>A</li><li>B</li></ul>"),
        vec![Block::List(ListData {
            style: ListStyle::Unordered,
            items: vec!["A".to_string(), "B".to_string()],
        })]
    );
}

#[test]
fn ordered_list_uses_ordered_style() {
    assert_eq!(
        blocks("<ol><li>first</li></ol>"),
        vec![Block::List(ListData {
            style: ListStyle::Ordered,
            items: vec!["first".to_string()],
        })]
    );
}

#[test]
fn empty_list_emits_nothing() {
    assert!(blocks("<ul></ul>").is_empty());
}

#[test]
fn code_and_pre_wrap_plain_text() {
    assert_eq!(
        blocks("<pre>let x = 1;</pre>"),
        vec![Block::Raw(RawData {
            html: "let x = 1;".to_string(),
        })]
    );
    assert_eq!(
        blocks("<code>y</code>"),
        vec![Block::Raw(RawData {
            html: "y".to_string(),
        })]
    );
}

#[test]
fn unrecognized_child_is_isolated_from_siblings() {
    let conversion = convert_fragment("<div><custom>x</custom><h2>Hi</h2></div>").unwrap();
    assert_eq!(
        conversion.blocks,
        vec![Block::Header(HeaderData {
            text: "Hi".to_string(),
            level: 2,
        })]
    );
    assert_eq!(conversion.diagnostics.len(), 1);
    assert_eq!(conversion.diagnostics[0].kind, DiagnosticKind::UnhandledTag);
    assert_eq!(
        conversion.diagnostics[0].node.tag,
        TagName::Other("CUSTOM".to_string())
    );
}

#[test]
fn top_level_unrecognized_tag_yields_empty_result_and_diagnostic() {
    let conversion = convert_fragment("<table><tr><td>x</td></tr></table>").unwrap();
    assert!(conversion.blocks.is_empty());
    assert_eq!(conversion.diagnostics.len(), 1);
    assert_eq!(
        conversion.diagnostics[0].to_string(),
        "no handler for <TABLE>, subtree dropped"
    );
}

#[test]
fn empty_fragment_converts_to_nothing() {
    let conversion = convert_fragment("").unwrap();
    assert!(conversion.blocks.is_empty());
    assert!(conversion.diagnostics.is_empty());
}

#[test]
fn whitespace_between_top_level_elements_is_ignored() {
    assert_eq!(blocks("<p>A</p>\n  <p>B</p>").len(), 2);
}

#[test]
fn blocks_serialize_to_the_stored_editor_shape() {
    let value = serde_json::to_value(blocks(
        r#"<div><p>hi</p><img src="x.png" alt="cap"><blockquote>q</blockquote></div>"#,
    ))
    .unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"type": "paragraph", "data": {"text": "hi"}},
            {
                "type": "image",
                "data": {
                    "url": "x.png",
                    "caption": "cap",
                    "withBorder": false,
                    "withBackground": false,
                    "stretched": false,
                }
            },
            {"type": "quote", "data": {"text": "q", "alignment": "left"}},
        ])
    );
}

#[test]
fn serialized_blocks_round_trip() {
    let original = blocks("<div><h2>Hi</h2><ul><li>A</li></ul><pre>x</pre></div>");
    let json = serde_json::to_string(&original).unwrap();
    let restored: Vec<Block> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}
