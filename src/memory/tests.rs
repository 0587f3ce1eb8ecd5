use super::*;

#[test]
fn test_builder_allocates_in_document_order() {
    let mut b = DocumentBuilder::new();
    let p = b.block("p", |p| {
        p.text("a");
        p.inline("em", |em| {
            em.text("b");
        });
    });
    let q = b.block("p", |p| {
        p.text("c");
    });
    let doc = b.build();

    assert!(p < q);
    let texts = doc.text_nodes();
    assert_eq!(texts.len(), 3);
    assert!(texts.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(doc.parent(texts[0]), Some(p));
    assert_eq!(doc.tag_name(p), Some("p"));
    assert_eq!(doc.tag_name(texts[0]), None);
}

#[test]
fn test_next_and_prev_text_node() {
    let mut b = DocumentBuilder::new();
    let p = b.block("p", |p| {
        p.text("a");
        p.text("b");
    });
    let doc = b.build();
    let a = doc.find_text("a").unwrap();
    let bb = doc.find_text("b").unwrap();

    assert_eq!(doc.next_text_node(doc.root()), Some(a));
    assert_eq!(doc.next_text_node(p), Some(a));
    assert_eq!(doc.next_text_node(a), Some(bb));
    assert_eq!(doc.next_text_node(bb), None);
    assert_eq!(doc.prev_text_node(bb), Some(a));
    assert_eq!(doc.prev_text_node(a), None);
}

#[test]
fn test_from_plain_text_paragraphs() {
    let doc = MemoryDocument::from_plain_text("First line\nsecond line\n\n\nNext para\n");
    let texts = doc.text_nodes();
    assert_eq!(texts.len(), 3);
    assert_eq!(doc.text(texts[0]), Some("First line\n"));
    assert_eq!(doc.text(texts[2]), Some("Next para\n"));

    let first_block = doc.parent(texts[0]).unwrap();
    assert_eq!(doc.parent(texts[1]), Some(first_block));
    assert_ne!(doc.parent(texts[2]), Some(first_block));

    // one row per line plus one blank row between paragraphs
    assert_eq!(doc.layout_top(texts[0]), 0.0);
    assert_eq!(doc.layout_top(texts[1]), 1.0);
    assert_eq!(doc.layout_top(texts[2]), 3.0);
}

#[test]
fn test_from_plain_text_empty() {
    let doc = MemoryDocument::from_plain_text("\n\n   \n");
    assert!(doc.text_nodes().is_empty());
}

#[test]
fn test_hidden_subtree_takes_no_space() {
    let mut b = DocumentBuilder::new();
    b.hidden("div", |d| {
        d.text("gone");
    });
    let p = b.block("p", |p| {
        p.text("shown");
    });
    let doc = b.build();
    assert_eq!(doc.layout_top(p), 0.0);
    assert!(!doc.has_layout_box(doc.parent(doc.find_text("gone").unwrap()).unwrap()));
    assert!(doc.has_layout_box(p));
}

#[test]
fn test_selection_collapse_and_order() {
    let mut doc = MemoryDocument::from_plain_text("alpha beta");
    let node = doc.text_nodes()[0];
    let a = TextPosition::new(node, 6);
    let f = TextPosition::new(node, 2);
    doc.set_selection(a, f);
    assert_eq!(doc.selection_range(), Some((f, a)));
    assert_eq!(doc.selected_text(), "pha ");
    assert!(doc.is_selected(node, 2));
    assert!(!doc.is_selected(node, 6));

    doc.collapse_to_end();
    assert_eq!(doc.selection(), Some((a, a)));
    assert_eq!(doc.selected_text(), "");
    assert!(doc.has_selection());
    assert!(!doc.has_nonempty_selection());

    doc.set_selection(a, f);
    doc.collapse_to_start();
    assert_eq!(doc.selection(), Some((f, f)));

    doc.clear();
    assert!(!doc.has_selection());
    doc.extend(a);
    assert!(!doc.has_selection());
}

#[test]
fn test_selected_text_across_nodes() {
    let mut doc = MemoryDocument::from_plain_text("one two\nthree\n\nfour five");
    let texts = doc.text_nodes().to_vec();
    doc.set_selection(TextPosition::new(texts[0], 4), TextPosition::new(texts[2], 4));
    assert_eq!(doc.selected_text(), "two\nthree\nfour");
}

#[test]
fn test_editable_focus() {
    let mut b = DocumentBuilder::new();
    let input = b.element("input", DisplayType::InlineBlock, |_| {});
    let area = b.block("textarea", |_| {});
    let mut inner = None;
    let editor = b.editable("div", |d| {
        inner = Some(d.block("p", |p| {
            p.text("draft");
        }));
    });
    let plain = b.block("p", |p| {
        p.text("read only");
    });
    let mut doc = b.build();

    assert!(!doc.is_editable_focused());
    for element in [input, area, editor, inner.unwrap()] {
        doc.focus_element(Some(element));
        assert!(doc.is_editable_focused());
    }
    doc.focus_element(Some(plain));
    assert!(!doc.is_editable_focused());
}

#[test]
fn test_scroll_is_recorded_and_clamped() {
    let mut b = DocumentBuilder::new().with_viewport_height(100.0);
    for i in 0..10 {
        b.block("p", |p| {
            p.text(format!("line {i}"));
        });
    }
    let mut doc = b.build();
    let last = doc.find_text("line 9").unwrap();
    assert_eq!(doc.bounding_top(last), 180.0);

    doc.scroll_by(50.0, ScrollBehavior::Smooth);
    assert_eq!(doc.scroll_y(), 50.0);
    assert_eq!(doc.bounding_top(last), 130.0);

    doc.scroll_by(500.0, ScrollBehavior::Instant);
    assert_eq!(doc.scroll_y(), 100.0);
    doc.scroll_by(-500.0, ScrollBehavior::Smooth);
    assert_eq!(doc.scroll_y(), 0.0);
    assert_eq!(doc.scrolls().len(), 3);
    assert_eq!(doc.scrolls()[1].dy, 500.0);
}

#[test]
fn test_text_position_at_point() {
    let mut b = DocumentBuilder::new();
    b.block("p", |p| {
        p.text("first row");
    });
    b.block("p", |p| {
        p.text("   ");
    });
    b.block("p", |p| {
        p.text("third row");
    });
    let doc = b.build();
    let first = doc.find_text("first").unwrap();
    let third = doc.find_text("third").unwrap();

    // 8px columns, 20px rows
    assert_eq!(
        doc.text_position_at_point(17.0, 5.0),
        Some(TextPosition::new(first, 2))
    );
    assert_eq!(
        doc.text_position_at_point(0.0, 45.0),
        Some(TextPosition::new(third, 0))
    );
    // far right clamps to the last character
    assert_eq!(
        doc.text_position_at_point(900.0, 50.0),
        Some(TextPosition::new(third, 8))
    );
    // the blank row is never hit; the nearest text wins
    let hit = doc.text_position_at_point(4.0, 30.0).unwrap();
    assert_ne!(doc.text(hit.node), Some("   "));
}

#[test]
fn test_text_position_at_point_empty_document() {
    let doc = DocumentBuilder::new().build();
    assert_eq!(doc.text_position_at_point(0.0, 0.0), None);
}
