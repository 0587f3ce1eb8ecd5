use super::classify::*;
use super::motions::*;
use super::scan::*;
use crate::constants::motion::MAX_NODES;
use crate::dom::{DisplayType, Document, TextPosition};
use crate::memory::{DocumentBuilder, MemoryDocument};

fn single_block(text: &str) -> MemoryDocument {
    let mut b = DocumentBuilder::new();
    b.block("p", |p| {
        p.text(text);
    });
    b.build()
}

fn two_paragraphs() -> MemoryDocument {
    let mut b = DocumentBuilder::new();
    b.block("p", |p| {
        p.text("First para text");
    });
    b.block("p", |p| {
        p.text("Second para text");
    });
    b.build()
}

fn pos(doc: &MemoryDocument, needle: &str) -> TextPosition {
    doc.position_of(needle).unwrap()
}

// Classification

#[test]
fn test_is_word_char_partitions_ascii_word_set() {
    for code in 0u32..0x3000 {
        let Some(c) = char::from_u32(code) else {
            continue;
        };
        let expected = c.is_ascii_lowercase() || c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_';
        assert_eq!(is_word_char(c), expected, "char {:?}", c);
        let class = classify_char(c);
        assert_eq!(class == CharClass::Word, expected);
        assert_eq!(class == CharClass::NonWord, !expected);
    }
}

#[test]
fn test_non_ascii_letters_are_not_word_chars() {
    assert!(!is_word_char('é'));
    assert!(!is_word_char('ß'));
    assert!(!is_word_char('\u{301}')); // combining acute accent
    assert!(!is_word_char('语'));
    assert!(!is_word_char(' '));
    assert!(!is_word_char('-'));
}

// Scanners

#[test]
fn test_forward_scan_initial_state() {
    assert_eq!(
        WordForwardScan::starting_on(Some('a')).state(),
        ForwardState::SeekingBreak
    );
    assert_eq!(
        WordForwardScan::starting_on(Some(' ')).state(),
        ForwardState::SeekingStart
    );
    assert_eq!(
        WordForwardScan::starting_on(None).state(),
        ForwardState::SeekingStart
    );
    assert_eq!(
        WordForwardScan::outside_word().state(),
        ForwardState::SeekingStart
    );
}

#[test]
fn test_forward_scan_finds_next_word_start() {
    let text: Vec<char> = "foo->bar".chars().collect();
    let mut scan = WordForwardScan::starting_on(Some(text[0]));
    let hit = text.iter().position(|&c| scan.step(is_word_char(c)));
    assert_eq!(hit, Some(5));
}

#[test]
fn test_backward_scan_phases() {
    let text: Vec<char> = "one two  ".chars().collect();
    let mut scan = WordBackwardScan::new();
    let mut result = None;
    for i in (0..text.len()).rev() {
        if let Some(found) = scan.step(is_word_char(text[i]), i) {
            result = Some(found);
            break;
        }
        if i == 6 {
            assert_eq!(scan.phase(), BackwardPhase::SkipWord);
        }
    }
    assert_eq!(result, Some(4));
}

#[test]
fn test_backward_scan_finish() {
    let mut scan = WordBackwardScan::new();
    assert_eq!(scan.step(false, 3), None);
    assert_eq!(scan.finish(), None);

    let mut scan = WordBackwardScan::new();
    assert_eq!(scan.step(true, 1), None);
    assert_eq!(scan.step(true, 0), None);
    assert_eq!(scan.finish(), Some(0));
}

// Motion keys

#[test]
fn test_motion_keys() {
    for key in ['w', 'b', '}', '{'] {
        assert_eq!(Motion::from_key(key).map(Motion::key), Some(key));
    }
    assert_eq!(Motion::from_key('x'), None);
    assert!(Motion::WordBackward.is_backward());
    assert!(Motion::ParagraphBackward.is_backward());
    assert!(!Motion::WordForward.is_backward());
    assert!(!Motion::ParagraphForward.is_backward());
}

// w

#[test]
fn test_word_forward_scenario() {
    let doc = single_block("Hello   world. Next line");
    let node = doc.text_nodes()[0];

    let first = word_forward(&doc, TextPosition::new(node, 0), MAX_NODES);
    assert_eq!(first, Some(TextPosition::new(node, 8)));

    // a Normal-mode cursor covers [8, 9); the motion starts at its end
    let second = word_forward(&doc, TextPosition::new(node, 9), MAX_NODES);
    assert_eq!(second, Some(TextPosition::new(node, 15)));
}

#[test]
fn test_word_forward_from_non_word_char() {
    let doc = single_block("a  b");
    let node = doc.text_nodes()[0];
    // on whitespace: the next word char is the target
    assert_eq!(
        word_forward(&doc, TextPosition::new(node, 1), MAX_NODES),
        Some(TextPosition::new(node, 3))
    );
}

#[test]
fn test_word_forward_symbols_are_skipped() {
    let doc = single_block("foo->bar");
    let node = doc.text_nodes()[0];
    assert_eq!(
        word_forward(&doc, TextPosition::new(node, 0), MAX_NODES),
        Some(TextPosition::new(node, 5))
    );
}

#[test]
fn test_word_forward_word_spans_nodes() {
    let mut b = DocumentBuilder::new();
    b.block("p", |p| {
        p.text("Hel");
        p.inline("b", |bold| {
            bold.text("lo");
        });
        p.text(" world");
    });
    let doc = b.build();
    let start = TextPosition::new(doc.text_nodes()[0], 0);
    let world = doc.find_text(" world").unwrap();
    assert_eq!(
        word_forward(&doc, start, MAX_NODES),
        Some(TextPosition::new(world, 1))
    );
}

#[test]
fn test_word_forward_from_end_of_node() {
    let doc = two_paragraphs();
    let first = doc.text_nodes()[0];
    let second = doc.text_nodes()[1];
    let end = TextPosition::new(first, doc.text_len(first));
    // nothing under the cursor: the first word char of the next node wins
    assert_eq!(
        word_forward(&doc, end, MAX_NODES),
        Some(TextPosition::new(second, 0))
    );
}

#[test]
fn test_inline_boundary_depends_on_direction() {
    let mut b = DocumentBuilder::new();
    b.block("p", |p| {
        p.inline("b", |bold| {
            bold.text("read");
        });
        p.text("walk on");
    });
    let doc = b.build();
    let read = doc.find_text("read").unwrap();
    let walk = doc.find_text("walk on").unwrap();

    assert_eq!(
        word_forward(&doc, TextPosition::new(read, 4), MAX_NODES),
        Some(TextPosition::new(walk, 0))
    );
    assert_eq!(
        word_backward(&doc, TextPosition::new(walk, 2), MAX_NODES),
        Some(TextPosition::new(read, 0))
    );
}

#[test]
fn test_word_forward_from_element() {
    let doc = two_paragraphs();
    let root = doc.root();
    assert_eq!(
        word_forward(&doc, TextPosition::new(root, 0), MAX_NODES),
        Some(TextPosition::new(doc.text_nodes()[0], 0))
    );
}

#[test]
fn test_word_forward_skips_hidden_and_script_text() {
    let mut b = DocumentBuilder::new();
    b.block("p", |p| {
        p.text("one ");
    });
    b.block("script", |s| {
        s.text("var x = 1;");
    });
    b.hidden("div", |d| {
        d.block("p", |p| {
            p.text("ghost");
        });
    });
    b.block("p", |p| {
        p.text("three");
    });
    let doc = b.build();

    let start = TextPosition::new(doc.text_nodes()[0], 0);
    let three = doc.find_text("three").unwrap();
    assert_eq!(
        word_forward(&doc, start, MAX_NODES),
        Some(TextPosition::new(three, 0))
    );
}

#[test]
fn test_word_forward_last_word_is_noop() {
    let doc = single_block("only words here");
    let node = doc.text_nodes()[0];
    assert_eq!(word_forward(&doc, TextPosition::new(node, 11), MAX_NODES), None);
}

// b

#[test]
fn test_word_backward_scenario() {
    let doc = single_block("Hello   world. Next line");
    let node = doc.text_nodes()[0];
    assert_eq!(
        word_backward(&doc, TextPosition::new(node, 15), MAX_NODES),
        Some(TextPosition::new(node, 8))
    );
}

#[test]
fn test_word_backward_mid_word_goes_to_current_word_start() {
    let doc = single_block("alpha beta");
    let node = doc.text_nodes()[0];
    assert_eq!(
        word_backward(&doc, TextPosition::new(node, 8), MAX_NODES),
        Some(TextPosition::new(node, 6))
    );
}

#[test]
fn test_word_backward_reaches_first_word_of_document() {
    let doc = single_block("alpha beta");
    let node = doc.text_nodes()[0];
    // content runs out inside "alpha": its start is still the result
    assert_eq!(
        word_backward(&doc, TextPosition::new(node, 6), MAX_NODES),
        Some(TextPosition::new(node, 0))
    );
}

#[test]
fn test_word_backward_at_document_start_is_noop() {
    let doc = single_block("alpha beta");
    let node = doc.text_nodes()[0];
    assert_eq!(word_backward(&doc, TextPosition::new(node, 0), MAX_NODES), None);
}

#[test]
fn test_word_backward_across_nodes() {
    let doc = two_paragraphs();
    let second = doc.text_nodes()[1];
    let text = pos(&doc, "text");
    assert_eq!(
        word_backward(&doc, TextPosition::new(second, 0), MAX_NODES),
        Some(text)
    );
}

#[test]
fn test_word_backward_word_spans_nodes() {
    let mut b = DocumentBuilder::new();
    b.block("p", |p| {
        p.text("say re");
        p.inline("em", |em| {
            em.text("ad");
        });
        p.text("walk now");
    });
    let doc = b.build();
    let now = pos(&doc, "now");
    assert_eq!(word_backward(&doc, now, MAX_NODES), Some(pos(&doc, "re")));
}

#[test]
fn test_word_forward_backward_round_trip() {
    let doc = single_block("alpha beta gamma");
    let gamma = pos(&doc, "gamma");
    let back = word_backward(&doc, gamma, MAX_NODES).unwrap();
    assert_eq!(back, pos(&doc, "beta"));
    assert_eq!(word_forward(&doc, back, MAX_NODES), Some(gamma));
}

#[test]
fn test_word_motions_without_words_are_noops() {
    let mut b = DocumentBuilder::new();
    b.block("p", |p| {
        p.text("... --- !!!");
    });
    b.block("p", |p| {
        p.text("  ?  ");
    });
    let doc = b.build();
    for &node in doc.text_nodes() {
        for offset in 0..=doc.text_len(node) {
            let at = TextPosition::new(node, offset);
            assert_eq!(word_forward(&doc, at, MAX_NODES), None);
            assert_eq!(word_backward(&doc, at, MAX_NODES), None);
        }
    }
}

fn fragmented(nodes: usize, tail: Option<&str>) -> MemoryDocument {
    let mut b = DocumentBuilder::new();
    b.block("div", |div| {
        for _ in 0..nodes {
            div.text(". ");
        }
        if let Some(tail) = tail {
            div.text(tail);
        }
    });
    b.build()
}

#[test]
fn test_motions_terminate_past_node_bound() {
    let doc = fragmented(1500, None);
    let first = TextPosition::new(doc.text_nodes()[0], 0);
    let last_node = *doc.text_nodes().last().unwrap();
    let last = TextPosition::new(last_node, 2);

    assert_eq!(word_forward(&doc, first, MAX_NODES), None);
    assert_eq!(word_backward(&doc, last, MAX_NODES), None);
    assert_eq!(paragraph_forward(&doc, first, MAX_NODES), None);
    assert_eq!(paragraph_backward(&doc, last, MAX_NODES), None);
}

#[test]
fn test_word_forward_gives_up_at_bound() {
    let doc = fragmented(1200, Some("target"));
    let first = TextPosition::new(doc.text_nodes()[0], 0);
    assert_eq!(word_forward(&doc, first, MAX_NODES), None);

    let target = doc.find_text("target").unwrap();
    assert_eq!(
        word_forward(&doc, first, 2000),
        Some(TextPosition::new(target, 0))
    );
}

// } and {

#[test]
fn test_paragraph_scenario() {
    let doc = two_paragraphs();
    let first = doc.text_nodes()[0];
    let second = doc.text_nodes()[1];

    let forward = paragraph_forward(&doc, TextPosition::new(first, 6), MAX_NODES);
    assert_eq!(forward, Some(TextPosition::new(second, 0)));

    let backward = paragraph_backward(&doc, TextPosition::new(second, 0), MAX_NODES);
    assert_eq!(backward, Some(TextPosition::new(first, 0)));
}

#[test]
fn test_paragraph_forward_skips_inline_descendants() {
    let mut b = DocumentBuilder::new();
    b.block("p", |p| {
        p.text("see ");
        p.inline("a", |a| {
            a.text("the link");
        });
        p.element("span", DisplayType::InlineBlock, |s| {
            s.text("badge");
        });
    });
    b.element("li", DisplayType::ListItem, |li| {
        li.text("next item");
    });
    let doc = b.build();

    let start = TextPosition::new(doc.text_nodes()[0], 0);
    let item = doc.find_text("next item").unwrap();
    assert_eq!(
        paragraph_forward(&doc, start, MAX_NODES),
        Some(TextPosition::new(item, 0))
    );
}

#[test]
fn test_paragraph_backward_lands_on_first_node_of_previous_block() {
    let mut b = DocumentBuilder::new();
    b.block("p", |p| {
        p.text("intro");
    });
    b.block("p", |p| {
        p.text("Middle starts ");
        p.inline("strong", |s| {
            s.text("here");
        });
        p.text(" and ends.");
    });
    b.block("p", |p| {
        p.text("Last one");
    });
    let doc = b.build();

    let last = doc.find_text("Last one").unwrap();
    let middle = doc.find_text("Middle starts").unwrap();
    assert_eq!(
        paragraph_backward(&doc, TextPosition::new(last, 3), MAX_NODES),
        Some(TextPosition::new(middle, 0))
    );
}

#[test]
fn test_paragraph_motions_at_edges_are_noops() {
    let doc = two_paragraphs();
    let first = doc.text_nodes()[0];
    let second = doc.text_nodes()[1];
    assert_eq!(
        paragraph_forward(&doc, TextPosition::new(second, 0), MAX_NODES),
        None
    );
    assert_eq!(
        paragraph_backward(&doc, TextPosition::new(first, 4), MAX_NODES),
        None
    );
}

#[test]
fn test_paragraph_forward_into_nested_block() {
    let mut b = DocumentBuilder::new();
    b.block("article", |article| {
        article.text("lead ");
        article.block("blockquote", |q| {
            q.text("quoted");
        });
    });
    let doc = b.build();
    let quoted = doc.find_text("quoted").unwrap();
    let start = TextPosition::new(doc.text_nodes()[0], 0);
    assert_eq!(
        paragraph_forward(&doc, start, MAX_NODES),
        Some(TextPosition::new(quoted, 0))
    );
}

#[test]
fn test_motion_find_dispatches() {
    let doc = two_paragraphs();
    let first = TextPosition::new(doc.text_nodes()[0], 0);
    assert_eq!(
        Motion::WordForward.find(&doc, first, MAX_NODES),
        Some(pos(&doc, "para"))
    );
    assert_eq!(
        Motion::ParagraphForward.find(&doc, first, MAX_NODES),
        Some(pos(&doc, "Second"))
    );
    assert_eq!(Motion::WordBackward.find(&doc, first, MAX_NODES), None);
    assert_eq!(Motion::ParagraphBackward.find(&doc, first, MAX_NODES), None);
}
