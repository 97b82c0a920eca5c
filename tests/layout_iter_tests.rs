//! Integration tests for layout iteration: runs, items, glyph items and
//! cluster iteration.

#[macro_use]
mod common;

use common::SAMPLE_TEXT;
use pangoffi::prelude::*;
use pretty_assertions::assert_eq;

// =============================================================================
// Layout iterator
// =============================================================================

#[test]
fn test_empty_layout_iteration() {
    let context = require_context!();
    let layout = Layout::new(&context).unwrap();
    let mut iter = layout.iter().unwrap();

    assert!(!iter.next_run().unwrap());
    assert!(!iter.next_char().unwrap());
    assert!(!iter.next_cluster().unwrap());
    assert!(!iter.next_line().unwrap());
    assert!(iter.at_last_line().unwrap());
    assert_eq!(iter.index().unwrap(), 0);
    // The default font still gives an empty line a baseline and a height.
    assert!(iter.baseline().unwrap() > 0);
    assert!(iter.run().unwrap().is_none());

    let (y0, y1) = iter.line_yrange().unwrap();
    assert_eq!(y0, 0);
    assert!(y1 > 0);

    iter.char_extents().unwrap();
    iter.cluster_extents().unwrap();
    iter.run_extents().unwrap();
    iter.line_extents().unwrap();
    iter.layout_extents().unwrap();
}

#[test]
fn test_layout_extents_match_the_layout() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let iter = layout.iter().unwrap();
    assert_eq!(iter.layout_extents().unwrap(), layout.extents().unwrap());
}

#[test]
fn test_copied_iterator_is_independent() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let mut iter = layout.iter().unwrap();
    let copy = iter.copy().unwrap();

    assert!(iter.next_char().unwrap());
    assert_eq!(iter.index().unwrap(), 1);
    assert_eq!(copy.index().unwrap(), 0);
}

#[test]
fn test_runs_cover_the_text() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let mut iter = layout.iter().unwrap();

    let mut covered = 0;
    loop {
        if let Some(run) = iter.run().unwrap() {
            let item = run.item().unwrap();
            assert_eq!(item.offset(), covered);
            covered += item.length();
        }
        if !iter.next_run().unwrap() {
            break;
        }
    }
    assert_eq!(usize::try_from(covered).unwrap(), SAMPLE_TEXT.len());
}

#[test]
fn test_char_iteration_visits_every_character() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let mut iter = layout.iter().unwrap();

    let mut indices = vec![iter.index().unwrap()];
    while iter.next_char().unwrap() {
        indices.push(iter.index().unwrap());
    }
    let expected: Vec<i32> = SAMPLE_TEXT
        .char_indices()
        .map(|(index, _)| i32::try_from(index).unwrap())
        .collect();
    assert_eq!(indices, expected);
}

// =============================================================================
// Items
// =============================================================================

#[test]
fn test_item_properties() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let mut iter = layout.iter().unwrap();

    {
        let item = iter.run().unwrap().unwrap().item().unwrap();
        assert_eq!((item.length(), item.offset(), item.num_chars()), (8, 0, 8));
        assert_eq!(item.level(), 0);
        assert!(item.font().unwrap().is_some());
    }

    assert!(iter.next_run().unwrap());
    let item = iter.run().unwrap().unwrap().item().unwrap();
    assert_eq!((item.length(), item.offset(), item.num_chars()), (6, 8, 3));
}

// =============================================================================
// Glyph items
// =============================================================================

#[test]
fn test_glyph_item_copies() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let iter = layout.iter().unwrap();
    let run = iter.run().unwrap().unwrap();

    let owned = run.to_owned().unwrap();
    assert_ne!(owned.as_ptr(), run.as_ptr());
    assert_eq!(owned.glyphs(), run.glyphs());
    assert_eq!(owned.item().unwrap().length(), 8);
}

#[test]
fn test_glyphs() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let iter = layout.iter().unwrap();
    let glyphs = iter.run().unwrap().unwrap().glyphs();

    assert_eq!(glyphs.len(), 8);
    assert!(glyphs.iter().all(|glyph| glyph.is_cluster_start));
    assert!(glyphs.iter().any(|glyph| glyph.width > 0));
}

#[test]
fn test_glyph_item_splits() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let iter = layout.iter().unwrap();
    let mut run = iter.run().unwrap().unwrap().to_owned().unwrap();

    let hi = run.split(SAMPLE_TEXT, 3).unwrap();

    // "Hi "
    let item = hi.item().unwrap();
    assert_eq!((item.num_chars(), item.offset()), (3, 0));
    assert_eq!(hi.glyphs().len(), 3);

    // "from "
    let item = run.item().unwrap();
    assert_eq!((item.num_chars(), item.offset()), (5, 3));
}

#[test]
fn test_split_outside_the_item_is_rejected() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let iter = layout.iter().unwrap();
    let mut run = iter.run().unwrap().unwrap().to_owned().unwrap();

    for index in [0, 8, 20] {
        assert!(matches!(
            run.split(SAMPLE_TEXT, index),
            Err(PangoError::InvalidArgument { name: "split_index", .. })
        ));
    }
    assert_eq!(run.item().unwrap().length(), 8);
}

#[test]
fn test_split_inside_a_character_is_rejected() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let mut iter = layout.iter().unwrap();
    assert!(iter.next_run().unwrap());
    let mut run = iter.run().unwrap().unwrap().to_owned().unwrap();

    // "Π" is two bytes wide.
    assert!(matches!(
        run.split(SAMPLE_TEXT, 1),
        Err(PangoError::InvalidArgument { name: "split_index", .. })
    ));
    assert_eq!(run.item().unwrap().length(), 6);

    let head = run.split(SAMPLE_TEXT, 2).unwrap();
    assert_eq!(head.item().unwrap().num_chars(), 1);
    assert_eq!(run.item().unwrap().offset(), 10);
}

#[test]
fn test_logical_widths() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let iter = layout.iter().unwrap();
    let run = iter.run().unwrap().unwrap();

    let widths = run.logical_widths(SAMPLE_TEXT).unwrap();
    assert_eq!(widths.len(), 8);
    let total: i32 = run.glyphs().iter().map(|glyph| glyph.width).sum();
    assert_eq!(widths.iter().sum::<i32>(), total);
}

#[test]
fn test_text_must_cover_the_item() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let iter = layout.iter().unwrap();
    let run = iter.run().unwrap().unwrap();

    assert!(matches!(
        run.logical_widths("Hi"),
        Err(PangoError::InvalidArgument { name: "text", .. })
    ));
}

// =============================================================================
// Glyph item iterator
// =============================================================================

fn cluster(iter: &GlyphItemIter<'_>) -> [i32; 6] {
    [
        iter.start_glyph(),
        iter.start_index(),
        iter.start_char(),
        iter.end_glyph(),
        iter.end_index(),
        iter.end_char(),
    ]
}

#[test]
fn test_glyph_item_iterator_from_start() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let layout_iter = layout.iter().unwrap();
    let run = layout_iter.run().unwrap().unwrap();

    let mut iter = GlyphItemIter::start(run, SAMPLE_TEXT).unwrap().unwrap();
    assert_eq!(iter.text(), SAMPLE_TEXT);
    assert_eq!(iter.glyph_item().as_ptr(), run.as_ptr());

    assert_eq!(cluster(&iter), [0, 0, 0, 1, 1, 1]);
    assert_eq!(iter.cluster_text(), Some("H"));

    assert!(!iter.prev_cluster().unwrap());
    assert!(iter.next_cluster().unwrap());
    assert_eq!(cluster(&iter), [1, 1, 1, 2, 2, 2]);
}

#[test]
fn test_glyph_item_iterator_from_end() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let layout_iter = layout.iter().unwrap();
    let run = layout_iter.run().unwrap().unwrap();

    let mut iter = GlyphItemIter::end(run, SAMPLE_TEXT).unwrap().unwrap();
    assert_eq!(cluster(&iter), [7, 7, 7, 8, 8, 8]);

    assert!(!iter.next_cluster().unwrap());
    assert!(iter.prev_cluster().unwrap());
    assert_eq!(cluster(&iter), [6, 6, 6, 7, 7, 7]);
}

#[test]
fn test_glyph_item_iterator_over_owned_item() {
    let context = require_context!();
    let layout = common::layout_with_text(&context, SAMPLE_TEXT);
    let layout_iter = layout.iter().unwrap();
    let owned = layout_iter.run().unwrap().unwrap().to_owned().unwrap();

    let mut iter = GlyphItemIter::start(owned.as_glyph_item_ref(), SAMPLE_TEXT).unwrap().unwrap();
    let mut clusters = 1;
    while iter.next_cluster().unwrap() {
        clusters += 1;
    }
    assert_eq!(clusters, 8);
}
