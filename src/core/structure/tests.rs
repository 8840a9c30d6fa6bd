use super::*;
use crate::core::grid::column_count;
use crate::core::model::{Document, NodeId};
use crate::core::walker::GridSlot;
use crate::features::notation::to_notation;
use crate::load_grid;
use crate::utils::diagnostics::check_grid;
use crate::utils::error::GridError;
use pretty_assertions::assert_eq;

fn cell_labelled(doc: &Document, grid: NodeId, label: &str) -> NodeId {
    doc.rows(grid)
        .iter()
        .flat_map(|&row| doc.children(row).to_vec())
        .find(|&cell| doc.text_content(cell) == label)
        .unwrap()
}

fn labels(doc: &Document, cells: &[GridSlot]) -> Vec<String> {
    cells.iter().map(|slot| doc.text_content(slot.cell)).collect()
}

// ============================================================================
// Crop
// ============================================================================

const CROP_SOURCE: &str = "a | b | c{r2} | d | e\n\
                           f{c2} | g{c2}\n\
                           h | i{c2 r2} | j | k{r2}\n\
                           l | m{r2}\n\
                           n | o | p | q";

#[test]
fn test_crop_fills_cut_slots_and_trims() {
    let (mut doc, grid) = load_grid(CROP_SOURCE).unwrap();
    let cropped = doc
        .change(|scope| crop_grid_to_dimensions(scope, grid, Dimensions::new(1, 1, 3, 3)))
        .unwrap();

    assert_eq!(to_notation(&doc, cropped), "_ | _ | g\ni{c2 r2} | j\nm");
    assert_eq!(doc.parent(cropped), None);
    // The source grid is untouched
    assert_eq!(to_notation(&doc, grid), CROP_SOURCE);
}

#[test]
fn test_cropped_grid_is_well_formed() {
    let (mut doc, grid) = load_grid(CROP_SOURCE).unwrap();
    for dimensions in [
        Dimensions::new(0, 0, 4, 4),
        Dimensions::new(1, 1, 3, 3),
        Dimensions::new(2, 0, 4, 2),
        Dimensions::new(0, 2, 1, 4),
        Dimensions::new(3, 3, 3, 3),
    ] {
        let cropped = doc
            .change(|scope| crop_grid_to_dimensions(scope, grid, dimensions))
            .unwrap();
        let result = check_grid(&doc, cropped);
        assert!(!result.has_errors(), "{:?}: {:?}", dimensions, result.diagnostics);
        assert_eq!(doc.rows(cropped).len(), dimensions.height());
        assert_eq!(column_count(&doc, cropped), dimensions.width());
    }
}

#[test]
fn test_crop_copies_content() {
    let (mut doc, grid) = load_grid("a | b\nc | d").unwrap();
    let d = cell_labelled(&doc, grid, "d");
    let cropped = doc
        .change(|scope| crop_grid_to_dimensions(scope, grid, Dimensions::new(1, 1, 1, 1)))
        .unwrap();

    let copy = doc.children(doc.rows(cropped)[0])[0];
    assert_ne!(copy, d);
    assert_eq!(doc.text_content(copy), "d");
}

#[test]
fn test_crop_adjusts_headings() {
    let (mut doc, grid) =
        load_grid("@headingRows=2 headingColumns=2\na | b | c\nd | e | f\ng | h | i").unwrap();
    let cropped = doc
        .change(|scope| crop_grid_to_dimensions(scope, grid, Dimensions::new(1, 1, 2, 2)))
        .unwrap();
    assert_eq!(
        to_notation(&doc, cropped),
        "@headingRows=1 headingColumns=1\ne | f\nh | i"
    );

    let cropped = doc
        .change(|scope| crop_grid_to_dimensions(scope, grid, Dimensions::new(2, 2, 2, 2)))
        .unwrap();
    assert_eq!(to_notation(&doc, cropped), "i");
}

#[test]
fn test_crop_rejects_bad_rectangles() {
    let (mut doc, grid) = load_grid("a | b\nc | d").unwrap();

    let err = doc
        .change(|scope| crop_grid_to_dimensions(scope, grid, Dimensions::new(1, 0, 0, 1)))
        .unwrap_err();
    assert!(matches!(err, GridError::InvalidArgument { .. }));

    let err = doc
        .change(|scope| crop_grid_to_dimensions(scope, grid, Dimensions::new(0, 0, 2, 1)))
        .unwrap_err();
    assert!(err.is_out_of_range());
}

// ============================================================================
// Pruning
// ============================================================================

#[test]
fn test_prune_empty_column_and_row() {
    let (mut doc, grid) = load_grid("a{c2} | b{c2 r2}\nc{c2}\nd{c2 r2} | e{r2} | f{r2}\n~").unwrap();
    assert_eq!(find_empty_columns(&doc, grid), vec![1]);
    assert_eq!(find_empty_rows(&doc, grid), vec![3]);

    doc.change(|scope| remove_empty_rows_columns(scope, grid)).unwrap();
    assert_eq!(to_notation(&doc, grid), "a | b{c2 r2}\nc\nd | e | f");
}

#[test]
fn test_prune_is_idempotent() {
    let (mut doc, grid) = load_grid("a{c2} | b\nc{c2} | d\n~").unwrap();

    doc.change(|scope| remove_empty_rows_columns(scope, grid)).unwrap();
    let once = to_notation(&doc, grid);
    assert_eq!(once, "a | b\nc | d");

    let removed = doc
        .change(|scope| Ok((remove_empty_columns(scope, grid)?, remove_empty_rows(scope, grid)?)))
        .unwrap();
    assert_eq!(removed, (false, false));

    doc.change(|scope| remove_empty_rows_columns(scope, grid)).unwrap();
    assert_eq!(to_notation(&doc, grid), once);
}

#[test]
fn test_prune_removes_last_empty_row_first() {
    let (mut doc, grid) = load_grid("a\n~\nb\n~").unwrap();
    assert_eq!(find_empty_rows(&doc, grid), vec![1, 3]);

    assert!(doc.change(|scope| remove_empty_rows(scope, grid)).unwrap());
    assert_eq!(to_notation(&doc, grid), "a\n~\nb");
}

// ============================================================================
// Splitting
// ============================================================================

#[test]
fn test_split_horizontally() {
    let (mut doc, grid) = load_grid("a{c2 r3} | b\nc\nd").unwrap();
    let a = cell_labelled(&doc, grid, "a");

    let new_cell = doc
        .change(|scope| split_horizontally(scope, a, 1))
        .unwrap()
        .unwrap();

    assert_eq!(to_notation(&doc, grid), "a{c2} | b\n_{c2 r2} | c\nd");
    assert_eq!(doc.parent(new_cell), Some(doc.rows(grid)[1]));
}

#[test]
fn test_split_horizontally_past_the_grid() {
    // The rowspan claims rows the grid does not have
    let (mut doc, grid) = load_grid("a{r3} | b").unwrap();
    let a = cell_labelled(&doc, grid, "a");

    let new_cell = doc.change(|scope| split_horizontally(scope, a, 1)).unwrap();
    assert_eq!(new_cell, None);
    assert_eq!(to_notation(&doc, grid), "a | b");
}

#[test]
fn test_split_horizontally_rejects_rows_outside_cell() {
    let (mut doc, grid) = load_grid("a{r2} | b\nc").unwrap();
    let a = cell_labelled(&doc, grid, "a");

    for split_row in [0, 2] {
        let err = doc
            .change(|scope| split_horizontally(scope, a, split_row))
            .unwrap_err();
        assert!(matches!(err, GridError::InvalidArgument { .. }));
    }
    assert_eq!(to_notation(&doc, grid), "a{r2} | b\nc");
}

#[test]
fn test_split_vertically() {
    let (mut doc, grid) = load_grid("a{c3 r2}\n~\nb | c | d").unwrap();
    let a = cell_labelled(&doc, grid, "a");

    let new_cell = doc.change(|scope| split_vertically(scope, a, 0, 1)).unwrap();

    assert_eq!(to_notation(&doc, grid), "a{r2} | _{c2 r2}\n~\nb | c | d");
    assert_eq!(doc.index_of(new_cell), Some(1));
}

#[test]
fn test_split_vertically_rejects_columns_outside_cell() {
    let (mut doc, grid) = load_grid("a | b{c2}").unwrap();
    let b = cell_labelled(&doc, grid, "b");

    for split_column in [1, 3] {
        let err = doc
            .change(|scope| split_vertically(scope, b, 1, split_column))
            .unwrap_err();
        assert!(matches!(err, GridError::InvalidArgument { .. }));
    }
    assert!(doc.change(|scope| split_vertically(scope, b, 1, 2)).is_ok());
    assert_eq!(to_notation(&doc, grid), "a | b | _");
}

// ============================================================================
// Overlaps and rectangle adjustment
// ============================================================================

const OVERLAP_SOURCE: &str = "a{r2} | b | c | d | e\n\
                              f{r3} | g | h | i{r2}\n\
                              j{r2} | k{r3} | l\n\
                              m{r2} | n\n\
                              o | p | q";

#[test]
fn test_vertically_overlapping_cells() {
    let (doc, grid) = load_grid(OVERLAP_SOURCE).unwrap();

    let cells = get_vertically_overlapping_cells(&doc, grid, 3, 0);
    assert_eq!(labels(&doc, &cells), vec!["f", "j", "k"]);

    let cells = get_vertically_overlapping_cells(&doc, grid, 3, 2);
    assert_eq!(labels(&doc, &cells), vec!["j", "k"]);

    let cells = get_vertically_overlapping_cells(&doc, grid, 1, 0);
    assert_eq!(labels(&doc, &cells), vec!["a"]);

    assert!(get_vertically_overlapping_cells(&doc, grid, 0, 0).is_empty());
}

#[test]
fn test_horizontally_overlapping_cells() {
    let (doc, grid) = load_grid("a{c2} | b\nc | d{c2}\ne | f | g").unwrap();

    let cells = get_horizontally_overlapping_cells(&doc, grid, 1);
    assert_eq!(labels(&doc, &cells), vec!["a"]);

    let cells = get_horizontally_overlapping_cells(&doc, grid, 2);
    assert_eq!(labels(&doc, &cells), vec!["d"]);

    assert!(get_horizontally_overlapping_cells(&doc, grid, 0).is_empty());
}

#[test]
fn test_adjust_last_row_index() {
    let (doc, grid) = load_grid("a | b | c\nd{r2} | e{r2} | f\ng").unwrap();

    assert_eq!(adjust_last_row_index(&doc, grid, Dimensions::new(0, 0, 1, 2)), 2);
    assert_eq!(adjust_last_row_index(&doc, grid, Dimensions::new(0, 0, 0, 2)), 0);
    assert_eq!(adjust_last_row_index(&doc, grid, Dimensions::new(1, 2, 1, 2)), 1);
}

#[test]
fn test_adjust_last_column_index() {
    let (doc, grid) = load_grid("a{c2} | b\nc | d | e").unwrap();

    assert_eq!(adjust_last_column_index(&doc, grid, Dimensions::new(0, 0, 0, 0)), 1);
    assert_eq!(adjust_last_column_index(&doc, grid, Dimensions::new(1, 0, 1, 0)), 0);
    assert_eq!(adjust_last_column_index(&doc, grid, Dimensions::new(0, 0, 1, 0)), 1);
}

#[test]
fn test_trim_cell_if_needed() {
    let (mut doc, grid) = load_grid("a{c3 r2}\n~").unwrap();
    let a = cell_labelled(&doc, grid, "a");

    doc.change(|scope| {
        trim_cell_if_needed(scope, a, 0, 0, 0, 1);
        Ok(())
    })
    .unwrap();
    assert_eq!(to_notation(&doc, grid), "a{c2}\n~");
}
