//! Integration tests for bsgrid structural editing

use bsgrid::{
    crop_grid, diagnostics::check_grid, load_grid, to_markup, to_notation, Breakpoint,
    ColumnPropertyCommand, CommandState, Dimensions, Document, GridConfig, GridError, GridResult,
    GridSlot, GridUtils, GridWalker, InsertColumnsOptions, InsertRowsOptions, NodeId,
    RemoveColumnsOptions, RemoveRowsOptions, Selection, WalkerOptions,
};

fn blank() -> GridUtils {
    GridUtils::new(GridConfig::blank())
}

fn apply(
    text: &str,
    edit: impl FnOnce(&GridUtils, &mut bsgrid::ChangeScope<'_>, NodeId) -> GridResult<()>,
) -> String {
    let (mut doc, grid) = load_grid(text).unwrap();
    let utils = blank();
    doc.change(|scope| edit(&utils, scope, grid)).unwrap();
    to_notation(&doc, grid)
}

fn cell(doc: &Document, grid: NodeId, label: &str) -> NodeId {
    doc.rows(grid)
        .into_iter()
        .flat_map(|row| doc.children(row).to_vec())
        .find(|&c| doc.text_content(c) == label)
        .unwrap_or_else(|| panic!("no cell labelled {}", label))
}

// ============================================================================
// Traversal
// ============================================================================

mod walker {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_slots_cover_the_grid() {
        let (doc, grid) = load_grid("a{c2 r2} | b\nc").unwrap();

        let all: Vec<GridSlot> =
            GridWalker::new(&doc, grid, WalkerOptions::new().include_all_slots(true)).collect();
        let coordinates: Vec<(usize, usize)> = all.iter().map(|s| (s.row, s.column)).collect();
        assert_eq!(
            coordinates,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );

        let anchors = all.iter().filter(|s| s.is_anchor()).count();
        assert_eq!(anchors, GridWalker::anchors(&doc, grid).count());
        assert_eq!(anchors, 3);
    }

    #[test]
    fn test_walker_from_facade() {
        let (doc, grid) = load_grid("a | b\nc | d\ne | f").unwrap();
        let utils = blank();
        let labels: Vec<String> = utils
            .create_walker(&doc, grid, WalkerOptions::new().rows(1, 2).column(1))
            .map(|slot| doc.text_content(slot.cell))
            .collect();
        assert_eq!(labels, vec!["d", "f"]);
    }
}

// ============================================================================
// Structural edits
// ============================================================================

mod structural_edits {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_columns_widens_spanning_cell() {
        let result = apply("a{c3}\nd | e | f", |u, s, g| {
            u.insert_columns(s, g, InsertColumnsOptions::new(1, 2))
        });
        assert_eq!(result, "a{c5}\nd | _ | _ | e | f");
    }

    #[test]
    fn test_remove_rows_moves_cell_below_removed_range() {
        let result = apply("a{r4} | b | c\nd{r3} | e\nf\ng\nh | i | j", |u, s, g| {
            u.remove_rows(s, g, RemoveRowsOptions::new(1, 2))
        });
        assert_eq!(result, "a{r2} | b | c\nd | g\nh | i | j");
    }

    #[test]
    fn test_rows_round_trip_through_rowspan() {
        let original = "a{r2} | b\nc\nd | e";
        let (mut doc, grid) = load_grid(original).unwrap();
        let utils = blank();

        doc.change(|scope| utils.insert_rows(scope, grid, InsertRowsOptions::new(1, 2)))
            .unwrap();
        assert_eq!(to_notation(&doc, grid), "a{r4} | b\n_\n_\nc\nd | e");

        doc.change(|scope| utils.remove_rows(scope, grid, RemoveRowsOptions::new(1, 2)))
            .unwrap();
        assert_eq!(to_notation(&doc, grid), original);
    }

    #[test]
    fn test_columns_round_trip_through_colspan() {
        let original = "a{c2} | b\nc | d | e";
        let (mut doc, grid) = load_grid(original).unwrap();
        let utils = blank();

        doc.change(|scope| utils.insert_columns(scope, grid, InsertColumnsOptions::new(1, 1)))
            .unwrap();
        assert_eq!(to_notation(&doc, grid), "a{c3} | b\nc | _ | d | e");
        assert_eq!(utils.get_column_count(&doc, grid), 4);

        doc.change(|scope| utils.remove_columns(scope, grid, RemoveColumnsOptions::new(1, 1)))
            .unwrap();
        assert_eq!(to_notation(&doc, grid), original);
    }

    #[test]
    fn test_edits_keep_grid_well_formed() {
        let (mut doc, grid) = load_grid("a{c2} | b\nc | d{r2} | e\nf | g\nh{c3}").unwrap();
        let utils = blank();

        doc.change(|scope| {
            utils.insert_rows(scope, grid, InsertRowsOptions::new(2, 1))?;
            utils.insert_columns(scope, grid, InsertColumnsOptions::new(2, 2))?;
            utils.remove_columns(scope, grid, RemoveColumnsOptions::new(0, 1))?;
            utils.remove_rows(scope, grid, RemoveRowsOptions::new(0, 1))
        })
        .unwrap();

        let result = check_grid(&doc, grid);
        assert!(!result.has_errors(), "{:?}", result.diagnostics);
        assert_eq!(utils.get_row_count(&doc, grid), 4);
    }

    #[test]
    fn test_failed_edit_rolls_back_earlier_edits() {
        let (mut doc, grid) = load_grid("a | b").unwrap();
        let utils = blank();

        let err = doc
            .change(|scope| {
                utils.insert_rows(scope, grid, InsertRowsOptions::new(1, 3))?;
                utils.insert_columns(scope, grid, InsertColumnsOptions::new(5, 1))
            })
            .unwrap_err();

        assert!(matches!(
            err,
            GridError::OutOfRange {
                operation: "insert_columns",
                ..
            }
        ));
        assert_eq!(to_notation(&doc, grid), "a | b");
    }

    #[test]
    fn test_new_grid_is_attached_by_caller() {
        let mut doc = Document::new();
        let utils = blank();
        let root = doc.root();

        let grid = doc
            .change(|scope| {
                let grid = utils.create_grid(scope, 2, 2)?;
                scope.append(grid, root)?;
                Ok(grid)
            })
            .unwrap();

        assert_eq!(doc.parent(grid), Some(root));
        assert_eq!(to_notation(&doc, grid), "_ | _\n_ | _");
    }
}

// ============================================================================
// Cropping
// ============================================================================

mod crop {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_crop_in_place() {
        let (mut doc, grid) = load_grid(
            "a | b | c{r2} | d | e\nf{c2} | g{c2}\nh | i{c2 r2} | j | k{r2}\nl | m{r2}\nn | o | p | q",
        )
        .unwrap();

        let cropped = doc
            .change(|scope| crop_grid(scope, grid, Dimensions::new(1, 1, 3, 3)))
            .unwrap();

        assert_eq!(to_notation(&doc, cropped), "_ | _ | g\ni{c2 r2} | j\nm");
        assert_eq!(doc.parent(cropped), Some(doc.root()));
        assert!(check_grid(&doc, cropped).is_empty());
    }

    #[test]
    fn test_crop_outside_grid() {
        let (mut doc, grid) = load_grid("a | b").unwrap();
        let err = doc
            .change(|scope| crop_grid(scope, grid, Dimensions::new(0, 0, 0, 2)))
            .unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(doc.parent(grid), Some(doc.root()));
    }
}

// ============================================================================
// Column properties
// ============================================================================

mod column_properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_execute_and_refresh() {
        let (mut doc, grid) = load_grid("a | b\nc | d").unwrap();
        let utils = GridUtils::default();
        let command = ColumnPropertyCommand::for_breakpoint(&utils, Breakpoint::Md);
        let top = Selection::on_nodes(&doc, &[cell(&doc, grid, "a"), cell(&doc, grid, "b")]);

        doc.change(|scope| command.execute(&utils, scope, &top, Some("6")))
            .unwrap();
        assert_eq!(to_notation(&doc, grid), "a{colMD=6} | b{colMD=6}\nc | d");

        assert_eq!(
            command.refresh(&utils, &doc, &top),
            CommandState {
                is_enabled: true,
                value: Some("6".to_string()),
            }
        );

        let mixed = Selection::on_nodes(&doc, &[cell(&doc, grid, "a"), cell(&doc, grid, "c")]);
        assert_eq!(
            command.refresh(&utils, &doc, &mixed),
            CommandState {
                is_enabled: true,
                value: None,
            }
        );
    }

    #[test]
    fn test_default_value_removes_attribute() {
        let (mut doc, grid) = load_grid("a{colLG=4} | b").unwrap();
        let utils = GridUtils::default();
        let command = ColumnPropertyCommand::for_breakpoint(&utils, Breakpoint::Lg);
        let selection = Selection::on_nodes(&doc, &[cell(&doc, grid, "a")]);

        doc.change(|scope| command.execute(&utils, scope, &selection, Some("0")))
            .unwrap();
        assert_eq!(to_notation(&doc, grid), "a | b");
    }

    #[test]
    fn test_invalid_value_changes_nothing() {
        let (mut doc, grid) = load_grid("a | b").unwrap();
        let utils = GridUtils::default();
        let command = ColumnPropertyCommand::for_breakpoint(&utils, Breakpoint::Base);
        let selection = Selection::on_nodes(&doc, &[cell(&doc, grid, "b")]);

        let err = doc
            .change(|scope| command.execute(&utils, scope, &selection, Some("13")))
            .unwrap_err();
        assert_eq!(err, GridError::invalid_value("col", "13"));
        assert_eq!(to_notation(&doc, grid), "a | b");
    }

    #[test]
    fn test_empty_selection_disables_command() {
        let (doc, _) = load_grid("a").unwrap();
        let utils = GridUtils::default();
        let command = ColumnPropertyCommand::for_breakpoint(&utils, Breakpoint::Sm);
        assert_eq!(
            command.refresh(&utils, &doc, &Selection::default()),
            CommandState::default()
        );
    }
}

// ============================================================================
// Markup
// ============================================================================

mod markup {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markup_classes() {
        let (doc, grid) = load_grid("a{colMD=6} | b").unwrap();
        let expected = r#"<div class="container">
  <div class="row">
    <div class="col col-md-6">
      <div class="content">
        <p>a</p>
      </div>
    </div>
    <div class="col">
      <div class="content">
        <p>b</p>
      </div>
    </div>
  </div>
</div>
"#;
        assert_eq!(to_markup(&doc, grid), expected);
    }

    #[test]
    fn test_markup_spans_after_edit() {
        let (mut doc, grid) = load_grid("a | b\nc | d").unwrap();
        let utils = blank();
        doc.change(|scope| {
            utils.insert_rows(
                scope,
                grid,
                InsertRowsOptions::new(1, 1).copy_structure_from_above(true),
            )
        })
        .unwrap();

        let markup = to_markup(&doc, grid);
        assert_eq!(markup.matches("class=\"row\"").count(), 3);
        assert_eq!(markup.matches("<p></p>").count(), 2);
        assert!(!markup.contains("colspan"));
    }
}
