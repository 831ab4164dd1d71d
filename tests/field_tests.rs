//! Field tests - grid construction, collision queries, row scan and clear.

use blockfall::core::Field;
use blockfall::types::{FigureCells, MAX_FIELD_DIM, MIN_FIELD_DIM};

/// Fill every interior cell of a row with a locked tag.
fn fill_row(field: &mut Field, y: usize, tag: u8) {
    for x in 2..field.cols() - 2 {
        field.set(x, y, tag);
    }
}

#[test]
fn test_border_ring_for_all_accepted_dimensions() {
    for w in MIN_FIELD_DIM..=MAX_FIELD_DIM {
        for h in MIN_FIELD_DIM..=MAX_FIELD_DIM {
            let field = Field::new(w, h);
            let cols = field.cols();
            let rows = field.rows();
            assert_eq!(cols, (w as usize + 2) * 2);
            assert_eq!(rows, h as usize + 2);

            for y in 0..rows {
                for x in 0..cols {
                    let expected_border =
                        x < 2 || x >= cols - 2 || y == 0 || y == rows - 1;
                    let tag = field.get(x, y);
                    if expected_border {
                        assert_eq!(tag, 1, "({w}x{h}) cell ({x},{y}) should be border");
                    } else {
                        assert_eq!(tag, 0, "({w}x{h}) cell ({x},{y}) should be empty");
                    }
                }
            }
        }
    }
}

#[test]
fn test_spawn_area_is_never_occupied() {
    let mut field = Field::new(10, 10);
    // Even a locked tag in row 0 would not count (row 0 is border anyway);
    // negative rows are always free.
    assert!(!field.is_occupied(4, 0));
    assert!(!field.is_occupied(4, -5));

    field.set(4, 1, 7);
    assert!(field.is_occupied(4, 1));
}

#[test]
fn test_collides_checks_every_cell() {
    let mut field = Field::new(10, 10);
    field.set(6, 5, 3);

    let clear: FigureCells = [(2, 5), (3, 5)].into_iter().collect();
    assert!(!field.collides(&clear));

    let touching: FigureCells = [(2, 5), (6, 5)].into_iter().collect();
    assert!(field.collides(&touching));

    // Border cells block too.
    let at_border: FigureCells = [(0, 5)].into_iter().collect();
    assert!(field.collides(&at_border));
}

#[test]
fn test_lock_tags_cells_with_color() {
    let mut field = Field::new(10, 10);
    let cells: FigureCells = [(4, 9), (5, 9), (4, 10), (5, 10)].into_iter().collect();
    field.lock(&cells, 6);
    for &(x, y) in &cells {
        assert_eq!(field.get(x as usize, y as usize), 8);
    }
}

#[test]
fn test_find_filled_row_none_on_empty_and_idempotent() {
    let field = Field::new(10, 10);
    assert_eq!(field.find_filled_row(), None);
    assert_eq!(field.find_filled_row(), None);

    let mut partial = Field::new(10, 10);
    partial.set(2, 10, 4);
    assert_eq!(partial.find_filled_row(), None);
}

#[test]
fn test_find_filled_row_returns_single_full_row() {
    let mut field = Field::new(10, 10);
    fill_row(&mut field, 8, 3);
    assert_eq!(field.find_filled_row(), Some(8));
    // Repeat without mutation yields the same answer.
    assert_eq!(field.find_filled_row(), Some(8));
}

#[test]
fn test_find_filled_row_tie_break_is_topmost() {
    let mut field = Field::new(10, 10);
    fill_row(&mut field, 8, 3);
    fill_row(&mut field, 5, 4);
    fill_row(&mut field, 10, 5);
    assert_eq!(field.find_filled_row(), Some(5));
}

#[test]
fn test_clear_row_round_trip() {
    let mut field = Field::new(10, 10);
    // Marker below the cleared row, the full row itself, and a marker above.
    field.set(2, 9, 4);
    fill_row(&mut field, 7, 3);
    field.set(6, 5, 5);

    let cleared = field.clear_row(7);

    // Same dimensions, borders intact.
    assert_eq!(cleared.cols(), field.cols());
    assert_eq!(cleared.rows(), field.rows());
    assert_eq!(cleared.get(0, 0), 1);
    assert_eq!(cleared.get(cleared.cols() - 1, cleared.rows() - 1), 1);

    // Rows below the cleared one are untouched.
    assert_eq!(cleared.get(2, 9), 4);

    // Rows above shift down by one; the full row's contents are gone.
    assert_eq!(cleared.get(6, 6), 5);
    assert_eq!(cleared.get(6, 5), 0);
    for x in 2..cleared.cols() - 2 {
        assert_eq!(cleared.get(x, 7), 0, "cleared row {x} should have shifted away");
    }

    // Fresh empty row just below the top border.
    for x in 0..cleared.cols() {
        let expected = u8::from(x < 2 || x >= cleared.cols() - 2);
        assert_eq!(cleared.get(x, 1), expected);
    }
}

#[test]
fn test_clear_row_leaves_original_untouched() {
    let mut field = Field::new(10, 10);
    fill_row(&mut field, 7, 3);
    let snapshot = field.clone();
    let _ = field.clear_row(7);
    assert_eq!(field, snapshot);
}
