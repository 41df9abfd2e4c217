use proptest::prelude::*;
use speckflow::Lattice;

#[test]
fn test_ceil_sizing() {
    let lattice = Lattice::new(90.0, 90.0, 30.0).unwrap();
    assert_eq!(lattice.num_cols, 3);
    assert_eq!(lattice.num_rows, 3);

    // A partial trailing cell still gets a full column.
    let lattice = Lattice::new(100.0, 90.0, 30.0).unwrap();
    assert_eq!(lattice.num_cols, 4);
    assert_eq!(lattice.num_rows, 3);
}

#[test]
fn test_cell_positions_and_coords() {
    let lattice = Lattice::new(90.0, 60.0, 30.0).unwrap();
    for cell in &lattice.cells {
        assert_eq!(cell.pos.x, cell.col as f32 * 30.0);
        assert_eq!(cell.pos.y, cell.row as f32 * 30.0);
    }
    assert_eq!(lattice.cell(2, 1).col, 2);
    assert_eq!(lattice.cell(2, 1).row, 1);
}

#[test]
fn test_neighbor_links_are_mutual() {
    let lattice = Lattice::new(150.0, 120.0, 30.0).unwrap();

    for (i, cell) in lattice.cells.iter().enumerate() {
        let l = cell.links;
        assert_eq!(lattice.cells[l.up].links.down, i);
        assert_eq!(lattice.cells[l.down].links.up, i);
        assert_eq!(lattice.cells[l.left].links.right, i);
        assert_eq!(lattice.cells[l.right].links.left, i);
        assert_eq!(lattice.cells[l.up_left].links.down_right, i);
        assert_eq!(lattice.cells[l.up_right].links.down_left, i);
        assert_eq!(lattice.cells[l.down_left].links.up_right, i);
        assert_eq!(lattice.cells[l.down_right].links.up_left, i);
    }
}

#[test]
fn test_edges_wrap_to_opposite_edge() {
    let lattice = Lattice::new(150.0, 120.0, 30.0).unwrap();
    let (cols, rows) = (lattice.num_cols, lattice.num_rows);

    // Top row looks up at the bottom row, same column.
    for col in 0..cols {
        let top = lattice.cell(col, 0);
        assert_eq!(top.links.up, lattice.index(col, rows - 1));
    }
    // Left column looks left at the right column, same row.
    for row in 0..rows {
        let left = lattice.cell(0, row);
        assert_eq!(left.links.left, lattice.index(cols - 1, row));
    }
    // Corner diagonal wraps both axes at once.
    let corner = lattice.cell(0, 0);
    assert_eq!(corner.links.up_left, lattice.index(cols - 1, rows - 1));
}

#[test]
fn test_single_cell_lattice_links_to_itself() {
    let lattice = Lattice::new(10.0, 10.0, 30.0).unwrap();
    assert_eq!(lattice.num_cols, 1);
    assert_eq!(lattice.num_rows, 1);

    let links = lattice.cell(0, 0).links;
    assert_eq!(links.up, 0);
    assert_eq!(links.down, 0);
    assert_eq!(links.left, 0);
    assert_eq!(links.right, 0);
    assert_eq!(links.up_left, 0);
    assert_eq!(links.down_right, 0);
}

#[test]
fn test_single_column_wraps_vertically() {
    let lattice = Lattice::new(10.0, 90.0, 30.0).unwrap();
    assert_eq!(lattice.num_cols, 1);
    assert_eq!(lattice.num_rows, 3);

    let links = lattice.cell(0, 1).links;
    // Horizontal neighbors collapse onto the cell's own column.
    assert_eq!(links.left, lattice.index(0, 1));
    assert_eq!(links.right, lattice.index(0, 1));
    assert_eq!(links.up_left, lattice.index(0, 0));
    assert_eq!(links.down_right, lattice.index(0, 2));
}

#[test]
fn test_clear_empties_lattice() {
    let mut lattice = Lattice::new(90.0, 90.0, 30.0).unwrap();
    lattice.clear();
    assert!(lattice.is_empty());
    assert_eq!(lattice.num_cols, 0);
    assert_eq!(lattice.num_rows, 0);
}

proptest! {
    #[test]
    fn prop_links_mutual_for_any_lattice_shape(cols in 1usize..12, rows in 1usize..12) {
        let lattice = Lattice::new(cols as f32 * 10.0, rows as f32 * 10.0, 10.0)
            .expect("positive dimensions");
        prop_assert_eq!(lattice.num_cols, cols);
        prop_assert_eq!(lattice.num_rows, rows);

        for (i, cell) in lattice.cells.iter().enumerate() {
            let l = cell.links;
            prop_assert_eq!(lattice.cells[l.up].links.down, i);
            prop_assert_eq!(lattice.cells[l.left].links.right, i);
            prop_assert_eq!(lattice.cells[l.up_left].links.down_right, i);
            prop_assert_eq!(lattice.cells[l.down_left].links.up_right, i);
        }
    }

    #[test]
    fn prop_every_link_is_in_bounds(cols in 1usize..12, rows in 1usize..12) {
        let lattice = Lattice::new(cols as f32 * 10.0, rows as f32 * 10.0, 10.0)
            .expect("positive dimensions");
        let len = lattice.cells.len();

        for cell in &lattice.cells {
            let l = cell.links;
            for idx in [l.up, l.down, l.left, l.right, l.up_left, l.up_right, l.down_left, l.down_right] {
                prop_assert!(idx < len);
            }
        }
    }
}
