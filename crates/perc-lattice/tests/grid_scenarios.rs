use perc_core::PercError;
use perc_lattice::PercolationGrid;

#[test]
fn fresh_grid_is_fully_blocked() {
    for side in [1, 2, 5, 9] {
        let grid = PercolationGrid::new(side).unwrap();
        assert_eq!(grid.side(), side);
        assert_eq!(grid.open_sites(), 0);
        assert!(!grid.percolates());
        for row in 1..=side {
            for col in 1..=side {
                assert!(!grid.is_open(row, col).unwrap());
                assert!(!grid.is_full(row, col).unwrap());
            }
        }
    }
}

#[test]
fn zero_side_is_rejected() {
    assert!(matches!(
        PercolationGrid::new(0),
        Err(PercError::Argument(_))
    ));
}

#[test]
fn out_of_range_sites_are_rejected() {
    let mut grid = PercolationGrid::new(5).unwrap();
    assert!(grid.open(0, 3).is_err());
    assert!(grid.open(3, 0).is_err());
    assert!(grid.open(6, 1).is_err());
    assert!(grid.is_open(1, 6).is_err());
    let err = grid.is_full(7, 7).unwrap_err();
    assert_eq!(err.info().code, "site-bounds");
}

#[test]
fn open_is_idempotent() {
    let mut grid = PercolationGrid::new(4).unwrap();
    grid.open(1, 2).unwrap();
    let opened_once = grid.open_sites();
    let full_once = grid.is_full(1, 2).unwrap();
    grid.open(1, 2).unwrap();
    assert_eq!(grid.open_sites(), opened_once);
    assert_eq!(grid.is_full(1, 2).unwrap(), full_once);
    assert!(!grid.percolates());
}

#[test]
fn two_isolated_sites_do_not_percolate() {
    let mut grid = PercolationGrid::new(5).unwrap();
    grid.open(3, 2).unwrap();
    grid.open(1, 5).unwrap();
    assert_eq!(grid.open_sites(), 2);
    assert!(!grid.percolates());
    assert!(!grid.is_full(3, 2).unwrap());
    // Top-row sites are full as soon as they open.
    assert!(grid.is_full(1, 5).unwrap());
}

#[test]
fn winding_path_percolates() {
    let mut grid = PercolationGrid::new(5).unwrap();
    let path = [
        (1, 1),
        (2, 1),
        (2, 2),
        (3, 2),
        (3, 1),
        (3, 5),
        (4, 1),
        (4, 2),
        (4, 3),
        (4, 4),
        (5, 4),
    ];
    for (row, col) in path {
        grid.open(row, col).unwrap();
    }
    assert_eq!(grid.open_sites(), 11);
    assert!(grid.percolates());
    assert!(grid.is_full(3, 2).unwrap());
    assert!(!grid.is_full(5, 1).unwrap());
}

#[test]
fn fullness_and_percolation_are_monotone() {
    let mut grid = PercolationGrid::new(3).unwrap();
    grid.open(1, 1).unwrap();
    assert!(grid.is_full(1, 1).unwrap());
    grid.open(2, 1).unwrap();
    grid.open(3, 1).unwrap();
    assert!(grid.percolates());
    // Opening unrelated sites must not undo fullness or percolation.
    grid.open(2, 3).unwrap();
    grid.open(3, 3).unwrap();
    assert!(grid.is_full(1, 1).unwrap());
    assert!(grid.is_full(2, 1).unwrap());
    assert!(grid.percolates());
}

#[test]
fn single_site_grid_percolates_on_first_open() {
    let mut grid = PercolationGrid::new(1).unwrap();
    assert!(!grid.percolates());
    grid.open(1, 1).unwrap();
    assert!(grid.percolates());
    assert!(grid.is_full(1, 1).unwrap());
}

#[test]
fn bottom_row_open_site_is_not_full_without_a_path() {
    let mut grid = PercolationGrid::new(3).unwrap();
    grid.open(3, 2).unwrap();
    assert!(grid.is_open(3, 2).unwrap());
    assert!(!grid.is_full(3, 2).unwrap());
    assert!(!grid.percolates());
}

#[test]
fn reset_blocks_everything_but_keeps_the_side() {
    let mut grid = PercolationGrid::new(4).unwrap();
    for col in 1..=4 {
        for row in 1..=4 {
            grid.open(row, col).unwrap();
        }
    }
    assert!(grid.percolates());
    grid.reset();
    assert_eq!(grid.side(), 4);
    assert_eq!(grid.open_sites(), 0);
    assert!(!grid.percolates());
    assert!(!grid.is_full(1, 1).unwrap());
}
