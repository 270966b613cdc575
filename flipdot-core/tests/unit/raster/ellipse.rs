use std::collections::HashSet;

use super::*;

fn cells_of(grid: Grid, idx: &[CellIndex]) -> HashSet<Cell> {
    idx.iter()
        .map(|&i| grid.cell_at(grid.slot(i).expect("clipped output is in range")))
        .collect()
}

fn is_8_connected(cells: &HashSet<Cell>) -> bool {
    let Some(&start) = cells.iter().next() else {
        return true;
    };
    let mut seen = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some(c) = stack.pop() {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let n = c.offset(dx, dy);
                if cells.contains(&n) && seen.insert(n) {
                    stack.push(n);
                }
            }
        }
    }
    seen.len() == cells.len()
}

#[test]
fn zero_radii_is_the_centre() {
    let g = Grid::LARGE;
    let idx = ellipse(g, Cell::new(10, 5), 0, 0, Clip::Bounds);
    assert_eq!(idx, vec![5 * 84 + 10]);
}

#[test]
fn zero_ry_is_a_horizontal_segment() {
    let g = Grid::LARGE;
    let idx = ellipse(g, Cell::new(20, 4), 5, 0, Clip::Bounds);
    let expected: Vec<CellIndex> = (15..=25).map(|x| 4 * 84 + x).collect();
    assert_eq!(idx, expected);

    let clipped = ellipse(g, Cell::new(2, 4), 5, 0, Clip::Bounds);
    assert_eq!(clipped.len(), 8);
    assert!(clipped.len() <= 11);
}

#[test]
fn zero_rx_is_a_vertical_segment() {
    let g = Grid::SMALL;
    let cells = ellipse_cells(Cell::new(7, 10), 0, 3);
    assert_eq!(cells.len(), 7);
    assert!(cells.iter().all(|c| c.x == 7));
    let idx = ellipse(g, Cell::new(7, 1), 0, 3, Clip::Bounds);
    assert_eq!(idx.len(), 5);
}

#[test]
fn outline_touches_axis_extremes() {
    let center = Cell::new(40, 14);
    for (rx, ry) in [(4, 4), (10, 6), (3, 9), (2, 2), (13, 5)] {
        let set: HashSet<Cell> = ellipse_cells(center, rx, ry).into_iter().collect();
        let (rx, ry) = (rx as i32, ry as i32);
        assert!(set.contains(&center.offset(rx, 0)), "{rx}x{ry}");
        assert!(set.contains(&center.offset(-rx, 0)), "{rx}x{ry}");
        assert!(set.contains(&center.offset(0, ry)), "{rx}x{ry}");
        assert!(set.contains(&center.offset(0, -ry)), "{rx}x{ry}");
        assert!(
            set.iter()
                .all(|c| (c.x - center.x).abs() <= rx && (c.y - center.y).abs() <= ry)
        );
    }
}

#[test]
fn outline_is_closed_and_has_no_duplicates() {
    for (rx, ry) in [(1, 1), (5, 3), (12, 8), (8, 1), (1, 8)] {
        let cells = ellipse_cells(Cell::new(0, 0), rx, ry);
        let set: HashSet<Cell> = cells.iter().copied().collect();
        assert_eq!(set.len(), cells.len());
        assert!(is_8_connected(&set), "{rx}x{ry}");
    }
}

#[test]
fn clipped_output_is_mirror_symmetric() {
    let g = Grid::LARGE;
    let center = Cell::new(3, 2);
    let idx = ellipse(g, center, 9, 5, Clip::Bounds);
    let set = cells_of(g, &idx);
    assert!(!set.is_empty());
    for c in &set {
        let h = Cell::new(2 * center.x - c.x, c.y);
        let v = Cell::new(c.x, 2 * center.y - c.y);
        if g.contains(h) {
            assert!(set.contains(&h), "missing horizontal mirror of {c:?}");
        }
        if g.contains(v) {
            assert!(set.contains(&v), "missing vertical mirror of {c:?}");
        }
    }
}

#[test]
fn unclipped_output_keeps_off_grid_candidates() {
    let g = Grid::SMALL;
    let raw = ellipse(g, Cell::new(0, 0), 3, 3, Clip::None);
    let clipped = ellipse(g, Cell::new(0, 0), 3, 3, Clip::Bounds);
    assert!(raw.len() > clipped.len());
    assert!(raw.iter().any(|&i| i < 0));
}

#[test]
fn huge_radii_around_the_grid_clip_to_nothing() {
    let g = Grid::LARGE;
    let center = Cell::new(40, 14);
    assert!(ellipse(g, center, 70_000, 70_000, Clip::Bounds).is_empty());
    assert!(ellipse(g, center, u32::MAX, u32::MAX, Clip::Bounds).is_empty());
}

#[test]
fn very_wide_flat_ellipse_clips_to_two_rows() {
    let g = Grid::LARGE;
    let idx = ellipse(g, Cell::new(40, 14), u32::MAX, 3, Clip::Bounds);
    let set = cells_of(g, &idx);
    assert_eq!(idx.len(), 2 * 84);
    assert_eq!(set.len(), idx.len());
    assert!(set.iter().all(|c| c.y == 11 || c.y == 17));
}

#[test]
fn huge_degenerate_radii_cover_the_centre_line() {
    let g = Grid::LARGE;
    let center = Cell::new(40, 14);

    let row = ellipse(g, center, 3_000_000_000, 0, Clip::Bounds);
    let expected: Vec<CellIndex> = (0..84).map(|x| 14 * 84 + x).collect();
    assert_eq!(row, expected);

    let column = ellipse(g, center, 0, u32::MAX, Clip::Bounds);
    let expected: Vec<CellIndex> = (0..28).map(|y| y * 84 + 40).collect();
    assert_eq!(column, expected);

    let off_grid = ellipse(g, Cell::new(40, 30), u32::MAX, 0, Clip::Bounds);
    assert!(off_grid.is_empty());
}

#[test]
fn large_clipped_ellipse_matches_the_filtered_outline() {
    let g = Grid::LARGE;
    // Circle whose top edge grazes row 14.
    let center = Cell::new(41, 1014);
    let clipped = ellipse(g, center, 1000, 1000, Clip::Bounds);
    let full: Vec<CellIndex> = ellipse_cells(center, 1000, 1000)
        .into_iter()
        .filter(|&c| g.contains(c))
        .map(|c| g.index(c))
        .collect();

    assert!(!clipped.is_empty());
    assert_eq!(clipped, full);
    assert!(clipped.contains(&(14 * 84 + 41)));
    assert!(clipped.iter().all(|&i| g.slot(i).is_some()));
}

#[test]
fn unclipped_degenerate_segment_stays_in_coordinate_range() {
    let cells = ellipse_cells(Cell::new(i32::MAX - 2, 0), 5, 0);
    assert_eq!(cells.len(), 8);
    assert_eq!(cells.last(), Some(&Cell::new(i32::MAX, 0)));
}
