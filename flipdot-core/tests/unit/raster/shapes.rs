use std::collections::HashSet;

use super::*;
use crate::raster::ellipse::ellipse;

#[test]
fn rectangle_outline_has_perimeter_cells_once() {
    let g = Grid::LARGE;
    let idx = rectangle(g, Cell::new(10, 8), Cell::new(2, 3), Clip::Bounds);
    let (w, h) = (9, 6);
    assert_eq!(idx.len(), 2 * (w + h) - 4);
    let unique: HashSet<_> = idx.iter().collect();
    assert_eq!(unique.len(), idx.len());
    assert!(idx.contains(&g.index(Cell::new(2, 3))));
    assert!(idx.contains(&g.index(Cell::new(10, 8))));
    assert!(!idx.contains(&g.index(Cell::new(5, 5))));
}

#[test]
fn degenerate_rectangles() {
    let g = Grid::LARGE;
    assert_eq!(rectangle(g, Cell::new(4, 4), Cell::new(4, 4), Clip::Bounds).len(), 1);
    assert_eq!(rectangle(g, Cell::new(1, 4), Cell::new(6, 4), Clip::Bounds).len(), 6);
    assert_eq!(rectangle(g, Cell::new(3, 0), Cell::new(3, 5), Clip::Bounds).len(), 6);
}

#[test]
fn filled_rectangle_covers_area() {
    let g = Grid::SMALL;
    let idx = filled_rectangle(g, Cell::new(0, 0), Cell::new(3, 2), Clip::Bounds);
    assert_eq!(idx.len(), 12);
    let clipped = filled_rectangle(g, Cell::new(-2, -2), Cell::new(1, 1), Clip::Bounds);
    assert_eq!(clipped.len(), 4);
}

#[test]
fn flood_fill_empty_grid_fills_everything() {
    let mut buf = PixelBuffer::new(Grid::SMALL);
    assert_eq!(flood_fill(&mut buf, Cell::new(5, 5), true), 80 * 20);
    assert_eq!(buf.count_on(), 80 * 20);
}

#[test]
fn flood_fill_stays_inside_outline() {
    let g = Grid::LARGE;
    let mut buf = PixelBuffer::new(g);
    buf.apply(&rectangle(g, Cell::new(0, 0), Cell::new(5, 4), Clip::Bounds), true);
    let changed = flood_fill(&mut buf, Cell::new(2, 2), true);
    assert_eq!(changed, 4 * 3);
    assert_eq!(buf.get(Cell::new(7, 7)), Some(false));
}

#[test]
fn flood_fill_inside_ellipse_does_not_leak() {
    let g = Grid::LARGE;
    let mut buf = PixelBuffer::new(g);
    buf.apply(&ellipse(g, Cell::new(40, 14), 10, 6, Clip::Bounds), true);
    let before = buf.count_on();
    let changed = flood_fill(&mut buf, Cell::new(40, 14), true);
    assert!(changed > 0);
    assert_eq!(buf.count_on(), before + changed);
    assert_eq!(buf.get(Cell::new(0, 0)), Some(false));
}

#[test]
fn flood_fill_noops() {
    let mut buf = PixelBuffer::new(Grid::SMALL);
    assert_eq!(flood_fill(&mut buf, Cell::new(-1, 0), true), 0);
    assert_eq!(flood_fill(&mut buf, Cell::new(0, 0), false), 0);
}
