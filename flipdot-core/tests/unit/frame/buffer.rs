use super::*;
use crate::raster::{Clip, line::bresenham_line};

#[test]
fn apply_skips_offsets_outside_the_buffer() {
    let g = Grid::SMALL;
    let mut buf = PixelBuffer::new(g);
    let raw = bresenham_line(g, Cell::new(-3, 0), Cell::new(2, 0), Clip::None);
    assert_eq!(raw.len(), 6);
    assert_eq!(buf.apply(&raw, true), 3);
    assert_eq!(buf.count_on(), 3);
    assert_eq!(buf.apply(&[i64::MAX, -1, 80 * 20], true), 0);
}

#[test]
fn set_and_get_are_bounds_checked() {
    let mut buf = PixelBuffer::new(Grid::LARGE);
    assert!(buf.set(Cell::new(83, 27), true));
    assert!(!buf.set(Cell::new(84, 0), true));
    assert_eq!(buf.get(Cell::new(83, 27)), Some(true));
    assert_eq!(buf.get(Cell::new(0, -1)), None);
}

#[test]
fn bits_round_trip_through_the_buffer() {
    let g = Grid::new(4, 2).unwrap();
    let buf = PixelBuffer::from_bits(g, "10010110");
    assert_eq!(buf.to_bits(), "10010110");
    assert_eq!(buf.get(Cell::new(3, 0)), Some(true));
    assert_eq!(buf.get(Cell::new(0, 1)), Some(false));
    assert_eq!(PixelBuffer::from_bits(g, "1").to_bits(), "10000000");
    assert!(PixelBuffer::from_bits_strict(g, "1").is_err());
}

#[test]
fn from_cells_checks_length() {
    let g = Grid::new(3, 3).unwrap();
    assert!(PixelBuffer::from_cells(g, vec![true; 9]).is_ok());
    assert!(PixelBuffer::from_cells(g, vec![true; 8]).is_err());
}

#[test]
fn blit_ors_and_clips() {
    let sprite = PixelBuffer::from_bits(Grid::new(2, 2).unwrap(), "1001");
    let mut dst = PixelBuffer::new(Grid::new(3, 3).unwrap());
    dst.set(Cell::new(0, 2), true);
    dst.blit(&sprite, Cell::new(2, 1));
    assert_eq!(dst.to_ascii(), "...\n..#\n#..\n");
}

#[test]
fn fill_invert_clear() {
    let mut buf = PixelBuffer::new(Grid::new(2, 2).unwrap());
    buf.set(Cell::new(0, 0), true);
    buf.invert();
    assert_eq!(buf.to_bits(), "0111");
    buf.fill(true);
    assert_eq!(buf.count_on(), 4);
    buf.clear();
    assert_eq!(buf.count_on(), 0);
}
