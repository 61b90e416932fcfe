use super::*;

#[test]
fn default_canvas_is_eight_cascaded_blocks() {
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (64, 8));
    assert_eq!(Canvas::matrix(8).unwrap(), c);
    assert_eq!(c.total_pixels(), 512);
    assert_eq!(c.center(), Pixel::new(32, 4));
}

#[test]
fn zero_sized_canvas_is_rejected() {
    assert!(Canvas::new(0, 8).is_err());
    assert!(Canvas::new(8, 0).is_err());
    assert!(Canvas::matrix(0).is_err());
}

#[test]
fn contains_boundaries() {
    let c = Canvas::new(4, 2).unwrap();
    assert!(c.contains(Pixel::new(0, 0)));
    assert!(c.contains(Pixel::new(3, 1)));
    assert!(!c.contains(Pixel::new(4, 1)));
    assert!(!c.contains(Pixel::new(-1, 0)));
    assert!(c.contains_point(3.99, 1.5));
    assert!(!c.contains_point(-0.01, 0.0));
    assert!(!c.contains_point(4.0, 0.0));
}

#[test]
fn pixels_order_row_major() {
    let mut v = vec![Pixel::new(5, 1), Pixel::new(0, 2), Pixel::new(9, 0), Pixel::new(1, 1)];
    v.sort();
    assert_eq!(
        v,
        vec![Pixel::new(9, 0), Pixel::new(1, 1), Pixel::new(5, 1), Pixel::new(0, 2)]
    );
}

#[test]
fn cells_walk_row_major() {
    let c = Canvas::new(3, 2).unwrap();
    let cells: Vec<Pixel> = c.cells().collect();
    assert_eq!(cells.len(), 6);
    assert_eq!(cells[0], Pixel::new(0, 0));
    assert_eq!(cells[3], Pixel::new(0, 1));
    assert_eq!(c.cell_at(5), Pixel::new(2, 1));
}
