use super::*;

#[test]
fn empty_text_renders_nothing() {
    let r = BitmapRasterizer::new();
    assert!(r.render("", FontSelector::Fixed, Canvas::default()).is_empty());
    assert!(r.render("   ", FontSelector::Proportional, Canvas::default()).is_empty());
}

#[test]
fn letter_i_columns() {
    let r = BitmapRasterizer::new();
    let fixed = r.render("I", FontSelector::Fixed, Canvas::default());
    // 0x41 0x7F 0x41 in columns 1..=3.
    assert_eq!(fixed.columns(), vec![1, 2, 3]);
    assert_eq!(fixed.len(), 2 + 7 + 2);

    let prop = r.render("I", FontSelector::Proportional, Canvas::default());
    assert_eq!(prop.columns(), vec![0, 1, 2]);
    assert_eq!(prop, fixed.shifted(-1, 0));
}

#[test]
fn fixed_cells_are_six_columns_wide() {
    let r = BitmapRasterizer::new();
    let hh = r.render("HH", FontSelector::Fixed, Canvas::default());
    assert_eq!(hh.columns(), vec![0, 1, 2, 3, 4, 6, 7, 8, 9, 10]);
}

#[test]
fn proportional_separates_characters_by_one_column() {
    let r = BitmapRasterizer::new();
    let hi = r.render("HI", FontSelector::Proportional, Canvas::default());
    assert_eq!(hi.columns(), vec![0, 1, 2, 3, 4, 6, 7, 8]);
    assert_eq!(r.measure("HI", FontSelector::Proportional), 9);
}

#[test]
fn unsupported_characters_render_blank() {
    let r = BitmapRasterizer::new();
    let s = r.render("\u{2603}I", FontSelector::Fixed, Canvas::default());
    assert_eq!(s.columns(), vec![7, 8, 9]);
}

#[test]
fn overflowing_text_is_clipped() {
    let r = BitmapRasterizer::new();
    let canvas = Canvas::new(8, 8).unwrap();
    let s = rasterize_to_pixelset(&r, "WWWW", FontSelector::Fixed, canvas);
    assert!(s.iter().all(|p| canvas.contains(p)));
    assert!(!s.is_empty());
}

#[test]
fn origin_offsets_text() {
    let r = BitmapRasterizer::with_origin(Pixel::new(2, 1));
    let base = BitmapRasterizer::new().render("A", FontSelector::Fixed, Canvas::default());
    let moved = r.render("A", FontSelector::Fixed, Canvas::default());
    assert_eq!(moved, base.shifted(2, 1));
}

#[test]
fn default_rasterizer_draws_from_the_top_left_corner() {
    let r = BitmapRasterizer::default();
    assert_eq!(r.origin, Pixel::new(0, 0));
    assert_eq!(r, BitmapRasterizer::new());
    let set = r.render("!", FontSelector::Proportional, Canvas::default());
    assert_eq!(set.bounding_box().map(|b| (b.min_x, b.min_y)), Some((0, 0)));
}
