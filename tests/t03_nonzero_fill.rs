
extern crate splashraster;

use splashraster::{Contour, ContourSet, Orientation, Rectangle, SupersampleCanvas};

fn square(x1: f64, y1: f64, x2: f64, y2: f64, dir: Orientation) -> Contour {
    let mut c = Contour::from(Rectangle::new(x1, y1, x2, y2));
    if c.orientation() != dir {
        c.invert();
    }
    c
}

fn filled(canvas: &SupersampleCanvas, x: usize, y: usize) -> bool {
    canvas.get_pixel(x, y)
}

#[test]
fn nested_opposite_contour_makes_hole() {
    let mut set = ContourSet::new();
    set.push(square(2., 2., 22., 22., Orientation::Clockwise));
    set.push(square(7., 7., 17., 17., Orientation::CounterClockwise));

    let mut canvas = SupersampleCanvas::new(30, 30, 1);
    canvas.clear();
    splashraster::fill_nonzero(&mut canvas, &set);

    assert_eq!(canvas.mask().count(), 400 - 100);
    for y in 0 .. 30 {
        for x in 0 .. 30 {
            let outer = (2 .. 22).contains(&x) && (2 .. 22).contains(&y);
            let hole = (7 .. 17).contains(&x) && (7 .. 17).contains(&y);
            assert_eq!(filled(&canvas, x, y), outer && !hole, "pixel {},{}", x, y);
        }
    }
}

#[test]
fn nested_same_direction_fills_solid() {
    let mut set = ContourSet::new();
    set.push(square(2., 2., 22., 22., Orientation::Clockwise));
    set.push(square(7., 7., 17., 17., Orientation::Clockwise));

    let mut canvas = SupersampleCanvas::new(30, 30, 1);
    splashraster::fill_nonzero(&mut canvas, &set);
    assert_eq!(canvas.mask().count(), 400);
}

#[test]
fn overlapping_contours_union() {
    let mut set = ContourSet::new();
    set.push(square(0., 0., 10., 10., Orientation::Clockwise));
    set.push(square(5., 5., 15., 15., Orientation::Clockwise));

    let mut canvas = SupersampleCanvas::new(20, 20, 1);
    splashraster::fill_nonzero(&mut canvas, &set);
    assert_eq!(canvas.mask().count(), 100 + 100 - 25);
    assert!(filled(&canvas, 7, 7));
    assert!(!filled(&canvas, 12, 2));
}

#[test]
fn independent_fills_lose_the_hole() {
    // Filling each contour on its own cannot cancel the inner square
    let outer = square(2., 2., 22., 22., Orientation::Clockwise);
    let inner = square(7., 7., 17., 17., Orientation::CounterClockwise);
    let mut canvas = SupersampleCanvas::new(30, 30, 1);
    splashraster::fill_nonzero(&mut canvas, &outer.into());
    splashraster::fill_nonzero(&mut canvas, &inner.into());
    assert_eq!(canvas.mask().count(), 400);
}

#[test]
fn hole_survives_supersampling() {
    let mut set = ContourSet::new();
    set.push(square(2., 2., 22., 22., Orientation::Clockwise));
    set.push(square(7., 7., 17., 17., Orientation::CounterClockwise));

    let mut canvas = SupersampleCanvas::new(30, 30, 12);
    splashraster::fill_nonzero(&mut canvas, &set);
    assert_eq!(canvas.mask().count(), (400 - 100) * 144);
    assert_eq!(canvas.coverage(3, 3), 1.0);
    assert_eq!(canvas.coverage(10, 10), 0.0);
    assert_eq!(canvas.coverage(25, 25), 0.0);
}

#[test]
fn fractional_edges_give_partial_coverage() {
    let mut set = ContourSet::new();
    set.push(square(1.5, 0., 3.25, 1., Orientation::Clockwise));
    let mut canvas = SupersampleCanvas::new(4, 1, 4);
    splashraster::fill_nonzero(&mut canvas, &set);
    assert_eq!(canvas.coverage(0, 0), 0.0);
    assert_eq!(canvas.coverage(1, 0), 0.5);
    assert_eq!(canvas.coverage(2, 0), 1.0);
    assert_eq!(canvas.coverage(3, 0), 0.25);
}

#[test]
fn contours_outside_canvas_are_dropped() {
    let mut set = ContourSet::new();
    set.push(square(-30., -30., -10., -10., Orientation::Clockwise));
    set.push(square(50., 0., 60., 10., Orientation::Clockwise));
    set.push(square(0., 50., 10., 60., Orientation::CounterClockwise));
    let mut canvas = SupersampleCanvas::new(20, 20, 2);
    splashraster::fill_nonzero(&mut canvas, &set);
    assert_eq!(canvas.mask().count(), 0);

    splashraster::fill_nonzero(&mut canvas, &ContourSet::new());
    assert_eq!(canvas.mask().count(), 0);
}

#[test]
fn touching_vertices_fill_both_shapes() {
    // Two triangles meeting at the single vertex (10, 10)
    let mut set = ContourSet::new();
    set.push(Contour::from_xy(&[(0.,0.),(20.,0.),(10.,10.)]).unwrap());
    set.push(Contour::from_xy(&[(10.,10.),(20.,20.),(0.,20.)]).unwrap());
    let mut canvas = SupersampleCanvas::new(20, 20, 1);
    splashraster::fill_nonzero(&mut canvas, &set);
    assert!(filled(&canvas, 10, 1));
    assert!(filled(&canvas, 10, 18));
    assert!(!filled(&canvas, 1, 10));
    assert!(!filled(&canvas, 18, 10));
    // Both shapes reach the shared vertex
    assert!(filled(&canvas, 9, 9));
    assert!(filled(&canvas, 9, 10));
    assert!(!filled(&canvas, 11, 9));
}
