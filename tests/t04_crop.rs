
extern crate splashraster;

use splashraster::PixelBuffer;

const BG: u16 = 0xF79D;

fn with_rows(width: usize, height: usize, content: &[usize]) -> PixelBuffer {
    let mut p = PixelBuffer::filled(width, height, BG);
    for &row in content {
        p.data[row * width + width / 2] = 0x1C9F;
    }
    p
}

#[test]
fn all_background_unchanged() {
    let p = PixelBuffer::filled(320, 240, BG);
    let c = splashraster::crop_vertical(&p, BG, splashraster::DEFAULT_CROP_MARGIN);
    assert_eq!(c.height, 240);
    assert_eq!(c, p);
}

#[test]
fn keeps_margin_around_content() {
    let p = with_rows(10, 100, &[40, 45]);
    let c = splashraster::crop_vertical(&p, BG, 4);
    assert_eq!(c.width, 10);
    assert_eq!(c.height, 45 - 40 + 1 + 8);
    assert_eq!(c.row(4), p.row(40));
    assert_eq!(c.row(9), p.row(45));
    assert!(c.row(0).iter().all(|&v| v == BG));
    assert!(c.row(c.height - 1).iter().all(|&v| v == BG));
}

#[test]
fn margin_clamped_to_image() {
    let p = with_rows(6, 20, &[1, 18]);
    let c = splashraster::crop_vertical(&p, BG, 4);
    assert_eq!(c, p);

    let p = with_rows(6, 20, &[2]);
    let c = splashraster::crop_vertical(&p, BG, 4);
    assert_eq!(c.height, 7);
    assert_eq!(c.row(2), p.row(2));
}

#[test]
fn single_differing_pixel_keeps_row() {
    let mut p = PixelBuffer::filled(8, 8, BG);
    p.data[3 * 8 + 7] = BG ^ 1;
    let c = splashraster::crop_vertical(&p, BG, 0);
    assert_eq!(c.height, 1);
    assert_eq!(c.data[7], BG ^ 1);
}
