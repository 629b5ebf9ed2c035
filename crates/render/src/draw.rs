use image::{Rgb, RgbImage};

/// Fills a circle of `radius` pixels around `center`, in place.
///
/// Uses the midpoint scan-line fill, so radius 0 is a single pixel and
/// radius 1 is a 5-pixel plus. Pixels that fall outside the image are
/// skipped; a center far off-canvas draws nothing.
pub fn draw_filled_circle(image: &mut RgbImage, center: (i32, i32), radius: i32, color: Rgb<u8>) {
    if radius < 0 {
        return;
    }

    let (cx, cy) = (center.0 as i64, center.1 as i64);
    let mut x: i64 = 0;
    let mut y: i64 = radius as i64;
    let mut p: i64 = 1 - radius as i64;

    while x <= y {
        draw_span(image, cy + y, cx - x, cx + x, color);
        draw_span(image, cy - y, cx - x, cx + x, color);
        draw_span(image, cy + x, cx - y, cx + y, color);
        draw_span(image, cy - x, cx - y, cx + y, color);

        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * (x - y) + 1;
        }
    }
}

fn draw_span(image: &mut RgbImage, row: i64, x0: i64, x1: i64, color: Rgb<u8>) {
    let (width, height) = (image.width() as i64, image.height() as i64);
    if row < 0 || row >= height || x1 < 0 || x0 >= width {
        return;
    }
    for col in x0.max(0)..=x1.min(width - 1) {
        image.put_pixel(col as u32, row as u32, color);
    }
}
