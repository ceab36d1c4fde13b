use crate::color_match;
use crate::dataset::ColorEntry;
use crate::hex;

/// Everything the detector screen shows for one click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pick {
    pub name: String,
    pub rgb: [u8; 3],
    pub hex: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickResult {
    /// Click landed outside [0,width) x [0,height); recoverable, warn only.
    OutOfBounds,
    /// No entries to match against.
    NoPalette,
    Matched(Pick),
}

/// Click command for the detector: sample the pixel at (x, y), origin
/// top-left, and match it against the palette. Free of any UI types.
pub fn on_click(img: &image::RgbaImage, entries: &[ColorEntry], x: i32, y: i32) -> PickResult {
    let (w, h) = (img.width() as i32, img.height() as i32);
    if x < 0 || y < 0 || x >= w || y >= h {
        return PickResult::OutOfBounds;
    }
    let px = img.get_pixel(x as u32, y as u32);
    let rgb = [px[0], px[1], px[2]];
    match color_match::nearest(rgb, entries) {
        Some(e) => PickResult::Matched(Pick {
            name: e.name.clone(),
            rgb,
            hex: hex::rgb_to_hex(rgb),
        }),
        None => PickResult::NoPalette,
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::Dataset;

    use super::*;

    fn test_image() -> image::RgbaImage {
        // 2x2: red, green / blue, white
        let mut img = image::RgbaImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 255, 0, 255]));
        img.put_pixel(0, 1, image::Rgba([0, 0, 255, 255]));
        img.put_pixel(1, 1, image::Rgba([255, 255, 255, 255]));
        img
    }

    fn test_dataset() -> Dataset {
        Dataset::from_csv("red,255,0,0\ngreen,0,255,0\nblue,0,0,255\nwhite,255,255,255\n").unwrap()
    }

    #[test]
    fn picks_the_clicked_pixel() {
        let (img, ds) = (test_image(), test_dataset());
        let PickResult::Matched(pick) = on_click(&img, ds.entries(), 1, 0) else {
            panic!("expected a match");
        };
        assert_eq!(pick.name, "green");
        assert_eq!(pick.rgb, [0, 255, 0]);
        assert_eq!(pick.hex, "#00ff00");
    }

    #[test]
    fn click_at_width_is_out_of_bounds() {
        let (img, ds) = (test_image(), test_dataset());
        assert_eq!(on_click(&img, ds.entries(), 2, 0), PickResult::OutOfBounds);
        assert_eq!(on_click(&img, ds.entries(), 0, 2), PickResult::OutOfBounds);
    }

    #[test]
    fn negative_coordinates_are_out_of_bounds() {
        let (img, ds) = (test_image(), test_dataset());
        assert_eq!(on_click(&img, ds.entries(), -1, 1), PickResult::OutOfBounds);
        assert_eq!(on_click(&img, ds.entries(), 1, -1), PickResult::OutOfBounds);
    }

    #[test]
    fn empty_palette_is_reported_as_such() {
        // distinct from the out-of-bounds warning even for in-bounds clicks
        let img = test_image();
        assert_eq!(on_click(&img, &[], 0, 0), PickResult::NoPalette);
        assert_eq!(on_click(&img, &[], -1, 0), PickResult::OutOfBounds);
    }

    #[test]
    fn off_palette_pixel_matches_the_nearest_name() {
        let mut img = test_image();
        img.put_pixel(0, 0, image::Rgba([250, 10, 5, 255]));
        let ds = test_dataset();
        let PickResult::Matched(pick) = on_click(&img, ds.entries(), 0, 0) else {
            panic!("expected a match");
        };
        assert_eq!(pick.name, "red");
        assert_eq!(pick.hex, "#fa0a05");
    }
}
