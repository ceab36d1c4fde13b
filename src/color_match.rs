use crate::dataset::ColorEntry;

// Squared Euclidean distance in RGB space (no sqrt, ordering is identical)
#[inline]
fn dist_rgb2(a: [u8; 3], b: [u8; 3]) -> u32 {
    let dr = a[0] as i32 - b[0] as i32;
    let dg = a[1] as i32 - b[1] as i32;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Linear scan for the entry closest to `query`. Strict `<` replacement, so
/// on an exact tie the entry earliest in dataset order wins. `None` only for
/// an empty slice.
pub fn nearest<'a>(query: [u8; 3], entries: &'a [ColorEntry]) -> Option<&'a ColorEntry> {
    let mut best: Option<&ColorEntry> = None;
    let mut best_d = u32::MAX;
    for e in entries {
        let d = dist_rgb2(query, e.rgb);
        if d < best_d {
            best_d = d;
            best = Some(e);
            if d == 0 {
                break;
            }
        }
    }
    best
}
