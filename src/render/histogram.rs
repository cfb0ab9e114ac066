use crate::render::surface::Surface;

/// Normalized 256-bucket frequency distributions; each array sums to 1.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Histogram {
    pub r: Vec<f32>,
    pub g: Vec<f32>,
    pub b: Vec<f32>,
    pub luma: Vec<f32>,
}

// Bucketing is sensitive to the last bit near .5, so it stays in f64.
fn luma_f64(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Sample every pixel of `surface` once. `None` for a zero-area surface.
#[tracing::instrument(skip(surface), fields(w = surface.width, h = surface.height))]
pub fn compute_histogram(surface: &Surface) -> Option<Histogram> {
    if surface.is_empty() {
        return None;
    }
    let mut counts = [[0u32; 256]; 4];
    for px in surface.data.chunks_exact(4) {
        counts[0][usize::from(px[0])] += 1;
        counts[1][usize::from(px[1])] += 1;
        counts[2][usize::from(px[2])] += 1;
        let y = luma_f64(px[0], px[1], px[2]);
        let bucket = (y + 0.5).floor().clamp(0.0, 255.0) as usize;
        counts[3][bucket] += 1;
    }
    let total = f64::from(surface.width) * f64::from(surface.height);
    let [r, g, b, l]: [Vec<f32>; 4] =
        counts.map(|c| c.iter().map(|&n| (f64::from(n) / total) as f32).collect());
    Some(Histogram { r, g, b, luma: l })
}
