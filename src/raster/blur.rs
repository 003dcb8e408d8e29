use crate::foundation::error::{MockupError, MockupResult};

/// Gaussian blur parameters: kernel half-width in pixels and standard deviation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurSpec {
    /// Kernel half-width in pixels.
    pub radius: u32,
    /// Gaussian standard deviation in pixels.
    pub sigma: f32,
}

impl BlurSpec {
    /// Construct blur parameters.
    pub const fn new(radius: u32, sigma: f32) -> Self {
        Self { radius, sigma }
    }
}

/// Separable Gaussian blur of a single 8-bit channel, with clamp-to-edge sampling.
pub fn blur_alpha8(src: &[u8], width: u32, height: u32, spec: BlurSpec) -> MockupResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| MockupError::validation("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(MockupError::validation(
            "blur_alpha8 expects src matching width*height",
        ));
    }
    if spec.radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(spec.radius, spec.sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

/// Normalized Gaussian weights in Q16; they always sum to exactly `1 << 16`.
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> MockupResult<Vec<u32>> {
    const ONE: i64 = 1 << 16;
    if radius == 0 {
        return Ok(vec![ONE as u32]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(MockupError::validation("blur sigma must be > 0"));
    }

    let r = i64::from(radius);
    let two_var = 2.0 * f64::from(sigma).powi(2);
    let raw: Vec<f64> = (-r..=r)
        .map(|i| (-((i * i) as f64) / two_var).exp())
        .collect();
    let total: f64 = raw.iter().sum();
    if total <= 0.0 {
        return Err(MockupError::validation("gaussian kernel sum is zero"));
    }

    let mut q: Vec<i64> = raw
        .iter()
        .map(|w| ((w / total) * ONE as f64).round() as i64)
        .map(|v| v.clamp(0, ONE))
        .collect();
    // Rounding drift goes to the center tap.
    let drift = ONE - q.iter().sum::<i64>();
    let mid = q.len() / 2;
    q[mid] = (q[mid] + drift).clamp(0, ONE);

    Ok(q.into_iter().map(|v| v as u32).collect())
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        let row = (y * w) as usize;
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                acc += u64::from(kw) * u64::from(src[row + sx as usize]);
            }
            dst[row + x as usize] = q16_to_u8(acc);
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                acc += u64::from(kw) * u64::from(src[(sy * w + x) as usize]);
            }
            dst[(y * w + x) as usize] = q16_to_u8(acc);
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blur.rs"]
mod tests;
