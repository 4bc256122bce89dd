//! Bitmap to character-cell conversion.
//!
//! A [`Dither`] describes a pixel buffer (depth, size, pitch, channel masks
//! or palette) together with the quantization settings used to turn it into
//! colored glyphs. [`Dither::render`] is stateless: the error buffer and the
//! random generator live for one call only, so repeated renders of the same
//! buffer produce identical output.
//!
//! Channel values are handled as 12-bit integers (0..=0xfff) throughout.

mod algorithm;
mod mode;
mod settings;

use log::{debug, trace};

use crate::attr::Color;
use crate::canvas::Canvas;
use crate::error::{Error, Result};

pub use mode::{Algorithm, Antialias, Charset, ColorMode};
pub use settings::DitherSettings;

use algorithm::Threshold;

/// 12-bit RGB of the 16 ANSI colors.
const RGB_PALETTE: [[i32; 3]; 16] = [
    [0x000, 0x000, 0x000],
    [0x000, 0x000, 0x7ff],
    [0x000, 0x7ff, 0x000],
    [0x000, 0x7ff, 0x7ff],
    [0x7ff, 0x000, 0x000],
    [0x7ff, 0x000, 0x7ff],
    [0x7ff, 0x7ff, 0x000],
    [0xaaa, 0xaaa, 0xaaa],
    [0x555, 0x555, 0x555],
    [0x000, 0x000, 0xfff],
    [0x000, 0xfff, 0x000],
    [0x000, 0xfff, 0xfff],
    [0xfff, 0x000, 0x000],
    [0xfff, 0x000, 0xfff],
    [0xfff, 0xfff, 0x000],
    [0xfff, 0xfff, 0xfff],
];

/// Distance multiplier per palette entry; grays are penalized.
const RGB_WEIGHT: [i64; 16] = [2, 1, 1, 1, 1, 1, 1, 2, 2, 1, 1, 1, 1, 1, 1, 2];

/// Alpha below this makes a cell transparent.
const ALPHA_THRESHOLD: u32 = 0x800;

const GAMMA_LEN: usize = 4096;

/// Position and width of one channel inside a pixel word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChannelMask {
    mask: u32,
    shift: u32,
    bits: u32,
}

impl ChannelMask {
    fn new(mask: u32) -> Self {
        if mask == 0 {
            return Self {
                mask,
                shift: 0,
                bits: 0,
            };
        }
        let shift = mask.trailing_zeros();
        Self {
            mask,
            shift,
            bits: (mask >> shift).trailing_ones(),
        }
    }

    /// Channel value scaled to 12 bits.
    fn extract(self, word: u32) -> u32 {
        let v = (word & self.mask) >> self.shift;
        if self.bits >= 12 {
            v >> (self.bits - 12)
        } else {
            v << (12 - self.bits)
        }
    }
}

/// 256-entry 12-bit palette for 8bpp buffers.
#[derive(Debug, Clone)]
struct Palette {
    red: [u16; 256],
    green: [u16; 256],
    blue: [u16; 256],
    alpha: [u16; 256],
}

impl Palette {
    fn grayscale() -> Self {
        let mut ramp = [0u16; 256];
        for (i, v) in ramp.iter_mut().enumerate() {
            *v = (i * 0xfff / 255) as u16;
        }
        Self {
            red: ramp,
            green: ramp,
            blue: ramp,
            alpha: [0xfff; 256],
        }
    }
}

/// Pixel layout plus quantization settings.
#[derive(Debug, Clone)]
pub struct Dither {
    bpp: u32,
    width: usize,
    height: usize,
    pitch: usize,
    masks: [ChannelMask; 4],
    palette: Palette,
    has_alpha: bool,

    brightness: f32,
    gamma: f32,
    contrast: f32,
    gamma_table: Vec<u16>,

    antialias: Antialias,
    color: ColorMode,
    charset: Charset,
    algorithm: Algorithm,
    seed: u64,
}

impl Dither {
    /// Describe a `width` × `height` buffer of `bpp`-bit little-endian
    /// pixels, `pitch` bytes per row.
    ///
    /// Masks select the red, green, blue and alpha bits of each pixel word.
    /// They are ignored at 8bpp, where a palette is used instead (grayscale
    /// until [`set_palette`](Self::set_palette) replaces it). A zero alpha
    /// mask means fully opaque.
    pub fn new(
        bpp: u32,
        width: usize,
        height: usize,
        pitch: usize,
        rmask: u32,
        gmask: u32,
        bmask: u32,
        amask: u32,
    ) -> Result<Self> {
        if !matches!(bpp, 8 | 16 | 24 | 32) {
            return Err(Error::InvalidDepth(bpp));
        }
        if width == 0 || height == 0 {
            return Err(Error::InvalidGeometry(format!(
                "empty {width}x{height} bitmap"
            )));
        }
        let row_len = width
            .checked_mul(bpp as usize / 8)
            .ok_or_else(|| Error::InvalidGeometry("bitmap row overflows".into()))?;
        if pitch < row_len {
            return Err(Error::InvalidGeometry(format!(
                "pitch {pitch} shorter than a {row_len}-byte row"
            )));
        }

        let has_alpha = bpp > 8 && amask != 0;
        let dither = Self {
            bpp,
            width,
            height,
            pitch,
            masks: [rmask, gmask, bmask, amask].map(ChannelMask::new),
            palette: Palette::grayscale(),
            has_alpha,
            brightness: 0.0,
            gamma: 1.0,
            contrast: 1.0,
            gamma_table: gamma_table(1.0),
            antialias: Antialias::default(),
            color: ColorMode::default(),
            charset: Charset::default(),
            algorithm: Algorithm::default(),
            seed: 0,
        };
        debug!("created {bpp}bpp {width}x{height} dither, pitch {pitch}");
        Ok(dither)
    }

    /// Replace the 8bpp palette. Every value must fit in 12 bits.
    pub fn set_palette(
        &mut self,
        red: &[u16; 256],
        green: &[u16; 256],
        blue: &[u16; 256],
        alpha: &[u16; 256],
    ) -> Result<()> {
        if self.bpp != 8 {
            return Err(Error::InvalidDepth(self.bpp));
        }
        let channels = [red, green, blue, alpha];
        if let Some(v) = channels.iter().flat_map(|c| c.iter()).find(|&&v| v > 0xfff) {
            return Err(Error::InvalidArgument(format!(
                "palette value {v:#x} exceeds 0xfff"
            )));
        }
        self.palette = Palette {
            red: *red,
            green: *green,
            blue: *blue,
            alpha: *alpha,
        };
        self.has_alpha = alpha.iter().any(|&a| u32::from(a) < ALPHA_THRESHOLD);
        Ok(())
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Set the gamma exponent. A negative value also inverts the output
    /// colors; zero is rejected.
    pub fn set_gamma(&mut self, gamma: f32) -> Result<()> {
        if gamma == 0.0 || !gamma.is_finite() {
            return Err(Error::InvalidArgument(format!("gamma {gamma}")));
        }
        self.gamma = gamma;
        self.gamma_table = gamma_table(gamma.abs());
        Ok(())
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    pub fn set_contrast(&mut self, contrast: f32) {
        self.contrast = contrast;
    }

    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    pub fn set_antialias(&mut self, antialias: Antialias) {
        self.antialias = antialias;
    }

    pub fn antialias(&self) -> Antialias {
        self.antialias
    }

    pub fn set_color(&mut self, color: ColorMode) {
        self.color = color;
    }

    pub fn color(&self) -> ColorMode {
        self.color
    }

    pub fn set_charset(&mut self, charset: Charset) {
        self.charset = charset;
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Seed for [`Algorithm::Random`]. Each render starts from this seed.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn bytes_per_pixel(&self) -> usize {
        self.bpp as usize / 8
    }

    /// Minimum buffer length for this layout.
    pub fn required_len(&self) -> usize {
        self.pitch * (self.height - 1) + self.width * self.bytes_per_pixel()
    }

    /// Draw `pixels` into the `w` × `h` cell rectangle at (x, y).
    ///
    /// Cells outside the canvas are skipped and so are fully transparent
    /// ones. Glyphs go through `put_char`, so dirty tracking applies. The
    /// canvas attribute is left as it was.
    pub fn render(
        &self,
        canvas: &mut Canvas,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        pixels: &[u8],
    ) -> Result<()> {
        let required = self.required_len();
        if pixels.len() < required {
            return Err(Error::InvalidGeometry(format!(
                "pixel buffer holds {} bytes, {required} needed",
                pixels.len()
            )));
        }
        if w <= 0 || h <= 0 {
            return Ok(());
        }

        let (x1, y1) = (i64::from(x), i64::from(y));
        let (x2, y2) = (x1 + i64::from(w) - 1, y1 + i64::from(h) - 1);
        let cx0 = x1.max(0);
        let cy0 = y1.max(0);
        let cx1 = x2.min(canvas.width() as i64 - 1);
        let cy1 = y2.min(canvas.height() as i64 - 1);
        if cx0 > cx1 || cy0 > cy1 {
            return Ok(());
        }

        let saved = canvas.attr();
        let glyphs = self.charset.glyphs();
        let levels = glyphs.len() as i64;
        let span = 2 * levels - 1;
        let palette = self.color.palette();
        let mut threshold = Threshold::new(self.algorithm, self.seed);
        let diffusion = threshold.is_diffusion();

        // Errors carried to the next row, with one guard cell each side.
        let row_len = (cx1 - cx0 + 1) as usize;
        let mut below = vec![[0i64; 3]; row_len + 2];
        let (img_w, img_h) = (self.width as i64, self.height as i64);

        for cy in cy0..=cy1 {
            let mut carry = below[1];
            below[0] = [0; 3];
            below[1] = [0; 3];
            below[row_len + 1] = [0; 3];
            for cx in cx0..=cx1 {
                let slot = (cx - cx0) as usize + 1;

                let fromx = (cx - x1) * img_w / i64::from(w);
                let fromy = (cy - y1) * img_h / i64::from(h);
                let tox = ((cx - x1 + 1) * img_w / i64::from(w)).max(fromx + 1);
                let toy = ((cy - y1 + 1) * img_h / i64::from(h)).max(fromy + 1);

                let rgba = match self.antialias {
                    Antialias::Prefilter => self.average(pixels, fromx, fromy, tox, toy),
                    Antialias::None => {
                        let (px, py) = ((fromx + tox) / 2, (fromy + toy) / 2);
                        self.pixel(pixels, px as usize, py as usize)
                    }
                };

                if self.has_alpha && rgba[3] < ALPHA_THRESHOLD as i64 {
                    carry = [0; 3];
                    below[slot] = [0; 3];
                    continue;
                }

                let mut c = [0i64; 3];
                for (k, v) in c.iter_mut().enumerate() {
                    *v = self.adjust(rgba[k]);
                    if diffusion {
                        *v += carry[k];
                    } else {
                        let t = threshold.sample(cx as usize, cy as usize);
                        *v += i64::from(t - 0x80) * 4;
                    }
                }

                let (mut fg, mut bg, ch) = if self.color.is_full() {
                    let bg = nearest(&c, palette, None);
                    let fg = nearest(&c, palette, Some(bg));
                    (fg, bg, coverage_index(&c, fg, bg, levels))
                } else {
                    let fg = if self.color == ColorMode::Mono {
                        Color::LightGray.index()
                    } else {
                        nearest(&c, &palette[1..], None)
                    };
                    let lum = c[0].max(c[1]).max(c[2]);
                    let ch = (lum * levels / 4096).clamp(0, levels - 1);
                    (fg, Color::Black.index(), ch as usize)
                };

                if diffusion {
                    let fgc = RGB_PALETTE[fg as usize];
                    let bgc = RGB_PALETTE[bg as usize];
                    let i = ch as i64;
                    for k in 0..3 {
                        let mix = i64::from(fgc[k]) * i + i64::from(bgc[k]) * (span - i);
                        let shown = mix / span;
                        let err = c[k] - shown;
                        carry[k] = below[slot + 1][k] + 7 * err / 16;
                        below[slot - 1][k] += 3 * err / 16;
                        below[slot][k] += 5 * err / 16;
                        below[slot + 1][k] = err / 16;
                    }
                }

                if self.gamma < 0.0 {
                    fg = 15 - fg;
                    bg = 15 - bg;
                }
                canvas.set_color_ansi(Color::ANSI[fg as usize], Color::ANSI[bg as usize]);
                canvas.put_char(cx as i32, cy as i32, glyphs[ch]);
            }
        }

        canvas.set_attr(saved);
        trace!(
            "dithered {}x{} bitmap into {}x{} cells at ({x}, {y}) using {}/{}/{}",
            self.width, self.height, w, h, self.color, self.charset, self.algorithm
        );
        Ok(())
    }

    /// Raw little-endian pixel word at (x, y).
    fn word(&self, pixels: &[u8], x: usize, y: usize) -> u32 {
        let bpp = self.bytes_per_pixel();
        let at = y * self.pitch + x * bpp;
        pixels[at..at + bpp]
            .iter()
            .rev()
            .fold(0, |acc, &b| (acc << 8) | u32::from(b))
    }

    /// Gamma-corrected 12-bit RGBA of one pixel.
    fn pixel(&self, pixels: &[u8], x: usize, y: usize) -> [i64; 4] {
        let word = self.word(pixels, x, y);
        let [r, g, b, a] = if self.bpp == 8 {
            let i = (word & 0xff) as usize;
            let p = &self.palette;
            [p.red[i], p.green[i], p.blue[i], p.alpha[i]].map(u32::from)
        } else {
            let [rm, gm, bm, am] = self.masks;
            let alpha = if am.mask == 0 { 0xfff } else { am.extract(word) };
            [rm.extract(word), gm.extract(word), bm.extract(word), alpha]
        };
        let gamma = |v: u32| i64::from(self.gamma_table[(v as usize).min(GAMMA_LEN - 1)]);
        [gamma(r), gamma(g), gamma(b), i64::from(a)]
    }

    /// Mean RGBA over the half-open pixel box, clipped to the bitmap.
    fn average(&self, pixels: &[u8], x0: i64, y0: i64, x1: i64, y1: i64) -> [i64; 4] {
        let (w, h) = (self.width as i64, self.height as i64);
        let mut sum = [0i64; 4];
        let mut dots = 0;
        for py in y0.max(0)..y1.min(h) {
            for px in x0.max(0)..x1.min(w) {
                let p = self.pixel(pixels, px as usize, py as usize);
                for (s, v) in sum.iter_mut().zip(p) {
                    *s += v;
                }
                dots += 1;
            }
        }
        if dots > 0 {
            sum.map(|s| s / dots)
        } else {
            sum
        }
    }

    /// Contrast about mid-gray, then brightness offset, clamped to 12 bits.
    fn adjust(&self, v: i64) -> i64 {
        let v = (v as f32 - 2048.0) * self.contrast + 2048.0 + self.brightness * 4096.0;
        (v as i64).clamp(0, 0xfff)
    }
}

/// Build the 12-bit lookup table for exponent `1 / gamma`.
fn gamma_table(gamma: f32) -> Vec<u16> {
    let exp = 1.0 / f64::from(gamma);
    (0..GAMMA_LEN)
        .map(|i| {
            let v = 4096.0 * (i as f64 / 4096.0).powf(exp);
            v.clamp(0.0, 4095.0) as u16
        })
        .collect()
}

/// Palette index in `allowed` closest to `c`, optionally excluding one.
fn nearest(c: &[i64; 3], allowed: &[u8], exclude: Option<u8>) -> u8 {
    let mut best = allowed.first().copied().unwrap_or(0);
    let mut best_dist = i64::MAX;
    for &i in allowed {
        if Some(i) == exclude {
            continue;
        }
        let p = RGB_PALETTE[i as usize];
        let dist: i64 = c
            .iter()
            .zip(p)
            .map(|(&v, p)| (v - i64::from(p)).pow(2))
            .sum::<i64>()
            * RGB_WEIGHT[i as usize];
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Glyph index whose fg/bg mix best matches `c`.
fn coverage_index(c: &[i64; 3], fg: u8, bg: u8, levels: i64) -> usize {
    let span = 2 * levels - 1;
    let (fgc, bgc) = (RGB_PALETTE[fg as usize], RGB_PALETTE[bg as usize]);
    let mut best = 0;
    let mut best_dist = i64::MAX;
    for i in 0..levels {
        let dist: i64 = (0..3)
            .map(|k| {
                (c[k] * span - (i * i64::from(fgc[k]) + (span - i) * i64::from(bgc[k]))).abs()
            })
            .sum();
        if dist < best_dist {
            best_dist = dist;
            best = i as usize;
        }
    }
    best
}
