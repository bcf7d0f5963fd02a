use crate::api::DitherError;
use crate::dither::{self, DitherMode};
use crate::output::IndexedImage;
use crate::palette::Palette256;
use crate::rescale;

/// Default seed for the noise generator.
const DEFAULT_NOISE_SEED: u64 = 1962;

/// Configurable quantizer, reusable across images.
///
/// Configuration is immutable once built; each call to [`dither`] or
/// [`dither_with`] runs with fresh working state, so results never depend
/// on earlier runs.
///
/// # Example
///
/// ```
/// use vga_dither::{DitherMode, Ditherer, Palette256, RGB8};
///
/// let greys: Vec<RGB8> = (0u8..=255).map(|v| RGB8::new(v, v, v)).collect();
/// let ditherer = Ditherer::new(Palette256::new(&greys)?)
///     .mode(DitherMode::ErrorDiffusion);
///
/// let source = vec![128u8; 16 * 16 * 3];
/// let image = ditherer.dither(&source, 16, 16)?;
/// assert_eq!(image.indices().len(), 16 * 16);
/// # Ok::<(), vga_dither::DitherError>(())
/// ```
///
/// [`dither`]: Ditherer::dither
/// [`dither_with`]: Ditherer::dither_with
#[derive(Debug, Clone)]
pub struct Ditherer {
    palette: Palette256,
    mode: DitherMode,
    noise: u8,
    noise_seed: u64,
    max_size: Option<(u32, u32)>,
}

impl Ditherer {
    pub fn new(palette: Palette256) -> Self {
        Self {
            palette,
            mode: DitherMode::Direct,
            noise: 0,
            noise_seed: DEFAULT_NOISE_SEED,
            max_size: None,
        }
    }

    /// Select the dithering mode. Defaults to [`DitherMode::Direct`].
    pub fn mode(mut self, mode: DitherMode) -> Self {
        self.mode = mode;
        self
    }

    /// Add random perturbation of the given amplitude on top of any mode.
    ///
    /// [`DitherMode::Noise`] carries its own amplitude and ignores this
    /// setting.
    pub fn noise(mut self, amplitude: u8) -> Self {
        self.noise = amplitude;
        self
    }

    /// Seed for the noise generator. Runs with equal configuration and
    /// seed produce identical output.
    pub fn noise_seed(mut self, seed: u64) -> Self {
        self.noise_seed = seed;
        self
    }

    /// Shrink images larger than `width x height` before quantizing.
    ///
    /// Scaling only triggers when both dimensions exceed their bound; see
    /// [`rescale::fit_within`](crate::rescale::fit_within).
    pub fn max_size(mut self, width: u32, height: u32) -> Self {
        self.max_size = Some((width, height));
        self
    }

    /// Quantize a packed RGB buffer to an indexed image.
    pub fn dither(
        &self,
        source: &[u8],
        width: u32,
        height: u32,
    ) -> Result<IndexedImage, DitherError> {
        self.dither_with(source, width, height, |_, _| {}, || false)
    }

    /// Like [`dither`](Ditherer::dither), with a progress callback and a
    /// cancellation check.
    ///
    /// `progress` receives `(rows_done, rows_total)` every few rows and
    /// once on completion. It covers the quantization pass only: the
    /// [`max_size`](Ditherer::max_size) pre-pass emits no progress, and
    /// `rows_total` is the post-rescale height. `cancel` is polled between
    /// rows and rescale steps; returning true aborts the run with
    /// [`DitherError::Cancelled`] and no partial output.
    pub fn dither_with(
        &self,
        source: &[u8],
        width: u32,
        height: u32,
        mut progress: impl FnMut(u32, u32),
        cancel: impl Fn() -> bool,
    ) -> Result<IndexedImage, DitherError> {
        let mut source = source;
        let (mut width, mut height) = (width, height);
        let resampled: Vec<u8>;
        if let Some((max_w, max_h)) = self.max_size {
            let (w, h) = rescale::fit_within(width, height, max_w, max_h, &cancel)?;
            if (w, h) != (width, height) {
                resampled = rescale::resample(source, width, height, w, h)?;
                source = &resampled;
                (width, height) = (w, h);
            }
        }

        let indices = dither::run(
            &self.palette,
            self.mode,
            self.noise,
            self.noise_seed,
            source,
            width,
            height,
            &mut progress,
            &cancel,
        )?;
        Ok(IndexedImage::new(indices, width, height, self.palette.clone()))
    }
}
