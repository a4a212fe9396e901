//! Symmetric exponential-decay window shared by the smoothing renderers.

/// Neighbours whose weight would fall below this are outside the window.
const CUTOFF: f64 = 0.02;

/// Tap weights `resonance^i` for `i` in `0..len`, where `len` is the smallest count such that
/// `resonance^len` drops under 2%, capped at the canvas width.
#[derive(Clone, Debug, PartialEq)]
pub struct DecayWindow {
    taps: Vec<f64>,
}

impl DecayWindow {
    /// Window for `resonance` (expected in `(0, 1)`) over a `width`-column canvas.
    pub fn new(resonance: f64, width: usize) -> Self {
        let mut taps = Vec::new();
        let mut n = 1.0;
        while taps.len() < width && n > CUTOFF {
            taps.push(n);
            n *= resonance;
        }
        Self { taps }
    }

    /// Window length, in columns.
    pub(crate) fn len(&self) -> usize {
        self.taps.len()
    }

    /// Weight of the neighbour `i` columns away.
    pub fn tap(&self, i: usize) -> f64 {
        self.taps.get(i).copied().unwrap_or(0.0)
    }

    /// How many neighbours on each side of column `x` the window may reach on a `width`-column
    /// canvas: offsets `1..left` and `1..right`.
    pub fn reach(&self, x: usize, width: usize) -> (usize, usize) {
        let len = self.len();
        (len.min(x), len.min(width.saturating_sub(x + 1)))
    }

    /// Add a unit impulse at column `x` of `frame`, smeared over the window.
    pub fn spread(&self, frame: &mut [f64], x: usize) {
        if x >= frame.len() {
            return;
        }
        frame[x] += 1.0;
        let (left, right) = self.reach(x, frame.len());
        for i in 1..left {
            frame[x - i] += self.taps[i];
        }
        for i in 1..right {
            frame[x + i] += self.taps[i];
        }
    }

    /// Total weight a single impulse deposits away from the edges.
    pub fn mass(&self) -> f64 {
        1.0 + 2.0 * self.taps.iter().skip(1).sum::<f64>()
    }
}
