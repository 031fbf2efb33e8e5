//! Waveforms for the signal-processing demo.
//!
//! Four seconds at 100 Hz are regenerated every animation frame with a
//! moving time offset. The "spectrum" is a cosine-correlation sketch that
//! looks like an FFT on screen; it is not a numerically faithful transform.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Samples per second.
pub const SAMPLE_RATE: usize = 100;
/// Window length in seconds.
pub const DURATION_S: usize = 4;
/// Samples per frame.
pub const SAMPLES: usize = SAMPLE_RATE * DURATION_S;
/// Spectrum bins.
pub const BINS: usize = 50;
/// Time offset added per animation frame.
pub const TIME_STEP: f64 = 0.05;

/// Demo waveform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// Plain sine at the base frequency
    #[default]
    Sine,
    /// Amplitude modulation
    Am,
    /// Frequency modulation
    Fm,
    /// Noisy sine through a moving-average low-pass
    Filter,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [Self::Sine, Self::Am, Self::Fm, Self::Filter];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Am => "am",
            Self::Fm => "fm",
            Self::Filter => "filter",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sine => "Sine Wave",
            Self::Am => "AM Modulation",
            Self::Fm => "FM Modulation",
            Self::Filter => "Low-Pass Filter",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sine-wave" => Ok(Self::Sine),
            "am" | "am-modulation" => Ok(Self::Am),
            "fm" | "fm-modulation" => Ok(Self::Fm),
            "filter" | "low-pass" => Ok(Self::Filter),
            _ => Err(Error::UnknownSignal(s.to_string())),
        }
    }
}

/// Slider values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalParams {
    pub kind: SignalKind,
    /// Base frequency in Hz, `1..=20`
    pub frequency: f64,
    /// Peak amplitude, `0.1..=2.0`
    pub amplitude: f64,
    /// Filter cutoff in Hz, `5..=50`
    pub cutoff: f64,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            kind: SignalKind::Sine,
            frequency: 5.0,
            amplitude: 1.0,
            cutoff: 10.0,
        }
    }
}

impl SignalParams {
    /// Pull every slider back into its range. Non-finite values reset to the
    /// default.
    pub fn clamped(self) -> Self {
        let fallback = Self::default();
        let fix = |v: f64, lo: f64, hi: f64, d: f64| if v.is_finite() { v.clamp(lo, hi) } else { d };
        Self {
            kind: self.kind,
            frequency: fix(self.frequency, 1.0, 20.0, fallback.frequency),
            amplitude: fix(self.amplitude, 0.1, 2.0, fallback.amplitude),
            cutoff: fix(self.cutoff, 5.0, 50.0, fallback.cutoff),
        }
    }

    /// Moving-average window for the filter demo.
    pub fn filter_window(&self) -> usize {
        ((SAMPLE_RATE as f64 / self.cutoff).floor() as usize).max(1)
    }
}

/// One rendered frame of the demo.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignalFrame {
    /// Sample times in seconds, relative to the window
    pub time: Vec<f64>,
    pub amplitude: Vec<f64>,
    /// Magnitude per bin; bin `k` is labelled `k` Hz
    pub spectrum: Vec<f64>,
}

impl SignalFrame {
    /// Bin with the largest magnitude.
    pub fn peak_bin(&self) -> Option<usize> {
        self.spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(bin, _)| bin)
    }

    /// Largest absolute sample.
    pub fn peak_amplitude(&self) -> f64 {
        self.amplitude.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }

    /// Root mean square of the samples.
    pub fn rms(&self) -> f64 {
        if self.amplitude.is_empty() {
            return 0.0;
        }
        let energy: f64 = self.amplitude.iter().map(|v| v * v).sum();
        (energy / self.amplitude.len() as f64).sqrt()
    }
}

/// Generate the frame for `params` at time offset `t` seconds.
pub fn generate(params: &SignalParams, t: f64) -> SignalFrame {
    let p = params.clamped();
    let time: Vec<f64> = (0..SAMPLES).map(|i| i as f64 / SAMPLE_RATE as f64).collect();
    let f = p.frequency;
    let a = p.amplitude;

    let amplitude: Vec<f64> = match p.kind {
        SignalKind::Sine => time.iter().map(|s| a * (TAU * f * (s + t)).sin()).collect(),
        SignalKind::Am => time
            .iter()
            .map(|s| {
                let carrier = (TAU * 4.0 * f * (s + t)).sin();
                let envelope = 0.5 * (1.0 + (TAU * 0.5 * f * (s + t)).sin());
                a * carrier * envelope
            })
            .collect(),
        SignalKind::Fm => time
            .iter()
            .map(|s| {
                let deviation = 2.0 * (TAU * 0.3 * f * (s + t)).sin();
                a * (TAU * 4.0 * f * (s + t) + deviation).sin()
            })
            .collect(),
        SignalKind::Filter => {
            let noisy: Vec<f64> = time
                .iter()
                .map(|s| {
                    let clean = (TAU * f * (s + t)).sin();
                    let hiss = 0.3 * (TAU * 8.0 * f * (s + t)).sin();
                    a * (clean + hiss)
                })
                .collect();
            moving_average(&noisy, p.filter_window())
        }
    };

    let spectrum = spectrum(&amplitude);
    SignalFrame {
        time,
        amplitude,
        spectrum,
    }
}

/// Trailing moving average: sample `i` is the mean of the last `window`
/// samples up to and including `i`.
pub fn moving_average(samples: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut out = Vec::with_capacity(samples.len());
    let mut sum = 0.0;
    for (i, v) in samples.iter().enumerate() {
        sum += v;
        if i >= window {
            sum -= samples[i - window];
        }
        out.push(sum / (i + 1).min(window) as f64);
    }
    out
}

/// Every fourth of the first 200 samples, correlated against a cosine per
/// bin.
fn spectrum(samples: &[f64]) -> Vec<f64> {
    (0..BINS)
        .map(|bin| {
            let sum: f64 = samples
                .iter()
                .take(200)
                .enumerate()
                .step_by(4)
                .map(|(i, x)| (x * (TAU * bin as f64 * i as f64 / SAMPLE_RATE as f64).cos()).abs())
                .sum();
            sum / BINS as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(kind: SignalKind) -> SignalParams {
        SignalParams {
            kind,
            ..SignalParams::default()
        }
    }

    #[test]
    fn frame_shape() {
        for kind in SignalKind::ALL {
            let frame = generate(&params(kind), 0.0);
            assert_eq!(frame.time.len(), SAMPLES);
            assert_eq!(frame.amplitude.len(), SAMPLES);
            assert_eq!(frame.spectrum.len(), BINS);
            assert!(frame.amplitude.iter().all(|v| v.is_finite()));
            assert!(frame.spectrum.iter().all(|v| *v >= 0.0));
        }
        assert_eq!(generate(&params(SignalKind::Sine), 0.0).time[100], 1.0);
    }

    #[test]
    fn amplitude_bounds_hold() {
        let mut p = params(SignalKind::Am);
        p.amplitude = 1.5;
        for t in [0.0, 0.35, 2.0] {
            assert!(generate(&p, t).peak_amplitude() <= 1.5 + 1e-9);
        }
        p.kind = SignalKind::Filter;
        assert!(generate(&p, 0.0).peak_amplitude() <= 1.5 * 1.3 + 1e-9);
    }

    #[test]
    fn sine_at_zero_starts_at_zero() {
        let frame = generate(&params(SignalKind::Sine), 0.0);
        assert!(frame.amplitude[0].abs() < 1e-12);
        assert!((frame.rms() - 1.0 / 2f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn moving_average_is_trailing() {
        let out = moving_average(&[2.0, 4.0, 6.0, 8.0], 2);
        assert_eq!(out, vec![2.0, 3.0, 5.0, 7.0]);
        assert_eq!(moving_average(&[1.0, 3.0], 0), vec![1.0, 3.0]);
    }

    #[test]
    fn filter_window_follows_cutoff() {
        let mut p = params(SignalKind::Filter);
        assert_eq!(p.filter_window(), 10);
        p.cutoff = 30.0;
        assert_eq!(p.filter_window(), 3);
        p.cutoff = 1000.0;
        assert_eq!(p.clamped().filter_window(), 2);
    }

    #[test]
    fn clamps_out_of_range_sliders() {
        let p = SignalParams {
            kind: SignalKind::Fm,
            frequency: 90.0,
            amplitude: f64::NAN,
            cutoff: 1.0,
        }
        .clamped();
        assert_eq!((p.frequency, p.amplitude, p.cutoff), (20.0, 1.0, 5.0));
    }

    #[test]
    fn parses_kinds() {
        assert_eq!("AM".parse::<SignalKind>().unwrap(), SignalKind::Am);
        assert_eq!("sine-wave".parse::<SignalKind>().unwrap(), SignalKind::Sine);
        assert!("square".parse::<SignalKind>().is_err());
    }
}
