//! Wireless channel toy model: a transmitter on the left, a receiver on the
//! right, propagating wave packets in between, noise specks, and a
//! constellation diagram of received symbols.

use std::f64::consts::{FRAC_1_SQRT_2, PI, TAU};
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::geometry::{Bounds, Point};

/// x of the transmitter and of the wave restart column.
pub const TX_X: f64 = 50.0;
/// Margin between the receiver and the right edge where waves wrap.
pub const RX_MARGIN: f64 = 60.0;
/// Noise specks per channel.
pub const NOISE_SPECKS: usize = 20;
/// Carrier frequency label in GHz.
pub const CARRIER_GHZ: f64 = 2.4;
/// Channel time added per step.
pub const TIME_STEP: f64 = 0.1;
/// Vertical spacing between MIMO antennas.
pub const ANTENNA_SPACING: f64 = 80.0;
/// Received symbols drawn per constellation frame.
pub const SYMBOLS_PER_FRAME: usize = 50;

const WAVE_LENGTH: f64 = 100.0;

/// Digital modulation scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Modulation {
    Bpsk,
    #[default]
    Qpsk,
    Qam16,
    Qam64,
}

/// Ideal constellation point with its bit label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConstellationPoint {
    /// In-phase
    pub i: f64,
    /// Quadrature
    pub q: f64,
    pub symbol: String,
}

impl Modulation {
    pub const ALL: [Modulation; 4] = [Self::Bpsk, Self::Qpsk, Self::Qam16, Self::Qam64];

    pub fn label(self) -> &'static str {
        match self {
            Self::Bpsk => "BPSK",
            Self::Qpsk => "QPSK",
            Self::Qam16 => "16QAM",
            Self::Qam64 => "64QAM",
        }
    }

    pub fn bits_per_symbol(self) -> u32 {
        match self {
            Self::Bpsk => 1,
            Self::Qpsk => 2,
            Self::Qam16 => 4,
            Self::Qam64 => 6,
        }
    }

    /// Ideal points, normalised so the outermost coordinate is 1.
    pub fn constellation(self) -> Vec<ConstellationPoint> {
        match self {
            Self::Bpsk => vec![
                ConstellationPoint { i: -1.0, q: 0.0, symbol: "0".into() },
                ConstellationPoint { i: 1.0, q: 0.0, symbol: "1".into() },
            ],
            Self::Qpsk => [(-1.0, -1.0, "00"), (1.0, -1.0, "01"), (-1.0, 1.0, "10"), (1.0, 1.0, "11")]
                .into_iter()
                .map(|(i, q, symbol)| ConstellationPoint {
                    i: i * FRAC_1_SQRT_2,
                    q: q * FRAC_1_SQRT_2,
                    symbol: symbol.into(),
                })
                .collect(),
            Self::Qam16 => square_grid(4),
            Self::Qam64 => square_grid(8),
        }
    }
}

/// `side x side` grid over `[-1, 1]^2`, labelled `bits(i) ++ bits(j)`.
fn square_grid(side: usize) -> Vec<ConstellationPoint> {
    let half = (side as f64 - 1.0) / 2.0;
    let width = side.trailing_zeros() as usize;
    let mut points = Vec::with_capacity(side * side);
    for i in 0..side {
        for j in 0..side {
            points.push(ConstellationPoint {
                i: (i as f64 - half) / half,
                q: (j as f64 - half) / half,
                symbol: format!("{i:0width$b}{j:0width$b}"),
            });
        }
    }
    points
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Modulation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "bpsk" => Ok(Self::Bpsk),
            "qpsk" => Ok(Self::Qpsk),
            "16qam" | "qam16" => Ok(Self::Qam16),
            "64qam" | "qam64" => Ok(Self::Qam64),
            _ => Err(Error::UnknownModulation(s.to_string())),
        }
    }
}

/// Propagation scenario.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    #[default]
    LineOfSight,
    Multipath,
    Fading,
    Mimo {
        /// Antennas per side, `1..=4`
        antennas: u8,
    },
}

impl Scenario {
    /// MIMO with a clamped antenna count.
    pub fn mimo(antennas: u8) -> Self {
        Self::Mimo {
            antennas: antennas.clamp(1, 4),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LineOfSight => "line-of-sight",
            Self::Multipath => "multipath",
            Self::Fading => "fading",
            Self::Mimo { .. } => "mimo",
        }
    }

    /// Vertical offsets from the centre line of each antenna. Single-antenna
    /// scenarios return one zero offset.
    pub fn antenna_offsets(self) -> Vec<f64> {
        let n = match self {
            Self::Mimo { antennas } => antennas.clamp(1, 4) as usize,
            _ => 1,
        };
        (0..n)
            .map(|ant| (ant as f64 - n as f64 / 2.0 + 0.5) * ANTENNA_SPACING)
            .collect()
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mimo { antennas } => write!(f, "mimo {antennas}x{antennas}"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for Scenario {
    type Err = Error;

    /// Accepts `mimo` (2 antennas) or `mimo:N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "line-of-sight" | "los" => return Ok(Self::LineOfSight),
            "multipath" => return Ok(Self::Multipath),
            "fading" => return Ok(Self::Fading),
            "mimo" => return Ok(Self::mimo(2)),
            _ => {}
        }
        name.strip_prefix("mimo:")
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=4).contains(n))
            .map(Self::mimo)
            .ok_or_else(|| Error::UnknownScenario(s.to_string()))
    }
}

/// Linear noise amplitude for an SNR in dB.
pub fn noise_level(snr_db: f64) -> f64 {
    10f64.powf(-snr_db / 20.0)
}

/// Doppler frequency offset at channel time `time`.
pub fn doppler_shift(doppler_hz: f64, time: f64) -> f64 {
    doppler_hz * (time * 0.1).cos()
}

/// A propagating wave packet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Wave {
    pub x: f64,
    pub y: f64,
    pub amplitude: f64,
    pub phase: f64,
    pub frequency: f64,
    pub power: f64,
}

/// A noise speck drifting across the channel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Speck {
    pub x: f64,
    pub y: f64,
    /// Signed amplitude, `|a| <= noise_level / 2`
    pub amplitude: f64,
}

/// Animated channel state.
#[derive(Clone, Debug)]
pub struct Channel {
    scenario: Scenario,
    snr_db: f64,
    bounds: Bounds,
    waves: Vec<Wave>,
    noise: Vec<Speck>,
    time: f64,
}

impl Channel {
    /// Lay out the wave packets for `scenario` and scatter the noise specks.
    pub fn new<R: Rng + ?Sized>(scenario: Scenario, snr_db: f64, bounds: Bounds, rng: &mut R) -> Self {
        let mut channel = Self {
            scenario,
            snr_db,
            bounds,
            waves: Vec::new(),
            noise: Vec::new(),
            time: 0.0,
        };
        channel.rebuild(rng);
        channel
    }

    /// Rebuild for a new canvas size.
    pub fn resize<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        self.bounds = bounds;
        self.rebuild(rng);
    }

    fn rebuild<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let center = self.bounds.height / 2.0;
        self.waves = match self.scenario {
            Scenario::LineOfSight => (0..5)
                .map(|i| {
                    let i = i as f64;
                    wave(TX_X + i * 10.0, center + (i * 0.5).sin() * 20.0, 1.0, i * 0.2)
                })
                .collect(),
            Scenario::Multipath => {
                // (delay, power, angle in degrees)
                const PATHS: [(f64, f64, f64); 4] =
                    [(0.0, 1.0, 0.0), (0.1, 0.6, 15.0), (0.3, 0.3, -20.0), (0.5, 0.2, 30.0)];
                PATHS
                    .iter()
                    .enumerate()
                    .flat_map(|(path, &(delay, power, angle))| {
                        (0..8).map(move |i| {
                            let i = i as f64;
                            let y = center
                                + angle.to_radians().sin() * 100.0
                                + (i * 0.3 + path as f64).sin() * 30.0;
                            wave(TX_X + i * 15.0 + delay * 100.0, y, power, i * 0.3 + delay * 2.0)
                        })
                    })
                    .collect()
            }
            Scenario::Fading => (0..10)
                .map(|i| {
                    let fade = (-2.0 * rng.gen_range(0.0..1.0f64)).exp();
                    let y = center + (rng.gen_range(0.0..1.0f64) - 0.5) * 200.0;
                    wave(TX_X + i as f64 * 12.0, y, fade, rng.gen_range(0.0..TAU))
                })
                .collect(),
            Scenario::Mimo { .. } => {
                let offsets = self.scenario.antenna_offsets();
                let n = offsets.len() as f64;
                offsets
                    .iter()
                    .enumerate()
                    .flat_map(|(ant, offset)| {
                        (0..6).map(move |i| {
                            let i = i as f64;
                            let ant = ant as f64;
                            let mut w = wave(
                                TX_X + i * 20.0,
                                center + offset + (i * 0.4 + ant).sin() * 15.0,
                                1.0 / n.sqrt(),
                                i * 0.4 + ant * PI / 4.0,
                            );
                            w.power = 1.0 / n;
                            w
                        })
                    })
                    .collect()
            }
        };

        let level = noise_level(self.snr_db);
        let (w, h) = (self.bounds.width, self.bounds.height);
        self.noise = (0..NOISE_SPECKS)
            .map(|_| Speck {
                x: rng.gen_range(0.0..=w),
                y: rng.gen_range(0.0..=h),
                amplitude: level * (rng.gen_range(0.0..1.0) - 0.5),
            })
            .collect();
        debug!(scenario = %self.scenario, waves = self.waves.len(), "channel rebuilt");
    }

    /// Advance one animation frame.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.time += TIME_STEP;
        let wrap_at = self.bounds.width - RX_MARGIN;
        for wave in &mut self.waves {
            wave.x += 2.0;
            if wave.x > wrap_at {
                wave.x = TX_X;
            }
        }
        let (w, h) = (self.bounds.width, self.bounds.height);
        for speck in &mut self.noise {
            speck.x += 0.5;
            if speck.x > w {
                speck.x = 0.0;
            }
            speck.y += rng.gen_range(-1.0..1.0);
            if !(0.0..=h).contains(&speck.y) {
                speck.y = rng.gen_range(0.0..=h);
            }
        }
    }

    /// Polyline of a wave packet, stopping short of the receiver. A nonzero
    /// `doppler_hz` bends the phase by the current Doppler shift and shrinks
    /// the swing to 70 % for the overlay trace.
    pub fn trace(&self, wave: &Wave, doppler_hz: f64) -> Vec<Point> {
        let (frequency, swing) = if doppler_hz > 0.0 {
            (wave.frequency + doppler_shift(doppler_hz, self.time), 0.7)
        } else {
            (wave.frequency, 1.0)
        };
        let limit = (wave.x + WAVE_LENGTH).min(self.bounds.width - RX_MARGIN);
        let height = wave.amplitude * 20.0 * swing;
        let mut points = Vec::new();
        let mut x = wave.x;
        while x < limit {
            let phase = wave.phase + (x - wave.x) * 0.1 + self.time * frequency;
            points.push(Point::new(x, wave.y + height * phase.sin()));
            x += 2.0;
        }
        points
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn snr_db(&self) -> f64 {
        self.snr_db
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn noise(&self) -> &[Speck] {
        &self.noise
    }

    pub fn time(&self) -> f64 {
        self.time
    }
}

fn wave(x: f64, y: f64, amplitude: f64, phase: f64) -> Wave {
    Wave {
        x,
        y,
        amplitude,
        phase,
        frequency: CARRIER_GHZ,
        power: amplitude * amplitude,
    }
}

/// A symbol as seen by the receiver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReceivedSymbol {
    /// Index into [`Modulation::constellation`] of the transmitted point
    pub sent: usize,
    pub i: f64,
    pub q: f64,
}

/// Draw `count` random symbols through the channel: uniform noise of
/// `+-noise_level` per axis, then `exp(-u)` fading in the fading scenario.
pub fn received_symbols<R: Rng + ?Sized>(
    modulation: Modulation,
    scenario: Scenario,
    snr_db: f64,
    count: usize,
    rng: &mut R,
) -> Vec<ReceivedSymbol> {
    let points = modulation.constellation();
    let level = noise_level(snr_db);
    (0..count)
        .map(|_| {
            let sent = rng.gen_range(0..points.len());
            let ideal = &points[sent];
            let mut i = ideal.i + level * rng.gen_range(-1.0..1.0);
            let mut q = ideal.q + level * rng.gen_range(-1.0..1.0);
            if scenario == Scenario::Fading {
                let fade = (-rng.gen_range(0.0..1.0f64)).exp();
                i *= fade;
                q *= fade;
            }
            ReceivedSymbol { sent, i, q }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn constellation_sizes_match_bits() {
        for m in Modulation::ALL {
            let points = m.constellation();
            assert_eq!(points.len(), 1 << m.bits_per_symbol());
            assert!(points.iter().all(|p| p.symbol.len() == m.bits_per_symbol() as usize));
            assert!(points.iter().all(|p| p.i.abs() <= 1.0 && p.q.abs() <= 1.0));
        }
        let qam16 = Modulation::Qam16.constellation();
        assert_eq!(qam16[0].symbol, "0000");
        assert_eq!(qam16[15].symbol, "1111");
        assert_eq!((qam16[0].i, qam16[0].q), (-1.0, -1.0));
    }

    #[test]
    fn noise_level_is_amplitude_ratio() {
        assert!((noise_level(20.0) - 0.1).abs() < 1e-12);
        assert_eq!(noise_level(0.0), 1.0);
        assert!(noise_level(40.0) < noise_level(10.0));
    }

    #[test]
    fn doppler_oscillates() {
        assert_eq!(doppler_shift(100.0, 0.0), 100.0);
        assert!(doppler_shift(100.0, 5.0 * PI).abs() < 1e-9);
        assert_eq!(doppler_shift(0.0, 3.0), 0.0);
    }

    #[test]
    fn scenarios_lay_out_waves() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Bounds::new(800.0, 400.0);
        let mut count = |s| Channel::new(s, 20.0, bounds, &mut rng).waves().len();
        assert_eq!(count(Scenario::LineOfSight), 5);
        assert_eq!(count(Scenario::Multipath), 32);
        assert_eq!(count(Scenario::Fading), 10);
        assert_eq!(count(Scenario::mimo(3)), 18);
    }

    #[test]
    fn mimo_normalises_power() {
        let mut rng = StdRng::seed_from_u64(5);
        let channel = Channel::new(Scenario::mimo(4), 20.0, Bounds::new(600.0, 400.0), &mut rng);
        let total: f64 = channel.waves().iter().map(|w| w.power).sum();
        assert!((total - 6.0).abs() < 1e-9);
        assert_eq!(Scenario::mimo(9), Scenario::Mimo { antennas: 4 });
        assert_eq!(Scenario::mimo(2).antenna_offsets(), vec![-40.0, 40.0]);
    }

    #[test]
    fn waves_wrap_before_receiver() {
        let mut rng = StdRng::seed_from_u64(8);
        let bounds = Bounds::new(300.0, 200.0);
        let mut channel = Channel::new(Scenario::LineOfSight, 10.0, bounds, &mut rng);
        for _ in 0..500 {
            channel.step(&mut rng);
            for w in channel.waves() {
                assert!(w.x >= TX_X && w.x <= bounds.width - RX_MARGIN);
            }
            for wave in channel.waves() {
                assert!(channel.trace(wave, 50.0).iter().all(|p| p.x < bounds.width - RX_MARGIN));
            }
        }
        assert!((channel.time() - 50.0).abs() < 1e-6);
    }

    #[test]
    fn resumed_steps_continue_the_same_channel() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut channel = Channel::new(Scenario::Multipath, 15.0, Bounds::new(800.0, 400.0), &mut rng);
        for _ in 0..10 {
            channel.step(&mut rng);
        }
        let before: Vec<(f64, f64)> = channel.waves().iter().map(|w| (w.x, w.y)).collect();
        let time = channel.time();

        // a pause is just frames that never run
        channel.step(&mut rng);
        assert!((channel.time() - time - TIME_STEP).abs() < 1e-9);
        for (wave, (x, y)) in channel.waves().iter().zip(before) {
            assert_eq!(wave.y, y);
            assert!(wave.x == x + 2.0 || wave.x == TX_X);
        }
    }

    #[test]
    fn fading_shrinks_symbols() {
        let mut rng = StdRng::seed_from_u64(13);
        let symbols = received_symbols(Modulation::Bpsk, Scenario::Fading, 80.0, 200, &mut rng);
        assert!(symbols.iter().all(|s| s.i.abs() <= 1.0 + 1e-3));
        assert!(symbols.iter().any(|s| s.i.abs() < 0.9));
    }

    #[test]
    fn parses_names() {
        assert_eq!("16QAM".parse::<Modulation>().unwrap(), Modulation::Qam16);
        assert_eq!("qam-64".parse::<Modulation>().unwrap(), Modulation::Qam64);
        assert_eq!("mimo:3".parse::<Scenario>().unwrap(), Scenario::Mimo { antennas: 3 });
        assert_eq!("LOS".parse::<Scenario>().unwrap(), Scenario::LineOfSight);
        assert!("mimo:7".parse::<Scenario>().is_err());
        assert!("8psk".parse::<Modulation>().is_err());
    }

    proptest! {
        #[test]
        fn noise_stays_inside(seed in any::<u64>(), w in 1.0f64..1500.0, h in 1.0f64..900.0, steps in 0usize..300) {
            let mut rng = StdRng::seed_from_u64(seed);
            let bounds = Bounds::new(w, h);
            let mut channel = Channel::new(Scenario::Multipath, 5.0, bounds, &mut rng);
            for _ in 0..steps {
                channel.step(&mut rng);
            }
            for s in channel.noise() {
                prop_assert!(bounds.contains(Point::new(s.x, s.y)));
            }
        }

        #[test]
        fn received_noise_is_bounded(snr in -10.0f64..60.0, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let level = noise_level(snr);
            let points = Modulation::Qpsk.constellation();
            for s in received_symbols(Modulation::Qpsk, Scenario::LineOfSight, snr, 50, &mut rng) {
                let ideal = &points[s.sent];
                prop_assert!((s.i - ideal.i).abs() <= level + 1e-12);
                prop_assert!((s.q - ideal.q).abs() <= level + 1e-12);
            }
        }
    }
}
