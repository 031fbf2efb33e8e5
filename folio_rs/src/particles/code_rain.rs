use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::geometry::Bounds;

/// Population used by the site background.
pub const DEFAULT_GLYPHS: usize = 200;
/// Hard cap regardless of configuration.
pub const MAX_GLYPHS: usize = 400;

const MUTATE_WHILE_FALLING: f64 = 0.002;
const MUTATE_ON_RESPAWN: f64 = 0.3;
const DRIFT: f64 = 0.25;

/// Category of a falling glyph. Decides its colour and vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphKind {
    /// Declarations and primitive types
    Variable,
    /// Function and control-transfer words
    Function,
    /// Control-flow keywords
    Keyword,
    /// Operators
    Operator,
    /// Literal-looking tokens
    Literal,
}

impl GlyphKind {
    /// Every kind, in draw-legend order.
    pub const ALL: [GlyphKind; 5] = [
        GlyphKind::Variable,
        GlyphKind::Function,
        GlyphKind::Keyword,
        GlyphKind::Operator,
        GlyphKind::Literal,
    ];

    /// Fill colour for this kind.
    pub fn color(self) -> &'static str {
        match self {
            Self::Variable => "#10B981",
            Self::Function => "#3B82F6",
            Self::Keyword => "#F59E0B",
            Self::Operator => "#EF4444",
            Self::Literal => "#8B5CF6",
        }
    }

    /// Tokens a glyph of this kind can show.
    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            Self::Variable => &[
                "let", "const", "var", "int", "string", "bool", "array", "list", "dict", "map",
                "set",
            ],
            Self::Function => &[
                "function", "return", "void", "async", "await", "lambda", "def", "fn", "method",
                "call",
            ],
            Self::Keyword => &[
                "if", "else", "for", "while", "class", "import", "export", "try", "catch",
                "finally", "switch",
            ],
            Self::Operator => &[
                "+", "-", "*", "/", "=", "==", "!=", "=>", "&&", "||", "++", "--", "+=", "-=",
                "?:",
            ],
            Self::Literal => &[
                "\"hello\"",
                "'world'",
                "`template`",
                "/regex/",
                "[array]",
                "{obj}",
                "(param)",
                "<tag>",
                "123",
                "0x",
            ],
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        let words = self.vocabulary();
        words[rng.gen_range(0..words.len())]
    }
}

/// One falling token.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Glyph {
    /// Horizontal position
    pub x: f64,
    /// Baseline position
    pub y: f64,
    /// Pixels per frame at speed factor 50
    pub speed: f64,
    /// Current token
    pub text: &'static str,
    /// Base alpha in `[0.4, 1.0]`
    pub opacity: f64,
    /// Category
    pub kind: GlyphKind,
}

/// Code-rain particle system.
#[derive(Clone, Debug)]
pub struct CodeRain {
    bounds: Bounds,
    glyphs: Vec<Glyph>,
}

impl CodeRain {
    /// Populate `count` glyphs (capped at [`MAX_GLYPHS`]) at random positions.
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, count: usize, rng: &mut R) -> Self {
        let count = count.min(MAX_GLYPHS);
        let glyphs = (0..count)
            .map(|_| {
                let kind = GlyphKind::random(rng);
                Glyph {
                    x: rng.gen_range(0.0..=bounds.width),
                    y: rng.gen_range(0.0..=bounds.height),
                    speed: rng.gen_range(1.0..3.5),
                    text: kind.pick(rng),
                    opacity: rng.gen_range(0.4..=1.0),
                    kind,
                }
            })
            .collect();
        Self { bounds, glyphs }
    }

    /// Rebuild the population for a new surface size.
    pub fn resize<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        debug!(
            width = bounds.width,
            height = bounds.height,
            glyphs = self.glyphs.len(),
            "code rain reinitialised"
        );
        *self = Self::new(bounds, self.glyphs.len(), rng);
    }

    /// Advance one frame.
    ///
    /// `speed_factor` is the user-facing speed slider (50 = nominal).
    /// Glyphs falling past the bottom edge respawn on the top edge.
    pub fn step<R: Rng + ?Sized>(&mut self, speed_factor: f64, rng: &mut R) {
        let scale = if speed_factor.is_finite() {
            speed_factor.max(0.0) / 50.0
        } else {
            0.0
        };
        let bounds = self.bounds;

        for glyph in &mut self.glyphs {
            glyph.y += glyph.speed * scale;
            glyph.x = bounds.clamp_x(glyph.x + rng.gen_range(-DRIFT..DRIFT));

            if rng.gen_bool(MUTATE_WHILE_FALLING) {
                glyph.text = glyph.kind.pick(rng);
            }

            if glyph.y > bounds.height {
                glyph.y = 0.0;
                glyph.x = rng.gen_range(0.0..=bounds.width);
                if rng.gen_bool(MUTATE_ON_RESPAWN) {
                    glyph.text = glyph.kind.pick(rng);
                }
            }
        }
    }

    /// Current glyphs.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Surface the glyphs live in.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn population_is_capped() {
        let mut rng = StdRng::seed_from_u64(1);
        let rain = CodeRain::new(Bounds::new(800.0, 600.0), 10_000, &mut rng);
        assert_eq!(rain.glyphs().len(), MAX_GLYPHS);
    }

    #[test]
    fn glyph_text_comes_from_its_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rain = CodeRain::new(Bounds::new(300.0, 200.0), 64, &mut rng);
        for _ in 0..500 {
            rain.step(200.0, &mut rng);
        }
        for glyph in rain.glyphs() {
            assert!(glyph.kind.vocabulary().contains(&glyph.text));
            assert_eq!(glyph.kind.color().len(), 7);
        }
    }

    #[test]
    fn glyphs_respawn_at_top_edge() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rain = CodeRain::new(Bounds::new(100.0, 10.0), 1, &mut rng);
        let mut wrapped = false;
        let mut last_y = rain.glyphs()[0].y;
        for _ in 0..200 {
            rain.step(50.0, &mut rng);
            let y = rain.glyphs()[0].y;
            if y < last_y {
                assert_eq!(y, 0.0);
                wrapped = true;
            }
            last_y = y;
        }
        assert!(wrapped);
    }

    #[test]
    fn resize_keeps_population_and_new_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut rain = CodeRain::new(Bounds::new(1000.0, 1000.0), 50, &mut rng);
        rain.resize(Bounds::new(20.0, 30.0), &mut rng);
        assert_eq!(rain.glyphs().len(), 50);
        assert_eq!(rain.bounds(), Bounds::new(20.0, 30.0));
        assert!(
            rain.glyphs()
                .iter()
                .all(|g| rain.bounds().contains(Point::new(g.x, g.y)))
        );
    }

    #[test]
    fn zero_sized_surface_is_stable() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut rain = CodeRain::new(Bounds::new(0.0, 0.0), 10, &mut rng);
        rain.step(50.0, &mut rng);
        assert!(rain.glyphs().iter().all(|g| g.x == 0.0 && g.y == 0.0));
    }

    proptest! {
        #[test]
        fn glyphs_stay_in_bounds(
            seed in any::<u64>(),
            width in 0.0f64..2000.0,
            height in 0.0f64..2000.0,
            count in 0usize..120,
            speed in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), -100.0f64..5000.0],
            steps in 0usize..150,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut rain = CodeRain::new(Bounds::new(width, height), count, &mut rng);
            for _ in 0..steps {
                rain.step(speed, &mut rng);
            }
            let bounds = rain.bounds();
            for g in rain.glyphs() {
                prop_assert!(bounds.contains(Point::new(g.x, g.y)), "{:?} outside {:?}", g, bounds);
            }
        }
    }
}
