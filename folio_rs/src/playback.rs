//! Frame player for recorded algorithm runs.

/// Slowest and fastest speed slider values.
pub const SPEED_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Playback cursor over `len` frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playback {
    len: usize,
    position: usize,
    playing: bool,
    speed: u32,
}

impl Playback {
    /// Paused at the first frame, full speed.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            position: 0,
            playing: false,
            speed: *SPEED_RANGE.end(),
        }
    }

    /// Swap in a new recording; rewinds and pauses.
    pub fn load(&mut self, len: usize) {
        self.len = len;
        self.reset();
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the frame on screen.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Start playing. Playing from the last frame is refused.
    pub fn play(&mut self) {
        self.playing = !self.at_end();
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Back to the first frame, paused.
    pub fn reset(&mut self) {
        self.position = 0;
        self.playing = false;
    }

    /// Clamp into `1..=100`.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end());
    }

    /// Advance one frame while playing. Returns whether the position moved;
    /// reaching the last frame pauses.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        if self.at_end() {
            self.playing = false;
            return false;
        }
        self.position += 1;
        if self.at_end() {
            self.playing = false;
        }
        true
    }

    /// Timer period for the current speed: 991 ms at 1, 100 ms at 100.
    pub fn interval_ms(&self) -> u32 {
        1000 - 9 * self.speed
    }

    /// Fraction of the recording shown, `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.len <= 1 {
            return 0.0;
        }
        self.position as f64 / (self.len - 1) as f64
    }

    fn at_end(&self) -> bool {
        self.position + 1 >= self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_to_the_end_and_stops() {
        let mut playback = Playback::new(3);
        assert!(!playback.tick());
        playback.play();
        assert!(playback.tick());
        assert!(playback.tick());
        assert_eq!(playback.position(), 2);
        assert!(!playback.is_playing());
        assert!(!playback.tick());
        assert_eq!(playback.progress(), 1.0);
    }

    #[test]
    fn play_at_end_is_refused_until_reset() {
        let mut playback = Playback::new(1);
        playback.play();
        assert!(!playback.is_playing());

        let mut playback = Playback::new(4);
        playback.toggle();
        while playback.tick() {}
        playback.toggle();
        assert!(!playback.is_playing());
        playback.reset();
        playback.toggle();
        assert!(playback.is_playing());
        assert_eq!(playback.position(), 0);
    }

    #[test]
    fn speed_maps_to_interval() {
        let mut playback = Playback::new(10);
        assert_eq!(playback.interval_ms(), 100);
        playback.set_speed(0);
        assert_eq!(playback.speed(), 1);
        assert_eq!(playback.interval_ms(), 991);
        playback.set_speed(500);
        assert_eq!(playback.interval_ms(), 100);
    }

    #[test]
    fn load_rewinds() {
        let mut playback = Playback::new(5);
        playback.play();
        playback.tick();
        playback.load(8);
        assert_eq!((playback.position(), playback.len()), (0, 8));
        assert_eq!(playback.progress(), 0.0);
    }
}
