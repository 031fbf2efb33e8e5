//! Step recorder for the algorithm visualizer.
//!
//! Each algorithm runs to completion up front and records a [`Frame`] for
//! every comparison, swap, pivot choice and probe. [`crate::playback`] then
//! walks the frames at the chosen speed; the CLI prints them.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::error::Error;

/// Values are drawn from `1..=MAX_VALUE`.
pub const MAX_VALUE: u32 = 100;
/// Bars used by the sorting demos.
pub const SORT_LEN: usize = 20;
/// Bars used by the search demos.
pub const SEARCH_LEN: usize = 15;

/// Algorithms the visualizer knows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Adjacent-swap sort
    #[default]
    Bubble,
    /// Lomuto-partition quick sort
    Quick,
    /// Bottom-up merge sort
    Merge,
    /// Halving search over sorted values
    Binary,
    /// Left-to-right probe
    Linear,
}

impl Algorithm {
    /// All algorithms in menu order.
    pub const ALL: [Algorithm; 5] = [
        Self::Bubble,
        Self::Quick,
        Self::Merge,
        Self::Binary,
        Self::Linear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Binary => "binary",
            Self::Linear => "linear",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
            Self::Binary => "Binary Search",
            Self::Linear => "Linear Search",
        }
    }

    /// Time complexity shown next to the progress bar.
    pub fn complexity(self) -> &'static str {
        match self {
            Self::Bubble => "O(n^2)",
            Self::Quick | Self::Merge => "O(n log n)",
            Self::Binary => "O(log n)",
            Self::Linear => "O(n)",
        }
    }

    /// Search algorithms take a target and want [`SEARCH_LEN`] bars.
    pub fn is_search(self) -> bool {
        matches!(self, Self::Binary | Self::Linear)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name
            .strip_suffix("-sort")
            .or_else(|| name.strip_suffix("-search"))
            .unwrap_or(&name);
        match name {
            "bubble" => Ok(Self::Bubble),
            "quick" => Ok(Self::Quick),
            "merge" => Ok(Self::Merge),
            "binary" => Ok(Self::Binary),
            "linear" => Ok(Self::Linear),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Highlight of a single bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarState {
    #[default]
    Default,
    Comparing,
    Swapping,
    Sorted,
    Pivot,
    Found,
}

impl BarState {
    /// Fill colour.
    pub fn color(self) -> &'static str {
        match self {
            Self::Default => "#64748b",
            Self::Comparing => "#3b82f6",
            Self::Swapping => "#ef4444",
            Self::Sorted => "#10b981",
            Self::Pivot => "#f59e0b",
            Self::Found => "#8b5cf6",
        }
    }
}

/// One bar of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub value: u32,
    pub state: BarState,
}

/// Binary search window at a probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SearchBounds {
    pub left: usize,
    pub right: usize,
    pub mid: usize,
}

/// Snapshot of the bars after one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub bars: Vec<Bar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<SearchBounds>,
}

impl Frame {
    fn paint(values: &[u32], state: impl Fn(usize) -> BarState) -> Self {
        Self {
            bars: values
                .iter()
                .enumerate()
                .map(|(idx, &value)| Bar {
                    value,
                    state: state(idx),
                })
                .collect(),
            bounds: None,
        }
    }

    fn with_bounds(mut self, bounds: SearchBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Bar values in order.
    pub fn values(&self) -> Vec<u32> {
        self.bars.iter().map(|bar| bar.value).collect()
    }

    /// Index of the bar marked [`BarState::Found`], if any.
    pub fn found(&self) -> Option<usize> {
        self.bars.iter().position(|bar| bar.state == BarState::Found)
    }
}

/// `len` values uniform in `1..=100`.
pub fn random_values<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<u32> {
    (0..len).map(|_| rng.gen_range(1..=MAX_VALUE)).collect()
}

/// Sorted values for a search demo. With probability 0.7 one random slot is
/// overwritten with `target` before the final sort, so the demo usually has
/// something to find.
pub fn search_values<R: Rng + ?Sized>(len: usize, target: u32, rng: &mut R) -> Vec<u32> {
    let mut values = random_values(len, rng);
    if len > 0 && rng.gen_bool(0.7) {
        let slot = rng.gen_range(0..len);
        values[slot] = target;
    }
    values.sort_unstable();
    values
}

/// Values for `algorithm`: sorted search input or shuffled sort input.
pub fn values_for<R: Rng + ?Sized>(algorithm: Algorithm, target: u32, rng: &mut R) -> Vec<u32> {
    if algorithm.is_search() {
        search_values(SEARCH_LEN, target, rng)
    } else {
        random_values(SORT_LEN, rng)
    }
}

/// Record the frames of `algorithm` over `values`. `target` is ignored by
/// the sorts.
pub fn record(algorithm: Algorithm, values: &[u32], target: u32) -> Vec<Frame> {
    match algorithm {
        Algorithm::Bubble => bubble_sort(values),
        Algorithm::Quick => quick_sort(values),
        Algorithm::Merge => merge_sort(values),
        Algorithm::Binary => binary_search(values, target),
        Algorithm::Linear => linear_search(values, target),
    }
}

/// Sorting pass bookkeeping shared by the three sorts.
struct SortTape {
    values: Vec<u32>,
    sorted: Vec<bool>,
    frames: Vec<Frame>,
}

impl SortTape {
    fn new(values: &[u32]) -> Self {
        let mut tape = Self {
            values: values.to_vec(),
            sorted: vec![false; values.len()],
            frames: Vec::new(),
        };
        tape.push(&[], BarState::Default);
        tape
    }

    /// Snapshot with `marked` bars highlighted and sorted bars kept green.
    fn push(&mut self, marked: &[usize], state: BarState) {
        let sorted = &self.sorted;
        let frame = Frame::paint(&self.values, |idx| {
            if marked.contains(&idx) {
                state
            } else if sorted[idx] {
                BarState::Sorted
            } else {
                BarState::Default
            }
        });
        self.frames.push(frame);
    }

    fn settle(&mut self, idx: usize) {
        self.sorted[idx] = true;
    }

    fn finish(mut self) -> Vec<Frame> {
        self.sorted.iter_mut().for_each(|s| *s = true);
        let done = Frame::paint(&self.values, |_| BarState::Sorted);
        if self.frames.last() != Some(&done) {
            self.frames.push(done);
        }
        self.frames
    }
}

/// Bubble sort: compare each adjacent pair, swap when out of order, settle
/// the largest remaining bar at the end of every pass.
pub fn bubble_sort(values: &[u32]) -> Vec<Frame> {
    let mut tape = SortTape::new(values);
    let n = values.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            tape.push(&[j, j + 1], BarState::Comparing);
            if tape.values[j] > tape.values[j + 1] {
                tape.push(&[j, j + 1], BarState::Swapping);
                tape.values.swap(j, j + 1);
            }
        }
        tape.settle(n - 1 - pass);
        tape.push(&[], BarState::Default);
    }
    tape.finish()
}

/// Quick sort with the last element of each range as pivot.
pub fn quick_sort(values: &[u32]) -> Vec<Frame> {
    let mut tape = SortTape::new(values);
    if !values.is_empty() {
        quick_range(&mut tape, 0, values.len() - 1);
    }
    tape.finish()
}

fn quick_range(tape: &mut SortTape, low: usize, high: usize) {
    if low >= high {
        if low == high {
            tape.settle(low);
        }
        return;
    }
    let pivot_at = partition(tape, low, high);
    if pivot_at > low {
        quick_range(tape, low, pivot_at - 1);
    }
    if pivot_at < high {
        quick_range(tape, pivot_at + 1, high);
    }
}

fn partition(tape: &mut SortTape, low: usize, high: usize) -> usize {
    let pivot = tape.values[high];
    tape.push(&[high], BarState::Pivot);

    // Next slot for a value smaller than the pivot.
    let mut store = low;
    for j in low..high {
        tape.push(&[j], BarState::Comparing);
        if tape.values[j] < pivot {
            if store != j {
                tape.push(&[store, j], BarState::Swapping);
                tape.values.swap(store, j);
            }
            store += 1;
        }
    }

    tape.push(&[store, high], BarState::Swapping);
    tape.values.swap(store, high);
    tape.settle(store);
    tape.push(&[], BarState::Default);
    store
}

/// Bottom-up merge sort.
///
/// Runs are merged in place by rotating the smaller right-hand element into
/// position, so every frame stays a permutation of the input.
pub fn merge_sort(values: &[u32]) -> Vec<Frame> {
    let mut tape = SortTape::new(values);
    let n = values.len();
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo + width < n {
            let hi = (lo + 2 * width).min(n);
            merge_runs(&mut tape, lo, lo + width, hi);
            lo = hi;
        }
        width *= 2;
    }
    tape.finish()
}

fn merge_runs(tape: &mut SortTape, lo: usize, mid: usize, hi: usize) {
    let (mut i, mut j, mut mid) = (lo, mid, mid);
    while i < mid && j < hi {
        tape.push(&[i, j], BarState::Comparing);
        if tape.values[i] <= tape.values[j] {
            i += 1;
        } else {
            tape.push(&[i, j], BarState::Swapping);
            tape.values[i..=j].rotate_right(1);
            i += 1;
            mid += 1;
            j += 1;
        }
    }
}

/// Binary search. `values` is sorted first if it is not already.
///
/// Each probe frame highlights the live window and marks the midpoint as
/// [`BarState::Pivot`]; a hit adds a final frame with the midpoint
/// [`BarState::Found`].
pub fn binary_search(values: &[u32], target: u32) -> Vec<Frame> {
    let mut values = values.to_vec();
    values.sort_unstable();

    let mut frames = Vec::new();
    if values.is_empty() {
        frames.push(Frame::paint(&values, |_| BarState::Default));
        return frames;
    }

    let (mut left, mut right) = (0usize, values.len() - 1);
    while left <= right {
        let mid = left + (right - left) / 2;
        let bounds = SearchBounds { left, right, mid };
        frames.push(
            Frame::paint(&values, |idx| {
                if idx == mid {
                    BarState::Pivot
                } else if (left..=right).contains(&idx) {
                    BarState::Comparing
                } else {
                    BarState::Default
                }
            })
            .with_bounds(bounds),
        );

        match values[mid].cmp(&target) {
            std::cmp::Ordering::Equal => {
                frames.push(
                    Frame::paint(&values, |idx| {
                        if idx == mid {
                            BarState::Found
                        } else {
                            BarState::Default
                        }
                    })
                    .with_bounds(bounds),
                );
                return frames;
            }
            std::cmp::Ordering::Less => left = mid + 1,
            std::cmp::Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                right = mid - 1;
            }
        }
    }

    frames.push(Frame::paint(&values, |_| BarState::Default));
    frames
}

/// Linear search: probe every bar left to right until the target shows up.
pub fn linear_search(values: &[u32], target: u32) -> Vec<Frame> {
    let mut frames = Vec::new();
    for (probe, &value) in values.iter().enumerate() {
        frames.push(Frame::paint(values, |idx| {
            if idx == probe {
                BarState::Comparing
            } else {
                BarState::Default
            }
        }));
        if value == target {
            frames.push(Frame::paint(values, |idx| {
                if idx == probe {
                    BarState::Found
                } else {
                    BarState::Default
                }
            }));
            return frames;
        }
    }
    frames.push(Frame::paint(values, |_| BarState::Default));
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted_copy(values: &[u32]) -> Vec<u32> {
        let mut v = values.to_vec();
        v.sort_unstable();
        v
    }

    fn assert_sort_frames(frames: &[Frame], input: &[u32]) {
        let expected = sorted_copy(input);
        for frame in frames {
            assert_eq!(sorted_copy(&frame.values()), expected);
        }
        let last = frames.last().expect("at least one frame");
        assert_eq!(last.values(), expected);
        assert!(last.bars.iter().all(|b| b.state == BarState::Sorted));
    }

    #[test]
    fn bubble_sorts_small_input() {
        let frames = bubble_sort(&[5, 3, 8, 1]);
        assert_eq!(frames[0].values(), vec![5, 3, 8, 1]);
        assert_eq!(frames[1].bars[0].state, BarState::Comparing);
        assert_eq!(frames[1].bars[1].state, BarState::Comparing);
        assert_sort_frames(&frames, &[5, 3, 8, 1]);
        assert_eq!(frames.last().unwrap().values(), vec![1, 3, 5, 8]);
    }

    #[test]
    fn quick_marks_pivot_first() {
        let frames = quick_sort(&[4, 1, 3]);
        assert_eq!(frames[1].bars[2].state, BarState::Pivot);
        assert_sort_frames(&frames, &[4, 1, 3]);
    }

    #[test]
    fn merge_sorts_with_duplicates() {
        let input = [7, 2, 7, 1, 9, 2, 5];
        assert_sort_frames(&merge_sort(&input), &input);
    }

    #[test]
    fn degenerate_inputs() {
        for sort in [bubble_sort, quick_sort, merge_sort] {
            let empty = sort(&[]);
            assert_eq!(empty.len(), 1);
            assert!(empty[0].bars.is_empty());
            assert_sort_frames(&sort(&[42]), &[42]);
        }
    }

    #[test]
    fn binary_search_narrows_and_finds() {
        let values = [3, 9, 14, 20, 27, 31, 42, 50, 61];
        let frames = binary_search(&values, 42);
        let windows: Vec<_> = frames.iter().filter_map(|f| f.bounds).collect();
        assert_eq!(
            windows[0],
            SearchBounds {
                left: 0,
                right: 8,
                mid: 4
            }
        );
        for pair in windows.windows(2) {
            let (outer, inner) = (pair[0], pair[1]);
            assert!(outer.left <= inner.left && inner.right <= outer.right);
        }
        let last = frames.last().unwrap();
        let hit = last.found().expect("target present");
        assert_eq!(last.bars[hit].value, 42);
    }

    #[test]
    fn binary_search_miss_ends_without_found() {
        let frames = binary_search(&[1, 2, 3], 0);
        assert!(frames.iter().all(|f| f.found().is_none()));
        assert!(frames.last().unwrap().bounds.is_none());
    }

    #[test]
    fn linear_search_probes_in_order() {
        let frames = linear_search(&[4, 8, 15, 16], 15);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[2].bars[2].state, BarState::Comparing);
        assert_eq!(frames[3].found(), Some(2));
    }

    #[test]
    fn search_values_are_sorted() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let values = search_values(SEARCH_LEN, 42, &mut rng);
            assert_eq!(values.len(), SEARCH_LEN);
            assert_eq!(values, sorted_copy(&values));
            assert!(values.iter().all(|v| (1..=MAX_VALUE).contains(v)));
        }
    }

    #[test]
    fn parses_names_and_labels() {
        assert_eq!("Quick-Sort".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!("linear".parse::<Algorithm>().unwrap(), Algorithm::Linear);
        assert!(matches!(
            "bogo".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm(_))
        ));
        assert_eq!(Algorithm::Bubble.complexity(), "O(n^2)");
        assert!(Algorithm::Binary.is_search());
    }

    proptest! {
        #[test]
        fn sorts_keep_permutation_and_finish_sorted(input in prop::collection::vec(1u32..=100, 0..24)) {
            for frames in [bubble_sort(&input), quick_sort(&input), merge_sort(&input)] {
                let expected = sorted_copy(&input);
                for frame in &frames {
                    prop_assert_eq!(sorted_copy(&frame.values()), expected.clone());
                }
                let last = frames.last().unwrap();
                prop_assert_eq!(last.values(), expected);
                prop_assert!(last.bars.iter().all(|b| b.state == BarState::Sorted));
            }
        }

        #[test]
        fn binary_search_windows_follow_midpoint_rule(
            input in prop::collection::vec(1u32..=100, 1..30),
            target in 1u32..=100,
        ) {
            let frames = binary_search(&input, target);
            let windows: Vec<_> = frames.iter().filter_map(|f| f.bounds).collect();
            for w in &windows {
                prop_assert_eq!(w.mid, w.left + (w.right - w.left) / 2);
            }
            for pair in windows.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a == b { continue; }
                prop_assert!(b.left == a.mid + 1 || b.right + 1 == a.mid);
            }
            let last = frames.last().unwrap();
            match last.found() {
                Some(hit) => prop_assert_eq!(last.bars[hit].value, target),
                None => prop_assert!(!input.contains(&target)),
            }
        }
    }
}
