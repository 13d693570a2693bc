//! Linear scales and tick generation.
//!
//! A [`LinearScale`] maps a numeric domain linearly onto a pixel range. The
//! plot uses two flavors of it: one that grows with the value (set-size bar
//! lengths) and one whose range is inverted so that larger intersection
//! counts produce taller bars from a fixed baseline.
//!
//! Tick generation and tick labels follow the d3 conventions so that the
//! axes carry the same "nice" values a browser-side rendering would show:
//! steps of 1, 2 or 5 times a power of ten, formatted with a fixed number of
//! decimals and thousands separators.
//!
//! # Example
//!
//! ```
//! # use upset_core::scale::LinearScale;
//! let scale = LinearScale::new((0.0, 3.0), (400.0, 0.0));
//! assert_eq!(scale.apply(3.0), 0.0);
//! assert_eq!(scale.apply(0.0), 400.0);
//!
//! let ticks = scale.ticks(10);
//! assert_eq!(ticks.first(), Some(&0.0));
//! assert_eq!(scale.tick_format(10).format(1.5), "1.5");
//! ```

/// A linear mapping from a numeric domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f32, f32),
    range: (f32, f32),
}

impl LinearScale {
    /// Creates a scale mapping `domain` onto `range`.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Creates a scale whose domain is `[0, max]`.
    pub fn from_max(max: f32, range: (f32, f32)) -> Self {
        Self::new((0.0, max), range)
    }

    /// Returns the domain bounds.
    pub fn domain(&self) -> (f32, f32) {
        self.domain
    }

    /// Returns the range bounds.
    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Returns the scale with the same domain and the range endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self {
            domain: self.domain,
            range: (self.range.1, self.range.0),
        }
    }

    /// Maps a domain value onto the range.
    ///
    /// A degenerate domain (both ends equal) maps every value onto the middle
    /// of the range.
    pub fn apply(&self, value: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || !span.is_finite() {
            0.5
        } else {
            (value - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    /// Returns approximately `count` nicely rounded values within the domain.
    pub fn ticks(&self, count: usize) -> Vec<f32> {
        ticks(self.domain.0 as f64, self.domain.1 as f64, count as f64)
            .into_iter()
            .map(|tick| tick as f32)
            .collect()
    }

    /// Returns the label formatter matching [`ticks`](Self::ticks) for the same `count`.
    pub fn tick_format(&self, count: usize) -> TickFormat {
        let step = tick_step(self.domain.0 as f64, self.domain.1 as f64, count as f64);
        TickFormat::for_step(step)
    }
}

/// Formats tick values with a fixed number of decimals and `,` grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickFormat {
    decimals: usize,
}

impl TickFormat {
    /// Creates a formatter showing exactly `decimals` fractional digits.
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    fn for_step(step: f64) -> Self {
        let step = step.abs();
        if !step.is_finite() || step == 0.0 {
            return Self::new(0);
        }
        let exponent = (step.log10() + 1e-9).floor();
        Self::new((-exponent).max(0.0) as usize)
    }

    /// Returns the number of fractional digits.
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    /// Formats a value, e.g. `12345.0` as `"12,345"`.
    pub fn format(&self, value: f32) -> String {
        let fixed = format!("{:.*}", self.decimals, value.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3);
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        if let Some(fraction) = fraction {
            grouped.push('.');
            grouped.push_str(fraction);
        }

        let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
        if value < 0.0 && !is_zero {
            // d3 labels negative values with a true minus sign
            format!("\u{2212}{grouped}")
        } else {
            grouped
        }
    }
}

/// Computes `(i1, i2, inc)` such that the ticks are `i * inc` (or `i / -inc`
/// when `inc` is negative) for `i` in `i1..=i2`.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    if !(count > 0.0) {
        return None;
    }

    let step = (stop - start) / count;
    if !step.is_finite() || step == 0.0 {
        return None;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round() as i64;
        let mut i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start {
            i1 += 1;
        }
        if (i2 as f64) / inc > stop {
            i2 -= 1;
        }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start {
            i1 += 1;
        }
        if (i2 as f64) * inc > stop {
            i2 -= 1;
        }
        (i1, i2, inc)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    Some((i1, i2, inc))
}

fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let spec = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    let Some((i1, i2, inc)) = spec else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let value = |i: i64| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc };
    if reverse {
        (i1..=i2).rev().map(value).collect()
    } else {
        (i1..=i2).map(value).collect()
    }
}

fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let spec = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    let Some((_, _, inc)) = spec else {
        return 0.0;
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn ticks_stay_within_domain(max in 1u32..1_000_000, count in 1usize..20) {
            let scale = LinearScale::from_max(max as f32, (0.0, 100.0));
            for tick in scale.ticks(count) {
                prop_assert!(tick >= 0.0);
                prop_assert!(tick <= max as f32 * 1.0001);
            }
        }

        #[test]
        fn ticks_are_strictly_increasing(max in 1u32..1_000_000, count in 1usize..20) {
            let scale = LinearScale::from_max(max as f32, (0.0, 100.0));
            let ticks = scale.ticks(count);
            prop_assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
        }

        #[test]
        fn apply_is_monotonic(max in 1u32..100_000, a in 0u32..100_000, b in 0u32..100_000) {
            let scale = LinearScale::from_max(max as f32, (0.0, 150.0));
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scale.apply(lo as f32) <= scale.apply(hi as f32));
        }
    }
}
