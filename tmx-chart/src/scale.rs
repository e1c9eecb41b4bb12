//! Band and linear scales used to lay out the matrix and its sparklines.

/// Ordinal band scale over `n` evenly spaced slots with no outer padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    start: f64,
    step: f64,
    bandwidth: f64,
    count: usize,
}

impl BandScale {
    /// `count` bands spread over `[range_start, range_end]`, leaving
    /// `padding_inner` of each step empty between neighbours.
    pub fn new(count: usize, range_start: f64, range_end: f64, padding_inner: f64) -> Self {
        let padding_inner = padding_inner.clamp(0.0, 1.0);
        let n = count as f64;
        let step = (range_end - range_start) / (n - padding_inner).max(1.0);
        // Leftover space (only when fewer than one full band fits) is centred.
        let offset = (range_end - range_start - step * (n - padding_inner)) * 0.5;
        BandScale {
            start: range_start + offset,
            step,
            bandwidth: step * (1.0 - padding_inner),
            count,
        }
    }

    /// Leading edge of band `index`, or `None` past the end.
    pub fn position(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.start + self.step * index as f64)
    }

    /// Middle of band `index`.
    pub fn center(&self, index: usize) -> Option<f64> {
        self.position(index).map(|p| p + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Continuous linear scale from a domain to a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    /// Map `value` into the range. A zero-width domain maps everything to the
    /// middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    /// Round tick values inside the domain, about `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        nice_ticks(lo, hi, count)
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Tick values at 1/2/5 x 10^k spacing covering `[start, stop]`.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let Some((i1, i2, inc)) = tick_spec(start, stop, count as f64) else {
        return Vec::new();
    };
    (i1..=i2)
        .map(|i| {
            if inc < 0.0 {
                i as f64 / -inc
            } else {
                i as f64 * inc
            }
        })
        .collect()
}

/// Integer tick bounds and increment. A negative increment means "divide by
/// its magnitude", which keeps small steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round() as i64;
        i2 = (stop * inv).round() as i64;
        if (i1 as f64) / inv < start {
            i1 += 1;
        }
        if (i2 as f64) / inv > stop {
            i2 -= 1;
        }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round() as i64;
        i2 = (stop / step).round() as i64;
        if (i1 as f64) * step < start {
            i1 += 1;
        }
        if (i2 as f64) * step > stop {
            i2 -= 1;
        }
        inc = step;
    }
    if i2 < i1 {
        if (0.5..2.0).contains(&count) {
            return tick_spec(start, stop, count * 2.0);
        }
        return None;
    }
    Some((i1, i2, inc))
}

/// Show every year up to 12 columns, every 2nd up to 20, every 4th beyond.
pub fn year_tick_step(year_count: usize) -> usize {
    if year_count > 20 {
        4
    } else if year_count > 12 {
        2
    } else {
        1
    }
}
