//! Nice-number tick placement.
//!
//! Produces human-friendly tick values (multiples of 1, 2 or 5 times a power
//! of ten) for a numeric interval. The requested count is a target; the actual
//! number of ticks depends on where round values fall.

/// Step-factor thresholds: an error above √50 rounds to 10, above √10 to 5,
/// above √2 to 2.
const E10: f64 = 7.0710678118654755;
const E5: f64 = 3.1622776601683795;
const E2: f64 = 1.4142135623730951;

/// Upper bound on generated ticks per requested interval.
const MAX_TICKS_PER_COUNT: i64 = 10;

/// Integer tick bounds plus increment. A negative increment means the step is
/// `1 / -inc`, which keeps sub-unit ticks exact when divided back out.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: i64,
    last: i64,
    inc: f64,
}

/// `None` when the interval is too small or too large for the step to be
/// represented, e.g. a subnormal `stop`.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
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

    let (mut first, mut last, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        if !scale.is_finite() {
            return None;
        }
        first = (start * scale).round() as i64;
        last = (stop * scale).round() as i64;
        if (first as f64) / scale < start {
            first += 1;
        }
        if (last as f64) / scale > stop {
            last -= 1;
        }
        inc = -scale;
    } else {
        let step = 10f64.powf(power) * factor;
        if !step.is_finite() {
            return None;
        }
        first = (start / step).round() as i64;
        last = (stop / step).round() as i64;
        if (first as f64) * step < start {
            first += 1;
        }
        if (last as f64) * step > stop {
            last -= 1;
        }
        inc = step;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    let span = i128::from(last) - i128::from(first);
    if span > i128::from((count as i64).max(1).saturating_mul(MAX_TICKS_PER_COUNT)) {
        return None;
    }
    Some(TickSpec { first, last, inc })
}

/// Tick values covering `[start, stop]` for roughly `count` intervals.
///
/// Reversed intervals yield descending ticks; a zero-width interval yields the
/// single value. Intervals whose step cannot be represented yield no ticks.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some(spec) = tick_spec(lo, hi, count as f64) else {
        log::debug!("no representable ticks for [{lo}, {hi}]");
        return Vec::new();
    };
    if spec.last < spec.first {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = (spec.first..=spec.last)
        .map(|i| if spec.inc < 0.0 { i as f64 / -spec.inc } else { i as f64 * spec.inc })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Distance between consecutive ticks for the same inputs as [`nice_ticks`].
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || start == stop || !start.is_finite() || !stop.is_finite() {
        return 0.0;
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let Some(spec) = tick_spec(lo, hi, count as f64) else {
        return 0.0;
    };
    if spec.inc < 0.0 {
        1.0 / -spec.inc
    } else {
        spec.inc
    }
}
