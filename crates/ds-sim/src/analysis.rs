//! Response analysis over sampled series: extrema, zero crossings, period.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtremumKind {
    Maximum,
    Minimum,
}

/// Interior local extremum of a sampled series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremum {
    pub index: usize,
    pub time: f64,
    pub value: f64,
    pub kind: ExtremumKind,
}

/// Interior samples where the slope changes sign.
///
/// A flat run is reported once, at its first sample, and only when the series
/// turns around after it. A plateau on a monotone stretch is not an extremum.
pub fn local_extrema(times: &[f64], values: &[f64]) -> Vec<Extremum> {
    let n = times.len().min(values.len());
    let mut out = Vec::new();
    // Sign of the last non-flat move and the sample it arrived at.
    let mut dir = 0.0_f64;
    let mut pivot = 0;
    for i in 1..n {
        let d = values[i] - values[i - 1];
        let sign = if d > 0.0 {
            1.0
        } else if d < 0.0 {
            -1.0
        } else {
            continue;
        };
        if dir != 0.0 && sign != dir {
            out.push(Extremum {
                index: pivot,
                time: times[pivot],
                value: values[pivot],
                kind: if dir > 0.0 {
                    ExtremumKind::Maximum
                } else {
                    ExtremumKind::Minimum
                },
            });
        }
        dir = sign;
        pivot = i;
    }
    out
}

/// Times at which the series changes sign, linearly interpolated.
///
/// A sample exactly at zero counts once, when it is reached from a nonzero value.
pub fn zero_crossings(times: &[f64], values: &[f64]) -> Vec<f64> {
    let n = times.len().min(values.len());
    let mut out = Vec::new();
    for i in 1..n {
        let (a, b) = (values[i - 1], values[i]);
        let crosses = (a > 0.0 && b <= 0.0) || (a < 0.0 && b >= 0.0);
        if !crosses {
            continue;
        }
        if b == 0.0 {
            out.push(times[i]);
        } else {
            let (t0, t1) = (times[i - 1], times[i]);
            out.push(t0 + (t1 - t0) * a / (a - b));
        }
    }
    out
}

/// Mean spacing of successive maxima; `None` with fewer than two maxima.
pub fn mean_period(times: &[f64], values: &[f64]) -> Option<f64> {
    let peaks: Vec<f64> = local_extrema(times, values)
        .into_iter()
        .filter(|e| e.kind == ExtremumKind::Maximum)
        .map(|e| e.time)
        .collect();
    let (first, last) = (peaks.first()?, peaks.last()?);
    if peaks.len() < 2 {
        return None;
    }
    Some((last - first) / (peaks.len() - 1) as f64)
}

/// True when `|value|` never grows across successive extrema.
pub fn envelope_non_increasing(extrema: &[Extremum]) -> bool {
    extrema
        .windows(2)
        .all(|w| w[1].value.abs() <= w[0].value.abs())
}
