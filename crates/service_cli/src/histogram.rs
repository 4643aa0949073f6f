//! ASCII histogram of simulated terminal prices.

/// Widest bar, in `#` characters.
pub const BAR_WIDTH: usize = 60;

/// Renders samples as equal-width bins over `[min, max]`, one line per bin:
///
/// ```text
/// 61.2345 - 65.0112 | ########## (412)
/// ```
///
/// Bars are scaled so the fullest bin spans [`BAR_WIDTH`] characters. Empty
/// input renders `No samples`; identical samples render
/// `All samples equal: <v>`. A bin count of zero is treated as one.
///
/// # Examples
///
/// ```rust
/// use service_cli::histogram::render_histogram;
///
/// let text = render_histogram(&[1.0, 2.0, 2.0, 3.0], 2);
/// assert_eq!(text.lines().count(), 2);
/// assert_eq!(render_histogram(&[], 10), "No samples");
/// ```
pub fn render_histogram(samples: &[f64], bins: usize) -> String {
    if samples.is_empty() {
        return "No samples".to_string();
    }

    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if min == max {
        return format!("All samples equal: {min}");
    }

    let bins = bins.max(1);
    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in samples {
        // Saturating cast; the top sample lands one past the last bin
        let index = (((v - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    let max_count = counts.iter().copied().max().unwrap_or(0).max(1);
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let left = min + i as f64 * width;
            let right = left + width;
            let bar = ((count as f64 / max_count as f64) * BAR_WIDTH as f64).round() as usize;
            format!("{left:.4} - {right:.4} | {} ({count})", "#".repeat(bar))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
