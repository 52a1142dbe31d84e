//! Population-relative binning: interpolated quantiles, percentile ranks
//! and the two-tier quantile binner used by DASH, AHEI-sodium and ACS2020.
//!
//! These kernels need the whole column before any row can be scored: the
//! cohort within one scoring call is the reference population.

use dqi_model::Gender;

/// Linear-interpolated quantile of a sorted, non-empty slice.
pub fn interpolated_quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Average percentile rank of each value within the non-missing cohort,
/// as a fraction in (0, 1]. Ties share their average rank.
pub fn percentile_ranks(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    present.sort_by(f64::total_cmp);
    let n = present.len();
    values
        .iter()
        .map(|value| {
            value.map(|v| {
                let below = present.partition_point(|x| *x < v);
                let at_or_below = present.partition_point(|x| *x <= v);
                // average rank of the tie group, 1-based
                let rank = (below + at_or_below + 1) as f64 / 2.0;
                rank / n as f64
            })
        })
        .collect()
}

/// Assign each value to one of `bins` population bins (0 = lowest).
///
/// Two-tier algorithm: the primary strategy cuts the cohort at the
/// interpolated k/bins quantiles with right-closed edges. When ties make
/// those cuts degenerate (non-distinct), it falls back to binning by
/// average percentile rank. Missing values get missing bins in both tiers.
pub fn quantile_bins(values: &[Option<f64>], bins: usize) -> Vec<Option<usize>> {
    debug_assert!(bins >= 2);
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return vec![None; values.len()];
    }
    present.sort_by(f64::total_cmp);

    let cuts: Vec<f64> = (1..bins)
        .map(|k| interpolated_quantile(&present, k as f64 / bins as f64))
        .collect();
    let distinct = cuts.windows(2).all(|pair| pair[0] < pair[1])
        && present[0] < cuts[0]
        && cuts[cuts.len() - 1] < present[present.len() - 1];
    if distinct {
        values
            .iter()
            .map(|value| value.map(|v| cuts.iter().filter(|cut| v > **cut).count()))
            .collect()
    } else {
        // fallback: percentile-rank binning survives heavy ties
        tracing::debug!(bins, "quantile cuts degenerate, binning by percentile rank");
        percentile_ranks(values)
            .into_iter()
            .map(|pct| pct.map(|p| (((p * bins as f64).floor()) as usize).min(bins - 1)))
            .collect()
    }
}

/// [`quantile_bins`] stratified by gender: each gender group is ranked
/// against its own distribution.
pub fn grouped_quantile_bins(
    values: &[Option<f64>],
    groups: &[Gender],
    bins: usize,
) -> Vec<Option<usize>> {
    let mut result = vec![None; values.len()];
    for gender in [Gender::Female, Gender::Male] {
        let indices: Vec<usize> = groups
            .iter()
            .enumerate()
            .filter(|(_, g)| **g == gender)
            .map(|(idx, _)| idx)
            .collect();
        if indices.is_empty() {
            continue;
        }
        let subset: Vec<Option<f64>> = indices.iter().map(|idx| values[*idx]).collect();
        for (idx, bin) in indices.iter().zip(quantile_bins(&subset, bins)) {
            result[*idx] = bin;
        }
    }
    result
}
