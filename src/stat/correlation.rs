//! Pairwise correlation coefficients
//!
//! All methods use pairwise-complete observations: a row is skipped for a pair
//! of columns when either value is null or NaN. A pair with fewer than two
//! complete rows, or with no variation in one of the columns, yields NaN.

use crate::EdaError;
use polars::prelude::{cov, Float64Chunked, NewChunkedArray};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Correlation method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrMethod {
    /// Product-moment correlation
    #[default]
    Pearson,
    /// Kendall's tau-b rank correlation
    Kendall,
    /// Pearson correlation of average ranks
    Spearman,
}

impl CorrMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrMethod::Pearson => "pearson",
            CorrMethod::Kendall => "kendall",
            CorrMethod::Spearman => "spearman",
        }
    }
}

impl std::fmt::Display for CorrMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CorrMethod {
    type Err = EdaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pearson" => Ok(CorrMethod::Pearson),
            "kendall" => Ok(CorrMethod::Kendall),
            "spearman" => Ok(CorrMethod::Spearman),
            _ => Err(EdaError::ValueError(
                "The correlation method should be 'pearson', 'kendall', or 'spearman'"
                    .to_string(),
            )),
        }
    }
}

/// Correlation of two columns under `method`, skipping incomplete rows
pub fn correlation(x: &[Option<f64>], y: &[Option<f64>], method: CorrMethod) -> f64 {
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter_map(|pair| match pair {
            (Some(a), Some(b)) if !a.is_nan() && !b.is_nan() => Some((*a, *b)),
            _ => None,
        })
        .unzip();

    match method {
        CorrMethod::Pearson => pearson(&xs, &ys),
        CorrMethod::Kendall => kendall(&xs, &ys),
        CorrMethod::Spearman => spearman(&xs, &ys),
    }
}

pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }
    let xs = Float64Chunked::from_slice("x".into(), &x[..n]);
    let ys = Float64Chunked::from_slice("y".into(), &y[..n]);
    // zero variance on either side finalizes to NaN
    cov::pearson_corr(&xs, &ys)
        .filter(|r| !r.is_nan())
        .map_or(f64::NAN, |r| r.clamp(-1.0, 1.0))
}

pub fn spearman(x: &[f64], y: &[f64]) -> f64 {
    pearson(&average_ranks(x), &average_ranks(y))
}

/// Kendall's tau-b, which corrects for ties in either column
pub fn kendall(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }

    let (mut concordant, mut discordant) = (0u64, 0u64);
    let (mut ties_x_only, mut ties_y_only) = (0u64, 0u64);
    for i in 0..n {
        for j in (i + 1)..n {
            let dx = x[i] - x[j];
            let dy = y[i] - y[j];
            match (dx == 0.0, dy == 0.0) {
                (true, true) => {}
                (true, false) => ties_x_only += 1,
                (false, true) => ties_y_only += 1,
                (false, false) => {
                    if (dx > 0.0) == (dy > 0.0) {
                        concordant += 1;
                    } else {
                        discordant += 1;
                    }
                }
            }
        }
    }

    let untied = (concordant + discordant) as f64;
    let denominator = ((untied + ties_x_only as f64) * (untied + ties_y_only as f64)).sqrt();
    if denominator == 0.0 {
        return f64::NAN;
    }
    ((concordant as f64 - discordant as f64) / denominator).clamp(-1.0, 1.0)
}

/// 1-based ranks, tied values sharing the mean of their positions
pub(crate) fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // positions start..end hold equal values; ranks are start+1 ..= end
        let rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        start = end;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_pearson_perfect_linear() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);

        let y_neg = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &y_neg) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_known_value() {
        // sxy = 6, sxx = 10, syy = 6
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        assert!((pearson(&x, &y) - 0.7745966692414834).abs() < 1e-10);
    }

    #[test]
    fn test_constant_column_is_nan() {
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(kendall(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
    }

    #[test]
    fn test_pearson_uses_common_prefix() {
        // a longer slice is cut to the shorter one
        let r = pearson(&[1.0, 2.0, 3.0, 100.0], &[3.0, 2.0, 1.0]);
        assert!((r + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_too_few_observations() {
        assert!(pearson(&[1.0], &[2.0]).is_nan());
        assert!(pearson(&[], &[]).is_nan());
        assert!(spearman(&[], &[]).is_nan());
    }

    #[test]
    fn test_average_ranks_with_ties() {
        assert_eq!(
            average_ranks(&[10.0, 20.0, 20.0, 5.0]),
            vec![2.0, 3.5, 3.5, 1.0]
        );
    }

    #[test]
    fn test_spearman_monotonic() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 8.0, 27.0, 64.0, 125.0];
        assert!((spearman(&x, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_kendall_known_values() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert!((kendall(&x, &[1.0, 2.0, 3.0, 4.0]) - 1.0).abs() < 1e-12);
        assert!((kendall(&x, &[4.0, 3.0, 2.0, 1.0]) + 1.0).abs() < 1e-12);
        // 5 concordant, 1 discordant out of 6 pairs
        assert!((kendall(&x, &[1.0, 3.0, 2.0, 4.0]) - 4.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_kendall_tau_b_with_ties() {
        // x has one tied pair: C = 5, D = 0, ties_x_only = 1
        let x = [1.0, 1.0, 2.0, 3.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        let expected = 5.0 / (5.0f64 * 6.0).sqrt();
        assert!((kendall(&x, &y) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_incomplete_rows_are_skipped() {
        let x = vec![Some(1.0), Some(2.0), None, Some(3.0), Some(f64::NAN)];
        let y = vec![Some(2.0), Some(4.0), Some(100.0), Some(6.0), Some(1.0)];
        let r = correlation(&x, &y, CorrMethod::Pearson);
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("kendall".parse::<CorrMethod>().unwrap(), CorrMethod::Kendall);
        let err = "kvb".parse::<CorrMethod>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "The correlation method should be 'pearson', 'kendall', or 'spearman'"
        );
    }

    proptest! {
        #[test]
        fn prop_correlation_bounded_and_symmetric(
            pairs in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 2..40)
        ) {
            let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            for method in [CorrMethod::Pearson, CorrMethod::Kendall, CorrMethod::Spearman] {
                let r = correlation(&some(&x), &some(&y), method);
                let r_swapped = correlation(&some(&y), &some(&x), method);
                if r.is_nan() {
                    prop_assert!(r_swapped.is_nan());
                } else {
                    prop_assert!((-1.0..=1.0).contains(&r));
                    prop_assert!((r - r_swapped).abs() < 1e-9);
                }
            }
        }
    }
}
