//! Equal-width binning of the sample values over the selector's domain.

use rangebrush_core::{Domain, Selection};

#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

impl Bin {
    /// True when any part of the bin lies inside the selection.
    pub fn overlaps(&self, selection: &Selection) -> bool {
        if selection.start == selection.end {
            return selection.start >= self.lo && selection.start <= self.hi;
        }
        self.hi > selection.start && self.lo < selection.end
    }
}

#[derive(Debug, Clone, Default)]
pub struct Histogram {
    bins: Vec<Bin>,
    max_count: usize,
}

impl Histogram {
    /// Bin the values that fall inside `domain`. Values outside are ignored.
    pub fn build(values: &[f64], domain: &Domain, bin_count: usize) -> Self {
        let n = bin_count.max(1);
        if domain.span() == 0.0 {
            let count = values.iter().filter(|v| **v == domain.min()).count();
            return Self {
                bins: vec![Bin {
                    lo: domain.min(),
                    hi: domain.max(),
                    count,
                }],
                max_count: count,
            };
        }

        let width = domain.span() / n as f64;
        let mut bins: Vec<Bin> = (0..n)
            .map(|i| Bin {
                lo: domain.min() + width * i as f64,
                hi: if i + 1 == n {
                    domain.max()
                } else {
                    domain.min() + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for &v in values {
            if !domain.contains(v) {
                continue;
            }
            let idx = (((v - domain.min()) / width) as usize).min(n - 1);
            bins[idx].count += 1;
        }

        let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
        Self { bins, max_count }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Bin covering `v`, if `v` is inside the binned range.
    pub fn bin_at(&self, v: f64) -> Option<&Bin> {
        let first = self.bins.first()?;
        let last = self.bins.last()?;
        if v < first.lo || v > last.hi {
            return None;
        }
        self.bins
            .iter()
            .find(|b| v < b.hi)
            .or(Some(last))
    }
}

/// Number of values inside the selection (bounds inclusive).
pub fn count_selected(values: &[f64], selection: &Selection) -> usize {
    values
        .iter()
        .filter(|v| **v >= selection.start && **v <= selection.end)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(min: f64, max: f64) -> Domain {
        Domain::new(min, max).unwrap()
    }

    #[test]
    fn bins_cover_domain() {
        let h = Histogram::build(&[], &domain(0.0, 10.0), 4);
        assert_eq!(h.bins().len(), 4);
        assert_eq!(h.bins()[0].lo, 0.0);
        assert_eq!(h.bins()[3].hi, 10.0);
        assert_eq!(h.max_count(), 0);
    }

    #[test]
    fn max_value_lands_in_last_bin() {
        let h = Histogram::build(&[0.0, 2.4, 2.6, 10.0, 11.0], &domain(0.0, 10.0), 4);
        let counts: Vec<usize> = h.bins().iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 1, 0, 1]);
        assert_eq!(h.max_count(), 2);
    }

    #[test]
    fn degenerate_domain_has_single_bin() {
        let h = Histogram::build(&[3.0, 3.0, 4.0], &domain(3.0, 3.0), 10);
        assert_eq!(h.bins().len(), 1);
        assert_eq!(h.bins()[0].count, 2);
    }

    #[test]
    fn widest_accepted_domain_has_finite_bins() {
        assert!(Domain::new(-f64::MAX, f64::MAX).is_err());
        let h = Histogram::build(&[0.0, 1e299], &domain(-1e300, 1e300), 4);
        assert!(h.bins().iter().all(|b| b.lo.is_finite() && b.hi.is_finite()));
        assert_eq!(h.bins().iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn overlap_excludes_touching_bins() {
        let bin = Bin { lo: 5.0, hi: 7.5, count: 0 };
        assert!(bin.overlaps(&Selection::new(6.0, 20.0)));
        assert!(!bin.overlaps(&Selection::new(0.0, 5.0)));
        assert!(!bin.overlaps(&Selection::new(7.5, 9.0)));
        assert!(bin.overlaps(&Selection::new(5.0, 5.0)));
    }

    #[test]
    fn bin_at_finds_covering_bin() {
        let h = Histogram::build(&[], &domain(0.0, 10.0), 4);
        assert_eq!(h.bin_at(0.0).unwrap().lo, 0.0);
        assert_eq!(h.bin_at(5.1).unwrap().lo, 5.0);
        assert_eq!(h.bin_at(10.0).unwrap().hi, 10.0);
        assert!(h.bin_at(-0.1).is_none());
    }

    #[test]
    fn counts_selected_values_inclusively() {
        let values = [1.0, 5.0, 7.0, 15.0];
        assert_eq!(count_selected(&values, &Selection::new(5.0, 15.0)), 3);
    }
}
