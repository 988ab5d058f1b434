use super::filter::Subgroup;
use serde::Serialize;

/// A named numerator/denominator rate. The raw counts stay retrievable
/// alongside the percentage so reports can always show how a figure was
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rate {
    pub numerator: usize,
    pub denominator: usize,
}

impl Rate {
    pub fn new(numerator: usize, denominator: usize) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Rate of two independently computed subgroups. The numerator subgroup
    /// is not assumed to be a subset of the denominator subgroup.
    pub fn from_subgroups(numerator: &Subgroup, denominator: &Subgroup) -> Self {
        Self::new(numerator.len(), denominator.len())
    }

    /// `None` when the denominator is zero; this is the undefined-ratio
    /// state, distinct from a computed zero.
    pub fn percent(&self) -> Option<f64> {
        if self.denominator == 0 {
            None
        } else {
            Some(self.numerator as f64 / self.denominator as f64 * 100.0)
        }
    }

    /// One-decimal rendering, `n/a` when undefined.
    pub fn percent_label(&self) -> String {
        match self.percent() {
            Some(percent) => format!("{percent:.1}%"),
            None => "n/a".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_counts_and_renders_one_decimal() {
        let rate = Rate::new(40, 120);
        assert_eq!(rate.numerator, 40);
        assert_eq!(rate.denominator, 120);
        assert_eq!(rate.percent_label(), "33.3%");
    }

    #[test]
    fn zero_denominator_is_undefined() {
        let rate = Rate::new(0, 0);
        assert_eq!(rate.percent(), None);
        assert_eq!(rate.percent_label(), "n/a");
    }

    #[test]
    fn numerator_may_exceed_denominator() {
        let rate = Rate::new(3, 2);
        assert_eq!(rate.percent_label(), "150.0%");
    }
}
