//! Venue-wide totals over a finished plan.

use crate::layout::LayoutPlan;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemSummary {
    pub arrays: usize,
    pub speakers: usize,
    pub min_height: f64,
    pub max_height: f64,
    /// Sum of every cabinet's throw across all arrays (m).
    pub total_coverage: f64,
}

impl SystemSummary {
    /// `None` if the plan placed no cabinet.
    pub fn from_plan(plan: &LayoutPlan) -> Option<Self> {
        let mut it = plan.speakers();
        let first = it.next()?;
        let mut s = SystemSummary {
            arrays: plan.arrays.len(),
            speakers: 1,
            min_height: first.height,
            max_height: first.height,
            total_coverage: first.throw(),
        };
        for sp in it {
            s.speakers += 1;
            s.min_height = s.min_height.min(sp.height);
            s.max_height = s.max_height.max(sp.height);
            s.total_coverage += sp.throw();
        }
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{plan_layout, PlanCfg};
    use crate::venue::presets::{hall, k2};

    #[test]
    fn reference_hall_totals() {
        let plan = plan_layout(&hall(), &k2(), &PlanCfg::default()).unwrap();
        let s = SystemSummary::from_plan(&plan).unwrap();
        assert_eq!(s.arrays, 3);
        assert_eq!(s.speakers, plan.total_speakers());
        assert_eq!(s.max_height, 14.0);
        assert_eq!(s.min_height, 10.5);
        // each array tiles (last start, 50]
        let per_array = 50.0 - plan.arrays[0].speakers.last().unwrap().coverage_start;
        assert!((s.total_coverage - 3.0 * per_array).abs() < 1e-9);
    }

    #[test]
    fn empty_plan_has_no_summary() {
        let cfg = PlanCfg {
            max_per_array: 0,
            ..PlanCfg::default()
        };
        let plan = plan_layout(&hall(), &k2(), &cfg).unwrap();
        assert!(SystemSummary::from_plan(&plan).is_none());
    }
}
