// Domain rules - Business logic and policies

use crate::domain::errors::*;
use crate::domain::model::*;

/// Turns a cut list into the ranges that survive
pub struct SegmentCalculator;

impl SegmentCalculator {
    /// Complement of `cuts` within `[0, duration]`.
    ///
    /// Cuts may be unsorted and may overlap or nest. The result is
    /// ascending, non-overlapping, and can be empty when the cuts cover
    /// the whole timeline.
    pub fn compute_keep_ranges(cuts: &[CutRange], duration: MediaDuration) -> Vec<KeepRange> {
        let total = duration.as_seconds();
        if cuts.is_empty() {
            return vec![KeepRange::new(0.0, total)];
        }

        // Stable: cuts sharing a start keep their input order.
        let mut sorted: Vec<&CutRange> = cuts.iter().collect();
        sorted.sort_by(|a, b| a.start.seconds.total_cmp(&b.start.seconds));

        let mut keep = Vec::new();
        let mut cursor = 0.0_f64;
        for cut in sorted {
            let cut_start = cut.start.seconds.min(total);
            if cursor < cut_start {
                keep.push(KeepRange::new(cursor, cut_start));
            }
            cursor = cursor.max(cut.end.seconds);
        }

        if cursor < total {
            keep.push(KeepRange::new(cursor, total));
        }

        keep
    }

    /// Parse a list of instructions, failing on the first bad one
    pub fn parse_cuts(instructions: &[CutInstruction]) -> Result<Vec<CutRange>, DomainError> {
        instructions
            .iter()
            .enumerate()
            .map(|(index, instruction)| {
                CutRange::from_instruction(instruction).map_err(|e| match e {
                    DomainError::InvalidCutRange(detail) => {
                        DomainError::InvalidCutRange(format!("cut #{}: {}", index + 1, detail))
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// Total seconds covered by `ranges`
    pub fn kept_duration(ranges: &[KeepRange]) -> f64 {
        ranges.iter().map(KeepRange::duration).sum()
    }
}
