use smallvec::SmallVec;

/// Series lengths up to this many points show every label (weekly view).
pub const WEEKLY_MAX_LEN: usize = 7;
/// Series lengths up to this many points show every label (monthly view).
pub const MONTHLY_MAX_LEN: usize = 12;
const DAILY_MAX_LEN: usize = 31;
const DAILY_TARGET_COUNT: usize = 8;
const LONG_TARGET_COUNT: usize = 6;

pub type LabelIndices = SmallVec<[usize; 16]>;

/// Picks which x-axis labels to draw so they do not overlap.
///
/// Index 0 is always part of the stride and the last index is appended when
/// the stride skips it.
#[must_use]
pub fn select_label_indices(len: usize) -> LabelIndices {
    if len <= MONTHLY_MAX_LEN {
        // Weekly and monthly granularities both fit without thinning.
        return (0..len).collect();
    }

    let target = if len <= DAILY_MAX_LEN {
        DAILY_TARGET_COUNT
    } else {
        LONG_TARGET_COUNT
    };
    let stride = (len / target).max(1);
    let mut indices: LabelIndices = (0..len).step_by(stride).collect();
    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::select_label_indices;

    #[test]
    fn empty_series_selects_nothing() {
        assert!(select_label_indices(0).is_empty());
    }

    #[test]
    fn weekly_series_keeps_every_label() {
        assert_eq!(select_label_indices(7).as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn month_of_days_uses_stride_and_keeps_last() {
        // 30 / 8 = 3
        let indices = select_label_indices(30);
        assert_eq!(
            indices.as_slice(),
            &[0, 3, 6, 9, 12, 15, 18, 21, 24, 27, 29]
        );
    }
}
