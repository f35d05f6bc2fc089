//! Wraparound row-selection helpers for table navigation.

/// Select the previous row, wrapping to the last row at the top.
pub fn select_prev(idx: Option<usize>, len: usize) -> Option<usize> {
    if let Some(idx) = idx {
        idx.checked_sub(1).or_else(|| len.checked_sub(1))
    } else {
        len.checked_sub(1)
    }
}

/// Select the next row, wrapping to the first row at the bottom.
pub fn select_next(idx: Option<usize>, len: usize) -> Option<usize> {
    if let Some(idx) = idx {
        let next = idx + 1;
        if next < len {
            Some(next)
        } else {
            (len > 0).then_some(0)
        }
    } else {
        (len > 0).then_some(0)
    }
}
