//! Decimal number layout
//!
//! Digits are placed most-significant first across the visible slots, one
//! power of ten per slot. Leading zeros are suppressed; zero itself is shown
//! as a single `0` in the last slot.

use super::layout::Row;
use super::RenderError;

/// Lay out a non-negative integer right-aligned in `width` slots
///
/// Fails with [`RenderError::NumberOutOfRange`] when the leading digit
/// position would need more than one decimal digit, i.e. `n` has more
/// digits than the display has slots.
pub fn decimal_digits(n: u32, width: usize) -> Result<Row, RenderError> {
    let mut row = Row::blank(width);
    let width = row.cells().len();
    if width == 0 {
        return Err(RenderError::NumberOutOfRange);
    }

    if n == 0 {
        row.set(width - 1, b'0');
        return Ok(row);
    }

    let leading_divisor = 10u32.checked_pow(width as u32 - 1).unwrap_or(u32::MAX);
    if n / leading_divisor > 9 {
        return Err(RenderError::NumberOutOfRange);
    }

    let mut divisor = leading_divisor;
    let mut seen_nonzero = false;
    for index in 0..width {
        let digit = (n / divisor % 10) as u8;
        if digit != 0 || seen_nonzero {
            seen_nonzero = true;
            row.set(index, b'0' + digit);
        }
        divisor /= 10;
    }
    Ok(row)
}
