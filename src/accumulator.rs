use num_traits::{NumCast, NumOps, Zero};

/// Numeric domain a window can be summed and averaged in.
///
/// Integer domains use checked arithmetic and truncate toward zero on
/// division. Float domains never report overflow.
///
/// Overflow is checked on every intermediate step, not only on the final
/// window total. A running sum and a fresh re-sum visit different partial
/// totals, so with mixed-sign samples pick an `S` wider than the samples
/// (`i8` samples in `i16`, `i32` in `i64`) if both strategies must agree.
pub trait Accumulator: Copy + Zero + NumOps + NumCast + PartialOrd {
    fn accumulate(self, rhs: Self) -> Option<Self>;

    fn release(self, rhs: Self) -> Option<Self>;

    fn divide_by_count(self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }

        let divisor: Self = NumCast::from(count)?;
        Some(self / divisor)
    }
}

macro_rules! checked_accumulator {
    ($($t:ty),*) => {
        $(
            impl Accumulator for $t {
                #[inline]
                fn accumulate(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                #[inline]
                fn release(self, rhs: Self) -> Option<Self> {
                    self.checked_sub(rhs)
                }
            }
        )*
    };
}

macro_rules! float_accumulator {
    ($($t:ty),*) => {
        $(
            impl Accumulator for $t {
                #[inline]
                fn accumulate(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn release(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }
            }
        )*
    };
}

checked_accumulator!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_accumulator!(f32, f64);
