//! Keys need a value that sorts before everything else so the head of the list
//! has something to hold.
//!
//! Implementing [MinValue] is what makes a type usable as a key; a type without
//! an implementation is rejected at compile time.

pub trait MinValue {
    /// A value that no other value of the type sorts before.
    fn min_value() -> Self;
}

macro_rules! impl_min_value {
    ($($ty: ty),*) => {
        $(
            impl MinValue for $ty {
                fn min_value() -> Self {
                    <$ty>::MIN
                }
            }
        )*
    };
}

// unsigned MIN is 0, which a real key can equal. the head is never compared
// against, so that is fine.
impl_min_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl MinValue for char {
    fn min_value() -> Self {
        '\0'
    }
}

impl MinValue for f32 {
    fn min_value() -> Self {
        f32::MIN
    }
}

impl MinValue for f64 {
    fn min_value() -> Self {
        f64::MIN
    }
}

impl MinValue for bool {
    fn min_value() -> Self {
        false
    }
}

impl MinValue for String {
    fn min_value() -> Self {
        String::new()
    }
}

impl MinValue for &'static str {
    fn min_value() -> Self {
        ""
    }
}

#[cfg(test)]
mod key_test {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(<i8 as MinValue>::min_value(), -128);
        assert_eq!(<i64 as MinValue>::min_value(), i64::MIN);
        assert_eq!(<u32 as MinValue>::min_value(), 0);
        assert_eq!(<usize as MinValue>::min_value(), 0);
    }

    #[test]
    fn test_floats() {
        assert_eq!(<f64 as MinValue>::min_value(), -f64::MAX);
        assert!(<f32 as MinValue>::min_value() < -1.0e38);
        assert!(<f64 as MinValue>::min_value().is_finite());
    }

    #[test]
    fn test_text() {
        assert_eq!(<String as MinValue>::min_value(), "");
        assert!(<String as MinValue>::min_value() < String::from("\0"));
        assert_eq!(<&str as MinValue>::min_value(), "");
        assert_eq!(<char as MinValue>::min_value(), '\0');
    }
}
