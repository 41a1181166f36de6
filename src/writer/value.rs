//! Values that can be written as element content or attribute values.
//!
//! [`XmlValue`] is sealed over a small closed set of primitive kinds:
//!
//! | Kind           | Types                             | Rendering                 |
//! |----------------|-----------------------------------|---------------------------|
//! | text           | `str`, `String`                   | bytes as given, unescaped |
//! | signed         | `i8` .. `i64`, `isize`            | decimal                   |
//! | unsigned       | `u8` .. `u64`, `usize`            | decimal                   |
//! | floating point | `f32`, `f64`                      | C `%g`                    |
//! | boolean        | `bool`                            | `True` / `False`          |
//!
//! References to any of these are values too, so `"text"`, `&name`, and `42`
//! can all be passed directly.

use std::io::{self, Write};

use crate::util::numfmt::format_g;

mod sealed {
    pub trait Sealed {}

    impl<T: Sealed + ?Sized> Sealed for &T {}
}

/// A primitive value the writer knows how to render.
///
/// No escaping is applied: text containing `<`, `&` or `"` must be escaped
/// by the caller.
pub trait XmlValue: sealed::Sealed {
    /// Writes the textual form of the value to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    fn write_xml<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()>;
}

impl<T: XmlValue + ?Sized> XmlValue for &T {
    fn write_xml<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        (**self).write_xml(out)
    }
}

impl sealed::Sealed for str {}

impl XmlValue for str {
    fn write_xml<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl sealed::Sealed for String {}

impl XmlValue for String {
    fn write_xml<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl sealed::Sealed for bool {}

impl XmlValue for bool {
    fn write_xml<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(if *self { b"True" } else { b"False" })
    }
}

impl sealed::Sealed for f64 {}

impl XmlValue for f64 {
    fn write_xml<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(format_g(*self).as_bytes())
    }
}

impl sealed::Sealed for f32 {}

impl XmlValue for f32 {
    fn write_xml<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(format_g(f64::from(*self)).as_bytes())
    }
}

macro_rules! impl_integer_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl XmlValue for $ty {
                fn write_xml<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
                    write!(out, "{self}")
                }
            }
        )*
    };
}

impl_integer_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn render<V: XmlValue>(value: V) -> String {
        let mut out = Vec::new();
        value.write_xml(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_is_written_verbatim() {
        assert_eq!(render("a < b & \"c\""), "a < b & \"c\"");
        assert_eq!(render(String::from("owned")), "owned");
        let borrowed = String::from("borrowed");
        assert_eq!(render(&borrowed), "borrowed");
    }

    #[test]
    fn test_booleans_are_capitalized() {
        assert_eq!(render(true), "True");
        assert_eq!(render(false), "False");
    }

    #[test]
    fn test_integers_are_decimal() {
        assert_eq!(render(42), "42");
        assert_eq!(render(-17_i64), "-17");
        assert_eq!(render(u32::MAX), "4294967295");
        assert_eq!(render(0_usize), "0");
    }

    #[test]
    fn test_floats_use_percent_g() {
        assert_eq!(render(2.5_f64), "2.5");
        assert_eq!(render(1.0e7_f64), "1e+07");
        assert_eq!(render(0.25_f32), "0.25");
    }
}
