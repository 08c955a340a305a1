use std::{borrow::Cow, rc::Rc, sync::Arc};

use compact_str::CompactString;

/// The natural textual form of a value, as substituted into a document.
///
/// Absent values (`None`, JSON `null`) format to an empty string.
pub trait FormatValue {
    fn format_value(&self) -> String;
}

/// Format a resolved value with its [`FormatValue`] implementation.
///
/// This is the formatter [`render`](crate::render) and
/// [`Model::new`](crate::Model::new) use unless told otherwise.
pub fn default_formatter<V>(value: &V) -> String
where
    V: FormatValue + ?Sized,
{
    value.format_value()
}

/// Signature of [`default_formatter`] once instantiated for a value type.
pub type DefaultFormatter<V> = fn(&V) -> String;

impl FormatValue for str {
    fn format_value(&self) -> String {
        self.to_owned()
    }
}

impl FormatValue for String {
    fn format_value(&self) -> String {
        self.clone()
    }
}

impl FormatValue for Cow<'_, str> {
    fn format_value(&self) -> String {
        self.as_ref().to_owned()
    }
}

impl FormatValue for CompactString {
    fn format_value(&self) -> String {
        self.as_str().to_owned()
    }
}

impl<T> FormatValue for Option<T>
where
    T: FormatValue,
{
    fn format_value(&self) -> String {
        self.as_ref().map(T::format_value).unwrap_or_default()
    }
}

impl<T> FormatValue for &T
where
    T: FormatValue + ?Sized,
{
    fn format_value(&self) -> String {
        T::format_value(self)
    }
}

macro_rules! format_via_deref {
    ($($ptr:ident),*) => {
        $(
            impl<T> FormatValue for $ptr<T>
            where
                T: FormatValue + ?Sized,
            {
                fn format_value(&self) -> String {
                    T::format_value(self)
                }
            }
        )*
    };
}

format_via_deref!(Box, Rc, Arc);

macro_rules! format_via_display {
    ($($ty:ty),*) => {
        $(
            impl FormatValue for $ty {
                fn format_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

format_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

#[cfg(feature = "json")]
impl FormatValue for serde_json::Value {
    fn format_value(&self) -> String {
        use serde_json::Value;

        match self {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{default_formatter, FormatValue};

    #[test]
    fn absent_is_empty() {
        assert_eq!(default_formatter(&None::<&str>), "");
        assert_eq!(default_formatter(&Some(None::<u8>)), "");
        assert_eq!(default_formatter(&Some("x")), "x");
    }

    #[test]
    fn primitives() {
        assert_eq!(1u8.format_value(), "1");
        assert_eq!((-42i64).format_value(), "-42");
        assert_eq!(true.format_value(), "true");
        assert_eq!('#'.format_value(), "#");
        assert_eq!(2.5f64.format_value(), "2.5");
    }

    #[test]
    fn unsized_and_boxed() {
        assert_eq!(default_formatter("borrowed"), "borrowed");
        let boxed: Box<str> = "boxed".into();
        assert_eq!(boxed.format_value(), "boxed");
    }

    #[cfg(feature = "json")]
    #[test]
    fn json() {
        use serde_json::json;

        assert_eq!(json!(null).format_value(), "");
        assert_eq!(json!("Bob").format_value(), "Bob");
        assert_eq!(json!(1).format_value(), "1");
        assert_eq!(json!(false).format_value(), "false");
        assert_eq!(json!([1, "a"]).format_value(), r#"[1,"a"]"#);
    }
}
