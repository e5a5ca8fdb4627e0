//! Shared machinery for API records.
//!
//! Every record in [`crate::model`] is declared through [`api_record!`], which
//! generates the struct (all fields optional, wire names attached), its
//! accessors, and the debug rendering used by `Display`.
//!
//! Accessor shapes per field kind:
//!
//! | kind     | getter            | setter              | builder                              |
//! |----------|-------------------|---------------------|--------------------------------------|
//! | `text`   | `Option<&str>`    | `Option<String>`    | `impl Into<String>`                  |
//! | `copy`   | `Option<T>`       | `Option<T>`         | `T`                                  |
//! | `nested` | `Option<&T>`      | `Option<T>`         | `T`                                  |
//! | `list`   | `Option<&[T]>`    | `Option<Vec<T>>`    | `impl IntoIterator<Item = T>` (appends) |

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// Renders a field value inside a record's debug string.
///
/// Lists render as `[a, b]`, nested records recursively as `{...}`, enums as
/// their wire value and timestamps as RFC 3339.
pub trait FieldDisplay {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl FieldDisplay for String {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FieldDisplay for i32 {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FieldDisplay for bool {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FieldDisplay for DateTime<Utc> {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl<T: FieldDisplay> FieldDisplay for Vec<T> {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_field(f)?;
        }
        f.write_str("]")
    }
}

/// Declare an API record.
///
/// ```ignore
/// api_record! {
///     /// An intent reference.
///     pub struct Intent {
///         intent_name: String = "intentName" => text(set_intent_name, with_intent_name),
///     }
/// }
/// ```
///
/// A comma follows every rendered field in the debug string except the last
/// declared one, so `{name: Foo,}` is produced when a later field is unset.
macro_rules! api_record {
    (@accessors text $field:ident, $ty:ty, $set:ident, $with:ident) => {
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        pub fn $set(&mut self, value: Option<String>) {
            self.$field = value;
        }

        pub fn $with(mut self, value: impl Into<String>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };

    (@accessors copy $field:ident, $ty:ty, $set:ident, $with:ident) => {
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        pub fn $with(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };

    (@accessors nested $field:ident, $ty:ty, $set:ident, $with:ident) => {
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }

        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        pub fn $with(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };

    (@accessors list <$elem:ty> $field:ident, $ty:ty, $set:ident, $with:ident) => {
        pub fn $field(&self) -> Option<&[$elem]> {
            self.$field.as_deref()
        }

        /// `None` leaves the list unset; `Some(vec![])` stores an empty list.
        pub fn $set(&mut self, values: Option<Vec<$elem>>) {
            self.$field = values;
        }

        /// Appends to the list, allocating it first when unset.
        pub fn $with<I>(mut self, values: I) -> Self
        where
            I: IntoIterator<Item = $elem>,
        {
            let values = values.into_iter();
            let capacity = values.size_hint().0;
            self.$field
                .get_or_insert_with(|| Vec::with_capacity(capacity))
                .extend(values);
            self
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $wire:literal
                    => $kind:ident $(<$elem:ty>)? ($set:ident, $with:ident)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::schemars::JsonSchema,
        )]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Wire names of every field, in declaration order.
            pub const FIELD_NAMES: &'static [&'static str] = &[$($wire),*];

            pub fn new() -> Self {
                Self::default()
            }

            $(
                api_record! { @accessors $kind $(<$elem>)? $field, $ty, $set, $with }
            )*
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let field_count = Self::FIELD_NAMES.len();
                let mut position = 0usize;
                f.write_str("{")?;
                $(
                    position += 1;
                    if let Some(value) = &self.$field {
                        f.write_str($wire)?;
                        f.write_str(": ")?;
                        $crate::record::FieldDisplay::fmt_field(value, f)?;
                        if position < field_count {
                            f.write_str(",")?;
                        }
                    }
                )*
                f.write_str("}")
            }
        }

        impl $crate::record::FieldDisplay for $name {
            fn fmt_field(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };
}

pub(crate) use api_record;
