//! Closed-value enums and their wire strings.
//!
//! Each enum decodes from its exact wire string only (case-sensitive); empty
//! and unknown input are rejected with [`EnumValueError`]. `Display`,
//! [`as_str`](Status::as_str) and serde all use the wire string.

use std::fmt;
use std::str::FromStr;

use crate::error::EnumValueError;

/// A closed-value enum with a fixed wire representation.
pub trait WireEnum: Sized + Copy + 'static {
    /// Rust name of the enum, used in error messages.
    const NAME: &'static str;

    /// All variants, in declaration order.
    fn all() -> &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_value(value: &str) -> Result<Self, EnumValueError>;
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::schemars::JsonSchema,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Exact-match lookup of a wire string.
            pub fn from_value(value: &str) -> Result<Self, EnumValueError> {
                match value {
                    "" => Err(EnumValueError::Empty {
                        enum_name: stringify!($name),
                    }),
                    $($wire => Ok($name::$variant),)+
                    other => Err(EnumValueError::Unknown {
                        enum_name: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl WireEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn from_value(value: &str) -> Result<Self, EnumValueError> {
                $name::from_value(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = EnumValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_value(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = EnumValueError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::from_value(value)
            }
        }

        impl $crate::record::FieldDisplay for $name {
            fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Build status of a bot.
    ///
    /// `READY_BASIC_TESTING` means the bot can be tested with exact-match
    /// utterances while the full build is still running.
    pub enum Status {
        Building = "BUILDING",
        Ready = "READY",
        ReadyBasicTesting = "READY_BASIC_TESTING",
        Failed = "FAILED",
        NotBuilt = "NOT_BUILT",
    }
}

wire_enum! {
    /// What the service does after a `PutBot`: save only, or save and build.
    /// The service defaults to `BUILD`.
    pub enum ProcessBehavior {
        Save = "SAVE",
        Build = "BUILD",
    }
}

wire_enum! {
    /// Target locale of a bot. Every intent used by the bot must support it.
    pub enum Locale {
        EnUs = "en-US",
        EnGb = "en-GB",
        DeDe = "de-DE",
    }
}

wire_enum! {
    /// How slot values are resolved against a slot type's enumeration values.
    pub enum SlotValueSelectionStrategy {
        /// Return the value entered by the user if it is similar to a slot value.
        OriginalValue = "ORIGINAL_VALUE",
        /// Return the first resolution value if there is one, otherwise null.
        TopResolution = "TOP_RESOLUTION",
    }
}

wire_enum! {
    pub enum ContentType {
        PlainText = "PlainText",
        Ssml = "SSML",
        CustomPayload = "CustomPayload",
    }
}

wire_enum! {
    pub enum SlotConstraint {
        Required = "Required",
        Optional = "Optional",
    }
}

wire_enum! {
    /// Whether slot values are obfuscated in conversation logs.
    pub enum ObfuscationSetting {
        None = "NONE",
        DefaultObfuscation = "DEFAULT_OBFUSCATION",
    }
}

wire_enum! {
    /// How an intent is fulfilled once all slots are elicited.
    pub enum FulfillmentActivityType {
        ReturnIntent = "ReturnIntent",
        CodeHook = "CodeHook",
    }
}

wire_enum! {
    /// Where conversation logs are delivered.
    pub enum Destination {
        CloudwatchLogs = "CLOUDWATCH_LOGS",
        S3 = "S3",
    }
}

wire_enum! {
    pub enum LogType {
        Audio = "AUDIO",
        Text = "TEXT",
    }
}

/// Name and allowed wire values of one enum, for listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EnumDescriptor {
    pub name: &'static str,
    pub values: Vec<&'static str>,
}

impl EnumDescriptor {
    fn of<E: WireEnum>() -> Self {
        Self {
            name: E::NAME,
            values: E::all().iter().map(|v| v.as_str()).collect(),
        }
    }
}

/// Every closed-value enum in the model.
pub fn catalog() -> Vec<EnumDescriptor> {
    vec![
        EnumDescriptor::of::<Status>(),
        EnumDescriptor::of::<ProcessBehavior>(),
        EnumDescriptor::of::<Locale>(),
        EnumDescriptor::of::<SlotValueSelectionStrategy>(),
        EnumDescriptor::of::<ContentType>(),
        EnumDescriptor::of::<SlotConstraint>(),
        EnumDescriptor::of::<ObfuscationSetting>(),
        EnumDescriptor::of::<FulfillmentActivityType>(),
        EnumDescriptor::of::<Destination>(),
        EnumDescriptor::of::<LogType>(),
    ]
}

/// Look up one enum by name (case-insensitive).
pub fn describe(name: &str) -> Option<EnumDescriptor> {
    catalog()
        .into_iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
}
