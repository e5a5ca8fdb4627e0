//! Request and result records for the bot-building model API.
//!
//! This crate contains the data model exchanged with the service: bots,
//! intents, slot types, prompts, statements and the closed-value enums they
//! reference. Records carry no behavior beyond accessors, builders, a debug
//! rendering, equality and their wire encoding.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror, schemars.

pub mod enums;
pub mod error;
pub mod model;
pub mod record;
pub mod timestamp;

pub use enums::{
    ContentType, Destination, FulfillmentActivityType, Locale, LogType, ObfuscationSetting,
    ProcessBehavior, SlotConstraint, SlotValueSelectionStrategy, Status,
};
pub use error::EnumValueError;
