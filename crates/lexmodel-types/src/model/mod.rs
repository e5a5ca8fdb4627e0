//! Request, result and nested records.
//!
//! - [`common`]: prompts, statements, messages, code hooks and other shared pieces
//! - [`slot`]: slots and slot type values
//! - [`bot`]: `PutBot`, `GetBot`, `CreateBotVersion`
//! - [`intent`]: `PutIntent`
//! - [`slot_type`]: `PutSlotType`
//! - [`logs`]: conversation log settings

pub mod bot;
pub mod common;
pub mod intent;
pub mod logs;
pub mod slot;
pub mod slot_type;

pub use bot::{
    CreateBotVersionRequest, CreateBotVersionResult, GetBotRequest, GetBotResult, PutBotRequest,
    PutBotResult,
};
pub use common::{
    CodeHook, FollowUpPrompt, FulfillmentActivity, Intent, KendraConfiguration, Message, Prompt,
    Statement, Tag,
};
pub use intent::{PutIntentRequest, PutIntentResult};
pub use logs::LogSettingsRequest;
pub use slot::{
    EnumerationValue, Slot, SlotDefaultValue, SlotDefaultValueSpec, SlotTypeConfiguration,
    SlotTypeRegexConfiguration,
};
pub use slot_type::{PutSlotTypeRequest, PutSlotTypeResult};
