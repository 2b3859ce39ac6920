use anchor_lang::constant;

#[constant]
pub const REGISTRY_SEED: &[u8] = b"event_registry";

#[constant]
pub const EVENT_SEED: &[u8] = b"event";

#[constant]
pub const TICKET_BUYER_SEED: &[u8] = b"ticket_buyer";

/// Maximum length of an event name in bytes
#[constant]
pub const MAX_EVENT_NAME_LEN: usize = 64;
