use anchor_lang::constant;

#[constant]
pub const COLLECTION_SEED: &[u8] = b"ticket_collection";

#[constant]
pub const TICKET_SEED: &[u8] = b"ticket";

#[constant]
pub const MAX_COLLECTION_NAME_LEN: usize = 32;

#[constant]
pub const MAX_SYMBOL_LEN: usize = 10;

/// Maximum length of a ticket metadata URI in bytes
#[constant]
pub const MAX_METADATA_URI_LEN: usize = 200;
