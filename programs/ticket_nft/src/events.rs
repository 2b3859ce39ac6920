//! # Events Module
//!
//! Event definitions emitted by the ticket NFT program.

use anchor_lang::prelude::*;

/// Event emitted when the collection is initialized
#[event]
pub struct CollectionInitialized {
    pub collection: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub symbol: String,
    pub timestamp: i64,
}

/// Event emitted whenever a ticket changes hands
///
/// Mints are reported with `from` set to the default key.
#[event]
pub struct Transfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub token_id: u64,
}

/// Event emitted when collection authority is transferred
#[event]
pub struct OwnershipTransferred {
    pub collection: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}
