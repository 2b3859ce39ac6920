//! # Events Module
//!
//! Event definitions emitted by the payment handler program.

use anchor_lang::prelude::*;

/// Event emitted when the handler is initialized
#[event]
pub struct HandlerInitialized {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub event_registry: Pubkey,
    pub ticket_collection: Pubkey,
    pub payment_mint: Pubkey,
    pub escrow: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a ticket purchase settles
#[event]
pub struct TicketPurchased {
    pub event_id: u64,
    /// The account that paid
    pub buyer: Pubkey,
    /// The account that received the ticket
    pub recipient: Pubkey,
    pub token_id: u64,
    /// Amount forwarded to the organizer
    pub price: u64,
    pub timestamp: i64,
}

/// Event emitted when the handler gives up collection authority
#[event]
pub struct MinterReleased {
    pub collection: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when handler authority is transferred
#[event]
pub struct AuthorityTransferred {
    pub config: Pubkey,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}
