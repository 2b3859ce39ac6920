//! # Events Module
//!
//! Event definitions emitted by the event registry program so off-chain
//! indexers and the web frontend can follow the catalog.

use anchor_lang::prelude::*;

/// Event emitted when the registry is initialized
#[event]
pub struct RegistryInitialized {
    /// The registry account
    pub registry: Pubkey,
    /// The authority of the registry
    pub authority: Pubkey,
    /// Timestamp when initialized
    pub timestamp: i64,
}

/// Event emitted when a new event is created
#[event]
pub struct EventCreated {
    /// The registry account
    pub registry: Pubkey,
    /// The id assigned to the event
    pub event_id: u64,
    /// Display name
    pub name: String,
    /// Account credited with sale proceeds
    pub organizer: Pubkey,
    /// Ticket price in the payment token's smallest unit
    pub price: u64,
    /// Cap on tickets sold
    pub max_supply: u64,
    /// Timestamp when created
    pub timestamp: i64,
}

/// Event emitted when an event's sale status flips
#[event]
pub struct EventUpdated {
    pub event_id: u64,
    /// The new sale status
    pub is_active: bool,
    pub timestamp: i64,
}

/// Event emitted when a ticket sale is recorded
#[event]
pub struct SaleRecorded {
    pub event_id: u64,
    /// The ticket token id sold
    pub token_id: u64,
    /// The purchasing account
    pub buyer: Pubkey,
    /// Tickets sold after this sale
    pub tickets_sold: u64,
    pub timestamp: i64,
}

/// Event emitted when the sale recorder changes
#[event]
pub struct SaleRecorderUpdated {
    pub registry: Pubkey,
    pub previous_recorder: Pubkey,
    pub new_recorder: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when registry authority is transferred
#[event]
pub struct AuthorityTransferred {
    /// The registry account
    pub registry: Pubkey,
    /// The previous authority
    pub previous_authority: Pubkey,
    /// The new authority
    pub new_authority: Pubkey,
    /// Timestamp when transferred
    pub timestamp: i64,
}
