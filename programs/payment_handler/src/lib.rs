//! # Payment Handler Program
//!
//! Settles ticket purchases. A purchase pulls the ticket price from the
//! buyer under a prior delegate approval, mints the ticket through the
//! ticket NFT program, records the sale in the event registry and forwards
//! the funds to the event organizer, all in one transaction.
//!
//! ## Setup
//! The handler's config PDA must be the ticket collection authority and the
//! registry's sale recorder before purchases can settle.
//!
//! ## Security
//! - The handler never holds funds across transactions; its escrow balance
//!   is checked to be unchanged by every purchase
//! - Any failing step aborts the whole purchase

// Suppress warnings from Anchor's internal behavior
// These are framework-level warnings, not from our code
#![allow(deprecated)]
#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod settlement;
pub mod state;

// Re-export for easier access
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use settlement::*;
pub use state::*;

declare_id!("EcvRgwrQYLQnmhFjLGa6MbVdZ57o2q9ZoZmC5saczVEs");

/// Main program module containing all instruction handlers
#[program]
pub mod payment_handler {
    use super::*;

    /// Initialize the handler configuration
    ///
    /// Records the registry, collection and payment mint the handler settles
    /// against and creates the PDA-owned escrow token account.
    ///
    /// # Events
    /// * `HandlerInitialized` - Emitted when the handler is created
    ///
    /// # Errors
    /// * `PaymentMintMismatch` - If the payment mint does not use 6 decimals
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Purchase a ticket for an event
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `event_id` - The event to buy a ticket for
    /// * `recipient` - The account that receives the ticket
    /// * `metadata_uri` - Metadata URI stored on the ticket
    ///
    /// # Events
    /// * `TicketPurchased` - Emitted when the purchase settles
    ///
    /// # Errors
    /// * `InvalidEventId` - If the event does not exist
    /// * `EventNotActive` - If sales for the event are disabled
    /// * `EventSoldOut` - If no tickets remain
    /// * `PaymentFailed` - If the recipient is the default key, or minting or
    ///   sale recording is rejected
    /// * `InsufficientAllowance` - If the buyer approved less than the price
    pub fn purchase_ticket(
        ctx: Context<PurchaseTicket>,
        event_id: u64,
        recipient: Pubkey,
        metadata_uri: String,
    ) -> Result<()> {
        instructions::purchase_ticket(ctx, event_id, recipient, metadata_uri)
    }

    /// Hand minting rights for the ticket collection to another account
    ///
    /// # Events
    /// * `MinterReleased` - Emitted when minting rights move
    ///
    /// # Errors
    /// * `Unauthorized` - If caller is not the handler authority
    pub fn release_ticket_minter(
        ctx: Context<ReleaseTicketMinter>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::release_ticket_minter(ctx, new_authority)
    }

    /// Transfer handler authority to a new account
    ///
    /// # Events
    /// * `AuthorityTransferred` - Emitted when authority is transferred
    ///
    /// # Errors
    /// * `Unauthorized` - If caller is not the current authority
    /// * `InvalidAuthority` - If the new authority is the default key
    pub fn transfer_authority(ctx: Context<TransferAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::transfer_authority(ctx, new_authority)
    }
}
