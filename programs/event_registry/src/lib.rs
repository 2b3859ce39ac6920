//! # Event Registry Program
//!
//! The authoritative catalog of ticketed events and their sale bookkeeping.
//! Writes are restricted to the registry authority (event creation and status
//! changes) and to the configured sale recorder (sale recording); reads are open.
//!
//! ## Features
//! - Sequential event creation with organizer, price and supply cap
//! - Sale activation toggling by the registry authority
//! - Per-ticket buyer attribution written once at sale time
//! - Authority and sale recorder management
//!
//! ## Security
//! - Owner-only operations reject other callers and log the rejected key
//! - `tickets_sold` can never exceed `max_supply`

// Suppress warnings from Anchor's internal behavior
// These are framework-level warnings, not from our code
#![allow(deprecated)]
#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

// Re-export for easier access
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("49Q3GYHKeAmxayGdMRRnWEJxrvb8BMmwL1YEjBMt2Bsa");

/// Main program module containing all instruction handlers
#[program]
pub mod event_registry {
    use super::*;

    /// Initialize the event registry
    ///
    /// Creates the registry account. The signer becomes both the registry
    /// authority and the initial sale recorder.
    ///
    /// # Events
    /// * `RegistryInitialized` - Emitted when the registry is created
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Create a new event
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `name` - Display name (max 64 bytes)
    /// * `organizer` - Account credited with sale proceeds
    /// * `price` - Ticket price in the payment token's smallest unit (0 = free)
    /// * `max_supply` - Cap on tickets sold
    /// * `is_active` - Whether sales start enabled
    ///
    /// # Returns
    /// * `Result<u64>` - The id assigned to the new event
    ///
    /// # Events
    /// * `EventCreated` - Emitted when the event is stored
    ///
    /// # Errors
    /// * `Unauthorized` - If caller is not the registry authority
    /// * `InvalidOrganizer` - If organizer is the default key
    /// * `InvalidSupply` - If max_supply is zero
    /// * `NameTooLong` - If name exceeds 64 bytes
    pub fn create_event(
        ctx: Context<CreateEvent>,
        name: String,
        organizer: Pubkey,
        price: u64,
        max_supply: u64,
        is_active: bool,
    ) -> Result<u64> {
        instructions::create_event(ctx, name, organizer, price, max_supply, is_active)
    }

    /// Record a ticket sale against an event
    ///
    /// # Events
    /// * `SaleRecorded` - Emitted when the sale is stored
    ///
    /// # Errors
    /// * `Unauthorized` - If caller is not the configured sale recorder
    /// * `InvalidEventId` - If the event does not exist
    /// * `EventSoldOut` - If every ticket has already been sold
    pub fn record_sale(
        ctx: Context<RecordSale>,
        event_id: u64,
        token_id: u64,
        buyer: Pubkey,
    ) -> Result<()> {
        instructions::record_sale(ctx, event_id, token_id, buyer)
    }

    /// Get the full record of an event (view function)
    ///
    /// # Errors
    /// * `InvalidEventId` - If the event does not exist
    pub fn get_event_details(ctx: Context<GetEventDetails>, event_id: u64) -> Result<EventDetails> {
        instructions::get_event_details(ctx, event_id)
    }

    /// Get the buyer recorded for a ticket, or the default key if unsold (view function)
    ///
    /// # Errors
    /// * `InvalidEventId` - If the event does not exist
    pub fn get_ticket_buyer(
        ctx: Context<GetTicketBuyer>,
        event_id: u64,
        token_id: u64,
    ) -> Result<Pubkey> {
        instructions::get_ticket_buyer(ctx, event_id, token_id)
    }

    /// Get the id that the next created event will receive (view function)
    pub fn get_current_event_id(ctx: Context<GetCurrentEventId>) -> Result<u64> {
        Ok(ctx.accounts.registry.next_event_id)
    }

    /// Enable or disable ticket sales for an event
    ///
    /// # Events
    /// * `EventUpdated` - Emitted when the flag flips
    ///
    /// # Errors
    /// * `Unauthorized` - If caller is not the registry authority
    /// * `InvalidEventId` - If the event does not exist
    /// * `StatusAlreadySet` - If the event already has the desired status
    pub fn set_event_active_status(
        ctx: Context<SetEventActiveStatus>,
        event_id: u64,
        is_active: bool,
    ) -> Result<()> {
        instructions::set_event_active_status(ctx, event_id, is_active)
    }

    /// Designate the account allowed to record sales
    ///
    /// Deployment points this at the payment handler's config PDA.
    ///
    /// # Events
    /// * `SaleRecorderUpdated` - Emitted when the recorder changes
    ///
    /// # Errors
    /// * `Unauthorized` - If caller is not the registry authority
    /// * `InvalidAuthority` - If the new recorder is the default key
    pub fn set_sale_recorder(ctx: Context<SetSaleRecorder>, new_recorder: Pubkey) -> Result<()> {
        instructions::set_sale_recorder(ctx, new_recorder)
    }

    /// Transfer registry authority to a new account
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
