//! # Ticket NFT Program
//!
//! Mints one uniquely numbered ticket per purchase and tracks each ticket's
//! holder and metadata URI. Minting is restricted to the collection
//! authority, which is handed to the payment handler during setup so that
//! tickets can only be created by a settled purchase.

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

declare_id!("29v29EyWNUaZfvUcABEVq83fuprXwYAQPTD7xyQaKg5D");

/// Main program module containing all instruction handlers
#[program]
pub mod ticket_nft {
    use super::*;

    /// Initialize the ticket collection
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `name` - Collection name (max 32 bytes)
    /// * `symbol` - Collection symbol (max 10 bytes)
    ///
    /// # Events
    /// * `CollectionInitialized` - Emitted when the collection is created
    pub fn initialize(ctx: Context<Initialize>, name: String, symbol: String) -> Result<()> {
        instructions::initialize(ctx, name, symbol)
    }

    /// Mint a new ticket to `recipient`
    ///
    /// # Returns
    /// * `Result<u64>` - The id of the minted ticket
    ///
    /// # Events
    /// * `Transfer` - Emitted with `from` set to the default key
    ///
    /// # Errors
    /// * `Unauthorized` - If caller is not the collection authority
    /// * `InvalidReceiver` - If recipient is the default key
    /// * `MetadataUriTooLong` - If the URI exceeds 200 bytes
    pub fn safe_mint(ctx: Context<SafeMint>, recipient: Pubkey, metadata_uri: String) -> Result<u64> {
        instructions::safe_mint(ctx, recipient, metadata_uri)
    }

    /// Transfer a ticket to another holder
    ///
    /// # Errors
    /// * `NotTicketOwner` - If signer does not hold the ticket
    /// * `InvalidReceiver` - If `to` is the default key
    pub fn transfer_ticket(ctx: Context<TransferTicket>, token_id: u64, to: Pubkey) -> Result<()> {
        instructions::transfer_ticket(ctx, token_id, to)
    }

    /// Get the holder of a ticket (view function)
    ///
    /// # Errors
    /// * `NonexistentToken` - If the ticket has not been minted
    pub fn owner_of(ctx: Context<GetTicket>, token_id: u64) -> Result<Pubkey> {
        instructions::owner_of(ctx, token_id)
    }

    /// Get the metadata URI of a ticket (view function)
    ///
    /// # Errors
    /// * `NonexistentToken` - If the ticket has not been minted
    pub fn token_uri(ctx: Context<GetTicket>, token_id: u64) -> Result<String> {
        instructions::token_uri(ctx, token_id)
    }

    /// Transfer collection authority (minting rights) to a new account
    ///
    /// # Events
    /// * `OwnershipTransferred` - Emitted when authority is transferred
    ///
    /// # Errors
    /// * `Unauthorized` - If caller is not the current authority
    /// * `InvalidAuthority` - If the new authority is the default key
    pub fn transfer_authority(ctx: Context<TransferAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::transfer_authority(ctx, new_authority)
    }
}
