//! # Error Module
//!
//! Custom error types for the ticket NFT program.

use anchor_lang::prelude::*;

/// Custom error codes for the ticket NFT program
#[error_code]
pub enum TicketNftError {
    /// Caller is not the collection authority
    #[msg("Unauthorized: Only the collection authority can perform this action")]
    Unauthorized,

    /// Mint or transfer to the default key
    #[msg("Invalid receiver: Tickets cannot be sent to the zero address")]
    InvalidReceiver,

    /// The ticket account does not exist
    #[msg("Nonexistent token: No ticket has been minted with this id")]
    NonexistentToken,

    /// Signer does not hold the ticket
    #[msg("Not ticket owner: Only the current holder can transfer this ticket")]
    NotTicketOwner,

    #[msg("Metadata URI too long: URI exceeds maximum allowed length")]
    MetadataUriTooLong,

    #[msg("Name too long: Collection name exceeds maximum allowed length")]
    NameTooLong,

    #[msg("Symbol too long: Collection symbol exceeds maximum allowed length")]
    SymbolTooLong,

    /// The new authority is the default key
    #[msg("Invalid authority: The provided authority address is invalid")]
    InvalidAuthority,

    #[msg("Arithmetic error: Mathematical operation failed")]
    ArithmeticError,
}
