//! # Error Module
//!
//! Custom error types for the payment handler program.

use anchor_lang::prelude::*;

/// Custom error codes for the payment handler program
#[error_code]
pub enum PaymentHandlerError {
    /// Caller is not the handler authority
    #[msg("Unauthorized: Only the handler authority can perform this action")]
    Unauthorized,

    /// Sales for the event are disabled
    #[msg("Event not active: Ticket sales for this event are disabled")]
    EventNotActive,

    /// Every ticket for the event has been sold
    #[msg("Event sold out: No tickets remain for this event")]
    EventSoldOut,

    /// Buyer's delegate approval to the handler is below the ticket price
    #[msg("Insufficient allowance: Buyer has not approved enough tokens for the handler")]
    InsufficientAllowance,

    /// A settlement step failed; the reason is logged before this error
    #[msg("Payment failed")]
    PaymentFailed,

    /// The collection no longer lists the handler as its minting authority
    #[msg("Minter unavailable: The handler is not the ticket collection authority")]
    MinterUnavailable,

    /// The registry no longer lists the handler as its sale recorder
    #[msg("Sale recorder unavailable: The handler is not the registry sale recorder")]
    SaleRecorderUnavailable,

    /// The proceeds account is not owned by the event organizer
    #[msg("Invalid organizer account: Token account is not owned by the event organizer")]
    InvalidOrganizerAccount,

    /// A token account owner does not match the signer
    #[msg("Invalid token account: Token account is not owned by the buyer")]
    InvalidTokenAccount,

    /// A token account is not denominated in the configured payment mint
    #[msg("Payment mint mismatch: Token account mint does not match the payment mint")]
    PaymentMintMismatch,

    /// The registry account is not the one the handler was configured with
    #[msg("Invalid registry: Registry account does not match handler configuration")]
    InvalidRegistry,

    /// The collection account is not the one the handler was configured with
    #[msg("Invalid collection: Collection account does not match handler configuration")]
    InvalidCollection,

    /// The escrow account is not the handler's custody account
    #[msg("Invalid custody account: Escrow does not match handler configuration")]
    InvalidCustodyAccount,

    /// The handler's custody balance changed across a purchase
    #[msg("Custody imbalance: Handler custody balance changed during settlement")]
    CustodyImbalance,

    /// The new authority is the default key
    #[msg("Invalid authority: The provided authority address is invalid")]
    InvalidAuthority,

    #[msg("Arithmetic error: Mathematical operation failed")]
    ArithmeticError,
}
