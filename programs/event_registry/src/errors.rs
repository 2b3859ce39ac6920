//! # Error Module
//!
//! Custom error types for the event registry program.

use anchor_lang::prelude::*;

/// Custom error codes for the event registry program
#[error_code]
pub enum EventRegistryError {
    /// Caller is not the registry authority (or not the sale recorder for sales)
    #[msg("Unauthorized: caller is not permitted to perform this action")]
    Unauthorized,

    /// Organizer is the default key
    #[msg("Invalid organizer: Organizer cannot be zero address")]
    InvalidOrganizer,

    /// Max supply is zero
    #[msg("Invalid supply: Max supply must be greater than zero")]
    InvalidSupply,

    /// Event name does not fit in the event account
    #[msg("Name too long: Event name exceeds maximum allowed length")]
    NameTooLong,

    /// The event id has not been assigned yet
    #[msg("Invalid event id: No event exists with this id")]
    InvalidEventId,

    /// Every ticket for the event has been sold
    #[msg("Event sold out: Event already sold out")]
    EventSoldOut,

    /// Status toggle to the value the event already has
    #[msg("Update failed: Status is already set to the desired value")]
    StatusAlreadySet,

    /// The new authority or recorder is the default key
    #[msg("Invalid authority: The provided authority address is invalid")]
    InvalidAuthority,

    #[msg("Arithmetic error: Mathematical operation failed")]
    ArithmeticError,
}
