//! # State Module
//!
//! The payment handler keeps no per-purchase state. Its only account records
//! the collaborators it settles against and its administrator.

use anchor_lang::prelude::*;

use crate::errors::PaymentHandlerError;

/// Handler configuration; its PDA is also the signer for delegated
/// transfers, mints and sale recording
#[account]
#[derive(InitSpace, Default)]
pub struct HandlerConfig {
    /// Administrator of the handler
    pub authority: Pubkey,
    /// Registry account of the event registry program
    pub event_registry: Pubkey,
    /// Collection account of the ticket NFT program
    pub ticket_collection: Pubkey,
    /// Stablecoin mint accepted as payment
    pub payment_mint: Pubkey,
    /// Custody token account owned by this PDA
    pub escrow: Pubkey,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
    pub escrow_bump: u8,
}

/// Collaborator addresses captured at initialization
pub struct Collaborators {
    pub event_registry: Pubkey,
    pub ticket_collection: Pubkey,
    pub payment_mint: Pubkey,
    pub escrow: Pubkey,
}

impl HandlerConfig {
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        collaborators: Collaborators,
        bump: u8,
        escrow_bump: u8,
        clock: &Clock,
    ) -> Result<()> {
        self.authority = authority;
        self.event_registry = collaborators.event_registry;
        self.ticket_collection = collaborators.ticket_collection;
        self.payment_mint = collaborators.payment_mint;
        self.escrow = collaborators.escrow;
        self.created_at = clock.unix_timestamp;
        self.updated_at = clock.unix_timestamp;
        self.bump = bump;
        self.escrow_bump = escrow_bump;
        Ok(())
    }

    /// Reject any caller other than the handler authority
    pub fn ensure_authority(&self, caller: Pubkey) -> Result<()> {
        if caller != self.authority {
            msg!("Unauthorized account: {}", caller);
        }
        require_keys_eq!(caller, self.authority, PaymentHandlerError::Unauthorized);
        Ok(())
    }

    pub fn transfer_authority(&mut self, new_authority: Pubkey, clock: &Clock) -> Result<()> {
        require_keys_neq!(new_authority, Pubkey::default(), PaymentHandlerError::InvalidAuthority);
        self.authority = new_authority;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }
}
