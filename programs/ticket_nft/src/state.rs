//! # State Module
//!
//! Account structures for the ticket NFT program.

use anchor_lang::prelude::*;

use crate::constants::{MAX_COLLECTION_NAME_LEN, MAX_METADATA_URI_LEN, MAX_SYMBOL_LEN};
use crate::errors::TicketNftError;

/// The collection account: minting authority and token id counter
#[account]
#[derive(InitSpace, Default)]
pub struct Collection {
    /// The only account allowed to mint (the payment handler PDA after setup)
    pub authority: Pubkey,
    #[max_len(32)]
    pub name: String,
    #[max_len(10)]
    pub symbol: String,
    /// Id the next minted ticket will receive
    pub next_token_id: u64,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

/// One minted ticket
#[account]
#[derive(InitSpace, Default)]
pub struct Ticket {
    pub token_id: u64,
    /// Current holder
    pub owner: Pubkey,
    /// Off-chain metadata pointer, fixed at mint
    #[max_len(200)]
    pub metadata_uri: String,
    pub minted_at: i64,
    pub bump: u8,
}

impl Collection {
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        name: String,
        symbol: String,
        bump: u8,
        clock: &Clock,
    ) -> Result<()> {
        require!(name.len() <= MAX_COLLECTION_NAME_LEN, TicketNftError::NameTooLong);
        require!(symbol.len() <= MAX_SYMBOL_LEN, TicketNftError::SymbolTooLong);

        self.authority = authority;
        self.name = name;
        self.symbol = symbol;
        self.next_token_id = 0;
        self.created_at = clock.unix_timestamp;
        self.updated_at = clock.unix_timestamp;
        self.bump = bump;
        Ok(())
    }

    /// Reject any caller other than the collection authority
    pub fn ensure_authority(&self, caller: Pubkey) -> Result<()> {
        if caller != self.authority {
            msg!("Unauthorized account: {}", caller);
        }
        require_keys_eq!(caller, self.authority, TicketNftError::Unauthorized);
        Ok(())
    }

    /// Hand out the next token id and advance the counter
    pub fn allocate_token_id(&mut self, clock: &Clock) -> Result<u64> {
        let token_id = self.next_token_id;
        self.next_token_id = token_id
            .checked_add(1)
            .ok_or(TicketNftError::ArithmeticError)?;
        self.updated_at = clock.unix_timestamp;
        Ok(token_id)
    }

    pub fn transfer_authority(&mut self, new_authority: Pubkey, clock: &Clock) -> Result<()> {
        require_keys_neq!(new_authority, Pubkey::default(), TicketNftError::InvalidAuthority);
        self.authority = new_authority;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }
}

impl Ticket {
    /// Check mint parameters before a token id is allocated
    pub fn validate_mint(recipient: &Pubkey, metadata_uri: &str) -> Result<()> {
        if *recipient == Pubkey::default() {
            msg!("Invalid receiver: {}", recipient);
            return err!(TicketNftError::InvalidReceiver);
        }
        require!(
            metadata_uri.len() <= MAX_METADATA_URI_LEN,
            TicketNftError::MetadataUriTooLong
        );
        Ok(())
    }

    pub fn mint(
        &mut self,
        token_id: u64,
        recipient: Pubkey,
        metadata_uri: String,
        bump: u8,
        clock: &Clock,
    ) -> Result<()> {
        Self::validate_mint(&recipient, &metadata_uri)?;

        self.token_id = token_id;
        self.owner = recipient;
        self.metadata_uri = metadata_uri;
        self.minted_at = clock.unix_timestamp;
        self.bump = bump;
        Ok(())
    }

    /// Move the ticket to a new holder
    pub fn transfer(&mut self, from: Pubkey, to: Pubkey) -> Result<()> {
        require_keys_eq!(from, self.owner, TicketNftError::NotTicketOwner);
        require_keys_neq!(to, Pubkey::default(), TicketNftError::InvalidReceiver);
        self.owner = to;
        Ok(())
    }

    /// Deserialize a ticket account, reporting `NonexistentToken` when it was never minted
    pub fn read(info: &AccountInfo, token_id: u64) -> Result<Ticket> {
        if info.data_is_empty() || info.owner != &crate::ID {
            msg!("Nonexistent token: {}", token_id);
            return err!(TicketNftError::NonexistentToken);
        }

        let data = info.try_borrow_data()?;
        let ticket = Ticket::try_deserialize(&mut &data[..])?;
        require_eq!(ticket.token_id, token_id, TicketNftError::NonexistentToken);
        Ok(ticket)
    }
}
