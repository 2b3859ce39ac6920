//! # Instructions Module
//!
//! Instruction handlers and account validation contexts for the ticket NFT
//! program.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

pub mod initialize;
pub mod safe_mint;
pub mod transfer_authority;
pub mod transfer_ticket;
pub mod views;

pub use initialize::*;
pub use safe_mint::*;
pub use transfer_authority::*;
pub use transfer_ticket::*;
pub use views::*;

/// Account validation context for initializing the collection
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Collection::INIT_SPACE,
        seeds = [COLLECTION_SEED],
        bump
    )]
    pub collection: Account<'info, Collection>,

    /// The initial minting authority
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Account validation context for minting a ticket
///
/// The ticket PDA is derived from the collection's counter so the address
/// always matches the id the handler assigns.
#[derive(Accounts)]
pub struct SafeMint<'info> {
    #[account(
        mut,
        seeds = [COLLECTION_SEED],
        bump = collection.bump
    )]
    pub collection: Account<'info, Collection>,

    #[account(
        init,
        payer = payer,
        space = 8 + Ticket::INIT_SPACE,
        seeds = [TICKET_SEED, collection.next_token_id.to_le_bytes().as_ref()],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    /// The collection authority (checked in the handler so the caller is logged)
    pub authority: Signer<'info>,

    /// Pays rent for the ticket account
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Account validation context for moving a ticket between holders
#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct TransferTicket<'info> {
    #[account(
        mut,
        seeds = [TICKET_SEED, token_id.to_le_bytes().as_ref()],
        bump = ticket.bump
    )]
    pub ticket: Account<'info, Ticket>,

    /// The current holder
    pub owner: Signer<'info>,
}

/// Account validation context for ticket views
#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct GetTicket<'info> {
    /// The ticket account; may not exist
    /// CHECK: address is pinned by the seeds, contents are read through `Ticket::read`
    #[account(
        seeds = [TICKET_SEED, token_id.to_le_bytes().as_ref()],
        bump
    )]
    pub ticket: UncheckedAccount<'info>,
}

/// Account validation context for transferring collection authority
#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    #[account(
        mut,
        seeds = [COLLECTION_SEED],
        bump = collection.bump
    )]
    pub collection: Account<'info, Collection>,

    /// The current authority
    pub authority: Signer<'info>,
}
