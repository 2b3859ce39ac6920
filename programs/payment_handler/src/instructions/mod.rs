//! # Instructions Module
//!
//! Instruction handlers and account validation contexts for the payment
//! handler program.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use event_registry::{program::EventRegistry, Registry, EVENT_SEED};
use ticket_nft::{program::TicketNft, Collection};

use crate::constants::*;
use crate::errors::PaymentHandlerError;
use crate::state::*;

pub mod initialize;
pub mod purchase_ticket;
pub mod release_ticket_minter;
pub mod transfer_authority;

pub use initialize::*;
pub use purchase_ticket::*;
pub use release_ticket_minter::*;
pub use transfer_authority::*;

/// Account validation context for initializing the handler
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + HandlerConfig::INIT_SPACE,
        seeds = [HANDLER_SEED],
        bump
    )]
    pub config: Account<'info, HandlerConfig>,

    /// Custody account for funds in flight, owned by the config PDA
    #[account(
        init,
        payer = authority,
        seeds = [ESCROW_SEED],
        bump,
        token::mint = payment_mint,
        token::authority = config
    )]
    pub escrow: Account<'info, TokenAccount>,

    #[account(
        constraint = payment_mint.decimals == PAYMENT_TOKEN_DECIMALS @ PaymentHandlerError::PaymentMintMismatch
    )]
    pub payment_mint: Account<'info, Mint>,

    /// The event registry this handler records sales in
    pub registry: Account<'info, Registry>,

    /// The ticket collection this handler mints from
    pub collection: Account<'info, Collection>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Account validation context for purchasing a ticket
///
/// `ticket_buyer` and `ticket` are created by the registry and NFT programs
/// during settlement; their addresses are checked by those programs.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct PurchaseTicket<'info> {
    #[account(
        seeds = [HANDLER_SEED],
        bump = config.bump,
        has_one = escrow @ PaymentHandlerError::InvalidCustodyAccount
    )]
    pub config: Account<'info, HandlerConfig>,

    /// The paying account; also pays rent for the new ticket accounts
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        constraint = buyer_token_account.owner == buyer.key() @ PaymentHandlerError::InvalidTokenAccount,
        constraint = buyer_token_account.mint == config.payment_mint @ PaymentHandlerError::PaymentMintMismatch
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub escrow: Account<'info, TokenAccount>,

    /// Proceeds account; its owner is checked against the event organizer
    #[account(
        mut,
        constraint = organizer_token_account.mint == config.payment_mint @ PaymentHandlerError::PaymentMintMismatch
    )]
    pub organizer_token_account: Account<'info, TokenAccount>,

    #[account(address = config.event_registry @ PaymentHandlerError::InvalidRegistry)]
    pub registry: Account<'info, Registry>,

    /// The event account; may not exist
    /// CHECK: address is pinned by the registry program's seeds, contents are read through `EventRecord::read`
    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump,
        seeds::program = event_registry_program.key()
    )]
    pub event: UncheckedAccount<'info>,

    /// CHECK: initialized and address-checked by the event registry in `record_sale`
    #[account(mut)]
    pub ticket_buyer: UncheckedAccount<'info>,

    #[account(mut, address = config.ticket_collection @ PaymentHandlerError::InvalidCollection)]
    pub collection: Account<'info, Collection>,

    /// CHECK: initialized and address-checked by the ticket NFT program in `safe_mint`
    #[account(mut)]
    pub ticket: UncheckedAccount<'info>,

    pub event_registry_program: Program<'info, EventRegistry>,
    pub ticket_nft_program: Program<'info, TicketNft>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Account validation context for handing minting rights back
#[derive(Accounts)]
pub struct ReleaseTicketMinter<'info> {
    #[account(
        seeds = [HANDLER_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, HandlerConfig>,

    #[account(mut, address = config.ticket_collection @ PaymentHandlerError::InvalidCollection)]
    pub collection: Account<'info, Collection>,

    /// The handler authority
    pub authority: Signer<'info>,

    pub ticket_nft_program: Program<'info, TicketNft>,
}

/// Account validation context for transferring handler authority
#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    #[account(
        mut,
        seeds = [HANDLER_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, HandlerConfig>,

    /// The current authority
    pub authority: Signer<'info>,
}
