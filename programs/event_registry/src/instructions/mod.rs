//! # Instructions Module
//!
//! Instruction handlers and account validation contexts for the event
//! registry program.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

pub mod create_event;
pub mod initialize;
pub mod record_sale;
pub mod set_event_active_status;
pub mod set_sale_recorder;
pub mod transfer_authority;
pub mod views;

// Re-export instruction functions
pub use create_event::*;
pub use initialize::*;
pub use record_sale::*;
pub use set_event_active_status::*;
pub use set_sale_recorder::*;
pub use transfer_authority::*;
pub use views::*;

/// Account validation context for initializing the registry
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The registry account to be created
    #[account(
        init,
        payer = authority,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    /// The authority who will own the registry
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Account validation context for creating an event
///
/// The event PDA is derived from the registry's current counter, so the
/// account address always matches the id the handler assigns.
#[derive(Accounts)]
pub struct CreateEvent<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// The event account to be created
    #[account(
        init,
        payer = authority,
        space = 8 + EventRecord::INIT_SPACE,
        seeds = [EVENT_SEED, registry.next_event_id.to_le_bytes().as_ref()],
        bump
    )]
    pub event: Account<'info, EventRecord>,

    /// The registry authority (checked in the handler so the caller is logged)
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Account validation context for recording a sale
#[derive(Accounts)]
#[instruction(event_id: u64, token_id: u64)]
pub struct RecordSale<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// The event account; may not exist
    /// CHECK: address is pinned by the seeds, contents go through `EventRecord::read` and `write`
    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump
    )]
    pub event: UncheckedAccount<'info>,

    /// Buyer attribution; `init` makes a second sale of the same ticket fail
    #[account(
        init,
        payer = payer,
        space = 8 + TicketBuyer::INIT_SPACE,
        seeds = [
            TICKET_BUYER_SEED,
            event_id.to_le_bytes().as_ref(),
            token_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub ticket_buyer: Account<'info, TicketBuyer>,

    /// The configured sale recorder (the payment handler PDA in production)
    pub recorder: Signer<'info>,

    /// Pays rent for the buyer attribution account
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Account validation context for toggling an event's sale status
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct SetEventActiveStatus<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// The event account; may not exist
    /// CHECK: address is pinned by the seeds, contents go through `EventRecord::read` and `write`
    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump
    )]
    pub event: UncheckedAccount<'info>,

    pub authority: Signer<'info>,
}

/// Account validation context for changing the sale recorder
#[derive(Accounts)]
pub struct SetSaleRecorder<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    pub authority: Signer<'info>,
}

/// Account validation context for transferring authority
#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    /// The registry account whose authority will be transferred
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// The current authority
    pub authority: Signer<'info>,
}

/// Account validation context for reading an event (view function)
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct GetEventDetails<'info> {
    /// The event account; may not exist
    /// CHECK: address is pinned by the seeds, contents are read through `EventRecord::read`
    #[account(
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump
    )]
    pub event: UncheckedAccount<'info>,
}

/// Account validation context for reading a ticket buyer (view function)
#[derive(Accounts)]
#[instruction(event_id: u64, token_id: u64)]
pub struct GetTicketBuyer<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// The buyer attribution account; absent when the ticket is unsold
    /// CHECK: address is pinned by the seeds, contents are read through `TicketBuyer::read_buyer`
    #[account(
        seeds = [
            TICKET_BUYER_SEED,
            event_id.to_le_bytes().as_ref(),
            token_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub ticket_buyer: UncheckedAccount<'info>,
}

/// Account validation context for reading the event counter (view function)
#[derive(Accounts)]
pub struct GetCurrentEventId<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
}
