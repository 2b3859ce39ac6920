//! Initialize instruction for the payment handler program

use anchor_lang::prelude::*;
use crate::instructions::Initialize;
use crate::events::HandlerInitialized;
use crate::state::Collaborators;

/// Initialize the handler configuration and its custody account
///
/// The registry's sale recorder and the collection's authority still have
/// to be pointed at the config PDA before purchases can settle.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let authority = &ctx.accounts.authority;
    let clock = Clock::get()?;

    let collaborators = Collaborators {
        event_registry: ctx.accounts.registry.key(),
        ticket_collection: ctx.accounts.collection.key(),
        payment_mint: ctx.accounts.payment_mint.key(),
        escrow: ctx.accounts.escrow.key(),
    };

    config.initialize(
        authority.key(),
        collaborators,
        ctx.bumps.config,
        ctx.bumps.escrow,
        &clock,
    )?;

    emit!(HandlerInitialized {
        config: config.key(),
        authority: authority.key(),
        event_registry: config.event_registry,
        ticket_collection: config.ticket_collection,
        payment_mint: config.payment_mint,
        escrow: config.escrow,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Payment handler initialized: registry {}, collection {}, payment mint {}",
        config.event_registry,
        config.ticket_collection,
        config.payment_mint
    );

    Ok(())
}
