//! Initialize instruction for the event registry program

use anchor_lang::prelude::*;
use crate::instructions::Initialize;
use crate::events::RegistryInitialized;

/// Initialize the event registry
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let authority = &ctx.accounts.authority;
    let clock = Clock::get()?;

    registry.initialize(authority.key(), ctx.bumps.registry, &clock)?;

    emit!(RegistryInitialized {
        registry: registry.key(),
        authority: authority.key(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Event registry initialized with authority: {}", authority.key());

    Ok(())
}
