//! Initialize instruction for the ticket NFT program

use anchor_lang::prelude::*;
use crate::instructions::Initialize;
use crate::events::CollectionInitialized;

/// Initialize the ticket collection
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `name` - Collection name
/// * `symbol` - Collection symbol
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn initialize(ctx: Context<Initialize>, name: String, symbol: String) -> Result<()> {
    let collection = &mut ctx.accounts.collection;
    let authority = &ctx.accounts.authority;
    let clock = Clock::get()?;

    collection.initialize(
        authority.key(),
        name.clone(),
        symbol.clone(),
        ctx.bumps.collection,
        &clock,
    )?;

    emit!(CollectionInitialized {
        collection: collection.key(),
        authority: authority.key(),
        name: name.clone(),
        symbol: symbol.clone(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Ticket collection {} ({}) initialized with authority: {}", name, symbol, authority.key());

    Ok(())
}
