//! Safe mint instruction for the ticket NFT program

use anchor_lang::prelude::*;
use crate::instructions::SafeMint;
use crate::events::Transfer;
use crate::state::Ticket;

/// Mint the next ticket to `recipient`
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `recipient` - The initial holder
/// * `metadata_uri` - Off-chain metadata pointer, stored as given
///
/// # Returns
/// * `Result<u64>` - The minted token id
pub fn safe_mint(ctx: Context<SafeMint>, recipient: Pubkey, metadata_uri: String) -> Result<u64> {
    let collection = &mut ctx.accounts.collection;
    let ticket = &mut ctx.accounts.ticket;
    let clock = Clock::get()?;

    collection.ensure_authority(ctx.accounts.authority.key())?;
    Ticket::validate_mint(&recipient, &metadata_uri)?;

    let token_id = collection.allocate_token_id(&clock)?;
    ticket.mint(token_id, recipient, metadata_uri, ctx.bumps.ticket, &clock)?;

    emit!(Transfer {
        from: Pubkey::default(),
        to: recipient,
        token_id,
    });

    msg!("Ticket {} minted to {}", token_id, recipient);

    Ok(token_id)
}
