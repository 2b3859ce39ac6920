//! Read-only instructions for the ticket NFT program

use anchor_lang::prelude::*;
use crate::instructions::GetTicket;
use crate::state::Ticket;

/// Get the current holder of a ticket
pub fn owner_of(ctx: Context<GetTicket>, token_id: u64) -> Result<Pubkey> {
    let ticket = Ticket::read(&ctx.accounts.ticket.to_account_info(), token_id)?;
    Ok(ticket.owner)
}

/// Get the metadata URI of a ticket
pub fn token_uri(ctx: Context<GetTicket>, token_id: u64) -> Result<String> {
    let ticket = Ticket::read(&ctx.accounts.ticket.to_account_info(), token_id)?;
    Ok(ticket.metadata_uri)
}
