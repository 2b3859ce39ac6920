//! Transfer ticket instruction for the ticket NFT program

use anchor_lang::prelude::*;
use crate::instructions::TransferTicket;
use crate::events::Transfer;

/// Move a ticket from its current holder to `to`
pub fn transfer_ticket(ctx: Context<TransferTicket>, token_id: u64, to: Pubkey) -> Result<()> {
    let ticket = &mut ctx.accounts.ticket;
    let from = ctx.accounts.owner.key();

    ticket.transfer(from, to)?;

    emit!(Transfer { from, to, token_id });

    msg!("Ticket {} transferred from {} to {}", token_id, from, to);

    Ok(())
}
