//! Release ticket minter instruction for the payment handler program

use anchor_lang::prelude::*;
use ticket_nft::cpi::accounts::TransferAuthority as TransferCollectionAuthority;
use crate::constants::HANDLER_SEED;
use crate::instructions::ReleaseTicketMinter;
use crate::events::MinterReleased;

/// Hand the collection's minting rights from the handler PDA to `new_authority`
///
/// Used when retiring or replacing a handler deployment. After this call
/// purchases fail with `PaymentFailed` until minting rights are restored.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `new_authority` - The account that receives minting rights
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn release_ticket_minter(ctx: Context<ReleaseTicketMinter>, new_authority: Pubkey) -> Result<()> {
    let config = &ctx.accounts.config;
    let clock = Clock::get()?;

    config.ensure_authority(ctx.accounts.authority.key())?;

    let bump = [config.bump];
    let seeds: [&[u8]; 2] = [HANDLER_SEED, &bump];
    let signer_seeds = [&seeds[..]];

    let cpi_accounts = TransferCollectionAuthority {
        collection: ctx.accounts.collection.to_account_info(),
        authority: config.to_account_info(),
    };
    let cpi_program = ctx.accounts.ticket_nft_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, &signer_seeds);

    ticket_nft::cpi::transfer_authority(cpi_ctx, new_authority)?;

    emit!(MinterReleased {
        collection: ctx.accounts.collection.key(),
        new_authority,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Minting rights for collection {} released to {}",
        ctx.accounts.collection.key(),
        new_authority
    );

    Ok(())
}
