//! Transfer authority instruction for the payment handler program

use anchor_lang::prelude::*;
use crate::instructions::TransferAuthority;
use crate::events::AuthorityTransferred;

/// Transfer handler authority to a new account
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `new_authority` - The public key of the new authority
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn transfer_authority(ctx: Context<TransferAuthority>, new_authority: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    config.ensure_authority(ctx.accounts.authority.key())?;

    let previous_authority = config.authority;
    config.transfer_authority(new_authority, &clock)?;

    emit!(AuthorityTransferred {
        config: config.key(),
        previous_authority,
        new_authority,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Handler authority transferred from {} to {}",
        previous_authority,
        new_authority
    );

    Ok(())
}
