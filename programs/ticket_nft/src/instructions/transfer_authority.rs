//! Transfer authority instruction for the ticket NFT program

use anchor_lang::prelude::*;
use crate::instructions::TransferAuthority;
use crate::events::OwnershipTransferred;

/// Transfer collection authority to a new account
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `new_authority` - The public key of the new authority
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn transfer_authority(ctx: Context<TransferAuthority>, new_authority: Pubkey) -> Result<()> {
    let collection = &mut ctx.accounts.collection;
    let clock = Clock::get()?;

    collection.ensure_authority(ctx.accounts.authority.key())?;

    let previous_owner = collection.authority;
    collection.transfer_authority(new_authority, &clock)?;

    emit!(OwnershipTransferred {
        collection: collection.key(),
        previous_owner,
        new_owner: new_authority,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Collection authority transferred from {} to {}",
        previous_owner,
        new_authority
    );

    Ok(())
}
