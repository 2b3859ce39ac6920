use anchor_lang::constant;

#[constant]
pub const HANDLER_SEED: &[u8] = b"payment_handler";

#[constant]
pub const ESCROW_SEED: &[u8] = b"escrow";

/// Fractional digits of the stablecoin used for ticket prices
#[constant]
pub const PAYMENT_TOKEN_DECIMALS: u8 = 6;
