pub mod constants;
pub mod ed25519;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("6mujqLP5JTRr7S3YCx55AGfeTBNegyRNLMNHh3DKUYmC");

#[program]
pub mod dice {
    use super::*;

    /// House funds its vault. Repeatable; balances accumulate.
    pub fn initialize(ctx: Context<Initialize>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount)
    }

    /// Player wagers `amount` lamports that the outcome lands below `roll`.
    pub fn place_bet(ctx: Context<PlaceBet>, seed: u128, roll: u8, amount: u64) -> Result<()> {
        ctx.accounts.create_bet(seed, roll, amount, &ctx.bumps)?;
        ctx.accounts.deposit(amount)
    }

    /// Settles a bet against the house signature carried by the ed25519
    /// instruction at index 0 of this transaction.
    pub fn resolve_bet(ctx: Context<ResolveBet>, sig: Vec<u8>) -> Result<()> {
        ctx.accounts.verify_ed25519_signature(&sig)?;
        ctx.accounts.settle(&sig, &ctx.bumps)
    }

    /// Returns the wager once the house has gone silent past the timeout.
    pub fn refund_bet(ctx: Context<RefundBet>) -> Result<()> {
        ctx.accounts.refund(&ctx.bumps)
    }
}
