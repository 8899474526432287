use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::error::DiceError;
use crate::state::Bet;
use crate::{BET_SEED, REFUND_TIMEOUT_SLOTS, VAULT_SEED};

#[derive(Accounts)]
pub struct RefundBet<'info> {
    #[account(mut)]
    pub player: Signer<'info>,
    /// CHECK: only anchors the vault derivation, never read or written
    pub house: UncheckedAccount<'info>,
    #[account(
        mut,
        seeds = [VAULT_SEED, house.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,
    #[account(
        mut,
        close = player,
        has_one = player,
        seeds = [BET_SEED, vault.key().as_ref(), bet.seed.to_le_bytes().as_ref()],
        bump = bet.bump,
    )]
    pub bet: Account<'info, Bet>,
    pub system_program: Program<'info, System>,
}

impl<'info> RefundBet<'info> {
    pub fn refund(&mut self, bumps: &RefundBetBumps) -> Result<()> {
        let elapsed = Clock::get()?.slot.saturating_sub(self.bet.slot);
        require!(elapsed > REFUND_TIMEOUT_SLOTS, DiceError::TimeoutNotElapsed);

        let seeds: &[&[&[u8]]] = &[&[VAULT_SEED, self.house.key.as_ref(), &[bumps.vault]]];
        let cpi_ctx = CpiContext::new_with_signer(
            self.system_program.to_account_info(),
            Transfer {
                from: self.vault.to_account_info(),
                to: self.player.to_account_info(),
            },
            seeds,
        );
        transfer(cpi_ctx, self.bet.amount)
    }
}
