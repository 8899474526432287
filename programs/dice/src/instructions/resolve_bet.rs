use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::load_instruction_at_checked;
use anchor_lang::solana_program::{self, ed25519_program, hash::hash};
use anchor_lang::system_program::{transfer, Transfer};

use crate::ed25519::unpack_ed25519_payload;
use crate::error::DiceError;
use crate::state::Bet;
use crate::{BET_SEED, BPS_DENOMINATOR, HOUSE_EDGE_BPS, VAULT_SEED};

#[derive(Accounts)]
pub struct ResolveBet<'info> {
    #[account(mut)]
    pub house: Signer<'info>,
    /// CHECK: receives the payout and the closed bet's rent, nothing else
    #[account(mut)]
    pub player: UncheckedAccount<'info>,
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
    /// CHECK: pinned to the instructions sysvar by the address constraint
    #[account(address = solana_program::sysvar::instructions::ID)]
    pub instruction_sysvar: AccountInfo<'info>,
    pub system_program: Program<'info, System>,
}

impl<'info> ResolveBet<'info> {
    /// The transaction must open with a native ed25519 instruction proving
    /// the house signed this bet's exact message. Reading it back through
    /// the instructions sysvar ties the attestation to this transaction.
    pub fn verify_ed25519_signature(&self, sig: &[u8]) -> Result<()> {
        let ix = load_instruction_at_checked(0, &self.instruction_sysvar.to_account_info())
            .map_err(|_| DiceError::Ed25519Program)?;

        require_keys_eq!(ix.program_id, ed25519_program::ID, DiceError::Ed25519Program);
        require_eq!(ix.accounts.len(), 0, DiceError::Ed25519Accounts);

        let payload = unpack_ed25519_payload(&ix.data)?;

        require!(
            payload.public_key == self.house.key().as_ref(),
            DiceError::Ed25519Pubkey
        );
        require!(payload.signature == sig, DiceError::Ed25519Signature);
        require!(
            payload.message == self.bet.to_slice().as_slice(),
            DiceError::Ed25519Message
        );

        Ok(())
    }

    pub fn settle(&mut self, sig: &[u8], bumps: &ResolveBetBumps) -> Result<()> {
        let outcome = roll_from_signature(sig);

        if self.bet.roll > outcome {
            let payout = win_payout(self.bet.amount)?;

            let seeds: &[&[&[u8]]] = &[&[VAULT_SEED, self.house.key.as_ref(), &[bumps.vault]]];
            let cpi_ctx = CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.player.to_account_info(),
                },
                seeds,
            );
            transfer(cpi_ctx, payout)?;
        }

        Ok(())
    }
}

/// Outcome in 1..=100 derived from the signature: sha256 it, fold the two
/// little-endian u128 halves with wrapping addition, reduce mod 100.
pub fn roll_from_signature(sig: &[u8]) -> u8 {
    let digest = hash(sig).to_bytes();

    let mut half = [0u8; 16];
    half.copy_from_slice(&digest[0..16]);
    let lower = u128::from_le_bytes(half);
    half.copy_from_slice(&digest[16..32]);
    let upper = u128::from_le_bytes(half);

    (lower.wrapping_add(upper) % 100) as u8 + 1
}

/// Lamports paid to the player on a win, after the house edge.
pub fn win_payout(amount: u64) -> Result<u64> {
    let payout = (amount as u128)
        .checked_mul((BPS_DENOMINATOR - HOUSE_EDGE_BPS) as u128)
        .ok_or(DiceError::Overflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(DiceError::Overflow)? as u64;

    Ok(payout)
}
