use anchor_lang::prelude::*;

#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

#[constant]
pub const BET_SEED: &[u8] = b"bet";

/// House edge retained from winning payouts, in basis points.
#[constant]
pub const HOUSE_EDGE_BPS: u64 = 150;

/// Slots that must elapse after placement before a bet becomes refundable.
#[constant]
pub const REFUND_TIMEOUT_SLOTS: u64 = 1000;

pub const BPS_DENOMINATOR: u64 = 10_000;
