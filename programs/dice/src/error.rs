use anchor_lang::prelude::*;

#[error_code]
pub enum DiceError {
    #[msg("Roll target must lie strictly between 2 and 96")]
    RollOutOfRange,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Instruction at index 0 is not the ed25519 program")]
    Ed25519Program,
    #[msg("Ed25519 instruction must not reference accounts")]
    Ed25519Accounts,
    #[msg("Ed25519 instruction data is truncated")]
    Ed25519DataLength,
    #[msg("Ed25519 instruction must carry exactly one self-contained signature")]
    Ed25519Header,
    #[msg("Signature was not produced by the house key")]
    Ed25519Pubkey,
    #[msg("Signature does not match the one submitted for settlement")]
    Ed25519Signature,
    #[msg("Signed message does not match the bet")]
    Ed25519Message,
    #[msg("Refund timeout has not elapsed")]
    TimeoutNotElapsed,
    #[msg("Arithmetic overflow")]
    Overflow,
}
