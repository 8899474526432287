use anchor_lang::prelude::*;

use crate::error::DiceError;

pub const ED25519_PUBKEY_LEN: usize = 32;
pub const ED25519_SIGNATURE_LEN: usize = 64;

/// Count byte, padding byte, then one offsets table of seven u16 fields.
const ED25519_OFFSETS_START: usize = 2;
const ED25519_OFFSETS_SIZE: usize = 14;

/// The single entry carried by a native ed25519 program instruction.
pub struct Ed25519Payload<'a> {
    pub public_key: &'a [u8],
    pub signature: &'a [u8],
    pub message: &'a [u8],
}

/// Unpacks native ed25519 instruction data holding exactly one signature
/// whose pubkey, signature and message all live in this instruction.
/// Entries referencing other instructions (index != u16::MAX) are rejected,
/// so the attestation cannot be stitched together across instructions.
pub fn unpack_ed25519_payload(data: &[u8]) -> Result<Ed25519Payload<'_>> {
    require!(
        data.len() >= ED25519_OFFSETS_START + ED25519_OFFSETS_SIZE,
        DiceError::Ed25519DataLength
    );
    require!(data[0] == 1, DiceError::Ed25519Header);

    let sig_offset = read_u16(data, 2) as usize;
    let sig_ix_index = read_u16(data, 4);
    let pubkey_offset = read_u16(data, 6) as usize;
    let pubkey_ix_index = read_u16(data, 8);
    let msg_offset = read_u16(data, 10) as usize;
    let msg_len = read_u16(data, 12) as usize;
    let msg_ix_index = read_u16(data, 14);

    require!(
        sig_ix_index == u16::MAX && pubkey_ix_index == u16::MAX && msg_ix_index == u16::MAX,
        DiceError::Ed25519Header
    );

    let public_key = data
        .get(pubkey_offset..pubkey_offset + ED25519_PUBKEY_LEN)
        .ok_or(DiceError::Ed25519DataLength)?;
    let signature = data
        .get(sig_offset..sig_offset + ED25519_SIGNATURE_LEN)
        .ok_or(DiceError::Ed25519DataLength)?;
    let message = data
        .get(msg_offset..msg_offset + msg_len)
        .ok_or(DiceError::Ed25519DataLength)?;

    Ok(Ed25519Payload {
        public_key,
        signature,
        message,
    })
}

// Callers have already checked that the offsets table is in bounds.
fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}
