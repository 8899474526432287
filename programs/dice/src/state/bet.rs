use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Bet {
    pub player: Pubkey,
    pub seed: u128,
    pub slot: u64,
    pub amount: u64,
    pub roll: u8,
    pub bump: u8,
}

impl Bet {
    /// The exact bytes the house signs: player key, then seed, slot and
    /// amount little-endian, then roll and bump. 66 bytes; field order,
    /// widths and endianness are part of the wire contract.
    pub fn to_slice(&self) -> Vec<u8> {
        let mut message = self.player.to_bytes().to_vec();
        message.extend_from_slice(&self.seed.to_le_bytes());
        message.extend_from_slice(&self.slot.to_le_bytes());
        message.extend_from_slice(&self.amount.to_le_bytes());
        message.extend_from_slice(&[self.roll, self.bump]);
        message
    }
}
