//! Cycle-counter generator: fast, not cryptographic.

use rand::RngCore;
use zeroize::Zeroize;

use super::hw;

// Odd 64-bit multipliers; the counter picks one per step.
const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0x2545_f491_4f6c_dd1d,
    0x5851_f42d_4c95_7f2d,
];

/// Generator seeded from the CPU cycle counter, mixing a fresh counter read
/// into its state on every step.
///
/// State is owned by the instance and wiped on drop.
pub struct CycleRng {
    state: u64,
}

impl CycleRng {
    pub fn new() -> Self {
        Self::with_seed(hw::counter())
    }

    pub fn with_seed(seed: u64) -> Self {
        CycleRng { state: seed }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        let ent = hw::counter();

        // Mix entropy into multiplier selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // State transition: rotate, multiply, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Default for CycleRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for CycleRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl Drop for CycleRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
