//! Twiddle factors and the merged-layer butterfly schedule.
//!
//! [`ZETAS`] is the root definition: `ζ^{BitRev₇(i)} · 2¹⁶ mod q` for the
//! primitive 256th root ζ = 17. The forward and inverse tables are laid out
//! for the merged network in [`crate::ntt`]: each 128-coefficient half owns a
//! block of slots, and each [`Stage`] names the slots one logical layer reads.
//! Both tables are generated from [`ZETAS`] at compile time.

use crate::{
    Q,
    reduce::{MONT, fqmul},
};

const Q64: i64 = Q as i64;

const fn pow_mod(mut base: i64, mut exp: i64, modulus: i64) -> i64 {
    let mut result: i64 = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        exp >>= 1;
        base = base * base % modulus;
    }
    result
}

const fn bitrev7(x: usize) -> usize {
    x.reverse_bits() >> (usize::BITS - 7)
}

/// Centred representative of `val mod q` in `[−(q−1)/2, (q−1)/2]`.
const fn centred(val: i64) -> i16 {
    let val = val.rem_euclid(Q64);
    if val > Q64 / 2 {
        (val - Q64) as i16
    } else {
        val as i16
    }
}

/// Twiddle factors in Montgomery form, bit-reversed indexing.
///
/// `ZETAS[i] = ζ^{BitRev₇(i)} · 2¹⁶  (mod q)`, centred to signed.
pub const ZETAS: [i16; 128] = {
    const ZETA: i64 = 17;

    let mut zetas = [0i16; 128];
    let mut i = 0;
    while i < 128 {
        zetas[i] = centred(pow_mod(ZETA, bitrev7(i) as i64, Q64) * (MONT as i64));
        i += 1;
    }
    zetas
};

/// `R² · 128⁻¹ mod q`: undoes the 2⁷ gain of the inverse network and leaves
/// every coefficient in Montgomery form.
pub const F_INV: i16 = centred(pow_mod(2, 32, Q64) * pow_mod(128, Q64 - 2, Q64));

/// One logical NTT layer inside a merged pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    /// `log2(len)`; layer 7 is the distance-128 layer, layer 1 distance 2.
    pub layer: u32,
    /// Butterfly distance in coefficients.
    pub len: usize,
    /// First slot of this stage inside a per-half block.
    pub offset: usize,
    /// Number of slots the stage occupies.
    pub width: usize,
}

impl Stage {
    const fn new(len: usize, offset: usize, width: usize) -> Self {
        Self {
            layer: len.trailing_zeros(),
            len,
            offset,
            width,
        }
    }

    /// Distinct twiddles the stage needs per 128-coefficient half.
    #[must_use]
    pub const fn groups(&self) -> usize {
        64 / self.len
    }

    /// How many lanes share one twiddle (1 for scalar broadcasts).
    #[must_use]
    pub const fn replication(&self) -> usize {
        self.width / self.groups()
    }

    /// Butterfly group (within a half) served by slot `slot` of this stage.
    ///
    /// Replicated stages are read as 8-lane vectors whose two 4-lane halves
    /// belong to different groups: lanes `0..4` hold the group of the first
    /// 4×4 tile of a quad, lanes `4..8` the group of the second tile.
    #[must_use]
    pub const fn group_of(&self, slot: usize) -> usize {
        if self.replication() == 1 {
            return slot;
        }
        let per_quad = 16 / self.len;
        let vectors_per_quad = per_quad / 2;
        let vector = slot / 8;
        let tile = (slot / 4) % 2;
        per_quad * (vector / vectors_per_quad) + vector % vectors_per_quad + vectors_per_quad * tile
    }

    /// Forward twiddle for group `group` of half `half`.
    #[must_use]
    pub const fn forward_zeta(&self, half: usize, group: usize) -> i16 {
        ZETAS[128 / self.len + half * self.groups() + group]
    }

    /// Inverse twiddle for group `group` of half `half`.
    #[must_use]
    pub const fn inverse_zeta(&self, half: usize, group: usize) -> i16 {
        ZETAS[2 * (128 / self.len) - 1 - half * self.groups() - group]
    }
}

/// Slots per half in [`FORWARD_ZETAS`].
pub const FORWARD_BLOCK: usize = 112;

/// Slot of the distance-128 twiddle in [`FORWARD_ZETAS`].
pub const FORWARD_TOP: usize = 15;

/// Per-half stages of the forward network, coarsest first.
pub const FORWARD_STAGES: [Stage; 6] = [
    Stage::new(64, 0, 1),
    Stage::new(32, 1, 2),
    Stage::new(16, 3, 4),
    Stage::new(8, 7, 8),
    Stage::new(4, 16, 64),
    Stage::new(2, 80, 32),
];

/// Slots per half in [`INVERSE_ZETAS`].
pub const INVERSE_BLOCK: usize = 136;

/// Slot of the distance-128 twiddle (pre-multiplied by [`F_INV`]).
pub const INVERSE_TOP: usize = 271;

/// Per-half stages of the inverse network, finest first.
pub const INVERSE_STAGES: [Stage; 6] = [
    Stage::new(2, 0, 32),
    Stage::new(4, 32, 64),
    Stage::new(8, 96, 32),
    Stage::new(16, 128, 4),
    Stage::new(32, 132, 2),
    Stage::new(64, 134, 1),
];

const fn fill_block<const LEN: usize>(
    mut table: [i16; LEN],
    stages: &[Stage; 6],
    block: usize,
    inverse: bool,
) -> [i16; LEN] {
    let mut h = 0;
    while h < 2 {
        let mut s = 0;
        while s < stages.len() {
            let st = stages[s];
            let mut slot = 0;
            while slot < st.width {
                let group = st.group_of(slot);
                table[h * block + st.offset + slot] = if inverse {
                    st.inverse_zeta(h, group)
                } else {
                    st.forward_zeta(h, group)
                };
                slot += 1;
            }
            s += 1;
        }
        h += 1;
    }
    table
}

/// Forward-network twiddles, two blocks of [`FORWARD_BLOCK`] slots.
pub static FORWARD_ZETAS: [i16; 2 * FORWARD_BLOCK] = {
    let mut t = fill_block([0i16; 2 * FORWARD_BLOCK], &FORWARD_STAGES, FORWARD_BLOCK, false);
    t[FORWARD_TOP] = ZETAS[1];
    // never read; mirrors its neighbour
    t[FORWARD_BLOCK + FORWARD_TOP] = t[FORWARD_BLOCK + FORWARD_TOP + 1];
    t
};

/// Inverse-network twiddles, two blocks of [`INVERSE_BLOCK`] slots.
pub static INVERSE_ZETAS: [i16; 2 * INVERSE_BLOCK] = {
    let mut t = fill_block([0i16; 2 * INVERSE_BLOCK], &INVERSE_STAGES, INVERSE_BLOCK, true);
    // never read; mirrors its neighbour
    t[INVERSE_BLOCK - 1] = t[INVERSE_BLOCK - 2];
    t[INVERSE_TOP] = fqmul(ZETAS[1], F_INV);
    t
};
