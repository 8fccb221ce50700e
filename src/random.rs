use crate::Error;
use ark_std::rand::{CryptoRng, RngCore};
use num_bigint::BigUint;
use num_traits::Zero;

/// Samples an integer uniformly from `[0, max]`.
///
/// Draws `ceil(bits(max) / 8)` bytes, masks the unused high bits of the leading byte and
/// rejects anything above `max`. The mask keeps the acceptance rate above one half without
/// introducing modulo bias.
pub fn sample<R: RngCore + CryptoRng>(max: &BigUint, rng: &mut R) -> Result<BigUint, Error> {
    if max.is_zero() {
        return Ok(BigUint::zero());
    }

    let bits = max.bits();
    let byte_len = bits.div_ceil(8) as usize;
    let mask = 0xffu8 >> (byte_len as u64 * 8 - bits);
    let mut buffer = vec![0u8; byte_len];

    let mut rejected = 0usize;
    loop {
        rng.try_fill_bytes(&mut buffer)
            .map_err(|e| Error::Entropy(e.to_string()))?;
        buffer[0] &= mask;
        let candidate = BigUint::from_bytes_be(&buffer);
        if &candidate <= max {
            if rejected > 0 {
                log::trace!("sampler accepted after {rejected} rejections");
            }
            return Ok(candidate);
        }
        rejected += 1;
    }
}
