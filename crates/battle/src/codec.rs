//! Mixed-radix state codec.
//!
//! A battle is eight digits, most significant first:
//! `(agent element, agent hp, agent bench element, agent bench hp,
//!   opponent element, opponent hp, opponent bench element, opponent bench hp)`.
//! Ids therefore grow in lexicographic order of the digit tuple.

use skirmish_core::*;

/// Number of digits in an encoded battle.
pub const N_DIGITS: usize = 8;

/// Base of each digit.
pub const RADICES: [usize; N_DIGITS] = [
    N_ELEMENTS, N_HEALTH, N_ELEMENTS, N_HEALTH, N_ELEMENTS, N_HEALTH, N_ELEMENTS, N_HEALTH,
];

/// Size of the state space.
pub const fn num_states() -> usize {
    let mut n = 1;
    let mut i = 0;
    while i < N_DIGITS {
        n *= RADICES[i];
        i += 1;
    }
    n
}

/// Digits to id. Fails if any digit is outside its base.
pub fn encode(digits: [u8; N_DIGITS]) -> anyhow::Result<StateId> {
    match digits
        .iter()
        .zip(RADICES.iter())
        .position(|(&d, &base)| d as usize >= base)
    {
        Some(i) => Err(anyhow::anyhow!(
            "digit {} = {} out of range for base {} in {:?}",
            i,
            digits[i],
            RADICES[i],
            digits
        )),
        None => Ok(pack(digits)),
    }
}

/// Id to digits. Fails if `id >= num_states()`.
pub fn decode(id: StateId) -> anyhow::Result<[u8; N_DIGITS]> {
    if id >= num_states() {
        return Err(anyhow::anyhow!("state id {} out of range 0..{}", id, num_states()));
    }
    let mut digits = [0u8; N_DIGITS];
    let mut rest = id;
    for (digit, base) in digits.iter_mut().zip(RADICES.iter()).rev() {
        *digit = (rest % base) as u8;
        rest /= base;
    }
    Ok(digits)
}

/// Unchecked fold of in-range digits.
pub(crate) fn pack(digits: [u8; N_DIGITS]) -> StateId {
    digits
        .iter()
        .zip(RADICES.iter())
        .fold(0, |id, (&d, &base)| id * base + d as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_is_three_to_the_eighth() {
        assert_eq!(num_states(), 6561);
    }

    #[test]
    fn every_id_round_trips() {
        for id in 0..num_states() {
            let digits = decode(id).unwrap();
            assert_eq!(encode(digits).unwrap(), id);
        }
    }

    #[test]
    fn most_significant_digit_first() {
        assert_eq!(encode([0, 0, 0, 0, 0, 0, 0, 1]).unwrap(), 1);
        assert_eq!(encode([1, 0, 0, 0, 0, 0, 0, 0]).unwrap(), 3usize.pow(7));
        assert_eq!(decode(num_states() - 1).unwrap(), [2; N_DIGITS]);
    }

    #[test]
    fn out_of_range_is_an_error() {
        assert!(encode([0, 3, 0, 0, 0, 0, 0, 0]).is_err());
        assert!(encode([0, 0, 0, 0, 0, 0, 0, 9]).is_err());
        assert!(decode(num_states()).is_err());
    }
}
