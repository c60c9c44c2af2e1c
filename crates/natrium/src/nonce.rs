// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Natrium — libsodium bindings
// Licensed under the MIT License

use natrium_core::crypto::{public_box, random, secretbox, util};
use natrium_core::SodiumResult;

/// Length of the nonces the box objects prepend to their ciphertexts.
pub const NONCE_BYTES: usize = secretbox::NONCE_BYTES;

const _: () = assert!(secretbox::NONCE_BYTES == public_box::NONCE_BYTES);

/// How a box object chooses the nonce for each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonceStrategy {
    /// A fresh random nonce per message.
    #[default]
    Random,
    /// A random starting nonce, incremented after every message.
    Counter,
}

#[derive(Debug)]
pub(crate) enum Nonces {
    Random,
    Counter([u8; NONCE_BYTES]),
}

impl Nonces {
    pub(crate) fn new(strategy: NonceStrategy) -> SodiumResult<Self> {
        Ok(match strategy {
            NonceStrategy::Random => Nonces::Random,
            NonceStrategy::Counter => Nonces::Counter(random::random_nonce()?),
        })
    }

    pub(crate) fn strategy(&self) -> NonceStrategy {
        match self {
            Nonces::Random => NonceStrategy::Random,
            Nonces::Counter(_) => NonceStrategy::Counter,
        }
    }

    /// Starts an independent sequence with the same strategy.
    pub(crate) fn fork(&self) -> SodiumResult<Self> {
        Nonces::new(self.strategy())
    }

    pub(crate) fn next(&mut self) -> SodiumResult<[u8; NONCE_BYTES]> {
        match self {
            Nonces::Random => random::random_nonce(),
            Nonces::Counter(counter) => {
                let current = *counter;
                util::increment(counter)?;
                Ok(current)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_advances_by_one() {
        let mut nonces = Nonces::Counter([0u8; NONCE_BYTES]);
        assert_eq!(nonces.next().unwrap(), [0u8; NONCE_BYTES]);
        let mut one = [0u8; NONCE_BYTES];
        one[0] = 1;
        assert_eq!(nonces.next().unwrap(), one);
    }

    #[test]
    fn random_nonces_differ() {
        let mut nonces = Nonces::new(NonceStrategy::Random).unwrap();
        assert_ne!(nonces.next().unwrap(), nonces.next().unwrap());
        assert_eq!(nonces.strategy(), NonceStrategy::Random);
    }

    #[test]
    fn forked_counter_starts_elsewhere() {
        let mut original = Nonces::new(NonceStrategy::Counter).unwrap();
        let mut fork = original.fork().unwrap();
        assert_eq!(fork.strategy(), NonceStrategy::Counter);
        assert_ne!(original.next().unwrap(), fork.next().unwrap());
    }
}
