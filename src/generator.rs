use crate::stepper::{fast_step, A, M};

/// Multiplicative LCG over the prime modulus M, advanced with the
/// correction-based stepper.
pub struct Lcg64Prime(u64);

impl Lcg64Prime {
    pub const fn new(seed: u64) -> Self {
        assert!(seed < M);
        Self(seed)
    }

    pub const fn next(&mut self) -> u64 {
        self.0 = fast_step(A, self.0);
        return self.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::reference_step;
    use pretty_assertions::assert_eq;

    #[test]
    fn tracks_the_reference_recurrence() {
        let mut gen = Lcg64Prime::new(42);
        let mut x = 42;
        for _ in 0..1000 {
            x = reference_step(A, x);
            assert_eq!(gen.next(), x);
        }
    }

    #[test]
    fn outputs_stay_in_range() {
        let mut gen = Lcg64Prime::new(M - 1);
        for _ in 0..1000 {
            assert!(gen.next() < M);
        }
    }

    #[test]
    #[should_panic]
    fn rejects_out_of_range_seed() {
        Lcg64Prime::new(M);
    }
}
