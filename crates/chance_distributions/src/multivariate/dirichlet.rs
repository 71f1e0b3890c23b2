//! Dirichlet distribution.

use crate::continuous::Gamma;
use crate::renamed;
use crate::sampler::{Distribution, FillDistribution};
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::ChanceError;

/// Dirichlet distribution over the probability simplex with concentration
/// `α`.
///
/// Draws independent `Gamma(αᵢ, 1)` variates and normalises them by their
/// sum. Draws whose sum underflows to zero are repeated.
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::Chance;
/// use chance_distributions::multivariate::Dirichlet;
/// use chance_distributions::FillDistribution;
///
/// let mut rng = Chance::from_seed(3);
/// let mut dirichlet = Dirichlet::new(&[1.0_f64, 2.0, 3.0]).unwrap();
/// let mut weights = [0.0; 3];
/// dirichlet.sample_into(&mut rng, &mut weights);
/// assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Dirichlet<T: Real> {
    gammas: Vec<Gamma<T>>,
}

impl<T: Real> Dirichlet<T> {
    /// Creates a Dirichlet distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if fewer than two concentrations are
    /// given or any is not finite and positive.
    pub fn new(alpha: &[T]) -> Result<Self, ChanceError> {
        if alpha.len() < 2 {
            return Err(ChanceError::argument(
                "alpha",
                format!("needs at least 2 components, got {}", alpha.len()),
            ));
        }
        let gammas = alpha
            .iter()
            .map(|&a| Gamma::new(a, T::one()).map_err(renamed("alpha")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { gammas })
    }

    /// Number of components.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.gammas.len()
    }
}

impl<T: Real> FillDistribution for Dirichlet<T> {
    type Buffer = [T];

    fn sample_into<R: BitSource + ?Sized>(&mut self, rng: &mut R, out: &mut [T]) {
        assert_eq!(out.len(), self.gammas.len(), "buffer must match the dimension");
        loop {
            let mut sum = T::zero();
            for (slot, gamma) in out.iter_mut().zip(self.gammas.iter_mut()) {
                *slot = gamma.sample(rng);
                sum = sum + *slot;
            }
            if sum > T::zero() {
                for slot in out.iter_mut() {
                    *slot = *slot / sum;
                }
                return;
            }
        }
    }
}

impl<T: Real> Distribution for Dirichlet<T> {
    type Output = Vec<T>;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> Vec<T> {
        let mut out = vec![T::zero(); self.gammas.len()];
        self.sample_into(rng, &mut out);
        out
    }
}
