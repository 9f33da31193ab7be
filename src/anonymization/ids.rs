//! Replacement id sampling

use crate::domain::{AnonError, Result};
use rand::Rng;

/// Draws `count` distinct ids uniformly from `[0, id_space)`
///
/// The ids come back in random order. Sampling fails when `count` reaches
/// `id_space`, so a document always has fewer members than available ids.
///
/// # Errors
///
/// Returns [`AnonError::SamplingRange`] if `count >= id_space`.
pub fn sample_ids<R: Rng + ?Sized>(rng: &mut R, count: usize, id_space: u32) -> Result<Vec<u32>> {
    if count >= id_space as usize {
        return Err(AnonError::SamplingRange {
            requested: count,
            id_space,
        });
    }

    // Every index is below id_space, so the narrowing cast is lossless.
    let ids = rand::seq::index::sample(rng, id_space as usize, count)
        .into_iter()
        .map(|index| index as u32)
        .collect();

    Ok(ids)
}
