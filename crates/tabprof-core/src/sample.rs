//! Row sampling for display: the sample carries raw cell values verbatim,
//! never type-cast ones.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index::sample as sample_indices;

use tabprof_model::{CellValue, Dataset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    /// First `n` rows in source order.
    Head,
    /// `n` rows drawn without replacement, emitted in source order.
    Random,
}

/// Select up to `n` rows from the dataset. `seed` makes random sampling
/// reproducible; without it the thread RNG is used.
pub fn select_rows(
    dataset: &Dataset,
    n: usize,
    mode: SampleMode,
    seed: Option<u64>,
) -> Vec<Vec<CellValue>> {
    let take = n.min(dataset.row_count);
    let indices: Vec<usize> = match mode {
        SampleMode::Head => (0..take).collect(),
        SampleMode::Random => {
            let mut picked = match seed {
                Some(seed) => {
                    sample_indices(&mut StdRng::seed_from_u64(seed), dataset.row_count, take)
                }
                None => sample_indices(&mut rand::thread_rng(), dataset.row_count, take),
            }
            .into_vec();
            picked.sort_unstable();
            picked
        }
    };
    indices
        .into_iter()
        .map(|row| {
            dataset
                .columns
                .iter()
                .map(|column| column.values[row].clone())
                .collect()
        })
        .collect()
}
