//! Likelihood normalization.

use ndarray::{s, Axis};

use crate::repr::{AttributeValueIndex, ConditionalTable, FrequencyTable};
use crate::utils::Parallelism;

/// Turn smoothed counts into `P(attribute = value | cluster)`.
///
/// For each attribute and, independently, each cluster column, the
/// attribute's rows are divided by their sum within that cluster. Attribute
/// blocks are disjoint, so they may be processed in parallel.
pub fn normalize(
    table: &FrequencyTable,
    index: &AttributeValueIndex,
    parallelism: Parallelism,
) -> ConditionalTable {
    let cells = table.cells();
    let blocks = parallelism.maybe_par_map(0..index.n_attributes(), |attr| {
        let mut block = cells.slice(s![index.attribute_rows(attr), ..]).to_owned();
        let sums = block.sum_axis(Axis(0));
        for mut row in block.axis_iter_mut(Axis(0)) {
            row /= &sums;
        }
        block
    });

    let mut probs = cells.to_owned();
    for (attr, block) in blocks.into_iter().enumerate() {
        probs
            .slice_mut(s![index.attribute_rows(attr), ..])
            .assign(&block);
    }

    ConditionalTable::new(probs)
}
