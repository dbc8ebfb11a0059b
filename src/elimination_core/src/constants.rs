/// Extra augmentations the max-flow solver may perform beyond the total
/// source capacity before it reports a broken invariant.
///
/// Every augmenting path carries at least one unit of flow, so a correct
/// run never needs more than `total_capacity` augmentations.
pub const SOLVER_ITERATION_SLACK: u64 = 1;
