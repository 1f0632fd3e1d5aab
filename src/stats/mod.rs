pub mod distribution;
pub mod rank;
pub mod regression;
pub mod summary;

pub use distribution::{ln_gamma, regularized_incomplete_beta, t_two_sided_p};
pub use rank::{average_ranks, pearson, spearman, Correlation};
pub use regression::{ols, OlsFit};
pub use summary::{mean, quantile_sorted, sample_std, standardize};
