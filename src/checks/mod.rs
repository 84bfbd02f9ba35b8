pub mod harness;
pub mod instances;
pub mod solver;
pub mod verdict;
