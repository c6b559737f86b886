/// Repository search worker.
pub mod search;
