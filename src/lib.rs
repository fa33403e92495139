pub mod alphafold;
pub mod batch;
pub mod domain;
pub mod error;
pub mod input;
pub mod output;
