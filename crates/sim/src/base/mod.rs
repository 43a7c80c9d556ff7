//! Base types for allele representation.

mod allele;

pub use allele::{Allele, random_allele};
