//! Graph module: the CSR adjacency view shared by all engines.

pub mod csr;
pub use csr::{CsrAdjacency, CsrGraph};
