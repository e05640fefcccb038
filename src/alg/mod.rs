pub mod sssp;
pub mod sssp_par;
