pub mod common_prefix_len;
pub mod myers_diff;
pub mod side;
