pub mod donation;
pub mod ports;
pub mod top_donors;
