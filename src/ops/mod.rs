pub mod donation_ops;
pub mod session_ops;
