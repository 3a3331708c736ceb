pub mod record;
pub mod resultset;
