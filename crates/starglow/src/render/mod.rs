pub mod record;
pub mod surface;
