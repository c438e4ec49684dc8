pub mod pointer;
pub mod shooting;
pub mod starfield;
