pub mod detect;
pub mod help;
pub mod respond;
pub mod utils;
