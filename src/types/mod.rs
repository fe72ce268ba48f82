pub mod model;
pub mod output;
