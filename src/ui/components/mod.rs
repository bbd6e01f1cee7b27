pub mod gauge;

pub use gauge::score_gauge;
