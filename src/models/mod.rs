pub mod card;
pub mod deck;
pub mod report;

pub use card::*;
pub use deck::*;
pub use report::*;
