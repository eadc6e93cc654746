pub mod card;
pub mod column;
pub mod export;
