pub mod resume;
pub mod score;
