pub mod contact;
pub mod health;
pub mod homes;
pub mod visits;
