pub mod cities;
pub mod search;
