pub mod account;
pub mod pages;
pub mod profile;
pub mod search;
