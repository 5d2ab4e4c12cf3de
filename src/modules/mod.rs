pub mod admin;
pub mod assertions;
pub mod constraints;
pub mod contracts;
pub mod csrf;
pub mod scenarios;
