// This file makes the page modules available to the rest of the application.

pub mod about;
pub mod contact;
pub mod home;
pub mod products;
