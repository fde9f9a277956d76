pub mod admin;
pub mod bookings;
pub mod day;
pub mod health;
pub mod slots;
