pub mod assignment;
pub mod destination;
pub mod month;
pub mod vacation;
