pub mod driver;
pub mod page;
pub mod typing;
