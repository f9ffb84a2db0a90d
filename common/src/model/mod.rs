pub mod employee;
pub mod options;
pub mod schedule;
