pub mod departure;
