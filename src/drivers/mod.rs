pub mod densha;
