pub mod financial;
