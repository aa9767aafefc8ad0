pub mod app;
pub mod spark_view;
