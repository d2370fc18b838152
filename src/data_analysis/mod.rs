// src/data_analysis/mod.rs

pub mod linear_regression;
pub mod series;
