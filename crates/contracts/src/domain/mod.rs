pub mod a001_user;
pub mod a002_category;
pub mod a003_product;
pub mod common;
