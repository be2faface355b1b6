mod product;

pub use product::{Brand, CreateProduct, Product, ProductSummary};
