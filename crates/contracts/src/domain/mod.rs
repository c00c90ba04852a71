pub mod a001_company;
pub mod a002_product;
pub mod a003_material_type;
pub mod a004_material;
pub mod a005_sale;
pub mod a006_payment;
pub mod a007_expense;
pub mod common;
