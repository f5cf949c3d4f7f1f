//! Catalog data models

pub mod category;
pub mod product;
pub mod upload;
pub mod user;

pub use category::{Category, CategoryCreate, CategoryStatus, CategoryUpdate};
pub use product::{
    DiscountType, Product, ProductCreate, ProductStatus, ProductUpdate, ProductVariant,
    VariantCreate, VariantUpdate,
};
pub use upload::UploadedFile;
pub use user::{UserAccount, UserStatus};
