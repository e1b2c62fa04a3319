pub mod a001_category;
pub mod a002_subcategory;
pub mod a003_subcategory_type;
pub mod a004_product;
pub mod a005_coupon;
pub mod a006_advertisement;
pub mod a007_slider;
pub mod a008_order;
pub mod a009_deal;
pub mod a010_payment_gateway;
pub mod a011_email_config;
pub mod common;
