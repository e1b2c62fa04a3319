pub mod aggregate;

pub use aggregate::{Coupon, CouponAssociation, CouponForm, CouponKind, CouponPayload};
