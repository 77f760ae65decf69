pub mod commission;
pub mod product;

pub use commission::{parse_commission, plan_commission_edit, CommissionParseError};
pub use product::{BulkCommissionUpdate, CommissionUpdate, Order, Product};
