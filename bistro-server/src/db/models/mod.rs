//! Database Models
//!
//! 每个集合一个模型文件，附带对应的 Create 负载结构。

pub mod serde_thing;

pub mod cart_item;
pub mod menu_item;
pub mod payment;
pub mod review;
pub mod user;

pub use cart_item::{CartItem, CartItemCreate, CartItemId};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemId};
pub use payment::{Payment, PaymentCreate};
pub use review::Review;
pub use user::{ROLE_ADMIN, User, UserCreate, UserId};
