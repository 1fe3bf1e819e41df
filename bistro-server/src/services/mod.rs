//! 外部服务集成

pub mod payment_intent;

pub use payment_intent::{PaymentIntent, PaymentProcessor};
