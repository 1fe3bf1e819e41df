//! Payment Processor Client
//!
//! 对接 Stripe 风格的支付网关：创建 PaymentIntent 并取回
//! 客户端确认用的 client_secret。服务端只持有 secret key，
//! 金额一律以最小货币单位 (美分) 提交。

use serde::Deserialize;

use crate::utils::AppError;

/// 固定结算币种
const CURRENCY: &str = "usd";

/// 支付网关返回的 PaymentIntent
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    /// 网关侧交易 id
    pub id: String,
    /// 客户端确认密钥
    pub client_secret: String,
}

/// 支付网关客户端
#[derive(Debug, Clone)]
pub struct PaymentProcessor {
    client: reqwest::Client,
    secret_key: String,
    base_url: String,
}

impl PaymentProcessor {
    pub fn new(secret_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 金额换算为最小货币单位: round(price × 100)
    pub fn minor_units(price: f64) -> i64 {
        (price * 100.0).round() as i64
    }

    /// 创建支付事务，返回客户端确认密钥
    pub async fn create_payment_intent(&self, price: f64) -> Result<PaymentIntent, AppError> {
        let amount = Self::minor_units(price);

        let params = [
            ("amount", amount.to_string()),
            ("currency", CURRENCY.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let resp = self
            .client
            .post(format!("{}/v1/payment_intents", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::payment(format!("Payment intent request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(target: "payment", %status, "Payment intent creation rejected");
            return Err(AppError::payment(format!(
                "Payment intent creation failed ({status}): {body}"
            )));
        }

        let intent: PaymentIntent = resp
            .json()
            .await
            .map_err(|e| AppError::payment(format!("Malformed payment intent response: {e}")))?;

        tracing::info!(target: "payment", intent_id = %intent.id, amount, "Payment intent created");

        Ok(intent)
    }
}
