// src/notify/telegram.rs
//! Telegram Bot API notifier (sendMessage). Bounded timeout, small retry
//! loop with exponential backoff; the run treats a final failure as fatal.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use super::Notifier;

pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[derive(Clone)]
pub struct TelegramNotifier {
    api_base: String,
    token: String,
    chat_id: String,
    client: Client,
    timeout: Duration,
    max_retries: u8,
}

impl TelegramNotifier {
    pub fn new(token: String, chat_id: String) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token,
            chat_id,
            client: Client::new(),
            timeout: Duration::from_secs(45),
            max_retries: 3,
        }
    }

    /// Read credentials from the environment. Missing credentials are a
    /// configuration error surfaced at delivery time, not a silent skip.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(ENV_BOT_TOKEN)
            .map_err(|_| anyhow!("{} is not set", ENV_BOT_TOKEN))?;
        let chat_id = std::env::var(ENV_CHAT_ID)
            .map_err(|_| anyhow!("{} is not set", ENV_CHAT_ID))?;
        Ok(Self::new(token, chat_id))
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Point at a different API host (tests).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.token)
    }
}

#[derive(Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
    disable_web_page_preview: bool,
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let payload = SendMessagePayload {
            chat_id: &self.chat_id,
            text,
            disable_web_page_preview: true,
        };
        let url = self.endpoint();

        let mut attempt: u8 = 0;
        loop {
            attempt += 1;
            let res = self
                .client
                .post(&url)
                .timeout(self.timeout)
                .json(&payload)
                .send()
                .await;

            match res {
                Ok(rsp) => {
                    if let Err(e) = rsp.error_for_status_ref() {
                        if attempt < self.max_retries {
                            tokio::time::sleep(Duration::from_millis(500u64 << (attempt - 1)))
                                .await;
                            continue;
                        }
                        return Err(anyhow!("Telegram HTTP error: {e}"));
                    }
                    return Ok(());
                }
                Err(e) => {
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(500u64 << (attempt - 1))).await;
                        continue;
                    }
                    return Err(anyhow!("Telegram request failed: {e}"));
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}
