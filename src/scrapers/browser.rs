use crate::scrapers::types::random_user_agent;
use anyhow::{Context, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsString;
use std::sync::Arc;
use tracing::info;

/// Owns a headless Chrome process for the duration of a run.
///
/// Dropping the session tears the browser down, so every exit path out of a
/// scrape releases it without an explicit close call.
pub struct BrowserSession {
    browser: Browser,
}

impl BrowserSession {
    /// Launch headless Chrome with a user-agent drawn from the fixed pool.
    /// If the browser cannot be started the whole run aborts; there is no
    /// retry.
    pub fn launch() -> Result<Self> {
        let user_agent = random_user_agent();
        info!("Launching headless Chrome as \"{}\"", user_agent);

        let ua_arg = OsString::from(format!("--user-agent={}", user_agent));
        let options = LaunchOptions::default_builder()
            .headless(true)
            .args(vec![ua_arg.as_os_str()])
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;

        Ok(Self { browser })
    }

    pub fn new_tab(&self) -> Result<Arc<Tab>> {
        self.browser.new_tab()
    }
}
