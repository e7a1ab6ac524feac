use anyhow::{Context, Result, bail};
use serde_json::Value;
use thirtyfour::prelude::*;

/// Wrapper over the app's `window.__molkkyTest` QA bridge.
#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    #[must_use]
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    /// # Errors
    ///
    /// Fails when the page was loaded without `?test=1`.
    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__molkkyTest", vec![])
            .await?;
        let ok = result.json().as_bool().unwrap_or(false);
        if !ok {
            bail!("__molkkyTest is not available. Did you pass ?test=1 to expose the bridge?");
        }
        Ok(())
    }

    /// Current game phase as the app reports it ("setup", "playing", "finished").
    ///
    /// # Errors
    ///
    /// Returns an error when the bridge call fails.
    pub async fn phase(&self) -> Result<String> {
        let result = self
            .driver
            .execute("return window.__molkkyTest.phase()", vec![])
            .await?;
        result
            .json()
            .as_str()
            .map(str::to_string)
            .context("phase() did not return a string")
    }

    /// Whole persisted session snapshot as JSON (null before the first save).
    ///
    /// # Errors
    ///
    /// Returns an error when the bridge call fails.
    pub async fn state(&self) -> Result<Value> {
        let result = self
            .driver
            .execute("return window.__molkkyTest.state()", vec![])
            .await?;
        Ok(result.json().clone())
    }

    /// Drop the persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error when the bridge call fails.
    pub async fn reset(&self) -> Result<()> {
        self.driver
            .execute("window.__molkkyTest.reset()", vec![])
            .await?;
        Ok(())
    }
}
