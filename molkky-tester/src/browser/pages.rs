//! Page objects over the app's stable element ids, so flows read as intent
//! rather than selector soup.

use anyhow::Result;
use thirtyfour::prelude::*;

/// The roster/setup screen.
pub struct SetupScreen<'a> {
    driver: &'a WebDriver,
}

impl<'a> SetupScreen<'a> {
    #[must_use]
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    /// # Errors
    ///
    /// Returns an error when the roster input is missing or not interactable.
    pub async fn add_player(&self, name: &str) -> Result<()> {
        let input = self.driver.find(By::Id("player-name-input")).await?;
        input.clear().await?;
        input.send_keys(name).await?;
        self.driver
            .find(By::Id("add-player-btn"))
            .await?
            .click()
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error when the start button is missing.
    pub async fn start_game(&self) -> Result<()> {
        self.driver.find(By::Id("start-btn")).await?.click().await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error when the shuffle button is missing.
    pub async fn shuffle(&self) -> Result<()> {
        self.driver
            .find(By::Id("shuffle-btn"))
            .await?
            .click()
            .await?;
        Ok(())
    }
}

/// The live game screen with the score pad.
pub struct PlayScreen<'a> {
    driver: &'a WebDriver,
}

impl<'a> PlayScreen<'a> {
    #[must_use]
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    /// Click the pad button for a point value (0 is the miss button).
    ///
    /// # Errors
    ///
    /// Returns an error when the pad button is missing or disabled.
    pub async fn throw_points(&self, points: i32) -> Result<()> {
        let selector = format!("button[data-points=\"{points}\"]");
        self.driver
            .find(By::Css(selector.as_str()))
            .await?
            .click()
            .await?;
        Ok(())
    }

    /// Text of the "X to throw" banner.
    ///
    /// # Errors
    ///
    /// Returns an error when the banner is missing.
    pub async fn turn_banner(&self) -> Result<String> {
        Ok(self.driver.find(By::Id("turn-banner")).await?.text().await?)
    }
}

/// The result screen.
pub struct ResultScreen<'a> {
    driver: &'a WebDriver,
}

impl<'a> ResultScreen<'a> {
    #[must_use]
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    /// # Errors
    ///
    /// Returns an error when the rematch button is missing.
    pub async fn rematch(&self) -> Result<()> {
        self.driver
            .find(By::Id("rematch-btn"))
            .await?
            .click()
            .await?;
        Ok(())
    }
}
