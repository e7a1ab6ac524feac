use anyhow::{Context, Result, bail, ensure};
use async_trait::async_trait;
use thirtyfour::prelude::*;

use crate::browser::bridge::TestBridge;
use crate::browser::pages::{PlayScreen, ResultScreen, SetupScreen};
use crate::scenario::ScenarioCtx;

/// A browser-mode scenario implementation, keyed like the catalog entries.
#[async_trait]
pub trait BrowserFlow: Send + Sync {
    fn key(&self) -> &'static str;
    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()>;
}

/// Load the page, build a roster through the UI, start, verify via bridge.
pub struct SmokeFlow;

#[async_trait]
impl BrowserFlow for SmokeFlow {
    fn key(&self) -> &'static str {
        "smoke"
    }

    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        if ctx.verbose {
            log::info!("smoke flow on {} (seed {})", ctx.base_url, ctx.seed);
        }
        driver.goto(&ctx.base_url).await?;
        let bridge = TestBridge::new(driver);
        bridge.ensure_available().await?;
        // Clear any session a previous flow left behind, then load clean.
        bridge.reset().await?;
        driver.refresh().await?;

        let setup = SetupScreen::new(driver);
        setup.add_player("Aino").await?;
        setup.add_player("Bertta").await?;
        setup.start_game().await?;

        ensure!(
            bridge.phase().await? == "playing",
            "starting from the UI should land in the playing phase"
        );
        let banner = PlayScreen::new(driver).turn_banner().await?;
        ensure!(banner.contains("Aino"), "first thrower should open: {banner}");
        Ok(())
    }
}

/// Drive a complete game through the score pad until someone hits fifty.
pub struct FullGameFlow;

impl FullGameFlow {
    fn active_needed(snapshot: &serde_json::Value) -> Option<i64> {
        let game = snapshot.get("game")?;
        let current = game.get("turn")?.get("current")?.as_u64()? as usize;
        let players = game.get("players")?.as_array()?;
        let score = players.get(current)?.get("card")?.get("score")?.as_i64()?;
        Some(50 - score)
    }
}

#[async_trait]
impl BrowserFlow for FullGameFlow {
    fn key(&self) -> &'static str {
        "full-game"
    }

    async fn run(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        if ctx.verbose {
            log::info!("full-game flow on {} (seed {})", ctx.base_url, ctx.seed);
        }
        driver.goto(&ctx.base_url).await?;
        let bridge = TestBridge::new(driver);
        bridge.ensure_available().await?;
        bridge.reset().await?;
        driver.refresh().await?;

        let setup = SetupScreen::new(driver);
        for name in ["Aino", "Bertta", "Celia"] {
            setup.add_player(name).await?;
        }
        setup.shuffle().await?;
        setup.start_game().await?;

        let play = PlayScreen::new(driver);
        let mut finished = false;
        for _ in 0..200 {
            if bridge.phase().await? == "finished" {
                finished = true;
                break;
            }
            let needed = bridge
                .state()
                .await
                .ok()
                .as_ref()
                .and_then(Self::active_needed)
                .unwrap_or(8);
            let points = needed.clamp(1, 12);
            play.throw_points(i32::try_from(points).unwrap_or(8)).await?;
        }
        if !finished {
            bail!("game did not finish within 200 throws");
        }

        let snapshot = bridge.state().await?;
        let winner = snapshot
            .get("game")
            .and_then(|g| g.get("winner"))
            .context("snapshot has a game")?;
        ensure!(!winner.is_null(), "aiming for the finish must produce a winner");
        if ctx.verbose {
            log::info!("full-game finished: {winner}");
        }

        // A rematch from the result screen starts play again with the roster.
        ResultScreen::new(driver).rematch().await?;
        ensure!(bridge.phase().await? == "playing", "rematch restarts play");
        Ok(())
    }
}

#[must_use]
pub fn flow_for(key: &str) -> Option<Box<dyn BrowserFlow>> {
    match key {
        "smoke" => Some(Box::new(SmokeFlow)),
        "full-game" => Some(Box::new(FullGameFlow)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flows_exist_for_browser_scenarios_only() {
        assert!(flow_for("smoke").is_some());
        assert!(flow_for("full-game").is_some());
        assert!(flow_for("overflow-reset").is_none());
    }

    #[test]
    fn needed_points_read_from_the_snapshot() {
        let snapshot = json!({
            "game": {
                "turn": { "current": 1, "round": 3 },
                "players": [
                    { "card": { "score": 10 } },
                    { "card": { "score": 44 } },
                ],
            }
        });
        assert_eq!(FullGameFlow::active_needed(&snapshot), Some(6));
        assert_eq!(FullGameFlow::active_needed(&json!({})), None);
    }
}
