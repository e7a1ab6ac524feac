use std::collections::BTreeMap;

use yew::prelude::*;

use crate::components::button::{Button, ButtonKind};
use crate::game::{GameHistory, GameRecord, PlayMode};
use crate::i18n::{fmt_date_ms, t, tr};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub history: GameHistory,
    pub on_clear: Callback<()>,
}

fn record_row(record: &GameRecord) -> Html {
    let when = record
        .ended_at_ms
        .or(record.started_at_ms)
        .map(fmt_date_ms)
        .unwrap_or_default();
    let outcome = record.winner.as_ref().map_or_else(
        || t("history.draw"),
        |name| {
            let mut args = BTreeMap::new();
            args.insert("name", name.as_str());
            tr("history.winner", Some(&args))
        },
    );
    let rounds = {
        let count = record.rounds.to_string();
        let mut args = BTreeMap::new();
        args.insert("count", count.as_str());
        tr("history.rounds", Some(&args))
    };
    let mode_label = match record.mode {
        PlayMode::FreeForAll => t("setup.mode_ffa"),
        PlayMode::Teams => t("setup.mode_teams"),
    };
    let line = record
        .standings
        .iter()
        .map(|s| format!("{} {}", s.name, s.score))
        .collect::<Vec<_>>()
        .join(" · ");

    html! {
        <li class="history-row" role="listitem">
            <div class="history-head">
                <span class="history-outcome">{ outcome }</span>
                <span class="history-when muted">{ when }</span>
            </div>
            <p class="history-line">{ line }</p>
            <p class="muted">{ format!("{mode_label} — {rounds}") }</p>
        </li>
    }
}

#[function_component(HistoryPanel)]
pub fn history_panel(p: &Props) -> Html {
    let on_clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="panel history-panel" aria-label={t("history.title")}>
            <h2>{ t("history.title") }</h2>
            {
                if p.history.is_empty() {
                    html! { <p class="muted">{ t("history.empty") }</p> }
                } else {
                    html! {
                        <>
                            <ul class="history-list" role="list">
                                { for p.history.recent().iter().map(|record| record_row(record)) }
                            </ul>
                            <Button
                                id="clear-history-btn"
                                kind={ButtonKind::Danger}
                                label={t("history.clear")}
                                onclick={on_clear}
                            />
                        </>
                    }
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameRecord, GameState};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn history_with_one_game() -> GameHistory {
        let mut game = GameState::new();
        game.add_player("Aino").unwrap();
        game.add_player("Bertta").unwrap();
        game.start_game(1_000).unwrap();
        game.players[0].card.score = 44;
        game.record_throw(6).unwrap();
        game.mark_finished_at(2_000);
        let mut history = GameHistory::default();
        history.push(GameRecord::from_state(&game).unwrap());
        history
    }

    #[test]
    fn empty_history_says_so() {
        crate::i18n::set_lang("en");
        let props = Props {
            history: GameHistory::default(),
            on_clear: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<HistoryPanel>::with_props(props).render());
        assert!(html.contains(&t("history.empty")));
        assert!(!html.contains("clear-history-btn"));
    }

    #[test]
    fn records_show_winner_scores_and_clear_action() {
        crate::i18n::set_lang("en");
        let props = Props {
            history: history_with_one_game(),
            on_clear: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<HistoryPanel>::with_props(props).render());
        assert!(html.contains("Winner: Aino"));
        assert!(html.contains("Aino 50"));
        assert!(html.contains("Bertta 0"));
        assert!(html.contains("clear-history-btn"));
    }
}
