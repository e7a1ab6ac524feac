use std::collections::BTreeMap;

use yew::prelude::*;

use crate::game::{ContenderView, ELIMINATION_MISS_LIMIT};
use crate::i18n::{fmt_number, t, tr};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub rows: Vec<ContenderView>,
}

fn miss_pips(streak: u8) -> Html {
    let pips: Html = (0..ELIMINATION_MISS_LIMIT)
        .map(|i| {
            let filled = i < streak;
            html! {
                <span
                    class={classes!("miss-pip", filled.then_some("miss-pip-filled"))}
                    aria-hidden="true"
                >
                    { if filled { "●" } else { "○" } }
                </span>
            }
        })
        .collect();
    let label = {
        let count = streak.to_string();
        let mut args = BTreeMap::new();
        args.insert("count", count.as_str());
        tr("score.misses", Some(&args))
    };
    html! {
        <span class="miss-pips" aria-label={label}>{ pips }</span>
    }
}

fn row(view: &ContenderView) -> Html {
    let needs = {
        let points = fmt_number(f64::from(view.card.points_needed()));
        let mut args = BTreeMap::new();
        args.insert("points", points.as_str());
        tr("score.needs", Some(&args))
    };
    let penalties = if view.card.penalties == 0 {
        None
    } else {
        let count = view.card.penalties.to_string();
        let mut args = BTreeMap::new();
        args.insert("count", count.as_str());
        Some(tr("score.penalties", Some(&args)))
    };
    let row_class = classes!(
        "score-row",
        view.active.then_some("score-row-active"),
        view.card.eliminated.then_some("score-row-out"),
    );

    html! {
        <li class={row_class} role="listitem" aria-current={if view.active { "true" } else { "false" }}>
            <div class="score-copy">
                <span class="score-name">{ view.name.clone() }</span>
                { view.throwing.as_ref().map(|member| html! {
                    <span class="score-thrower muted">{ member.clone() }</span>
                }).unwrap_or_default() }
            </div>
            <div class="score-figures">
                <span class="score-value">{ fmt_number(f64::from(view.card.score)) }</span>
                {
                    if view.card.eliminated {
                        html! { <span class="score-badge score-out">{ t("score.eliminated") }</span> }
                    } else if view.card.has_won() {
                        html! { <span class="score-badge score-winner">{ t("score.winner") }</span> }
                    } else {
                        html! { <span class="score-needs muted">{ needs }</span> }
                    }
                }
                { miss_pips(view.card.consecutive_misses) }
                { penalties.map(|text| html! {
                    <span class="score-penalties muted">{ text }</span>
                }).unwrap_or_default() }
            </div>
        </li>
    }
}

#[function_component(Scoreboard)]
pub fn scoreboard(p: &Props) -> Html {
    html! {
        <section class="panel scoreboard" aria-label={t("play.scoreboard")}>
            <ul role="list">
                { for p.rows.iter().map(row) }
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ContenderId, PlayerId, ScoreCard};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn view(name: &str, card: ScoreCard, active: bool) -> ContenderView {
        ContenderView {
            id: ContenderId::Player(PlayerId(1)),
            name: name.to_string(),
            card,
            throwing: None,
            active,
        }
    }

    #[test]
    fn active_row_is_marked_and_needs_shown() {
        crate::i18n::set_lang("en");
        let card = ScoreCard {
            score: 37,
            ..ScoreCard::default()
        };
        let props = Props {
            rows: vec![view("Aino", card, true)],
        };
        let html = block_on(LocalServerRenderer::<Scoreboard>::with_props(props).render());
        assert!(html.contains("score-row-active"));
        assert!(html.contains("aria-current=\"true\""));
        assert!(html.contains("needs 13"));
    }

    #[test]
    fn eliminated_row_shows_badge_and_misses() {
        crate::i18n::set_lang("en");
        let card = ScoreCard {
            score: 12,
            consecutive_misses: 2,
            penalties: 1,
            eliminated: true,
        };
        let props = Props {
            rows: vec![view("Bertta", card, false)],
        };
        let html = block_on(LocalServerRenderer::<Scoreboard>::with_props(props).render());
        assert!(html.contains(&t("score.eliminated")));
        assert!(html.contains("score-row-out"));
        assert!(html.contains("1 penalty"));
        assert!(html.contains("2 of 3 misses"));
    }

    #[test]
    fn team_rows_show_the_current_thrower() {
        crate::i18n::set_lang("en");
        let mut row = view("Reds", ScoreCard::default(), true);
        row.throwing = Some(String::from("Aino"));
        let props = Props { rows: vec![row] };
        let html = block_on(LocalServerRenderer::<Scoreboard>::with_props(props).render());
        assert!(html.contains("score-thrower"));
        assert!(html.contains("Aino"));
    }
}
