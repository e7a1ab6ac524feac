use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn",
            Self::Secondary => "btn btn-secondary",
            Self::Danger => "btn btn-danger",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub kind: ButtonKind,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    html! {
        <button
            type="button"
            id={p.id.clone()}
            class={p.kind.class()}
            disabled={p.disabled}
            {onclick}
        >
            { p.label.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn button_renders_label_and_kind() {
        let props = Props {
            label: AttrValue::from("Start game"),
            kind: ButtonKind::Danger,
            disabled: false,
            id: Some(AttrValue::from("start-btn")),
            onclick: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("Start game"));
        assert!(html.contains("btn-danger"));
        assert!(html.contains("start-btn"));
    }

    #[test]
    fn disabled_button_carries_the_attribute() {
        let props = Props {
            label: AttrValue::from("Throw"),
            kind: ButtonKind::Primary,
            disabled: true,
            id: None,
            onclick: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("disabled"));
    }
}
