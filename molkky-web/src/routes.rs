use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Setup,
    #[at("/play")]
    Play,
    #[at("/result")]
    Result,
    #[at("/history")]
    History,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_phase(phase: &crate::app::Phase) -> Self {
        match phase {
            crate::app::Phase::Setup => Self::Setup,
            crate::app::Phase::Play => Self::Play,
            crate::app::Phase::Result => Self::Result,
            crate::app::Phase::History => Self::History,
        }
    }

    #[must_use]
    pub const fn to_phase(&self) -> Option<crate::app::Phase> {
        match self {
            Self::Setup => Some(crate::app::Phase::Setup),
            Self::Play => Some(crate::app::Phase::Play),
            Self::Result => Some(crate::app::Phase::Result),
            Self::History => Some(crate::app::Phase::History),
            Self::NotFound => None, // Preserve current phase on 404 routes.
        }
    }
}
