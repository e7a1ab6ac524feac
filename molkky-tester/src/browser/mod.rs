pub mod bridge;
pub mod flows;
pub mod pages;
pub mod session;

pub use bridge::TestBridge;
pub use flows::{BrowserFlow, flow_for};
pub use session::{BrowserConfig, BrowserKind, new_session};
