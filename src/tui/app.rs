use crate::{config::UiConfig, modules::ModuleKind};

/// State of the terminal session: which slot is shown and with what config.
pub struct App {
    pub slot_num: u32,
    pub kind: Option<ModuleKind>,
    pub config: UiConfig,
}

impl App {
    pub fn new(slot_num: u32, config: UiConfig) -> Self {
        let kind = ModuleKind::from_mlfb(&config.mlfb);
        if kind.is_none() {
            log::warn!("[TUI] no panel for article number {:?}", config.mlfb);
        }
        Self {
            slot_num,
            kind,
            config,
        }
    }
}
