//! NavState - Active Page State

use gpui::Context;

use crate::app::navigation::ActivePage;

/// State for sidebar navigation
#[derive(Debug, Default)]
pub struct NavState {
    active: ActivePage,
}

impl NavState {
    pub fn new(active: ActivePage) -> Self {
        Self { active }
    }

    pub fn active(&self) -> ActivePage {
        self.active
    }

    /// Switch to a page (from sidebar click)
    pub fn go_to(&mut self, page: ActivePage, cx: &mut Context<Self>) {
        if self.active != page {
            self.active = page;
            cx.notify();
        }
    }
}
