use serde::Serialize;

use super::PlaygroundCore;

/// Pending notices beyond this are dropped (oldest first)
const MAX_PENDING_NOTICES: usize = 32;

pub(super) const WELCOME: &str = "Click anywhere to add shapes!";
pub(super) const SHAPES_CLEARED: &str = "All shapes cleared!";
pub(super) const NEED_MORE_POINTS: &str = "Need at least 3 points to create a boundary";
pub(super) const BOUNDARY_CLEARED: &str = "Boundary cleared";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Advisory toast for the host UI. Nothing depends on it being shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }
}

pub(super) fn push(core: &mut PlaygroundCore, notice: Notice) {
    if core.is_disposed() {
        return;
    }
    if core.notices.len() >= MAX_PENDING_NOTICES {
        core.notices.remove(0);
    }
    core.notices.push(notice);
}

pub(super) fn boundary_created(points: usize) -> Notice {
    Notice::info(format!("Custom boundary created with {} points", points))
}
