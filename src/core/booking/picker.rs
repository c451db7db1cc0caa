//! Date and time picker toggles nested in an open sheet

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PickerKind {
    Date,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PickerVisibility {
    #[default]
    Hidden,
    Shown,
}

#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Pickers {
    pub(super) date: PickerVisibility,
    pub(super) time: PickerVisibility,
}

impl Pickers {
    pub(super) fn get(&self, kind: PickerKind) -> PickerVisibility {
        match kind {
            PickerKind::Date => self.date,
            PickerKind::Time => self.time,
        }
    }

    pub(super) fn set(&mut self, kind: PickerKind, visibility: PickerVisibility) {
        match kind {
            PickerKind::Date => self.date = visibility,
            PickerKind::Time => self.time = visibility,
        }
    }

    pub(super) fn hide_all(&mut self) {
        *self = Self::default();
    }
}
