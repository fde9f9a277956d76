use serde::{Deserialize, Serialize};

use crate::config::WorkingHoursConfig;

/// A single bookable slot, identified by its 24-hour start time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Zero-padded 24-hour start time, e.g. "09:30"
    pub id: String,
    /// 12-hour label for display, e.g. "9:30 AM"
    pub display_label: String,
}

/// Ordered set of every slot for one working-hours configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCatalog {
    config: WorkingHoursConfig,
    slots: Vec<TimeSlot>,
}

impl SlotCatalog {
    /// Wraps slots already produced in order for `config`.
    pub(crate) fn from_parts(config: WorkingHoursConfig, slots: Vec<TimeSlot>) -> Self {
        Self { config, slots }
    }

    pub fn config(&self) -> &WorkingHoursConfig {
        &self.config
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeSlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Looks a slot up by id.
    pub fn get(&self, id: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&TimeSlot> {
        self.slots.first()
    }

    pub fn last(&self) -> Option<&TimeSlot> {
        self.slots.last()
    }
}

impl<'a> IntoIterator for &'a SlotCatalog {
    type Item = &'a TimeSlot;
    type IntoIter = std::slice::Iter<'a, TimeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
