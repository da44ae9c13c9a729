use crate::activity::{Activity, TimeBlock};
use crate::interval::overlap;
use crate::time::Weekday;
use crate::Id;
use qtty::{Quantity, Second};
use std::collections::BTreeMap;
pub mod errors;
use errors::*;


/// A committed block that a candidate would collide with.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub day: Weekday,
    pub existing_id: Id,
    pub by: Quantity<Second>,
}

/// Weekly grid of committed blocks, one ordered list per teaching day.
///
/// A `WeekSchedule` only ever grows or shrinks by whole activities: every
/// block of an activity is committed in one step by [`commit`](Self::commit)
/// and removed in one step by [`discard`](Self::discard).
///
/// # Invariants
/// - Blocks of different activities on the same day never overlap
///   (touching end/start instants are allowed).
/// - Within a day, blocks keep their commit order.
///
/// # Examples
///
/// ```
/// use weekgrid::activity::{Activity, ExtraActivity, Location};
/// use weekgrid::schedule::WeekSchedule;
/// use weekgrid::time::{TimeOfDay, Weekday};
///
/// let t = |h, m| TimeOfDay::from_hm(h, m).unwrap();
/// let mut schedule = WeekSchedule::new();
///
/// let mut job = ExtraActivity::new("job", "library desk");
/// job.add_block(Weekday::Mon, t(9, 0), t(12, 0), Location::default()).unwrap();
/// schedule.commit(&Activity::from(job)).unwrap();
///
/// let mut gym = ExtraActivity::new("gym", "rec center");
/// gym.add_block(Weekday::Mon, t(11, 0), t(13, 0), Location::default()).unwrap();
/// assert!(schedule.commit(&Activity::from(gym)).is_err());
///
/// assert_eq!(schedule.len(), 1);
/// assert_eq!(schedule.discard("job"), 1);
/// assert!(schedule.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct WeekSchedule {
    days: BTreeMap<Weekday, Vec<TimeBlock>>,
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self {
            days: Weekday::ALL.into_iter().map(|d| (d, Vec::new())).collect(),
        }
    }
}

impl WeekSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of committed blocks.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    /// Blocks committed on `day`, in commit order.
    pub fn blocks_on(&self, day: Weekday) -> &[TimeBlock] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns an iterator over all blocks, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = &TimeBlock> + '_ {
        self.days.values().flatten()
    }

    /// Returns true if any block of activity `id` is committed.
    pub fn contains_activity(&self, id: &str) -> bool {
        self.iter().any(|b| b.owner() == id)
    }

    /// Ids of committed activities, in order of first appearance.
    pub fn activity_ids(&self) -> Vec<Id> {
        let mut ids: Vec<Id> = Vec::new();
        for block in self.iter() {
            if !ids.iter().any(|id| id == block.owner()) {
                ids.push(block.owner().to_string());
            }
        }
        ids
    }

    /// Iterates over committed blocks of *other* activities on the block's
    /// day that overlap `block`, with the overlap length.
    pub fn conflicts<'a>(
        &'a self,
        block: &'a TimeBlock,
    ) -> impl Iterator<Item = Conflict> + 'a {
        self.blocks_on(block.weekday())
            .iter()
            .filter(move |other| other.owner() != block.owner())
            .filter_map(move |other| {
                overlap(block.interval(), other.interval()).map(|by| Conflict {
                    day: block.weekday(),
                    existing_id: other.owner().to_string(),
                    by,
                })
            })
    }

    /// First conflict of any of `blocks` with the committed schedule.
    pub fn first_conflict<'a, I>(&self, blocks: I) -> Option<Conflict>
    where
        I: IntoIterator<Item = &'a TimeBlock>,
    {
        blocks
            .into_iter()
            .find_map(|block| self.conflicts(block).next())
    }

    /// Commits every block of `activity`, or none of them.
    ///
    /// Requires:
    /// - `activity` not already committed
    /// - no block overlaps a block of another activity
    pub fn commit(&mut self, activity: &Activity) -> Result<(), ScheduleError> {
        if self.contains_activity(activity.id()) {
            return Err(ScheduleError::DuplicateActivity(activity.id().to_string()));
        }

        if let Some(conflict) = self.first_conflict(activity.blocks()) {
            return Err(ScheduleError::OverlapsExisting {
                new_id: activity.id().to_string(),
                existing_id: conflict.existing_id,
                day: conflict.day,
            });
        }

        for block in activity.blocks() {
            self.days
                .entry(block.weekday())
                .or_default()
                .push(block.clone());
        }
        Ok(())
    }

    /// Removes every block owned by `id`. Returns how many were removed.
    pub fn discard(&mut self, id: &str) -> usize {
        let mut removed = 0;
        for blocks in self.days.values_mut() {
            let before = blocks.len();
            blocks.retain(|b| b.owner() != id);
            removed += before - blocks.len();
        }
        removed
    }

    /// Clears all blocks from the schedule.
    pub fn clear(&mut self) {
        for blocks in self.days.values_mut() {
            blocks.clear();
        }
    }

    /// Returns the total committed time per week (sum of all block lengths).
    pub fn total_duration(&self) -> Quantity<Second> {
        self.iter()
            .map(|b| b.interval().duration())
            .fold(Quantity::new(0.0), |acc, dur| acc + dur)
    }
}
