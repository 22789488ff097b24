//! Day-part slot selection
//!
//! A day's hourly samples are reduced to one sample per day part by picking,
//! for each part, the sample closest in time to the part's target time.

use tracing::{debug, trace};

use crate::forecast::WeatherSample;

/// Number of day parts shown per forecast day.
pub const SLOT_COUNT: usize = 4;

/// A column of the day table, bound to a fixed target time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPart {
    Morning,
    Noon,
    Evening,
    Night,
}

impl DayPart {
    /// Day parts in column order.
    pub const ALL: [DayPart; SLOT_COUNT] = [Self::Morning, Self::Noon, Self::Evening, Self::Night];

    /// Target time in minutes since midnight.
    pub fn target_minutes(self) -> i32 {
        match self {
            Self::Morning => 9 * 60,
            Self::Noon => 12 * 60,
            Self::Evening => 18 * 60,
            Self::Night => 22 * 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Noon => "Noon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

/// Selected sample per day part, in [`DayPart::ALL`] order. `None` only
/// when the day has no samples at all.
pub type DaySlots<'a> = [Option<&'a WeatherSample>; SLOT_COUNT];

/// Pick the sample nearest to each day part's target time.
///
/// Samples may come in any order. On equal distance the sample seen first
/// is kept.
pub fn select_slots(hourly: &[WeatherSample]) -> DaySlots<'_> {
    let mut best: [Option<(&WeatherSample, i32)>; SLOT_COUNT] = [None; SLOT_COUNT];

    for sample in hourly {
        let minutes = sample.minutes_since_midnight();
        for (part, slot) in DayPart::ALL.into_iter().zip(best.iter_mut()) {
            let distance = (minutes - part.target_minutes()).abs();
            let closer = match slot {
                Some((_, best_distance)) => distance < *best_distance,
                None => true,
            };
            if closer {
                trace!(part = part.label(), time = sample.time, distance, "Slot candidate");
                *slot = Some((sample, distance));
            }
        }
    }

    if hourly.is_empty() {
        debug!("Day has no samples, every slot is empty");
    }

    best.map(|slot| slot.map(|(sample, _)| sample))
}
