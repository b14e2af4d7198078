use crate::building::Building;

/// Per-building attendance tallies. Always holds every [`Building`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceCounters {
    counts: [u32; 3],
}

impl AttendanceCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, building: Building) -> u32 {
        self.counts[building.index()]
    }

    /// Add one attendance and return the new count.
    pub fn increment(&mut self, building: Building) -> u32 {
        let slot = &mut self.counts[building.index()];
        *slot = slot.saturating_add(1);
        *slot
    }

    pub fn reset(&mut self) {
        self.counts = [0; 3];
    }

    pub fn iter(&self) -> impl Iterator<Item = (Building, u32)> + '_ {
        Building::ALL.into_iter().map(|b| (b, self.get(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_every_building_at_zero() {
        let counters = AttendanceCounters::new();
        let all: Vec<_> = counters.iter().collect();
        assert_eq!(
            all,
            vec![(Building::Sc, 0), (Building::Ba, 0), (Building::Lab, 0)]
        );
    }

    #[test]
    fn increment_touches_only_its_building() {
        let mut counters = AttendanceCounters::new();
        assert_eq!(counters.increment(Building::Ba), 1);
        assert_eq!(counters.increment(Building::Ba), 2);
        assert_eq!(counters.get(Building::Sc), 0);
        assert_eq!(counters.get(Building::Lab), 0);
        assert_eq!(counters.get(Building::Ba), 2);
    }

    #[test]
    fn reset_zeroes_all() {
        let mut counters = AttendanceCounters::new();
        for b in Building::ALL {
            counters.increment(b);
        }
        counters.reset();
        assert_eq!(counters, AttendanceCounters::new());
    }

    #[test]
    fn increment_saturates() {
        let mut counters = AttendanceCounters {
            counts: [u32::MAX, 0, 0],
        };
        assert_eq!(counters.increment(Building::Sc), u32::MAX);
    }
}
