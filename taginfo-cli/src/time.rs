/// A duration split into clock units.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Clock {
    millis: u64,
}

impl Clock {
    pub fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Rounds to the nearest whole second, with a half second rounding up.
    pub fn rounded(self) -> Self {
        Self {
            millis: self.millis.saturating_add(500) / 1000 * 1000,
        }
    }

    pub fn hours(&self) -> u64 {
        self.millis / 3_600_000
    }

    pub fn minutes(&self) -> u64 {
        self.millis / 60_000 % 60
    }

    pub fn seconds(&self) -> u64 {
        self.millis / 1000 % 60
    }

    pub fn subsec_millis(&self) -> u64 {
        self.millis % 1000
    }

    /// `HH:MM:SS`
    pub fn hms(&self) -> String {
        format!["{:02}:{:02}:{:02}", self.hours(), self.minutes(), self.seconds()]
    }

    /// `HH:MM:SS.mmm`
    pub fn hms_millis(&self) -> String {
        format!["{}.{:03}", self.hms(), self.subsec_millis()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_units() {
        let clock = Clock::from_millis(3_723_045);

        assert_eq!(clock.hours(), 1);
        assert_eq!(clock.minutes(), 2);
        assert_eq!(clock.seconds(), 3);
        assert_eq!(clock.subsec_millis(), 45);
        assert_eq!(clock.hms_millis(), "01:02:03.045");
    }

    #[test]
    fn round_half_up() {
        let clock = Clock::from_millis(1500);

        assert_eq!(clock.hms_millis(), "00:00:01.500");
        assert_eq!(clock.rounded().hms(), "00:00:02");
        assert_eq!(Clock::from_millis(1499).rounded().hms(), "00:00:01");
    }

    #[test]
    fn round_carries_into_minutes() {
        assert_eq!(Clock::from_millis(59_700).rounded().hms(), "00:01:00");
    }

    #[test]
    fn round_carries_into_hours() {
        assert_eq!(Clock::from_millis(3_599_600).rounded().hms(), "01:00:00");
    }

    #[test]
    fn zero() {
        let clock = Clock::from_millis(0);

        assert_eq!(clock.rounded().hms(), "00:00:00");
        assert_eq!(clock.hms_millis(), "00:00:00.000");
    }

    #[test]
    fn saturate_instead_of_overflowing() {
        assert!(Clock::from_millis(u64::MAX).rounded().hours() > 99);
    }
}
