use chrono::{Local, NaiveDate};

/// Source of "today" for scheduling decisions.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Current calendar date in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_boxed_clock_delegates() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock(date));
        assert_eq!(clock.today(), date);
    }
}
