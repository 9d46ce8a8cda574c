use chrono::{Datelike, Local};

// YearSource supplies the calendar year used to validate publication years.
pub trait YearSource {
    fn current_year(&self) -> i32;
}

// SystemYear reads the local wall clock on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemYear;

impl YearSource for SystemYear {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

// FixedYear pins the current year, mostly for tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedYear(pub i32);

impl YearSource for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}
