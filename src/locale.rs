use chrono::{Datelike, Month, NaiveDate};

/// Fixed month-name table shown in the month tabs and the date fields.
pub const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

pub const WEEKDAY_NAMES: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

pub const CHECK_IN_LABEL: &str = "Заезд";
pub const CHECK_OUT_LABEL: &str = "Выезд";

pub fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[month.number_from_month() as usize - 1]
}

/// Formats a date as `"D <MonthName> YYYY"` for the date fields.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(format_date(date), "10 Март 2024");
    }

    #[test]
    fn month_names_line_up_with_chrono() {
        assert_eq!(month_name(Month::January), "Январь");
        assert_eq!(month_name(Month::December), "Декабрь");
    }
}
