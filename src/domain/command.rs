//! The fixed command vocabulary of the tag format language.
//!
//! Every command is a pure function of the version and an optional release
//! date. Name commands follow the casing of the command itself: an
//! all-lowercase command yields lowercase text, a capitalized one yields
//! title case and an all-uppercase one yields uppercase text.

use super::date::ReleaseDate;
use super::version::Version;
use crate::error::FormatError;

/// A known `{command}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Major,
    Minor,
    Patch,
    /// `{YYYY}` four-digit year
    Year,
    /// `{YY}` year modulo 100, two digits
    ShortYear,
    /// `{M}` month number, unpadded
    Month,
    /// `{MM}` month number, two digits
    PaddedMonth,
    MonthAbbrev(Case),
    MonthName(Case),
    /// `{D}` day of month, unpadded
    Day,
    /// `{DD}` day of month, two digits
    PaddedDay,
    WeekdayAbbrev(Case),
    WeekdayName(Case),
}

/// Output casing of a name command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Lower,
    Title,
    Upper,
}

impl Case {
    fn apply(self, name: &str) -> String {
        match self {
            Case::Lower => name.to_lowercase(),
            Case::Title => name.to_string(),
            Case::Upper => name.to_uppercase(),
        }
    }
}

impl Command {
    /// Every command, in documentation order
    pub const ALL: [Command; 21] = [
        Command::Major,
        Command::Minor,
        Command::Patch,
        Command::Year,
        Command::ShortYear,
        Command::Month,
        Command::PaddedMonth,
        Command::MonthAbbrev(Case::Lower),
        Command::MonthAbbrev(Case::Title),
        Command::MonthAbbrev(Case::Upper),
        Command::MonthName(Case::Lower),
        Command::MonthName(Case::Title),
        Command::MonthName(Case::Upper),
        Command::Day,
        Command::PaddedDay,
        Command::WeekdayAbbrev(Case::Lower),
        Command::WeekdayAbbrev(Case::Title),
        Command::WeekdayAbbrev(Case::Upper),
        Command::WeekdayName(Case::Lower),
        Command::WeekdayName(Case::Title),
        Command::WeekdayName(Case::Upper),
    ];

    /// Look up a command by the text between its braces
    pub fn from_name(name: &str) -> Option<Command> {
        let command = match name {
            "major" => Command::Major,
            "minor" => Command::Minor,
            "patch" => Command::Patch,
            "YYYY" => Command::Year,
            "YY" => Command::ShortYear,
            "M" => Command::Month,
            "MM" => Command::PaddedMonth,
            "mo" => Command::MonthAbbrev(Case::Lower),
            "Mo" => Command::MonthAbbrev(Case::Title),
            "MO" => Command::MonthAbbrev(Case::Upper),
            "month" => Command::MonthName(Case::Lower),
            "Month" => Command::MonthName(Case::Title),
            "MONTH" => Command::MonthName(Case::Upper),
            "D" => Command::Day,
            "DD" => Command::PaddedDay,
            "da" => Command::WeekdayAbbrev(Case::Lower),
            "Da" => Command::WeekdayAbbrev(Case::Title),
            "DA" => Command::WeekdayAbbrev(Case::Upper),
            "day" => Command::WeekdayName(Case::Lower),
            "Day" => Command::WeekdayName(Case::Title),
            "DAY" => Command::WeekdayName(Case::Upper),
            _ => return None,
        };
        Some(command)
    }

    /// The text written between braces to invoke this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Major => "major",
            Command::Minor => "minor",
            Command::Patch => "patch",
            Command::Year => "YYYY",
            Command::ShortYear => "YY",
            Command::Month => "M",
            Command::PaddedMonth => "MM",
            Command::MonthAbbrev(Case::Lower) => "mo",
            Command::MonthAbbrev(Case::Title) => "Mo",
            Command::MonthAbbrev(Case::Upper) => "MO",
            Command::MonthName(Case::Lower) => "month",
            Command::MonthName(Case::Title) => "Month",
            Command::MonthName(Case::Upper) => "MONTH",
            Command::Day => "D",
            Command::PaddedDay => "DD",
            Command::WeekdayAbbrev(Case::Lower) => "da",
            Command::WeekdayAbbrev(Case::Title) => "Da",
            Command::WeekdayAbbrev(Case::Upper) => "DA",
            Command::WeekdayName(Case::Lower) => "day",
            Command::WeekdayName(Case::Title) => "Day",
            Command::WeekdayName(Case::Upper) => "DAY",
        }
    }

    pub fn requires_date(&self) -> bool {
        !matches!(self, Command::Major | Command::Minor | Command::Patch)
    }

    /// Render this command for the given inputs.
    ///
    /// # Errors
    /// `FormatError::MissingDate` if the command reads the date and none is given.
    pub fn render(
        &self,
        version: &Version,
        date: Option<&ReleaseDate>,
    ) -> Result<String, FormatError> {
        let rendered = match self {
            Command::Major => version.major.to_string(),
            Command::Minor => version.minor.to_string(),
            Command::Patch => version.patch.to_string(),
            Command::Year => format!("{:04}", self.date(date)?.year()),
            Command::ShortYear => format!("{:02}", self.date(date)?.year().rem_euclid(100)),
            Command::Month => self.date(date)?.month().to_string(),
            Command::PaddedMonth => format!("{:02}", self.date(date)?.month()),
            Command::MonthAbbrev(case) => case.apply(self.date(date)?.month_abbreviation()),
            Command::MonthName(case) => case.apply(self.date(date)?.month_name()),
            Command::Day => self.date(date)?.day().to_string(),
            Command::PaddedDay => format!("{:02}", self.date(date)?.day()),
            Command::WeekdayAbbrev(case) => case.apply(self.date(date)?.weekday_abbreviation()),
            Command::WeekdayName(case) => case.apply(self.date(date)?.weekday_name()),
        };
        Ok(rendered)
    }

    fn date<'a>(&self, date: Option<&'a ReleaseDate>) -> Result<&'a ReleaseDate, FormatError> {
        date.ok_or_else(|| FormatError::MissingDate {
            command: self.name().to_string(),
        })
    }

    /// Regular expression fragment matching every possible output of this command
    pub fn pattern(&self) -> &'static str {
        match self {
            Command::Major | Command::Minor | Command::Patch => r"(?:0|[1-9][0-9]*)",
            Command::Year => r"[0-9]{4}",
            Command::ShortYear | Command::PaddedMonth | Command::PaddedDay => r"[0-9]{2}",
            Command::Month | Command::Day => r"[0-9]{1,2}",
            Command::MonthAbbrev(Case::Lower) | Command::WeekdayAbbrev(Case::Lower) => {
                r"[a-z]{3}"
            }
            Command::MonthAbbrev(Case::Title) | Command::WeekdayAbbrev(Case::Title) => {
                r"[A-Z][a-z]{2}"
            }
            Command::MonthAbbrev(Case::Upper) | Command::WeekdayAbbrev(Case::Upper) => {
                r"[A-Z]{3}"
            }
            Command::MonthName(Case::Lower) | Command::WeekdayName(Case::Lower) => r"[a-z]+",
            Command::MonthName(Case::Title) | Command::WeekdayName(Case::Title) => {
                r"[A-Z][a-z]+"
            }
            Command::MonthName(Case::Upper) | Command::WeekdayName(Case::Upper) => r"[A-Z]+",
        }
    }

    /// One-line description for command listings
    pub fn description(&self) -> &'static str {
        match self {
            Command::Major => "major version number",
            Command::Minor => "minor version number",
            Command::Patch => "patch version number",
            Command::Year => "four-digit year (2025)",
            Command::ShortYear => "two-digit year (25)",
            Command::Month => "month number (7)",
            Command::PaddedMonth => "two-digit month number (07)",
            Command::MonthAbbrev(Case::Lower) => "abbreviated month name (jul)",
            Command::MonthAbbrev(Case::Title) => "abbreviated month name (Jul)",
            Command::MonthAbbrev(Case::Upper) => "abbreviated month name (JUL)",
            Command::MonthName(Case::Lower) => "month name (july)",
            Command::MonthName(Case::Title) => "month name (July)",
            Command::MonthName(Case::Upper) => "month name (JULY)",
            Command::Day => "day of month (4)",
            Command::PaddedDay => "two-digit day of month (04)",
            Command::WeekdayAbbrev(Case::Lower) => "abbreviated weekday name (mon)",
            Command::WeekdayAbbrev(Case::Title) => "abbreviated weekday name (Mon)",
            Command::WeekdayAbbrev(Case::Upper) => "abbreviated weekday name (MON)",
            Command::WeekdayName(Case::Lower) => "weekday name (monday)",
            Command::WeekdayName(Case::Title) => "weekday name (Monday)",
            Command::WeekdayName(Case::Upper) => "weekday name (MONDAY)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn july_14() -> ReleaseDate {
        ReleaseDate::from_ymd(2025, 7, 14).unwrap()
    }

    fn render(name: &str, date: &ReleaseDate) -> String {
        Command::from_name(name)
            .unwrap()
            .render(&Version::new(1, 2, 3), Some(date))
            .unwrap()
    }

    #[test]
    fn test_names_round_trip_through_table() {
        for command in Command::ALL {
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(Command::from_name("version"), None);
        assert_eq!(Command::from_name("MAJOR"), None);
        assert_eq!(Command::from_name(""), None);
        assert_eq!(Command::from_name(" major"), None);
    }

    #[test]
    fn test_version_commands_ignore_date() {
        let version = Version::new(10, 0, 7);
        assert_eq!(Command::Major.render(&version, None).unwrap(), "10");
        assert_eq!(Command::Minor.render(&version, None).unwrap(), "0");
        assert_eq!(Command::Patch.render(&version, None).unwrap(), "7");
    }

    #[test]
    fn test_date_commands_require_date() {
        for command in Command::ALL.iter().filter(|c| c.requires_date()) {
            let err = command.render(&Version::default(), None).unwrap_err();
            assert_eq!(
                err,
                FormatError::MissingDate {
                    command: command.name().to_string()
                }
            );
        }
        assert_eq!(Command::ALL.iter().filter(|c| c.requires_date()).count(), 18);
    }

    #[test]
    fn test_numeric_date_commands() {
        let date = july_14();
        assert_eq!(render("YYYY", &date), "2025");
        assert_eq!(render("YY", &date), "25");
        assert_eq!(render("M", &date), "7");
        assert_eq!(render("MM", &date), "07");
        assert_eq!(render("D", &date), "14");
        assert_eq!(render("DD", &date), "14");
    }

    #[test]
    fn test_single_digit_padding() {
        let date = ReleaseDate::from_ymd(2009, 3, 5).unwrap();
        assert_eq!(render("YY", &date), "09");
        assert_eq!(render("M", &date), "3");
        assert_eq!(render("MM", &date), "03");
        assert_eq!(render("D", &date), "5");
        assert_eq!(render("DD", &date), "05");
    }

    #[test]
    fn test_small_years_are_padded() {
        let date = ReleaseDate::from_ymd(987, 1, 1).unwrap();
        assert_eq!(render("YYYY", &date), "0987");
        assert_eq!(render("YY", &date), "87");
    }

    #[test]
    fn test_year_boundaries_stay_four_digits() {
        let year = regex::Regex::new(&format!("^{}$", Command::Year.pattern())).unwrap();
        for (y, expected_year, expected_short) in [(0, "0000", "00"), (9999, "9999", "99")] {
            let date = ReleaseDate::from_ymd(y, 1, 1).unwrap();
            assert_eq!(render("YYYY", &date), expected_year);
            assert_eq!(render("YY", &date), expected_short);
            assert!(year.is_match(&render("YYYY", &date)));
        }
    }

    #[test]
    fn test_month_name_casing() {
        let date = july_14();
        assert_eq!(render("mo", &date), "jul");
        assert_eq!(render("Mo", &date), "Jul");
        assert_eq!(render("MO", &date), "JUL");
        assert_eq!(render("month", &date), "july");
        assert_eq!(render("Month", &date), "July");
        assert_eq!(render("MONTH", &date), "JULY");
    }

    #[test]
    fn test_weekday_name_casing() {
        let date = july_14();
        assert_eq!(render("da", &date), "mon");
        assert_eq!(render("Da", &date), "Mon");
        assert_eq!(render("DA", &date), "MON");
        assert_eq!(render("day", &date), "monday");
        assert_eq!(render("Day", &date), "Monday");
        assert_eq!(render("DAY", &date), "MONDAY");
    }

    #[test]
    fn test_pattern_accepts_rendered_output() {
        let date = ReleaseDate::from_ymd(2024, 9, 3).unwrap();
        for command in Command::ALL {
            let rendered = command.render(&Version::new(12, 0, 3), Some(&date)).unwrap();
            let re = regex::Regex::new(&format!("^{}$", command.pattern())).unwrap();
            assert!(
                re.is_match(&rendered),
                "pattern for {{{}}} should match '{}'",
                command.name(),
                rendered
            );
        }
    }
}
