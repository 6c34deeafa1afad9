use crate::ParseError;
use crate::prelude::*;
use chrono::Weekday;
use std::str::FromStr;

/// The category of day a rule matches within each month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DayClass {
    /// A specific weekday (Monday..Sunday)
    #[display(fmt = "{}", "weekday_label(*_0)")]
    Weekday(Weekday),
    /// A plain calendar day of month, not weekday-based
    #[display(fmt = "day")]
    CalendarDay,
    /// Either a Saturday or a Sunday, whichever occurs;
    /// both count as candidate days, ordered chronologically.
    #[display(fmt = "weekend day")]
    WeekendDay,
}

/// Selects the k-th (or final) matching day within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Ordinal {
    #[display(fmt = "first")]
    First,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "third")]
    Third,
    #[display(fmt = "fourth")]
    Fourth,
    #[display(fmt = "last")]
    Last,
}

impl Ordinal {
    /// 1-based position within the month, or `None` for `Last`.
    #[inline]
    pub const fn position(self) -> Option<u32> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Fourth => Some(4),
            Self::Last => None,
        }
    }
}

/// How the month of each non-initial occurrence is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Mode {
    /// Each occurrence advances from the previous occurrence's month.
    #[display(fmt = "period")]
    Period,
    /// Each occurrence advances from the rule's start month by a
    /// growing multiple of the step.
    #[display(fmt = "anchor")]
    Anchor,
}

const fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

impl FromStr for DayClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "monday" => Self::Weekday(Weekday::Mon),
            "tuesday" => Self::Weekday(Weekday::Tue),
            "wednesday" => Self::Weekday(Weekday::Wed),
            "thursday" => Self::Weekday(Weekday::Thu),
            "friday" => Self::Weekday(Weekday::Fri),
            "saturday" => Self::Weekday(Weekday::Sat),
            "sunday" => Self::Weekday(Weekday::Sun),
            "day" => Self::CalendarDay,
            "weekend day" => Self::WeekendDay,
            _ => return Err(ParseError::UnknownDayClass(s.to_owned())),
        })
    }
}

impl FromStr for Ordinal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "first" => Self::First,
            "second" => Self::Second,
            "third" => Self::Third,
            "fourth" => Self::Fourth,
            "last" => Self::Last,
            _ => return Err(ParseError::UnknownOrdinal(s.to_owned())),
        })
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "period" => Self::Period,
            "anchor" => Self::Anchor,
            _ => return Err(ParseError::UnknownMode(s.to_owned())),
        })
    }
}

impl serde::Serialize for DayClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DayClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for Ordinal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Ordinal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEKDAYS: [(Weekday, &str); 7] = [
        (Weekday::Mon, "monday"),
        (Weekday::Tue, "tuesday"),
        (Weekday::Wed, "wednesday"),
        (Weekday::Thu, "thursday"),
        (Weekday::Fri, "friday"),
        (Weekday::Sat, "saturday"),
        (Weekday::Sun, "sunday"),
    ];

    #[test]
    fn test_day_class_display() {
        for (weekday, label) in WEEKDAYS {
            assert_eq!(DayClass::Weekday(weekday).to_string(), label);
        }
        assert_eq!(DayClass::CalendarDay.to_string(), "day");
        assert_eq!(DayClass::WeekendDay.to_string(), "weekend day");
    }

    #[test]
    fn test_day_class_from_str() {
        for (weekday, label) in WEEKDAYS {
            let parsed = label.parse::<DayClass>().unwrap();
            assert_eq!(parsed, DayClass::Weekday(weekday));
        }
        assert_eq!("day".parse::<DayClass>().unwrap(), DayClass::CalendarDay);
        assert_eq!(
            "weekend day".parse::<DayClass>().unwrap(),
            DayClass::WeekendDay
        );
    }

    #[test]
    fn test_day_class_from_str_case_and_whitespace() {
        assert_eq!(
            " Monday ".parse::<DayClass>().unwrap(),
            DayClass::Weekday(Weekday::Mon)
        );
        assert_eq!(
            "WEEKEND DAY".parse::<DayClass>().unwrap(),
            DayClass::WeekendDay
        );
    }

    #[test]
    fn test_day_class_from_str_unknown() {
        let result = "fortnight".parse::<DayClass>();
        assert!(matches!(result, Err(ParseError::UnknownDayClass(_))));
    }

    #[test]
    fn test_ordinal_display_and_parse_round_trip() {
        let ordinals = [
            Ordinal::First,
            Ordinal::Second,
            Ordinal::Third,
            Ordinal::Fourth,
            Ordinal::Last,
        ];
        for ordinal in ordinals {
            let parsed = ordinal.to_string().parse::<Ordinal>().unwrap();
            assert_eq!(ordinal, parsed);
        }
    }

    #[test]
    fn test_ordinal_from_str_unknown() {
        let result = "fifth".parse::<Ordinal>();
        assert!(matches!(result, Err(ParseError::UnknownOrdinal(_))));
    }

    #[test]
    fn test_ordinal_position() {
        assert_eq!(Ordinal::First.position(), Some(1));
        assert_eq!(Ordinal::Second.position(), Some(2));
        assert_eq!(Ordinal::Third.position(), Some(3));
        assert_eq!(Ordinal::Fourth.position(), Some(4));
        assert_eq!(Ordinal::Last.position(), None);
    }

    #[test]
    fn test_mode_display_and_parse() {
        assert_eq!(Mode::Period.to_string(), "period");
        assert_eq!(Mode::Anchor.to_string(), "anchor");
        assert_eq!("period".parse::<Mode>().unwrap(), Mode::Period);
        assert_eq!("anchor".parse::<Mode>().unwrap(), Mode::Anchor);
        assert!(matches!(
            "chained".parse::<Mode>(),
            Err(ParseError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let json = serde_json::to_string(&DayClass::Weekday(Weekday::Wed)).unwrap();
        assert_eq!(json, r#""wednesday""#);
        let parsed: DayClass = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DayClass::Weekday(Weekday::Wed));

        let json = serde_json::to_string(&DayClass::WeekendDay).unwrap();
        assert_eq!(json, r#""weekend day""#);

        let json = serde_json::to_string(&Ordinal::Last).unwrap();
        assert_eq!(json, r#""last""#);
        let parsed: Ordinal = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Ordinal::Last);

        let json = serde_json::to_string(&Mode::Anchor).unwrap();
        assert_eq!(json, r#""anchor""#);
        let parsed: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Mode::Anchor);
    }

    #[test]
    fn test_serde_rejects_unknown_values() {
        let result: Result<DayClass, _> = serde_json::from_str(r#""someday""#);
        assert!(result.is_err());

        let result: Result<Ordinal, _> = serde_json::from_str(r#""fifth""#);
        assert!(result.is_err());
    }
}
