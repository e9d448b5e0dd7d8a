use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;

/// Date pattern passed to `TO_DATE` alongside every date literal.
pub const SQL_DATE_PATTERN: &str = "YYYY-MM-DD";

/// A monetary amount held as integer cents.
///
/// Prices are rounded once, when they are drawn, so the value written to the
/// script is exactly the value stored in the price book and copied into
/// order items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Round a decimal amount to the nearest cent.
    pub fn from_decimal(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiply by `factor` and round back to cents.
    pub fn scale(self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round() as i64)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// A generated value for one column of an INSERT statement.
///
/// `Text` uses `Cow<'static, str>` so values drawn from static tables
/// (category names, statuses, reasons) are borrowed, while faker output is
/// owned.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Money(Money),
    Text(Cow<'static, str>),
    Date(NaiveDate),
}

impl Value {
    /// Convert to a SQL literal suitable for an Oracle-style INSERT script.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Money(m) => m.to_string(),
            Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Value::Date(d) => format!(
                "TO_DATE('{}', '{}')",
                d.format("%Y-%m-%d"),
                SQL_DATE_PATTERN
            ),
        }
    }

    /// Convert to a CSV-friendly string.
    pub fn to_csv_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Int(i) => i.to_string(),
            Value::Money(m) => m.to_string(),
            Value::Text(s) => s.to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Money(m) => write!(f, "{}", m),
            Value::Text(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<Money> for Value {
    fn from(m: Money) -> Self {
        Value::Money(m)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(Cow::Owned(s))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_always_two_decimals() {
        assert_eq!(Money::from_cents(20000).to_string(), "200.00");
        assert_eq!(Money::from_cents(123450).to_string(), "1234.50");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
        assert_eq!(Money::from_cents(-150).to_string(), "-1.50");
    }

    #[test]
    fn test_money_rounding() {
        assert_eq!(Money::from_decimal(199.996).cents(), 20000);
        assert_eq!(Money::from_decimal(12.344).cents(), 1234);
        assert_eq!(Money::from_cents(1000).scale(0.6).cents(), 600);
    }

    #[test]
    fn test_string_literal_escapes_quotes() {
        let v = Value::from("O'Connor".to_string());
        assert_eq!(v.to_sql_literal(), "'O''Connor'");
    }

    #[test]
    fn test_date_literal_uses_to_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            Value::Date(d).to_sql_literal(),
            "TO_DATE('2024-03-07', 'YYYY-MM-DD')"
        );
    }

    #[test]
    fn test_optional_parent_becomes_null() {
        assert_eq!(Value::from(None::<i64>).to_sql_literal(), "NULL");
        assert_eq!(Value::from(Some(6_i64)).to_sql_literal(), "6");
    }
}
