//! 価格型
//!
//! 負にならない10進値。通貨は持たない。

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 商品価格（0以上の有限値）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(pub(crate) f64);

impl Price {
    /// 入力文字列から価格を解析
    ///
    /// 小数点には `.` と `,` のどちらも使える（`4,99` → 4.99）。
    /// 解析できない値を0に丸めることはしない。
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPrice);
        }

        let normalized = if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
            trimmed.replace(',', ".")
        } else {
            trimmed.to_string()
        };

        let value: f64 = normalized
            .parse()
            .map_err(|_| ValidationError::InvalidPrice(trimmed.to_string()))?;

        Self::new(value).map_err(|err| match err {
            ValidationError::NegativePrice(_) => ValidationError::NegativePrice(trimmed.to_string()),
            _ => ValidationError::InvalidPrice(trimmed.to_string()),
        })
    }

    /// 数値から価格を生成
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidPrice(value.to_string()));
        }
        if value < 0.0 {
            return Err(ValidationError::NegativePrice(value.to_string()));
        }
        // -0.0 を 0 にそろえる
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// 小数2桁の表示用文字列
    pub fn to_fixed(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// 最短の10進表現（`3.5`, `4`, `15.99`）。価格検索はこの表現に対して行う。
///
/// 1e-6 未満と 1e21 以上は指数表記（`1e-7`, `1e+21`）。
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value != 0.0 && !(1e-6..1e21).contains(&value) {
            let exp = format!("{:e}", value);
            match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, power)
                }
                _ => f.write_str(&exp),
            }
        } else {
            write!(f, "{}", value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!(Price::parse("4.99").unwrap().value(), 4.99);
        assert_eq!(Price::parse(" 12 ").unwrap().value(), 12.0);
    }

    #[test]
    fn test_parse_comma_separator() {
        assert_eq!(Price::parse("4,99").unwrap().value(), 4.99);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Price::parse("abc"),
            Err(ValidationError::InvalidPrice("abc".to_string()))
        );
        assert!(matches!(Price::parse("4.99zł"), Err(ValidationError::InvalidPrice(_))));
        assert!(matches!(Price::parse("1,000.50"), Err(ValidationError::InvalidPrice(_))));
        assert!(matches!(Price::parse("NaN"), Err(ValidationError::InvalidPrice(_))));
        assert!(matches!(Price::parse("inf"), Err(ValidationError::InvalidPrice(_))));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Price::parse("   "), Err(ValidationError::EmptyPrice));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(
            Price::parse("-1.5"),
            Err(ValidationError::NegativePrice("-1.5".to_string()))
        );
    }

    #[test]
    fn test_negative_zero_normalized() {
        let price = Price::parse("-0").unwrap();
        assert_eq!(price.to_string(), "0");
    }

    #[test]
    fn test_display_shortest() {
        assert_eq!(Price::new(3.50).unwrap().to_string(), "3.5");
        assert_eq!(Price::new(4.00).unwrap().to_string(), "4");
        assert_eq!(Price::new(15.99).unwrap().to_string(), "15.99");
    }

    #[test]
    fn test_display_exponent_at_extremes() {
        assert_eq!(Price::new(0.0000001).unwrap().to_string(), "1e-7");
        assert_eq!(Price::new(1e21).unwrap().to_string(), "1e+21");
        assert_eq!(Price::new(1.5e22).unwrap().to_string(), "1.5e+22");
        assert_eq!(Price::new(0.000001).unwrap().to_string(), "0.000001");
        assert_eq!(Price::new(0.0).unwrap().to_string(), "0");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(Price::new(3.5).unwrap().to_fixed(), "3.50");
        assert_eq!(Price::new(8.99).unwrap().to_fixed(), "8.99");
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-2.0").is_err());
        let price: Price = serde_json::from_str("2.5").expect("デシリアライズ失敗");
        assert_eq!(price.value(), 2.5);
    }
}
