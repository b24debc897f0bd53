//! Field descriptions given on the command line.
//!
//! A field is a string of bits whose layout on the wire never depends on
//! the width of the message words: decimal values are integers placed at
//! the low end of the field, hex values are bit strings read from their
//! first digit on.

use std::fmt;

use wirebits::message::bytes_for_bits;

/// The value of a field to pack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// A decimal integer, right-aligned in the field.
    Int(u128),
    /// A `0x`-prefixed hex bit string, left-aligned in the field.
    ///
    /// An odd number of digits is completed with a trailing zero nibble.
    Hex(Vec<u8>),
}

/// A field of `len` bits, given as `LEN:VALUE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub len: usize,
    pub value: FieldValue,
}

impl FieldSpec {
    /// Gets the network-order bytes whose leading `len` bits make up the
    /// field.
    pub fn to_bytes(&self) -> eyre::Result<Vec<u8>> {
        match &self.value {
            FieldValue::Int(value) => int_bytes(*value, self.len),
            FieldValue::Hex(bytes) => {
                let needed = bytes_for_bits(self.len);
                if bytes.len() < needed {
                    eyre::bail!(
                        "hex value holds {} bits, but the field is {} bits long",
                        bytes.len() * 8,
                        self.len
                    );
                }

                Ok(bytes[..needed].to_vec())
            }
        }
    }

    /// Whether packing the field drops set bits of its value.
    pub fn truncates(&self) -> bool {
        match &self.value {
            FieldValue::Int(value) => self.len < u128::BITS as usize && *value >> self.len != 0,
            FieldValue::Hex(bytes) => bytes.iter().enumerate().any(|(i, &b)| {
                let first = i * 8;
                if first + 8 <= self.len {
                    false
                } else if first >= self.len {
                    b != 0
                } else {
                    b & (0xff >> (self.len - first)) != 0
                }
            }),
        }
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            FieldValue::Int(v) => write!(f, "{}:{v}", self.len),
            FieldValue::Hex(bytes) => write!(f, "{}:{}", self.len, hex_string(bytes)),
        }
    }
}

fn int_bytes(value: u128, len: usize) -> eyre::Result<Vec<u8>> {
    if len > u128::BITS as usize {
        eyre::bail!("decimal values span at most 128 bits; use a 0x value for wider fields");
    }
    if len == 0 {
        return Ok(Vec::new());
    }

    let aligned = value << (u128::BITS - len as u32);
    Ok(aligned.to_be_bytes()[..bytes_for_bits(len)].to_vec())
}

/// Interprets the leading `len` bits of `bytes` as an unsigned integer.
///
/// Returns [`None`] for fields wider than 128 bits.
pub fn field_int(bytes: &[u8], len: usize) -> Option<u128> {
    if len > u128::BITS as usize {
        return None;
    }

    let used = &bytes[..bytes_for_bits(len)];
    let value = used.iter().fold(0u128, |acc, &b| (acc << 8) | b as u128);

    Some(value >> (used.len() * 8 - len))
}

/// Parses a `LEN:VALUE` field description.
pub fn parse_field(s: &str) -> Result<FieldSpec, String> {
    let (len, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LEN:VALUE, got '{s}'"))?;

    let len = len
        .parse()
        .map_err(|e| format!("invalid field length '{len}': {e}"))?;

    let value = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(digits) => FieldValue::Hex(parse_hex(digits)?),
        None => FieldValue::Int(
            value
                .parse()
                .map_err(|e| format!("invalid field value '{value}': {e}"))?,
        ),
    };

    Ok(FieldSpec { len, value })
}

fn parse_hex(digits: &str) -> Result<Vec<u8>, String> {
    if digits.is_empty() {
        return Err("hex value has no digits".to_owned());
    }

    let decoded = if digits.len() % 2 == 0 {
        hex::decode(digits)
    } else {
        hex::decode(format!("{digits}0"))
    };

    decoded.map_err(|e| format!("invalid hex value '0x{digits}': {e}"))
}

/// Formats `bytes` as a `0x`-prefixed hex string.
pub fn hex_string(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_and_hex_values() {
        assert_eq!(
            parse_field("12:2748"),
            Ok(FieldSpec {
                len: 12,
                value: FieldValue::Int(2748),
            })
        );
        assert_eq!(
            parse_field("12:0xabc"),
            Ok(FieldSpec {
                len: 12,
                value: FieldValue::Hex(vec![0xab, 0xc0]),
            })
        );
    }

    #[test]
    fn both_notations_give_the_same_bits() -> eyre::Result<()> {
        let int = parse_field("20:703710").map_err(eyre::Report::msg)?;
        let hex = parse_field("20:0xabcde").map_err(eyre::Report::msg)?;

        assert_eq!(int.to_bytes()?, [0xab, 0xcd, 0xe0]);
        assert_eq!(hex.to_bytes()?, [0xab, 0xcd, 0xe0]);
        assert_eq!(field_int(&hex.to_bytes()?, 20), Some(703710));

        Ok(())
    }

    #[test]
    fn field_bytes_cover_the_length() -> eyre::Result<()> {
        let wide = parse_field("148:0x0102030405060708a0b0c0d0e0f0a1b2bb4210")
            .map_err(eyre::Report::msg)?;
        assert_eq!(wide.to_bytes()?.len(), 19);
        assert!(!wide.truncates());
        assert_eq!(field_int(&wide.to_bytes()?, 148), None);

        let short = parse_field("17:0xffff").map_err(eyre::Report::msg)?;
        assert!(short.to_bytes().is_err());

        assert!(parse_field("129:1").map_err(eyre::Report::msg)?.to_bytes().is_err());
        let empty = parse_field("0:0").map_err(eyre::Report::msg)?;
        assert_eq!(empty.to_bytes()?, Vec::<u8>::new());

        Ok(())
    }

    #[test]
    fn truncation_is_detected() -> eyre::Result<()> {
        assert!(parse_field("4:16").map_err(eyre::Report::msg)?.truncates());
        assert!(!parse_field("4:15").map_err(eyre::Report::msg)?.truncates());
        assert!(parse_field("4:0xff").map_err(eyre::Report::msg)?.truncates());

        // The nibble completing an odd number of digits is not part of the value.
        assert!(!parse_field("12:0xabc").map_err(eyre::Report::msg)?.truncates());

        Ok(())
    }

    #[test]
    fn malformed_fields() {
        assert!(parse_field("12").is_err());
        assert!(parse_field("x:1").is_err());
        assert!(parse_field("12:0x").is_err());
        assert!(parse_field("12:0xfg").is_err());
        assert!(parse_field("12:-1").is_err());
    }

    #[test]
    fn display_round_trips() {
        let spec = parse_field("20:0xabcde").unwrap();
        assert_eq!(spec.to_string(), "20:0xabcde0");
        assert_eq!(parse_field(&spec.to_string()), Ok(spec));

        assert_eq!(hex_string(&[0x01, 0xff]), "0x01ff");
    }
}
