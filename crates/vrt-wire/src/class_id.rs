//! Class identifiers.
//!
//! A class identifier distinguishes otherwise identically-typed packets. It
//! packs a 24-bit organizationally-unique identifier, a 16-bit information
//! class and a 16-bit packet class into the low 56 bits of a wire word pair,
//! and renders canonically as `XX-XX-XX:YYYY.ZZZZ` (e.g.
//! `FF-FF-FA:2011.0002`). The top byte is pad/reserved and zero on the wire.

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 64-bit packet class identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(u64);

impl ClassId {
    /// Wrap a raw 64-bit value as read off the wire.
    pub const fn from_raw(raw: u64) -> Self {
        ClassId(raw)
    }

    /// Build an identifier from its three parts. The OUI is masked to 24 bits.
    pub const fn from_parts(oui: u32, information_class: u16, packet_class: u16) -> Self {
        ClassId(
            ((oui as u64 & 0xFF_FFFF) << 32)
                | ((information_class as u64) << 16)
                | packet_class as u64,
        )
    }

    /// The raw 64-bit value as written to the wire.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// 24-bit organizationally-unique identifier.
    pub const fn oui(self) -> u32 {
        ((self.0 >> 32) & 0xFF_FFFF) as u32
    }

    /// 16-bit information class code.
    pub const fn information_class(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// 16-bit packet class code.
    pub const fn packet_class(self) -> u16 {
        self.0 as u16
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let oui = self.oui();
        write!(
            f,
            "{:02X}-{:02X}-{:02X}:{:04X}.{:04X}",
            (oui >> 16) & 0xFF,
            (oui >> 8) & 0xFF,
            oui & 0xFF,
            self.information_class(),
            self.packet_class(),
        )
    }
}

/// Parse the canonical `XX-XX-XX:YYYY.ZZZZ` form.
impl FromStr for ClassId {
    type Err = ParseClassIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseClassIdError {
            input: s.to_string(),
        };
        let (oui_part, rest) = s.split_once(':').ok_or_else(bad)?;
        let (info_part, class_part) = rest.split_once('.').ok_or_else(bad)?;

        let mut oui: u32 = 0;
        let mut octets = 0;
        for octet in oui_part.split('-') {
            if octet.len() != 2 {
                return Err(bad());
            }
            oui = (oui << 8) | u32::from_str_radix(octet, 16).map_err(|_| bad())?;
            octets += 1;
        }
        if octets != 3 || info_part.len() != 4 || class_part.len() != 4 {
            return Err(bad());
        }

        let info = u16::from_str_radix(info_part, 16).map_err(|_| bad())?;
        let class = u16::from_str_radix(class_part, 16).map_err(|_| bad())?;
        Ok(ClassId::from_parts(oui, info, class))
    }
}

/// Error returned when a class-id string is not in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid class identifier string: {input:?}")]
pub struct ParseClassIdError {
    pub input: String,
}

impl Serialize for ClassId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClassId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
