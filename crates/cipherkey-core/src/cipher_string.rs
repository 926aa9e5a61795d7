//! Serialized `(iv, data, mac)` transport form.
//!
//! Text layout: `<type>.<iv>|<data>|<mac>`, every field standard base64 and
//! `<type>` fixed at [`CIPHER_STRING_TYPE`]. The bare `<iv>|<data>|<mac>`
//! layout is accepted on parse and assumed to carry the fixed type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::encoding::{from_base64, to_base64};
use crate::encrypted::EncryptedObject;
use crate::error::CryptoError;
use crate::params::CIPHER_STRING_TYPE;

/// Base64-encoded ciphertext triple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CipherString {
    iv: String,
    data: String,
    mac: String,
}

impl CipherString {
    /// Encode raw `iv`, `data` and `mac` bytes.
    #[must_use]
    pub fn from_parts(iv: &[u8], data: &[u8], mac: &[u8]) -> Self {
        Self {
            iv: to_base64(iv),
            data: to_base64(data),
            mac: to_base64(mac),
        }
    }

    /// Base64 IV field.
    #[must_use]
    pub fn iv(&self) -> &str {
        &self.iv
    }

    /// Base64 ciphertext field.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Base64 MAC field.
    #[must_use]
    pub fn mac(&self) -> &str {
        &self.mac
    }

    /// Decode the three fields into `(iv, data, mac)` bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Encoding` if any field is not valid base64.
    pub fn decode(&self) -> Result<(Vec<u8>, Vec<u8>, Vec<u8>), CryptoError> {
        Ok((
            from_base64(&self.iv)?,
            from_base64(&self.data)?,
            from_base64(&self.mac)?,
        ))
    }
}

impl From<&EncryptedObject<'_>> for CipherString {
    fn from(obj: &EncryptedObject<'_>) -> Self {
        Self::from_parts(obj.iv(), obj.data(), obj.mac())
    }
}

impl fmt::Display for CipherString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{CIPHER_STRING_TYPE}.{}|{}|{}",
            self.iv, self.data, self.mac
        )
    }
}

impl FromStr for CipherString {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = match s.split_once('.') {
            Some((tag, body)) => {
                if tag.parse::<u8>().ok() != Some(CIPHER_STRING_TYPE) {
                    return Err(CryptoError::InvalidArgument(format!(
                        "unsupported cipher string type: {tag:?}"
                    )));
                }
                body
            }
            None => s,
        };

        let mut fields = body.split('|');
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(iv), Some(data), Some(mac), None)
                if !iv.is_empty() && !data.is_empty() && !mac.is_empty() =>
            {
                Ok(Self {
                    iv: iv.to_owned(),
                    data: data.to_owned(),
                    mac: mac.to_owned(),
                })
            }
            _ => Err(CryptoError::Encoding(
                "cipher string must have three non-empty fields: iv|data|mac".into(),
            )),
        }
    }
}

impl TryFrom<String> for CipherString {
    type Error = CryptoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CipherString> for String {
    fn from(value: CipherString) -> Self {
        value.to_string()
    }
}
