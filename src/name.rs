//! Identifier encoding.
//!
//! Names are restricted to a 64-character alphabet so each character fits in 6 bits. On the wire,
//! a name is a 6-bit length followed by one 6-bit code per character. The code is the
//! character's position in [`ALPHABET`]: digits, then lowercase, then uppercase, then `_` and `.`.

use crate::bits::{BitReader, BitWriter};
use crate::codec::BitCodec;
use crate::error::{Error, Result};

/// Every character a name may contain, in code order.
pub const ALPHABET: &[u8; 64] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_.";

const LENGTH_BITS: usize = 6;
const CHAR_BITS: usize = 6;

/// Longest name the length prefix can hold.
pub const MAX_NAME_LEN: usize = (1 << LENGTH_BITS) - 1;

const NO_CODE: u8 = 0xFF;
static CODES: [u8; 128] = build_codes();

const fn build_codes() -> [u8; 128] {
    let mut codes = [NO_CODE; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        codes[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    codes
}

/// The 6-bit code for a character, if it's in the alphabet.
pub fn code_of(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match CODES[ch as usize] {
        NO_CODE => None,
        code => Some(code),
    }
}

/// The character for a 6-bit code.
fn char_of(code: u8) -> char {
    ALPHABET[(code as usize) & (ALPHABET.len() - 1)] as char
}

/// Encodes and decodes identifiers: record, field, enum, symbol, and fixed names.
#[derive(Clone, Copy, Debug, Default)]
pub struct NameCodec;

impl BitCodec for NameCodec {
    type Item = String;

    fn validate(&self, name: &String) -> Result<()> {
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(Error::NameTooLong {
                max: MAX_NAME_LEN,
                actual: len,
            });
        }
        match name.chars().find(|ch| code_of(*ch).is_none()) {
            Some(ch) => Err(Error::InvalidCharacter {
                name: name.clone(),
                ch,
            }),
            None => Ok(()),
        }
    }

    fn size_of(&self, name: &String) -> Result<usize> {
        self.validate(name)?;
        Ok(LENGTH_BITS + name.len() * CHAR_BITS)
    }

    fn encode(&self, name: &String, buf: &mut BitWriter) -> Result<()> {
        self.validate(name)?;
        buf.append(name.len() as u64, LENGTH_BITS)?;
        for ch in name.chars() {
            let code = code_of(ch).ok_or_else(|| Error::InvalidCharacter {
                name: name.clone(),
                ch,
            })?;
            buf.append(code as u64, CHAR_BITS)?;
        }
        Ok(())
    }

    fn decode(&self, buf: &mut BitReader) -> Result<String> {
        let len = buf.read(LENGTH_BITS)? as usize;
        let mut name = String::with_capacity(len);
        for _ in 0..len {
            name.push(char_of(buf.read(CHAR_BITS)? as u8));
        }
        Ok(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn encode(name: &str) -> Result<Vec<u8>> {
        let mut w = BitWriter::new();
        NameCodec.encode(&name.to_string(), &mut w)?;
        Ok(w.into_bytes())
    }

    #[test]
    fn alphabet_codes() {
        assert_eq!(code_of('0'), Some(0));
        assert_eq!(code_of('9'), Some(9));
        assert_eq!(code_of('a'), Some(10));
        assert_eq!(code_of('b'), Some(11));
        assert_eq!(code_of('z'), Some(35));
        assert_eq!(code_of('A'), Some(36));
        assert_eq!(code_of('Z'), Some(61));
        assert_eq!(code_of('_'), Some(62));
        assert_eq!(code_of('.'), Some(63));
        for code in 0..64u8 {
            assert_eq!(code_of(char_of(code)), Some(code));
        }
        for ch in ['-', ' ', '$', '\0', 'é', '\u{7f}'] {
            assert_eq!(code_of(ch), None, "{:?} shouldn't have a code", ch);
        }
    }

    #[test]
    fn length_boundary() {
        let longest = "x".repeat(MAX_NAME_LEN);
        assert!(NameCodec.validate(&longest).is_ok());
        assert_eq!(NameCodec.size_of(&longest).unwrap(), 6 + 63 * 6);

        let too_long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            NameCodec.validate(&too_long),
            Err(Error::NameTooLong { max: 63, actual: 64 })
        );
        assert!(encode(&too_long).is_err());
    }

    #[test]
    fn bad_characters() {
        for name in ["my-name", "my name", "caf\u{e9}", "a/b"] {
            match NameCodec.validate(&name.to_string()) {
                Err(Error::InvalidCharacter { .. }) => (),
                other => panic!("{:?} should be rejected, got {:?}", name, other),
            }
        }
        assert_eq!(
            NameCodec.validate(&"ok_name.v2".to_string()),
            Ok(())
        );
    }

    #[test]
    fn wire_format() {
        // len=1, 'a'=10
        assert_eq!(encode("a").unwrap(), vec![0b0000_0100, 0b1010_0000]);
        // len=0
        assert_eq!(encode("").unwrap(), vec![0]);
    }

    #[test]
    fn decodes_in_order() {
        let bytes = encode("Zeta_9.x").unwrap();
        let mut r = BitReader::new(&bytes);
        assert_eq!(NameCodec.decode(&mut r).unwrap(), "Zeta_9.x");
        assert_eq!(r.position(), 6 + 8 * 6);
    }

    #[test]
    fn truncated() {
        let bytes = encode("abcd").unwrap();
        let mut r = BitReader::new(&bytes[..2]);
        match NameCodec.decode(&mut r) {
            Err(Error::BufferUnderflow { .. }) => (),
            other => panic!("expected underflow, got {:?}", other),
        }
    }
}
