//! PostgreSQL binary COPY framing.
//!
//! 11-byte signature, u32 flags, u32 extension length, then rows of
//! `u16 field count` followed by `u32 length + value` per field, all
//! big-endian, closed by a `0xFFFF` trailer.

use anyhow::Context;
use byteorder::BE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::io::Read;
use std::io::Write;

const SIGNATURE: &[u8; 11] = b"PGCOPY\n\xFF\r\n\0";
const TRAILER: u16 = 0xFFFF;

pub fn header<W: Write>(w: &mut W) -> anyhow::Result<()> {
    w.write_all(SIGNATURE).context("signature")?;
    w.write_u32::<BE>(0).context("flags")?;
    w.write_u32::<BE>(0).context("extension")?;
    Ok(())
}

pub fn trailer<W: Write>(w: &mut W) -> anyhow::Result<()> {
    w.write_u16::<BE>(TRAILER).context("trailer")
}

/// Writes one `(i64, i64)` row.
pub fn pair<W: Write>(w: &mut W, a: i64, b: i64) -> anyhow::Result<()> {
    w.write_u16::<BE>(2)?;
    w.write_u32::<BE>(size_of::<i64>() as u32)?;
    w.write_i64::<BE>(a)?;
    w.write_u32::<BE>(size_of::<i64>() as u32)?;
    w.write_i64::<BE>(b)?;
    Ok(())
}

/// Writes one `(i64, f64)` row.
pub fn entry<W: Write>(w: &mut W, a: i64, b: f64) -> anyhow::Result<()> {
    w.write_u16::<BE>(2)?;
    w.write_u32::<BE>(size_of::<i64>() as u32)?;
    w.write_i64::<BE>(a)?;
    w.write_u32::<BE>(size_of::<f64>() as u32)?;
    w.write_f64::<BE>(b)?;
    Ok(())
}

/// Checks the signature and skips the header extension.
pub fn verify<R: Read>(r: &mut R) -> anyhow::Result<()> {
    let mut signature = [0u8; 11];
    r.read_exact(&mut signature).context("read signature")?;
    anyhow::ensure!(&signature == SIGNATURE, "not a PGCOPY file");
    r.read_u32::<BE>().context("read flags")?;
    let extension = r.read_u32::<BE>().context("read extension length")?;
    std::io::copy(&mut r.take(extension as u64), &mut std::io::sink())?;
    Ok(())
}

/// Starts the next row. `None` at the trailer.
pub fn row<R: Read>(r: &mut R, fields: u16) -> anyhow::Result<Option<()>> {
    match r.read_u16::<BE>().context("read field count")? {
        TRAILER => Ok(None),
        n if n == fields => Ok(Some(())),
        n => Err(anyhow::anyhow!("expected {} fields per row, found {}", fields, n)),
    }
}

pub fn int<R: Read>(r: &mut R) -> anyhow::Result<i64> {
    width(r, size_of::<i64>())?;
    r.read_i64::<BE>().context("read i64 field")
}

pub fn float<R: Read>(r: &mut R) -> anyhow::Result<f64> {
    width(r, size_of::<f64>())?;
    r.read_f64::<BE>().context("read f64 field")
}

fn width<R: Read>(r: &mut R, expected: usize) -> anyhow::Result<()> {
    let n = r.read_u32::<BE>().context("read field length")?;
    anyhow::ensure!(n as usize == expected, "field is {} bytes, expected {}", n, expected);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framing() {
        let mut bytes = Vec::new();
        header(&mut bytes).unwrap();
        pair(&mut bytes, 3, -1).unwrap();
        entry(&mut bytes, 4, 0.5).unwrap();
        trailer(&mut bytes).unwrap();
        assert_eq!(bytes.len(), 19 + 2 * (2 + 4 + 8 + 4 + 8) + 2);
        let ref mut r = bytes.as_slice();
        verify(r).unwrap();
        assert!(row(r, 2).unwrap().is_some());
        assert_eq!((int(r).unwrap(), int(r).unwrap()), (3, -1));
        assert!(row(r, 2).unwrap().is_some());
        assert_eq!((int(r).unwrap(), float(r).unwrap()), (4, 0.5));
        assert!(row(r, 2).unwrap().is_none());
    }

    #[test]
    fn rejects_foreign_files() {
        let ref mut r = b"PGCOPY\n\xFF\r\n\x01\0\0\0\0\0\0\0\0".as_slice();
        assert!(verify(r).is_err());
        let mut bytes = Vec::new();
        header(&mut bytes).unwrap();
        bytes.extend_from_slice(&[0, 3]);
        let ref mut r = bytes.as_slice();
        verify(r).unwrap();
        assert!(row(r, 2).is_err());
    }
}
