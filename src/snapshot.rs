//! Persisted generator state.
//!
//! A snapshot is a fixed-size record:
//!
//!   magic       (5 bytes)  "pcg64"
//!   state       (16 bytes) high limb, then low limb, fixed64 each
//!   increment   (16 bytes) high limb, then low limb, fixed64 each
//!   has_cached  (1 byte)   0 or 1
//!   cached      (4 bytes)  fixed32, zero when has_cached is 0
//!   checksum    (4 bytes)  masked crc32c of everything above
//!
//! Decoding restores the generator exactly, including a pending
//! 32-bit half, so a restored stream continues where the saved one
//! stopped.

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::pcg64::Pcg64;
use crate::status::{Result, Status};
use crate::util::coding::{decode_fixed32, decode_fixed64, put_fixed32, put_fixed64};
use crate::util::crc32c;
use crate::util::uint128::U128;

static MAGIC: &[u8; 5] = b"pcg64";

pub const SNAPSHOT_SIZE: usize = 5 + 16 + 16 + 1 + 4 + 4;

// Offsets into the record.
const STATE_OFFSET: usize = 5;
const INC_OFFSET: usize = STATE_OFFSET + 16;
const FLAG_OFFSET: usize = INC_OFFSET + 16;
const CACHED_OFFSET: usize = FLAG_OFFSET + 1;
const CRC_OFFSET: usize = CACHED_OFFSET + 4;

// Every record starts with the magic, so its crc is computed once and
// extended with the body.
static MAGIC_CRC: Lazy<u32> = Lazy::new(|| crc32c::value(MAGIC));

pub fn encode(g: &Pcg64) -> Vec<u8> {
    let mut dst = Vec::with_capacity(SNAPSHOT_SIZE);
    dst.extend_from_slice(MAGIC);
    let state = g.state_limbs();
    let inc = g.increment_limbs();
    put_fixed64(&mut dst, state.high);
    put_fixed64(&mut dst, state.low);
    put_fixed64(&mut dst, inc.high);
    put_fixed64(&mut dst, inc.low);
    dst.push(g.cached32().is_some() as u8);
    put_fixed32(&mut dst, g.cached32().unwrap_or(0));
    let crc = crc32c::extend(*MAGIC_CRC, &dst[MAGIC.len()..]);
    put_fixed32(&mut dst, crc32c::mask(crc));
    dst
}

fn limb(src: &[u8], offset: usize) -> Result<u64> {
    decode_fixed64(&src[offset..]).ok_or_else(|| Status::corruption("truncated snapshot", ""))
}

fn word(src: &[u8], offset: usize) -> Result<u32> {
    decode_fixed32(&src[offset..]).ok_or_else(|| Status::corruption("truncated snapshot", ""))
}

pub fn decode(src: &[u8]) -> Result<Pcg64> {
    if src.len() != SNAPSHOT_SIZE {
        return Err(Status::corruption(
            "bad snapshot length", &format!("{} != {}", src.len(), SNAPSHOT_SIZE)));
    }
    if &src[..MAGIC.len()] != MAGIC {
        return Err(Status::corruption("bad snapshot magic", ""));
    }

    let expected = crc32c::unmask(word(src, CRC_OFFSET)?);
    let actual = crc32c::extend(*MAGIC_CRC, &src[MAGIC.len()..CRC_OFFSET]);
    if expected != actual {
        warn!("snapshot checksum mismatch: stored {:#010x}, computed {:#010x}", expected, actual);
        return Err(Status::corruption("snapshot checksum mismatch", ""));
    }

    let state = U128::new(limb(src, STATE_OFFSET)?, limb(src, STATE_OFFSET + 8)?);
    let inc = U128::new(limb(src, INC_OFFSET)?, limb(src, INC_OFFSET + 8)?);
    let cached = word(src, CACHED_OFFSET)?;
    let cached32 = match src[FLAG_OFFSET] {
        0 if cached == 0 => None,
        0 => return Err(Status::corruption("cached word without flag", "")),
        1 => Some(cached),
        f => return Err(Status::corruption("bad cached flag", &f.to_string())),
    };
    debug!("restored generator snapshot, cached half pending: {}", cached32.is_some());
    Pcg64::from_parts(state, inc, cached32)
}
