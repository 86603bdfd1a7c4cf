use crate::render::composite::Frame;

/// 128-bit frame digest built from two independently seeded FNV-1a hashes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Digest of the frame dimensions followed by every pixel byte.
pub fn fingerprint_frame(frame: &Frame) -> FrameFingerprint {
    fingerprint_rgba(frame.width(), frame.height(), frame.data())
}

pub fn fingerprint_rgba(width: u32, height: u32, data: &[u8]) -> FrameFingerprint {
    let mut a = Fnv1a64::new(0xcbf29ce484222325);
    let mut b = Fnv1a64::new(0x9ae16a3b2f90404f);

    for v in [u64::from(width), u64::from(height), data.len() as u64] {
        a.write_u64(v);
        b.write_u64(v);
    }
    a.write_bytes(data);
    b.write_bytes(data);

    FrameFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

#[derive(Clone, Copy)]
struct Fnv1a64(u64);

impl Fnv1a64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        self.0 = h;
    }

    fn finish(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
