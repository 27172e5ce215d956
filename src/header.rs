/// Version tag written in front of every serialized pair.
///
/// Data written with one version stays readable by every later crate
/// version that still lists it as compatible. Bump only on an incompatible
/// payload layout change.
pub const FORMAT_VERSION: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatHeader {
    version: u16,
}

impl FormatHeader {
    pub fn new(version: u16) -> Self {
        FormatHeader { version }
    }

    /// Header for data written by this crate version.
    #[inline]
    pub fn current() -> Self {
        Self::new(FORMAT_VERSION)
    }

    #[inline]
    pub fn len_bytes() -> usize {
        2
    }

    #[inline]
    pub fn bytes(&self) -> [u8; 2] {
        self.version.to_le_bytes()
    }

    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self::new(u16::from_le_bytes(bytes))
    }

    #[inline]
    pub fn version(&self) -> u16 {
        self.version
    }

    /// Whether payloads tagged with this header can still be decoded.
    #[inline]
    pub fn is_compatible(&self) -> bool {
        (1..=FORMAT_VERSION).contains(&self.version)
    }
}
