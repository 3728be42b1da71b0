// crates/checksums/src/crc64.rs

/// Generator polynomial of CRC-64/ECMA-182, MSB-first form.
pub const CRC64_ECMA_POLY: u64 = 0x42F0_E1EB_A9EA_3693;

/// Start value of CRC-64/ECMA-182.
pub const CRC_START_64_ECMA: u64 = 0x0000_0000_0000_0000;

/// Start value (and final xor) of CRC-64/WE.
pub const CRC_START_64_WE: u64 = 0xFFFF_FFFF_FFFF_FFFF;

/// Named start constants for the shared table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CrcStart {
    #[default]
    Ecma,
    We,
}

impl CrcStart {
    pub const fn value(self) -> u64 {
        match self {
            CrcStart::Ecma => CRC_START_64_ECMA,
            CrcStart::We => CRC_START_64_WE,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CrcStart::Ecma => "ecma",
            CrcStart::We => "we",
        }
    }
}

const fn build_tables() -> [[u64; 256]; 8] {
    let mut tables = [[0u64; 256]; 8];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u64) << 56;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000_0000_0000_0000 != 0 {
                (crc << 1) ^ CRC64_ECMA_POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        tables[0][i] = crc;
        i += 1;
    }
    // tables[k][b] folds byte `b` followed by `k` zero bytes.
    let mut k = 1;
    while k < 8 {
        let mut i = 0;
        while i < 256 {
            let prev = tables[k - 1][i];
            tables[k][i] = (prev << 8) ^ tables[0][(prev >> 56) as usize];
            i += 1;
        }
        k += 1;
    }
    tables
}

static CRC64_TABLES: [[u64; 256]; 8] = build_tables();

/// The 256-entry lookup table of [`CRC64_ECMA_POLY`].
pub fn crc64_table() -> &'static [u64; 256] {
    &CRC64_TABLES[0]
}

/// Folds a single byte into `crc`.
#[inline]
pub fn crc64_update_byte(crc: u64, byte: u8) -> u64 {
    (crc << 8) ^ CRC64_TABLES[0][((crc >> 56) ^ byte as u64) as usize & 0xff]
}

trait Crc64Kernel: Send + Sync {
    fn update(&self, crc: u64, data: &[u8]) -> u64;
}

struct Bytewise;

impl Crc64Kernel for Bytewise {
    fn update(&self, crc: u64, data: &[u8]) -> u64 {
        crc64_update_bytewise(crc, data)
    }
}

struct SlicingBy8;

impl Crc64Kernel for SlicingBy8 {
    fn update(&self, crc: u64, data: &[u8]) -> u64 {
        crc64_update_slicing8(crc, data)
    }
}

static BYTEWISE: Bytewise = Bytewise;
static SLICING_BY_8: SlicingBy8 = SlicingBy8;

/// Inputs shorter than this skip the slicing kernel; its word loop would run
/// at most once.
const SLICING_MIN_LEN: usize = 16;

fn select_kernel(len: usize) -> &'static dyn Crc64Kernel {
    if len >= SLICING_MIN_LEN {
        return &SLICING_BY_8;
    }
    &BYTEWISE
}

/// Folds every byte of `data` into `crc` and returns the new state.
///
/// The state can be carried across any number of calls; splitting the
/// input at arbitrary points does not change the result, reordering it
/// does. An empty slice leaves the state unchanged.
pub fn crc64_update(crc: u64, data: &[u8]) -> u64 {
    select_kernel(data.len()).update(crc, data)
}

#[inline]
#[doc(hidden)]
pub fn crc64_update_bytewise(mut crc: u64, data: &[u8]) -> u64 {
    for &b in data {
        crc = crc64_update_byte(crc, b);
    }
    crc
}

#[doc(hidden)]
pub fn crc64_update_slicing8(mut crc: u64, data: &[u8]) -> u64 {
    let t = &CRC64_TABLES;
    let mut chunks = data.chunks_exact(8);
    for chunk in &mut chunks {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        let v = crc ^ u64::from_be_bytes(word);
        crc = t[7][(v >> 56) as usize]
            ^ t[6][(v >> 48) as usize & 0xff]
            ^ t[5][(v >> 40) as usize & 0xff]
            ^ t[4][(v >> 32) as usize & 0xff]
            ^ t[3][(v >> 24) as usize & 0xff]
            ^ t[2][(v >> 16) as usize & 0xff]
            ^ t[1][(v >> 8) as usize & 0xff]
            ^ t[0][v as usize & 0xff];
    }
    crc64_update_bytewise(crc, chunks.remainder())
}

/// CRC-64/ECMA-182 of `data`.
pub fn crc64_ecma(data: &[u8]) -> u64 {
    crc64_update(CRC_START_64_ECMA, data)
}

/// CRC-64/WE of `data`.
pub fn crc64_we(data: &[u8]) -> u64 {
    crc64_update(CRC_START_64_WE, data) ^ CRC_START_64_WE
}

/// Incremental CRC-64 over the ECMA-182 table.
///
/// No final xor is applied by [`Crc64::value`]; the raw register is what
/// gets reported and carried forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc64 {
    state: u64,
}

impl Default for Crc64 {
    fn default() -> Self {
        Self::new(CrcStart::Ecma)
    }
}

impl Crc64 {
    pub fn new(start: CrcStart) -> Self {
        Self::with_state(start.value())
    }

    pub fn with_state(state: u64) -> Self {
        Self { state }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.state = crc64_update(self.state, data);
    }

    pub fn value(&self) -> u64 {
        self.state
    }
}
