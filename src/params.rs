pub mod constants;

use log::debug;
use thiserror::Error;

use self::constants::*;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("{name} must be at least {min}, got {value}")]
    TooSmall {
        name: &'static str,
        min: u32,
        value: u32,
    },
    #[error("{name} must be at most {max}, got {value}")]
    TooLarge {
        name: &'static str,
        max: u32,
        value: u32,
    },
}

/// The three sizing exponents nothing else depends on.
///
/// Only constructible through [`BaseParams::new`] or [`BaseParams::DEFAULT`],
/// so every value in circulation is safe to derive from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BaseParams {
    log_instr_mem_size: u32,
    log_stack_size: u32,
    log_heap_size: u32,
}

impl BaseParams {
    pub const DEFAULT: BaseParams = BaseParams {
        log_instr_mem_size: LOG_INSTR_MEM_SIZE,
        log_stack_size: LOG_STACK_SIZE,
        log_heap_size: LOG_HEAP_SIZE,
    };

    pub fn new(
        log_instr_mem_size: u32,
        log_stack_size: u32,
        log_heap_size: u32,
    ) -> Result<Self, ParamError> {
        check_range("LogInstrMemSize", log_instr_mem_size, 0)?;
        check_range("LogStackSize", log_stack_size, MIN_LOG_STACK_SIZE)?;
        check_range("LogHeapSize", log_heap_size, MIN_LOG_HEAP_SIZE)?;

        Ok(Self {
            log_instr_mem_size,
            log_stack_size,
            log_heap_size,
        })
    }

    pub fn log_instr_mem_size(&self) -> u32 {
        self.log_instr_mem_size
    }

    pub fn log_stack_size(&self) -> u32 {
        self.log_stack_size
    }

    pub fn log_heap_size(&self) -> u32 {
        self.log_heap_size
    }
}

impl Default for BaseParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// the fixed configuration must satisfy the same bounds `new` enforces
const _: () = {
    assert!(LOG_STACK_SIZE >= MIN_LOG_STACK_SIZE && LOG_STACK_SIZE <= MAX_LOG_SIZE);
    assert!(LOG_HEAP_SIZE >= MIN_LOG_HEAP_SIZE && LOG_HEAP_SIZE <= MAX_LOG_SIZE);
    assert!(LOG_INSTR_MEM_SIZE <= MAX_LOG_SIZE);
};

fn check_range(name: &'static str, value: u32, min: u32) -> Result<(), ParamError> {
    if value < min {
        return Err(ParamError::TooSmall { name, min, value });
    }

    if value > MAX_LOG_SIZE {
        return Err(ParamError::TooLarge {
            name,
            max: MAX_LOG_SIZE,
            value,
        });
    }

    Ok(())
}

/// A named parameter as it appears in the emitted declarations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub value: i64,
}

/// The fully populated parameter set: base values plus everything derived
/// from them. Immutable once built.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlatformParams {
    base: BaseParams,
    log_heap_size_minus_one: u32,
    log_scratchpad_size_minus_one: u32,
    gc_threshold: i64,
}

impl PlatformParams {
    pub const LEN: usize = 6;

    pub fn populate() -> Self {
        Self::derive(BaseParams::DEFAULT)
    }

    pub fn derive(base: BaseParams) -> Self {
        // heap size in cell pairs
        let log_heap_size_minus_one = base.log_heap_size - 1;
        debug!("LogHeapSizeMinusOne = {}", log_heap_size_minus_one);

        // gc scratchpad size in cell pairs
        let log_scratchpad_size_minus_one = log_heap_size_minus_one - 1;
        debug!("LogScratchpadSizeMinusOne = {}", log_scratchpad_size_minus_one);

        let gc_threshold = pow2(log_heap_size_minus_one)
            - pow2(base.log_stack_size - 1)
            - GC_THRESHOLD_MARGIN;
        debug!("GCThreshold = {}", gc_threshold);

        Self {
            base,
            log_heap_size_minus_one,
            log_scratchpad_size_minus_one,
            gc_threshold,
        }
    }

    pub fn base(&self) -> BaseParams {
        self.base
    }

    pub fn log_heap_size_minus_one(&self) -> u32 {
        self.log_heap_size_minus_one
    }

    pub fn log_scratchpad_size_minus_one(&self) -> u32 {
        self.log_scratchpad_size_minus_one
    }

    /// GC runs once the heap grows past this many cells.
    pub fn gc_threshold(&self) -> i64 {
        self.gc_threshold
    }

    /// All parameters in the order they were computed.
    pub fn entries(&self) -> [Param; Self::LEN] {
        [
            param("LogInstrMemSize", self.base.log_instr_mem_size.into()),
            param("LogStackSize", self.base.log_stack_size.into()),
            param("LogHeapSize", self.base.log_heap_size.into()),
            param("LogHeapSizeMinusOne", self.log_heap_size_minus_one.into()),
            param(
                "LogScratchpadSizeMinusOne",
                self.log_scratchpad_size_minus_one.into(),
            ),
            param("GCThreshold", self.gc_threshold),
        ]
    }
}

fn param(name: &'static str, value: i64) -> Param {
    Param { name, value }
}

fn pow2(exp: u32) -> i64 {
    2i64.pow(exp)
}
