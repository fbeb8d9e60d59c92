/// Base sizing constants for the platform
///
/// Every other parameter is derived from these three exponents.

/// Instruction memory size, log2 of the number of instructions
pub const LOG_INSTR_MEM_SIZE: u32 = 11;

/// Stack size, log2 of the number of cells
pub const LOG_STACK_SIZE: u32 = 11;

/// Heap size, log2 of the number of cells
pub const LOG_HEAP_SIZE: u32 = 13;

/// Cells kept free below the GC threshold on top of half the stack
pub const GC_THRESHOLD_MARGIN: i64 = 32;

/// Smallest stack exponent with a defined half-stack term
pub const MIN_LOG_STACK_SIZE: u32 = 1;

/// Smallest heap exponent whose scratchpad exponent is non-negative
pub const MIN_LOG_HEAP_SIZE: u32 = 2;

/// Upper bound on any exponent so that powers of two fit in an i64
pub const MAX_LOG_SIZE: u32 = 61;
