/// Size of the flat address space in bytes.
pub const MEMORY_SIZE: usize = 65_536;

/// Number of registers in the register file (`A, B, C, D, SP, PC`).
pub const REGISTER_COUNT: usize = 6;

/// Program images are loaded here; labels resolve relative to this address.
pub const LOAD_ADDRESS: u16 = 0x0100;

/// The zero-initialized vector/metadata region below the load address.
pub const VECTOR_SIZE: usize = LOAD_ADDRESS as usize;

/// Largest image that fits between the load address and the end of memory.
pub const MAX_IMAGE_SIZE: usize = MEMORY_SIZE - VECTOR_SIZE;

/// Initial stack pointer; the stack grows downward from here.
pub const INITIAL_SP: u16 = 0xFEFF;

// Memory-mapped I/O. Byte accesses to these addresses are dispatched to the
// host or the timer instead of RAM (reads of STDOUT and writes of STDIN
// fall through to the underlying cell).
pub const PORT_STDOUT: u16 = 0xFF00;
pub const PORT_STDIN: u16 = 0xFF01;
pub const PORT_TIMER_CTRL: u16 = 0xFF02;
pub const PORT_TIMER_VALUE: u16 = 0xFF03;

// Flag register bits. The low nibble is reserved and never set.
pub const FLAG_ZERO: u8 = 0x80;
pub const FLAG_CARRY: u8 = 0x40;
pub const FLAG_NEGATIVE: u8 = 0x20;
pub const FLAG_OVERFLOW: u8 = 0x10;
