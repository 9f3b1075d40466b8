//! Emulation core for the SCPU-16 virtual machine: a didactic 16-bit
//! processor with six registers, a 64 KiB flat address space, four status
//! flags, memory-mapped host I/O and an instruction-counting timer.
//!
//! The [`Processor`](struct.Processor.html) owns the whole machine state;
//! host I/O is injected through the [`Host`](trait.Host.html) trait.
//! Programs are flat byte images loaded at `0x0100` (see the
//! [`constants`](constants/index.html) module), typically produced by the
//! `sasm` assembler crate.

pub mod constants;

mod host;
mod instructions;
mod memory;
mod processor;

pub use crate::host::{BufferHost, Host};
pub use crate::instructions::{
    pack_registers, register_index, DecodeError, Instruction, Opcode, RegisterId,
};
pub use crate::memory::Memory;
pub use crate::processor::{Error, Flags, Processor, Trap};

pub use util::Endian;
