//! Assembler for the [scpu](../scpu/index.html) virtual machine.
//!
//! The main entry point is [`assemble`](fn.assemble.html), which accepts a
//! program written in the SCPU assembly language and outputs the flat byte
//! image the emulator loads at address `0x0100`. There is no header and no
//! relocation; labels resolve to `0x0100 +` their byte offset.
//!
//! Parsing is implemented with [pest], and the [`Error`](type.Error.html)
//! type used by this crate is just a type alias of `pest::error::Error`,
//! so every diagnostic carries its source position and the pretty
//! formatting pest provides.
//!
//! # SCPU Assembly Language
//!
//! The language is line-oriented. Mnemonics, register names and labels are
//! case-insensitive. Comments start with `;` or `#` and run to the end of
//! the line. Numeric literals are decimal or hexadecimal with a `0x`
//! prefix; values wider than 16 bits wrap. Memory operands are written
//! `[address]`; I/O ports accept either a bare number or the bracketed
//! form.
//!
//! A label is written `NAME:` and may stand alone or share a line with an
//! instruction. Branch and call targets may name labels defined anywhere
//! in the file, including later lines.
//!
//! ## Registers
//!
//! `A`, `B`, `C`, `D` are general purpose; `SP` is the stack pointer and
//! `PC` the program counter.
//!
//! ## Mnemonics
//!
//! Mnemonic   | Short Description                      | Syntax
//! -----------|----------------------------------------|----------------------
//! `NOP`      | No-op                                  | `NOP`
//! `LOAD`     | Load immediate                         | `LOAD r, value`
//! `LOAD`     | Load 16-bit word from memory           | `LOAD r, [addr]`
//! `STORE`    | Store 16-bit word to memory            | `STORE [addr], r`
//! `MOV`      | Copy register                          | `MOV rd, rs`
//! `PUSH`     | Push register onto the stack           | `PUSH r`
//! `POP`      | Pop stack into register                | `POP r`
//! `ADD`      | Integer addition                       | `ADD r1, r2`
//! `ADDI`     | Integer addition immediate             | `ADDI r, value`
//! `SUB`      | Integer subtraction                    | `SUB r1, r2`
//! `SUBI`     | Integer subtraction immediate          | `SUBI r, value`
//! `MUL`      | Integer multiplication                 | `MUL r1, r2`
//! `DIV`      | Integer division (remainder into `r2`) | `DIV r1, r2`
//! `INC`      | Increment                              | `INC r`
//! `DEC`      | Decrement                              | `DEC r`
//! `AND`      | Bitwise and                            | `AND r1, r2`
//! `OR`       | Bitwise or                             | `OR r1, r2`
//! `XOR`      | Bitwise xor                            | `XOR r1, r2`
//! `NOT`      | Bitwise complement                     | `NOT r`
//! `SHL`      | Shift left                             | `SHL r, amount`
//! `SHR`      | Shift right                            | `SHR r, amount`
//! `CMP`      | Compare (flags only)                   | `CMP r1, r2`
//! `CMPI`     | Compare immediate                      | `CMPI r, value`
//! `JMP`      | Jump                                   | `JMP target`
//! `JZ`       | Jump if zero                           | `JZ target`
//! `JNZ`      | Jump if not zero                       | `JNZ target`
//! `JC`       | Jump if carry                          | `JC target`
//! `JNC`      | Jump if no carry                       | `JNC target`
//! `CALL`     | Call subroutine                        | `CALL target`
//! `RET`      | Return from subroutine                 | `RET`
//! `IN`       | Read byte from port                    | `IN r, port`
//! `OUT`      | Write byte to port                     | `OUT port, r`
//! `HLT`      | Halt                                   | `HLT`
//!
//! [pest]: https://docs.rs/pest/

mod instructions;
mod int_util;
mod labels;
mod parser;


use parser::{Rule, SASMParser};
use pest::iterators::Pair;
use pest::{Parser, Span};

pub type Error = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, Error>;

/// Assembles a source string into a flat byte image.
pub fn assemble(input: &str) -> Result<Vec<u8>> {
    assemble_parsed(parse(input)?)
}

fn new_parser_error(span: Span, message: String) -> Error {
    Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(SASMParser::parse(Rule::program, input)?.next().unwrap())
}

fn assemble_parsed(pair: Pair<Rule>) -> Result<Vec<u8>> {
    let (instructions, labels) = instructions::process_lines(pair)?;
    instructions::assemble_instructions(&instructions, &labels)
}
