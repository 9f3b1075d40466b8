use crate::int_util::*;
use crate::labels::*;
use crate::*;
use matches::debug_assert_matches;
use scpu::constants::{LOAD_ADDRESS, MEMORY_SIZE};
use scpu::{Instruction, Opcode, RegisterId};
use std::str::FromStr;
use util::ParseEnumError;

type InstrVec<'i> = Vec<ParsedInstruction<'i>>;

/// A branch or call destination: either a literal address or a label that
/// is resolved once the whole source has been seen.
#[derive(Debug, PartialEq)]
pub enum JumpTarget<'i> {
    Address(u16),
    Label(Span<'i>),
}

/// One processed source instruction.
///
/// Most instructions are complete as soon as their line is processed; only
/// branch/call targets naming a label stay open until
/// [`assemble_instructions`](fn.assemble_instructions.html) resolves them
/// against the finished symbol table, which is what makes forward
/// references work.
#[derive(Debug, PartialEq)]
pub enum ParsedInstruction<'i> {
    Complete(Instruction),
    Jump {
        opcode: Opcode,
        target: JumpTarget<'i>,
    },
}

impl<'i> ParsedInstruction<'i> {
    fn size(&self) -> u16 {
        match self {
            ParsedInstruction::Complete(instruction) => instruction.size(),
            // Opcode byte plus a 2-byte target.
            ParsedInstruction::Jump { .. } => 3,
        }
    }
}

fn process_enum<T: FromStr<Err = ParseEnumError>>(pair: &Pair<Rule>) -> Result<T> {
    pair.as_str()
        .to_uppercase()
        .parse()
        .map_err(|err| new_parser_error(pair.as_span(), format!("{}", err)))
}

fn process_register(pair: Pair<Rule>) -> Result<RegisterId> {
    process_enum(&pair)
}

fn process_mem_operand(pair: Pair<Rule>) -> Result<u16> {
    debug_assert_matches!(pair.as_rule(), Rule::mem_operand);
    process_int(pair.into_inner().next().unwrap())
}

fn process_port(pair: Pair<Rule>) -> Result<u16> {
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::mem_operand => process_mem_operand(inner),
        Rule::int => process_int(inner),
        _ => unreachable!(),
    }
}

fn process_jump_target<'i>(pair: Pair<'i, Rule>) -> Result<JumpTarget<'i>> {
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::int => Ok(JumpTarget::Address(process_int(inner)?)),
        Rule::identifier => Ok(JumpTarget::Label(inner.as_span())),
        _ => unreachable!(),
    }
}

fn process_instruction<'i>(pair: Pair<'i, Rule>, instr: &mut InstrVec<'i>) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);

    let inner = pair.into_inner().next().unwrap();
    let rule = inner.as_rule();
    let mut pairs = inner.into_inner();

    match rule {
        Rule::instr_load => {
            pairs.next().unwrap();
            let r = process_register(pairs.next().unwrap())?;
            let operand = pairs.next().unwrap();
            let instruction = match operand.as_rule() {
                Rule::mem_operand => Instruction::LoadMem(r, process_mem_operand(operand)?),
                Rule::int => Instruction::LoadImm(r, process_int(operand)?),
                _ => unreachable!(),
            };
            instr.push(ParsedInstruction::Complete(instruction));
        }
        Rule::instr_store => {
            pairs.next().unwrap();
            let address = process_mem_operand(pairs.next().unwrap())?;
            let r = process_register(pairs.next().unwrap())?;
            instr.push(ParsedInstruction::Complete(Instruction::Store(address, r)));
        }
        Rule::instr_in => {
            pairs.next().unwrap();
            let r = process_register(pairs.next().unwrap())?;
            let port = process_port(pairs.next().unwrap())?;
            instr.push(ParsedInstruction::Complete(Instruction::In(r, port)));
        }
        Rule::instr_out => {
            pairs.next().unwrap();
            let port = process_port(pairs.next().unwrap())?;
            let r = process_register(pairs.next().unwrap())?;
            instr.push(ParsedInstruction::Complete(Instruction::Out(port, r)));
        }
        Rule::instr_shift => {
            let opcode = process_enum(&pairs.next().unwrap())?;
            let r = process_register(pairs.next().unwrap())?;
            let amount = process_shift_amount(pairs.next().unwrap())?;
            let instruction = match opcode {
                Opcode::SHL => Instruction::Shl(r, amount),
                Opcode::SHR => Instruction::Shr(r, amount),
                _ => unreachable!(),
            };
            instr.push(ParsedInstruction::Complete(instruction));
        }
        Rule::instr_ri => {
            let opcode = process_enum(&pairs.next().unwrap())?;
            let r = process_register(pairs.next().unwrap())?;
            let value = process_int(pairs.next().unwrap())?;
            let instruction = match opcode {
                Opcode::ADDI => Instruction::AddImm(r, value),
                Opcode::SUBI => Instruction::SubImm(r, value),
                Opcode::CMPI => Instruction::CmpImm(r, value),
                _ => unreachable!(),
            };
            instr.push(ParsedInstruction::Complete(instruction));
        }
        Rule::instr_rr => {
            let opcode = process_enum(&pairs.next().unwrap())?;
            let r1 = process_register(pairs.next().unwrap())?;
            let r2 = process_register(pairs.next().unwrap())?;
            let instruction = match opcode {
                Opcode::MOV => Instruction::Mov(r1, r2),
                Opcode::ADD => Instruction::Add(r1, r2),
                Opcode::SUB => Instruction::Sub(r1, r2),
                Opcode::MUL => Instruction::Mul(r1, r2),
                Opcode::DIV => Instruction::Div(r1, r2),
                Opcode::AND => Instruction::And(r1, r2),
                Opcode::OR => Instruction::Or(r1, r2),
                Opcode::XOR => Instruction::Xor(r1, r2),
                Opcode::CMP => Instruction::Cmp(r1, r2),
                _ => unreachable!(),
            };
            instr.push(ParsedInstruction::Complete(instruction));
        }
        Rule::instr_r => {
            let opcode = process_enum(&pairs.next().unwrap())?;
            let r = process_register(pairs.next().unwrap())?;
            let instruction = match opcode {
                Opcode::PUSH => Instruction::Push(r),
                Opcode::POP => Instruction::Pop(r),
                Opcode::INC => Instruction::Inc(r),
                Opcode::DEC => Instruction::Dec(r),
                Opcode::NOT => Instruction::Not(r),
                _ => unreachable!(),
            };
            instr.push(ParsedInstruction::Complete(instruction));
        }
        Rule::instr_jump => {
            let opcode = process_enum(&pairs.next().unwrap())?;
            let target = process_jump_target(pairs.next().unwrap())?;
            instr.push(ParsedInstruction::Jump { opcode, target });
        }
        Rule::instr_plain => {
            let opcode = process_enum(&pairs.next().unwrap())?;
            let instruction = match opcode {
                Opcode::NOP => Instruction::Nop,
                Opcode::RET => Instruction::Ret,
                Opcode::HLT => Instruction::Hlt,
                _ => unreachable!(),
            };
            instr.push(ParsedInstruction::Complete(instruction));
        }
        _ => unreachable!(),
    }

    Ok(())
}

/// Processes every source line in order, defining labels at
/// `0x0100 + current offset` as they appear.
pub fn process_lines<'i>(pair: Pair<'i, Rule>) -> Result<(InstrVec<'i>, LabelMap)> {
    debug_assert_matches!(pair.as_rule(), Rule::program);

    let mut instructions = Vec::new();
    let mut labels = LabelMap::new();
    let mut address = u32::from(LOAD_ADDRESS);

    for line in pair.into_inner() {
        if line.as_rule() == Rule::EOI {
            continue;
        }
        debug_assert_matches!(line.as_rule(), Rule::line);

        for element in line.into_inner() {
            match element.as_rule() {
                Rule::label => define(&mut labels, element, address as u16)?,
                Rule::instruction => {
                    let span = element.as_span();
                    process_instruction(element, &mut instructions)?;
                    address += u32::from(instructions.last().unwrap().size());
                    if address > MEMORY_SIZE as u32 {
                        return Err(new_parser_error(
                            span,
                            "Program exceeds the 64 KiB address space".to_owned(),
                        ));
                    }
                }
                _ => unreachable!(),
            }
        }
    }

    Ok((instructions, labels))
}

fn jump_instruction(opcode: Opcode, target: u16) -> Instruction {
    match opcode {
        Opcode::JMP => Instruction::Jmp(target),
        Opcode::JZ => Instruction::Jz(target),
        Opcode::JNZ => Instruction::Jnz(target),
        Opcode::JC => Instruction::Jc(target),
        Opcode::JNC => Instruction::Jnc(target),
        Opcode::CALL => Instruction::Call(target),
        _ => unreachable!(),
    }
}

fn finalize_instruction(labels: &LabelMap, instr: &ParsedInstruction) -> Result<Instruction> {
    Ok(match instr {
        ParsedInstruction::Complete(instruction) => *instruction,
        ParsedInstruction::Jump { opcode, target } => {
            let address = match target {
                JumpTarget::Address(address) => *address,
                JumpTarget::Label(span) => lookup(labels, span)?,
            };
            jump_instruction(*opcode, address)
        }
    })
}

/// Resolves the deferred jump targets and encodes the final byte image.
pub fn assemble_instructions(instr: &[ParsedInstruction], labels: &LabelMap) -> Result<Vec<u8>> {
    let size = instr.iter().map(|i| usize::from(i.size())).sum();
    let mut result = Vec::with_capacity(size);

    for pi in instr {
        finalize_instruction(labels, pi)?.encode(&mut result);
    }

    Ok(result)
}
