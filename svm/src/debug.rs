use scpu::constants;
use scpu::{Processor, RegisterId};

pub fn print_registers(processor: &Processor) {
    println!(
        "  A  = {:#06X}   B  = {:#06X}   C  = {:#06X}   D  = {:#06X}",
        processor.register(RegisterId::A),
        processor.register(RegisterId::B),
        processor.register(RegisterId::C),
        processor.register(RegisterId::D),
    );
    println!(
        "  SP = {:#06X}   PC = {:#06X}   FLAGS = [{}]   CYCLES = {}",
        processor.register(RegisterId::SP),
        processor.register(RegisterId::PC),
        processor.flags(),
        processor.cycles(),
    );
}

/// Dumps the stack from `SP` up to its initial position, newest entry
/// first.
pub fn print_stack(processor: &Processor) {
    let sp = processor.register(RegisterId::SP);
    if sp >= constants::INITIAL_SP {
        println!("  Stack: empty");
        return;
    }

    println!("  Stack:");
    let mut address = sp;
    while address < constants::INITIAL_SP {
        println!(
            "    {:#06X}: {:#06X}",
            address,
            processor.memory().read_u16(address)
        );
        address = address.wrapping_add(2);
    }
}

/// Hexdumps `length` bytes of memory starting at `start`, 16 per row.
pub fn print_memory(processor: &Processor, start: u16, length: u16) {
    let mut address = start;
    let mut remaining = length;
    while remaining > 0 {
        let row = remaining.min(16);
        print!("  {:#06X}:", address);
        for offset in 0..row {
            print!(" {:02X}", processor.memory().read_byte(address.wrapping_add(offset)));
        }
        println!();
        address = address.wrapping_add(row);
        remaining -= row;
    }
}

/// One trace line: cycle count, PC and the general registers before the
/// next step executes.
pub fn print_trace_line(processor: &Processor) {
    println!(
        "CYC={:10} PC={:04X} A={:04X} B={:04X} C={:04X} D={:04X} SP={:04X} F={}",
        processor.cycles(),
        processor.register(RegisterId::PC),
        processor.register(RegisterId::A),
        processor.register(RegisterId::B),
        processor.register(RegisterId::C),
        processor.register(RegisterId::D),
        processor.register(RegisterId::SP),
        processor.flags(),
    );
}
