use super::*;
use crate::constants;

#[test]
fn out_emits_low_byte() {
    let (_, host) = run(&program![
        LoadImm(A, 0xABCD),
        Out(constants::PORT_STDOUT, A),
        Hlt,
    ]);

    assert_eq!(host.output(), [0xCD]);
}

#[test]
fn in_reads_bytes_in_order() {
    let (processor, _) = run_program(
        &program![
            In(A, constants::PORT_STDIN),
            In(B, constants::PORT_STDIN),
            Hlt,
        ],
        b"hi",
    );

    assert_eq!(processor.register(A), u16::from(b'h'));
    assert_eq!(processor.register(B), u16::from(b'i'));
}

#[test]
fn in_reads_zero_at_end_of_input() {
    let (processor, _) = run_program(
        &program![
            In(A, constants::PORT_STDIN),
            In(B, constants::PORT_STDIN),
            Hlt,
        ],
        b"x",
    );

    assert_eq!(processor.register(A), u16::from(b'x'));
    assert_eq!(processor.register(B), 0);
}

#[test]
fn in_from_plain_memory_reads_the_cell() {
    let (processor, _) = run(&program![
        LoadImm(A, 0x1234),
        Store(0x2000, A),
        In(B, 0x2000),
        Hlt,
    ]);

    // A port number outside the port table is just a memory address, and
    // IN is a byte-wide read.
    assert_eq!(processor.register(B), 0x34);
}

#[test]
fn stdout_reads_and_stdin_writes_fall_through_to_ram() {
    let (processor, host) = run(&program![
        LoadImm(A, 0x42),
        Out(constants::PORT_STDIN, A), // plain RAM write
        In(B, constants::PORT_STDOUT), // plain RAM read
        Hlt,
    ]);

    assert!(host.output().is_empty());
    assert_eq!(processor.memory().read_byte(constants::PORT_STDIN), 0x42);
    assert_eq!(processor.register(B), 0);
}
